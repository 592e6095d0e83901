//! Core data types for the limit book
//!
//! ## Types
//!
//! - [`Order`]: An incoming order request
//! - [`Side`]: Bid or Offer
//! - [`OrderType`]: Market or Limit
//! - [`Fill`]: A resting order consumed by matching
//!
//! Prices are plain u64 tick values and compare as integers.

mod order;
mod fill;

pub use order::{Order, OrderId, OrderType, Price, Quantity, Side};
pub use fill::Fill;
