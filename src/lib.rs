//! # Limit Book
//!
//! Single-instrument limit order book with price-time priority matching.
//!
//! ## Architecture
//!
//! - **Types**: Orders, sides, fills
//! - **OrderBook**: Resting records, per-side priority index, id lookup
//! - **Engine**: Crossing rule and the matching loop
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Identical request streams give identical fills and state roots
//! 2. **Integer Prices**: Prices compare as u64, never as floats
//! 3. **Single Writer**: One caller drives a book; there is no internal locking
//! 4. **Synchronous Execution**: Every call runs to completion
//!
//! ## Example
//!
//! ```
//! use limit_book::{Admission, Order, OrderBook, Side};
//!
//! let mut book = OrderBook::new();
//! book.add_order(&Order::limit(4, Side::Offer, 11, 2)).unwrap();
//! book.add_order(&Order::limit(3, Side::Offer, 12, 2)).unwrap();
//!
//! let admission = book.add_order(&Order::market(9, Side::Bid, 3)).unwrap();
//! let Admission::Executed(result) = admission else { unreachable!() };
//!
//! assert_eq!(result.fills.len(), 2);
//! assert_eq!(book.best_offer().map(|o| o.quantity), Some(1));
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Order, Side, OrderType, Fill
pub mod types;

/// Order book: records, priority index, lifecycle
pub mod orderbook;

/// Matching: crossing rule and matching loop
pub mod engine;

/// Error types
pub mod error;

/// Book configuration
pub mod config;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{Fill, Order, OrderId, OrderType, Price, Quantity, Side};
pub use orderbook::{Admission, OrderBook, PriorityIndex, RestingOrder};
pub use engine::MatchResult;
pub use error::{BookError, ConfigError, DigestError};
pub use config::BookConfig;
