//! Order book module.
//!
//! ## Architecture
//!
//! - **Slab-based storage**: resting records addressed by slot
//! - **Priority index**: one `BTreeMap` per side keyed by price then id
//! - **Id lookup**: `HashMap` from order id to slot for amend/cancel
//!
//! ## Components
//!
//! - [`RestingOrder`]: immutable identity, price and time of a resting order
//! - [`PriorityIndex`]: bid and offer ordering with remaining quantities
//! - [`OrderBook`]: lifecycle operations and best bid/offer
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Add order | O(log n) |
//! | Amend by ID | O(log n) |
//! | Cancel by ID | O(log n) |
//! | Best bid/offer | O(log n) |
//! | Match | O(k log n) for k resting orders hit |

pub mod record;
pub mod index;
pub mod book;
pub mod digest;

pub use record::RestingOrder;
pub use index::{AskPriority, BidPriority, IndexEntry, PriorityIndex, PriorityKey, SideIndex};
pub use book::{Admission, OrderBook};
pub use digest::{compute_state_root, BookEntry};
