//! Matching for the limit book.
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Same book and aggressor always produce the same fills
//! 2. **No Resting Aggressors**: The aggressor never enters the book
//! 3. **Explicit Remainder**: Unmatched quantity is returned, not written back
//! 4. **Price-Time Priority**: Best price first, then lowest id
//!
//! ## Example
//!
//! ```
//! use limit_book::orderbook::OrderBook;
//! use limit_book::types::{Order, Side};
//!
//! let mut book = OrderBook::new();
//! book.add_order(&Order::limit(1, Side::Bid, 10, 2)).unwrap();
//! book.add_order(&Order::limit(2, Side::Bid, 9, 2)).unwrap();
//!
//! let result = book.process_order(&Order::market(0, Side::Offer, 4));
//!
//! assert_eq!(result.fills.len(), 2);
//! assert!(result.fully_filled());
//! assert!(book.best_bid().is_none());
//! ```

pub mod crossing;
pub mod matcher;

pub use crossing::crosses;
pub use matcher::{match_order, MatchResult};
