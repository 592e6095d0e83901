//! Matching algorithm.
//!
//! An aggressor repeatedly takes the best resting order on the opposite
//! side until one of:
//!
//! 1. its remaining quantity reaches zero,
//! 2. the opposite side is empty,
//! 3. a limit aggressor no longer crosses the best resting price.
//!
//! Per resting order hit:
//!
//! | Case                  | Book effect                     | Fill reports            |
//! |-----------------------|---------------------------------|-------------------------|
//! | remaining < resting   | resting reduced by `remaining`  | pre-reduction quantity  |
//! | remaining == resting  | resting removed                 | resting quantity        |
//! | remaining > resting   | resting removed, keep going     | resting quantity        |
//!
//! The aggressor is never mutated; its unconsumed quantity comes back in
//! [`MatchResult::remaining`].

use tracing::{debug, trace};

use crate::engine::crossing;
use crate::orderbook::OrderBook;
use crate::types::{Fill, Order, Quantity};

/// Outcome of matching one aggressor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    /// Resting orders hit, in consumption order
    pub fills: Vec<Fill>,

    /// Aggressor quantity left unmatched
    pub remaining: Quantity,
}

impl MatchResult {
    /// No resting order was touched.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fills.is_empty()
    }

    #[inline]
    pub fn fully_filled(&self) -> bool {
        self.remaining == 0
    }

    /// Total quantity the aggressor traded.
    pub fn executed_quantity(&self) -> Quantity {
        self.fills.iter().map(|fill| fill.executed).sum()
    }

    /// The resting order snapshots, in consumption order.
    pub fn filled_orders(&self) -> Vec<Order> {
        self.fills.iter().map(|fill| fill.resting.clone()).collect()
    }
}

/// Match `aggressor` against the opposite side of `book`.
///
/// An empty opposite side yields no fills and leaves the full quantity in
/// `remaining`. So does a zero-quantity aggressor.
pub fn match_order(book: &mut OrderBook, aggressor: &Order) -> MatchResult {
    let contra = aggressor.side.opposite();
    let mut remaining = aggressor.quantity;
    let mut fills = Vec::new();

    while remaining > 0 {
        let Some(resting) = book.best_order(contra) else {
            debug!(
                aggressor_id = aggressor.id,
                side = %contra,
                remaining,
                "opposite side empty, stopping"
            );
            break;
        };

        if !aggressor.is_market()
            && !crossing::crosses(aggressor.side, aggressor.price, resting.price)
        {
            break;
        }

        let executed = remaining.min(resting.quantity);
        if executed < resting.quantity {
            book.update_order(resting.id, resting.quantity - executed);
        } else {
            book.delete_order(resting.id);
        }
        remaining -= executed;

        trace!(
            aggressor_id = aggressor.id,
            resting_id = resting.id,
            price = resting.price,
            executed,
            "fill"
        );
        fills.push(Fill::new(resting, executed));
    }

    debug!(
        aggressor_id = aggressor.id,
        fills = fills.len(),
        remaining,
        "match complete"
    );

    MatchResult { fills, remaining }
}

// ============================================================================
// Unit Tests
// ============================================================================
