//! Single-instrument order book.
//!
//! ## Architecture
//!
//! - **Slab**: storage for [`RestingOrder`] records, addressed by slot
//! - **HashMap**: order id to slot, for amend and cancel by id
//! - **PriorityIndex**: per-side ordering of slots with remaining quantity
//!
//! An id is in the lookup iff its record is in the slab iff it has exactly
//! one entry in the index. Every mutation below keeps the three in step.
//!
//! ## Example
//!
//! ```
//! use limit_book::orderbook::OrderBook;
//! use limit_book::types::{Order, Side};
//!
//! let mut book = OrderBook::with_capacity(16);
//!
//! book.add_order(&Order::limit(1, Side::Bid, 10, 2)).unwrap();
//! book.add_order(&Order::limit(3, Side::Offer, 12, 2)).unwrap();
//!
//! assert_eq!(book.best_bid().map(|o| o.id), Some(1));
//! assert_eq!(book.best_offer().map(|o| o.id), Some(3));
//! assert_eq!(book.spread(), Some(2));
//! ```

use std::collections::HashMap;

use slab::Slab;
use tracing::{debug, warn};

use crate::config::BookConfig;
use crate::engine::{matcher, MatchResult};
use crate::error::BookError;
use crate::orderbook::{PriorityIndex, RestingOrder};
use crate::types::{Order, OrderId, Price, Quantity, Side};

/// What happened to an order passed to [`OrderBook::add_order`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    /// Limit order now rests on the book.
    Rested,
    /// Market order was matched against the opposite side.
    Executed(MatchResult),
}

/// Limit order book for one instrument.
#[derive(Debug)]
pub struct OrderBook {
    /// Resting records
    records: Slab<RestingOrder>,

    /// Order ID to slab slot
    order_index: HashMap<OrderId, usize>,

    /// Bid and offer priority
    index: PriorityIndex,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderBook {
    pub fn new() -> Self {
        Self {
            records: Slab::new(),
            order_index: HashMap::new(),
            index: PriorityIndex::new(),
        }
    }

    /// Create a book with storage pre-allocated for `order_capacity` orders.
    pub fn with_capacity(order_capacity: usize) -> Self {
        Self {
            records: Slab::with_capacity(order_capacity),
            order_index: HashMap::with_capacity(order_capacity),
            index: PriorityIndex::new(),
        }
    }

    pub fn with_config(config: &BookConfig) -> Self {
        Self::with_capacity(config.order_capacity)
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Submit an order.
    ///
    /// Market orders go straight to [`OrderBook::process_order`] and never
    /// touch the id lookup. Limit orders are admitted to rest on their side
    /// without a crossing check.
    ///
    /// # Errors
    ///
    /// * [`BookError::DuplicateOrderId`] if the id already rests
    /// * [`BookError::ZeroQuantity`] for a limit order with nothing to rest
    ///
    /// The book is unchanged on error.
    pub fn add_order(&mut self, order: &Order) -> Result<Admission, BookError> {
        if order.is_market() {
            return Ok(Admission::Executed(self.process_order(order)));
        }

        if order.quantity == 0 {
            warn!(order_id = order.id, "rejecting limit order with zero quantity");
            return Err(BookError::ZeroQuantity(order.id));
        }

        if self.order_index.contains_key(&order.id) {
            warn!(order_id = order.id, "rejecting duplicate order id");
            return Err(BookError::DuplicateOrderId(order.id));
        }

        let slot = self.records.insert(RestingOrder::from_order(order));
        if let Err(err) = self.index.insert(&self.records[slot], slot, order.quantity) {
            self.records.remove(slot);
            return Err(err);
        }
        self.order_index.insert(order.id, slot);

        debug!(
            order_id = order.id,
            side = %order.side,
            price = order.price,
            quantity = order.quantity,
            "order rested"
        );

        Ok(Admission::Rested)
    }

    /// Set the remaining quantity of a resting order.
    ///
    /// Priority is unchanged. A quantity of zero cancels the order, since
    /// nothing rests at zero. Unknown ids are ignored.
    pub fn update_order(&mut self, id: OrderId, quantity: Quantity) {
        let Some(&slot) = self.order_index.get(&id) else {
            debug!(order_id = id, "amend of unknown order ignored");
            return;
        };

        if quantity == 0 {
            self.delete_order(id);
            return;
        }

        self.index.set_quantity(&self.records[slot], quantity);
        debug!(order_id = id, quantity, "order amended");
    }

    /// Cancel a resting order.
    ///
    /// Returns the order as it stood, or `None` (and does nothing) if the id
    /// is not resting.
    pub fn delete_order(&mut self, id: OrderId) -> Option<Order> {
        let slot = self.order_index.remove(&id)?;
        let record = self.records.remove(slot);
        let quantity = self
            .index
            .remove(&record)
            .map(|entry| entry.quantity)
            .unwrap_or_default();

        debug!(order_id = id, quantity, "order removed");
        Some(record.to_order(quantity))
    }

    /// Match an aggressor against the opposite side.
    ///
    /// The aggressor itself never rests; see [`matcher::match_order`].
    pub fn process_order(&mut self, aggressor: &Order) -> MatchResult {
        matcher::match_order(self, aggressor)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Highest-priority bid with its current quantity.
    pub fn best_bid(&self) -> Option<Order> {
        self.best_order(Side::Bid)
    }

    /// Highest-priority offer with its current quantity.
    pub fn best_offer(&self) -> Option<Order> {
        self.best_order(Side::Offer)
    }

    pub fn best_order(&self, side: Side) -> Option<Order> {
        let entry = self.index.best(side)?;
        self.records
            .get(entry.slot)
            .map(|record| record.to_order(entry.quantity))
    }

    /// Resting order by id with its current quantity.
    pub fn get_order(&self, id: OrderId) -> Option<Order> {
        let slot = *self.order_index.get(&id)?;
        let record = self.records.get(slot)?;
        let quantity = self.index.quantity(record)?;
        Some(record.to_order(quantity))
    }

    #[inline]
    pub fn contains_order(&self, id: OrderId) -> bool {
        self.order_index.contains_key(&id)
    }

    /// Best offer price minus best bid price, when both sides rest and the
    /// offer is not below the bid.
    pub fn spread(&self) -> Option<Price> {
        let bid = self.best_bid()?.price;
        let offer = self.best_offer()?.price;
        offer.checked_sub(bid)
    }

    /// Up to `levels` resting orders of one side, best first.
    pub fn depth(&self, side: Side, levels: usize) -> Vec<Order> {
        self.resting(side)
            .take(levels)
            .map(|(record, quantity)| record.to_order(quantity))
            .collect()
    }

    /// Records of one side with their quantities, best first.
    pub fn resting(&self, side: Side) -> impl Iterator<Item = (&RestingOrder, Quantity)> + '_ {
        self.index
            .entries(side)
            .filter_map(|entry| self.records.get(entry.slot).map(|r| (r, entry.quantity)))
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    #[inline]
    pub fn capacity(&self) -> usize {
        self.records.capacity()
    }

    #[inline]
    pub fn order_count(&self) -> usize {
        self.order_index.len()
    }

    #[inline]
    pub fn bid_count(&self) -> usize {
        self.index.len(Side::Bid)
    }

    #[inline]
    pub fn offer_count(&self) -> usize {
        self.index.len(Side::Offer)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order_index.is_empty()
    }

    /// Remove every resting order.
    pub fn clear(&mut self) {
        self.records.clear();
        self.order_index.clear();
        self.index.clear();
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
