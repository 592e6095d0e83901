//! Resting-order records.
//!
//! ## Design
//!
//! A `RestingOrder` is the immutable part of an admitted limit order: every
//! field except quantity. Quantity lives next to the record's priority key
//! in the [`crate::orderbook::PriorityIndex`], so amending it never moves
//! or re-keys the record.
//!
//! Records are stored in the book's slab and addressed by slot.

use crate::types::{Order, OrderId, OrderType, Price, Quantity, Side};

/// Identity, price and time fields of an order resting on the book.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RestingOrder {
    pub timestamp: u64,
    pub side: Side,
    pub id: OrderId,
    pub price: Price,
    pub venue: String,
    pub order_type: OrderType,
}

impl RestingOrder {
    /// Build the record for an admitted order, dropping its quantity.
    ///
    /// # Example
    ///
    /// ```
    /// use limit_book::orderbook::RestingOrder;
    /// use limit_book::types::{Order, Side};
    ///
    /// let order = Order::limit(1, Side::Bid, 10, 2).with_venue("T");
    /// let record = RestingOrder::from_order(&order);
    ///
    /// assert_eq!(record.to_order(2), order);
    /// ```
    pub fn from_order(order: &Order) -> Self {
        Self {
            timestamp: order.timestamp,
            side: order.side,
            id: order.id,
            price: order.price,
            venue: order.venue.clone(),
            order_type: order.order_type,
        }
    }

    /// Reconstitute an order-shaped view with the given quantity.
    pub fn to_order(&self, quantity: Quantity) -> Order {
        Order {
            timestamp: self.timestamp,
            side: self.side,
            id: self.id,
            price: self.price,
            quantity,
            venue: self.venue.clone(),
            order_type: self.order_type,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
