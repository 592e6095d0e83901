//! Incoming order types for the limit book.
//!
//! An [`Order`] is the caller-supplied request. Only limit orders ever rest
//! on the book; market orders exist only for the duration of a match.
//!
//! ## Prices
//!
//! Prices are u64 ticks. Matching only compares them and they are printed
//! as-is.

use std::fmt;

/// Order identifier, unique while the order rests.
pub type OrderId = u64;

/// Price in integer ticks.
pub type Price = u64;

/// Order quantity in whole units.
pub type Quantity = u64;

// ============================================================================
// Side enum
// ============================================================================

/// Order side: Bid or Offer
///
/// Represented as u8 in the state digest:
/// - Bid = 0
/// - Offer = 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Buy interest - best is the highest price
    #[default]
    Bid,
    /// Sell interest - best is the lowest price
    Offer,
}

impl Side {
    /// Convert to u8 for serialization
    pub fn to_u8(self) -> u8 {
        match self {
            Side::Bid => 0,
            Side::Offer => 1,
        }
    }

    /// Convert from u8 for deserialization
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Side::Bid),
            1 => Some(Side::Offer),
            _ => None,
        }
    }

    /// Returns the opposite side
    pub fn opposite(self) -> Self {
        match self {
            Side::Bid => Side::Offer,
            Side::Offer => Side::Bid,
        }
    }

    #[inline]
    pub fn is_bid(self) -> bool {
        self == Side::Bid
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Bid => f.write_str("bid"),
            Side::Offer => f.write_str("offer"),
        }
    }
}

// ============================================================================
// OrderType enum
// ============================================================================

/// Order type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderType {
    /// Executes against whatever rests on the opposite side, never rests
    Market,
    /// Rests at its price until matched or cancelled
    #[default]
    Limit,
}

impl OrderType {
    /// Convert to u8 for serialization
    pub fn to_u8(self) -> u8 {
        match self {
            OrderType::Market => 0,
            OrderType::Limit => 1,
        }
    }

    /// Convert from u8 for deserialization
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(OrderType::Market),
            1 => Some(OrderType::Limit),
            _ => None,
        }
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// An order request as submitted to the book.
///
/// `timestamp` and `venue` are carried through to fills but never affect
/// matching; time priority uses `id`.
///
/// ## Example
///
/// ```
/// use limit_book::types::{Order, OrderType, Side};
///
/// let order = Order::limit(1, Side::Bid, 10, 2).with_venue("T");
/// assert_eq!(order.order_type, OrderType::Limit);
/// assert_eq!(order.venue, "T");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Order {
    /// Arrival time in milliseconds (informational)
    pub timestamp: u64,

    /// Bid or offer
    pub side: Side,

    /// Caller-assigned identifier
    pub id: OrderId,

    /// Limit price; ignored for market orders
    pub price: Price,

    /// Remaining quantity to trade
    pub quantity: Quantity,

    /// Free-form venue tag
    pub venue: String,

    /// Market or limit
    pub order_type: OrderType,
}

impl Order {
    /// Create a new order
    ///
    /// # Arguments
    ///
    /// * `id` - Order identifier
    /// * `side` - Bid or Offer
    /// * `order_type` - Market or Limit
    /// * `price` - Fixed-point price (ignored for market orders)
    /// * `quantity` - Quantity to trade
    /// * `timestamp` - Arrival time in milliseconds
    pub fn new(
        id: OrderId,
        side: Side,
        order_type: OrderType,
        price: Price,
        quantity: Quantity,
        timestamp: u64,
    ) -> Self {
        Self {
            timestamp,
            side,
            id,
            price,
            quantity,
            venue: String::new(),
            order_type,
        }
    }

    /// Create a limit order with a zero timestamp and empty venue
    pub fn limit(id: OrderId, side: Side, price: Price, quantity: Quantity) -> Self {
        Self::new(id, side, OrderType::Limit, price, quantity, 0)
    }

    /// Create a market order; its price is left at zero
    pub fn market(id: OrderId, side: Side, quantity: Quantity) -> Self {
        Self::new(id, side, OrderType::Market, 0, quantity, 0)
    }

    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = venue.into();
        self
    }

    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    #[inline]
    pub fn is_bid(&self) -> bool {
        self.side.is_bid()
    }

    #[inline]
    pub fn is_market(&self) -> bool {
        self.order_type == OrderType::Market
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_conversion() {
        assert_eq!(Side::Bid.to_u8(), 0);
        assert_eq!(Side::Offer.to_u8(), 1);
        assert_eq!(Side::from_u8(0), Some(Side::Bid));
        assert_eq!(Side::from_u8(1), Some(Side::Offer));
        assert_eq!(Side::from_u8(2), None);
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Bid.opposite(), Side::Offer);
        assert_eq!(Side::Offer.opposite(), Side::Bid);
        assert!(Side::Bid.is_bid());
        assert!(!Side::Offer.is_bid());
    }

    #[test]
    fn test_order_type_conversion() {
        assert_eq!(OrderType::Market.to_u8(), 0);
        assert_eq!(OrderType::Limit.to_u8(), 1);
        assert_eq!(OrderType::from_u8(0), Some(OrderType::Market));
        assert_eq!(OrderType::from_u8(1), Some(OrderType::Limit));
        assert_eq!(OrderType::from_u8(7), None);
    }

    #[test]
    fn test_limit_constructor() {
        let order = Order::limit(3, Side::Offer, 12, 2)
            .with_venue("T")
            .with_timestamp(1703577600000);

        assert_eq!(order.id, 3);
        assert_eq!(order.side, Side::Offer);
        assert_eq!(order.price, 12);
        assert_eq!(order.quantity, 2);
        assert_eq!(order.venue, "T");
        assert_eq!(order.timestamp, 1703577600000);
        assert!(!order.is_market());
    }

    #[test]
    fn test_market_constructor() {
        let order = Order::market(9, Side::Bid, 4);

        assert!(order.is_market());
        assert!(order.is_bid());
        assert_eq!(order.price, 0);
        assert!(order.venue.is_empty());
    }
}
