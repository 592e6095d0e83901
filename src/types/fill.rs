//! Fill records produced by matching.

use crate::types::{Order, OrderId, Price, Quantity};

/// A resting order consumed (fully or partially) by an aggressor.
///
/// `resting` is the resting order as it stood when it was hit: on a partial
/// fill its `quantity` is the amount resting *before* the reduction, not the
/// amount traded. The traded amount is `executed`.
///
/// ## Example
///
/// ```
/// use limit_book::types::{Fill, Order, Side};
///
/// let resting = Order::limit(4, Side::Offer, 11, 5);
/// let fill = Fill::new(resting, 2);
///
/// assert_eq!(fill.resting.quantity, 5);
/// assert_eq!(fill.executed, 2);
/// assert!(!fill.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fill {
    /// Snapshot of the resting order when it was matched
    pub resting: Order,

    /// Quantity actually transacted against it
    pub executed: Quantity,
}

impl Fill {
    pub fn new(resting: Order, executed: Quantity) -> Self {
        Self { resting, executed }
    }

    #[inline]
    pub fn order_id(&self) -> OrderId {
        self.resting.id
    }

    /// Execution price: always the resting order's price
    #[inline]
    pub fn price(&self) -> Price {
        self.resting.price
    }

    /// True when the resting order left the book as a result of this fill
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.executed >= self.resting.quantity
    }

    /// Quantity still resting after this fill
    #[inline]
    pub fn leaves_quantity(&self) -> Quantity {
        self.resting.quantity.saturating_sub(self.executed)
    }

    /// Traded value in price units: `executed * price`, widened so it
    /// cannot overflow
    #[inline]
    pub fn notional(&self) -> u128 {
        u128::from(self.resting.price) * u128::from(self.executed)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
