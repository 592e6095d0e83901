//! Crossing check for limit aggressors.
//!
//! The rule is kept exactly as the venue defines it:
//!
//! ```text
//! no_improvement = resting_price > aggressor_price
//! crosses        = !(no_improvement XOR aggressor_is_bid)
//! ```
//!
//! Which works out to:
//!
//! | Aggressor | Crosses when                       |
//! |-----------|------------------------------------|
//! | Bid       | `resting_price > aggressor_price`  |
//! | Offer     | `resting_price <= aggressor_price` |
//!
//! Note this is the mirror image of the textbook bid >= ask rule: a bid
//! priced above every offer does *not* cross, a bid priced below them does.
//! Market aggressors never consult this check.

use crate::types::{Price, Side};

/// Whether a limit aggressor on `aggressor_side` at `aggressor_price` may
/// trade against a resting order at `resting_price`.
#[inline]
pub fn crosses(aggressor_side: Side, aggressor_price: Price, resting_price: Price) -> bool {
    let no_improvement = resting_price > aggressor_price;
    !(no_improvement ^ aggressor_side.is_bid())
}
