//! Error types for the limit book.
//!
//! Of the book operations only admission can fail. Amend and cancel of an
//! unknown id are no-ops, and queries on an empty side return `None`.

use thiserror::Error;

use crate::types::OrderId;

/// Errors returned by order admission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    /// The id is already resting on one of the sides.
    #[error("order {0} already rests on the book")]
    DuplicateOrderId(OrderId),

    /// A limit order cannot rest with nothing to trade.
    #[error("order {0} has zero quantity")]
    ZeroQuantity(OrderId),
}

/// Errors raised while computing the book state root.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigestError {
    #[error("failed to encode book entry: {0}")]
    Encode(String),
}

/// Errors raised while reading [`crate::config::BookConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {source}")]
    InvalidValue {
        key: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("{key} = {value} exceeds the maximum of {max}")]
    OutOfRange {
        key: &'static str,
        value: usize,
        max: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BookError::DuplicateOrderId(7).to_string(),
            "order 7 already rests on the book"
        );
        assert_eq!(BookError::ZeroQuantity(3).to_string(), "order 3 has zero quantity");
    }
}
