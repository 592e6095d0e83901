//! Configuration for an order book instance.
//!
//! Defaults can be overridden from the environment:
//!
//! - `BOOK_ORDER_CAPACITY` (default: "1024", at most 16777216)

use std::env;

use crate::error::ConfigError;

/// Default number of record slots pre-allocated by a book.
pub const DEFAULT_ORDER_CAPACITY: usize = 1024;

/// Largest pre-allocation accepted from configuration.
pub const MAX_ORDER_CAPACITY: usize = 1 << 24;

const ORDER_CAPACITY_KEY: &str = "BOOK_ORDER_CAPACITY";

/// Book configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookConfig {
    /// Resting orders to pre-allocate storage for.
    pub order_capacity: usize,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            order_capacity: DEFAULT_ORDER_CAPACITY,
        }
    }
}

impl BookConfig {
    /// Construct a `BookConfig` from environment variables, falling back
    /// to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`BookConfig::from_env`] with a caller-supplied variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let order_capacity = match lookup(ORDER_CAPACITY_KEY) {
            Some(value) => {
                let parsed = value.trim().parse::<usize>();
                let capacity = parsed.map_err(|source| ConfigError::InvalidValue {
                    key: ORDER_CAPACITY_KEY,
                    value,
                    source,
                })?;
                if capacity > MAX_ORDER_CAPACITY {
                    return Err(ConfigError::OutOfRange {
                        key: ORDER_CAPACITY_KEY,
                        value: capacity,
                        max: MAX_ORDER_CAPACITY,
                    });
                }
                capacity
            }
            None => DEFAULT_ORDER_CAPACITY,
        };

        Ok(Self { order_capacity })
    }
}
