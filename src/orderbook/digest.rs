//! Deterministic digest of the resting book.
//!
//! Every resting order is SSZ-encoded as a fixed-size [`BookEntry`] and
//! hashed with SHA-256, bids first then offers, each side in priority
//! order. Two books that rest the same orders with the same quantities
//! produce the same root regardless of the slab slots they landed in.
//! The free-form venue tag enters as its own SHA-256 so the entry stays
//! fixed-size.

use sha2::{Digest, Sha256};
use ssz_rs::prelude::*;

use crate::error::DigestError;
use crate::orderbook::{OrderBook, RestingOrder};
use crate::types::{Quantity, Side};

/// Encoded form of one resting order.
///
/// ## SSZ Layout
///
/// Fixed-size container: 8+1+8+8+8+1+32 = 66 bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct BookEntry {
    pub id: u64,
    pub side_raw: u8,
    pub price: u64,
    pub quantity: u64,
    pub timestamp: u64,
    pub order_type_raw: u8,
    pub venue_hash: [u8; 32],
}

impl BookEntry {
    pub fn new(record: &RestingOrder, quantity: Quantity) -> Self {
        Self {
            id: record.id,
            side_raw: record.side.to_u8(),
            price: record.price,
            quantity,
            timestamp: record.timestamp,
            order_type_raw: record.order_type.to_u8(),
            venue_hash: Sha256::digest(record.venue.as_bytes()).into(),
        }
    }
}

/// SHA-256 over every resting entry of `book`.
pub fn compute_state_root(book: &OrderBook) -> Result<[u8; 32], DigestError> {
    let mut hasher = Sha256::new();

    for side in [Side::Bid, Side::Offer] {
        for (record, quantity) in book.resting(side) {
            let entry = BookEntry::new(record, quantity);
            let bytes = ssz_rs::serialize(&entry)
                .map_err(|err| DigestError::Encode(format!("{err:?}")))?;
            hasher.update(&bytes);
        }
    }

    let mut root = [0u8; 32];
    root.copy_from_slice(&hasher.finalize());
    Ok(root)
}

impl OrderBook {
    /// Digest of the resting orders; see [`compute_state_root`].
    pub fn state_root(&self) -> Result<[u8; 32], DigestError> {
        compute_state_root(self)
    }

    pub fn state_root_hex(&self) -> Result<String, DigestError> {
        self.state_root().map(hex::encode)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
