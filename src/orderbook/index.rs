//! Priority index over resting orders.
//!
//! ## Design
//!
//! Each side is a `BTreeMap` keyed by a side-specific priority key whose
//! derived `Ord` *is* the matching priority, so the first entry is always
//! the best order:
//!
//! - **Bids**: `(Reverse(price), id)` - highest price first
//! - **Offers**: `(price, id)` - lowest price first
//!
//! Ties on price fall through to ascending id, the arrival surrogate. Two
//! distinct ids never compare equal, so every resting order is its own key.
//!
//! The map value holds the record's slab slot and its remaining quantity.
//! Quantity is not part of the key, so amending it keeps the position.
//!
//! ```text
//! bids:   (R(10), 1) -> {slot 0, qty 2}   <- best
//!         (R(9),  2) -> {slot 1, qty 2}
//! offers: (11, 4)    -> {slot 3, qty 2}   <- best
//!         (12, 3)    -> {slot 2, qty 2}
//! ```

use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::BookError;
use crate::orderbook::RestingOrder;
use crate::types::{OrderId, Price, Quantity, Side};

/// Ordering key for one side of the book.
///
/// Implementors must order best-first under their derived `Ord`.
pub trait PriorityKey: Ord + Copy + fmt::Debug {
    fn new(price: Price, id: OrderId) -> Self;

    fn price(&self) -> Price;

    fn order_id(&self) -> OrderId;

    #[inline]
    fn for_record(record: &RestingOrder) -> Self {
        Self::new(record.price, record.id)
    }
}

/// Bid priority: descending price, then ascending id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BidPriority {
    price: Reverse<Price>,
    id: OrderId,
}

impl PriorityKey for BidPriority {
    #[inline]
    fn new(price: Price, id: OrderId) -> Self {
        Self { price: Reverse(price), id }
    }

    #[inline]
    fn price(&self) -> Price {
        self.price.0
    }

    #[inline]
    fn order_id(&self) -> OrderId {
        self.id
    }
}

/// Offer priority: ascending price, then ascending id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AskPriority {
    price: Price,
    id: OrderId,
}

impl PriorityKey for AskPriority {
    #[inline]
    fn new(price: Price, id: OrderId) -> Self {
        Self { price, id }
    }

    #[inline]
    fn price(&self) -> Price {
        self.price
    }

    #[inline]
    fn order_id(&self) -> OrderId {
        self.id
    }
}

/// Value stored against a priority key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexEntry {
    /// Slab slot of the resting record
    pub slot: usize,

    /// Remaining quantity, always > 0 while resting
    pub quantity: Quantity,
}

/// One side of the book, ordered best-first by `K`.
#[derive(Debug, Clone)]
pub struct SideIndex<K> {
    entries: BTreeMap<K, IndexEntry>,
}

impl<K: PriorityKey> Default for SideIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PriorityKey> SideIndex<K> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Insert a new key.
    ///
    /// Fails with [`BookError::DuplicateOrderId`] if the key is already
    /// present; the existing entry is left untouched.
    pub fn insert(&mut self, key: K, entry: IndexEntry) -> Result<(), BookError> {
        use std::collections::btree_map::Entry;

        match self.entries.entry(key) {
            Entry::Occupied(_) => Err(BookError::DuplicateOrderId(key.order_id())),
            Entry::Vacant(vacant) => {
                vacant.insert(entry);
                Ok(())
            }
        }
    }

    pub fn remove(&mut self, key: &K) -> Option<IndexEntry> {
        self.entries.remove(key)
    }

    /// Top-priority entry, or `None` if the side is empty.
    #[inline]
    pub fn best(&self) -> Option<(K, IndexEntry)> {
        self.entries.first_key_value().map(|(key, entry)| (*key, *entry))
    }

    /// Overwrite the quantity of an existing key. Returns false if absent.
    pub fn set_quantity(&mut self, key: &K, quantity: Quantity) -> bool {
        match self.entries.get_mut(key) {
            Some(entry) => {
                entry.quantity = quantity;
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn get(&self, key: &K) -> Option<IndexEntry> {
        self.entries.get(key).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in priority order, best first.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &IndexEntry)> + '_ {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Both sides of the book.
///
/// Operations take the record (or a side) and dispatch to the bid or offer
/// index; direction lives in the key type, not in a runtime flag.
#[derive(Debug, Clone, Default)]
pub struct PriorityIndex {
    bids: SideIndex<BidPriority>,
    offers: SideIndex<AskPriority>,
}

impl PriorityIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        record: &RestingOrder,
        slot: usize,
        quantity: Quantity,
    ) -> Result<(), BookError> {
        let entry = IndexEntry { slot, quantity };
        match record.side {
            Side::Bid => self.bids.insert(BidPriority::for_record(record), entry),
            Side::Offer => self.offers.insert(AskPriority::for_record(record), entry),
        }
    }

    pub fn remove(&mut self, record: &RestingOrder) -> Option<IndexEntry> {
        match record.side {
            Side::Bid => self.bids.remove(&BidPriority::for_record(record)),
            Side::Offer => self.offers.remove(&AskPriority::for_record(record)),
        }
    }

    pub fn best(&self, side: Side) -> Option<IndexEntry> {
        match side {
            Side::Bid => self.bids.best().map(|(_, entry)| entry),
            Side::Offer => self.offers.best().map(|(_, entry)| entry),
        }
    }

    pub fn set_quantity(&mut self, record: &RestingOrder, quantity: Quantity) -> bool {
        match record.side {
            Side::Bid => self
                .bids
                .set_quantity(&BidPriority::for_record(record), quantity),
            Side::Offer => self
                .offers
                .set_quantity(&AskPriority::for_record(record), quantity),
        }
    }

    pub fn quantity(&self, record: &RestingOrder) -> Option<Quantity> {
        let entry = match record.side {
            Side::Bid => self.bids.get(&BidPriority::for_record(record)),
            Side::Offer => self.offers.get(&AskPriority::for_record(record)),
        };
        entry.map(|entry| entry.quantity)
    }

    pub fn len(&self, side: Side) -> usize {
        match side {
            Side::Bid => self.bids.len(),
            Side::Offer => self.offers.len(),
        }
    }

    pub fn is_empty(&self, side: Side) -> bool {
        self.len(side) == 0
    }

    /// Entries of one side in priority order, best first.
    pub fn entries(&self, side: Side) -> Box<dyn Iterator<Item = IndexEntry> + '_> {
        match side {
            Side::Bid => Box::new(self.bids.iter().map(|(_, entry)| *entry)),
            Side::Offer => Box::new(self.offers.iter().map(|(_, entry)| *entry)),
        }
    }

    pub fn clear(&mut self) {
        self.bids.clear();
        self.offers.clear();
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Order;

    fn record(id: OrderId, side: Side, price: Price) -> RestingOrder {
        RestingOrder::from_order(&Order::limit(id, side, price, 1))
    }

    #[test]
    fn test_bid_key_ordering() {
        // Higher price wins; equal price falls back to lower id
        assert!(BidPriority::new(10, 5) < BidPriority::new(9, 1));
        assert!(BidPriority::new(10, 1) < BidPriority::new(10, 2));
        assert_eq!(BidPriority::new(10, 1).price(), 10);
    }

    #[test]
    fn test_ask_key_ordering() {
        assert!(AskPriority::new(11, 9) < AskPriority::new(12, 1));
        assert!(AskPriority::new(11, 3) < AskPriority::new(11, 4));
        assert_eq!(AskPriority::new(11, 3).order_id(), 3);
    }

    #[test]
    fn test_side_index_best_and_remove() {
        let mut side: SideIndex<AskPriority> = SideIndex::new();
        assert!(side.best().is_none());

        side.insert(AskPriority::new(12, 3), IndexEntry { slot: 0, quantity: 2 })
            .unwrap();
        side.insert(AskPriority::new(11, 4), IndexEntry { slot: 1, quantity: 5 })
            .unwrap();

        let (key, entry) = side.best().unwrap();
        assert_eq!(key.order_id(), 4);
        assert_eq!(entry.quantity, 5);

        assert_eq!(side.remove(&key), Some(entry));
        assert_eq!(side.best().unwrap().0.order_id(), 3);
        assert!(side.remove(&key).is_none());
    }

    #[test]
    fn test_side_index_rejects_existing_key() {
        let mut side: SideIndex<BidPriority> = SideIndex::new();
        let key = BidPriority::new(10, 1);

        side.insert(key, IndexEntry { slot: 0, quantity: 2 }).unwrap();
        let err = side.insert(key, IndexEntry { slot: 1, quantity: 9 }).unwrap_err();

        assert_eq!(err, BookError::DuplicateOrderId(1));
        assert_eq!(side.get(&key), Some(IndexEntry { slot: 0, quantity: 2 }));
    }

    #[test]
    fn test_set_quantity_keeps_position() {
        let mut index = PriorityIndex::new();
        let first = record(1, Side::Bid, 10);
        let second = record(2, Side::Bid, 10);

        index.insert(&first, 0, 2).unwrap();
        index.insert(&second, 1, 2).unwrap();

        assert!(index.set_quantity(&first, 50));
        assert!(index.set_quantity(&second, 1));

        let best = index.best(Side::Bid).unwrap();
        assert_eq!(best, IndexEntry { slot: 0, quantity: 50 });
        assert_eq!(index.quantity(&second), Some(1));
    }

    #[test]
    fn test_set_quantity_absent() {
        let mut index = PriorityIndex::new();
        assert!(!index.set_quantity(&record(1, Side::Offer, 10), 3));
    }

    #[test]
    fn test_sides_are_independent() {
        let mut index = PriorityIndex::new();
        index.insert(&record(1, Side::Bid, 10), 0, 2).unwrap();
        index.insert(&record(2, Side::Bid, 9), 1, 2).unwrap();
        index.insert(&record(3, Side::Offer, 12), 2, 2).unwrap();
        index.insert(&record(4, Side::Offer, 11), 3, 2).unwrap();

        assert_eq!(index.len(Side::Bid), 2);
        assert_eq!(index.len(Side::Offer), 2);

        let bid_slots: Vec<usize> = index.entries(Side::Bid).map(|e| e.slot).collect();
        let offer_slots: Vec<usize> = index.entries(Side::Offer).map(|e| e.slot).collect();
        assert_eq!(bid_slots, vec![0, 1]);
        assert_eq!(offer_slots, vec![3, 2]);

        index.clear();
        assert!(index.is_empty(Side::Bid));
        assert!(index.is_empty(Side::Offer));
    }
}
