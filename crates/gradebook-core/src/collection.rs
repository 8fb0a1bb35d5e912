//! # Collections
//!
//! Ordered record storage for one entity kind.
//!
//! This module defines the [`Repository`] trait and its only implementation,
//! [`Collection`]. Records are kept in insertion order in a `Vec` and found by
//! linear scan; the datasets are small and order is part of the contract.

use crate::record::{Record, RecordId};
use std::collections::BTreeSet;

// =============================================================================
// ID STRATEGY
// =============================================================================

/// How a collection picks the id of the next added record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// One past the highest id ever issued by (or loaded into) the collection.
    /// Ids are never reused, even after deletions.
    ///
    /// Once `RecordId::MAX` has been issued the counter is exhausted and each
    /// add takes the lowest positive id no current record holds.
    #[default]
    Monotonic,

    /// Current record count plus one.
    ///
    /// Deleting any record other than the last and then adding a new one
    /// yields an id that collides with a surviving record.
    Legacy,
}

// =============================================================================
// REPOSITORY TRAIT
// =============================================================================

/// The operations available on every entity collection.
///
/// All operations are total: absence is reported as `None` or as an
/// unchanged collection, never as an error.
pub trait Repository<R: Record> {
    /// All current records in insertion order.
    fn list_all(&self) -> &[R];

    /// The first record whose id equals `id`.
    fn get_by_id(&self, id: RecordId) -> Option<&R>;

    /// Assign the next id to `draft`, append the record and return it.
    fn add(&mut self, draft: R::Draft) -> R;

    /// Remove every record whose id equals `id`.
    ///
    /// Returns the surviving records, not the removed ones.
    fn remove_by_id(&mut self, id: RecordId) -> &[R];
}

// =============================================================================
// COLLECTION IMPLEMENTATION
// =============================================================================

/// An ordered, in-memory collection of records of one kind.
#[derive(Debug, Clone)]
pub struct Collection<R: Record> {
    /// Records in insertion order.
    records: Vec<R>,

    /// Next id under [`IdStrategy::Monotonic`]; `None` once exhausted.
    next_id: Option<RecordId>,

    strategy: IdStrategy,
}

impl<R: Record> Default for Collection<R> {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}

impl<R: Record> Collection<R> {
    /// Create an empty collection.
    #[must_use]
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            records: Vec::new(),
            next_id: Some(1),
            strategy,
        }
    }

    /// Create a collection seeded with existing records, kept in the given order.
    ///
    /// The monotonic counter starts one past the highest seeded id, and is
    /// exhausted from the start if a seeded record holds `RecordId::MAX`.
    #[must_use]
    pub fn from_records(records: Vec<R>, strategy: IdStrategy) -> Self {
        let next_id = match records.iter().map(Record::id).max() {
            Some(max) => max.max(0).checked_add(1),
            None => Some(1),
        };

        Self {
            records,
            next_id,
            strategy,
        }
    }

    /// The id the next [`Repository::add`] call will assign.
    #[must_use]
    pub fn peek_next_id(&self) -> RecordId {
        match self.strategy {
            IdStrategy::Monotonic => self.next_id.unwrap_or_else(|| self.lowest_free_id()),
            IdStrategy::Legacy => RecordId::try_from(self.records.len())
                .ok()
                .and_then(|len| len.checked_add(1))
                .unwrap_or_else(|| self.lowest_free_id()),
        }
    }

    /// Lowest positive id not held by any current record.
    fn lowest_free_id(&self) -> RecordId {
        let held: BTreeSet<RecordId> = self.records.iter().map(Record::id).collect();
        (1..=RecordId::MAX)
            .find(|id| !held.contains(id))
            .unwrap_or(RecordId::MAX)
    }

    /// The id strategy in use.
    #[must_use]
    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// Number of records currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.records.iter()
    }
}

impl<R: Record> Repository<R> for Collection<R> {
    fn list_all(&self) -> &[R] {
        &self.records
    }

    fn get_by_id(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    fn add(&mut self, draft: R::Draft) -> R {
        let id = self.peek_next_id();
        let record = R::from_draft(id, draft);
        self.records.push(record.clone());

        if self.next_id.is_some_and(|next| id >= next) {
            self.next_id = id.checked_add(1);
        }

        record
    }

    fn remove_by_id(&mut self, id: RecordId) -> &[R] {
        self.records.retain(|record| record.id() != id);
        &self.records
    }
}

// =============================================================================
// TESTS
// =============================================================================
