//! In-memory record storage. One store per list page, created empty or
//! seeded at mount and discarded at unmount — nothing persists.
//!
//! Insertion order is the fallback display order, so the store keeps a plain
//! `Vec` rather than a map. Collections here are page-sized; linear id
//! lookups are fine.

use crate::model::{Record, RecordId};

#[derive(Debug, Clone)]
pub struct RecordStore<T: Record> {
    records: Vec<T>,
}

impl<T: Record> Default for RecordStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> RecordStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(records: Vec<T>) -> Self {
        Self { records }
    }

    /// Appends a record. Callers own id uniqueness; an existing id is
    /// replaced in place instead of duplicated.
    pub fn create(&mut self, record: T) {
        if !self.update(record.clone()) {
            self.records.push(record);
        }
    }

    /// Replaces the record with the same id. Returns false (and stores
    /// nothing) if no such record exists.
    pub fn update(&mut self, record: T) -> bool {
        let id = record.id();
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Removes by id. Deleting an absent id is a no-op, not an error.
    pub fn delete(&mut self, id: &RecordId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id() != *id);
        self.records.len() < before
    }

    pub fn get(&self, id: &RecordId) -> Option<&T> {
        self.records.iter().find(|r| r.id() == *id)
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.get(id).is_some()
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.records.iter().map(Record::id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
