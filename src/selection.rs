//! Tracks which record ids are checked. The set is always scoped to ids
//! that exist in the store; store deletions prune it in the same step via
//! [`Selection::retain`].

use crate::model::RecordId;
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct Selection {
    ids: HashSet<RecordId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the id if absent, removes it if present.
    pub fn toggle(&mut self, id: RecordId) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Replaces the set with exactly `visible_ids` — the currently
    /// projected view, never rows hidden by the active filter.
    pub fn select_all(&mut self, visible_ids: impl IntoIterator<Item = RecordId>) {
        self.ids = visible_ids.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    pub fn remove(&mut self, id: &RecordId) {
        self.ids.remove(id);
    }

    /// Intersects the set with ids that still exist. Called as part of any
    /// store deletion so dangling ids never reach a bulk action.
    pub fn retain<F: Fn(&RecordId) -> bool>(&mut self, keep: F) {
        self.ids.retain(|id| keep(id));
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &RecordId> {
        self.ids.iter()
    }
}
