//! # Controller Facade
//!
//! One [`ListController`] instance backs one list page. It owns the page's
//! whole state — record store, query, selection — and is the single entry
//! point every client (CLI, web, tests) drives.
//!
//! The facade holds no derived state: every call to [`ListController::view`]
//! recomputes the projection from the current store and query, so the view
//! always reflects the most recent input with no staleness window. All calls
//! are synchronous; there is exactly one mutator at a time and nothing to
//! cancel.
//!
//! The facade explicitly avoids:
//! - **Rendering**: it returns data structures, never formatted strings.
//! - **I/O**: bulk side effects go through the caller's [`ActionSink`].
//! - **Engine logic**: filtering, ordering and dispatch live in their own
//!   modules and stay independently callable.

use crate::actions::{self, ActionKind, ActionSink, BulkOutcome};
use crate::error::Result;
use crate::model::{Record, RecordId, Schema};
use crate::query::{Query, SortDirection};
use crate::selection::Selection;
use crate::store::RecordStore;
use crate::view::project;

pub struct ListController<T: Record> {
    store: RecordStore<T>,
    schema: Schema,
    query: Query,
    selection: Selection,
}

impl<T: Record> ListController<T> {
    /// An empty page. `schema` is the field-descriptor table of the record
    /// shape this page manages.
    pub fn new(schema: Schema) -> Self {
        Self {
            store: RecordStore::new(),
            schema,
            query: Query::new(),
            selection: Selection::new(),
        }
    }

    /// A page seeded with an initial collection, in display order.
    pub fn with_records(schema: Schema, records: Vec<T>) -> Self {
        Self {
            store: RecordStore::seeded(records),
            schema,
            query: Query::new(),
            selection: Selection::new(),
        }
    }

    // --- query input ---

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.query.set_search_text(text);
    }

    pub fn set_search_fields(&mut self, fields: impl IntoIterator<Item = impl Into<String>>) {
        self.query.search_fields = fields.into_iter().map(Into::into).collect();
    }

    pub fn set_filter(
        &mut self,
        facet: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) {
        self.query.set_filter(facet, values);
    }

    pub fn clear_filter(&mut self, facet: &str) {
        self.query.clear_filter(facet);
    }

    pub fn set_sort(&mut self, key: impl Into<String>, direction: SortDirection) {
        self.query.set_sort(key, direction);
    }

    pub fn clear_sort(&mut self) {
        self.query.clear_sort();
    }

    // --- projection ---

    /// The filtered, ordered sequence to render.
    pub fn view(&self) -> Vec<T> {
        project(&self.store, &self.query, &self.schema)
    }

    // --- selection ---

    pub fn toggle_select(&mut self, id: RecordId) {
        self.selection.toggle(id);
    }

    /// `true` selects exactly the rows the current filter admits; `false`
    /// clears. Rows hidden by the filter are never swept in.
    pub fn select_all(&mut self, select: bool) {
        if select {
            let visible = self.view().iter().map(Record::id).collect::<Vec<_>>();
            self.selection.select_all(visible);
        } else {
            self.selection.clear();
        }
    }

    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.selection.is_selected(id)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    // --- bulk actions ---

    pub fn run_bulk_action<S: ActionSink<T>>(
        &mut self,
        kind: ActionKind,
        sink: &mut S,
    ) -> Result<BulkOutcome> {
        actions::dispatch(kind, &mut self.selection, &mut self.store, sink)
    }

    // --- raw CRUD ---

    pub fn create(&mut self, record: T) {
        self.store.create(record);
    }

    pub fn update(&mut self, record: T) -> bool {
        self.store.update(record)
    }

    /// Deletes by id and prunes the selection in the same step, so a
    /// dangling id can never survive into the next bulk action.
    pub fn delete(&mut self, id: &RecordId) -> bool {
        let removed = self.store.delete(id);
        if removed {
            self.selection.remove(id);
        }
        removed
    }

    // --- read access ---

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn records(&self) -> &[T] {
        self.store.records()
    }

    pub fn get(&self, id: &RecordId) -> Option<&T> {
        self.store.get(id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
