//! Projection: the filtered, ordered sequence a list page renders.

use crate::compare::compare;
use crate::filter::matches;
use crate::model::{Record, Schema};
use crate::query::Query;
use crate::store::RecordStore;

/// Filters the store through the predicate, then stable-sorts the
/// survivors. Pure: identical store + query always yield the identical
/// sequence, ties included, so select-all over the view is well defined.
pub fn project<T: Record>(store: &RecordStore<T>, query: &Query, schema: &Schema) -> Vec<T> {
    let mut visible: Vec<T> = store
        .records()
        .iter()
        .filter(|r| matches(*r, query, schema))
        .cloned()
        .collect();

    if let Some(key) = &query.sort_key {
        // Vec::sort_by is stable; equal keys keep their store order.
        visible.sort_by(|a, b| compare(a, b, key, query.sort_direction, schema));
    }

    visible
}
