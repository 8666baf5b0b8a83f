use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Declarative description of what a list page currently shows.
///
/// Transient by design: rebuilt on every input event, never persisted. An
/// empty query admits every record in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Query {
    /// Free-text needle, matched case-insensitively as a substring.
    pub search_text: String,
    /// Fields the free-text search looks at.
    pub search_fields: Vec<String>,
    /// Facet name -> accepted values. An empty set means "no constraint",
    /// not "reject all" — an un-toggled filter must never hide everything.
    pub filters: BTreeMap<String, BTreeSet<String>>,
    pub sort_key: Option<String>,
    pub sort_direction: SortDirection,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(
        mut self,
        text: impl Into<String>,
        fields: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.search_text = text.into();
        self.search_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_filter(
        mut self,
        facet: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.set_filter(facet, values);
        self
    }

    pub fn with_sort(mut self, key: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_key = Some(key.into());
        self.sort_direction = direction;
        self
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Replaces the accepted-value set for a facet. Passing an empty
    /// iterator leaves the facet present but unconstrained.
    pub fn set_filter(
        &mut self,
        facet: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) {
        self.filters
            .insert(facet.into(), values.into_iter().map(Into::into).collect());
    }

    pub fn clear_filter(&mut self, facet: &str) {
        self.filters.remove(facet);
    }

    pub fn set_sort(&mut self, key: impl Into<String>, direction: SortDirection) {
        self.sort_key = Some(key.into());
        self.sort_direction = direction;
    }

    pub fn clear_sort(&mut self) {
        self.sort_key = None;
        self.sort_direction = SortDirection::Asc;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_has_no_constraints() {
        let q = Query::new();
        assert!(q.search_text.is_empty());
        assert!(q.filters.is_empty());
        assert!(q.sort_key.is_none());
    }

    #[test]
    fn set_filter_replaces_previous_values() {
        let mut q = Query::new();
        q.set_filter("status", ["Subscribed", "Pending"]);
        q.set_filter("status", ["Bounced"]);

        let accepted = &q.filters["status"];
        assert_eq!(accepted.len(), 1);
        assert!(accepted.contains("Bounced"));
    }

    #[test]
    fn clear_filter_removes_the_facet() {
        let mut q = Query::new().with_filter("status", ["Subscribed"]);
        q.clear_filter("status");
        assert!(q.filters.is_empty());
    }
}
