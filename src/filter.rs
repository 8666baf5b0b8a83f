//! Predicate evaluation: decides, per record, whether the current query
//! keeps or drops it. Free-text search and facet filters only; ordering is
//! the comparator's job.

use crate::model::{FieldValue, Record, Schema};
use crate::query::Query;

/// Returns true if `record` survives both the free-text search and every
/// active facet of `query`.
pub fn matches<T: Record>(record: &T, query: &Query, schema: &Schema) -> bool {
    matches_search(record, query) && matches_facets(record, query, schema)
}

fn matches_search<T: Record>(record: &T, query: &Query) -> bool {
    if query.search_text.is_empty() {
        return true;
    }

    let needle = query.search_text.to_lowercase();
    query.search_fields.iter().any(|field| {
        haystacks(record.field(field))
            .iter()
            .any(|h| h.to_lowercase().contains(&needle))
    })
}

/// Searchable text forms of a field value. Array-valued fields contribute
/// one haystack per element so a match on any tag is enough.
fn haystacks(value: FieldValue) -> Vec<String> {
    match value {
        FieldValue::Text(s) => vec![s],
        FieldValue::Tags(tags) => tags,
        FieldValue::Number(n) => vec![n.to_string()],
        FieldValue::Date(_) | FieldValue::Missing => Vec::new(),
    }
}

fn matches_facets<T: Record>(record: &T, query: &Query, schema: &Schema) -> bool {
    query.filters.iter().all(|(facet, accepted)| {
        // Empty accepted set = un-toggled filter = no constraint.
        if accepted.is_empty() {
            return true;
        }
        // Facet names the shape does not declare are ignored.
        if schema.kind_of(facet).is_none() {
            return true;
        }
        match record.field(facet) {
            FieldValue::Text(s) => accepted.contains(&s),
            FieldValue::Tags(tags) => tags.iter().any(|t| accepted.contains(t)),
            FieldValue::Number(n) => accepted.contains(&n.to_string()),
            // A missing value never satisfies an active facet.
            FieldValue::Date(_) | FieldValue::Missing => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldKind, RecordId};

    #[derive(Debug, Clone)]
    struct Row {
        id: i64,
        name: String,
        status: Option<String>,
        tags: Vec<String>,
    }

    impl Row {
        fn new(id: i64, name: &str, status: &str, tags: &[&str]) -> Self {
            Self {
                id,
                name: name.to_string(),
                status: Some(status.to_string()),
                tags: tags.iter().map(|t| t.to_string()).collect(),
            }
        }
    }

    impl Record for Row {
        fn id(&self) -> RecordId {
            RecordId::Int(self.id)
        }

        fn field(&self, name: &str) -> FieldValue {
            match name {
                "name" => FieldValue::Text(self.name.clone()),
                "status" => match &self.status {
                    Some(s) => FieldValue::Text(s.clone()),
                    None => FieldValue::Missing,
                },
                "tags" => FieldValue::Tags(self.tags.clone()),
                _ => FieldValue::Missing,
            }
        }
    }

    fn schema() -> Schema {
        Schema::new()
            .field("name", FieldKind::Text)
            .field("status", FieldKind::Text)
            .field("tags", FieldKind::Tags)
    }

    #[test]
    fn empty_search_text_passes_everything() {
        let row = Row::new(1, "John Doe", "Subscribed", &[]);
        let q = Query::new().with_search("", ["name"]);
        assert!(matches(&row, &q, &schema()));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let row = Row::new(1, "John Doe", "Subscribed", &[]);
        let schema = schema();

        let q = Query::new().with_search("john", ["name"]);
        assert!(matches(&row, &q, &schema));

        let q = Query::new().with_search("DOE", ["name"]);
        assert!(matches(&row, &q, &schema));

        let q = Query::new().with_search("jane", ["name"]);
        assert!(!matches(&row, &q, &schema));
    }

    #[test]
    fn search_matches_any_listed_field() {
        let row = Row::new(1, "John", "Subscribed", &[]);
        let q = Query::new().with_search("subscribed", ["name", "status"]);
        assert!(matches(&row, &q, &schema()));
    }

    #[test]
    fn search_matches_any_tag_element() {
        let row = Row::new(1, "John", "Subscribed", &["vip", "newsletter"]);
        let schema = schema();

        let q = Query::new().with_search("news", ["tags"]);
        assert!(matches(&row, &q, &schema));

        let q = Query::new().with_search("missing", ["tags"]);
        assert!(!matches(&row, &q, &schema));
    }

    #[test]
    fn facet_membership() {
        let row = Row::new(1, "John", "Subscribed", &[]);
        let schema = schema();

        let q = Query::new().with_filter("status", ["Subscribed", "Pending"]);
        assert!(matches(&row, &q, &schema));

        let q = Query::new().with_filter("status", ["Unsubscribed"]);
        assert!(!matches(&row, &q, &schema));
    }

    #[test]
    fn empty_accepted_set_is_no_constraint() {
        let row = Row::new(1, "John", "Subscribed", &[]);
        let q = Query::new().with_filter("status", Vec::<String>::new());
        assert!(matches(&row, &q, &schema()));
    }

    #[test]
    fn unknown_facet_is_ignored() {
        let row = Row::new(1, "John", "Subscribed", &[]);
        let q = Query::new().with_filter("plan_tier", ["Pro"]);
        assert!(matches(&row, &q, &schema()));
    }

    #[test]
    fn missing_value_fails_an_active_facet_only() {
        let mut row = Row::new(1, "John", "Subscribed", &[]);
        row.status = None;
        let schema = schema();

        let active = Query::new().with_filter("status", ["Subscribed"]);
        assert!(!matches(&row, &active, &schema));

        let inactive = Query::new().with_filter("status", Vec::<String>::new());
        assert!(matches(&row, &inactive, &schema));
    }

    #[test]
    fn relaxing_a_facet_never_excludes_a_match() {
        let row = Row::new(1, "John", "Subscribed", &[]);
        let schema = schema();

        let strict = Query::new().with_filter("status", ["Subscribed"]);
        assert!(matches(&row, &strict, &schema));

        let relaxed = Query::new().with_filter("status", ["Subscribed", "Pending"]);
        assert!(matches(&row, &relaxed, &schema));
    }

    #[test]
    fn search_and_facets_must_both_pass() {
        let row = Row::new(1, "John", "Subscribed", &["vip"]);
        let schema = schema();

        let q = Query::new()
            .with_search("john", ["name"])
            .with_filter("status", ["Unsubscribed"]);
        assert!(!matches(&row, &q, &schema));

        let q = Query::new()
            .with_search("nope", ["name"])
            .with_filter("status", ["Subscribed"]);
        assert!(!matches(&row, &q, &schema));
    }
}
