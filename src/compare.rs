//! Typed record comparison. The sort key's declared [`FieldKind`] picks the
//! semantics: text compares case-insensitively, numbers numerically, dates
//! by timestamp. Values that cannot be read under the declared kind order
//! below every valid value instead of failing.

use crate::model::{FieldKind, FieldValue, Record, Schema};
use crate::query::SortDirection;
use chrono::{DateTime, NaiveDate, Utc};
use std::cmp::Ordering;

/// Orders two records by `sort_key`. Unknown keys compare equal, which
/// leaves the store order untouched under a stable sort.
pub fn compare<T: Record>(
    a: &T,
    b: &T,
    sort_key: &str,
    direction: SortDirection,
    schema: &Schema,
) -> Ordering {
    let Some(kind) = schema.kind_of(sort_key) else {
        return Ordering::Equal;
    };

    let ord = rank(a.field(sort_key), kind).cmp(&rank(b.field(sort_key), kind));
    match direction {
        SortDirection::Asc => ord,
        SortDirection::Desc => ord.reverse(),
    }
}

/// Comparable form of a field value under a declared kind. `Min` orders
/// below everything and absorbs missing or unparseable input.
#[derive(Debug, PartialEq)]
enum Rank {
    Min,
    Number(f64),
    Time(i64),
    Text(String),
}

impl Rank {
    fn cmp(&self, other: &Rank) -> Ordering {
        match (self, other) {
            (Rank::Min, Rank::Min) => Ordering::Equal,
            (Rank::Min, _) => Ordering::Less,
            (_, Rank::Min) => Ordering::Greater,
            (Rank::Number(a), Rank::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (Rank::Time(a), Rank::Time(b)) => a.cmp(b),
            (Rank::Text(a), Rank::Text(b)) => a.cmp(b),
            // Mixed ranks only occur for shapes that lie about a field's
            // kind; fall back to leaving the pair unordered.
            _ => Ordering::Equal,
        }
    }
}

fn rank(value: FieldValue, kind: FieldKind) -> Rank {
    match kind {
        FieldKind::Text => match value {
            FieldValue::Text(s) => Rank::Text(s.to_lowercase()),
            FieldValue::Number(n) => Rank::Text(n.to_string()),
            _ => Rank::Min,
        },
        FieldKind::Number => match value {
            FieldValue::Number(n) if !n.is_nan() => Rank::Number(n),
            FieldValue::Text(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| !n.is_nan())
                .map_or(Rank::Min, Rank::Number),
            _ => Rank::Min,
        },
        FieldKind::Date => match value {
            FieldValue::Date(dt) => Rank::Time(dt.timestamp()),
            FieldValue::Text(s) => parse_date(&s).map_or(Rank::Min, |dt| Rank::Time(dt.timestamp())),
            _ => Rank::Min,
        },
        FieldKind::Tags => match value {
            FieldValue::Tags(tags) => Rank::Text(tags.join(",").to_lowercase()),
            FieldValue::Text(s) => Rank::Text(s.to_lowercase()),
            _ => Rank::Min,
        },
    }
}

/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates.
fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordId;

    #[derive(Debug, Clone)]
    struct Row {
        id: i64,
        name: &'static str,
        score: Option<f64>,
        sent_at: Option<&'static str>,
    }

    impl Record for Row {
        fn id(&self) -> RecordId {
            RecordId::Int(self.id)
        }

        fn field(&self, name: &str) -> FieldValue {
            match name {
                "name" => FieldValue::Text(self.name.to_string()),
                "score" => match self.score {
                    Some(n) => FieldValue::Number(n),
                    None => FieldValue::Missing,
                },
                "sent_at" => match self.sent_at {
                    Some(s) => FieldValue::Text(s.to_string()),
                    None => FieldValue::Missing,
                },
                _ => FieldValue::Missing,
            }
        }
    }

    fn row(id: i64, name: &'static str) -> Row {
        Row {
            id,
            name,
            score: None,
            sent_at: None,
        }
    }

    fn schema() -> Schema {
        Schema::new()
            .field("name", FieldKind::Text)
            .field("score", FieldKind::Number)
            .field("sent_at", FieldKind::Date)
    }

    #[test]
    fn text_ordering_is_case_insensitive() {
        let a = row(1, "alpha");
        let b = row(2, "Beta");
        let schema = schema();

        assert_eq!(
            compare(&a, &b, "name", SortDirection::Asc, &schema),
            Ordering::Less
        );
        assert_eq!(
            compare(&a, &b, "name", SortDirection::Desc, &schema),
            Ordering::Greater
        );
    }

    #[test]
    fn numeric_ordering_uses_value_not_text() {
        let mut a = row(1, "a");
        a.score = Some(9.0);
        let mut b = row(2, "b");
        b.score = Some(10.0);

        assert_eq!(
            compare(&a, &b, "score", SortDirection::Asc, &schema()),
            Ordering::Less
        );
    }

    #[test]
    fn missing_number_sorts_below_every_value() {
        let a = row(1, "a"); // score: None
        let mut b = row(2, "b");
        b.score = Some(-100.0);

        assert_eq!(
            compare(&a, &b, "score", SortDirection::Asc, &schema()),
            Ordering::Less
        );
    }

    #[test]
    fn date_strings_parse_before_comparison() {
        let mut a = row(1, "a");
        a.sent_at = Some("2024-03-15");
        let mut b = row(2, "b");
        b.sent_at = Some("2024-03-16T08:30:00Z");

        assert_eq!(
            compare(&a, &b, "sent_at", SortDirection::Asc, &schema()),
            Ordering::Less
        );
    }

    #[test]
    fn unparseable_date_sorts_first_never_panics() {
        let mut a = row(1, "a");
        a.sent_at = Some("not a date");
        let mut b = row(2, "b");
        b.sent_at = Some("1970-01-02");

        assert_eq!(
            compare(&a, &b, "sent_at", SortDirection::Asc, &schema()),
            Ordering::Less
        );
    }

    #[test]
    fn unknown_sort_key_compares_equal() {
        let a = row(1, "a");
        let b = row(2, "b");

        assert_eq!(
            compare(&a, &b, "bogus", SortDirection::Asc, &schema()),
            Ordering::Equal
        );
    }

    #[test]
    fn equal_keys_compare_equal_in_both_directions() {
        let a = row(1, "same");
        let b = row(2, "SAME");
        let schema = schema();

        assert_eq!(
            compare(&a, &b, "name", SortDirection::Asc, &schema),
            Ordering::Equal
        );
        assert_eq!(
            compare(&a, &b, "name", SortDirection::Desc, &schema),
            Ordering::Equal
        );
    }
}
