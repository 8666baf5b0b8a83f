use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a record.
///
/// List pages identify rows either by a numeric id (seed data, imported
/// collections) or by a string id (UUID-backed entities). Both forms live in
/// the same selection sets, so they share one type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Str(String),
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Int(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Str(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        RecordId::Str(s)
    }
}

impl From<Uuid> for RecordId {
    fn from(id: Uuid) -> Self {
        RecordId::Str(id.to_string())
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordId::Int(n) => write!(f, "{}", n),
            RecordId::Str(s) => write!(f, "{}", s),
        }
    }
}

impl RecordId {
    /// Numeric input becomes `Int`, anything else `Str`. Never fails.
    pub fn parse(s: &str) -> Self {
        match s.parse::<i64>() {
            Ok(n) => RecordId::Int(n),
            Err(_) => RecordId::Str(s.to_string()),
        }
    }
}

impl std::str::FromStr for RecordId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(RecordId::parse(s))
    }
}

/// Declared type of a record field. Drives comparator dispatch and tells the
/// predicate which facets are real.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free text; ordered case-insensitively.
    Text,
    /// Numeric; ordered by value.
    Number,
    /// A timestamp, or a date string parsed at comparison time.
    Date,
    /// Array-of-string (labels). Searching matches any element.
    Tags,
}

/// A field value as the engines see it.
///
/// `Date` carries an already-typed timestamp; date *strings* surface as
/// `Text` under a `FieldKind::Date` descriptor and are parsed by the
/// comparator, with unparseable input ordered below every valid date.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Date(DateTime<Utc>),
    Tags(Vec<String>),
    /// The record has no value for this field (or the field is unknown).
    Missing,
}

/// Field-descriptor table for one record shape.
///
/// Each entity kind (Contact, Campaign, ...) declares its fields once;
/// the engines consult the table instead of probing records at runtime.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<(&'static str, FieldKind)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &'static str, kind: FieldKind) -> Self {
        self.fields.push((name, kind));
        self
    }

    /// Declared kind of a field, or `None` for an unknown name.
    pub fn kind_of(&self, name: &str) -> Option<FieldKind> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, kind)| *kind)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(n, _)| *n)
    }
}

/// An entity a list page manages.
///
/// Records are immutable value objects from the controller's perspective:
/// every mutation replaces the stored record wholesale. `field` returns
/// `FieldValue::Missing` for names the shape does not declare.
pub trait Record: Clone {
    fn id(&self) -> RecordId;
    fn field(&self, name: &str) -> FieldValue;
}
