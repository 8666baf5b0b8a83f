//! Concrete record shapes. Each entity kind is a plain struct with a
//! [`Schema`] declaring its fields once; the engines never probe records at
//! runtime. Rate fields are opaque display strings by design — no statistics
//! happen here.

use crate::model::{FieldKind, FieldValue, Record, RecordId, Schema};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactStatus {
    Subscribed,
    Unsubscribed,
    Pending,
    Bounced,
}

impl std::fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactStatus::Subscribed => write!(f, "Subscribed"),
            ContactStatus::Unsubscribed => write!(f, "Unsubscribed"),
            ContactStatus::Pending => write!(f, "Pending"),
            ContactStatus::Bounced => write!(f, "Bounced"),
        }
    }
}

/// An audience member on the contacts page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub status: ContactStatus,
    #[serde(default)]
    pub tags: Vec<String>,
    pub joined_at: DateTime<Utc>,
    /// Opaque display string ("42.1%"); compared as text, never computed.
    #[serde(default)]
    pub open_rate: Option<String>,
}

impl Contact {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: RecordId::from(Uuid::new_v4()),
            name: name.into(),
            email: email.into(),
            status: ContactStatus::Pending,
            tags: Vec::new(),
            joined_at: Utc::now(),
            open_rate: None,
        }
    }

    pub fn schema() -> Schema {
        Schema::new()
            .field("name", FieldKind::Text)
            .field("email", FieldKind::Text)
            .field("status", FieldKind::Text)
            .field("tags", FieldKind::Tags)
            .field("joined_at", FieldKind::Date)
            .field("open_rate", FieldKind::Text)
    }
}

impl Record for Contact {
    fn id(&self) -> RecordId {
        self.id.clone()
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "name" => FieldValue::Text(self.name.clone()),
            "email" => FieldValue::Text(self.email.clone()),
            "status" => FieldValue::Text(self.status.to_string()),
            "tags" => FieldValue::Tags(self.tags.clone()),
            "joined_at" => FieldValue::Date(self.joined_at),
            "open_rate" => match &self.open_rate {
                Some(rate) => FieldValue::Text(rate.clone()),
                None => FieldValue::Missing,
            },
            _ => FieldValue::Missing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignStatus {
    Draft,
    Scheduled,
    Sending,
    Sent,
    Paused,
}

impl std::fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CampaignStatus::Draft => write!(f, "Draft"),
            CampaignStatus::Scheduled => write!(f, "Scheduled"),
            CampaignStatus::Sending => write!(f, "Sending"),
            CampaignStatus::Sent => write!(f, "Sent"),
            CampaignStatus::Paused => write!(f, "Paused"),
        }
    }
}

/// An email campaign on the campaigns page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: RecordId,
    pub name: String,
    pub subject: String,
    pub status: CampaignStatus,
    #[serde(default)]
    pub recipients: f64,
    /// Opaque display string, same as [`Contact::open_rate`].
    #[serde(default)]
    pub open_rate: Option<String>,
    /// Date string ("2024-03-15" or RFC 3339); parsed only when sorting.
    #[serde(default)]
    pub sent_at: Option<String>,
}

impl Campaign {
    pub fn new(name: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            id: RecordId::from(Uuid::new_v4()),
            name: name.into(),
            subject: subject.into(),
            status: CampaignStatus::Draft,
            recipients: 0.0,
            open_rate: None,
            sent_at: None,
        }
    }

    pub fn schema() -> Schema {
        Schema::new()
            .field("name", FieldKind::Text)
            .field("subject", FieldKind::Text)
            .field("status", FieldKind::Text)
            .field("recipients", FieldKind::Number)
            .field("open_rate", FieldKind::Text)
            .field("sent_at", FieldKind::Date)
    }
}

impl Record for Campaign {
    fn id(&self) -> RecordId {
        self.id.clone()
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "name" => FieldValue::Text(self.name.clone()),
            "subject" => FieldValue::Text(self.subject.clone()),
            "status" => FieldValue::Text(self.status.to_string()),
            "recipients" => FieldValue::Number(self.recipients),
            "open_rate" => match &self.open_rate {
                Some(rate) => FieldValue::Text(rate.clone()),
                None => FieldValue::Missing,
            },
            "sent_at" => match &self.sent_at {
                Some(s) => FieldValue::Text(s.clone()),
                None => FieldValue::Missing,
            },
            _ => FieldValue::Missing,
        }
    }
}
