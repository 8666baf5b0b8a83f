//! Built-in sample collections. The store is ephemeral by design, so the
//! binary needs something to show when no `--data` file is given.

use chrono::{Duration, Utc};
use listwise::model::RecordId;
use listwise::records::{Campaign, CampaignStatus, Contact, ContactStatus};

pub fn sample_contacts() -> Vec<Contact> {
    let rows: [(i64, &str, &str, ContactStatus, &[&str], i64, &str); 6] = [
        (
            1,
            "John Carter",
            "john@example.com",
            ContactStatus::Subscribed,
            &["vip", "newsletter"],
            412,
            "48.2%",
        ),
        (
            2,
            "Jane Miller",
            "jane@example.com",
            ContactStatus::Unsubscribed,
            &["newsletter"],
            371,
            "12.9%",
        ),
        (
            3,
            "Ada Okafor",
            "ada@example.com",
            ContactStatus::Subscribed,
            &["beta"],
            88,
            "61.0%",
        ),
        (
            4,
            "Sam Ruiz",
            "sam@example.com",
            ContactStatus::Pending,
            &[],
            12,
            "—",
        ),
        (
            5,
            "Mei Lin",
            "mei@example.com",
            ContactStatus::Subscribed,
            &["vip"],
            203,
            "55.4%",
        ),
        (
            6,
            "Omar Haddad",
            "omar@example.com",
            ContactStatus::Bounced,
            &["newsletter"],
            540,
            "3.1%",
        ),
    ];

    rows.into_iter()
        .map(|(id, name, email, status, tags, days_ago, rate)| Contact {
            id: RecordId::Int(id),
            name: name.to_string(),
            email: email.to_string(),
            status,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            joined_at: Utc::now() - Duration::days(days_ago),
            open_rate: Some(rate.to_string()),
        })
        .collect()
}

pub fn sample_campaigns() -> Vec<Campaign> {
    let rows: [(i64, &str, &str, CampaignStatus, f64, Option<&str>); 5] = [
        (
            1,
            "Spring Sale",
            "20% off everything this week",
            CampaignStatus::Sent,
            5400.0,
            Some("2024-03-15"),
        ),
        (
            2,
            "Welcome Series",
            "Glad you're here",
            CampaignStatus::Sending,
            1280.0,
            Some("2024-04-02"),
        ),
        (
            3,
            "Product Update",
            "What's new this month",
            CampaignStatus::Scheduled,
            4900.0,
            None,
        ),
        (
            4,
            "Re-engagement",
            "We miss you",
            CampaignStatus::Draft,
            0.0,
            None,
        ),
        (
            5,
            "Black Friday Teaser",
            "Something big is coming",
            CampaignStatus::Paused,
            7300.0,
            Some("2023-11-20"),
        ),
    ];

    rows.into_iter()
        .map(|(id, name, subject, status, recipients, sent_at)| Campaign {
            id: RecordId::Int(id),
            name: name.to_string(),
            subject: subject.to_string(),
            status,
            recipients,
            open_rate: None,
            sent_at: sent_at.map(|s| s.to_string()),
        })
        .collect()
}
