//! Record collection schemas.
//!
//! Each collection declares which fields are required, which hold
//! `YYYY-MM-DD` dates, and which hold site-relative asset paths. News and
//! events share the validation logic but never each other's schema.

#[derive(Debug, Clone)]
/// Per-field check applied after the required-field pass.
pub enum FieldRule {
    /// Date-shaped field; `label` names it in the error message.
    Date { key: String, label: String },
    /// Site-relative path; `label` prefixes "not found".
    Asset { key: String, label: String },
}

#[derive(Debug, Clone)]
/// Declared shape of one record collection.
pub struct CollectionSchema {
    /// Repo-relative path of the JSON array, also used as the issue source prefix.
    pub path: String,
    pub required: Vec<String>,
    /// Checked in declaration order, which is also issue order.
    pub fields: Vec<FieldRule>,
}

pub const NEWS_PATH: &str = "news/news.json";
pub const EVENTS_PATH: &str = "events/events.json";

pub const NEWS_REQUIRED: &[&str] = &["title", "description", "url", "image", "alt", "publishedAt"];
pub const EVENT_REQUIRED: &[&str] = &[
    "date",
    "time",
    "title",
    "description",
    "type",
    "url",
    "location_detail",
];

fn date(key: &str, label: &str) -> FieldRule {
    FieldRule::Date {
        key: key.to_string(),
        label: label.to_string(),
    }
}

fn asset(key: &str, label: &str) -> FieldRule {
    FieldRule::Asset {
        key: key.to_string(),
        label: label.to_string(),
    }
}

fn owned(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|s| s.to_string()).collect()
}

impl CollectionSchema {
    /// News articles: page and image assets, then three date fields.
    pub fn news(path: Option<String>, required: Option<Vec<String>>) -> Self {
        CollectionSchema {
            path: path.unwrap_or_else(|| NEWS_PATH.to_string()),
            required: required.unwrap_or_else(|| owned(NEWS_REQUIRED)),
            fields: vec![
                asset("url", "News URL"),
                asset("image", "News image"),
                date("publishedAt", "publishedAt"),
                date("createdAt", "createdAt"),
                date("updatedAt", "updatedAt"),
            ],
        }
    }

    /// Events: the `date` first, then page and optional calendar file assets.
    pub fn events(path: Option<String>, required: Option<Vec<String>>) -> Self {
        CollectionSchema {
            path: path.unwrap_or_else(|| EVENTS_PATH.to_string()),
            required: required.unwrap_or_else(|| owned(EVENT_REQUIRED)),
            fields: vec![
                date("date", "event"),
                asset("url", "Event URL"),
                asset("calendar_link", "Calendar file"),
            ],
        }
    }
}
