//! Structured record validation for the news and events collections.
//!
//! Per record: required fields must be non-blank strings, date fields must
//! be strict `YYYY-MM-DD`, and site-relative asset paths must exist.
//! Every failure is an `ERROR`; nothing short-circuits.

use crate::error::CheckError;
use crate::exists::target_exists;
use crate::models::schema::{CollectionSchema, FieldRule};
use crate::models::Issue;
use chrono::NaiveDate;
use serde_json::Value as Json;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read and parse a collection. The file must hold a JSON array.
pub fn load_collection(root: &Path, schema: &CollectionSchema) -> Result<Vec<Json>, CheckError> {
    let path = root.join(&schema.path);
    if !path.is_file() {
        return Err(CheckError::MissingInput { path });
    }
    let data = fs::read_to_string(&path).map_err(|source| CheckError::Read {
        path: path.clone(),
        source,
    })?;
    let json: Json = serde_json::from_str(&data).map_err(|source| CheckError::Json {
        path: path.clone(),
        source,
    })?;
    match json {
        Json::Array(items) => {
            debug!(path = %schema.path, records = items.len(), "Loaded collection");
            Ok(items)
        }
        _ => Err(CheckError::NotAnArray { path }),
    }
}

/// Validate every record, sourcing issues as `<path>[<index>]`.
pub fn validate_collection(root: &Path, schema: &CollectionSchema, records: &[Json]) -> Vec<Issue> {
    records
        .iter()
        .enumerate()
        .flat_map(|(idx, item)| {
            let source = format!("{}[{}]", schema.path, idx);
            validate_record(root, schema, &source, item)
        })
        .collect()
}

pub fn validate_record(
    root: &Path,
    schema: &CollectionSchema,
    source: &str,
    item: &Json,
) -> Vec<Issue> {
    let Json::Object(obj) = item else {
        return vec![Issue::error(source, "Record is not a JSON object")];
    };
    let mut issues = Vec::new();

    for field in &schema.required {
        let present = obj
            .get(field)
            .and_then(Json::as_str)
            .is_some_and(|s| !s.trim().is_empty());
        if !present {
            issues.push(Issue::error(
                source,
                format!("Missing or empty required field: {}", field),
            ));
        }
    }

    for rule in &schema.fields {
        if let Some(issue) = check_field(root, source, obj, rule) {
            issues.push(issue);
        }
    }

    issues
}

fn check_field(
    root: &Path,
    source: &str,
    obj: &serde_json::Map<String, Json>,
    rule: &FieldRule,
) -> Option<Issue> {
    match rule {
        FieldRule::Date { key, label } => {
            let value = obj.get(key).and_then(Json::as_str)?;
            if value.trim().is_empty() || is_valid_date(value) {
                return None;
            }
            Some(Issue::error(
                source,
                format!("Invalid {} date format: {}", label, value),
            ))
        }
        FieldRule::Asset { key, label } => {
            let value = obj.get(key).and_then(Json::as_str)?;
            let trimmed = value.trim();
            if !trimmed.starts_with('/')
                || target_exists(&root.join(trimmed.trim_start_matches('/')))
            {
                return None;
            }
            Some(Issue::error(source, format!("{} not found: {}", label, value)))
        }
    }
}

/// Strict `YYYY-MM-DD` that names a real calendar day.
pub fn is_valid_date(value: &str) -> bool {
    let shaped = value.len() == 10
        && value.char_indices().all(|(i, c)| match i {
            4 | 7 => c == '-',
            _ => c.is_ascii_digit(),
        });
    shaped && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn news_item() -> Json {
        json!({
            "title": "Contract ratified",
            "description": "Members voted.",
            "url": "/news/ratified.html",
            "image": "/images/vote.jpg",
            "alt": "Members voting",
            "publishedAt": "2025-10-27"
        })
    }

    fn site() -> tempfile::TempDir {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("news")).unwrap();
        fs::create_dir_all(root.join("images")).unwrap();
        fs::create_dir_all(root.join("events")).unwrap();
        fs::write(root.join("news/ratified.html"), "").unwrap();
        fs::write(root.join("images/vote.jpg"), "").unwrap();
        tmp
    }

    #[test]
    fn test_valid_news_record_has_no_issues() {
        let tmp = site();
        let schema = CollectionSchema::news(None, None);
        let issues = validate_record(tmp.path(), &schema, "news/news.json[0]", &news_item());
        assert!(issues.is_empty(), "{:?}", issues);
    }

    #[test]
    fn test_one_error_per_missing_field() {
        let tmp = site();
        let schema = CollectionSchema::news(None, None);
        let item = json!({
            "title": "",
            "description": "   ",
            "url": 5,
            "image": null,
            "publishedAt": "2025-10-27"
        });
        let issues = validate_record(tmp.path(), &schema, "news/news.json[3]", &item);
        let missing: Vec<&str> = issues
            .iter()
            .filter_map(|i| i.message.strip_prefix("Missing or empty required field: "))
            .collect();
        assert_eq!(missing, vec!["title", "description", "url", "image", "alt"]);
        assert!(issues.iter().all(|i| i.source == "news/news.json[3]"));
    }

    #[test]
    fn test_invalid_dates() {
        let tmp = site();
        let schema = CollectionSchema::news(None, None);
        let mut item = news_item();
        item["publishedAt"] = json!("2025-13-40");
        item["updatedAt"] = json!("2025-1-5");
        item["createdAt"] = json!("");
        let issues = validate_record(tmp.path(), &schema, "n", &item);
        let msgs: Vec<&str> = issues.iter().map(|i| i.message.as_str()).collect();
        assert_eq!(
            msgs,
            vec![
                "Invalid publishedAt date format: 2025-13-40",
                "Invalid updatedAt date format: 2025-1-5",
            ]
        );
    }

    #[test]
    fn test_news_assets_come_before_dates() {
        let tmp = site();
        let schema = CollectionSchema::news(None, None);
        let mut item = news_item();
        item["image"] = json!("/images/gone.jpg");
        item["publishedAt"] = json!("27/10/2025");
        let issues = validate_record(tmp.path(), &schema, "n", &item);
        let msgs: Vec<&str> = issues.iter().map(|i| i.message.as_str()).collect();
        assert_eq!(
            msgs,
            vec![
                "News image not found: /images/gone.jpg",
                "Invalid publishedAt date format: 27/10/2025",
            ]
        );
    }

    #[test]
    fn test_missing_assets_are_reported() {
        let tmp = site();
        let schema = CollectionSchema::news(None, None);
        let mut item = news_item();
        item["url"] = json!("/news/gone");
        item["image"] = json!("https://cdn.example.com/remote.jpg");
        let issues = validate_record(tmp.path(), &schema, "n", &item);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "News URL not found: /news/gone");
    }

    #[test]
    fn test_event_schema_is_independent() {
        let tmp = site();
        let root = tmp.path();
        fs::write(root.join("events/picnic.html"), "").unwrap();
        let schema = CollectionSchema::events(None, None);
        let item = json!({
            "date": "2025-02-30",
            "time": "5 PM",
            "title": "Picnic",
            "description": "Family picnic",
            "type": "social",
            "url": "/events/picnic",
            "location_detail": "Park",
            "calendar_link": " /events/picnic.ics",
            // news-only fields are not validated for events
            "publishedAt": "garbage"
        });
        let issues = validate_record(root, &schema, "events/events.json[0]", &item);
        let msgs: Vec<&str> = issues.iter().map(|i| i.message.as_str()).collect();
        // events check the date before their asset paths
        assert_eq!(
            msgs,
            vec![
                "Invalid event date format: 2025-02-30",
                "Calendar file not found:  /events/picnic.ics",
            ]
        );
    }

    #[test]
    fn test_non_object_record() {
        let tmp = site();
        let schema = CollectionSchema::events(None, None);
        let issues = validate_collection(tmp.path(), &schema, &[json!("oops")]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].source, "events/events.json[0]");
    }

    #[test]
    fn test_load_collection_errors() {
        let tmp = site();
        let root = tmp.path();
        let schema = CollectionSchema::news(None, None);
        assert!(matches!(
            load_collection(root, &schema),
            Err(CheckError::MissingInput { .. })
        ));
        fs::write(root.join("news/news.json"), "{ not json").unwrap();
        assert!(matches!(
            load_collection(root, &schema),
            Err(CheckError::Json { .. })
        ));
        fs::write(root.join("news/news.json"), r#"{"title": "x"}"#).unwrap();
        assert!(matches!(
            load_collection(root, &schema),
            Err(CheckError::NotAnArray { .. })
        ));
        fs::write(root.join("news/news.json"), "[]").unwrap();
        assert!(load_collection(root, &schema).unwrap().is_empty());
    }

    #[test]
    fn test_date_shapes() {
        assert!(is_valid_date("2025-10-27"));
        assert!(is_valid_date("2024-02-29"));
        assert!(!is_valid_date("2025-02-29"));
        assert!(!is_valid_date("2025-13-40"));
        assert!(!is_valid_date("25-10-27"));
        assert!(!is_valid_date("2025-10-27T00:00:00Z"));
        assert!(!is_valid_date("2025/10/27"));
    }
}
