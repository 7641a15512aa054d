use crate::domain::{Education, Experience, Photo, Project, ProjectKind};
use chrono::NaiveDate;
use serde_json::{Map, Value};
use thiserror::Error;

/// Why a record was rejected. One variant per field-level rule so the
/// loader can say exactly what was wrong when it drops a record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("record is not a JSON object")]
    NotAnObject,
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("field `{0}` must be a non-empty string")]
    ExpectedString(&'static str),
    #[error("field `{0}` must be a positive integer")]
    ExpectedPositiveInt(&'static str),
    #[error("field `{0}` is not a valid date")]
    ExpectedDate(&'static str),
    #[error("field `{0}` must be a list of non-empty strings")]
    ExpectedStringList(&'static str),
    #[error("field `{0}` must be either \"featured\" or \"small\"")]
    ExpectedKind(&'static str),
}

pub fn parse_project(value: &Value) -> Result<Project, RecordError> {
    let obj = as_object(value)?;

    Ok(Project {
        id: require_positive_int(obj, "id")?,
        title: require_string(obj, "title")?,
        description: require_string(obj, "description")?,
        image_url: require_string(obj, "imageUrl")?,
        link: require_string(obj, "link")?,
        github_url: optional_string(obj, "githubUrl")?,
        live_url: optional_string(obj, "liveUrl")?,
        technologies: require_string_list(obj, "technologies")?,
        kind: require_kind(obj, "type")?,
        order: require_positive_int(obj, "order")?,
    })
}

// the looser pre-technologies shape. accepted records become Projects in
// the small category; the external link doubles as the github url, even
// when it doesn't point at github (longstanding upstream behavior)
pub fn parse_legacy_item(value: &Value) -> Result<Project, RecordError> {
    let obj = as_object(value)?;
    let link = require_string(obj, "link")?;

    Ok(Project {
        id: require_positive_int(obj, "id")?,
        title: require_string(obj, "title")?,
        description: require_string(obj, "description")?,
        image_url: require_string(obj, "imageUrl")?,
        github_url: Some(link.clone()),
        live_url: None,
        technologies: Vec::new(),
        kind: ProjectKind::Small,
        order: require_positive_int(obj, "order")?,
        link,
    })
}

pub fn parse_photo(value: &Value) -> Result<Photo, RecordError> {
    let obj = as_object(value)?;

    Ok(Photo {
        id: require_positive_int(obj, "id")?,
        title: require_string(obj, "title")?,
        image_url: require_string(obj, "imageUrl")?,
        description: require_string(obj, "description")?,
        date: require_date(obj, "date")?,
    })
}

pub fn parse_experience(value: &Value) -> Result<Experience, RecordError> {
    let obj = as_object(value)?;

    // the key must be present: an explicit null means "ongoing", while a
    // record that simply forgot the field is rejected
    let end_date = match obj.get("endDate") {
        None => return Err(RecordError::MissingField("endDate")),
        Some(Value::Null) => None,
        Some(_) => Some(require_date(obj, "endDate")?),
    };

    Ok(Experience {
        id: require_positive_int(obj, "id")?,
        company: require_string(obj, "company")?,
        role: require_string(obj, "role")?,
        description: require_string(obj, "description")?,
        start_date: require_date(obj, "startDate")?,
        end_date,
        order: require_positive_int(obj, "order")?,
        image_url: require_string(obj, "imageUrl")?,
    })
}

pub fn parse_education(value: &Value) -> Result<Education, RecordError> {
    let obj = as_object(value)?;

    Ok(Education {
        id: require_positive_int(obj, "id")?,
        school: require_string(obj, "school")?,
        degree: require_string(obj, "degree")?,
        start_date: require_date(obj, "startDate")?,
        end_date: require_date(obj, "endDate")?,
        description: require_string(obj, "description")?,
        achievements: require_string_list(obj, "achievements")?,
        image_url: require_string(obj, "imageUrl")?,
    })
}

fn as_object(value: &Value) -> Result<&Map<String, Value>, RecordError> {
    value.as_object().ok_or(RecordError::NotAnObject)
}

// non-empty after trimming; the stored value keeps its original whitespace
fn require_string(obj: &Map<String, Value>, field: &'static str) -> Result<String, RecordError> {
    let value = obj.get(field).ok_or(RecordError::MissingField(field))?;
    match value.as_str() {
        Some(s) if !s.trim().is_empty() => Ok(s.to_string()),
        _ => Err(RecordError::ExpectedString(field)),
    }
}

// an absent key is fine; a present key must hold a valid non-empty string
// (explicit null is rejected, matching the document's historical shape)
fn optional_string(
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, RecordError> {
    if !obj.contains_key(field) {
        return Ok(None);
    }
    require_string(obj, field).map(Some)
}

fn require_positive_int(obj: &Map<String, Value>, field: &'static str) -> Result<i64, RecordError> {
    let value = obj.get(field).ok_or(RecordError::MissingField(field))?;
    match value.as_i64() {
        Some(n) if n > 0 => Ok(n),
        _ => Err(RecordError::ExpectedPositiveInt(field)),
    }
}

fn require_date(obj: &Map<String, Value>, field: &'static str) -> Result<NaiveDate, RecordError> {
    let value = obj.get(field).ok_or(RecordError::MissingField(field))?;
    let raw = value.as_str().ok_or(RecordError::ExpectedDate(field))?;
    parse_flexible_date(raw).ok_or(RecordError::ExpectedDate(field))
}

fn require_string_list(
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<Vec<String>, RecordError> {
    let value = obj.get(field).ok_or(RecordError::MissingField(field))?;
    let items = value
        .as_array()
        .ok_or(RecordError::ExpectedStringList(field))?;

    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item.as_str() {
            Some(s) if !s.trim().is_empty() => out.push(s.to_string()),
            _ => return Err(RecordError::ExpectedStringList(field)),
        }
    }
    Ok(out)
}

fn require_kind(obj: &Map<String, Value>, field: &'static str) -> Result<ProjectKind, RecordError> {
    let value = obj.get(field).ok_or(RecordError::MissingField(field))?;
    match value.as_str() {
        Some("featured") => Ok(ProjectKind::Featured),
        Some("small") => Ok(ProjectKind::Small),
        _ => Err(RecordError::ExpectedKind(field)),
    }
}

// tier 1: full RFC3339 timestamp, tier 2: plain YYYY-MM-DD
fn parse_flexible_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc().date());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
