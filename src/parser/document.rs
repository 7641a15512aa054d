use crate::domain::PortfolioData;
use crate::parser::records::{
    parse_education, parse_experience, parse_legacy_item, parse_photo, parse_project, RecordError,
};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("document is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("document root must be a JSON object")]
    RootNotObject,
}

/// Turns the raw data document into a validated, sorted `PortfolioData`.
///
/// Individual records that fail validation are logged and dropped; the
/// document only fails as a whole when it isn't JSON or the root isn't an
/// object. The caller decides what to do with that failure.
pub fn parse_document(raw: &str) -> Result<PortfolioData, DocumentError> {
    let root: Value = serde_json::from_str(raw)?;
    let root = root.as_object().ok_or(DocumentError::RootNotObject)?;

    let mut projects = collect(root, "projects", parse_project);
    let mut portfolio_items = collect(root, "portfolioItems", parse_legacy_item);
    let mut photos = collect(root, "photos", parse_photo);
    let mut experiences = collect(root, "experiences", parse_experience);
    let mut education = collect(root, "education", parse_education);

    // stable sorts, so records with equal keys keep their document order
    projects.sort_by_key(|p| p.order);
    portfolio_items.sort_by_key(|p| p.order);
    photos.sort_by(|a, b| b.date.cmp(&a.date));
    experiences.sort_by_key(|e| e.order);
    education.sort_by(|a, b| b.start_date.cmp(&a.start_date));

    Ok(PortfolioData {
        projects,
        portfolio_items,
        photos,
        experiences,
        education,
    })
}

// run one top-level array through its record parser, keeping whatever
// validates. a missing key (or one that isn't an array) is an empty section
fn collect<T>(
    root: &Map<String, Value>,
    key: &str,
    parse: impl Fn(&Value) -> Result<T, RecordError>,
) -> Vec<T> {
    let Some(items) = root.get(key).and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match parse(item) {
            Ok(record) => out.push(record),
            Err(e) => {
                warn!("Skipping invalid record {key}[{index}]: {e}");
            }
        }
    }
    out
}
