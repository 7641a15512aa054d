use chrono::NaiveDate;
use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

// whether a project gets the big featured card or the small grid tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    #[display("featured")]
    Featured,
    #[display("small")]
    Small,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    pub technologies: Vec<String>,
    #[serde(rename = "type")]
    pub kind: ProjectKind,
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: i64,
    pub title: String,
    pub image_url: String,
    pub description: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: i64,
    pub company: String,
    pub role: String,
    pub description: String,
    pub start_date: NaiveDate,
    // None means the role is ongoing
    pub end_date: Option<NaiveDate>,
    pub order: i64,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: i64,
    pub school: String,
    pub degree: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: String,
    pub achievements: Vec<String>,
    pub image_url: String,
}

/// The full validated content document. A read-only snapshot once built;
/// every collection is independently sorted by the loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    pub projects: Vec<Project>,
    pub portfolio_items: Vec<Project>,
    pub photos: Vec<Photo>,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
}

impl PortfolioData {
    // the universal fallback: a page with empty sections still renders
    pub fn empty() -> Self {
        Self::default()
    }
}
