use crate::domain::{Education, Experience, Photo, PortfolioData, Project};
use crate::io::ContentSource;
use crate::parser::document::parse_document;
use std::cmp::Reverse;
use tracing::error;

/// Loads and validates the content document behind the site's sections.
///
/// Failures never escape this service: an unreadable or malformed document
/// logs an error and yields empty collections, so the page renders with
/// empty sections instead of crashing.
pub struct PortfolioService {
    source: Box<dyn ContentSource>,
}

impl PortfolioService {
    pub fn new(source: Box<dyn ContentSource>) -> Self {
        Self { source }
    }

    // a fresh snapshot on every call; nothing is cached between requests
    pub async fn load(&self) -> PortfolioData {
        let raw = match self.source.read_document().await {
            Ok(raw) => raw,
            Err(e) => {
                error!("Unable to read data document: {e:#}. Serving empty content.");
                return PortfolioData::empty();
            }
        };

        match parse_document(&raw) {
            Ok(data) => data,
            Err(e) => {
                error!("Unable to parse data document: {e}. Serving empty content.");
                PortfolioData::empty()
            }
        }
    }

    // current projects first, then the legacy collection
    pub async fn get_project_by_id(&self, id: i64) -> Option<Project> {
        let data = self.load().await;
        data.projects
            .into_iter()
            .chain(data.portfolio_items)
            .find(|project| project.id == id)
    }

    pub async fn get_photo_by_id(&self, id: i64) -> Option<Photo> {
        self.load().await.photos.into_iter().find(|photo| photo.id == id)
    }

    /// Experiences by display order; entries sharing an order are broken
    /// by most recent start first.
    pub async fn experiences_sorted(&self) -> Vec<Experience> {
        let mut experiences = self.load().await.experiences;
        experiences.sort_by_key(|e| (e.order, Reverse(e.start_date)));
        experiences
    }

    /// Education entries, most recent start first.
    pub async fn education_sorted(&self) -> Vec<Education> {
        let mut education = self.load().await.education;
        education.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        education
    }
}
