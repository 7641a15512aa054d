use crate::io::ContentSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads the data document from a fixed path on disk (the server-rendered path).
pub struct FileContentSource {
    pub path: PathBuf,
}

#[async_trait]
impl ContentSource for FileContentSource {
    async fn read_document(&self) -> Result<String> {
        std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read data document at {}", self.path.display()))
    }
}
