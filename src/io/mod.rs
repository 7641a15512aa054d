use anyhow::Result;
use async_trait::async_trait;

pub mod http;
pub mod local;

// where the raw data document comes from. the validation pipeline behaves
// identically for every implementation; only the I/O mechanism differs
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn read_document(&self) -> Result<String>;
}
