use crate::io::ContentSource;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Fetches the data document from a served asset URL (the browser/CDN path).
pub struct HttpContentSource {
    client: Client,
    url: String,
}

impl HttpContentSource {
    pub fn new(url: String) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn read_document(&self) -> Result<String> {
        let res = self.client.get(&self.url).send().await;

        match res {
            Ok(response) if response.status().is_success() => Ok(response.text().await?),
            Ok(response) => {
                anyhow::bail!(
                    "Data endpoint {} returned status {}",
                    self.url,
                    response.status()
                );
            }
            Err(e) => {
                anyhow::bail!("Failed to fetch data document from {}: {}", self.url, e);
            }
        }
    }
}
