use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

// the one thing the core needs from any flag vendor: a key and an identity
// in, a boolean out. concrete vendor adapters implement this
#[async_trait]
pub trait FlagProvider: Send + Sync {
    async fn evaluate(&self, key: &str, visitor_id: &str) -> Result<bool>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EvaluateRequest<'a> {
    flag_key: &'a str,
    user: EvaluateUser<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EvaluateUser<'a> {
    user_id: &'a str,
}

#[derive(Deserialize)]
struct EvaluateResponse {
    value: bool,
}

pub struct HttpFlagProvider {
    client: Client,
    url: String,
    secret: String,
}

impl HttpFlagProvider {
    pub fn new(url: String, secret: String) -> Self {
        Self {
            client: Client::new(),
            url,
            secret,
        }
    }
}

#[async_trait]
impl FlagProvider for HttpFlagProvider {
    async fn evaluate(&self, key: &str, visitor_id: &str) -> Result<bool> {
        let body = EvaluateRequest {
            flag_key: key,
            user: EvaluateUser {
                user_id: visitor_id,
            },
        };

        let res = self
            .client
            .post(&self.url)
            .header("Authorization", format!("Bearer {}", self.secret))
            .json(&body)
            .send()
            .await;

        match res {
            Ok(response) if response.status().is_success() => {
                let parsed: EvaluateResponse = response.json().await?;
                Ok(parsed.value)
            }
            Ok(response) => {
                anyhow::bail!(
                    "Flag provider rejected evaluation of {}. Status: {}",
                    key,
                    response.status()
                );
            }
            Err(e) => {
                anyhow::bail!("Failed to reach flag provider: {}", e);
            }
        }
    }
}
