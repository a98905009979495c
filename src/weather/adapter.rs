use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("upstream returned HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("response body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The one capability weather retrieval needs from the network: map a URL
/// to a parsed JSON document. Implementations are interchangeable; callers
/// must not depend on which one is in use. Each call performs exactly one
/// outbound request, with no retries and no caching.
#[async_trait]
pub trait FetchAdapter: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Value, FetchError>;
}

/// Full-featured variant: a configured `reqwest::Client` that rejects
/// non-2xx responses before parsing the body.
pub struct ClientAdapter {
    client: Client,
}

impl ClientAdapter {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent("WeatherReportServer/1.0")
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

impl Default for ClientAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FetchAdapter for ClientAdapter {
    async fn fetch(&self, url: &str) -> Result<Value, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        let json: Value = response.json().await?;
        Ok(json)
    }
}

/// Minimal variant built on the one-shot `reqwest::get` primitive: read the
/// whole body and parse it, with the library's default redirect and timeout
/// behavior and no status handling of its own.
pub struct OneShotAdapter;

#[async_trait]
impl FetchAdapter for OneShotAdapter {
    async fn fetch(&self, url: &str) -> Result<Value, FetchError> {
        let body = reqwest::get(url).await?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
