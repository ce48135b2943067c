use super::types::*;
use crate::{Error, Result, config::ApiConfig};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait KnowledgeApi: Send + Sync {
    async fn health(&self) -> Result<HealthResponse>;
    async fn ask(&self, query: &str) -> Result<AnswerResponse>;
}

/// HTTP client for the Sailisi knowledge-QA API.
pub struct SailisiClient {
    client: reqwest::Client,
    base_url: String,
    health_timeout: Duration,
    ask_timeout: Duration,
}

impl SailisiClient {
    pub fn new(config: ApiConfig) -> Self {
        let base_url = config.base_url.trim_end_matches('/').to_string();

        debug!("Creating Sailisi client for: {}", base_url);

        Self {
            client: reqwest::Client::new(),
            base_url,
            health_timeout: config.health_timeout(),
            ask_timeout: config.query_timeout(),
        }
    }

    pub fn with_ask_timeout(mut self, timeout: Duration) -> Self {
        self.ask_timeout = timeout;
        self
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status));
        }

        response.json().await.map_err(classify)
    }
}

/// Maps transport failures onto the probe error taxonomy instead of a single
/// catch-all "request failed" bucket.
fn classify(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::timeout(e.to_string())
    } else if e.is_connect() {
        Error::unreachable(e.to_string())
    } else if e.is_decode() {
        Error::malformed(e.to_string())
    } else {
        Error::Network(e)
    }
}

#[async_trait]
impl KnowledgeApi for SailisiClient {
    async fn health(&self) -> Result<HealthResponse> {
        let url = format!("{}/health", self.base_url);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(self.health_timeout)
            .send()
            .await
            .map_err(classify)?;

        Self::decode(response).await
    }

    async fn ask(&self, query: &str) -> Result<AnswerResponse> {
        let url = format!("{}/knowledge", self.base_url);
        debug!("POST {} with query: {}", url, query);

        let request = QueryRequest {
            query: query.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .timeout(self.ask_timeout)
            .json(&request)
            .send()
            .await
            .map_err(classify)?;

        Self::decode(response).await
    }
}
