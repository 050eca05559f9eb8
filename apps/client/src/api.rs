//! HTTP client for the resume persistence service.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use resume_contract::{
    ErrorBody, HealthResponse, PutResumeRequest, PutResumeResponse, ResumeResponse, HEALTH_PATH,
    RESUME_PATH,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure or an undecodable response body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ClientError {
    /// True when the server answered that no document exists.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status: 404, .. })
    }
}

/// The operations the sync layer needs from the persistence service.
#[async_trait]
pub trait ResumeApi: Send + Sync {
    async fn fetch_resume(&self, id: &str) -> Result<ResumeResponse, ClientError>;

    async fn save_resume(&self, id: &str, data: &Value) -> Result<PutResumeResponse, ClientError>;

    async fn health(&self) -> Result<HealthResponse, ClientError>;
}

/// reqwest-backed `ResumeApi` rooted at a base URL such as `http://localhost:4000/api`.
#[derive(Clone)]
pub struct HttpResumeClient {
    client: Client,
    base: Url,
}

impl HttpResumeClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self {
            client: Client::builder().build()?,
            base,
        })
    }

    /// Appends path segments to the base, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn resume_url(&self, id: &str) -> Result<Url, ClientError> {
        self.endpoint(&[RESUME_PATH.trim_start_matches('/'), id])
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.error)
                .unwrap_or_else(|_| format!("HTTP {}", status.as_u16()));
            debug!("Resume API returned {status}: {message}");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl ResumeApi for HttpResumeClient {
    async fn fetch_resume(&self, id: &str) -> Result<ResumeResponse, ClientError> {
        let url = self.resume_url(id)?;
        self.send(self.client.get(url)).await
    }

    async fn save_resume(&self, id: &str, data: &Value) -> Result<PutResumeResponse, ClientError> {
        let url = self.resume_url(id)?;
        let body = PutResumeRequest { data: data.clone() };
        self.send(self.client.put(url).json(&body)).await
    }

    async fn health(&self) -> Result<HealthResponse, ClientError> {
        let url = self.endpoint(&[HEALTH_PATH.trim_start_matches('/')])?;
        self.send(self.client.get(url)).await
    }
}
