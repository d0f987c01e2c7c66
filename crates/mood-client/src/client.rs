//! Guidance client trait and its HTTP implementation

use reqwest::StatusCode;
use url::Url;

use mood_core::prelude::*;
use mood_core::{FetchError, GuidanceResult};

use crate::protocol::{ClientConfig, MoodRequest};

/// Guidance lookups against the backend.
///
/// Callers must not pass an empty mood; the client sends whatever it gets.
/// Failures carry their cause but are never retried here.
#[trait_variant::make(GuidanceClient: Send)]
pub trait LocalGuidanceClient {
    /// One round trip: submit `mood`, decode the guidance
    async fn fetch_guidance(&self, mood: &str) -> std::result::Result<GuidanceResult, FetchError>;

    /// Probe the backend's health endpoint
    async fn health(&self) -> std::result::Result<(), FetchError>;
}

/// reqwest-backed guidance client
#[derive(Debug, Clone)]
pub struct HttpGuidanceClient {
    http: reqwest::Client,
    verse_url: Url,
    health_url: Url,
}

impl HttpGuidanceClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let verse_url = config.verse_url()?;
        let health_url = config.health_url()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        info!("Guidance endpoint: {}", verse_url);
        Ok(Self {
            http,
            verse_url,
            health_url,
        })
    }

    pub fn verse_url(&self) -> &Url {
        &self.verse_url
    }
}

impl GuidanceClient for HttpGuidanceClient {
    async fn fetch_guidance(&self, mood: &str) -> std::result::Result<GuidanceResult, FetchError> {
        debug!("POST {} mood={:?}", self.verse_url, mood);

        let response = self
            .http
            .post(self.verse_url.clone())
            .json(&MoodRequest::new(mood))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, response).await);
        }

        response.json::<GuidanceResult>().await.map_err(|e| {
            if e.is_decode() {
                FetchError::decode(e.to_string())
            } else {
                transport_error(e)
            }
        })
    }

    async fn health(&self) -> std::result::Result<(), FetchError> {
        let response = self
            .http
            .get(self.health_url.clone())
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(status_error(status, response).await)
        }
    }
}

fn transport_error(err: reqwest::Error) -> FetchError {
    FetchError::transport(err.to_string())
}

async fn status_error(status: StatusCode, response: reqwest::Response) -> FetchError {
    // Body is best-effort; an unreadable body is not a second failure.
    let body = response.text().await.unwrap_or_default();
    FetchError::status(status.as_u16(), body)
}
