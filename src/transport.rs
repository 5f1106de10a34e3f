//! HTTP transport seam for the search endpoint.
//!
//! The controller talks to the network through the [`Transport`] trait so the
//! search flow can be exercised in tests with scripted responses instead of a
//! live connection. [`HttpTransport`] is the production implementation over a
//! shared pooled `reqwest` client.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    /// The request was cancelled. Expected when a newer search supersedes an
    /// in-flight one; callers discard it silently.
    #[error("request cancelled")]
    Cancelled,
    #[error("network error: {0}")]
    Network(String),
}

/// A raw response from the endpoint: status plus unparsed body.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn issue(&self, url: reqwest::Url) -> Result<TransportResponse, TransportError>;
}

pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn issue(&self, url: reqwest::Url) -> Result<TransportResponse, TransportError> {
        tracing::debug!(%url, "issuing search request");
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        tracing::debug!(status, bytes = body.len(), "search response received");

        Ok(TransportResponse { status, body })
    }
}
