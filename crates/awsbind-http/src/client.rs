//! The HTTP client seam.

use std::{fmt, time::Duration};

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::SdkError;

/// Sends a fully signed request and returns the buffered response.
///
/// Implementations must not retry or alter the request: the signature
/// covers its headers and body.
#[async_trait]
pub trait HttpClient: Send + Sync + fmt::Debug {
    /// Send `request` and read the whole response body.
    async fn send(&self, request: http::Request<Bytes>) -> Result<http::Response<Bytes>, SdkError>;
}

/// [`HttpClient`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Create a client whose requests time out after `timeout`.
    ///
    /// # Errors
    /// Returns [`SdkError::Transport`] if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self, SdkError> {
        let inner = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("awsbind/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SdkError::Transport(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Wrap an existing `reqwest` client.
    #[must_use]
    pub fn from_client(inner: reqwest::Client) -> Self {
        Self { inner }
    }
}

fn map_reqwest_error(err: &reqwest::Error) -> SdkError {
    if err.is_timeout() {
        SdkError::Timeout
    } else {
        SdkError::Transport(err.to_string())
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn send(&self, request: http::Request<Bytes>) -> Result<http::Response<Bytes>, SdkError> {
        let request =
            reqwest::Request::try_from(request).map_err(|e| SdkError::Build(e.to_string()))?;
        let response = self
            .inner
            .execute(request)
            .await
            .map_err(|e| map_reqwest_error(&e))?;

        let mut builder = http::Response::builder().status(response.status());
        if let Some(headers) = builder.headers_mut() {
            headers.extend(response.headers().clone());
        }
        let body = response.bytes().await.map_err(|e| map_reqwest_error(&e))?;
        builder
            .body(body)
            .map_err(|e| SdkError::Transport(e.to_string()))
    }
}
