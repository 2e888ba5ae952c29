//! A recording [`HttpClient`] that replays canned responses.

use std::{collections::VecDeque, sync::Arc};

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;

use crate::{client::HttpClient, error::SdkError};

/// A request captured by [`StaticHttpClient`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method.
    pub method: http::Method,
    /// Full request URI.
    pub uri: http::Uri,
    /// Request headers, including the signature.
    pub headers: http::HeaderMap,
    /// Request body.
    pub body: Bytes,
}

impl RecordedRequest {
    /// Body as UTF-8 text.
    #[must_use]
    pub fn body_str(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Body decoded as form parameters.
    #[must_use]
    pub fn form_params(&self) -> Vec<(String, String)> {
        form_urlencoded::parse(&self.body).into_owned().collect()
    }

    /// First form parameter named `key`.
    #[must_use]
    pub fn form_param(&self, key: &str) -> Option<String> {
        self.form_params()
            .into_iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Body decoded as JSON.
    #[must_use]
    pub fn json_body(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap_or(serde_json::Value::Null)
    }

    /// Value of header `name`, if it is valid text.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// [`HttpClient`] that records every request and answers from a queue of
/// canned responses. Clones share the same queue and log.
#[derive(Debug, Clone, Default)]
pub struct StaticHttpClient {
    responses: Arc<Mutex<VecDeque<http::Response<Bytes>>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StaticHttpClient {
    /// An empty client; every send fails until a response is queued.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with `status` and `body`.
    #[must_use]
    pub fn with_response(self, status: u16, body: impl Into<Bytes>) -> Self {
        self.push(status, &[], body);
        self
    }

    /// Queue a response with extra headers.
    #[must_use]
    pub fn with_response_headers(
        self,
        status: u16,
        headers: &[(&'static str, &str)],
        body: impl Into<Bytes>,
    ) -> Self {
        self.push(status, headers, body);
        self
    }

    /// Queue a response.
    pub fn push(&self, status: u16, headers: &[(&'static str, &str)], body: impl Into<Bytes>) {
        let mut builder = http::Response::builder().status(status);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let response = builder
            .body(body.into())
            .expect("canned response must be valid");
        self.responses.lock().push_back(response);
    }

    /// Every request sent so far.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// The most recent request.
    #[must_use]
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().last().cloned()
    }
}

#[async_trait]
impl HttpClient for StaticHttpClient {
    async fn send(&self, request: http::Request<Bytes>) -> Result<http::Response<Bytes>, SdkError> {
        let (parts, body) = request.into_parts();
        self.requests.lock().push(RecordedRequest {
            method: parts.method,
            uri: parts.uri,
            headers: parts.headers,
            body,
        });
        self.responses
            .lock()
            .pop_front()
            .ok_or_else(|| SdkError::Transport("no canned response left".to_owned()))
    }
}
