//! REST-JSON protocol transport.
//!
//! Operations are bound to an HTTP method and a URI template; members travel
//! as URI labels, query parameters, or JSON body fields. Errors carry their
//! code in the `x-amzn-ErrorType` header and/or a `Code` body field.

use std::{fmt, sync::Arc};

use awsbind_auth::{ProvideCredentials, SigningParams, canonical::uri_encode, sign_request};
use awsbind_core::Endpoint;
use bytes::Bytes;
use chrono::Utc;
use http::{Method, header};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{Instrument, debug, debug_span, warn};

use crate::{
    client::HttpClient,
    error::{SdkError, ServiceError},
};

/// Content type of REST-JSON request bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json";

const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";
const REQUEST_ID_HEADER: &str = "x-amzn-requestid";

/// One REST-JSON call: method, encoded path, query, and optional body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestRequest {
    /// HTTP method.
    pub method: Method,
    /// Request path with labels already percent-encoded.
    pub path: String,
    /// Query parameters in the order they are sent (unencoded).
    pub query: Vec<(String, String)>,
    /// JSON body, if the operation has body members.
    pub body: Option<Bytes>,
}

impl RestRequest {
    /// A request with no query and no body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Append a query parameter.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Append a query parameter when `value` is present.
    #[must_use]
    pub fn query_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.query(key, v.to_string()),
            None => self,
        }
    }

    /// Serialize `body` as the JSON payload.
    ///
    /// # Errors
    /// Returns [`SdkError::Json`] if `body` cannot be serialized.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, SdkError> {
        self.body = Some(Bytes::from(serde_json::to_vec(body)?));
        Ok(self)
    }

    /// Encoded query string (without `?`).
    #[must_use]
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(k, v)| format!("{}={}", uri_encode(k), uri_encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Percent-encode a URI label value, rejecting empty labels.
///
/// # Errors
/// Returns [`SdkError::Build`] naming `label` when `value` is absent or empty.
pub fn encode_label(label: &str, value: Option<&str>) -> Result<String, SdkError> {
    match value {
        Some(v) if !v.is_empty() => Ok(uri_encode(v)),
        _ => Err(SdkError::Build(format!("missing required URI label {label}"))),
    }
}

/// Transport for REST-JSON services.
#[derive(Clone)]
pub struct RestJsonClient {
    endpoint: Endpoint,
    credentials: Arc<dyn ProvideCredentials>,
    http: Arc<dyn HttpClient>,
}

impl fmt::Debug for RestJsonClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestJsonClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl RestJsonClient {
    /// Create a transport for the service at `endpoint`.
    pub fn new(
        endpoint: Endpoint,
        credentials: Arc<dyn ProvideCredentials>,
        http: Arc<dyn HttpClient>,
    ) -> Self {
        Self {
            endpoint,
            credentials,
            http,
        }
    }

    /// The endpoint requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Build and sign `request` without sending it.
    ///
    /// # Errors
    /// Returns [`SdkError::Auth`] if credentials cannot be resolved and
    /// [`SdkError::Build`] if the URI is invalid.
    pub fn build_request(&self, request: &RestRequest) -> Result<http::Request<Bytes>, SdkError> {
        let mut uri = format!("{}{}", self.endpoint.url, request.path);
        if !request.query.is_empty() {
            uri.push('?');
            uri.push_str(&request.query_string());
        }

        let mut builder = http::Request::builder()
            .method(request.method.clone())
            .uri(uri);
        if request.body.is_some() {
            builder = builder.header(header::CONTENT_TYPE, JSON_CONTENT_TYPE);
        }
        let mut http_request = builder
            .body(request.body.clone().unwrap_or_default())
            .map_err(|e| SdkError::Build(e.to_string()))?;

        let credentials = self.credentials.provide()?;
        let signing = SigningParams::new(
            &self.endpoint.signing_region,
            &self.endpoint.signing_name,
            Utc::now(),
        );
        sign_request(&mut http_request, &credentials, &signing)?;
        Ok(http_request)
    }

    /// Send `request` for `operation` and decode the JSON response as `O`.
    ///
    /// An empty success body decodes as `{}`.
    ///
    /// # Errors
    /// Returns [`SdkError::Service`] when the service rejects the request,
    /// and the matching variant for signing, transport, or parse failures.
    pub async fn call<O: DeserializeOwned>(
        &self,
        operation: &str,
        request: RestRequest,
    ) -> Result<O, SdkError> {
        let span = debug_span!(
            "aws_call",
            service = %self.endpoint.signing_name,
            operation,
            method = %request.method
        );
        async {
            let http_request = self.build_request(&request)?;
            let response = self.http.send(http_request).await?;
            let status = response.status().as_u16();
            let request_id = header_str(response.headers(), REQUEST_ID_HEADER);

            if response.status().is_success() {
                debug!(status, request_id = request_id.as_deref().unwrap_or("-"), "Call succeeded");
                let body = response.into_body();
                if body.iter().all(u8::is_ascii_whitespace) {
                    return Ok(serde_json::from_slice(b"{}")?);
                }
                return Ok(serde_json::from_slice(&body)?);
            }

            let error = map_error(status, response.headers(), response.body(), request_id);
            warn!(status, code = %error.code, request_id = ?error.request_id, "Call failed");
            Err(SdkError::Service(error))
        }
        .instrument(span)
        .await
    }
}

fn header_str(headers: &http::HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned)
}

/// Strip the `:http://...` suffix and any `namespace#` prefix from an error type.
fn sanitize_error_code(raw: &str) -> String {
    let code = raw.split(':').next().unwrap_or(raw);
    let code = code.rsplit('#').next().unwrap_or(code);
    code.trim().to_owned()
}

fn map_error(
    status: u16,
    headers: &http::HeaderMap,
    body: &[u8],
    request_id: Option<String>,
) -> ServiceError {
    let json: serde_json::Value = serde_json::from_slice(body).unwrap_or_default();
    let field = |names: &[&str]| {
        names
            .iter()
            .find_map(|n| json.get(*n).and_then(serde_json::Value::as_str))
            .map(ToOwned::to_owned)
    };

    let code = header_str(headers, ERROR_TYPE_HEADER)
        .or_else(|| field(&["Code", "code", "__type"]))
        .map(|raw| sanitize_error_code(&raw))
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| {
            http::StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("Unknown")
                .replace(' ', "")
        });
    let message = field(&["Message", "message"])
        .unwrap_or_else(|| String::from_utf8_lossy(body).chars().take(256).collect());

    ServiceError {
        code,
        message,
        request_id,
        status,
    }
}

#[cfg(test)]
mod tests {
    use awsbind_auth::{Credentials, StaticProvider};
    use serde::Deserialize;

    use super::*;
    use crate::test_util::StaticHttpClient;

    #[derive(Debug, Default, Deserialize)]
    #[serde(rename_all = "PascalCase", default)]
    struct AccountOut {
        account: Option<serde_json::Value>,
    }

    fn client(http: &StaticHttpClient) -> RestJsonClient {
        let endpoint = Endpoint {
            url: "https://service.chime.aws.amazon.com".to_owned(),
            signing_region: "us-east-1".to_owned(),
            signing_name: "chime".to_owned(),
        };
        let credentials = StaticProvider::new(Credentials::new("AKID", "secret", None));
        RestJsonClient::new(endpoint, Arc::new(credentials), Arc::new(http.clone()))
    }

    #[test]
    fn test_should_encode_query_and_labels() {
        let request = RestRequest::new(Method::GET, "/search")
            .query("type", "phone-numbers")
            .query_opt("city", Some("New York"))
            .query_opt::<i32>("max-results", None);
        assert_eq!(request.query_string(), "type=phone-numbers&city=New%20York");
        assert_eq!(encode_label("phoneNumberId", Some("+12065550100")).unwrap(), "%2B12065550100");
        assert!(matches!(
            encode_label("accountId", Some("")),
            Err(SdkError::Build(_))
        ));
    }

    #[test]
    fn test_should_sanitize_error_codes() {
        assert_eq!(
            sanitize_error_code("NotFoundException:http://internal.amazon.com/coral/com.amazonaws.chime/"),
            "NotFoundException"
        );
        assert_eq!(sanitize_error_code("com.amazonaws.chime#BadRequestException"), "BadRequestException");
    }

    #[tokio::test]
    async fn test_should_send_signed_json_request() {
        let http = StaticHttpClient::new().with_response(
            201,
            r#"{"Account":{"AccountId":"a-1","Name":"acme"}}"#,
        );
        let request = RestRequest::new(Method::POST, "/accounts")
            .json(&serde_json::json!({"Name": "acme"}))
            .unwrap();

        let out: AccountOut = client(&http).call("CreateAccount", request).await.unwrap();

        assert_eq!(out.account.unwrap()["AccountId"], "a-1");
        let sent = http.last_request().unwrap();
        assert_eq!(sent.uri.to_string(), "https://service.chime.aws.amazon.com/accounts");
        assert_eq!(sent.header("content-type"), Some(JSON_CONTENT_TYPE));
        assert_eq!(sent.json_body()["Name"], "acme");
        assert!(
            sent.header("authorization")
                .unwrap()
                .contains("/us-east-1/chime/aws4_request")
        );
    }

    #[tokio::test]
    async fn test_should_treat_empty_body_as_empty_object() {
        let http = StaticHttpClient::new().with_response(204, "");
        let out: AccountOut = client(&http)
            .call("DeleteAccount", RestRequest::new(Method::DELETE, "/accounts/a-1"))
            .await
            .unwrap();
        assert!(out.account.is_none());
        assert!(http.last_request().unwrap().header("content-type").is_none());
    }

    #[tokio::test]
    async fn test_should_map_error_from_header_and_body() {
        let http = StaticHttpClient::new().with_response_headers(
            404,
            &[
                ("x-amzn-ErrorType", "NotFoundException:http://internal.amazon.com/"),
                ("x-amzn-RequestId", "req-7"),
            ],
            r#"{"Code":"NotFound","Message":"Account a-9 not found"}"#,
        );
        let err = client(&http)
            .call::<AccountOut>("GetAccount", RestRequest::new(Method::GET, "/accounts/a-9"))
            .await
            .unwrap_err();
        let service = err.as_service_error().unwrap();
        assert_eq!(service.code, "NotFoundException");
        assert_eq!(service.message, "Account a-9 not found");
        assert_eq!(service.request_id.as_deref(), Some("req-7"));
        assert_eq!(service.status, 404);
    }

    #[tokio::test]
    async fn test_should_map_error_from_body_only() {
        let http = StaticHttpClient::new()
            .with_response(429, r#"{"Code":"ThrottledClientException","Message":"slow down"}"#);
        let err = client(&http)
            .call::<AccountOut>("ListAccounts", RestRequest::new(Method::GET, "/accounts"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some("ThrottledClientException"));
    }
}
