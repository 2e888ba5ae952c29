//! EC2 query protocol transport.
//!
//! [`QueryClient::call`] is the single code path every EC2 action goes
//! through: flatten the request into `Action=...&Version=...` parameters,
//! sign, send, and either parse the `<{Action}Response>` document or map the
//! `<Response><Errors>` envelope onto [`ServiceError`].

use std::{fmt, sync::Arc};

use awsbind_auth::{ProvideCredentials, SigningParams, canonical::uri_encode, sign_request};
use awsbind_core::Endpoint;
use awsbind_query::{
    Ec2Deserialize, QueryParams, QuerySerialize, from_xml, parse_error_response, read_request_id,
};
use bytes::Bytes;
use chrono::Utc;
use http::{Method, header};
use tracing::{Instrument, debug, debug_span, warn};

use crate::{
    client::HttpClient,
    error::{SdkError, ServiceError},
};

/// Content type of query protocol request bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";

/// Longest body excerpt carried into an unparseable error.
const ERROR_EXCERPT_LEN: usize = 256;

/// Transport for query-protocol services.
#[derive(Clone)]
pub struct QueryClient {
    endpoint: Endpoint,
    api_version: String,
    credentials: Arc<dyn ProvideCredentials>,
    http: Arc<dyn HttpClient>,
}

impl fmt::Debug for QueryClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryClient")
            .field("endpoint", &self.endpoint)
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

impl QueryClient {
    /// Create a transport for the service at `endpoint`, speaking `api_version`.
    pub fn new(
        endpoint: Endpoint,
        api_version: impl Into<String>,
        credentials: Arc<dyn ProvideCredentials>,
        http: Arc<dyn HttpClient>,
    ) -> Self {
        Self {
            endpoint,
            api_version: api_version.into(),
            credentials,
            http,
        }
    }

    /// The endpoint requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// The `Version` parameter sent with every action.
    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Invoke `action` and parse its result document as `O`.
    ///
    /// # Errors
    /// Returns [`SdkError::Service`] when the service rejects the request,
    /// and the matching variant for signing, transport, or parse failures.
    pub async fn call<I, O>(
        &self,
        action: &str,
        method: &Method,
        path: &str,
        input: &I,
    ) -> Result<O, SdkError>
    where
        I: QuerySerialize + Sync + ?Sized,
        O: Ec2Deserialize,
    {
        let body = self.dispatch(action, method, path, input).await?;
        Ok(from_xml(&body)?)
    }

    /// Invoke an action that has no result document.
    ///
    /// # Errors
    /// Same as [`QueryClient::call`].
    pub async fn call_unit<I>(
        &self,
        action: &str,
        method: &Method,
        path: &str,
        input: &I,
    ) -> Result<(), SdkError>
    where
        I: QuerySerialize + Sync + ?Sized,
    {
        self.dispatch(action, method, path, input).await?;
        Ok(())
    }

    /// Build and sign the request for `action` without sending it.
    ///
    /// `GET` requests carry the parameters in the query string; every other
    /// method sends them as a form body.
    ///
    /// # Errors
    /// Returns [`SdkError::Auth`] if credentials cannot be resolved and
    /// [`SdkError::Build`] if the URI is invalid.
    pub fn build_request<I>(
        &self,
        action: &str,
        method: &Method,
        path: &str,
        input: &I,
    ) -> Result<http::Request<Bytes>, SdkError>
    where
        I: QuerySerialize + ?Sized,
    {
        let params = QueryParams::for_request(action, &self.api_version, input);

        let (uri, body) = if method == Method::GET {
            let query = to_query_string(&params);
            (format!("{}{path}?{query}", self.endpoint.url), Bytes::new())
        } else {
            (format!("{}{path}", self.endpoint.url), Bytes::from(params.to_form_body()))
        };

        let mut builder = http::Request::builder().method(method.clone()).uri(uri);
        if !body.is_empty() {
            builder = builder.header(header::CONTENT_TYPE, FORM_CONTENT_TYPE);
        }
        let mut request = builder
            .body(body)
            .map_err(|e| SdkError::Build(e.to_string()))?;

        let credentials = self.credentials.provide()?;
        let signing = SigningParams::new(
            &self.endpoint.signing_region,
            &self.endpoint.signing_name,
            Utc::now(),
        );
        sign_request(&mut request, &credentials, &signing)?;
        Ok(request)
    }

    async fn dispatch<I>(
        &self,
        action: &str,
        method: &Method,
        path: &str,
        input: &I,
    ) -> Result<Bytes, SdkError>
    where
        I: QuerySerialize + Sync + ?Sized,
    {
        let span = debug_span!(
            "aws_call",
            service = %self.endpoint.signing_name,
            action
        );
        async {
            let request = self.build_request(action, method, path, input)?;
            let response = self.http.send(request).await?;
            let status = response.status();
            let body = response.into_body();

            if status.is_success() {
                if tracing::enabled!(tracing::Level::DEBUG) {
                    debug!(
                        status = status.as_u16(),
                        request_id = read_request_id(&body).as_deref().unwrap_or("-"),
                        "Call succeeded"
                    );
                }
                return Ok(body);
            }

            let error = map_error(status.as_u16(), &body);
            if error.is_dry_run_success() {
                debug!(request_id = ?error.request_id, "Dry run would have succeeded");
            } else {
                warn!(
                    status = error.status,
                    code = %error.code,
                    request_id = ?error.request_id,
                    "Call failed"
                );
            }
            Err(SdkError::Service(error))
        }
        .instrument(span)
        .await
    }
}

fn map_error(status: u16, body: &[u8]) -> ServiceError {
    match parse_error_response(body) {
        Ok(response) => {
            let first = response.first().cloned().unwrap_or_default();
            ServiceError {
                code: first.code,
                message: first.message,
                request_id: response.request_id,
                status,
            }
        }
        Err(_) => {
            let text = String::from_utf8_lossy(body);
            let excerpt: String = text.chars().take(ERROR_EXCERPT_LEN).collect();
            ServiceError {
                code: http::StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("Unknown")
                    .replace(' ', ""),
                message: excerpt,
                request_id: None,
                status,
            }
        }
    }
}

/// Parameters as a query string, encoded the way SigV4 canonicalizes them
/// (`%20` for a space, never `+`).
fn to_query_string(params: &QueryParams) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", uri_encode(key), uri_encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use awsbind_auth::{Credentials, StaticProvider};
    use awsbind_query::{Reader, XmlError, read_members, read_value, skip_element};

    use super::*;
    use crate::test_util::StaticHttpClient;

    #[derive(Debug, Default)]
    struct DescribeRegions {
        regions: Vec<String>,
    }

    struct RegionName(String);

    impl Ec2Deserialize for RegionName {
        fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
            let mut name = String::new();
            read_members(reader, |reader, member| {
                if member == "regionName" {
                    name = read_value(reader)?;
                } else {
                    skip_element(reader)?;
                }
                Ok(())
            })?;
            Ok(Self(name))
        }
    }

    impl Ec2Deserialize for DescribeRegions {
        fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
            let mut out = Self::default();
            read_members(reader, |reader, member| {
                if member == "regionInfo" {
                    out.regions = read_value::<Vec<RegionName>>(reader)?
                        .into_iter()
                        .map(|r| r.0)
                        .collect();
                } else {
                    skip_element(reader)?;
                }
                Ok(())
            })?;
            Ok(out)
        }
    }

    struct RegionNames(Vec<String>);

    impl QuerySerialize for RegionNames {
        fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
            self.0
                .serialize_query(&awsbind_query::member_key(prefix, "RegionName"), params);
        }
    }

    fn client(http: &StaticHttpClient) -> QueryClient {
        let endpoint = Endpoint {
            url: "https://ec2.eu-west-1.amazonaws.com".to_owned(),
            signing_region: "eu-west-1".to_owned(),
            signing_name: "ec2".to_owned(),
        };
        let credentials = StaticProvider::new(Credentials::new("AKID", "secret", None));
        QueryClient::new(endpoint, "2014-10-01", Arc::new(credentials), Arc::new(http.clone()))
    }

    #[tokio::test]
    async fn test_should_post_signed_form_and_parse_result() {
        let http = StaticHttpClient::new().with_response(
            200,
            r#"<DescribeRegionsResponse xmlns="http://ec2.amazonaws.com/doc/2014-10-01/">
                 <requestId>req-1</requestId>
                 <regionInfo>
                   <item><regionName>eu-west-1</regionName><regionEndpoint>ec2.eu-west-1.amazonaws.com</regionEndpoint></item>
                   <item><regionName>us-east-1</regionName></item>
                 </regionInfo>
               </DescribeRegionsResponse>"#,
        );
        let input = RegionNames(vec!["eu-west-1".into(), "us-east-1".into()]);

        let result: DescribeRegions = client(&http)
            .call("DescribeRegions", &Method::POST, "/", &input)
            .await
            .unwrap();

        assert_eq!(result.regions, vec!["eu-west-1", "us-east-1"]);
        let sent = http.last_request().unwrap();
        assert_eq!(sent.method, Method::POST);
        assert_eq!(sent.uri.to_string(), "https://ec2.eu-west-1.amazonaws.com/");
        assert_eq!(sent.header("content-type"), Some(FORM_CONTENT_TYPE));
        assert_eq!(
            sent.body_str(),
            "Action=DescribeRegions&Version=2014-10-01&RegionName.1=eu-west-1&RegionName.2=us-east-1"
        );
        let auth = sent.header("authorization").unwrap();
        assert!(auth.starts_with("AWS4-HMAC-SHA256 Credential=AKID/"));
        assert!(auth.contains("/eu-west-1/ec2/aws4_request"));
        assert!(auth.contains("SignedHeaders=content-type;host;x-amz-date"));
    }

    #[tokio::test]
    async fn test_should_send_get_parameters_in_query_string() {
        let http = StaticHttpClient::new().with_response(200, "<R><return>true</return></R>");
        client(&http)
            .call_unit(
                "DescribeRegions",
                &Method::GET,
                "/",
                &RegionNames(vec!["a b+c".into()]),
            )
            .await
            .unwrap();
        let sent = http.last_request().unwrap();
        assert_eq!(
            sent.uri.query(),
            Some("Action=DescribeRegions&Version=2014-10-01&RegionName.1=a%20b%2Bc")
        );
        assert!(sent.body.is_empty());
        assert!(sent.header("content-type").is_none());
    }

    #[tokio::test]
    async fn test_should_map_ec2_error_document() {
        let http = StaticHttpClient::new().with_response(
            400,
            "<Response><Errors><Error><Code>InvalidParameterValue</Code>\
             <Message>Value (moon-1) for parameter regionName is invalid.</Message></Error></Errors>\
             <RequestID>req-9</RequestID></Response>",
        );
        let err = client(&http)
            .call::<_, DescribeRegions>(
                "DescribeRegions",
                &Method::POST,
                "/",
                &RegionNames(vec!["moon-1".into()]),
            )
            .await
            .unwrap_err();

        let service = err.as_service_error().unwrap();
        assert_eq!(service.code, "InvalidParameterValue");
        assert_eq!(service.status, 400);
        assert_eq!(service.request_id.as_deref(), Some("req-9"));
    }

    #[tokio::test]
    async fn test_should_report_dry_run_success_as_service_error() {
        let http = StaticHttpClient::new().with_response(
            412,
            "<Response><Errors><Error><Code>DryRunOperation</Code>\
             <Message>Request would have succeeded, but DryRun flag is set.</Message>\
             </Error></Errors><RequestID>r</RequestID></Response>",
        );
        let err = client(&http)
            .call_unit("DescribeRegions", &Method::POST, "/", &RegionNames(vec![]))
            .await
            .unwrap_err();
        assert!(err.is_dry_run_success());
    }

    #[tokio::test]
    async fn test_should_map_non_xml_error_body() {
        let http = StaticHttpClient::new().with_response(503, "upstream unavailable");
        let err = client(&http)
            .call_unit("DescribeRegions", &Method::POST, "/", &RegionNames(vec![]))
            .await
            .unwrap_err();
        let service = err.as_service_error().unwrap();
        assert_eq!(service.code, "ServiceUnavailable");
        assert_eq!(service.message, "upstream unavailable");
    }

    #[tokio::test]
    async fn test_should_surface_transport_errors() {
        let http = StaticHttpClient::new();
        let err = client(&http)
            .call_unit("DescribeRegions", &Method::POST, "/", &RegionNames(vec![]))
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::Transport(_)));
    }
}
