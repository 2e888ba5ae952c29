//! The EC2 client.

use std::sync::Arc;

use awsbind_auth::{ChainProvider, ProvideCredentials};
use awsbind_core::{ClientConfig, Endpoint};
use awsbind_ec2_model::API_VERSION;
use awsbind_http::{HttpClient, QueryClient, ReqwestClient, SdkError};
use tracing::debug;

/// Service name used for endpoint resolution and signing.
pub const SERVICE_NAME: &str = "ec2";

/// Async client for the Amazon EC2 query API.
///
/// Every action is a `POST /` with a form body and decodes the XML result
/// document. Actions without a result document return `()`.
#[derive(Debug, Clone)]
pub struct Ec2Client {
    inner: QueryClient,
}

impl Ec2Client {
    /// Build a client from configuration: resolved endpoint, the default
    /// credential chain, and a reqwest transport with the configured timeout.
    ///
    /// # Errors
    /// Returns [`SdkError::Config`] if the endpoint cannot be resolved and
    /// [`SdkError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, SdkError> {
        let endpoint = config.endpoint(SERVICE_NAME)?;
        debug!(url = %endpoint.url, region = %endpoint.signing_region, "Creating EC2 client");
        let credentials = ChainProvider::default_chain(config.profile.as_deref());
        let http = ReqwestClient::new(config.timeout)?;
        Ok(Self::from_parts(endpoint, Arc::new(credentials), Arc::new(http)))
    }

    /// Build a client from explicit parts.
    pub fn from_parts(
        endpoint: Endpoint,
        credentials: Arc<dyn ProvideCredentials>,
        http: Arc<dyn HttpClient>,
    ) -> Self {
        Self {
            inner: QueryClient::new(endpoint, API_VERSION, credentials, http),
        }
    }

    /// The endpoint requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        self.inner.endpoint()
    }

    pub(crate) fn transport(&self) -> &QueryClient {
        &self.inner
    }
}

/// Expands an action table into one async method per action plus
/// `invoke_json`, which dispatches on the action name.
macro_rules! ec2_operations {
    (@method $method:ident, $op:ident, $input:ty, $output:ty) => {
        #[doc = concat!("Invoke the `", stringify!($op), "` action.")]
        pub async fn $method(&self, input: $input) -> Result<$output, ::awsbind_http::SdkError> {
            self.transport()
                .call(
                    ::awsbind_ec2_model::Ec2Operation::$op.as_str(),
                    &::http::Method::POST,
                    "/",
                    &input,
                )
                .await
        }
    };
    (@method $method:ident, $op:ident, $input:ty) => {
        #[doc = concat!("Invoke the `", stringify!($op), "` action, which has no result.")]
        pub async fn $method(&self, input: $input) -> Result<(), ::awsbind_http::SdkError> {
            self.transport()
                .call_unit(
                    ::awsbind_ec2_model::Ec2Operation::$op.as_str(),
                    &::http::Method::POST,
                    "/",
                    &input,
                )
                .await
        }
    };
    (@json $client:ident, $method:ident, $input:ty, $value:ident, $output:ty) => {{
        let input: $input = ::serde_json::from_value($value)?;
        Ok(::serde_json::to_value($client.$method(input).await?)?)
    }};
    (@json $client:ident, $method:ident, $input:ty, $value:ident) => {{
        let input: $input = ::serde_json::from_value($value)?;
        $client.$method(input).await?;
        Ok(::serde_json::Value::Object(::serde_json::Map::new()))
    }};
    ($($method:ident => $op:ident($input:ty) $(-> $output:ty)?;)*) => {
        impl $crate::Ec2Client {
            $(ec2_operations!(@method $method, $op, $input $(, $output)?);)*

            /// Invoke an action by name with a JSON-encoded request.
            ///
            /// The request is decoded into the action's input shape (PascalCase
            /// member names) and the result is re-encoded as JSON. Actions
            /// without a result yield `{}`.
            ///
            /// # Errors
            /// Returns [`SdkError::Build`](::awsbind_http::SdkError::Build) for an
            /// unknown action, [`SdkError::Json`](::awsbind_http::SdkError::Json)
            /// if `request` does not fit the input shape, and any error of the call.
            pub async fn invoke_json(
                &self,
                action: &str,
                request: ::serde_json::Value,
            ) -> Result<::serde_json::Value, ::awsbind_http::SdkError> {
                let Some(operation) = ::awsbind_ec2_model::Ec2Operation::from_name(action) else {
                    return Err(::awsbind_http::SdkError::Build(format!(
                        "unknown EC2 action {action}"
                    )));
                };
                match operation {
                    $(::awsbind_ec2_model::Ec2Operation::$op => {
                        ec2_operations!(@json self, $method, $input, request $(, $output)?)
                    })*
                }
            }
        }
    };
}

pub(crate) use ec2_operations;

#[cfg(test)]
mod tests {
    use awsbind_auth::{Credentials, StaticProvider};
    use awsbind_core::AwsRegion;
    use awsbind_ec2_model::{
        Ec2Operation,
        input::{
            CreateTagsRequest, DescribeInstancesRequest, RunInstancesRequest,
            TerminateInstancesRequest,
        },
        types::Tag,
    };
    use awsbind_http::test_util::StaticHttpClient;
    use serde_json::json;

    use super::*;

    const RUN_INSTANCES: &str = r#"<RunInstancesResponse xmlns="http://ec2.amazonaws.com/doc/2014-10-01/">
  <requestId>59dbff89-35bd-4eac-99ed-be587EXAMPLE</requestId>
  <reservationId>r-1a2b3c4d</reservationId>
  <ownerId>123456789012</ownerId>
  <groupSet>
    <item><groupId>sg-1a2b3c4d</groupId><groupName>my-security-group</groupName></item>
  </groupSet>
  <instancesSet>
    <item>
      <instanceId>i-1a2b3c4d</instanceId>
      <imageId>ami-1a2b3c4d</imageId>
      <instanceState><code>0</code><name>pending</name></instanceState>
      <instanceType>m1.small</instanceType>
    </item>
  </instancesSet>
</RunInstancesResponse>"#;

    const DRY_RUN: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Response><Errors><Error><Code>DryRunOperation</Code><Message>Request would have succeeded, but DryRun flag is set.</Message></Error></Errors><RequestID>c3a5e6d0-1f2b-4c7e-8d9a-0b1c2d3e4f5a</RequestID></Response>"#;

    fn client(http: &StaticHttpClient) -> Ec2Client {
        let endpoint = Endpoint {
            url: "https://ec2.us-west-2.amazonaws.com".to_owned(),
            signing_region: "us-west-2".to_owned(),
            signing_name: SERVICE_NAME.to_owned(),
        };
        let credentials = StaticProvider::new(Credentials::new("AKID", "secret", None));
        Ec2Client::from_parts(endpoint, Arc::new(credentials), Arc::new(http.clone()))
    }

    #[test]
    fn test_should_resolve_endpoint_from_config() {
        let config = ClientConfig::default().with_region(AwsRegion::new("eu-west-1").unwrap());
        let client = Ec2Client::new(&config).unwrap();
        assert_eq!(client.endpoint().url, "https://ec2.eu-west-1.amazonaws.com");
        assert_eq!(client.endpoint().signing_name, "ec2");
    }

    #[tokio::test]
    async fn test_should_run_instances() {
        let http = StaticHttpClient::new().with_response(200, RUN_INSTANCES);
        let reservation = client(&http)
            .run_instances(RunInstancesRequest {
                image_id: Some("ami-1a2b3c4d".into()),
                min_count: Some(1),
                max_count: Some(1),
                ..RunInstancesRequest::default()
            })
            .await
            .unwrap();

        assert_eq!(reservation.reservation_id.as_deref(), Some("r-1a2b3c4d"));
        assert_eq!(reservation.groups[0].group_id.as_deref(), Some("sg-1a2b3c4d"));
        assert_eq!(
            reservation.instances[0]
                .state
                .as_ref()
                .and_then(|s| s.name.as_deref()),
            Some("pending")
        );

        let sent = http.last_request().unwrap();
        assert_eq!(sent.method, http::Method::POST);
        assert_eq!(sent.uri.path(), "/");
        assert_eq!(sent.form_param("Action").as_deref(), Some("RunInstances"));
        assert_eq!(sent.form_param("Version").as_deref(), Some("2014-10-01"));
        assert_eq!(sent.form_param("ImageId").as_deref(), Some("ami-1a2b3c4d"));
        assert!(
            sent.header("authorization")
                .unwrap()
                .contains("/us-west-2/ec2/aws4_request")
        );
    }

    #[tokio::test]
    async fn test_should_return_unit_for_actions_without_result() {
        let http = StaticHttpClient::new().with_response(
            200,
            r#"<CreateTagsResponse xmlns="http://ec2.amazonaws.com/doc/2014-10-01/"><requestId>r-1</requestId><return>true</return></CreateTagsResponse>"#,
        );
        client(&http)
            .create_tags(CreateTagsRequest {
                resources: vec!["i-1".into()],
                tags: vec![Tag {
                    key: Some("env".into()),
                    value: Some("prod".into()),
                }],
                ..CreateTagsRequest::default()
            })
            .await
            .unwrap();

        let sent = http.last_request().unwrap();
        assert_eq!(sent.form_param("ResourceId.1").as_deref(), Some("i-1"));
        assert_eq!(sent.form_param("Tag.1.Key").as_deref(), Some("env"));
    }

    #[tokio::test]
    async fn test_should_surface_dry_run_as_service_error() {
        let http = StaticHttpClient::new().with_response(412, DRY_RUN);
        let err = client(&http)
            .terminate_instances(TerminateInstancesRequest {
                dry_run: Some(true),
                instance_ids: vec!["i-1".into()],
            })
            .await
            .unwrap_err();

        assert!(err.is_dry_run_success());
        let service = err.as_service_error().unwrap();
        assert_eq!(service.status, 412);
        assert_eq!(
            service.request_id.as_deref(),
            Some("c3a5e6d0-1f2b-4c7e-8d9a-0b1c2d3e4f5a")
        );
        assert_eq!(http.last_request().unwrap().form_param("DryRun").as_deref(), Some("true"));
    }

    #[tokio::test]
    async fn test_should_map_not_found_error() {
        let http = StaticHttpClient::new().with_response(
            400,
            "<Response><Errors><Error><Code>InvalidInstanceID.NotFound</Code>\
             <Message>The instance ID 'i-9' does not exist</Message></Error></Errors>\
             <RequestID>req-2</RequestID></Response>",
        );
        let err = client(&http)
            .describe_instances(DescribeInstancesRequest {
                instance_ids: vec!["i-9".into()],
                ..DescribeInstancesRequest::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some("InvalidInstanceID.NotFound"));
        assert!(!err.is_dry_run_success());
    }

    #[tokio::test]
    async fn test_should_invoke_action_by_name_with_json() {
        let http = StaticHttpClient::new()
            .with_response(200, RUN_INSTANCES)
            .with_response(
                200,
                "<DeleteKeyPairResponse><requestId>r</requestId><return>true</return></DeleteKeyPairResponse>",
            );
        let client = client(&http);

        let result = client
            .invoke_json(
                "RunInstances",
                json!({"ImageId": "ami-1a2b3c4d", "MinCount": 1, "MaxCount": 1}),
            )
            .await
            .unwrap();
        assert_eq!(result["ReservationId"], "r-1a2b3c4d");
        assert_eq!(result["Instances"][0]["InstanceId"], "i-1a2b3c4d");

        let unit = client
            .invoke_json("DeleteKeyPair", json!({"KeyName": "k"}))
            .await
            .unwrap();
        assert_eq!(unit, json!({}));
        assert_eq!(http.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_should_invoke_every_action_by_name() {
        for operation in Ec2Operation::ALL {
            let name = operation.as_str();
            let http = StaticHttpClient::new().with_response(
                200,
                format!(
                    r#"<{name}Response xmlns="http://ec2.amazonaws.com/doc/2014-10-01/"><requestId>r</requestId><return>true</return></{name}Response>"#
                ),
            );
            let result = client(&http)
                .invoke_json(name, json!({}))
                .await
                .unwrap_or_else(|e| panic!("{name}: {e}"));
            if !operation.has_output() {
                assert_eq!(result, json!({}), "{name}");
            }

            let sent = http.last_request().unwrap();
            assert_eq!(sent.method, http::Method::POST, "{name}");
            assert_eq!(sent.uri.path(), "/", "{name}");
            assert!(
                sent.body_str().starts_with(&format!("Action={name}&Version=2014-10-01")),
                "{name}: {}",
                sent.body_str()
            );
        }
    }

    #[tokio::test]
    async fn test_should_reject_unknown_action_and_bad_json() {
        let http = StaticHttpClient::new();
        let client = client(&http);
        assert!(matches!(
            client.invoke_json("LaunchRockets", json!({})).await,
            Err(SdkError::Build(_))
        ));
        assert!(matches!(
            client
                .invoke_json("DescribeInstances", json!({"MaxResults": "many"}))
                .await,
            Err(SdkError::Json(_))
        ));
        assert!(http.requests().is_empty());
    }
}
