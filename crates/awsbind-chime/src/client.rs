//! The Chime client.

use std::sync::Arc;

use async_trait::async_trait;
use awsbind_auth::{ChainProvider, ProvideCredentials};
use awsbind_chime_model::ChimeOperation;
#[allow(clippy::wildcard_imports)]
use awsbind_chime_model::{input::*, output::*};
use awsbind_core::{ClientConfig, Endpoint};
use awsbind_http::{HttpClient, ReqwestClient, RestJsonClient, SdkError};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{api::ChimeApi, bindings::HttpBinding};

/// Service name used for endpoint resolution and signing.
pub const SERVICE_NAME: &str = "chime";

/// [`ChimeApi`] implementation that talks to the Chime service.
///
/// Chime has a single global endpoint signed for `us-east-1`, whatever
/// region the configuration names.
#[derive(Debug, Clone)]
pub struct ChimeClient {
    inner: RestJsonClient,
}

impl ChimeClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    /// Returns [`SdkError::Config`] if the endpoint override is invalid and
    /// [`SdkError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, SdkError> {
        let endpoint = config.endpoint(SERVICE_NAME)?;
        debug!(url = %endpoint.url, "Creating Chime client");
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
            inner: RestJsonClient::new(endpoint, credentials, http),
        }
    }

    /// The endpoint requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        self.inner.endpoint()
    }

    /// Build the signed HTTP request for `input` without sending it.
    ///
    /// # Errors
    /// Returns [`SdkError::Build`] for a missing URI label and
    /// [`SdkError::Auth`] if credentials cannot be resolved.
    pub fn build_request<I: HttpBinding>(
        &self,
        input: &I,
    ) -> Result<http::Request<Bytes>, SdkError> {
        self.inner.build_request(&input.to_request()?)
    }

    async fn send<I, O>(&self, input: &I) -> Result<O, SdkError>
    where
        I: HttpBinding + Sync,
        O: DeserializeOwned,
    {
        let request = input.to_request()?;
        self.inner.call(I::OPERATION.as_str(), request).await
    }
}

/// Implements [`ChimeApi`] and `invoke_json` from an operation table.
macro_rules! chime_operations {
    ($($method:ident => $op:ident($input:ident) -> $output:ident;)*) => {
        #[async_trait]
        impl ChimeApi for ChimeClient {
            $(
                async fn $method(&self, input: $input) -> Result<$output, SdkError> {
                    self.send(&input).await
                }
            )*
        }

        impl ChimeClient {
            /// Invoke an operation by name with a JSON-encoded input.
            ///
            /// URI labels and query members are read from the same JSON object
            /// as body members, using their PascalCase names.
            ///
            /// # Errors
            /// Returns [`SdkError::Build`] for an unknown operation,
            /// [`SdkError::Json`] if `request` does not fit the input shape, and
            /// any error of the call.
            pub async fn invoke_json(
                &self,
                operation: &str,
                request: serde_json::Value,
            ) -> Result<serde_json::Value, SdkError> {
                let Some(op) = ChimeOperation::from_name(operation) else {
                    return Err(SdkError::Build(format!("unknown Chime operation {operation}")));
                };
                match op {
                    $(ChimeOperation::$op => {
                        let input: $input = serde_json::from_value(request)?;
                        Ok(serde_json::to_value(self.$method(input).await?)?)
                    })*
                }
            }
        }
    };
}

chime_operations! {
    associate_phone_number_with_user => AssociatePhoneNumberWithUser(AssociatePhoneNumberWithUserInput) -> AssociatePhoneNumberWithUserOutput;
    associate_phone_numbers_with_voice_connector => AssociatePhoneNumbersWithVoiceConnector(AssociatePhoneNumbersWithVoiceConnectorInput) -> AssociatePhoneNumbersWithVoiceConnectorOutput;
    batch_delete_phone_number => BatchDeletePhoneNumber(BatchDeletePhoneNumberInput) -> BatchDeletePhoneNumberOutput;
    batch_suspend_user => BatchSuspendUser(BatchSuspendUserInput) -> BatchSuspendUserOutput;
    batch_unsuspend_user => BatchUnsuspendUser(BatchUnsuspendUserInput) -> BatchUnsuspendUserOutput;
    batch_update_phone_number => BatchUpdatePhoneNumber(BatchUpdatePhoneNumberInput) -> BatchUpdatePhoneNumberOutput;
    batch_update_user => BatchUpdateUser(BatchUpdateUserInput) -> BatchUpdateUserOutput;
    create_account => CreateAccount(CreateAccountInput) -> CreateAccountOutput;
    create_phone_number_order => CreatePhoneNumberOrder(CreatePhoneNumberOrderInput) -> CreatePhoneNumberOrderOutput;
    create_voice_connector => CreateVoiceConnector(CreateVoiceConnectorInput) -> CreateVoiceConnectorOutput;
    delete_account => DeleteAccount(DeleteAccountInput) -> DeleteAccountOutput;
    delete_phone_number => DeletePhoneNumber(DeletePhoneNumberInput) -> DeletePhoneNumberOutput;
    delete_voice_connector => DeleteVoiceConnector(DeleteVoiceConnectorInput) -> DeleteVoiceConnectorOutput;
    delete_voice_connector_origination => DeleteVoiceConnectorOrigination(DeleteVoiceConnectorOriginationInput) -> DeleteVoiceConnectorOriginationOutput;
    delete_voice_connector_termination => DeleteVoiceConnectorTermination(DeleteVoiceConnectorTerminationInput) -> DeleteVoiceConnectorTerminationOutput;
    delete_voice_connector_termination_credentials => DeleteVoiceConnectorTerminationCredentials(DeleteVoiceConnectorTerminationCredentialsInput) -> DeleteVoiceConnectorTerminationCredentialsOutput;
    disassociate_phone_number_from_user => DisassociatePhoneNumberFromUser(DisassociatePhoneNumberFromUserInput) -> DisassociatePhoneNumberFromUserOutput;
    disassociate_phone_numbers_from_voice_connector => DisassociatePhoneNumbersFromVoiceConnector(DisassociatePhoneNumbersFromVoiceConnectorInput) -> DisassociatePhoneNumbersFromVoiceConnectorOutput;
    get_account => GetAccount(GetAccountInput) -> GetAccountOutput;
    get_account_settings => GetAccountSettings(GetAccountSettingsInput) -> GetAccountSettingsOutput;
    get_global_settings => GetGlobalSettings(GetGlobalSettingsInput) -> GetGlobalSettingsOutput;
    get_phone_number => GetPhoneNumber(GetPhoneNumberInput) -> GetPhoneNumberOutput;
    get_phone_number_order => GetPhoneNumberOrder(GetPhoneNumberOrderInput) -> GetPhoneNumberOrderOutput;
    get_user => GetUser(GetUserInput) -> GetUserOutput;
    get_user_settings => GetUserSettings(GetUserSettingsInput) -> GetUserSettingsOutput;
    get_voice_connector => GetVoiceConnector(GetVoiceConnectorInput) -> GetVoiceConnectorOutput;
    get_voice_connector_origination => GetVoiceConnectorOrigination(GetVoiceConnectorOriginationInput) -> GetVoiceConnectorOriginationOutput;
    get_voice_connector_termination => GetVoiceConnectorTermination(GetVoiceConnectorTerminationInput) -> GetVoiceConnectorTerminationOutput;
    get_voice_connector_termination_health => GetVoiceConnectorTerminationHealth(GetVoiceConnectorTerminationHealthInput) -> GetVoiceConnectorTerminationHealthOutput;
    invite_users => InviteUsers(InviteUsersInput) -> InviteUsersOutput;
    list_accounts => ListAccounts(ListAccountsInput) -> ListAccountsOutput;
    list_phone_number_orders => ListPhoneNumberOrders(ListPhoneNumberOrdersInput) -> ListPhoneNumberOrdersOutput;
    list_phone_numbers => ListPhoneNumbers(ListPhoneNumbersInput) -> ListPhoneNumbersOutput;
    list_users => ListUsers(ListUsersInput) -> ListUsersOutput;
    list_voice_connector_termination_credentials => ListVoiceConnectorTerminationCredentials(ListVoiceConnectorTerminationCredentialsInput) -> ListVoiceConnectorTerminationCredentialsOutput;
    list_voice_connectors => ListVoiceConnectors(ListVoiceConnectorsInput) -> ListVoiceConnectorsOutput;
    logout_user => LogoutUser(LogoutUserInput) -> LogoutUserOutput;
    put_voice_connector_origination => PutVoiceConnectorOrigination(PutVoiceConnectorOriginationInput) -> PutVoiceConnectorOriginationOutput;
    put_voice_connector_termination => PutVoiceConnectorTermination(PutVoiceConnectorTerminationInput) -> PutVoiceConnectorTerminationOutput;
    put_voice_connector_termination_credentials => PutVoiceConnectorTerminationCredentials(PutVoiceConnectorTerminationCredentialsInput) -> PutVoiceConnectorTerminationCredentialsOutput;
    reset_personal_pin => ResetPersonalPIN(ResetPersonalPINInput) -> ResetPersonalPINOutput;
    restore_phone_number => RestorePhoneNumber(RestorePhoneNumberInput) -> RestorePhoneNumberOutput;
    search_available_phone_numbers => SearchAvailablePhoneNumbers(SearchAvailablePhoneNumbersInput) -> SearchAvailablePhoneNumbersOutput;
    update_account => UpdateAccount(UpdateAccountInput) -> UpdateAccountOutput;
    update_account_settings => UpdateAccountSettings(UpdateAccountSettingsInput) -> UpdateAccountSettingsOutput;
    update_global_settings => UpdateGlobalSettings(UpdateGlobalSettingsInput) -> UpdateGlobalSettingsOutput;
    update_phone_number => UpdatePhoneNumber(UpdatePhoneNumberInput) -> UpdatePhoneNumberOutput;
    update_user => UpdateUser(UpdateUserInput) -> UpdateUserOutput;
    update_user_settings => UpdateUserSettings(UpdateUserSettingsInput) -> UpdateUserSettingsOutput;
    update_voice_connector => UpdateVoiceConnector(UpdateVoiceConnectorInput) -> UpdateVoiceConnectorOutput;
}

#[cfg(test)]
mod tests {
    use awsbind_auth::{Credentials, StaticProvider};
    use awsbind_chime_model::types::{AccountType, License, PhoneNumberProductType};
    use awsbind_http::test_util::StaticHttpClient;
    use serde_json::json;

    use super::*;

    fn client(http: &StaticHttpClient) -> ChimeClient {
        let endpoint = Endpoint {
            url: "https://service.chime.aws.amazon.com".to_owned(),
            signing_region: "us-east-1".to_owned(),
            signing_name: SERVICE_NAME.to_owned(),
        };
        let credentials = StaticProvider::new(Credentials::new("AKID", "secret", None));
        ChimeClient::from_parts(endpoint, Arc::new(credentials), Arc::new(http.clone()))
    }

    #[test]
    fn test_should_use_global_endpoint_for_any_region() {
        let config = ClientConfig::default()
            .with_region(awsbind_core::AwsRegion::new("eu-central-1").unwrap());
        let client = ChimeClient::new(&config).unwrap();
        assert_eq!(client.endpoint().url, "https://service.chime.aws.amazon.com");
        assert_eq!(client.endpoint().signing_region, "us-east-1");
    }

    #[test]
    fn test_should_build_signed_request_without_sending() {
        let http = StaticHttpClient::new();
        let request = client(&http)
            .build_request(&CreateVoiceConnectorInput {
                name: Some("trunk".into()),
                require_encryption: Some(true),
            })
            .unwrap();

        assert_eq!(request.method(), http::Method::POST);
        assert_eq!(
            request.uri().to_string(),
            "https://service.chime.aws.amazon.com/voice-connectors"
        );
        assert!(request.headers().contains_key("x-amz-date"));
        assert!(
            request.headers()["authorization"]
                .to_str()
                .unwrap()
                .contains("/us-east-1/chime/aws4_request")
        );
        let body: serde_json::Value = serde_json::from_slice(request.body()).unwrap();
        assert_eq!(body, json!({"Name": "trunk", "RequireEncryption": true}));
        assert!(http.requests().is_empty());
    }

    #[tokio::test]
    async fn test_should_create_account() {
        let http = StaticHttpClient::new().with_response(
            201,
            r#"{"Account":{"AwsAccountId":"123456789012","AccountId":"a-1","Name":"acme",
                "AccountType":"Team","DefaultLicense":"Pro","SupportedLicenses":["Basic","Pro"],
                "CreatedTimestamp":"2019-04-01T10:00:00Z"}}"#,
        );
        let output = client(&http)
            .create_account(CreateAccountInput {
                name: Some("acme".into()),
            })
            .await
            .unwrap();

        let account = output.account.unwrap();
        assert_eq!(account.account_id.as_deref(), Some("a-1"));
        assert_eq!(account.account_type, Some(AccountType::Team));
        assert_eq!(account.supported_licenses, vec![License::Basic, License::Pro]);
        let sent = http.last_request().unwrap();
        assert_eq!(sent.uri.path(), "/accounts");
        assert_eq!(sent.json_body(), json!({"Name": "acme"}));
    }

    #[tokio::test]
    async fn test_should_send_query_and_decode_list() {
        let http = StaticHttpClient::new().with_response(
            200,
            r#"{"PhoneNumbers":[{"PhoneNumberId":"+12065550100","ProductType":"BusinessCalling"}],
                "NextToken":"t-2"}"#,
        );
        let output = client(&http)
            .list_phone_numbers(ListPhoneNumbersInput {
                product_type: Some(PhoneNumberProductType::BusinessCalling),
                max_results: Some(1),
                ..ListPhoneNumbersInput::default()
            })
            .await
            .unwrap();

        assert_eq!(output.phone_numbers.len(), 1);
        assert_eq!(output.next_token.as_deref(), Some("t-2"));
        let sent = http.last_request().unwrap();
        assert_eq!(sent.method, http::Method::GET);
        assert_eq!(
            sent.uri.query(),
            Some("product-type=BusinessCalling&max-results=1")
        );
        assert!(sent.body.is_empty());
    }

    #[tokio::test]
    async fn test_should_accept_empty_success_body() {
        let http = StaticHttpClient::new().with_response(204, "");
        client(&http)
            .delete_account(DeleteAccountInput {
                account_id: Some("a-1".into()),
            })
            .await
            .unwrap();
        let sent = http.last_request().unwrap();
        assert_eq!(sent.method, http::Method::DELETE);
        assert_eq!(sent.uri.path(), "/accounts/a-1");
    }

    #[tokio::test]
    async fn test_should_not_send_when_label_is_missing() {
        let http = StaticHttpClient::new();
        let err = client(&http)
            .get_user(GetUserInput {
                account_id: Some("a-1".into()),
                user_id: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::Build(_)));
        assert!(http.requests().is_empty());
    }

    #[tokio::test]
    async fn test_should_surface_service_errors() {
        let http = StaticHttpClient::new().with_response_headers(
            403,
            &[("x-amzn-ErrorType", "ForbiddenException:"), ("x-amzn-RequestId", "rid-1")],
            r#"{"Code":"Forbidden","Message":"account suspended"}"#,
        );
        let err = client(&http)
            .logout_user(LogoutUserInput {
                account_id: Some("a".into()),
                user_id: Some("u".into()),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some("ForbiddenException"));
        assert_eq!(
            err.as_service_error().and_then(|e| e.request_id.as_deref()),
            Some("rid-1")
        );
    }

    #[tokio::test]
    async fn test_should_invoke_operation_by_name() {
        let http = StaticHttpClient::new()
            .with_response(200, r#"{"User":{"UserId":"u","PersonalPIN":"1234567890"}}"#);
        let client = client(&http);

        let output = client
            .invoke_json("ResetPersonalPIN", json!({"AccountId": "a", "UserId": "u"}))
            .await
            .unwrap();
        assert_eq!(output["User"]["PersonalPIN"], "1234567890");
        let sent = http.last_request().unwrap();
        assert_eq!(sent.uri.path(), "/accounts/a/users/u");
        assert_eq!(sent.uri.query(), Some("operation=reset-personal-pin"));

        assert!(matches!(
            client.invoke_json("CreateMeeting", json!({})).await,
            Err(SdkError::Build(_))
        ));
    }

    #[tokio::test]
    async fn test_should_send_every_operation_to_its_uri_template() {
        let labels = [
            ("accountId", "acct-1"),
            ("userId", "user-1"),
            ("phoneNumberId", "pn-1"),
            ("phoneNumberOrderId", "order-1"),
            ("voiceConnectorId", "vc-1"),
        ];
        let request = json!({
            "AccountId": "acct-1",
            "UserId": "user-1",
            "PhoneNumberId": "pn-1",
            "PhoneNumberOrderId": "order-1",
            "VoiceConnectorId": "vc-1",
        });

        for operation in ChimeOperation::ALL {
            let name = operation.as_str();
            let http = StaticHttpClient::new().with_response(200, "{}");
            client(&http)
                .invoke_json(name, request.clone())
                .await
                .unwrap_or_else(|e| panic!("{name}: {e}"));

            let (template_path, template_query) = operation
                .uri_template()
                .split_once('?')
                .unwrap_or((operation.uri_template(), ""));
            let expected_path = labels
                .iter()
                .fold(template_path.to_owned(), |path, (label, value)| {
                    path.replace(&format!("{{{label}}}"), value)
                });

            let sent = http.last_request().unwrap();
            assert_eq!(sent.method, operation.method(), "{name}");
            assert_eq!(sent.uri.path(), expected_path, "{name}");
            assert!(
                sent.uri.query().unwrap_or_default().starts_with(template_query),
                "{name}: {:?}",
                sent.uri.query()
            );
        }
    }
}
