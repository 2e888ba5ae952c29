//! REST bindings of the Chime operations.
//!
//! Each input knows its HTTP method, its URI (labels percent-encoded, fixed
//! `operation=` or `type=` markers first, then optional query members), and
//! whether it carries a JSON body. Members bound to the URI are skipped by the
//! input's serde impl, so the body is the input serialized as-is.

#[allow(clippy::wildcard_imports)]
use awsbind_chime_model::{ChimeOperation, input::*};
use awsbind_http::{RestRequest, SdkError, rest_json::encode_label};
use http::Method;

/// Maps an operation input onto a REST request.
pub trait HttpBinding {
    /// The operation this input belongs to.
    const OPERATION: ChimeOperation;

    /// Build the unsigned request.
    ///
    /// # Errors
    /// Returns [`SdkError::Build`] when a URI label is missing or empty.
    fn to_request(&self) -> Result<RestRequest, SdkError>;
}

impl HttpBinding for AssociatePhoneNumberWithUserInput {
    const OPERATION: ChimeOperation = ChimeOperation::AssociatePhoneNumberWithUser;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/accounts/{}/users/{}",
            encode_label("accountId", self.account_id.as_deref())?,
            encode_label("userId", self.user_id.as_deref())?,
        );
        RestRequest::new(Method::POST, path)
            .query("operation", "associate-phone-number")
            .json(self)
    }
}

impl HttpBinding for AssociatePhoneNumbersWithVoiceConnectorInput {
    const OPERATION: ChimeOperation = ChimeOperation::AssociatePhoneNumbersWithVoiceConnector;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/voice-connectors/{}",
            encode_label("voiceConnectorId", self.voice_connector_id.as_deref())?,
        );
        RestRequest::new(Method::POST, path)
            .query("operation", "associate-phone-numbers")
            .json(self)
    }
}

impl HttpBinding for BatchDeletePhoneNumberInput {
    const OPERATION: ChimeOperation = ChimeOperation::BatchDeletePhoneNumber;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        RestRequest::new(Method::POST, "/phone-numbers")
            .query("operation", "batch-delete")
            .json(self)
    }
}

impl HttpBinding for BatchSuspendUserInput {
    const OPERATION: ChimeOperation = ChimeOperation::BatchSuspendUser;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/accounts/{}/users",
            encode_label("accountId", self.account_id.as_deref())?,
        );
        RestRequest::new(Method::POST, path)
            .query("operation", "suspend")
            .json(self)
    }
}

impl HttpBinding for BatchUnsuspendUserInput {
    const OPERATION: ChimeOperation = ChimeOperation::BatchUnsuspendUser;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/accounts/{}/users",
            encode_label("accountId", self.account_id.as_deref())?,
        );
        RestRequest::new(Method::POST, path)
            .query("operation", "unsuspend")
            .json(self)
    }
}

impl HttpBinding for BatchUpdatePhoneNumberInput {
    const OPERATION: ChimeOperation = ChimeOperation::BatchUpdatePhoneNumber;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        RestRequest::new(Method::POST, "/phone-numbers")
            .query("operation", "batch-update")
            .json(self)
    }
}

impl HttpBinding for BatchUpdateUserInput {
    const OPERATION: ChimeOperation = ChimeOperation::BatchUpdateUser;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/accounts/{}/users",
            encode_label("accountId", self.account_id.as_deref())?,
        );
        RestRequest::new(Method::POST, path)
            .json(self)
    }
}

impl HttpBinding for CreateAccountInput {
    const OPERATION: ChimeOperation = ChimeOperation::CreateAccount;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        RestRequest::new(Method::POST, "/accounts")
            .json(self)
    }
}

impl HttpBinding for CreatePhoneNumberOrderInput {
    const OPERATION: ChimeOperation = ChimeOperation::CreatePhoneNumberOrder;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        RestRequest::new(Method::POST, "/phone-number-orders")
            .json(self)
    }
}

impl HttpBinding for CreateVoiceConnectorInput {
    const OPERATION: ChimeOperation = ChimeOperation::CreateVoiceConnector;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        RestRequest::new(Method::POST, "/voice-connectors")
            .json(self)
    }
}

impl HttpBinding for DeleteAccountInput {
    const OPERATION: ChimeOperation = ChimeOperation::DeleteAccount;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!("/accounts/{}", encode_label("accountId", self.account_id.as_deref())?);
        Ok(RestRequest::new(Method::DELETE, path))
    }
}

impl HttpBinding for DeletePhoneNumberInput {
    const OPERATION: ChimeOperation = ChimeOperation::DeletePhoneNumber;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/phone-numbers/{}",
            encode_label("phoneNumberId", self.phone_number_id.as_deref())?,
        );
        Ok(RestRequest::new(Method::DELETE, path))
    }
}

impl HttpBinding for DeleteVoiceConnectorInput {
    const OPERATION: ChimeOperation = ChimeOperation::DeleteVoiceConnector;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/voice-connectors/{}",
            encode_label("voiceConnectorId", self.voice_connector_id.as_deref())?,
        );
        Ok(RestRequest::new(Method::DELETE, path))
    }
}

impl HttpBinding for DeleteVoiceConnectorOriginationInput {
    const OPERATION: ChimeOperation = ChimeOperation::DeleteVoiceConnectorOrigination;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/voice-connectors/{}/origination",
            encode_label("voiceConnectorId", self.voice_connector_id.as_deref())?,
        );
        Ok(RestRequest::new(Method::DELETE, path))
    }
}

impl HttpBinding for DeleteVoiceConnectorTerminationInput {
    const OPERATION: ChimeOperation = ChimeOperation::DeleteVoiceConnectorTermination;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/voice-connectors/{}/termination",
            encode_label("voiceConnectorId", self.voice_connector_id.as_deref())?,
        );
        Ok(RestRequest::new(Method::DELETE, path))
    }
}

impl HttpBinding for DeleteVoiceConnectorTerminationCredentialsInput {
    const OPERATION: ChimeOperation = ChimeOperation::DeleteVoiceConnectorTerminationCredentials;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/voice-connectors/{}/termination/credentials",
            encode_label("voiceConnectorId", self.voice_connector_id.as_deref())?,
        );
        RestRequest::new(Method::POST, path)
            .query("operation", "delete")
            .json(self)
    }
}

impl HttpBinding for DisassociatePhoneNumberFromUserInput {
    const OPERATION: ChimeOperation = ChimeOperation::DisassociatePhoneNumberFromUser;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/accounts/{}/users/{}",
            encode_label("accountId", self.account_id.as_deref())?,
            encode_label("userId", self.user_id.as_deref())?,
        );
        Ok(RestRequest::new(Method::POST, path)
            .query("operation", "disassociate-phone-number"))
    }
}

impl HttpBinding for DisassociatePhoneNumbersFromVoiceConnectorInput {
    const OPERATION: ChimeOperation = ChimeOperation::DisassociatePhoneNumbersFromVoiceConnector;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/voice-connectors/{}",
            encode_label("voiceConnectorId", self.voice_connector_id.as_deref())?,
        );
        RestRequest::new(Method::POST, path)
            .query("operation", "disassociate-phone-numbers")
            .json(self)
    }
}

impl HttpBinding for GetAccountInput {
    const OPERATION: ChimeOperation = ChimeOperation::GetAccount;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!("/accounts/{}", encode_label("accountId", self.account_id.as_deref())?);
        Ok(RestRequest::new(Method::GET, path))
    }
}

impl HttpBinding for GetAccountSettingsInput {
    const OPERATION: ChimeOperation = ChimeOperation::GetAccountSettings;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/accounts/{}/settings",
            encode_label("accountId", self.account_id.as_deref())?,
        );
        Ok(RestRequest::new(Method::GET, path))
    }
}

impl HttpBinding for GetGlobalSettingsInput {
    const OPERATION: ChimeOperation = ChimeOperation::GetGlobalSettings;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        Ok(RestRequest::new(Method::GET, "/settings"))
    }
}

impl HttpBinding for GetPhoneNumberInput {
    const OPERATION: ChimeOperation = ChimeOperation::GetPhoneNumber;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/phone-numbers/{}",
            encode_label("phoneNumberId", self.phone_number_id.as_deref())?,
        );
        Ok(RestRequest::new(Method::GET, path))
    }
}

impl HttpBinding for GetPhoneNumberOrderInput {
    const OPERATION: ChimeOperation = ChimeOperation::GetPhoneNumberOrder;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/phone-number-orders/{}",
            encode_label("phoneNumberOrderId", self.phone_number_order_id.as_deref())?,
        );
        Ok(RestRequest::new(Method::GET, path))
    }
}

impl HttpBinding for GetUserInput {
    const OPERATION: ChimeOperation = ChimeOperation::GetUser;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/accounts/{}/users/{}",
            encode_label("accountId", self.account_id.as_deref())?,
            encode_label("userId", self.user_id.as_deref())?,
        );
        Ok(RestRequest::new(Method::GET, path))
    }
}

impl HttpBinding for GetUserSettingsInput {
    const OPERATION: ChimeOperation = ChimeOperation::GetUserSettings;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/accounts/{}/users/{}/settings",
            encode_label("accountId", self.account_id.as_deref())?,
            encode_label("userId", self.user_id.as_deref())?,
        );
        Ok(RestRequest::new(Method::GET, path))
    }
}

impl HttpBinding for GetVoiceConnectorInput {
    const OPERATION: ChimeOperation = ChimeOperation::GetVoiceConnector;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/voice-connectors/{}",
            encode_label("voiceConnectorId", self.voice_connector_id.as_deref())?,
        );
        Ok(RestRequest::new(Method::GET, path))
    }
}

impl HttpBinding for GetVoiceConnectorOriginationInput {
    const OPERATION: ChimeOperation = ChimeOperation::GetVoiceConnectorOrigination;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/voice-connectors/{}/origination",
            encode_label("voiceConnectorId", self.voice_connector_id.as_deref())?,
        );
        Ok(RestRequest::new(Method::GET, path))
    }
}

impl HttpBinding for GetVoiceConnectorTerminationInput {
    const OPERATION: ChimeOperation = ChimeOperation::GetVoiceConnectorTermination;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/voice-connectors/{}/termination",
            encode_label("voiceConnectorId", self.voice_connector_id.as_deref())?,
        );
        Ok(RestRequest::new(Method::GET, path))
    }
}

impl HttpBinding for GetVoiceConnectorTerminationHealthInput {
    const OPERATION: ChimeOperation = ChimeOperation::GetVoiceConnectorTerminationHealth;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/voice-connectors/{}/termination/health",
            encode_label("voiceConnectorId", self.voice_connector_id.as_deref())?,
        );
        Ok(RestRequest::new(Method::GET, path))
    }
}

impl HttpBinding for InviteUsersInput {
    const OPERATION: ChimeOperation = ChimeOperation::InviteUsers;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/accounts/{}/users",
            encode_label("accountId", self.account_id.as_deref())?,
        );
        RestRequest::new(Method::POST, path)
            .query("operation", "add")
            .json(self)
    }
}

impl HttpBinding for ListAccountsInput {
    const OPERATION: ChimeOperation = ChimeOperation::ListAccounts;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        Ok(RestRequest::new(Method::GET, "/accounts")
            .query_opt("name", self.name.as_deref())
            .query_opt("user-email", self.user_email.as_deref())
            .query_opt("next-token", self.next_token.as_deref())
            .query_opt("max-results", self.max_results))
    }
}

impl HttpBinding for ListPhoneNumberOrdersInput {
    const OPERATION: ChimeOperation = ChimeOperation::ListPhoneNumberOrders;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        Ok(RestRequest::new(Method::GET, "/phone-number-orders")
            .query_opt("next-token", self.next_token.as_deref())
            .query_opt("max-results", self.max_results))
    }
}

impl HttpBinding for ListPhoneNumbersInput {
    const OPERATION: ChimeOperation = ChimeOperation::ListPhoneNumbers;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        Ok(RestRequest::new(Method::GET, "/phone-numbers")
            .query_opt("status", self.status.as_ref())
            .query_opt("product-type", self.product_type.as_ref())
            .query_opt("filter-name", self.filter_name.as_ref())
            .query_opt("filter-value", self.filter_value.as_deref())
            .query_opt("max-results", self.max_results)
            .query_opt("next-token", self.next_token.as_deref()))
    }
}

impl HttpBinding for ListUsersInput {
    const OPERATION: ChimeOperation = ChimeOperation::ListUsers;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/accounts/{}/users",
            encode_label("accountId", self.account_id.as_deref())?,
        );
        Ok(RestRequest::new(Method::GET, path)
            .query_opt("user-email", self.user_email.as_deref())
            .query_opt("max-results", self.max_results)
            .query_opt("next-token", self.next_token.as_deref()))
    }
}

impl HttpBinding for ListVoiceConnectorTerminationCredentialsInput {
    const OPERATION: ChimeOperation = ChimeOperation::ListVoiceConnectorTerminationCredentials;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/voice-connectors/{}/termination/credentials",
            encode_label("voiceConnectorId", self.voice_connector_id.as_deref())?,
        );
        Ok(RestRequest::new(Method::GET, path))
    }
}

impl HttpBinding for ListVoiceConnectorsInput {
    const OPERATION: ChimeOperation = ChimeOperation::ListVoiceConnectors;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        Ok(RestRequest::new(Method::GET, "/voice-connectors")
            .query_opt("next-token", self.next_token.as_deref())
            .query_opt("max-results", self.max_results))
    }
}

impl HttpBinding for LogoutUserInput {
    const OPERATION: ChimeOperation = ChimeOperation::LogoutUser;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/accounts/{}/users/{}",
            encode_label("accountId", self.account_id.as_deref())?,
            encode_label("userId", self.user_id.as_deref())?,
        );
        Ok(RestRequest::new(Method::POST, path)
            .query("operation", "logout"))
    }
}

impl HttpBinding for PutVoiceConnectorOriginationInput {
    const OPERATION: ChimeOperation = ChimeOperation::PutVoiceConnectorOrigination;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/voice-connectors/{}/origination",
            encode_label("voiceConnectorId", self.voice_connector_id.as_deref())?,
        );
        RestRequest::new(Method::PUT, path)
            .json(self)
    }
}

impl HttpBinding for PutVoiceConnectorTerminationInput {
    const OPERATION: ChimeOperation = ChimeOperation::PutVoiceConnectorTermination;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/voice-connectors/{}/termination",
            encode_label("voiceConnectorId", self.voice_connector_id.as_deref())?,
        );
        RestRequest::new(Method::PUT, path)
            .json(self)
    }
}

impl HttpBinding for PutVoiceConnectorTerminationCredentialsInput {
    const OPERATION: ChimeOperation = ChimeOperation::PutVoiceConnectorTerminationCredentials;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/voice-connectors/{}/termination/credentials",
            encode_label("voiceConnectorId", self.voice_connector_id.as_deref())?,
        );
        RestRequest::new(Method::POST, path)
            .query("operation", "put")
            .json(self)
    }
}

impl HttpBinding for ResetPersonalPINInput {
    const OPERATION: ChimeOperation = ChimeOperation::ResetPersonalPIN;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/accounts/{}/users/{}",
            encode_label("accountId", self.account_id.as_deref())?,
            encode_label("userId", self.user_id.as_deref())?,
        );
        Ok(RestRequest::new(Method::POST, path)
            .query("operation", "reset-personal-pin"))
    }
}

impl HttpBinding for RestorePhoneNumberInput {
    const OPERATION: ChimeOperation = ChimeOperation::RestorePhoneNumber;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/phone-numbers/{}",
            encode_label("phoneNumberId", self.phone_number_id.as_deref())?,
        );
        Ok(RestRequest::new(Method::POST, path)
            .query("operation", "restore"))
    }
}

impl HttpBinding for SearchAvailablePhoneNumbersInput {
    const OPERATION: ChimeOperation = ChimeOperation::SearchAvailablePhoneNumbers;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        Ok(RestRequest::new(Method::GET, "/search")
            .query("type", "phone-numbers")
            .query_opt("area-code", self.area_code.as_deref())
            .query_opt("city", self.city.as_deref())
            .query_opt("country", self.country.as_deref())
            .query_opt("state", self.state.as_deref())
            .query_opt("toll-free-prefix", self.toll_free_prefix.as_deref())
            .query_opt("max-results", self.max_results)
            .query_opt("next-token", self.next_token.as_deref()))
    }
}

impl HttpBinding for UpdateAccountInput {
    const OPERATION: ChimeOperation = ChimeOperation::UpdateAccount;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!("/accounts/{}", encode_label("accountId", self.account_id.as_deref())?);
        RestRequest::new(Method::POST, path)
            .json(self)
    }
}

impl HttpBinding for UpdateAccountSettingsInput {
    const OPERATION: ChimeOperation = ChimeOperation::UpdateAccountSettings;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/accounts/{}/settings",
            encode_label("accountId", self.account_id.as_deref())?,
        );
        RestRequest::new(Method::PUT, path)
            .json(self)
    }
}

impl HttpBinding for UpdateGlobalSettingsInput {
    const OPERATION: ChimeOperation = ChimeOperation::UpdateGlobalSettings;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        RestRequest::new(Method::PUT, "/settings")
            .json(self)
    }
}

impl HttpBinding for UpdatePhoneNumberInput {
    const OPERATION: ChimeOperation = ChimeOperation::UpdatePhoneNumber;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/phone-numbers/{}",
            encode_label("phoneNumberId", self.phone_number_id.as_deref())?,
        );
        RestRequest::new(Method::POST, path)
            .json(self)
    }
}

impl HttpBinding for UpdateUserInput {
    const OPERATION: ChimeOperation = ChimeOperation::UpdateUser;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/accounts/{}/users/{}",
            encode_label("accountId", self.account_id.as_deref())?,
            encode_label("userId", self.user_id.as_deref())?,
        );
        RestRequest::new(Method::POST, path)
            .json(self)
    }
}

impl HttpBinding for UpdateUserSettingsInput {
    const OPERATION: ChimeOperation = ChimeOperation::UpdateUserSettings;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/accounts/{}/users/{}/settings",
            encode_label("accountId", self.account_id.as_deref())?,
            encode_label("userId", self.user_id.as_deref())?,
        );
        RestRequest::new(Method::PUT, path)
            .json(self)
    }
}

impl HttpBinding for UpdateVoiceConnectorInput {
    const OPERATION: ChimeOperation = ChimeOperation::UpdateVoiceConnector;

    fn to_request(&self) -> Result<RestRequest, SdkError> {
        let path = format!(
            "/voice-connectors/{}",
            encode_label("voiceConnectorId", self.voice_connector_id.as_deref())?,
        );
        RestRequest::new(Method::PUT, path)
            .json(self)
    }
}
#[cfg(test)]
mod tests {
    use awsbind_chime_model::types::{
        Credential, License, Origination, OriginationRoute, OriginationRouteProtocol,
        PhoneNumberAssociationName, PhoneNumberStatus,
    };

    use super::*;

    fn body(request: &RestRequest) -> serde_json::Value {
        serde_json::from_slice(request.body.as_deref().unwrap_or(b"null".as_slice())).unwrap()
    }

    #[test]
    fn test_should_bind_labels_and_operation_marker() {
        let request = AssociatePhoneNumberWithUserInput {
            account_id: Some("12a3456b-7c89-012d-3456-78901e23fg45".into()),
            user_id: Some("1ab2345c-67de-8901-f23g-45h678901j2k".into()),
            e164_phone_number: Some("+12065550100".into()),
        }
        .to_request()
        .unwrap();

        assert_eq!(request.method, Method::POST);
        assert_eq!(
            request.path,
            "/accounts/12a3456b-7c89-012d-3456-78901e23fg45/users/1ab2345c-67de-8901-f23g-45h678901j2k"
        );
        assert_eq!(request.query_string(), "operation=associate-phone-number");
        assert_eq!(body(&request), serde_json::json!({"E164PhoneNumber": "+12065550100"}));
    }

    #[test]
    fn test_should_percent_encode_labels() {
        let request = GetPhoneNumberInput {
            phone_number_id: Some("+1 206/555".into()),
        }
        .to_request()
        .unwrap();
        assert_eq!(request.path, "/phone-numbers/%2B1%20206%2F555");
        assert!(request.body.is_none());
    }

    #[test]
    fn test_should_reject_missing_label() {
        let err = DeleteAccountInput::default().to_request().unwrap_err();
        assert!(matches!(err, SdkError::Build(ref m) if m.contains("accountId")));
        let err = GetUserInput {
            account_id: Some("a".into()),
            user_id: Some(String::new()),
        }
        .to_request()
        .unwrap_err();
        assert!(matches!(err, SdkError::Build(ref m) if m.contains("userId")));
    }

    #[test]
    fn test_should_bind_optional_query_members_in_order() {
        let request = ListPhoneNumbersInput {
            status: Some(PhoneNumberStatus::Unassigned),
            filter_name: Some(PhoneNumberAssociationName::UserId),
            filter_value: Some("u 1".into()),
            max_results: Some(25),
            ..ListPhoneNumbersInput::default()
        }
        .to_request()
        .unwrap();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/phone-numbers");
        assert_eq!(
            request.query_string(),
            "status=Unassigned&filter-name=UserId&filter-value=u%201&max-results=25"
        );
        assert!(request.body.is_none());

        let search = SearchAvailablePhoneNumbersInput {
            area_code: Some("206".into()),
            ..SearchAvailablePhoneNumbersInput::default()
        }
        .to_request()
        .unwrap();
        assert_eq!(search.query_string(), "type=phone-numbers&area-code=206");
    }

    #[test]
    fn test_should_write_nested_body_members() {
        let request = PutVoiceConnectorOriginationInput {
            voice_connector_id: Some("abcdef1ghij2klmno3pqr4".into()),
            origination: Some(Origination {
                routes: vec![OriginationRoute {
                    host: Some("10.24.34.0".into()),
                    port: Some(1234),
                    protocol: Some(OriginationRouteProtocol::Tcp),
                    priority: Some(1),
                    weight: Some(5),
                }],
                disabled: Some(false),
            }),
        }
        .to_request()
        .unwrap();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.path, "/voice-connectors/abcdef1ghij2klmno3pqr4/origination");
        assert_eq!(
            body(&request),
            serde_json::json!({"Origination": {
                "Routes": [{"Host": "10.24.34.0", "Port": 1234, "Protocol": "TCP",
                            "Priority": 1, "Weight": 5}],
                "Disabled": false
            }})
        );
    }

    #[test]
    fn test_should_bind_credential_and_user_operations() {
        let put = PutVoiceConnectorTerminationCredentialsInput {
            voice_connector_id: Some("vc".into()),
            credentials: vec![Credential {
                username: Some("jdoe".into()),
                password: Some("XXXXXXXX".into()),
            }],
        }
        .to_request()
        .unwrap();
        assert_eq!(put.path, "/voice-connectors/vc/termination/credentials");
        assert_eq!(put.query_string(), "operation=put");

        let update = UpdateUserInput {
            account_id: Some("a".into()),
            user_id: Some("u".into()),
            license_type: Some(License::Basic),
        }
        .to_request()
        .unwrap();
        assert_eq!(update.method, Method::POST);
        assert_eq!(update.path, "/accounts/a/users/u");
        assert!(update.query.is_empty());
        assert_eq!(body(&update), serde_json::json!({"LicenseType": "Basic"}));
    }

    #[test]
    fn test_should_bind_global_settings_without_labels() {
        let request = GetGlobalSettingsInput {}.to_request().unwrap();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/settings");
        assert_eq!(<GetGlobalSettingsInput as HttpBinding>::OPERATION.as_str(), "GetGlobalSettings");
    }
}
