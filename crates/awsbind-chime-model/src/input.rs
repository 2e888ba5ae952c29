//! Operation inputs.
//!
//! Members bound to the URI path or query string are read from JSON but never
//! written into the request body.

use serde::{Deserialize, Serialize};

use crate::types::{
    AccountSettings, BusinessCallingSettings, Credential, License, Origination,
    PhoneNumberAssociationName, PhoneNumberProductType, PhoneNumberStatus, Termination,
    UpdatePhoneNumberRequestItem, UpdateUserRequestItem, UserSettings, VoiceConnectorSettings,
};

/// Input of `AssociatePhoneNumberWithUser`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AssociatePhoneNumberWithUserInput {
    /// URI label `accountId`.
    #[serde(skip_serializing)]
    pub account_id: Option<String>,
    /// URI label `userId`.
    #[serde(skip_serializing)]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub e164_phone_number: Option<String>,
}

/// Input of `AssociatePhoneNumbersWithVoiceConnector`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AssociatePhoneNumbersWithVoiceConnectorInput {
    /// URI label `voiceConnectorId`.
    #[serde(skip_serializing)]
    pub voice_connector_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub e164_phone_numbers: Vec<String>,
}

/// Input of `BatchDeletePhoneNumber`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchDeletePhoneNumberInput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub phone_number_ids: Vec<String>,
}

/// Input of `BatchSuspendUser`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchSuspendUserInput {
    /// URI label `accountId`.
    #[serde(skip_serializing)]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_id_list: Vec<String>,
}

/// Input of `BatchUnsuspendUser`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchUnsuspendUserInput {
    /// URI label `accountId`.
    #[serde(skip_serializing)]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_id_list: Vec<String>,
}

/// Input of `BatchUpdatePhoneNumber`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchUpdatePhoneNumberInput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub update_phone_number_request_items: Vec<UpdatePhoneNumberRequestItem>,
}

/// Input of `BatchUpdateUser`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchUpdateUserInput {
    /// URI label `accountId`.
    #[serde(skip_serializing)]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub update_user_request_items: Vec<UpdateUserRequestItem>,
}

/// Input of `CreateAccount`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateAccountInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Input of `CreatePhoneNumberOrder`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreatePhoneNumberOrderInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<PhoneNumberProductType>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub e164_phone_numbers: Vec<String>,
}

/// Input of `CreateVoiceConnector`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateVoiceConnectorInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_encryption: Option<bool>,
}

/// Input of `DeleteAccount`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteAccountInput {
    /// URI label `accountId`.
    #[serde(skip_serializing)]
    pub account_id: Option<String>,
}

/// Input of `DeletePhoneNumber`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeletePhoneNumberInput {
    /// URI label `phoneNumberId`.
    #[serde(skip_serializing)]
    pub phone_number_id: Option<String>,
}

/// Input of `DeleteVoiceConnector`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteVoiceConnectorInput {
    /// URI label `voiceConnectorId`.
    #[serde(skip_serializing)]
    pub voice_connector_id: Option<String>,
}

/// Input of `DeleteVoiceConnectorOrigination`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteVoiceConnectorOriginationInput {
    /// URI label `voiceConnectorId`.
    #[serde(skip_serializing)]
    pub voice_connector_id: Option<String>,
}

/// Input of `DeleteVoiceConnectorTermination`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteVoiceConnectorTerminationInput {
    /// URI label `voiceConnectorId`.
    #[serde(skip_serializing)]
    pub voice_connector_id: Option<String>,
}

/// Input of `DeleteVoiceConnectorTerminationCredentials`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteVoiceConnectorTerminationCredentialsInput {
    /// URI label `voiceConnectorId`.
    #[serde(skip_serializing)]
    pub voice_connector_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub usernames: Vec<String>,
}

/// Input of `DisassociatePhoneNumberFromUser`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DisassociatePhoneNumberFromUserInput {
    /// URI label `accountId`.
    #[serde(skip_serializing)]
    pub account_id: Option<String>,
    /// URI label `userId`.
    #[serde(skip_serializing)]
    pub user_id: Option<String>,
}

/// Input of `DisassociatePhoneNumbersFromVoiceConnector`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DisassociatePhoneNumbersFromVoiceConnectorInput {
    /// URI label `voiceConnectorId`.
    #[serde(skip_serializing)]
    pub voice_connector_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub e164_phone_numbers: Vec<String>,
}

/// Input of `GetAccount`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetAccountInput {
    /// URI label `accountId`.
    #[serde(skip_serializing)]
    pub account_id: Option<String>,
}

/// Input of `GetAccountSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetAccountSettingsInput {
    /// URI label `accountId`.
    #[serde(skip_serializing)]
    pub account_id: Option<String>,
}

/// Input of `GetGlobalSettings`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetGlobalSettingsInput {}

/// Input of `GetPhoneNumber`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetPhoneNumberInput {
    /// URI label `phoneNumberId`.
    #[serde(skip_serializing)]
    pub phone_number_id: Option<String>,
}

/// Input of `GetPhoneNumberOrder`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetPhoneNumberOrderInput {
    /// URI label `phoneNumberOrderId`.
    #[serde(skip_serializing)]
    pub phone_number_order_id: Option<String>,
}

/// Input of `GetUser`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetUserInput {
    /// URI label `accountId`.
    #[serde(skip_serializing)]
    pub account_id: Option<String>,
    /// URI label `userId`.
    #[serde(skip_serializing)]
    pub user_id: Option<String>,
}

/// Input of `GetUserSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetUserSettingsInput {
    /// URI label `accountId`.
    #[serde(skip_serializing)]
    pub account_id: Option<String>,
    /// URI label `userId`.
    #[serde(skip_serializing)]
    pub user_id: Option<String>,
}

/// Input of `GetVoiceConnector`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetVoiceConnectorInput {
    /// URI label `voiceConnectorId`.
    #[serde(skip_serializing)]
    pub voice_connector_id: Option<String>,
}

/// Input of `GetVoiceConnectorOrigination`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetVoiceConnectorOriginationInput {
    /// URI label `voiceConnectorId`.
    #[serde(skip_serializing)]
    pub voice_connector_id: Option<String>,
}

/// Input of `GetVoiceConnectorTermination`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetVoiceConnectorTerminationInput {
    /// URI label `voiceConnectorId`.
    #[serde(skip_serializing)]
    pub voice_connector_id: Option<String>,
}

/// Input of `GetVoiceConnectorTerminationHealth`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetVoiceConnectorTerminationHealthInput {
    /// URI label `voiceConnectorId`.
    #[serde(skip_serializing)]
    pub voice_connector_id: Option<String>,
}

/// Input of `InviteUsers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InviteUsersInput {
    /// URI label `accountId`.
    #[serde(skip_serializing)]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_email_list: Vec<String>,
}

/// Input of `ListAccounts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListAccountsInput {
    /// Query parameter `name`.
    #[serde(skip_serializing)]
    pub name: Option<String>,
    /// Query parameter `user-email`.
    #[serde(skip_serializing)]
    pub user_email: Option<String>,
    /// Query parameter `next-token`.
    #[serde(skip_serializing)]
    pub next_token: Option<String>,
    /// Query parameter `max-results`.
    #[serde(skip_serializing)]
    pub max_results: Option<i32>,
}

/// Input of `ListPhoneNumberOrders`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListPhoneNumberOrdersInput {
    /// Query parameter `next-token`.
    #[serde(skip_serializing)]
    pub next_token: Option<String>,
    /// Query parameter `max-results`.
    #[serde(skip_serializing)]
    pub max_results: Option<i32>,
}

/// Input of `ListPhoneNumbers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListPhoneNumbersInput {
    /// Query parameter `status`.
    #[serde(skip_serializing)]
    pub status: Option<PhoneNumberStatus>,
    /// Query parameter `product-type`.
    #[serde(skip_serializing)]
    pub product_type: Option<PhoneNumberProductType>,
    /// Query parameter `filter-name`.
    #[serde(skip_serializing)]
    pub filter_name: Option<PhoneNumberAssociationName>,
    /// Query parameter `filter-value`.
    #[serde(skip_serializing)]
    pub filter_value: Option<String>,
    /// Query parameter `max-results`.
    #[serde(skip_serializing)]
    pub max_results: Option<i32>,
    /// Query parameter `next-token`.
    #[serde(skip_serializing)]
    pub next_token: Option<String>,
}

/// Input of `ListUsers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListUsersInput {
    /// URI label `accountId`.
    #[serde(skip_serializing)]
    pub account_id: Option<String>,
    /// Query parameter `user-email`.
    #[serde(skip_serializing)]
    pub user_email: Option<String>,
    /// Query parameter `max-results`.
    #[serde(skip_serializing)]
    pub max_results: Option<i32>,
    /// Query parameter `next-token`.
    #[serde(skip_serializing)]
    pub next_token: Option<String>,
}

/// Input of `ListVoiceConnectorTerminationCredentials`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListVoiceConnectorTerminationCredentialsInput {
    /// URI label `voiceConnectorId`.
    #[serde(skip_serializing)]
    pub voice_connector_id: Option<String>,
}

/// Input of `ListVoiceConnectors`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListVoiceConnectorsInput {
    /// Query parameter `next-token`.
    #[serde(skip_serializing)]
    pub next_token: Option<String>,
    /// Query parameter `max-results`.
    #[serde(skip_serializing)]
    pub max_results: Option<i32>,
}

/// Input of `LogoutUser`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LogoutUserInput {
    /// URI label `accountId`.
    #[serde(skip_serializing)]
    pub account_id: Option<String>,
    /// URI label `userId`.
    #[serde(skip_serializing)]
    pub user_id: Option<String>,
}

/// Input of `PutVoiceConnectorOrigination`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PutVoiceConnectorOriginationInput {
    /// URI label `voiceConnectorId`.
    #[serde(skip_serializing)]
    pub voice_connector_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origination: Option<Origination>,
}

/// Input of `PutVoiceConnectorTermination`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PutVoiceConnectorTerminationInput {
    /// URI label `voiceConnectorId`.
    #[serde(skip_serializing)]
    pub voice_connector_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination: Option<Termination>,
}

/// Input of `PutVoiceConnectorTerminationCredentials`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PutVoiceConnectorTerminationCredentialsInput {
    /// URI label `voiceConnectorId`.
    #[serde(skip_serializing)]
    pub voice_connector_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub credentials: Vec<Credential>,
}

/// Input of `ResetPersonalPIN`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResetPersonalPINInput {
    /// URI label `accountId`.
    #[serde(skip_serializing)]
    pub account_id: Option<String>,
    /// URI label `userId`.
    #[serde(skip_serializing)]
    pub user_id: Option<String>,
}

/// Input of `RestorePhoneNumber`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RestorePhoneNumberInput {
    /// URI label `phoneNumberId`.
    #[serde(skip_serializing)]
    pub phone_number_id: Option<String>,
}

/// Input of `SearchAvailablePhoneNumbers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SearchAvailablePhoneNumbersInput {
    /// Query parameter `area-code`.
    #[serde(skip_serializing)]
    pub area_code: Option<String>,
    /// Query parameter `city`.
    #[serde(skip_serializing)]
    pub city: Option<String>,
    /// Query parameter `country`.
    #[serde(skip_serializing)]
    pub country: Option<String>,
    /// Query parameter `state`.
    #[serde(skip_serializing)]
    pub state: Option<String>,
    /// Query parameter `toll-free-prefix`.
    #[serde(skip_serializing)]
    pub toll_free_prefix: Option<String>,
    /// Query parameter `max-results`.
    #[serde(skip_serializing)]
    pub max_results: Option<i32>,
    /// Query parameter `next-token`.
    #[serde(skip_serializing)]
    pub next_token: Option<String>,
}

/// Input of `UpdateAccount`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateAccountInput {
    /// URI label `accountId`.
    #[serde(skip_serializing)]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Input of `UpdateAccountSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateAccountSettingsInput {
    /// URI label `accountId`.
    #[serde(skip_serializing)]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_settings: Option<AccountSettings>,
}

/// Input of `UpdateGlobalSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateGlobalSettingsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_calling: Option<BusinessCallingSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_connector: Option<VoiceConnectorSettings>,
}

/// Input of `UpdatePhoneNumber`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdatePhoneNumberInput {
    /// URI label `phoneNumberId`.
    #[serde(skip_serializing)]
    pub phone_number_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<PhoneNumberProductType>,
}

/// Input of `UpdateUser`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateUserInput {
    /// URI label `accountId`.
    #[serde(skip_serializing)]
    pub account_id: Option<String>,
    /// URI label `userId`.
    #[serde(skip_serializing)]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_type: Option<License>,
}

/// Input of `UpdateUserSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateUserSettingsInput {
    /// URI label `accountId`.
    #[serde(skip_serializing)]
    pub account_id: Option<String>,
    /// URI label `userId`.
    #[serde(skip_serializing)]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_settings: Option<UserSettings>,
}

/// Input of `UpdateVoiceConnector`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateVoiceConnectorInput {
    /// URI label `voiceConnectorId`.
    #[serde(skip_serializing)]
    pub voice_connector_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_encryption: Option<bool>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_should_leave_labels_and_query_out_of_body() {
        let input = UpdateUserInput {
            account_id: Some("acct".into()),
            user_id: Some("user".into()),
            license_type: Some(License::Pro),
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({"LicenseType": "Pro"})
        );

        let list = ListPhoneNumbersInput {
            status: Some(PhoneNumberStatus::Assigned),
            max_results: Some(10),
            ..ListPhoneNumbersInput::default()
        };
        assert_eq!(serde_json::to_value(&list).unwrap(), json!({}));
    }

    #[test]
    fn test_should_read_labels_from_json() {
        let input: UpdateUserInput = serde_json::from_value(json!({
            "AccountId": "acct",
            "UserId": "user",
            "LicenseType": "Basic"
        }))
        .unwrap();
        assert_eq!(input.account_id.as_deref(), Some("acct"));
        assert_eq!(input.license_type, Some(License::Basic));

        let empty: GetGlobalSettingsInput = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty, GetGlobalSettingsInput {});
    }
}
