//! Operation outputs.

use serde::{Deserialize, Serialize};

use crate::types::{
    Account, AccountSettings, BusinessCallingSettings, Invite, Origination, PhoneNumber,
    PhoneNumberError, PhoneNumberOrder, Termination, TerminationHealth, User, UserError,
    UserSettings, VoiceConnector, VoiceConnectorSettings,
};

/// Output of `AssociatePhoneNumberWithUser`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociatePhoneNumberWithUserOutput {}

/// Output of `AssociatePhoneNumbersWithVoiceConnector`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AssociatePhoneNumbersWithVoiceConnectorOutput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub phone_number_errors: Vec<PhoneNumberError>,
}

/// Output of `BatchDeletePhoneNumber`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchDeletePhoneNumberOutput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub phone_number_errors: Vec<PhoneNumberError>,
}

/// Output of `BatchSuspendUser`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchSuspendUserOutput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_errors: Vec<UserError>,
}

/// Output of `BatchUnsuspendUser`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchUnsuspendUserOutput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_errors: Vec<UserError>,
}

/// Output of `BatchUpdatePhoneNumber`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchUpdatePhoneNumberOutput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub phone_number_errors: Vec<PhoneNumberError>,
}

/// Output of `BatchUpdateUser`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchUpdateUserOutput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_errors: Vec<UserError>,
}

/// Output of `CreateAccount`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateAccountOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,
}

/// Output of `CreatePhoneNumberOrder`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreatePhoneNumberOrderOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number_order: Option<PhoneNumberOrder>,
}

/// Output of `CreateVoiceConnector`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateVoiceConnectorOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_connector: Option<VoiceConnector>,
}

/// Output of `DeleteAccount`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAccountOutput {}

/// Output of `DeletePhoneNumber`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletePhoneNumberOutput {}

/// Output of `DeleteVoiceConnector`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteVoiceConnectorOutput {}

/// Output of `DeleteVoiceConnectorOrigination`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteVoiceConnectorOriginationOutput {}

/// Output of `DeleteVoiceConnectorTermination`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteVoiceConnectorTerminationOutput {}

/// Output of `DeleteVoiceConnectorTerminationCredentials`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteVoiceConnectorTerminationCredentialsOutput {}

/// Output of `DisassociatePhoneNumberFromUser`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisassociatePhoneNumberFromUserOutput {}

/// Output of `DisassociatePhoneNumbersFromVoiceConnector`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DisassociatePhoneNumbersFromVoiceConnectorOutput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub phone_number_errors: Vec<PhoneNumberError>,
}

/// Output of `GetAccount`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetAccountOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,
}

/// Output of `GetAccountSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetAccountSettingsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_settings: Option<AccountSettings>,
}

/// Output of `GetGlobalSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetGlobalSettingsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_calling: Option<BusinessCallingSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_connector: Option<VoiceConnectorSettings>,
}

/// Output of `GetPhoneNumber`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetPhoneNumberOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<PhoneNumber>,
}

/// Output of `GetPhoneNumberOrder`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetPhoneNumberOrderOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number_order: Option<PhoneNumberOrder>,
}

/// Output of `GetUser`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetUserOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Output of `GetUserSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetUserSettingsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_settings: Option<UserSettings>,
}

/// Output of `GetVoiceConnector`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetVoiceConnectorOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_connector: Option<VoiceConnector>,
}

/// Output of `GetVoiceConnectorOrigination`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetVoiceConnectorOriginationOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origination: Option<Origination>,
}

/// Output of `GetVoiceConnectorTermination`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetVoiceConnectorTerminationOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination: Option<Termination>,
}

/// Output of `GetVoiceConnectorTerminationHealth`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetVoiceConnectorTerminationHealthOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_health: Option<TerminationHealth>,
}

/// Output of `InviteUsers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InviteUsersOutput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub invites: Vec<Invite>,
}

/// Output of `ListAccounts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListAccountsOutput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub accounts: Vec<Account>,
    /// Token for the next page; absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output of `ListPhoneNumberOrders`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListPhoneNumberOrdersOutput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub phone_number_orders: Vec<PhoneNumberOrder>,
    /// Token for the next page; absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output of `ListPhoneNumbers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListPhoneNumbersOutput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub phone_numbers: Vec<PhoneNumber>,
    /// Token for the next page; absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output of `ListUsers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListUsersOutput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<User>,
    /// Token for the next page; absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output of `ListVoiceConnectorTerminationCredentials`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListVoiceConnectorTerminationCredentialsOutput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub usernames: Vec<String>,
}

/// Output of `ListVoiceConnectors`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListVoiceConnectorsOutput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub voice_connectors: Vec<VoiceConnector>,
    /// Token for the next page; absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output of `LogoutUser`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutUserOutput {}

/// Output of `PutVoiceConnectorOrigination`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PutVoiceConnectorOriginationOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origination: Option<Origination>,
}

/// Output of `PutVoiceConnectorTermination`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PutVoiceConnectorTerminationOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination: Option<Termination>,
}

/// Output of `PutVoiceConnectorTerminationCredentials`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutVoiceConnectorTerminationCredentialsOutput {}

/// Output of `ResetPersonalPIN`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResetPersonalPINOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Output of `RestorePhoneNumber`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RestorePhoneNumberOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<PhoneNumber>,
}

/// Output of `SearchAvailablePhoneNumbers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SearchAvailablePhoneNumbersOutput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub e164_phone_numbers: Vec<String>,
}

/// Output of `UpdateAccount`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateAccountOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,
}

/// Output of `UpdateAccountSettings`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAccountSettingsOutput {}

/// Output of `UpdateGlobalSettings`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateGlobalSettingsOutput {}

/// Output of `UpdatePhoneNumber`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdatePhoneNumberOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<PhoneNumber>,
}

/// Output of `UpdateUser`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateUserOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Output of `UpdateUserSettings`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserSettingsOutput {}

/// Output of `UpdateVoiceConnector`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateVoiceConnectorOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_connector: Option<VoiceConnector>,
}
