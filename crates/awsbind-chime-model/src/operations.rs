//! Chime operation names.

use std::fmt;

/// All Amazon Chime operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChimeOperation {
    /// Associates a phone number with a user.
    AssociatePhoneNumberWithUser,
    /// Associates phone numbers with a voice connector.
    AssociatePhoneNumbersWithVoiceConnector,
    /// Moves phone numbers into the deletion queue.
    BatchDeletePhoneNumber,
    /// Suspends users of an account.
    BatchSuspendUser,
    /// Removes the suspension from users of an account.
    BatchUnsuspendUser,
    /// Updates the product type of several phone numbers.
    BatchUpdatePhoneNumber,
    /// Updates the license type of several users.
    BatchUpdateUser,
    /// Creates an account under the caller's AWS account.
    CreateAccount,
    /// Orders phone numbers for a product type.
    CreatePhoneNumberOrder,
    /// Creates a voice connector.
    CreateVoiceConnector,
    /// Deletes an account.
    DeleteAccount,
    /// Moves a phone number into the deletion queue.
    DeletePhoneNumber,
    /// Deletes a voice connector.
    DeleteVoiceConnector,
    /// Deletes the origination settings of a voice connector.
    DeleteVoiceConnectorOrigination,
    /// Deletes the termination settings of a voice connector.
    DeleteVoiceConnectorTermination,
    /// Deletes termination SIP credentials of a voice connector.
    DeleteVoiceConnectorTerminationCredentials,
    /// Removes the phone number of a user.
    DisassociatePhoneNumberFromUser,
    /// Removes phone numbers from a voice connector.
    DisassociatePhoneNumbersFromVoiceConnector,
    /// Fetches an account.
    GetAccount,
    /// Fetches the settings of an account.
    GetAccountSettings,
    /// Fetches the global settings of the AWS account.
    GetGlobalSettings,
    /// Fetches a phone number.
    GetPhoneNumber,
    /// Fetches a phone number order.
    GetPhoneNumberOrder,
    /// Fetches a user.
    GetUser,
    /// Fetches the settings of a user.
    GetUserSettings,
    /// Fetches a voice connector.
    GetVoiceConnector,
    /// Fetches the origination settings of a voice connector.
    GetVoiceConnectorOrigination,
    /// Fetches the termination settings of a voice connector.
    GetVoiceConnectorTermination,
    /// Fetches the termination health of a voice connector.
    GetVoiceConnectorTerminationHealth,
    /// Sends invitation emails to join an account.
    InviteUsers,
    /// Lists accounts, optionally filtered by name or user email.
    ListAccounts,
    /// Lists phone number orders.
    ListPhoneNumberOrders,
    /// Lists phone numbers, optionally filtered.
    ListPhoneNumbers,
    /// Lists users of an account.
    ListUsers,
    /// Lists termination SIP usernames of a voice connector.
    ListVoiceConnectorTerminationCredentials,
    /// Lists voice connectors.
    ListVoiceConnectors,
    /// Signs a user out of all devices.
    LogoutUser,
    /// Replaces the origination settings of a voice connector.
    PutVoiceConnectorOrigination,
    /// Replaces the termination settings of a voice connector.
    PutVoiceConnectorTermination,
    /// Adds termination SIP credentials to a voice connector.
    PutVoiceConnectorTerminationCredentials,
    /// Resets the personal meeting PIN of a user.
    ResetPersonalPIN,
    /// Takes a phone number out of the deletion queue.
    RestorePhoneNumber,
    /// Searches phone numbers that can be ordered.
    SearchAvailablePhoneNumbers,
    /// Renames an account.
    UpdateAccount,
    /// Updates the settings of an account.
    UpdateAccountSettings,
    /// Updates the global settings of the AWS account.
    UpdateGlobalSettings,
    /// Updates the product type of a phone number.
    UpdatePhoneNumber,
    /// Updates the license type of a user.
    UpdateUser,
    /// Updates the settings of a user.
    UpdateUserSettings,
    /// Updates a voice connector.
    UpdateVoiceConnector,
}

impl ChimeOperation {
    /// Every operation, in alphabetical order.
    pub const ALL: &'static [Self] = &[
        Self::AssociatePhoneNumberWithUser,
        Self::AssociatePhoneNumbersWithVoiceConnector,
        Self::BatchDeletePhoneNumber,
        Self::BatchSuspendUser,
        Self::BatchUnsuspendUser,
        Self::BatchUpdatePhoneNumber,
        Self::BatchUpdateUser,
        Self::CreateAccount,
        Self::CreatePhoneNumberOrder,
        Self::CreateVoiceConnector,
        Self::DeleteAccount,
        Self::DeletePhoneNumber,
        Self::DeleteVoiceConnector,
        Self::DeleteVoiceConnectorOrigination,
        Self::DeleteVoiceConnectorTermination,
        Self::DeleteVoiceConnectorTerminationCredentials,
        Self::DisassociatePhoneNumberFromUser,
        Self::DisassociatePhoneNumbersFromVoiceConnector,
        Self::GetAccount,
        Self::GetAccountSettings,
        Self::GetGlobalSettings,
        Self::GetPhoneNumber,
        Self::GetPhoneNumberOrder,
        Self::GetUser,
        Self::GetUserSettings,
        Self::GetVoiceConnector,
        Self::GetVoiceConnectorOrigination,
        Self::GetVoiceConnectorTermination,
        Self::GetVoiceConnectorTerminationHealth,
        Self::InviteUsers,
        Self::ListAccounts,
        Self::ListPhoneNumberOrders,
        Self::ListPhoneNumbers,
        Self::ListUsers,
        Self::ListVoiceConnectorTerminationCredentials,
        Self::ListVoiceConnectors,
        Self::LogoutUser,
        Self::PutVoiceConnectorOrigination,
        Self::PutVoiceConnectorTermination,
        Self::PutVoiceConnectorTerminationCredentials,
        Self::ResetPersonalPIN,
        Self::RestorePhoneNumber,
        Self::SearchAvailablePhoneNumbers,
        Self::UpdateAccount,
        Self::UpdateAccountSettings,
        Self::UpdateGlobalSettings,
        Self::UpdatePhoneNumber,
        Self::UpdateUser,
        Self::UpdateUserSettings,
        Self::UpdateVoiceConnector,
    ];

    /// The operation name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AssociatePhoneNumberWithUser => "AssociatePhoneNumberWithUser",
            Self::AssociatePhoneNumbersWithVoiceConnector => {
                "AssociatePhoneNumbersWithVoiceConnector"
            }
            Self::BatchDeletePhoneNumber => "BatchDeletePhoneNumber",
            Self::BatchSuspendUser => "BatchSuspendUser",
            Self::BatchUnsuspendUser => "BatchUnsuspendUser",
            Self::BatchUpdatePhoneNumber => "BatchUpdatePhoneNumber",
            Self::BatchUpdateUser => "BatchUpdateUser",
            Self::CreateAccount => "CreateAccount",
            Self::CreatePhoneNumberOrder => "CreatePhoneNumberOrder",
            Self::CreateVoiceConnector => "CreateVoiceConnector",
            Self::DeleteAccount => "DeleteAccount",
            Self::DeletePhoneNumber => "DeletePhoneNumber",
            Self::DeleteVoiceConnector => "DeleteVoiceConnector",
            Self::DeleteVoiceConnectorOrigination => "DeleteVoiceConnectorOrigination",
            Self::DeleteVoiceConnectorTermination => "DeleteVoiceConnectorTermination",
            Self::DeleteVoiceConnectorTerminationCredentials => {
                "DeleteVoiceConnectorTerminationCredentials"
            }
            Self::DisassociatePhoneNumberFromUser => "DisassociatePhoneNumberFromUser",
            Self::DisassociatePhoneNumbersFromVoiceConnector => {
                "DisassociatePhoneNumbersFromVoiceConnector"
            }
            Self::GetAccount => "GetAccount",
            Self::GetAccountSettings => "GetAccountSettings",
            Self::GetGlobalSettings => "GetGlobalSettings",
            Self::GetPhoneNumber => "GetPhoneNumber",
            Self::GetPhoneNumberOrder => "GetPhoneNumberOrder",
            Self::GetUser => "GetUser",
            Self::GetUserSettings => "GetUserSettings",
            Self::GetVoiceConnector => "GetVoiceConnector",
            Self::GetVoiceConnectorOrigination => "GetVoiceConnectorOrigination",
            Self::GetVoiceConnectorTermination => "GetVoiceConnectorTermination",
            Self::GetVoiceConnectorTerminationHealth => "GetVoiceConnectorTerminationHealth",
            Self::InviteUsers => "InviteUsers",
            Self::ListAccounts => "ListAccounts",
            Self::ListPhoneNumberOrders => "ListPhoneNumberOrders",
            Self::ListPhoneNumbers => "ListPhoneNumbers",
            Self::ListUsers => "ListUsers",
            Self::ListVoiceConnectorTerminationCredentials => {
                "ListVoiceConnectorTerminationCredentials"
            }
            Self::ListVoiceConnectors => "ListVoiceConnectors",
            Self::LogoutUser => "LogoutUser",
            Self::PutVoiceConnectorOrigination => "PutVoiceConnectorOrigination",
            Self::PutVoiceConnectorTermination => "PutVoiceConnectorTermination",
            Self::PutVoiceConnectorTerminationCredentials => {
                "PutVoiceConnectorTerminationCredentials"
            }
            Self::ResetPersonalPIN => "ResetPersonalPIN",
            Self::RestorePhoneNumber => "RestorePhoneNumber",
            Self::SearchAvailablePhoneNumbers => "SearchAvailablePhoneNumbers",
            Self::UpdateAccount => "UpdateAccount",
            Self::UpdateAccountSettings => "UpdateAccountSettings",
            Self::UpdateGlobalSettings => "UpdateGlobalSettings",
            Self::UpdatePhoneNumber => "UpdatePhoneNumber",
            Self::UpdateUser => "UpdateUser",
            Self::UpdateUserSettings => "UpdateUserSettings",
            Self::UpdateVoiceConnector => "UpdateVoiceConnector",
        }
    }

    /// Look up an operation by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.as_str() == name)
    }

    /// HTTP method the operation is bound to.
    #[must_use]
    pub fn method(&self) -> http::Method {
        match self {
            Self::GetAccount
            | Self::GetAccountSettings
            | Self::GetGlobalSettings
            | Self::GetPhoneNumber
            | Self::GetPhoneNumberOrder
            | Self::GetUser
            | Self::GetUserSettings
            | Self::GetVoiceConnector
            | Self::GetVoiceConnectorOrigination
            | Self::GetVoiceConnectorTermination
            | Self::GetVoiceConnectorTerminationHealth
            | Self::ListAccounts
            | Self::ListPhoneNumberOrders
            | Self::ListPhoneNumbers
            | Self::ListUsers
            | Self::ListVoiceConnectorTerminationCredentials
            | Self::ListVoiceConnectors
            | Self::SearchAvailablePhoneNumbers => http::Method::GET,
            Self::PutVoiceConnectorOrigination
            | Self::PutVoiceConnectorTermination
            | Self::UpdateAccountSettings
            | Self::UpdateGlobalSettings
            | Self::UpdateUserSettings
            | Self::UpdateVoiceConnector => http::Method::PUT,
            Self::DeleteAccount
            | Self::DeletePhoneNumber
            | Self::DeleteVoiceConnector
            | Self::DeleteVoiceConnectorOrigination
            | Self::DeleteVoiceConnectorTermination => http::Method::DELETE,
            _ => http::Method::POST,
        }
    }

    /// URI template, with the fixed query marker if any.
    #[must_use]
    pub fn uri_template(&self) -> &'static str {
        match self {
            Self::AssociatePhoneNumberWithUser => {
                "/accounts/{accountId}/users/{userId}?operation=associate-phone-number"
            }
            Self::AssociatePhoneNumbersWithVoiceConnector => {
                "/voice-connectors/{voiceConnectorId}?operation=associate-phone-numbers"
            }
            Self::BatchDeletePhoneNumber => "/phone-numbers?operation=batch-delete",
            Self::BatchSuspendUser => "/accounts/{accountId}/users?operation=suspend",
            Self::BatchUnsuspendUser => "/accounts/{accountId}/users?operation=unsuspend",
            Self::BatchUpdatePhoneNumber => "/phone-numbers?operation=batch-update",
            Self::BatchUpdateUser => "/accounts/{accountId}/users",
            Self::CreateAccount => "/accounts",
            Self::CreatePhoneNumberOrder => "/phone-number-orders",
            Self::CreateVoiceConnector => "/voice-connectors",
            Self::DeleteAccount => "/accounts/{accountId}",
            Self::DeletePhoneNumber => "/phone-numbers/{phoneNumberId}",
            Self::DeleteVoiceConnector => "/voice-connectors/{voiceConnectorId}",
            Self::DeleteVoiceConnectorOrigination => {
                "/voice-connectors/{voiceConnectorId}/origination"
            }
            Self::DeleteVoiceConnectorTermination => {
                "/voice-connectors/{voiceConnectorId}/termination"
            }
            Self::DeleteVoiceConnectorTerminationCredentials => {
                "/voice-connectors/{voiceConnectorId}/termination/credentials?operation=delete"
            }
            Self::DisassociatePhoneNumberFromUser => {
                "/accounts/{accountId}/users/{userId}?operation=disassociate-phone-number"
            }
            Self::DisassociatePhoneNumbersFromVoiceConnector => {
                "/voice-connectors/{voiceConnectorId}?operation=disassociate-phone-numbers"
            }
            Self::GetAccount => "/accounts/{accountId}",
            Self::GetAccountSettings => "/accounts/{accountId}/settings",
            Self::GetGlobalSettings => "/settings",
            Self::GetPhoneNumber => "/phone-numbers/{phoneNumberId}",
            Self::GetPhoneNumberOrder => "/phone-number-orders/{phoneNumberOrderId}",
            Self::GetUser => "/accounts/{accountId}/users/{userId}",
            Self::GetUserSettings => "/accounts/{accountId}/users/{userId}/settings",
            Self::GetVoiceConnector => "/voice-connectors/{voiceConnectorId}",
            Self::GetVoiceConnectorOrigination => {
                "/voice-connectors/{voiceConnectorId}/origination"
            }
            Self::GetVoiceConnectorTermination => {
                "/voice-connectors/{voiceConnectorId}/termination"
            }
            Self::GetVoiceConnectorTerminationHealth => {
                "/voice-connectors/{voiceConnectorId}/termination/health"
            }
            Self::InviteUsers => "/accounts/{accountId}/users?operation=add",
            Self::ListAccounts => "/accounts",
            Self::ListPhoneNumberOrders => "/phone-number-orders",
            Self::ListPhoneNumbers => "/phone-numbers",
            Self::ListUsers => "/accounts/{accountId}/users",
            Self::ListVoiceConnectorTerminationCredentials => {
                "/voice-connectors/{voiceConnectorId}/termination/credentials"
            }
            Self::ListVoiceConnectors => "/voice-connectors",
            Self::LogoutUser => "/accounts/{accountId}/users/{userId}?operation=logout",
            Self::PutVoiceConnectorOrigination => {
                "/voice-connectors/{voiceConnectorId}/origination"
            }
            Self::PutVoiceConnectorTermination => {
                "/voice-connectors/{voiceConnectorId}/termination"
            }
            Self::PutVoiceConnectorTerminationCredentials => {
                "/voice-connectors/{voiceConnectorId}/termination/credentials?operation=put"
            }
            Self::ResetPersonalPIN => {
                "/accounts/{accountId}/users/{userId}?operation=reset-personal-pin"
            }
            Self::RestorePhoneNumber => "/phone-numbers/{phoneNumberId}?operation=restore",
            Self::SearchAvailablePhoneNumbers => "/search?type=phone-numbers",
            Self::UpdateAccount => "/accounts/{accountId}",
            Self::UpdateAccountSettings => "/accounts/{accountId}/settings",
            Self::UpdateGlobalSettings => "/settings",
            Self::UpdatePhoneNumber => "/phone-numbers/{phoneNumberId}",
            Self::UpdateUser => "/accounts/{accountId}/users/{userId}",
            Self::UpdateUserSettings => "/accounts/{accountId}/users/{userId}/settings",
            Self::UpdateVoiceConnector => "/voice-connectors/{voiceConnectorId}",
        }
    }
}

impl fmt::Display for ChimeOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_list_every_operation_once() {
        assert_eq!(ChimeOperation::ALL.len(), 50);
        for op in ChimeOperation::ALL {
            assert_eq!(ChimeOperation::from_name(op.as_str()), Some(*op));
        }
        assert_eq!(ChimeOperation::from_name("CreateMeeting"), None);
    }

    #[test]
    fn test_should_expose_http_binding() {
        assert_eq!(ChimeOperation::GetAccount.method(), http::Method::GET);
        assert_eq!(ChimeOperation::DeleteAccount.method(), http::Method::DELETE);
        assert_eq!(ChimeOperation::UpdateUserSettings.method(), http::Method::PUT);
        assert_eq!(ChimeOperation::LogoutUser.method(), http::Method::POST);
        assert_eq!(
            ChimeOperation::SearchAvailablePhoneNumbers.uri_template(),
            "/search?type=phone-numbers"
        );
    }
}
