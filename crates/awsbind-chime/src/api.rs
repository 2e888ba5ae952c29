//! The mockable Chime interface.

use async_trait::async_trait;
#[allow(clippy::wildcard_imports)]
use awsbind_chime_model::{input::*, output::*};
use awsbind_http::SdkError;

/// Every Amazon Chime operation, as an object-safe async trait.
///
/// [`ChimeClient`](crate::ChimeClient) implements it against the service.
/// Code that takes `&dyn ChimeApi` can be tested against `MockChimeApi`,
/// which is generated for tests and behind the `mock` feature:
///
/// ```ignore
/// let mut api = MockChimeApi::new();
/// api.expect_get_account()
///     .returning(|_| Ok(GetAccountOutput::default()));
/// ```
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait ChimeApi: Send + Sync {
    /// Associates a phone number with a user.
    async fn associate_phone_number_with_user(
        &self,
        input: AssociatePhoneNumberWithUserInput,
    ) -> Result<AssociatePhoneNumberWithUserOutput, SdkError>;

    /// Associates phone numbers with a voice connector.
    async fn associate_phone_numbers_with_voice_connector(
        &self,
        input: AssociatePhoneNumbersWithVoiceConnectorInput,
    ) -> Result<AssociatePhoneNumbersWithVoiceConnectorOutput, SdkError>;

    /// Moves phone numbers into the deletion queue.
    async fn batch_delete_phone_number(
        &self,
        input: BatchDeletePhoneNumberInput,
    ) -> Result<BatchDeletePhoneNumberOutput, SdkError>;

    /// Suspends users of an account.
    async fn batch_suspend_user(
        &self,
        input: BatchSuspendUserInput,
    ) -> Result<BatchSuspendUserOutput, SdkError>;

    /// Removes the suspension from users of an account.
    async fn batch_unsuspend_user(
        &self,
        input: BatchUnsuspendUserInput,
    ) -> Result<BatchUnsuspendUserOutput, SdkError>;

    /// Updates the product type of several phone numbers.
    async fn batch_update_phone_number(
        &self,
        input: BatchUpdatePhoneNumberInput,
    ) -> Result<BatchUpdatePhoneNumberOutput, SdkError>;

    /// Updates the license type of several users.
    async fn batch_update_user(
        &self,
        input: BatchUpdateUserInput,
    ) -> Result<BatchUpdateUserOutput, SdkError>;

    /// Creates an account under the caller's AWS account.
    async fn create_account(
        &self,
        input: CreateAccountInput,
    ) -> Result<CreateAccountOutput, SdkError>;

    /// Orders phone numbers for a product type.
    async fn create_phone_number_order(
        &self,
        input: CreatePhoneNumberOrderInput,
    ) -> Result<CreatePhoneNumberOrderOutput, SdkError>;

    /// Creates a voice connector.
    async fn create_voice_connector(
        &self,
        input: CreateVoiceConnectorInput,
    ) -> Result<CreateVoiceConnectorOutput, SdkError>;

    /// Deletes an account.
    async fn delete_account(
        &self,
        input: DeleteAccountInput,
    ) -> Result<DeleteAccountOutput, SdkError>;

    /// Moves a phone number into the deletion queue.
    async fn delete_phone_number(
        &self,
        input: DeletePhoneNumberInput,
    ) -> Result<DeletePhoneNumberOutput, SdkError>;

    /// Deletes a voice connector.
    async fn delete_voice_connector(
        &self,
        input: DeleteVoiceConnectorInput,
    ) -> Result<DeleteVoiceConnectorOutput, SdkError>;

    /// Deletes the origination settings of a voice connector.
    async fn delete_voice_connector_origination(
        &self,
        input: DeleteVoiceConnectorOriginationInput,
    ) -> Result<DeleteVoiceConnectorOriginationOutput, SdkError>;

    /// Deletes the termination settings of a voice connector.
    async fn delete_voice_connector_termination(
        &self,
        input: DeleteVoiceConnectorTerminationInput,
    ) -> Result<DeleteVoiceConnectorTerminationOutput, SdkError>;

    /// Deletes termination SIP credentials of a voice connector.
    async fn delete_voice_connector_termination_credentials(
        &self,
        input: DeleteVoiceConnectorTerminationCredentialsInput,
    ) -> Result<DeleteVoiceConnectorTerminationCredentialsOutput, SdkError>;

    /// Removes the phone number of a user.
    async fn disassociate_phone_number_from_user(
        &self,
        input: DisassociatePhoneNumberFromUserInput,
    ) -> Result<DisassociatePhoneNumberFromUserOutput, SdkError>;

    /// Removes phone numbers from a voice connector.
    async fn disassociate_phone_numbers_from_voice_connector(
        &self,
        input: DisassociatePhoneNumbersFromVoiceConnectorInput,
    ) -> Result<DisassociatePhoneNumbersFromVoiceConnectorOutput, SdkError>;

    /// Fetches an account.
    async fn get_account(&self, input: GetAccountInput) -> Result<GetAccountOutput, SdkError>;

    /// Fetches the settings of an account.
    async fn get_account_settings(
        &self,
        input: GetAccountSettingsInput,
    ) -> Result<GetAccountSettingsOutput, SdkError>;

    /// Fetches the global settings of the AWS account.
    async fn get_global_settings(
        &self,
        input: GetGlobalSettingsInput,
    ) -> Result<GetGlobalSettingsOutput, SdkError>;

    /// Fetches a phone number.
    async fn get_phone_number(
        &self,
        input: GetPhoneNumberInput,
    ) -> Result<GetPhoneNumberOutput, SdkError>;

    /// Fetches a phone number order.
    async fn get_phone_number_order(
        &self,
        input: GetPhoneNumberOrderInput,
    ) -> Result<GetPhoneNumberOrderOutput, SdkError>;

    /// Fetches a user.
    async fn get_user(&self, input: GetUserInput) -> Result<GetUserOutput, SdkError>;

    /// Fetches the settings of a user.
    async fn get_user_settings(
        &self,
        input: GetUserSettingsInput,
    ) -> Result<GetUserSettingsOutput, SdkError>;

    /// Fetches a voice connector.
    async fn get_voice_connector(
        &self,
        input: GetVoiceConnectorInput,
    ) -> Result<GetVoiceConnectorOutput, SdkError>;

    /// Fetches the origination settings of a voice connector.
    async fn get_voice_connector_origination(
        &self,
        input: GetVoiceConnectorOriginationInput,
    ) -> Result<GetVoiceConnectorOriginationOutput, SdkError>;

    /// Fetches the termination settings of a voice connector.
    async fn get_voice_connector_termination(
        &self,
        input: GetVoiceConnectorTerminationInput,
    ) -> Result<GetVoiceConnectorTerminationOutput, SdkError>;

    /// Fetches the termination health of a voice connector.
    async fn get_voice_connector_termination_health(
        &self,
        input: GetVoiceConnectorTerminationHealthInput,
    ) -> Result<GetVoiceConnectorTerminationHealthOutput, SdkError>;

    /// Sends invitation emails to join an account.
    async fn invite_users(&self, input: InviteUsersInput) -> Result<InviteUsersOutput, SdkError>;

    /// Lists accounts, optionally filtered by name or user email.
    async fn list_accounts(&self, input: ListAccountsInput) -> Result<ListAccountsOutput, SdkError>;

    /// Lists phone number orders.
    async fn list_phone_number_orders(
        &self,
        input: ListPhoneNumberOrdersInput,
    ) -> Result<ListPhoneNumberOrdersOutput, SdkError>;

    /// Lists phone numbers, optionally filtered.
    async fn list_phone_numbers(
        &self,
        input: ListPhoneNumbersInput,
    ) -> Result<ListPhoneNumbersOutput, SdkError>;

    /// Lists users of an account.
    async fn list_users(&self, input: ListUsersInput) -> Result<ListUsersOutput, SdkError>;

    /// Lists termination SIP usernames of a voice connector.
    async fn list_voice_connector_termination_credentials(
        &self,
        input: ListVoiceConnectorTerminationCredentialsInput,
    ) -> Result<ListVoiceConnectorTerminationCredentialsOutput, SdkError>;

    /// Lists voice connectors.
    async fn list_voice_connectors(
        &self,
        input: ListVoiceConnectorsInput,
    ) -> Result<ListVoiceConnectorsOutput, SdkError>;

    /// Signs a user out of all devices.
    async fn logout_user(&self, input: LogoutUserInput) -> Result<LogoutUserOutput, SdkError>;

    /// Replaces the origination settings of a voice connector.
    async fn put_voice_connector_origination(
        &self,
        input: PutVoiceConnectorOriginationInput,
    ) -> Result<PutVoiceConnectorOriginationOutput, SdkError>;

    /// Replaces the termination settings of a voice connector.
    async fn put_voice_connector_termination(
        &self,
        input: PutVoiceConnectorTerminationInput,
    ) -> Result<PutVoiceConnectorTerminationOutput, SdkError>;

    /// Adds termination SIP credentials to a voice connector.
    async fn put_voice_connector_termination_credentials(
        &self,
        input: PutVoiceConnectorTerminationCredentialsInput,
    ) -> Result<PutVoiceConnectorTerminationCredentialsOutput, SdkError>;

    /// Resets the personal meeting PIN of a user.
    async fn reset_personal_pin(
        &self,
        input: ResetPersonalPINInput,
    ) -> Result<ResetPersonalPINOutput, SdkError>;

    /// Takes a phone number out of the deletion queue.
    async fn restore_phone_number(
        &self,
        input: RestorePhoneNumberInput,
    ) -> Result<RestorePhoneNumberOutput, SdkError>;

    /// Searches phone numbers that can be ordered.
    async fn search_available_phone_numbers(
        &self,
        input: SearchAvailablePhoneNumbersInput,
    ) -> Result<SearchAvailablePhoneNumbersOutput, SdkError>;

    /// Renames an account.
    async fn update_account(
        &self,
        input: UpdateAccountInput,
    ) -> Result<UpdateAccountOutput, SdkError>;

    /// Updates the settings of an account.
    async fn update_account_settings(
        &self,
        input: UpdateAccountSettingsInput,
    ) -> Result<UpdateAccountSettingsOutput, SdkError>;

    /// Updates the global settings of the AWS account.
    async fn update_global_settings(
        &self,
        input: UpdateGlobalSettingsInput,
    ) -> Result<UpdateGlobalSettingsOutput, SdkError>;

    /// Updates the product type of a phone number.
    async fn update_phone_number(
        &self,
        input: UpdatePhoneNumberInput,
    ) -> Result<UpdatePhoneNumberOutput, SdkError>;

    /// Updates the license type of a user.
    async fn update_user(&self, input: UpdateUserInput) -> Result<UpdateUserOutput, SdkError>;

    /// Updates the settings of a user.
    async fn update_user_settings(
        &self,
        input: UpdateUserSettingsInput,
    ) -> Result<UpdateUserSettingsOutput, SdkError>;

    /// Updates a voice connector.
    async fn update_voice_connector(
        &self,
        input: UpdateVoiceConnectorInput,
    ) -> Result<UpdateVoiceConnectorOutput, SdkError>;
}
