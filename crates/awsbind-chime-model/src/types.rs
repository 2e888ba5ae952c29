//! Shared Amazon Chime shapes and enumerations.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Defines a string-backed enum that keeps unrecognized values in `Unknown`.
macro_rules! string_enum {
    ($(#[$doc:meta])* $name:ident { $($variant:ident => $value:literal,)* }) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $(
                #[doc = concat!("`", $value, "`")]
                $variant,
            )*
            /// A value this crate does not know about, kept as received.
            Unknown(String),
        }

        impl $name {
            /// Every known value.
            pub const VALUES: &'static [&'static str] = &[$($value),*];

            /// The wire value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)*
                    Self::Unknown(other) => other,
                }
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $($value => Self::$variant,)*
                    other => Self::Unknown(other.to_owned()),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::from(s.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Unknown(other) => other,
                    known => known.as_str().to_owned(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum! {
    /// How the account's users sign in.
    AccountType {
        Team => "Team",
        EnterpriseDirectory => "EnterpriseDirectory",
        EnterpriseLwa => "EnterpriseLWA",
        EnterpriseOidc => "EnterpriseOIDC",
    }
}

string_enum! {
    /// Chime license tier.
    License {
        Basic => "Basic",
        Plus => "Plus",
        Pro => "Pro",
        ProTrial => "ProTrial",
    }
}

string_enum! {
    /// User registration status.
    RegistrationStatus {
        Unregistered => "Unregistered",
        Registered => "Registered",
        Suspended => "Suspended",
    }
}

string_enum! {
    /// Status of a user invitation.
    InviteStatus {
        Pending => "Pending",
        Accepted => "Accepted",
        Failed => "Failed",
    }
}

string_enum! {
    /// Delivery status of an invitation email.
    EmailStatus {
        NotSent => "NotSent",
        Sent => "Sent",
        Failed => "Failed",
    }
}

string_enum! {
    /// Per-item error code in batch results.
    ErrorCode {
        Unauthorized => "Unauthorized",
        Forbidden => "Forbidden",
        NotFound => "NotFound",
        BadRequest => "BadRequest",
        Conflict => "Conflict",
        ServiceFailure => "ServiceFailure",
        ServiceUnavailable => "ServiceUnavailable",
        Unprocessable => "Unprocessable",
        Throttled => "Throttled",
        PreconditionFailed => "PreconditionFailed",
    }
}

string_enum! {
    /// What a phone number is used for.
    PhoneNumberProductType {
        BusinessCalling => "BusinessCalling",
        VoiceConnector => "VoiceConnector",
    }
}

string_enum! {
    /// Local or toll-free number.
    PhoneNumberType {
        Local => "Local",
        TollFree => "TollFree",
    }
}

string_enum! {
    /// Lifecycle status of a phone number.
    PhoneNumberStatus {
        AcquireInProgress => "AcquireInProgress",
        AcquireFailed => "AcquireFailed",
        Unassigned => "Unassigned",
        Assigned => "Assigned",
        ReleaseInProgress => "ReleaseInProgress",
        DeleteInProgress => "DeleteInProgress",
        ReleaseFailed => "ReleaseFailed",
        DeleteFailed => "DeleteFailed",
    }
}

string_enum! {
    /// Kind of resource a phone number is associated with.
    PhoneNumberAssociationName {
        AccountId => "AccountId",
        UserId => "UserId",
        VoiceConnectorId => "VoiceConnectorId",
    }
}

string_enum! {
    /// Status of a phone number order.
    PhoneNumberOrderStatus {
        Processing => "Processing",
        Successful => "Successful",
        Failed => "Failed",
        Partial => "Partial",
    }
}

string_enum! {
    /// Status of one number within an order.
    OrderedPhoneNumberStatus {
        Processing => "Processing",
        Acquired => "Acquired",
        Failed => "Failed",
    }
}

string_enum! {
    /// SIP transport of an origination route.
    OriginationRouteProtocol {
        Tcp => "TCP",
        Udp => "UDP",
    }
}

/// An Amazon Chime account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Account {
    /// The AWS account that owns the Chime account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<DateTime<Utc>>,
    /// License assigned to new users.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_license: Option<License>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub supported_licenses: Vec<License>,
}

/// Account-wide meeting settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AccountSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_remote_control: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_dial_out: Option<bool>,
}

/// A user of a Chime account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_provisioned_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_type: Option<License>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_registration_status: Option<RegistrationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_invitation_status: Option<InviteStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invited_on: Option<DateTime<Utc>>,
    /// Personal meeting PIN.
    #[serde(rename = "PersonalPIN", skip_serializing_if = "Option::is_none")]
    pub personal_pin: Option<String>,
}

/// Per-user settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UserSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephony: Option<TelephonySettings>,
}

/// Calling and SMS permissions of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TelephonySettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbound_calling: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outbound_calling: Option<bool>,
    #[serde(rename = "SMS", skip_serializing_if = "Option::is_none")]
    pub sms: Option<bool>,
}

/// A user that a batch user operation failed for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UserError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// One entry of `BatchUpdateUser`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateUserRequestItem {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_type: Option<License>,
}

/// An invitation sent by `InviteUsers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Invite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InviteStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_status: Option<EmailStatus>,
}

/// A provisioned phone number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PhoneNumber {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number_id: Option<String>,
    /// The number in E.164 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub e164_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<PhoneNumberType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<PhoneNumberProductType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PhoneNumberStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<PhoneNumberCapabilities>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub associations: Vec<PhoneNumberAssociation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_timestamp: Option<DateTime<Utc>>,
    /// When a deleted number will be released for good.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_timestamp: Option<DateTime<Utc>>,
}

/// What a phone number can do.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PhoneNumberCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbound_call: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outbound_call: Option<bool>,
    #[serde(rename = "InboundSMS", skip_serializing_if = "Option::is_none")]
    pub inbound_sms: Option<bool>,
    #[serde(rename = "OutboundSMS", skip_serializing_if = "Option::is_none")]
    pub outbound_sms: Option<bool>,
    #[serde(rename = "InboundMMS", skip_serializing_if = "Option::is_none")]
    pub inbound_mms: Option<bool>,
    #[serde(rename = "OutboundMMS", skip_serializing_if = "Option::is_none")]
    pub outbound_mms: Option<bool>,
}

/// A resource a phone number is attached to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PhoneNumberAssociation {
    /// ID of the associated resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<PhoneNumberAssociationName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_timestamp: Option<DateTime<Utc>>,
}

/// A phone number that a batch operation failed for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PhoneNumberError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// One entry of `BatchUpdatePhoneNumber`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdatePhoneNumberRequestItem {
    pub phone_number_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<PhoneNumberProductType>,
}

/// An order for new phone numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PhoneNumberOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<PhoneNumberProductType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PhoneNumberOrderStatus>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ordered_phone_numbers: Vec<OrderedPhoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_timestamp: Option<DateTime<Utc>>,
}

/// One number within a [`PhoneNumberOrder`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OrderedPhoneNumber {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub e164_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderedPhoneNumberStatus>,
}

/// A SIP trunk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VoiceConnector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_connector_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// SIP host that carriers send outbound calls to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outbound_host_name: Option<String>,
    /// Whether calls must use TLS and SRTP.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_encryption: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_timestamp: Option<DateTime<Utc>>,
}

/// Inbound call routing of a voice connector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Origination {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<OriginationRoute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

/// A SIP host that inbound calls are sent to.
///
/// Routes with the lowest `priority` are tried first; `weight` balances
/// traffic between routes of equal priority.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OriginationRoute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<OriginationRouteProtocol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,
}

/// Outbound calling setup of a voice connector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Termination {
    /// Calls per second limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cps_limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_phone_number: Option<String>,
    /// ISO 3166 country codes that calls may be placed to.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub calling_regions: Vec<String>,
    /// IP ranges allowed to send calls, in CIDR notation.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cidr_allowed_list: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

/// Last SIP `OPTIONS` ping seen from the customer side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TerminationHealth {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// SIP digest credentials for termination.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Credential {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "** redacted **"))
            .finish()
    }
}

/// Business calling settings of the AWS account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BusinessCallingSettings {
    /// S3 bucket that call detail records are written to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cdr_bucket: Option<String>,
}

/// Voice connector settings of the AWS account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VoiceConnectorSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cdr_bucket: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_should_keep_unknown_enum_values() {
        let license: License = serde_json::from_value(json!("Enterprise")).unwrap();
        assert_eq!(license, License::Unknown("Enterprise".to_owned()));
        assert_eq!(serde_json::to_value(&license).unwrap(), json!("Enterprise"));
        assert_eq!(
            OriginationRouteProtocol::from("TCP"),
            OriginationRouteProtocol::Tcp
        );
        assert_eq!(AccountType::EnterpriseLwa.to_string(), "EnterpriseLWA");
        assert_eq!(PhoneNumberStatus::VALUES.len(), 8);
    }

    #[test]
    fn test_should_decode_phone_number() {
        let number: PhoneNumber = serde_json::from_value(json!({
            "PhoneNumberId": "%2B12065550100",
            "E164PhoneNumber": "+12065550100",
            "Type": "Local",
            "ProductType": "VoiceConnector",
            "Status": "Assigned",
            "Capabilities": {"InboundCall": true, "InboundSMS": false},
            "Associations": [
                {"Value": "abcdef1ghij2klmno3pqr4", "Name": "VoiceConnectorId",
                 "AssociatedTimestamp": "2019-03-22T17:00:00Z"}
            ],
            "CreatedTimestamp": "2019-03-20T12:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(number.e164_phone_number.as_deref(), Some("+12065550100"));
        assert_eq!(number.r#type, Some(PhoneNumberType::Local));
        assert_eq!(number.status, Some(PhoneNumberStatus::Assigned));
        let capabilities = number.capabilities.unwrap();
        assert_eq!(capabilities.inbound_call, Some(true));
        assert_eq!(capabilities.inbound_sms, Some(false));
        assert_eq!(
            number.associations[0].name,
            Some(PhoneNumberAssociationName::VoiceConnectorId)
        );
    }

    #[test]
    fn test_should_encode_only_present_members() {
        let route = OriginationRoute {
            host: Some("10.0.0.1".into()),
            port: Some(5060),
            protocol: Some(OriginationRouteProtocol::Udp),
            priority: Some(1),
            weight: None,
        };
        assert_eq!(
            serde_json::to_value(&route).unwrap(),
            json!({"Host": "10.0.0.1", "Port": 5060, "Protocol": "UDP", "Priority": 1})
        );
        let settings = TelephonySettings {
            sms: Some(true),
            ..TelephonySettings::default()
        };
        assert_eq!(serde_json::to_value(&settings).unwrap(), json!({"SMS": true}));
    }

    #[test]
    fn test_should_redact_credential_password() {
        let credential = Credential {
            username: Some("sip-user".into()),
            password: Some("hunter2".into()),
        };
        let debug = format!("{credential:?}");
        assert!(debug.contains("sip-user"));
        assert!(!debug.contains("hunter2"));
    }
}
