//! EC2 error codes.
//!
//! EC2 reports failures as `<Response><Errors><Error><Code>` documents. The
//! code is a dotted string such as `InvalidInstanceID.NotFound`; this module
//! gives the common ones a typed name and keeps anything else verbatim.

use std::fmt;

macro_rules! ec2_error_codes {
    ($($(#[$doc:meta])* $variant:ident => $code:literal,)*) => {
        /// Well-known EC2 error codes.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum Ec2ErrorCode {
            $($(#[$doc])* $variant,)*
            /// A code not listed above, kept as received.
            Unknown(String),
        }

        impl Ec2ErrorCode {
            /// Parse a wire error code.
            #[must_use]
            pub fn from_code(code: &str) -> Self {
                match code {
                    $($code => Self::$variant,)*
                    other => Self::Unknown(other.to_owned()),
                }
            }

            /// The wire error code.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $code,)*
                    Self::Unknown(code) => code,
                }
            }
        }
    };
}

ec2_error_codes! {
    /// The request would have succeeded, but `DryRun` was set.
    DryRunOperation => "DryRunOperation",
    /// The credentials could not be validated.
    AuthFailure => "AuthFailure",
    /// The caller lacks permission for the action.
    UnauthorizedOperation => "UnauthorizedOperation",
    /// The request signature does not match.
    SignatureDoesNotMatch => "SignatureDoesNotMatch",
    /// The account must opt in to the service first.
    OptInRequired => "OptInRequired",
    /// The account is blocked.
    Blocked => "Blocked",
    /// The action is not valid for this API version.
    InvalidAction => "InvalidAction",
    /// A required parameter is missing.
    MissingParameter => "MissingParameter",
    /// A parameter is not recognized.
    UnknownParameter => "UnknownParameter",
    /// A parameter value is invalid.
    InvalidParameterValue => "InvalidParameterValue",
    /// Parameters that cannot be used together were supplied.
    InvalidParameterCombination => "InvalidParameterCombination",
    /// A client token was reused with different parameters.
    IdempotentParameterMismatch => "IdempotentParameterMismatch",
    /// The resource is in a state that does not allow the action.
    IncorrectState => "IncorrectState",
    /// The instance is in a state that does not allow the action.
    IncorrectInstanceState => "IncorrectInstanceState",
    /// The instance ID is malformed.
    InvalidInstanceIdMalformed => "InvalidInstanceID.Malformed",
    /// The instance does not exist.
    InvalidInstanceIdNotFound => "InvalidInstanceID.NotFound",
    /// The AMI ID is malformed.
    InvalidAmiIdMalformed => "InvalidAMIID.Malformed",
    /// The AMI does not exist.
    InvalidAmiIdNotFound => "InvalidAMIID.NotFound",
    /// The key pair does not exist.
    InvalidKeyPairNotFound => "InvalidKeyPair.NotFound",
    /// A key pair with that name already exists.
    InvalidKeyPairDuplicate => "InvalidKeyPair.Duplicate",
    /// The security group does not exist.
    InvalidGroupNotFound => "InvalidGroup.NotFound",
    /// A security group with that name already exists.
    InvalidGroupDuplicate => "InvalidGroup.Duplicate",
    /// The volume does not exist.
    InvalidVolumeNotFound => "InvalidVolume.NotFound",
    /// The snapshot does not exist.
    InvalidSnapshotNotFound => "InvalidSnapshot.NotFound",
    /// The VPC does not exist.
    InvalidVpcIdNotFound => "InvalidVpcID.NotFound",
    /// The subnet does not exist.
    InvalidSubnetIdNotFound => "InvalidSubnetID.NotFound",
    /// The Elastic IP allocation does not exist.
    InvalidAllocationIdNotFound => "InvalidAllocationID.NotFound",
    /// The Elastic IP address does not exist.
    InvalidAddressNotFound => "InvalidAddress.NotFound",
    /// Too many Elastic IP addresses.
    AddressLimitExceeded => "AddressLimitExceeded",
    /// Too many running instances.
    InstanceLimitExceeded => "InstanceLimitExceeded",
    /// Too many volumes.
    VolumeLimitExceeded => "VolumeLimitExceeded",
    /// Not enough capacity for the requested instance type.
    InsufficientInstanceCapacity => "InsufficientInstanceCapacity",
    /// The request rate is too high.
    RequestLimitExceeded => "RequestLimitExceeded",
    /// EC2 failed internally.
    InternalError => "InternalError",
    /// EC2 is temporarily unavailable.
    Unavailable => "Unavailable",
}

impl Ec2ErrorCode {
    /// Whether this code reports a successful dry run.
    #[must_use]
    pub fn is_dry_run(&self) -> bool {
        matches!(self, Self::DryRunOperation)
    }

    /// Whether the fault lies with the service rather than the request.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            Self::InternalError | Self::Unavailable | Self::InsufficientInstanceCapacity
        )
    }
}

impl From<&str> for Ec2ErrorCode {
    fn from(code: &str) -> Self {
        Self::from_code(code)
    }
}

impl fmt::Display for Ec2ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_parse_dotted_codes() {
        assert_eq!(
            Ec2ErrorCode::from_code("InvalidInstanceID.NotFound"),
            Ec2ErrorCode::InvalidInstanceIdNotFound
        );
        assert_eq!(
            Ec2ErrorCode::InvalidAmiIdMalformed.as_str(),
            "InvalidAMIID.Malformed"
        );
    }

    #[test]
    fn test_should_keep_unknown_codes_verbatim() {
        let code = Ec2ErrorCode::from("InvalidRouteTableID.NotFound");
        assert_eq!(
            code,
            Ec2ErrorCode::Unknown("InvalidRouteTableID.NotFound".to_owned())
        );
        assert_eq!(code.to_string(), "InvalidRouteTableID.NotFound");
    }

    #[test]
    fn test_should_classify_codes() {
        assert!(Ec2ErrorCode::from_code("DryRunOperation").is_dry_run());
        assert!(Ec2ErrorCode::Unavailable.is_server_error());
        assert!(!Ec2ErrorCode::AuthFailure.is_server_error());
    }
}
