//! Common AWS type definitions.

use std::{fmt, str::FromStr};

use crate::error::ConfigError;

/// AWS Region identifier, such as `us-east-1` or `cn-north-1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AwsRegion(String);

impl AwsRegion {
    /// Region used when nothing else is configured.
    pub const DEFAULT: &str = "us-east-1";

    /// Create a region, validating its spelling.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidRegion`] if the name is empty or contains
    /// anything other than lowercase ASCII letters, digits, and `-`.
    pub fn new(region: impl Into<String>) -> Result<Self, ConfigError> {
        let region = region.into();
        let valid = !region.is_empty()
            && !region.starts_with('-')
            && !region.ends_with('-')
            && region
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !valid {
            return Err(ConfigError::InvalidRegion(region));
        }
        Ok(Self(region))
    }

    /// Get the region as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the region belongs to the AWS China partition.
    #[must_use]
    pub fn is_china(&self) -> bool {
        self.0.starts_with("cn-")
    }

    /// DNS suffix of the partition the region belongs to.
    #[must_use]
    pub fn partition_suffix(&self) -> &'static str {
        if self.is_china() {
            "amazonaws.com.cn"
        } else {
            "amazonaws.com"
        }
    }
}

impl Default for AwsRegion {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl fmt::Display for AwsRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AwsRegion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for AwsRegion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for AwsRegion {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AwsRegion> for String {
    fn from(region: AwsRegion) -> Self {
        region.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_create_region() {
        let region = AwsRegion::new("eu-west-1").unwrap();
        assert_eq!(region.as_str(), "eu-west-1");
        assert_eq!(region.partition_suffix(), "amazonaws.com");
    }

    #[test]
    fn test_should_use_default_region() {
        assert_eq!(AwsRegion::default().as_str(), "us-east-1");
    }

    #[test]
    fn test_should_reject_malformed_region() {
        assert!(AwsRegion::new("").is_err());
        assert!(AwsRegion::new("US-EAST-1").is_err());
        assert!(AwsRegion::new("us east 1").is_err());
        assert!(AwsRegion::new("-us-east-1").is_err());
    }

    #[test]
    fn test_should_detect_china_partition() {
        let region: AwsRegion = "cn-north-1".parse().unwrap();
        assert!(region.is_china());
        assert_eq!(region.partition_suffix(), "amazonaws.com.cn");
    }

    #[test]
    fn test_should_round_trip_region_through_serde() {
        let region: AwsRegion = serde_json::from_str("\"ap-southeast-2\"").unwrap();
        assert_eq!(region.as_str(), "ap-southeast-2");
        assert_eq!(serde_json::to_string(&region).unwrap(), "\"ap-southeast-2\"");
        assert!(serde_json::from_str::<AwsRegion>("\"Bad Region\"").is_err());
    }
}
