//! Client configuration.
//!
//! Configuration is environment-first, matching the AWS CLI conventions, and
//! can be overridden with the builder methods.

use std::time::Duration;

use crate::{
    endpoints::{Endpoint, resolve_endpoint},
    error::ConfigError,
    types::AwsRegion,
};

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration shared by every service client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Region to call.
    pub region: AwsRegion,
    /// Optional endpoint override (`AWS_ENDPOINT_URL`).
    pub endpoint_url: Option<String>,
    /// Shared-credentials profile (`AWS_PROFILE`).
    pub profile: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: AwsRegion::default(),
            endpoint_url: None,
            profile: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `AWS_REGION` (falling back to `AWS_DEFAULT_REGION`),
    /// `AWS_ENDPOINT_URL`, `AWS_PROFILE`, and `AWSBIND_TIMEOUT_SECS`.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] when a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ClientConfig::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] when a variable is set to an unusable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(v) = non_empty("AWS_REGION").or_else(|| non_empty("AWS_DEFAULT_REGION")) {
            config.region = AwsRegion::new(v.trim())?;
        }
        if let Some(v) = non_empty("AWS_ENDPOINT_URL") {
            config = config.with_endpoint_url(v.trim())?;
        }
        if let Some(v) = non_empty("AWS_PROFILE") {
            config.profile = Some(v.trim().to_owned());
        }
        if let Some(v) = non_empty("AWSBIND_TIMEOUT_SECS") {
            let secs = v
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or(ConfigError::InvalidEnv {
                    name: "AWSBIND_TIMEOUT_SECS",
                    value: v.clone(),
                })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Use `region` instead of the configured one.
    #[must_use]
    pub fn with_region(mut self, region: AwsRegion) -> Self {
        self.region = region;
        self
    }

    /// Send requests to `url` instead of the resolved endpoint.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidEndpoint`] if `url` is not absolute.
    pub fn with_endpoint_url(mut self, url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidEndpoint(url));
        }
        self.endpoint_url = Some(url);
        Ok(self)
    }

    /// Read credentials from the named shared-credentials profile.
    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Set the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve the endpoint of `service` under this configuration.
    ///
    /// # Errors
    /// Propagates [`resolve_endpoint`] failures.
    pub fn endpoint(&self, service: &str) -> Result<Endpoint, ConfigError> {
        resolve_endpoint(service, &self.region, self.endpoint_url.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_should_create_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.region.as_str(), "us-east-1");
        assert!(config.endpoint_url.is_none());
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_should_prefer_aws_region_over_default_region() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("AWS_REGION", "eu-west-1"),
            ("AWS_DEFAULT_REGION", "us-west-2"),
        ]))
        .unwrap();
        assert_eq!(config.region.as_str(), "eu-west-1");

        let config =
            ClientConfig::from_lookup(lookup(&[("AWS_DEFAULT_REGION", "us-west-2")])).unwrap();
        assert_eq!(config.region.as_str(), "us-west-2");
    }

    #[test]
    fn test_should_read_endpoint_profile_and_timeout() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("AWS_ENDPOINT_URL", "http://localhost:4566"),
            ("AWS_PROFILE", "staging"),
            ("AWSBIND_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:4566"));
        assert_eq!(config.profile.as_deref(), Some("staging"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.endpoint("ec2").unwrap().url, "http://localhost:4566");
    }

    #[test]
    fn test_should_reject_bad_timeout() {
        let err = ClientConfig::from_lookup(lookup(&[("AWSBIND_TIMEOUT_SECS", "soon")]));
        assert!(matches!(
            err,
            Err(ConfigError::InvalidEnv {
                name: "AWSBIND_TIMEOUT_SECS",
                ..
            })
        ));
        assert!(ClientConfig::from_lookup(lookup(&[("AWSBIND_TIMEOUT_SECS", "0")])).is_err());
    }

    #[test]
    fn test_should_reject_bad_region() {
        let err = ClientConfig::from_lookup(lookup(&[("AWS_REGION", "Mars Base")]));
        assert!(matches!(err, Err(ConfigError::InvalidRegion(_))));
    }

    #[test]
    fn test_should_apply_builder_overrides() {
        let config = ClientConfig::default()
            .with_region(AwsRegion::new("ap-south-1").unwrap())
            .with_profile("ci")
            .with_timeout(Duration::from_secs(2));
        assert_eq!(config.endpoint("ec2").unwrap().url, "https://ec2.ap-south-1.amazonaws.com");
        assert_eq!(config.profile.as_deref(), Some("ci"));
        assert!(config.clone().with_endpoint_url("ftp://nope").is_err());
    }
}
