//! Endpoint resolution.
//!
//! Maps a service name and region to the URL a client talks to and the
//! region/service pair that goes into the SigV4 credential scope. Most
//! services are regional (`https://{service}.{region}.amazonaws.com`); Chime
//! and IAM are global and always sign for `us-east-1`.

use tracing::debug;

use crate::{error::ConfigError, types::AwsRegion};

/// A resolved service endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Base URL, without a trailing slash.
    pub url: String,
    /// Region used in the credential scope.
    pub signing_region: String,
    /// Service name used in the credential scope.
    pub signing_name: String,
}

/// Global services: (service, url, signing region).
const GLOBAL_ENDPOINTS: &[(&str, &str, &str)] = &[
    ("chime", "https://service.chime.aws.amazon.com", "us-east-1"),
    ("iam", "https://iam.amazonaws.com", "us-east-1"),
];

/// Resolve the endpoint for `service` in `region`.
///
/// An `override_url` replaces the URL but keeps the signing region and name,
/// which is what local emulators and VPC endpoints expect.
///
/// # Errors
/// Returns [`ConfigError::InvalidEndpoint`] if `override_url` is not an
/// absolute `http://` or `https://` URL.
///
/// # Examples
///
/// ```
/// use awsbind_core::{AwsRegion, resolve_endpoint};
///
/// let region = AwsRegion::new("eu-west-1").unwrap();
/// let endpoint = resolve_endpoint("ec2", &region, None).unwrap();
/// assert_eq!(endpoint.url, "https://ec2.eu-west-1.amazonaws.com");
/// assert_eq!(endpoint.signing_region, "eu-west-1");
/// ```
pub fn resolve_endpoint(
    service: &str,
    region: &AwsRegion,
    override_url: Option<&str>,
) -> Result<Endpoint, ConfigError> {
    let mut endpoint = GLOBAL_ENDPOINTS
        .iter()
        .find(|(name, _, _)| *name == service)
        .map_or_else(
            || Endpoint {
                url: format!(
                    "https://{service}.{region}.{}",
                    region.partition_suffix()
                ),
                signing_region: region.as_str().to_owned(),
                signing_name: service.to_owned(),
            },
            |(name, url, signing_region)| Endpoint {
                url: (*url).to_owned(),
                signing_region: (*signing_region).to_owned(),
                signing_name: (*name).to_owned(),
            },
        );

    if let Some(url) = override_url {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidEndpoint(url.to_owned()));
        }
        endpoint.url = url.trim_end_matches('/').to_owned();
    }

    debug!(
        service,
        url = %endpoint.url,
        signing_region = %endpoint.signing_region,
        "Resolved endpoint"
    );
    Ok(endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(name: &str) -> AwsRegion {
        AwsRegion::new(name).unwrap()
    }

    #[test]
    fn test_should_resolve_regional_endpoint() {
        let ep = resolve_endpoint("ec2", &region("us-west-2"), None).unwrap();
        assert_eq!(ep.url, "https://ec2.us-west-2.amazonaws.com");
        assert_eq!(ep.signing_region, "us-west-2");
        assert_eq!(ep.signing_name, "ec2");
    }

    #[test]
    fn test_should_resolve_china_endpoint() {
        let ep = resolve_endpoint("ec2", &region("cn-north-1"), None).unwrap();
        assert_eq!(ep.url, "https://ec2.cn-north-1.amazonaws.com.cn");
    }

    #[test]
    fn test_should_pin_global_service_to_us_east_1() {
        let ep = resolve_endpoint("chime", &region("eu-central-1"), None).unwrap();
        assert_eq!(ep.url, "https://service.chime.aws.amazon.com");
        assert_eq!(ep.signing_region, "us-east-1");
        assert_eq!(ep.signing_name, "chime");
    }

    #[test]
    fn test_should_resolve_only_known_global_services_globally() {
        let ep = resolve_endpoint("iam", &region("eu-central-1"), None).unwrap();
        assert_eq!(ep.url, "https://iam.amazonaws.com");
        assert_eq!(ep.signing_region, "us-east-1");

        let ep = resolve_endpoint("route53", &region("eu-central-1"), None).unwrap();
        assert_eq!(ep.url, "https://route53.eu-central-1.amazonaws.com");
        assert_eq!(ep.signing_region, "eu-central-1");
    }

    #[test]
    fn test_should_apply_endpoint_override() {
        let ep = resolve_endpoint("ec2", &region("eu-west-1"), Some("http://localhost:4566/"))
            .unwrap();
        assert_eq!(ep.url, "http://localhost:4566");
        assert_eq!(ep.signing_region, "eu-west-1");
    }

    #[test]
    fn test_should_reject_relative_override() {
        let err = resolve_endpoint("ec2", &region("eu-west-1"), Some("localhost:4566"));
        assert!(matches!(err, Err(ConfigError::InvalidEndpoint(_))));
    }
}
