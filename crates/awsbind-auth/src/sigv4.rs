//! AWS Signature Version 4 signing.
//!
//! Signing an outgoing request takes four steps:
//!
//! 1. Stamp the request with `x-amz-date` (and the session token, if any).
//! 2. Build the canonical request from method, path, query, headers, and
//!    the SHA-256 of the body.
//! 3. Build the string to sign from the timestamp, credential scope, and
//!    canonical request hash.
//! 4. HMAC the string to sign with a key derived from the secret key and the
//!    credential scope, and write the `Authorization` header.
//!
//! The main entry point is [`sign_request`].

use bytes::Bytes;
use chrono::{DateTime, Utc};
use hmac::{Hmac, KeyInit, Mac};
use http::{HeaderValue, header};
use sha2::{Digest, Sha256};
use tracing::{debug, trace};

use crate::{canonical::CanonicalRequest, credentials::Credentials, error::AuthError};

/// The only algorithm this signer produces.
pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Headers that are never part of the signature.
const UNSIGNED_HEADERS: &[&str] = &[
    "authorization",
    "user-agent",
    "content-length",
    "expect",
    "x-amzn-trace-id",
];

type HmacSha256 = Hmac<Sha256>;

/// Scope and time of a signature.
#[derive(Debug, Clone)]
pub struct SigningParams<'a> {
    /// Region in the credential scope.
    pub region: &'a str,
    /// Service name in the credential scope.
    pub service: &'a str,
    /// Signing time; also written to `x-amz-date`.
    pub time: DateTime<Utc>,
    /// Whether to add and sign `x-amz-content-sha256`.
    pub content_sha256_header: bool,
}

impl<'a> SigningParams<'a> {
    /// Signing parameters for `service` in `region` at `time`.
    #[must_use]
    pub fn new(region: &'a str, service: &'a str, time: DateTime<Utc>) -> Self {
        Self {
            region,
            service,
            time,
            content_sha256_header: false,
        }
    }

    /// Also send the payload hash as `x-amz-content-sha256`.
    #[must_use]
    pub fn with_content_sha256_header(mut self) -> Self {
        self.content_sha256_header = true;
        self
    }

    fn amz_date(&self) -> String {
        self.time.format("%Y%m%dT%H%M%SZ").to_string()
    }

    fn credential_scope(&self) -> String {
        format!(
            "{}/{}/{}/aws4_request",
            self.time.format("%Y%m%d"),
            self.region,
            self.service
        )
    }
}

/// Sign `request` in place and return the hex signature.
///
/// Adds `host` when absent (taken from the URI authority), `x-amz-date`,
/// `x-amz-security-token` for temporary credentials, optionally
/// `x-amz-content-sha256`, and finally `authorization`. Every other header
/// already on the request is signed as well.
///
/// # Errors
///
/// Returns [`AuthError::MissingHeader`] when the request has neither a
/// `host` header nor an absolute URI, and [`AuthError::InvalidHeaderValue`]
/// when a header cannot be represented as text.
pub fn sign_request(
    request: &mut http::Request<Bytes>,
    credentials: &Credentials,
    params: &SigningParams<'_>,
) -> Result<String, AuthError> {
    let payload_hash = hash_payload(request.body());
    let amz_date = params.amz_date();

    if !request.headers().contains_key(header::HOST) {
        let host = request
            .uri()
            .authority()
            .ok_or_else(|| AuthError::MissingHeader("host".to_owned()))?
            .as_str()
            .to_owned();
        insert_header(request, "host", &host)?;
    }
    insert_header(request, "x-amz-date", &amz_date)?;
    if let Some(token) = credentials.session_token() {
        insert_header(request, "x-amz-security-token", token)?;
    }
    if params.content_sha256_header {
        insert_header(request, "x-amz-content-sha256", &payload_hash)?;
    }

    let mut header_pairs: Vec<(&str, &str)> = Vec::with_capacity(request.headers().len());
    for (name, value) in request.headers() {
        if UNSIGNED_HEADERS.contains(&name.as_str()) {
            continue;
        }
        let value = value
            .to_str()
            .map_err(|_| AuthError::InvalidHeaderValue(name.as_str().to_owned()))?;
        header_pairs.push((name.as_str(), value));
    }

    let canonical = CanonicalRequest::new(
        request.method().as_str(),
        request.uri().path(),
        request.uri().query().unwrap_or(""),
        &header_pairs,
        &payload_hash,
    );
    trace!(canonical_request = %canonical, "Built canonical request");

    let scope = params.credential_scope();
    let string_to_sign = build_string_to_sign(&amz_date, &scope, &canonical.hash());
    trace!(string_to_sign, "Built string to sign");

    let signing_key = derive_signing_key(
        credentials.secret_access_key(),
        &amz_date[..8],
        params.region,
        params.service,
    );
    let signature = compute_signature(&signing_key, &string_to_sign);
    let signed_headers = canonical.signed_headers();

    let authorization = format!(
        "{ALGORITHM} Credential={}/{scope}, SignedHeaders={signed_headers}, Signature={signature}",
        credentials.access_key_id()
    );
    insert_header(request, "authorization", &authorization)?;

    debug!(
        access_key_id = %credentials.access_key_id(),
        region = params.region,
        service = params.service,
        signed_headers,
        "Signed request"
    );
    Ok(signature)
}

/// Build the SigV4 string to sign.
///
/// ```text
/// AWS4-HMAC-SHA256\n
/// <ISO8601 timestamp>\n
/// <credential_scope>\n
/// <hex(SHA256(canonical_request))>
/// ```
#[must_use]
pub fn build_string_to_sign(
    timestamp: &str,
    credential_scope: &str,
    canonical_request_hash: &str,
) -> String {
    format!("{ALGORITHM}\n{timestamp}\n{credential_scope}\n{canonical_request_hash}")
}

/// Derive the SigV4 signing key.
///
/// ```text
/// DateKey              = HMAC-SHA256("AWS4" + secret_key, date)
/// DateRegionKey        = HMAC-SHA256(DateKey, region)
/// DateRegionServiceKey = HMAC-SHA256(DateRegionKey, service)
/// SigningKey           = HMAC-SHA256(DateRegionServiceKey, "aws4_request")
/// ```
#[must_use]
pub fn derive_signing_key(secret_key: &str, date: &str, region: &str, service: &str) -> Vec<u8> {
    let date_key = hmac_sha256(format!("AWS4{secret_key}").as_bytes(), date.as_bytes());
    let date_region_key = hmac_sha256(&date_key, region.as_bytes());
    let date_region_service_key = hmac_sha256(&date_region_key, service.as_bytes());
    hmac_sha256(&date_region_service_key, b"aws4_request")
}

/// Hex-encoded HMAC-SHA256 of `data` under `signing_key`.
#[must_use]
pub fn compute_signature(signing_key: &[u8], data: &str) -> String {
    hex::encode(hmac_sha256(signing_key, data.as_bytes()))
}

/// Hex-encoded SHA-256 of a request body.
///
/// # Examples
///
/// ```
/// use awsbind_auth::sigv4::hash_payload;
///
/// assert_eq!(
///     hash_payload(b""),
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
/// );
/// ```
#[must_use]
pub fn hash_payload(payload: &[u8]) -> String {
    hex::encode(Sha256::digest(payload))
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can accept keys of any length");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

fn insert_header(
    request: &mut http::Request<Bytes>,
    name: &'static str,
    value: &str,
) -> Result<(), AuthError> {
    let value =
        HeaderValue::from_str(value).map_err(|_| AuthError::InvalidHeaderValue(name.to_owned()))?;
    request.headers_mut().insert(name, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    const IAM_SECRET: &str = "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY";

    fn iam_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2015, 8, 30, 12, 36, 0).unwrap()
    }

    #[test]
    fn test_should_derive_signing_key_matching_aws_example() {
        let key = derive_signing_key(IAM_SECRET, "20150830", "us-east-1", "iam");
        assert_eq!(
            hex::encode(key),
            "c4afb1cc5771d871763a393e44b703571b55cc28424d1a5e86da6ed3c154a4b9"
        );
    }

    #[test]
    fn test_should_compute_signature_for_s3_get_object_example() {
        let key = derive_signing_key(
            "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY",
            "20130524",
            "us-east-1",
            "s3",
        );
        let string_to_sign = build_string_to_sign(
            "20130524T000000Z",
            "20130524/us-east-1/s3/aws4_request",
            "7344ae5b7ee6c3e7e6b0fe0640412a37625d1fbfff95c48bbb2dc43964946972",
        );
        assert_eq!(
            compute_signature(&key, &string_to_sign),
            "f0e8bdb87c964420e857bd35b5d6ed310bd44f0170aba48dd91039c6036bdb41"
        );
    }

    #[test]
    fn test_should_sign_iam_list_users_request() {
        let mut request = http::Request::builder()
            .method("GET")
            .uri("https://iam.amazonaws.com/?Action=ListUsers&Version=2010-05-08")
            .header(
                "content-type",
                "application/x-www-form-urlencoded; charset=utf-8",
            )
            .body(Bytes::new())
            .unwrap();
        let credentials = Credentials::new("AKIDEXAMPLE", IAM_SECRET, None);
        let params = SigningParams::new("us-east-1", "iam", iam_time());

        let signature = sign_request(&mut request, &credentials, &params).unwrap();

        assert_eq!(
            signature,
            "5d672d79c15b13162d9279b0855cfba6789a8edb4c82c400e06b5924a6f2b5d7"
        );
        assert_eq!(request.headers()["host"], "iam.amazonaws.com");
        assert_eq!(request.headers()["x-amz-date"], "20150830T123600Z");
        assert_eq!(
            request.headers()["authorization"],
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/iam/aws4_request, \
             SignedHeaders=content-type;host;x-amz-date, \
             Signature=5d672d79c15b13162d9279b0855cfba6789a8edb4c82c400e06b5924a6f2b5d7"
        );
    }

    #[test]
    fn test_should_sign_session_token_and_payload_hash() {
        let mut request = http::Request::builder()
            .method("POST")
            .uri("https://ec2.us-east-1.amazonaws.com/")
            .header("user-agent", "awsbind-test")
            .body(Bytes::from_static(b"Action=DescribeRegions&Version=2014-10-01"))
            .unwrap();
        let credentials = Credentials::new("AKIDEXAMPLE", IAM_SECRET, Some("token".to_owned()));
        let params = SigningParams::new("us-east-1", "ec2", iam_time()).with_content_sha256_header();

        sign_request(&mut request, &credentials, &params).unwrap();

        let headers = request.headers();
        assert_eq!(headers["x-amz-security-token"], "token");
        assert_eq!(
            headers["x-amz-content-sha256"],
            hash_payload(b"Action=DescribeRegions&Version=2014-10-01").as_str()
        );
        let authorization = headers["authorization"].to_str().unwrap();
        assert!(authorization.contains(
            "SignedHeaders=host;x-amz-content-sha256;x-amz-date;x-amz-security-token,"
        ));
        assert!(!authorization.contains("user-agent"));
    }

    #[test]
    fn test_should_reject_request_without_host() {
        let mut request = http::Request::builder()
            .uri("/relative")
            .body(Bytes::new())
            .unwrap();
        let credentials = Credentials::new("AKID", "secret", None);
        let params = SigningParams::new("us-east-1", "ec2", iam_time());
        assert!(matches!(
            sign_request(&mut request, &credentials, &params),
            Err(AuthError::MissingHeader(_))
        ));
    }
}
