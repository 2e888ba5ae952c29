//! Canonical request construction for AWS Signature Version 4.
//!
//! ```text
//! HTTPRequestMethod\n
//! CanonicalURI\n
//! CanonicalQueryString\n
//! CanonicalHeaders\n\n
//! SignedHeaders\n
//! HashedPayload
//! ```
//!
//! The signer only talks to non-S3 services, so the canonical URI is the
//! already-encoded request path encoded once more, segment by segment.

use std::{collections::BTreeMap, fmt};

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use sha2::{Digest, Sha256};

/// Everything except the RFC 3986 unreserved characters is encoded.
pub const URI_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// A canonical request, ready to be hashed into the string to sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRequest {
    method: String,
    uri: String,
    query: String,
    headers: BTreeMap<String, String>,
    payload_hash: String,
}

impl CanonicalRequest {
    /// Build a canonical request.
    ///
    /// `path` and `query` are taken exactly as they appear on the wire.
    /// Every entry of `headers` is signed; repeated names are joined with
    /// commas in the order given.
    ///
    /// # Examples
    ///
    /// ```
    /// use awsbind_auth::canonical::CanonicalRequest;
    ///
    /// let canonical = CanonicalRequest::new(
    ///     "GET",
    ///     "/",
    ///     "Version=2010-05-08&Action=ListUsers",
    ///     &[("Host", "iam.amazonaws.com")],
    ///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    /// );
    /// assert_eq!(canonical.signed_headers(), "host");
    /// assert!(canonical.to_string().starts_with("GET\n/\nAction=ListUsers&Version=2010-05-08\n"));
    /// ```
    #[must_use]
    pub fn new(
        method: &str,
        path: &str,
        query: &str,
        headers: &[(&str, &str)],
        payload_hash: &str,
    ) -> Self {
        let mut canonical_headers: BTreeMap<String, String> = BTreeMap::new();
        for (name, value) in headers {
            let value = collapse_whitespace(value.trim());
            canonical_headers
                .entry(name.to_ascii_lowercase())
                .and_modify(|existing| {
                    existing.push(',');
                    existing.push_str(&value);
                })
                .or_insert(value);
        }

        Self {
            method: method.to_ascii_uppercase(),
            uri: canonical_uri(path),
            query: canonical_query_string(query),
            headers: canonical_headers,
            payload_hash: payload_hash.to_owned(),
        }
    }

    /// Semicolon-separated, sorted list of the signed header names.
    #[must_use]
    pub fn signed_headers(&self) -> String {
        self.headers
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Hex-encoded SHA-256 of the canonical request.
    #[must_use]
    pub fn hash(&self) -> String {
        hex::encode(Sha256::digest(self.to_string().as_bytes()))
    }
}

impl fmt::Display for CanonicalRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.method)?;
        writeln!(f, "{}", self.uri)?;
        writeln!(f, "{}", self.query)?;
        for (name, value) in &self.headers {
            writeln!(f, "{name}:{value}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.signed_headers())?;
        f.write_str(&self.payload_hash)
    }
}

/// Canonical URI: each path segment of the encoded path, encoded again.
///
/// # Examples
///
/// ```
/// use awsbind_auth::canonical::canonical_uri;
///
/// assert_eq!(canonical_uri(""), "/");
/// assert_eq!(canonical_uri("/phone-numbers/%2B12065550100"), "/phone-numbers/%252B12065550100");
/// ```
#[must_use]
pub fn canonical_uri(path: &str) -> String {
    if path.is_empty() || path == "/" {
        return "/".to_owned();
    }
    path.split('/')
        .map(uri_encode)
        .collect::<Vec<_>>()
        .join("/")
}

/// Canonical query string: parameters re-encoded with the strict set and
/// sorted by key, then value.
///
/// # Examples
///
/// ```
/// use awsbind_auth::canonical::canonical_query_string;
///
/// assert_eq!(canonical_query_string("b=2&a=1"), "a=1&b=2");
/// assert_eq!(canonical_query_string("name=a b"), "name=a%20b");
/// ```
#[must_use]
pub fn canonical_query_string(query: &str) -> String {
    let mut params: Vec<(String, String)> = query
        .split('&')
        .filter(|s| !s.is_empty())
        .map(|param| {
            let (k, v) = param.split_once('=').unwrap_or((param, ""));
            (reencode(k), reencode(v))
        })
        .collect();
    params.sort_unstable();

    params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Percent-encode `input` with the SigV4 rules.
#[must_use]
pub fn uri_encode(input: &str) -> String {
    utf8_percent_encode(input, URI_ENCODE_SET).to_string()
}

fn reencode(component: &str) -> String {
    uri_encode(&percent_decode_str(component).decode_utf8_lossy())
}

fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                result.push(' ');
            }
            prev_was_space = true;
        } else {
            result.push(ch);
            prev_was_space = false;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_HASH: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn test_should_normalize_empty_path_to_slash() {
        assert_eq!(canonical_uri(""), "/");
        assert_eq!(canonical_uri("/"), "/");
    }

    #[test]
    fn test_should_double_encode_path_segments() {
        assert_eq!(canonical_uri("/accounts/abc/users"), "/accounts/abc/users");
        assert_eq!(canonical_uri("/hello%20world"), "/hello%2520world");
    }

    #[test]
    fn test_should_sort_and_reencode_query_parameters() {
        assert_eq!(canonical_query_string("b=2&a=1&c=3"), "a=1&b=2&c=3");
        assert_eq!(canonical_query_string("a=2&a=1"), "a=1&a=2");
        assert_eq!(canonical_query_string("key=hello%20world"), "key=hello%20world");
        assert_eq!(canonical_query_string("flag"), "flag=");
        assert_eq!(canonical_query_string(""), "");
    }

    #[test]
    fn test_should_keep_uri_encoded_query_unchanged() {
        let query = format!("Name.1={}", uri_encode("a b+c"));
        assert_eq!(query, "Name.1=a%20b%2Bc");
        assert_eq!(canonical_query_string(&query), query);
    }

    #[test]
    fn test_should_merge_and_trim_headers() {
        let canonical = CanonicalRequest::new(
            "get",
            "/",
            "",
            &[("X-Custom", "  a   b  "), ("x-custom", "c"), ("Host", "example.com")],
            EMPTY_HASH,
        );
        assert_eq!(canonical.signed_headers(), "host;x-custom");
        let text = canonical.to_string();
        assert!(text.contains("host:example.com\nx-custom:a b,c\n\nhost;x-custom\n"));
        assert!(text.starts_with("GET\n"));
    }

    #[test]
    fn test_should_build_canonical_request_matching_iam_example() {
        let canonical = CanonicalRequest::new(
            "GET",
            "/",
            "Action=ListUsers&Version=2010-05-08",
            &[
                ("Content-Type", "application/x-www-form-urlencoded; charset=utf-8"),
                ("Host", "iam.amazonaws.com"),
                ("X-Amz-Date", "20150830T123600Z"),
            ],
            EMPTY_HASH,
        );

        let expected = "GET\n/\nAction=ListUsers&Version=2010-05-08\n\
                        content-type:application/x-www-form-urlencoded; charset=utf-8\n\
                        host:iam.amazonaws.com\n\
                        x-amz-date:20150830T123600Z\n\n\
                        content-type;host;x-amz-date\n\
                        e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
        assert_eq!(canonical.to_string(), expected);
        assert_eq!(
            canonical.hash(),
            "f536975d06c0309214f805bb90ccff089219ecd68b2577efef23edd43b7e1a59"
        );
    }
}
