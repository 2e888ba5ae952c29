//! AWS Signature Version 4 request signing for awsbind clients.
//!
//! This crate is the client half of SigV4: given an outgoing HTTP request and
//! a set of [`Credentials`], it adds the `x-amz-date`, optional
//! `x-amz-security-token`, and `Authorization` headers that AWS expects.
//!
//! # Usage
//!
//! ```rust
//! use awsbind_auth::{Credentials, SigningParams, sign_request};
//! use bytes::Bytes;
//! use chrono::{TimeZone, Utc};
//!
//! let mut request = http::Request::builder()
//!     .method("POST")
//!     .uri("https://ec2.us-east-1.amazonaws.com/")
//!     .body(Bytes::from_static(b"Action=DescribeRegions&Version=2014-10-01"))
//!     .unwrap();
//! let credentials = Credentials::new("AKIDEXAMPLE", "secret", None);
//! let params = SigningParams::new("us-east-1", "ec2", Utc.with_ymd_and_hms(2015, 8, 30, 12, 36, 0).unwrap());
//! sign_request(&mut request, &credentials, &params).unwrap();
//! assert!(request.headers().contains_key("authorization"));
//! ```
//!
//! # Modules
//!
//! - [`canonical`] - Canonical request construction
//! - [`credentials`] - Credentials and the provider chain
//! - [`error`] - Signing and credential error types
//! - [`sigv4`] - Signing key derivation and request signing

pub mod canonical;
pub mod credentials;
pub mod error;
pub mod sigv4;

pub use credentials::{
    ChainProvider, Credentials, EnvironmentProvider, ProfileProvider, ProvideCredentials,
    StaticProvider,
};
pub use error::AuthError;
pub use sigv4::{SigningParams, hash_payload, sign_request};
