//! Signed HTTP transport shared by every awsbind service client.
//!
//! Each operation of a generated client is a one-line call into this crate:
//! the request shape is serialized, signed with SigV4, sent through an
//! [`HttpClient`], and the response is either deserialized or mapped onto
//! [`SdkError::Service`].
//!
//! - [`QueryClient`] speaks the EC2 query protocol (form body in, XML out)
//! - [`RestJsonClient`] speaks REST-JSON (URI labels and query string plus a
//!   JSON body in, JSON out)
//! - [`ReqwestClient`] is the production [`HttpClient`]
//!
//! There is no retry layer: a failed call surfaces its error once.

pub mod client;
pub mod error;
pub mod query;
pub mod rest_json;
#[cfg(any(test, feature = "test-util"))]
pub mod test_util;

pub use client::{HttpClient, ReqwestClient};
pub use error::{SdkError, ServiceError};
pub use query::QueryClient;
pub use rest_json::{RestJsonClient, RestRequest};
