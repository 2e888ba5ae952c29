//! Auto-generated from the Amazon EC2 2014-10-01 API model. DO NOT EDIT.
//!
//! Request, result, and shared shapes of the Amazon EC2 query API, together
//! with their query-string serializers and XML deserializers.
#![allow(clippy::too_many_lines)]
#![allow(clippy::struct_excessive_bools)]
#![allow(missing_docs)]

pub mod deserialize;
pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod serialize;
pub mod types;

pub use error::Ec2ErrorCode;
pub use operations::Ec2Operation;

/// Value of the `Version` parameter sent with every action.
pub const API_VERSION: &str = "2014-10-01";

/// Namespace declared on every response document.
pub const XML_NAMESPACE: &str = "http://ec2.amazonaws.com/doc/2014-10-01/";

// Generated: 154 operations, 135 shared structs, 154 input structs, 86 output structs

#[cfg(test)]
mod tests;
