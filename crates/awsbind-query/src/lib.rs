//! EC2 query protocol encoding for awsbind.
//!
//! Requests go out as `application/x-www-form-urlencoded` bodies of
//! `Action=...&Version=...` plus the flattened request members; responses
//! come back as XML documents whose root is `<{Action}Response>`.
//!
//! # Key components
//!
//! - [`QuerySerialize`] and [`QueryParams`] for flattening request shapes
//! - [`Ec2Deserialize`] and [`from_xml`] for parsing response documents
//! - [`parse_error_response`] for the `<Response><Errors>` error envelope
//! - [`Blob`] for base64-encoded binary members
//!
//! # Query conventions
//!
//! - Keys are the wire name with an upper-case first letter (`DryRun`)
//! - Nested members are dotted (`Placement.AvailabilityZone`)
//! - Lists are 1-based (`InstanceId.1`, `Filter.2.Value.1`)
//! - Booleans are `true`/`false`; timestamps are ISO 8601 UTC

pub mod blob;
pub mod deserialize;
pub mod error;
pub mod serialize;

pub use blob::Blob;
pub use deserialize::{
    Ec2Deserialize, ErrorDetail, ErrorResponse, from_xml, parse_error_response, read_members,
    read_request_id, read_text_content, read_value, skip_element,
};
pub use error::XmlError;
pub use quick_xml::Reader;
pub use serialize::{QueryParams, QuerySerialize, member_key};
