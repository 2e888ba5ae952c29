//! Amazon Chime model types.
//!
//! Chime speaks REST-JSON, so every shape is a plain serde struct with
//! PascalCase member names. Inputs carry their URI labels and query
//! parameters as ordinary fields; those are skipped when the body is written.
#![allow(clippy::struct_excessive_bools)]
#![allow(missing_docs)]

pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use error::ChimeErrorCode;
pub use operations::ChimeOperation;
