//! Botocore-style JSON model types for deserialization.
//!
//! Only the parts of the format the EC2 query model uses are represented:
//! operations with an input and an optional output, and structure, list, and
//! scalar shapes whose members carry a `locationName`.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Top-level model document.
#[derive(Debug, Deserialize)]
pub struct ServiceModel {
    /// Service metadata.
    pub metadata: Metadata,
    /// Operations keyed by name.
    pub operations: BTreeMap<String, Operation>,
    /// Shapes keyed by name.
    pub shapes: BTreeMap<String, Shape>,
}

/// Service metadata.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// API version sent as the `Version` parameter.
    pub api_version: String,
    /// Protocol name; must be `ec2`.
    pub protocol: String,
    /// Namespace of response documents.
    pub xml_namespace: String,
}

/// A single operation.
#[derive(Debug, Deserialize)]
pub struct Operation {
    /// Action name.
    pub name: String,
    /// Input shape.
    pub input: ShapeRef,
    /// Output shape, absent for actions that only return `<return>`.
    #[serde(default)]
    pub output: Option<ShapeRef>,
}

/// A reference to a shape by name.
#[derive(Debug, Deserialize)]
pub struct ShapeRef {
    /// Target shape name.
    pub shape: String,
}

/// A structure member or list element.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Target shape name.
    pub shape: String,
    /// Wire name of the member (query key or XML element).
    pub location_name: String,
}

/// A single shape.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    /// A structure.
    Structure {
        /// Members keyed by name.
        #[serde(default)]
        members: BTreeMap<String, Member>,
    },
    /// A list of `member`.
    List {
        /// Element shape.
        member: Member,
    },
    /// A UTF-8 string.
    String,
    /// A boolean.
    Boolean,
    /// A 32-bit integer.
    Integer,
    /// A 64-bit integer.
    Long,
    /// A 64-bit float.
    Double,
    /// A 32-bit float.
    Float,
    /// An ISO-8601 timestamp.
    Timestamp,
    /// Base64-encoded bytes.
    Blob,
}
