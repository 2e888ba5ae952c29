//! Error types for the query/XML layer.

/// Errors raised while parsing EC2 XML documents.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// A required XML element was missing.
    #[error("missing required XML element: {0}")]
    MissingElement(String),

    /// The document ended or nested in a way the reader did not expect.
    #[error("unexpected XML content: {0}")]
    UnexpectedElement(String),

    /// Text content could not be parsed into the member's type.
    #[error("failed to parse value: {0}")]
    ParseError(String),
}
