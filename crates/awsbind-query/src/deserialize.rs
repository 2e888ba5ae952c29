//! EC2 XML deserialization: parsing response documents into Rust types.
//!
//! EC2 responses look like
//!
//! ```xml
//! <DescribeVolumesResponse xmlns="http://ec2.amazonaws.com/doc/2014-10-01/">
//!     <requestId>59dbff89-35bd-4eac-99ed-be587EXAMPLE</requestId>
//!     <volumeSet>
//!         <item><volumeId>vol-1a2b3c4d</volumeId></item>
//!     </volumeSet>
//! </DescribeVolumesResponse>
//! ```
//!
//! [`from_xml`] consumes the root element and hands the reader to the
//! target type, which walks its members with [`read_members`]. Unknown
//! members (including `requestId`) are skipped. Lists are wrapper elements
//! whose every child is one item, whatever the child is called.

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::trace;

use crate::{blob::Blob, error::XmlError};

/// Trait for deserializing EC2 types from XML.
///
/// The opening tag of the element has already been consumed by the caller;
/// the implementation reads everything up to and including the matching end
/// tag.
pub trait Ec2Deserialize: Sized {
    /// Deserialize an instance from the given XML reader.
    ///
    /// # Errors
    ///
    /// Returns `XmlError` if the XML is malformed or a value fails to parse.
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError>;
}

/// Deserialize an EC2 response document into a typed value.
///
/// Empty elements (`<groupSet/>`) are expanded so that every member has a
/// start and an end event. Text is not trimmed, so whitespace around entity
/// references survives; whitespace-only text between elements is ignored.
///
/// # Errors
///
/// Returns `XmlError` if the document has no root element or a member fails
/// to parse.
pub fn from_xml<T: Ec2Deserialize>(xml: &[u8]) -> Result<T, XmlError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().expand_empty_elements = true;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                trace!(root = %String::from_utf8_lossy(e.local_name().as_ref()), "Parsing document");
                return T::deserialize_xml(&mut reader);
            }
            Event::Eof => {
                return Err(XmlError::MissingElement("root element".to_string()));
            }
            _ => {}
        }
    }
}

/// Walk the child elements of the current element.
///
/// `on_member` is called with the local name of each child, positioned just
/// after its start tag, and must consume the child through its end tag
/// (typically with [`read_value`] or [`skip_element`]). Returns once the end
/// tag of the current element is consumed.
///
/// # Errors
///
/// Returns `XmlError` on malformed XML, early EOF, or an error from
/// `on_member`.
pub fn read_members<F>(reader: &mut Reader<&[u8]>, mut on_member: F) -> Result<(), XmlError>
where
    F: FnMut(&mut Reader<&[u8]>, &str) -> Result<(), XmlError>,
{
    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let local = e.local_name();
                let name = std::str::from_utf8(local.as_ref())
                    .map_err(|err| XmlError::ParseError(err.to_string()))?
                    .to_owned();
                on_member(reader, &name)?;
            }
            Event::End(_) => return Ok(()),
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF while reading members".to_string(),
                ));
            }
            _ => {}
        }
    }
}

/// Deserialize the current element as `T`.
///
/// # Errors
///
/// Propagates the error of `T`'s implementation.
pub fn read_value<T: Ec2Deserialize>(reader: &mut Reader<&[u8]>) -> Result<T, XmlError> {
    T::deserialize_xml(reader)
}

/// Read the text content of the current element and consume its end tag.
///
/// Entity and character references are resolved. Any nested elements are
/// skipped.
///
/// # Errors
///
/// Returns `XmlError` on malformed XML, an unknown entity, or early EOF.
pub fn read_text_content(reader: &mut Reader<&[u8]>) -> Result<String, XmlError> {
    let mut text = String::new();
    loop {
        match reader.read_event()? {
            Event::Text(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                let unescaped = quick_xml::escape::unescape(&decoded)
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(&unescaped);
            }
            Event::CData(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(&decoded);
            }
            Event::GeneralRef(e) => {
                if let Some(ch) = e
                    .resolve_char_ref()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?
                {
                    text.push(ch);
                } else {
                    let name = e
                        .decode()
                        .map_err(|err| XmlError::ParseError(err.to_string()))?;
                    let resolved = quick_xml::escape::resolve_predefined_entity(&name)
                        .ok_or_else(|| XmlError::ParseError(format!("unknown entity &{name};")))?;
                    text.push_str(resolved);
                }
            }
            Event::Start(_) => skip_element(reader)?,
            Event::End(_) => return Ok(text),
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF while reading text content".to_string(),
                ));
            }
            _ => {}
        }
    }
}

/// Skip over the current element and all its children.
///
/// # Errors
///
/// Returns `XmlError` on malformed XML or early EOF.
pub fn skip_element(reader: &mut Reader<&[u8]>) -> Result<(), XmlError> {
    let mut depth: u32 = 1;
    loop {
        match reader.read_event()? {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF while skipping element".to_string(),
                ));
            }
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Scalar and list implementations
// ---------------------------------------------------------------------------

impl Ec2Deserialize for String {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        read_text_content(reader)
    }
}

impl Ec2Deserialize for bool {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let text = read_text_content(reader)?;
        match text.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(XmlError::ParseError(format!("invalid boolean: {text}"))),
        }
    }
}

macro_rules! parsed_ec2_deserialize {
    ($($ty:ty),*) => {
        $(
            impl Ec2Deserialize for $ty {
                fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
                    let text = read_text_content(reader)?;
                    text.trim().parse::<$ty>().map_err(|e| {
                        XmlError::ParseError(format!(
                            "invalid {} '{text}': {e}",
                            stringify!($ty)
                        ))
                    })
                }
            }
        )*
    };
}

parsed_ec2_deserialize!(i32, i64, f32, f64);

impl Ec2Deserialize for chrono::DateTime<chrono::Utc> {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let text = read_text_content(reader)?;
        let text = text.trim();
        chrono::DateTime::parse_from_rfc3339(text)
            .map(|dt| dt.with_timezone(&chrono::Utc))
            .or_else(|_| {
                chrono::NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.fZ")
                    .map(|ndt| ndt.and_utc())
            })
            .map_err(|e| XmlError::ParseError(format!("invalid timestamp '{text}': {e}")))
    }
}

impl Ec2Deserialize for Blob {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let text = read_text_content(reader)?;
        Blob::from_base64(&text)
            .map_err(|e| XmlError::ParseError(format!("invalid base64 content: {e}")))
    }
}

impl<T: Ec2Deserialize> Ec2Deserialize for Vec<T> {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut items = Vec::new();
        read_members(reader, |reader, _| {
            items.push(T::deserialize_xml(reader)?);
            Ok(())
        })?;
        Ok(items)
    }
}

// ---------------------------------------------------------------------------
// Error envelope and response metadata
// ---------------------------------------------------------------------------

/// One `<Error>` entry of an EC2 error response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorDetail {
    /// Error code, e.g. `InvalidInstanceID.NotFound`.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

/// Decoded EC2 error document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Errors in document order; EC2 normally sends exactly one.
    pub errors: Vec<ErrorDetail>,
    /// Request ID assigned by the service.
    pub request_id: Option<String>,
}

impl ErrorResponse {
    /// The first error, which is what callers report.
    #[must_use]
    pub fn first(&self) -> Option<&ErrorDetail> {
        self.errors.first()
    }
}

impl Ec2Deserialize for ErrorDetail {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "Code" => out.code = read_text_content(reader)?,
                "Message" => out.message = read_text_content(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

impl Ec2Deserialize for ErrorResponse {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_members(reader, |reader, name| {
            match name {
                "Errors" => out.errors.extend(read_value::<Vec<ErrorDetail>>(reader)?),
                "Error" => out.errors.push(read_value(reader)?),
                "RequestID" | "RequestId" | "requestId" => {
                    out.request_id = Some(read_text_content(reader)?);
                }
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

/// Parse an EC2 error document.
///
/// Accepts the EC2 `<Response><Errors><Error>` envelope as well as the
/// generic query-protocol `<ErrorResponse><Error>` form.
///
/// # Errors
///
/// Returns `XmlError` if the body is not XML or holds no `<Error>`.
pub fn parse_error_response(xml: &[u8]) -> Result<ErrorResponse, XmlError> {
    let response: ErrorResponse = from_xml(xml)?;
    if response.errors.is_empty() {
        return Err(XmlError::MissingElement("Error".to_string()));
    }
    Ok(response)
}

struct ResponseMetadata {
    request_id: Option<String>,
}

impl Ec2Deserialize for ResponseMetadata {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut request_id = None;
        read_members(reader, |reader, name| {
            if name == "requestId" {
                request_id = Some(read_text_content(reader)?);
            } else {
                skip_element(reader)?;
            }
            Ok(())
        })?;
        Ok(Self { request_id })
    }
}

/// Extract `<requestId>` from a success document, if present.
#[must_use]
pub fn read_request_id(xml: &[u8]) -> Option<String> {
    from_xml::<ResponseMetadata>(xml)
        .ok()
        .and_then(|meta| meta.request_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Volume {
        volume_id: Option<String>,
        size: Option<i32>,
        encrypted: Option<bool>,
        create_time: Option<chrono::DateTime<chrono::Utc>>,
        tags: Vec<(String, String)>,
    }

    struct TagPair(String, String);

    impl Ec2Deserialize for TagPair {
        fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
            let mut pair = TagPair(String::new(), String::new());
            read_members(reader, |reader, name| {
                match name {
                    "key" => pair.0 = read_value(reader)?,
                    "value" => pair.1 = read_value(reader)?,
                    _ => skip_element(reader)?,
                }
                Ok(())
            })?;
            Ok(pair)
        }
    }

    impl Ec2Deserialize for Volume {
        fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
            let mut out = Self::default();
            read_members(reader, |reader, name| {
                match name {
                    "volumeId" => out.volume_id = Some(read_value(reader)?),
                    "size" => out.size = Some(read_value(reader)?),
                    "encrypted" => out.encrypted = Some(read_value(reader)?),
                    "createTime" => out.create_time = Some(read_value(reader)?),
                    "tagSet" => {
                        out.tags = read_value::<Vec<TagPair>>(reader)?
                            .into_iter()
                            .map(|TagPair(k, v)| (k, v))
                            .collect();
                    }
                    _ => skip_element(reader)?,
                }
                Ok(())
            })?;
            Ok(out)
        }
    }

    #[derive(Debug, Default)]
    struct DescribeVolumes {
        volumes: Vec<Volume>,
    }

    impl Ec2Deserialize for DescribeVolumes {
        fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
            let mut out = Self::default();
            read_members(reader, |reader, name| {
                match name {
                    "volumeSet" => out.volumes = read_value(reader)?,
                    _ => skip_element(reader)?,
                }
                Ok(())
            })?;
            Ok(out)
        }
    }

    const DESCRIBE_VOLUMES: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<DescribeVolumesResponse xmlns="http://ec2.amazonaws.com/doc/2014-10-01/">
   <requestId>59dbff89-35bd-4eac-99ed-be587EXAMPLE</requestId>
   <volumeSet>
      <item>
         <volumeId>vol-1a2b3c4d</volumeId>
         <size>80</size>
         <encrypted>false</encrypted>
         <createTime>2014-10-21T21:45:26.000Z</createTime>
         <attachmentSet>
            <item><instanceId>i-1a2b3c4d</instanceId></item>
         </attachmentSet>
         <tagSet>
            <item><key>Name</key><value>db &amp; logs</value></item>
         </tagSet>
      </item>
      <item>
         <volumeId>vol-2</volumeId>
         <tagSet/>
      </item>
   </volumeSet>
</DescribeVolumesResponse>"#;

    #[test]
    fn test_should_deserialize_describe_volumes() {
        let result: DescribeVolumes = from_xml(DESCRIBE_VOLUMES).unwrap();
        assert_eq!(result.volumes.len(), 2);
        let first = &result.volumes[0];
        assert_eq!(first.volume_id.as_deref(), Some("vol-1a2b3c4d"));
        assert_eq!(first.size, Some(80));
        assert_eq!(first.encrypted, Some(false));
        assert_eq!(
            first.create_time.unwrap().to_rfc3339(),
            "2014-10-21T21:45:26+00:00"
        );
        assert_eq!(first.tags, vec![("Name".to_owned(), "db & logs".to_owned())]);
        assert_eq!(result.volumes[1].volume_id.as_deref(), Some("vol-2"));
        assert!(result.volumes[1].tags.is_empty());
    }

    #[test]
    fn test_should_read_request_id() {
        assert_eq!(
            read_request_id(DESCRIBE_VOLUMES).as_deref(),
            Some("59dbff89-35bd-4eac-99ed-be587EXAMPLE")
        );
        assert_eq!(read_request_id(b"not xml at all"), None);
    }

    #[test]
    fn test_should_reject_invalid_scalar() {
        let xml = b"<R><volumeSet><item><size>big</size></item></volumeSet></R>";
        let result = from_xml::<DescribeVolumes>(xml);
        assert!(matches!(result, Err(XmlError::ParseError(_))));
    }

    #[test]
    fn test_should_resolve_character_references() {
        let xml = b"<R><volumeSet><item><volumeId>a&#38;b&lt;c</volumeId></item></volumeSet></R>";
        let result: DescribeVolumes = from_xml(xml).unwrap();
        assert_eq!(result.volumes[0].volume_id.as_deref(), Some("a&b<c"));
    }

    #[test]
    fn test_should_parse_ec2_error_response() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
<Response><Errors><Error><Code>InvalidInstanceID.NotFound</Code><Message>The instance ID 'i-1' does not exist</Message></Error></Errors><RequestID>ea966190-f9aa-478e-9ede-example</RequestID></Response>"#;
        let response = parse_error_response(xml).unwrap();
        let first = response.first().unwrap();
        assert_eq!(first.code, "InvalidInstanceID.NotFound");
        assert_eq!(first.message, "The instance ID 'i-1' does not exist");
        assert_eq!(
            response.request_id.as_deref(),
            Some("ea966190-f9aa-478e-9ede-example")
        );
    }

    #[test]
    fn test_should_parse_query_style_error_response() {
        let xml = b"<ErrorResponse><Error><Type>Sender</Type><Code>Throttling</Code>\
                    <Message>Rate exceeded</Message></Error><RequestId>r-1</RequestId></ErrorResponse>";
        let response = parse_error_response(xml).unwrap();
        assert_eq!(response.first().unwrap().code, "Throttling");
        assert_eq!(response.request_id.as_deref(), Some("r-1"));
    }

    #[test]
    fn test_should_reject_error_document_without_errors() {
        assert!(matches!(
            parse_error_response(b"<Response><RequestID>x</RequestID></Response>"),
            Err(XmlError::MissingElement(_))
        ));
        assert!(parse_error_response(b"").is_err());
    }
}
