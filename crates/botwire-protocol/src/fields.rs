//! Typed reads from a keyed wire object.
//!
//! Attachments arrive as a flat JSON object whose keys are shared between
//! the attachment itself and the media payload. These helpers pull single
//! fields out of that object and turn type mismatches into
//! [`AttachmentError::MissingOrInvalidField`] with the field name attached.

use serde_json::{Map, Value};

use crate::{AttachmentError, UriReference};

/// A decoded-but-untyped wire object: string keys to JSON values.
pub type WireObject = Map<String, Value>;

// Wire keys. Note `thumbnailUrl` is the wire spelling of `thumbnail_url`.
pub(crate) const CONTENT_TYPE: &str = "contentType";
pub(crate) const CONTENT: &str = "content";
pub(crate) const CONTENT_URL: &str = "contentUrl";
pub(crate) const NAME: &str = "name";
pub(crate) const THUMBNAIL_URL: &str = "thumbnailUrl";

pub(crate) fn required_str<'a>(
    object: &'a WireObject,
    field: &'static str,
) -> Result<&'a str, AttachmentError> {
    match object.get(field) {
        Some(Value::String(value)) => Ok(value),
        Some(other) => Err(expected_string(field, other)),
        None => Err(AttachmentError::missing(field)),
    }
}

/// Absent and `null` both read as `None`.
pub(crate) fn optional_str<'a>(
    object: &'a WireObject,
    field: &'static str,
) -> Result<Option<&'a str>, AttachmentError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(other) => Err(expected_string(field, other)),
    }
}

/// The reference is kept verbatim; only its JSON type is checked.
pub(crate) fn required_uri(
    object: &WireObject,
    field: &'static str,
) -> Result<UriReference, AttachmentError> {
    required_str(object, field).map(UriReference::from)
}

pub(crate) fn optional_uri(
    object: &WireObject,
    field: &'static str,
) -> Result<Option<UriReference>, AttachmentError> {
    Ok(optional_str(object, field)?.map(UriReference::from))
}

fn expected_string(field: &'static str, found: &Value) -> AttachmentError {
    AttachmentError::invalid(
        field,
        format!("expected a string, found {}", describe(found)),
    )
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
