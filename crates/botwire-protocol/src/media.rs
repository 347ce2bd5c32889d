//! The media payload: a link to an image, audio clip, video or file.
//!
//! Media has a *flattened* schema. Its fields sit in the same object as the
//! attachment's own `name` and `thumbnailUrl`, and its `contentType` doubles
//! as the attachment discriminator:
//!
//! ```text
//! { "contentType": "image/png", "contentUrl": "https://...", "name": "..." }
//!   ^^^^^^^^^^^^^^^^^^^^^^^^^^^  ^^^^^^^^^^^^^^^^^^^^^^^^^^
//!   media fields, read and written at the top level
//! ```

use serde_json::Value;

use crate::fields::{self, WireObject};
use crate::{AttachmentError, UriReference};

/// A reference to a media resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Media {
    /// MIME type of the resource, e.g. `image/png`.
    pub content_type: String,

    /// Where the resource can be fetched from. May be relative.
    pub content_url: UriReference,
}

impl Media {
    /// Creates a media reference.
    pub fn new(content_type: impl Into<String>, content_url: impl Into<UriReference>) -> Self {
        Self {
            content_type: content_type.into(),
            content_url: content_url.into(),
        }
    }

    /// Reads the media fields from the top level of `object`.
    ///
    /// Keys that are not media fields are ignored, so the whole attachment
    /// object can be passed in as-is.
    ///
    /// # Errors
    /// Returns [`AttachmentError::MissingOrInvalidField`] naming
    /// `contentType` or `contentUrl` when either is absent or not a string.
    /// The URL text itself is not checked.
    pub fn decode(object: &WireObject) -> Result<Self, AttachmentError> {
        let content_type = fields::required_str(object, fields::CONTENT_TYPE)?;
        let content_url = fields::required_uri(object, fields::CONTENT_URL)?;
        Ok(Self::new(content_type, content_url))
    }

    /// Writes the media fields into the top level of `object`.
    pub fn encode_into(&self, object: &mut WireObject) {
        object.insert(
            fields::CONTENT_TYPE.to_string(),
            Value::String(self.content_type.clone()),
        );
        object.insert(
            fields::CONTENT_URL.to_string(),
            Value::String(self.content_url.as_str().to_string()),
        );
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> WireObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_decode_reads_top_level_fields() {
        let obj = object(json!({
            "contentType": "image/png",
            "contentUrl": "https://x/y.png",
            "name": "ignored by media",
        }));
        let media = Media::decode(&obj).unwrap();
        assert_eq!(media.content_type, "image/png");
        assert_eq!(media.content_url.as_str(), "https://x/y.png");
    }

    #[test]
    fn test_decode_missing_url_names_the_field() {
        let obj = object(json!({ "contentType": "image/png" }));
        let err = Media::decode(&obj).unwrap_err();
        assert!(matches!(
            err,
            AttachmentError::MissingOrInvalidField { field: "contentUrl", .. }
        ));
    }

    #[test]
    fn test_decode_does_not_look_inside_content() {
        // The URL nested under `content` is not a media field.
        let obj = object(json!({
            "contentType": "video/mp4",
            "content": { "contentUrl": "https://x/v.mp4" },
        }));
        assert!(Media::decode(&obj).is_err());
    }

    #[test]
    fn test_relative_url_survives_decode_and_encode() {
        let obj = object(json!({
            "contentType": "application/pdf",
            "contentUrl": "files/Report.PDF",
        }));
        let media = Media::decode(&obj).unwrap();
        assert_eq!(media.content_url.as_str(), "files/Report.PDF");

        let mut encoded = WireObject::new();
        media.encode_into(&mut encoded);
        assert_eq!(encoded, obj);
    }

    #[test]
    fn test_encode_writes_flattened_shape() {
        let media = Media::new(
            "audio/ogg",
            url::Url::parse("https://cdn.example.com/a.ogg").unwrap(),
        );
        let mut obj = WireObject::new();
        media.encode_into(&mut obj);

        assert_eq!(
            Value::Object(obj),
            json!({
                "contentType": "audio/ogg",
                "contentUrl": "https://cdn.example.com/a.ogg",
            })
        );
    }
}
