//! Codec trait and implementations for turning values into bytes and back.
//!
//! A "codec" (coder/decoder) converts between Rust types and raw bytes.
//! The attachment codec ([`Attachment::decode`], [`Attachment::encode`])
//! works on keyed objects and never touches bytes itself; this module is the
//! byte-level layer under it.
//! Swapping [`JsonCodec`] for another format changes nothing above it.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{Attachment, EncodableAttachment, ProtocolError};

/// A codec that can encode Rust types to bytes and decode bytes back.
///
/// `Send + Sync + 'static` lets one codec be shared freely between threads;
/// codecs hold no per-call state.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// Returns `ProtocolError::Encode` if serialization fails.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError>;

    /// Deserializes bytes back into a value.
    ///
    /// # Errors
    /// Returns `ProtocolError::Decode` if the bytes are malformed,
    /// incomplete, or don't match the expected type.
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError>;

    /// Decodes an attachment from bytes.
    ///
    /// The bytes are first decoded into a generic keyed object, then handed
    /// to [`Attachment::decode`] for discriminator dispatch.
    ///
    /// # Errors
    /// - `ProtocolError::Decode` for bytes that are not valid in this format.
    /// - `ProtocolError::InvalidMessage` if the top level is not an object.
    /// - `ProtocolError::Attachment` if the attachment codec rejects it.
    fn decode_attachment(&self, data: &[u8]) -> Result<Attachment, ProtocolError> {
        match self.decode::<Value>(data)? {
            Value::Object(object) => Ok(Attachment::decode(&object)?),
            other => Err(ProtocolError::InvalidMessage(format!(
                "attachment must be an object, got {other}"
            ))),
        }
    }

    /// Encodes an attachment to bytes.
    ///
    /// # Errors
    /// `ProtocolError::Attachment` wrapping
    /// [`UnsupportedEncoding`](crate::AttachmentError::UnsupportedEncoding)
    /// for card attachments and card-tagged media.
    fn encode_attachment(&self, attachment: &Attachment) -> Result<Vec<u8>, ProtocolError> {
        let object = attachment.encode()?;
        self.encode(&object)
    }

    /// Encodes an attachment that is known to have a wire form.
    fn encode_media_attachment(
        &self,
        attachment: &EncodableAttachment,
    ) -> Result<Vec<u8>, ProtocolError> {
        self.encode(&attachment.encode())
    }
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] that uses JSON (via `serde_json`).
///
/// ## Example
///
/// ```rust
/// use botwire_protocol::{Codec, JsonCodec, Content};
///
/// let codec = JsonCodec;
/// let bytes = br#"{"contentType":"image/png","contentUrl":"https://x/y.png"}"#;
///
/// let attachment = codec.decode_attachment(bytes).unwrap();
/// assert!(matches!(attachment.content(), Content::Media(_)));
///
/// let encoded = codec.encode_attachment(&attachment).unwrap();
/// let again = codec.decode_attachment(&encoded).unwrap();
/// assert_eq!(attachment, again);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError> {
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }
}
