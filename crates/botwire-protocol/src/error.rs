//! Error types for the protocol layer.
//!
//! Two levels of failure live here. [`AttachmentError`] describes what went
//! wrong while turning a keyed wire object into an [`Attachment`] (or back),
//! and always names the wire field responsible. [`ProtocolError`] sits one
//! level lower: it covers the byte-level codec, and wraps attachment errors
//! so callers that start from raw bytes deal with a single type.
//!
//! [`Attachment`]: crate::Attachment

use std::fmt;

/// Human-readable message carried by [`AttachmentError::UnsupportedEncoding`].
pub const UNSUPPORTED_ENCODING_MESSAGE: &str =
    "encoding for this content is not supported";

/// Which payload decoder produced a nested failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    /// The structured card payload, nested under `content`.
    AdaptiveCard,
    /// The media payload, flattened into the attachment object.
    Media,
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AdaptiveCard => write!(f, "adaptive card"),
            Self::Media => write!(f, "media"),
        }
    }
}

/// Errors produced while decoding or encoding an attachment.
///
/// Every variant carries the wire field it is attributed to, available
/// uniformly through [`AttachmentError::field`].
#[derive(Debug, thiserror::Error)]
pub enum AttachmentError {
    /// A field was absent or had the wrong type.
    ///
    /// Covers the `contentType` discriminator, the flattened media fields,
    /// and optional fields that are present but malformed.
    #[error("missing or invalid field `{field}`: {reason}")]
    MissingOrInvalidField {
        field: &'static str,
        reason: String,
    },

    /// A delegate payload decoder rejected its portion of the object.
    #[error("failed to decode {kind} payload at `{field}`: {source}")]
    NestedDecodeFailure {
        kind: PayloadKind,
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The attachment holds content that has no wire representation.
    #[error("cannot encode `{field}`: {message}")]
    UnsupportedEncoding {
        field: &'static str,
        message: &'static str,
    },
}

impl AttachmentError {
    /// The wire field this error is attributed to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingOrInvalidField { field, .. }
            | Self::NestedDecodeFailure { field, .. }
            | Self::UnsupportedEncoding { field, .. } => field,
        }
    }

    pub(crate) fn missing(field: &'static str) -> Self {
        Self::MissingOrInvalidField {
            field,
            reason: "field is missing".to_string(),
        }
    }

    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::MissingOrInvalidField {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn unsupported_encoding(field: &'static str) -> Self {
        Self::UnsupportedEncoding {
            field,
            message: UNSUPPORTED_ENCODING_MESSAGE,
        }
    }
}

/// Errors that can occur in the protocol layer.
///
/// `#[derive(thiserror::Error)]` generates the `std::error::Error` impl;
/// each `#[error("...")]` is the message shown when the error is printed
/// or logged.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed (turning a Rust value into bytes).
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed (malformed or truncated bytes).
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// The bytes parsed, but not into the shape the protocol expects.
    ///
    /// An attachment must arrive as a keyed object; a bare string or
    /// array lands here.
    #[error("invalid message: {0}")]
    InvalidMessage(String),

    /// The keyed object was well-formed but the attachment codec rejected it.
    #[error(transparent)]
    Attachment(#[from] AttachmentError),
}
