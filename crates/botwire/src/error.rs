//! Unified error type for Botwire.

use botwire_protocol::{AttachmentError, ProtocolError};

/// Top-level error that wraps the protocol crate's errors.
///
/// `#[from]` generates the `From` impls, so `?` converts either source
/// error automatically. `#[error(transparent)]` keeps the inner message.
#[derive(Debug, thiserror::Error)]
pub enum BotwireError {
    /// A byte-level codec error (malformed bytes, non-object input).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The attachment codec rejected an object or value.
    #[error(transparent)]
    Attachment(#[from] AttachmentError),
}

impl BotwireError {
    /// The attachment error underneath, if any, whichever layer raised it.
    pub fn as_attachment_error(&self) -> Option<&AttachmentError> {
        match self {
            Self::Attachment(err) | Self::Protocol(ProtocolError::Attachment(err)) => Some(err),
            Self::Protocol(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_protocol_error() {
        let err = ProtocolError::InvalidMessage("bad".into());
        let botwire_err: BotwireError = err.into();
        assert!(matches!(botwire_err, BotwireError::Protocol(_)));
        assert!(botwire_err.to_string().contains("bad"));
        assert!(botwire_err.as_attachment_error().is_none());
    }

    #[test]
    fn test_attachment_error_found_through_protocol() {
        let json_err = serde_json::from_str::<botwire_protocol::Attachment>(r#"{"contentType":1}"#)
            .unwrap_err();
        let botwire_err: BotwireError = ProtocolError::Decode(json_err).into();
        assert!(botwire_err.as_attachment_error().is_none());

        let wire = serde_json::json!({ "contentType": 1 });
        let attachment_err =
            botwire_protocol::Attachment::decode(wire.as_object().unwrap()).unwrap_err();
        let botwire_err: BotwireError = ProtocolError::from(attachment_err).into();
        assert_eq!(
            botwire_err.as_attachment_error().map(|e| e.field()),
            Some("contentType")
        );
    }
}
