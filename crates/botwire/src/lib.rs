//! # Botwire
//!
//! Message attachments for bot messaging payloads: either a media link or
//! an Adaptive Card, with an optional name and thumbnail.
//!
//! ## Quick Start
//!
//! ```rust
//! use botwire::prelude::*;
//!
//! let media = Media::new("image/png", Url::parse("https://x/y.png")?);
//! let outgoing = EncodableAttachment::new(media)?.with_name("diagram");
//! let bytes = JsonCodec.encode_media_attachment(&outgoing)?;
//!
//! let incoming = JsonCodec.decode_attachment(&bytes)?;
//! assert_eq!(incoming.name(), Some("diagram"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;

pub use botwire_protocol as protocol;
pub use error::BotwireError;

/// The types most callers need.
pub mod prelude {
    pub use crate::BotwireError;
    pub use botwire_protocol::{
        AdaptiveCard, Attachment, AttachmentError, Codec, Content, EncodableAttachment,
        JsonCodec, Media, PayloadKind, ProtocolError, UriReference, Url,
    };
}
