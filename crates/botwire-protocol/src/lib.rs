//! Wire protocol for Botwire message attachments.
//!
//! - **Attachment** ([`Attachment`], [`Content`], [`EncodableAttachment`]) —
//!   a media reference or a card, plus an optional name and thumbnail.
//! - **Payloads** ([`Media`], [`AdaptiveCard`]) — the two content shapes.
//! - **Links** ([`UriReference`]) — `contentUrl` and `thumbnailUrl`, kept
//!   verbatim.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — bytes to keyed objects
//!   and back.
//! - **Errors** ([`AttachmentError`], [`ProtocolError`]).
//!
//! # Architecture
//!
//! ```text
//! bytes ──Codec──▶ WireObject ──Attachment::decode──▶ Attachment
//!                                  │ contentType
//!                                  ├─ card id ──▶ AdaptiveCard (nested `content`)
//!                                  └─ other   ──▶ Media (top-level fields)
//! ```
//!
//! Cards are decode-only. Encoding an attachment that holds a card fails
//! with [`AttachmentError::UnsupportedEncoding`].

mod attachment;
mod card;
mod codec;
mod error;
mod fields;
mod media;
mod uri;

pub use attachment::{Attachment, Content, EncodableAttachment};
pub use card::AdaptiveCard;
pub use codec::{Codec, JsonCodec};
pub use error::{AttachmentError, PayloadKind, ProtocolError, UNSUPPORTED_ENCODING_MESSAGE};
pub use fields::WireObject;
pub use media::Media;
pub use uri::UriReference;

// Re-exported so callers can resolve links without depending on `url`.
pub use url::Url;
