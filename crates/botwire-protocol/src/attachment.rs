//! The attachment value and its discriminator-driven codec.
//!
//! An attachment carries exactly one payload, picked by the `contentType`
//! discriminator on the wire:
//!
//! ```text
//! contentType == AdaptiveCard::CONTENT_TYPE
//!     → card, decoded from the nested `content` object
//! anything else (image/png, video/mp4, an unknown tag, ...)
//!     → media, decoded from the top-level object itself
//! ```
//!
//! Unknown discriminators deliberately fall through to media rather than
//! failing, so newer senders keep working against older receivers.
//!
//! Encoding only goes one way for cards: they are consumed, never produced.
//! The same holds for media whose `contentType` is a card discriminator,
//! since the receiver would dispatch it to the card decoder.
//! [`EncodableAttachment`] checks this once at construction; the general
//! [`Attachment::encode`] checks it on every call. Both fail with
//! [`AttachmentError::UnsupportedEncoding`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::fields::{self, WireObject};
use crate::{AdaptiveCard, AttachmentError, Media, PayloadKind, UriReference};

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

/// The payload carried by an attachment. Exactly one variant is present.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    AdaptiveCard(AdaptiveCard),
    Media(Media),
}

impl Content {
    /// Which payload variant this is.
    pub fn kind(&self) -> PayloadKind {
        match self {
            Self::AdaptiveCard(_) => PayloadKind::AdaptiveCard,
            Self::Media(_) => PayloadKind::Media,
        }
    }

    /// The discriminator this content carries on the wire.
    pub fn content_type(&self) -> &str {
        match self {
            Self::AdaptiveCard(_) => AdaptiveCard::CONTENT_TYPE,
            Self::Media(media) => &media.content_type,
        }
    }
}

impl From<AdaptiveCard> for Content {
    fn from(card: AdaptiveCard) -> Self {
        Self::AdaptiveCard(card)
    }
}

impl From<Media> for Content {
    fn from(media: Media) -> Self {
        Self::Media(media)
    }
}

// ---------------------------------------------------------------------------
// Decoder lookup
// ---------------------------------------------------------------------------

type DecodeFn = fn(&WireObject) -> Result<Content, AttachmentError>;

/// Discriminators with a dedicated decoder. Everything else is media.
const DECODERS: &[(&str, DecodeFn)] = &[(AdaptiveCard::CONTENT_TYPE, decode_adaptive_card)];

fn decoder_for(content_type: &str) -> DecodeFn {
    match DECODERS.iter().find(|(tag, _)| *tag == content_type) {
        Some((_, decode)) => *decode,
        None => decode_media,
    }
}

fn has_dedicated_decoder(content_type: &str) -> bool {
    DECODERS.iter().any(|(tag, _)| *tag == content_type)
}

/// Media is encodable unless its type would be read back by another decoder.
fn check_encodable(media: &Media) -> Result<(), AttachmentError> {
    if has_dedicated_decoder(&media.content_type) {
        return Err(AttachmentError::unsupported_encoding(fields::CONTENT));
    }
    Ok(())
}

fn decode_adaptive_card(object: &WireObject) -> Result<Content, AttachmentError> {
    let card = match object.get(fields::CONTENT) {
        Some(nested) => AdaptiveCard::decode(nested),
        None => Err(<serde_json::Error as serde::de::Error>::missing_field(
            fields::CONTENT,
        )),
    }
    .map_err(|source| AttachmentError::NestedDecodeFailure {
        kind: PayloadKind::AdaptiveCard,
        field: fields::CONTENT,
        source,
    })?;

    Ok(Content::AdaptiveCard(card))
}

fn decode_media(object: &WireObject) -> Result<Content, AttachmentError> {
    Media::decode(object).map(Content::Media)
}

/// Writes the attachment's own optional fields. Absent values are omitted.
fn write_metadata(
    object: &mut WireObject,
    name: Option<&str>,
    thumbnail_url: Option<&UriReference>,
) {
    if let Some(name) = name {
        object.insert(fields::NAME.to_string(), Value::String(name.to_string()));
    }
    if let Some(url) = thumbnail_url {
        object.insert(
            fields::THUMBNAIL_URL.to_string(),
            Value::String(url.as_str().to_string()),
        );
    }
}

// ---------------------------------------------------------------------------
// Attachment
// ---------------------------------------------------------------------------

/// Additional content included in a message: a media file or a card.
///
/// Attachments are immutable. The `with_*` methods consume the value and
/// return a new one.
///
/// ## Example
///
/// ```rust
/// use botwire_protocol::{Attachment, Content};
/// use serde_json::json;
///
/// let wire = json!({
///     "contentType": "image/png",
///     "contentUrl": "https://x/y.png",
///     "name": "diagram",
/// });
/// let attachment = Attachment::decode(wire.as_object().unwrap()).unwrap();
///
/// assert!(matches!(attachment.content(), Content::Media(_)));
/// assert_eq!(attachment.name(), Some("diagram"));
///
/// let encoded = attachment.encode().unwrap();
/// assert_eq!(serde_json::Value::Object(encoded), wire);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    content: Content,
    name: Option<String>,
    thumbnail_url: Option<UriReference>,
}

impl Attachment {
    /// Creates an attachment with no name and no thumbnail.
    pub fn new(content: impl Into<Content>) -> Self {
        Self {
            content: content.into(),
            name: None,
            thumbnail_url: None,
        }
    }

    /// Creates a media attachment.
    pub fn media(media: Media) -> Self {
        Self::new(media)
    }

    /// Creates a card attachment. Such attachments can be decoded and
    /// inspected but not encoded.
    pub fn adaptive_card(card: AdaptiveCard) -> Self {
        Self::new(card)
    }

    /// Returns this attachment with `name` set.
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }

    /// Returns this attachment with `thumbnail_url` set.
    pub fn with_thumbnail_url(self, thumbnail_url: impl Into<UriReference>) -> Self {
        Self {
            thumbnail_url: Some(thumbnail_url.into()),
            ..self
        }
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// URL of a smaller preview of the content, exactly as received.
    pub fn thumbnail_url(&self) -> Option<&UriReference> {
        self.thumbnail_url.as_ref()
    }

    pub fn into_content(self) -> Content {
        self.content
    }

    /// Decodes an attachment from a keyed wire object.
    ///
    /// # Errors
    /// - [`AttachmentError::MissingOrInvalidField`] when `contentType` is
    ///   absent or not a string, when a media field is missing, or when
    ///   `name` / `thumbnailUrl` are present with the wrong type. URL text
    ///   is kept as-is, relative references included.
    /// - [`AttachmentError::NestedDecodeFailure`] when the discriminator
    ///   selects a card and `content` is missing or malformed.
    pub fn decode(object: &WireObject) -> Result<Self, AttachmentError> {
        let content_type = fields::required_str(object, fields::CONTENT_TYPE)?;
        let content = decoder_for(content_type)(object)?;
        tracing::trace!(content_type, kind = %content.kind(), "decoded attachment payload");

        let name = fields::optional_str(object, fields::NAME)?.map(str::to_string);
        let thumbnail_url = fields::optional_uri(object, fields::THUMBNAIL_URL)?;

        Ok(Self {
            content,
            name,
            thumbnail_url,
        })
    }

    /// Encodes this attachment into a keyed wire object.
    ///
    /// # Errors
    /// Returns [`AttachmentError::UnsupportedEncoding`] attributed to
    /// `content` when the attachment carries a card, or media tagged with a
    /// card discriminator.
    pub fn encode(&self) -> Result<WireObject, AttachmentError> {
        let media = self.encodable_media()?;
        let mut object = WireObject::new();
        media.encode_into(&mut object);
        write_metadata(&mut object, self.name(), self.thumbnail_url());
        Ok(object)
    }

    fn encodable_media(&self) -> Result<&Media, AttachmentError> {
        match &self.content {
            Content::Media(media) => {
                check_encodable(media)?;
                Ok(media)
            }
            Content::AdaptiveCard(_) => Err(AttachmentError::unsupported_encoding(fields::CONTENT)),
        }
    }
}

impl From<EncodableAttachment> for Attachment {
    fn from(value: EncodableAttachment) -> Self {
        Self {
            content: Content::Media(value.media),
            name: value.name,
            thumbnail_url: value.thumbnail_url,
        }
    }
}

// Serde integration, so attachments can sit inside larger message types.
// The typed error is rendered into the format's own error type.

impl Serialize for Attachment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.encode()
            .map_err(<S::Error as serde::ser::Error>::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Attachment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let object = WireObject::deserialize(deserializer)?;
        Self::decode(&object).map_err(<D::Error as serde::de::Error>::custom)
    }
}

// ---------------------------------------------------------------------------
// EncodableAttachment
// ---------------------------------------------------------------------------

/// An attachment that is guaranteed to have a wire form.
///
/// Only media can be encoded, so this type holds a [`Media`] directly.
/// Construction rejects media tagged with a card discriminator, which makes
/// [`encode`](Self::encode) infallible and its output always decodable.
/// Producers building outgoing messages should prefer it over [`Attachment`].
#[derive(Debug, Clone, PartialEq)]
pub struct EncodableAttachment {
    media: Media,
    name: Option<String>,
    thumbnail_url: Option<UriReference>,
}

impl EncodableAttachment {
    /// # Errors
    /// [`AttachmentError::UnsupportedEncoding`] on `content` when
    /// `media.content_type` is claimed by a dedicated decoder.
    pub fn new(media: Media) -> Result<Self, AttachmentError> {
        check_encodable(&media)?;
        Ok(Self {
            media,
            name: None,
            thumbnail_url: None,
        })
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }

    pub fn with_thumbnail_url(self, thumbnail_url: impl Into<UriReference>) -> Self {
        Self {
            thumbnail_url: Some(thumbnail_url.into()),
            ..self
        }
    }

    pub fn media(&self) -> &Media {
        &self.media
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn thumbnail_url(&self) -> Option<&UriReference> {
        self.thumbnail_url.as_ref()
    }

    /// Encodes into the same flattened object [`Attachment::decode`] reads.
    pub fn encode(&self) -> WireObject {
        let mut object = WireObject::new();
        self.media.encode_into(&mut object);
        write_metadata(&mut object, self.name(), self.thumbnail_url());
        object
    }
}

impl TryFrom<Media> for EncodableAttachment {
    type Error = AttachmentError;

    fn try_from(media: Media) -> Result<Self, Self::Error> {
        Self::new(media)
    }
}

impl TryFrom<Attachment> for EncodableAttachment {
    type Error = AttachmentError;

    /// Fails with [`AttachmentError::UnsupportedEncoding`] for cards and
    /// card-tagged media.
    fn try_from(value: Attachment) -> Result<Self, Self::Error> {
        match value.content {
            Content::Media(media) => {
                check_encodable(&media)?;
                Ok(Self {
                    media,
                    name: value.name,
                    thumbnail_url: value.thumbnail_url,
                })
            }
            Content::AdaptiveCard(_) => Err(AttachmentError::unsupported_encoding(fields::CONTENT)),
        }
    }
}

impl Serialize for EncodableAttachment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.encode().serialize(serializer)
    }
}

// =========================================================================
// Tests
// =========================================================================
