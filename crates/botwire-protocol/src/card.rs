//! The Adaptive Card payload.
//!
//! Unlike media, a card lives in its own nested object under the
//! attachment's `content` key. Card elements and actions are carried as
//! opaque JSON; only the envelope fields below are typed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A structured card rendered by the receiving client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptiveCard {
    /// Schema version the card targets, e.g. `"1.5"`.
    pub version: String,

    /// Card elements, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<Value>,

    /// Actions shown at the bottom of the card.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Value>,

    /// Text shown by clients that cannot render the card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_text: Option<String>,

    /// Text to speak on voice-only clients.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speak: Option<String>,

    /// Language tag for the card content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl AdaptiveCard {
    /// The discriminator that marks an attachment as carrying a card.
    pub const CONTENT_TYPE: &'static str = "application/vnd.microsoft.card.adaptive";

    /// Creates an empty card for the given schema version.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            body: Vec::new(),
            actions: Vec::new(),
            fallback_text: None,
            speak: None,
            lang: None,
        }
    }

    /// Decodes a card from its own nested object.
    ///
    /// # Errors
    /// Fails if `value` is not an object or lacks a string `version`.
    pub fn decode(value: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(value)
    }
}
