//! URI references as they appear on the wire.
//!
//! `contentUrl` and `thumbnailUrl` may hold absolute URLs or relative
//! references such as `thumbs/a.png`. Whether a reference is usable is the
//! caller's concern, so decoding keeps the exact string and never parses it.
//! [`UriReference::resolve`] and [`UriReference::to_absolute`] turn it into
//! a [`Url`] when a caller needs one.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// A URI reference, stored verbatim.
///
/// `#[serde(transparent)]` makes it a plain string in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UriReference(String);

impl UriReference {
    /// Wraps a reference without checking it.
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// The reference exactly as it was given or received.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Parses the reference as an absolute URL.
    ///
    /// # Errors
    /// Fails for relative references and malformed URLs.
    pub fn to_absolute(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.0)
    }

    /// Resolves the reference against `base`. Absolute references ignore
    /// the base.
    pub fn resolve(&self, base: &Url) -> Result<Url, url::ParseError> {
        base.join(&self.0)
    }
}

impl fmt::Display for UriReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Url> for UriReference {
    fn from(url: Url) -> Self {
        Self(url.into())
    }
}

impl From<String> for UriReference {
    fn from(reference: String) -> Self {
        Self(reference)
    }
}

impl From<&str> for UriReference {
    fn from(reference: &str) -> Self {
        Self(reference.to_string())
    }
}
