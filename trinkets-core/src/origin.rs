//! Document origins for scoping cross-document delivery.

use crate::channel::ChannelError;
use std::fmt;
use url::Url;

/// A web origin (scheme, host, port).
///
/// Two origins match only when all three parts are equal. Opaque origins,
/// such as those of `data:` documents, match nothing, not even themselves
/// when parsed twice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Origin(url::Origin);

impl Origin {
    /// Parse an origin or any URL within it, e.g. `https://example.com` or
    /// `https://example.com:443/page`.
    pub fn parse(input: &str) -> Result<Self, ChannelError> {
        let url = Url::parse(input).map_err(|e| ChannelError::InvalidOrigin(format!("{input}: {e}")))?;
        Ok(Self(url.origin()))
    }

    pub fn is_opaque(&self) -> bool {
        !self.0.is_tuple()
    }

    /// Serialized form accepted as a `postMessage` target origin.
    pub fn serialize(&self) -> String {
        self.0.ascii_serialization()
    }

    /// Exact-match check used before any delivery.
    pub fn matches(&self, other: &Origin) -> bool {
        !self.is_opaque() && self == other
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}
