//! Short code value type.

use std::fmt;

/// Number of random bytes behind every short code.
pub const CODE_LENGTH_BYTES: usize = 3;

/// Length of a short code in characters (two hex digits per byte).
pub const CODE_LENGTH: usize = CODE_LENGTH_BYTES * 2;

/// An opaque, fixed-length, URL-safe identifier for a stored link.
///
/// Codes are lowercase hex strings of [`CODE_LENGTH`] characters. Instances are
/// only produced by the code generator or by [`ShortCode::parse`], so a value of
/// this type is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortCode(String);

impl ShortCode {
    /// Encodes raw random bytes as a short code.
    pub(crate) fn from_bytes(bytes: [u8; CODE_LENGTH_BYTES]) -> Self {
        Self(hex::encode(bytes))
    }

    /// Parses a code received from a client.
    ///
    /// Returns `None` for anything that could never have been generated:
    /// wrong length, uppercase or non-hex characters.
    pub fn parse(raw: &str) -> Option<Self> {
        let well_formed = raw.len() == CODE_LENGTH
            && raw
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, 'a'..='f'));

        well_formed.then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
