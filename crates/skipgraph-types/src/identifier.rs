//! 256-bit node identifiers and their total order.

use std::cmp::Ordering;
use std::fmt;

use skipgraph_error::{Result, SkipGraphError};

/// Width of an [`Identifier`] in bytes (256 bits).
pub const IDENTIFIER_BYTES: usize = 32;

/// Outcome of [`Identifier::compare`]: the ordering plus the index of the
/// first differing byte, used only by diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareResult {
    /// Standard three-way ordering of the two identifiers.
    pub ordering: Ordering,
    /// Index of the first byte at which the two identifiers differ, or
    /// `None` when they are byte-equal.
    pub first_diff_byte: Option<usize>,
}

/// A 32-byte, big-endian opaque node identifier.
///
/// Total order is lexicographic byte comparison. The all-zero identifier is
/// a legal value internally; it is reserved as the "absent neighbor"
/// sentinel only at the boundary with external serialization, never inside
/// this crate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier([u8; IDENTIFIER_BYTES]);

impl Identifier {
    /// The all-zero identifier. Legal as an internal value; callers at the
    /// serialization boundary treat it as "absent" by convention, not this
    /// crate.
    pub const ZERO: Self = Self([0u8; IDENTIFIER_BYTES]);

    /// Build an identifier from up to 32 bytes, left-padding with zeros.
    ///
    /// # Errors
    ///
    /// Returns [`SkipGraphError::IdentifierTooLarge`] when `bytes.len() > 32`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > IDENTIFIER_BYTES {
            return Err(SkipGraphError::IdentifierTooLarge { len: bytes.len() });
        }
        let mut buf = [0u8; IDENTIFIER_BYTES];
        let start = IDENTIFIER_BYTES - bytes.len();
        buf[start..].copy_from_slice(bytes);
        Ok(Self(buf))
    }

    /// Decode a hex string into an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SkipGraphError::InvalidHexString`] on malformed input, or
    /// [`SkipGraphError::IdentifierTooLarge`] if the decoded bytes exceed 32.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s).map_err(|e| SkipGraphError::InvalidHexString {
            reason: e.to_string(),
        })?;
        Self::from_bytes(&bytes)
    }

    /// The raw 32-byte big-endian representation.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; IDENTIFIER_BYTES] {
        &self.0
    }

    /// Hex-encode for diagnostic logging; this is the only externally
    /// observable format the routing core produces for identifiers.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Total, deterministic, stable comparison with the first differing
    /// byte index, for diagnostics only. Ties (`Ordering::Equal`) occur only
    /// on byte-equal inputs.
    #[must_use]
    pub fn compare(&self, other: &Self) -> CompareResult {
        let first_diff_byte = self
            .0
            .iter()
            .zip(other.0.iter())
            .position(|(a, b)| a != b);
        CompareResult {
            ordering: self.0.cmp(&other.0),
            first_diff_byte,
        }
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Identifier").field(&self.to_hex()).finish()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
