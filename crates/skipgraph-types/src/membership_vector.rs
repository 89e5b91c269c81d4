//! 256-bit random membership vectors and their common-prefix algebra.

use std::fmt;

use skipgraph_error::{Result, SkipGraphError};

/// Width of a [`MembershipVector`] in bytes (256 bits).
pub const MEMBERSHIP_VECTOR_BYTES: usize = 32;

/// Number of bits in a membership vector, and therefore the number of
/// usable lookup-table levels (`[0, MAX_LEVEL)`, exclusive upper bound).
pub const MAX_LEVEL: usize = MEMBERSHIP_VECTOR_BYTES * 8;

/// A 32-byte random bit-string determining which higher-level lists a node
/// belongs to. Two nodes share a level-`L` list iff they agree on the first
/// `L` bits, counted MSB-first within each byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MembershipVector([u8; MEMBERSHIP_VECTOR_BYTES]);

impl MembershipVector {
    /// Build a membership vector from up to 32 bytes, left-padding with
    /// zeros.
    ///
    /// # Errors
    ///
    /// Returns [`SkipGraphError::MembershipVectorTooLarge`] when
    /// `bytes.len() > 32`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > MEMBERSHIP_VECTOR_BYTES {
            return Err(SkipGraphError::MembershipVectorTooLarge { len: bytes.len() });
        }
        let mut buf = [0u8; MEMBERSHIP_VECTOR_BYTES];
        let start = MEMBERSHIP_VECTOR_BYTES - bytes.len();
        buf[start..].copy_from_slice(bytes);
        Ok(Self(buf))
    }

    /// Decode a hex string into a membership vector.
    ///
    /// # Errors
    ///
    /// Returns [`SkipGraphError::InvalidHexString`] on malformed input, or
    /// [`SkipGraphError::MembershipVectorTooLarge`] if the decoded bytes
    /// exceed 32.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s).map_err(|e| SkipGraphError::InvalidHexString {
            reason: e.to_string(),
        })?;
        Self::from_bytes(&bytes)
    }

    /// The raw 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; MEMBERSHIP_VECTOR_BYTES] {
        &self.0
    }

    /// Hex-encode for diagnostic logging.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Number of leading bits, counted MSB-first within each byte, on which
    /// `self` and `other` agree. Returns 256 iff the two vectors are
    /// byte-equal.
    #[must_use]
    pub fn common_prefix(&self, other: &Self) -> usize {
        for (i, (a, b)) in self.0.iter().zip(other.0.iter()).enumerate() {
            let xor = a ^ b;
            if xor != 0 {
                return i * 8 + xor.leading_zeros() as usize;
            }
        }
        MAX_LEVEL
    }

    /// The first `k` bits as a canonical `"0"`/`"1"` string, MSB-first.
    ///
    /// # Errors
    ///
    /// Returns [`SkipGraphError::NegativeNumBits`] if `k < 0`, or
    /// [`SkipGraphError::NumBitsExceedsMax`] if `k > 256`.
    pub fn prefix_bits(&self, k: i64) -> Result<String> {
        if k < 0 {
            return Err(SkipGraphError::NegativeNumBits { requested: k });
        }
        let k = usize::try_from(k).map_err(|_| SkipGraphError::NegativeNumBits { requested: k })?;
        if k > MAX_LEVEL {
            return Err(SkipGraphError::NumBitsExceedsMax {
                requested: k as i64,
                max: MAX_LEVEL,
            });
        }
        let mut out = String::with_capacity(k);
        for bit_index in 0..k {
            let byte = self.0[bit_index / 8];
            let shift = 7 - (bit_index % 8);
            let bit = (byte >> shift) & 1;
            out.push(if bit == 1 { '1' } else { '0' });
        }
        Ok(out)
    }
}

impl fmt::Debug for MembershipVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MembershipVector")
            .field(&self.to_hex())
            .finish()
    }
}

impl fmt::Display for MembershipVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_prefix_is_max_for_equal_vectors() {
        let mv = MembershipVector::from_bytes(&[0xAB; MEMBERSHIP_VECTOR_BYTES]).unwrap();
        assert_eq!(mv.common_prefix(&mv), MAX_LEVEL);
    }

    #[test]
    fn common_prefix_differs_at_bit_zero() {
        let a = MembershipVector::from_bytes(&[0x00; MEMBERSHIP_VECTOR_BYTES]).unwrap();
        let mut bytes = [0u8; MEMBERSHIP_VECTOR_BYTES];
        bytes[0] = 0x80; // highest bit of the first byte set
        let b = MembershipVector::from_bytes(&bytes).unwrap();
        assert_eq!(a.common_prefix(&b), 0);
    }

    #[test]
    fn common_prefix_differs_at_lowest_bit() {
        let a = MembershipVector::from_bytes(&[0x00; MEMBERSHIP_VECTOR_BYTES]).unwrap();
        let mut bytes = [0u8; MEMBERSHIP_VECTOR_BYTES];
        bytes[MEMBERSHIP_VECTOR_BYTES - 1] = 0x01; // lowest bit of the last byte
        let b = MembershipVector::from_bytes(&bytes).unwrap();
        assert_eq!(a.common_prefix(&b), MAX_LEVEL - 1);
    }

    #[test]
    fn prefix_bits_matches_manual_bit_extraction() {
        let mv = MembershipVector::from_bytes(&[0b1010_0000]).unwrap();
        assert_eq!(mv.prefix_bits(0).unwrap(), "");
        assert_eq!(mv.prefix_bits(4).unwrap(), "1010");
    }

    #[test]
    fn prefix_bits_rejects_negative_count() {
        let mv = MembershipVector::from_bytes(&[0x00]).unwrap();
        let err = mv.prefix_bits(-1).unwrap_err();
        assert!(matches!(err, SkipGraphError::NegativeNumBits { requested: -1 }));
    }

    #[test]
    fn prefix_bits_rejects_count_above_max() {
        let mv = MembershipVector::from_bytes(&[0x00]).unwrap();
        let err = mv.prefix_bits(257).unwrap_err();
        assert!(matches!(
            err,
            SkipGraphError::NumBitsExceedsMax { requested: 257, max: MAX_LEVEL }
        ));
    }

    #[test]
    fn from_hex_round_trips() {
        let mv = MembershipVector::from_bytes(&[0x12, 0x34]).unwrap();
        let round_tripped = MembershipVector::from_hex(&mv.to_hex()).unwrap();
        assert_eq!(mv, round_tripped);
    }

    #[test]
    fn from_bytes_rejects_oversized_input() {
        let bytes = [0u8; MEMBERSHIP_VECTOR_BYTES + 1];
        let err = MembershipVector::from_bytes(&bytes).unwrap_err();
        assert!(matches!(
            err,
            SkipGraphError::MembershipVectorTooLarge { len } if len == MEMBERSHIP_VECTOR_BYTES + 1
        ));
    }
}
