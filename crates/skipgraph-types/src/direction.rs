//! The two-valued neighbor direction tag.

use skipgraph_error::{Result, SkipGraphError};

/// Whether a neighbor lies to the left (smaller identifier) or right
/// (larger identifier) of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Smaller identifiers.
    Left,
    /// Larger identifiers.
    Right,
}

impl Direction {
    /// The opposite direction, used when installing a symmetric
    /// back-pointer on a neighbor's lookup table.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Decode a direction from a wire-level tag (`0 = Left`, `1 = Right`).
    ///
    /// The core's Rust-typed [`Direction`] is exhaustive by construction, so
    /// this conversion only matters at the boundary with an external
    /// encoding (e.g. a serialized search request).
    ///
    /// # Errors
    ///
    /// Returns [`SkipGraphError::InvalidDirection`] for any tag other than
    /// `0` or `1`.
    pub fn from_tag(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(Self::Left),
            1 => Ok(Self::Right),
            _ => Err(SkipGraphError::InvalidDirection),
        }
    }

    /// Encode as the wire-level tag (`0 = Left`, `1 = Right`).
    #[must_use]
    pub const fn to_tag(self) -> u8 {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}
