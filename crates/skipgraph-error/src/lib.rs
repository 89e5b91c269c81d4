//! Error taxonomy for the skip graph routing core.
//!
//! A single enum is shared across `skipgraph-types`, `skipgraph-table`, and
//! `skipgraph-core` so that callers only ever match on one error type. Every
//! variant maps to one of the three classes the routing core distinguishes:
//! validation errors (recoverable, caller's fault), resource-exhaustion
//! errors (recoverable, rare), and internal invariant violations (fatal,
//! always a programmer bug).

use std::fmt;

/// Which kind of random draw exhausted its retry budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationKind {
    /// A 256-bit identifier.
    Identifier,
    /// A 256-bit membership vector.
    MembershipVector,
}

impl fmt::Display for GenerationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier => f.write_str("identifier"),
            Self::MembershipVector => f.write_str("membership vector"),
        }
    }
}

/// Every error the skip graph routing core can return.
#[derive(Debug, thiserror::Error)]
pub enum SkipGraphError {
    /// A level argument fell outside `[0, MAX_LEVEL)`.
    #[error("level {level} is invalid (must be in [0, {max}))")]
    InvalidLevel { level: usize, max: usize },

    /// A lookup-table level index was `>= MAX_LEVEL`.
    #[error("level {level} exceeds the maximum of {max}")]
    LevelExceedsMax { level: usize, max: usize },

    /// A direction tag was neither `Left` nor `Right`.
    #[error("direction tag is invalid")]
    InvalidDirection,

    /// `Identifier::from_bytes` was given more than 32 bytes.
    #[error("identifier of {len} bytes exceeds the 32-byte maximum")]
    IdentifierTooLarge { len: usize },

    /// `MembershipVector::from_bytes` was given more than 32 bytes.
    #[error("membership vector of {len} bytes exceeds the 32-byte maximum")]
    MembershipVectorTooLarge { len: usize },

    /// Hex decoding failed (odd length, non-hex digit, or too many bytes).
    #[error("invalid hex string: {reason}")]
    InvalidHexString { reason: String },

    /// `MembershipVector::prefix_bits` was asked for a negative bit count.
    #[error("bit count {requested} is negative")]
    NegativeNumBits { requested: i64 },

    /// `MembershipVector::prefix_bits` was asked for more than 256 bits.
    #[error("bit count {requested} exceeds the maximum of {max}")]
    NumBitsExceedsMax { requested: i64, max: usize },

    /// The bootstrap constructor was asked to build a graph of size `<= 0`.
    #[error("node count {requested} is invalid (must be > 0)")]
    InvalidNodeCount { requested: i64 },

    /// A uniqueness rejection loop exhausted its retry budget.
    ///
    /// Per the routing core's design, this guards against a catastrophically
    /// broken RNG; it is not expected to fire under normal operation.
    #[error("exhausted {attempts} retries generating a unique {kind}")]
    GenerationExhausted {
        kind: GenerationKind,
        attempts: usize,
    },

    /// A lookup-table read failed during a search operation.
    #[error("lookup failed at level {level}: {source}")]
    LookupFailure {
        level: usize,
        #[source]
        source: Box<SkipGraphError>,
    },

    /// Bootstrap insertion failed for a specific entry; the whole
    /// construction is aborted and no partial graph is returned.
    #[error("bootstrap insertion failed for entry {entry_index}: {source}")]
    BootstrapFailed {
        entry_index: usize,
        #[source]
        source: Box<SkipGraphError>,
    },

    /// An invariant the core itself is responsible for was violated. This is
    /// always a programmer bug, never a caller input problem.
    #[error("internal invariant violation: {0}")]
    Internal(String),
}

impl SkipGraphError {
    /// Construct an [`SkipGraphError::Internal`] from any stringifiable message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Wrap `self` as the cause of a [`SkipGraphError::LookupFailure`] at `level`.
    #[must_use]
    pub fn into_lookup_failure(self, level: usize) -> Self {
        Self::LookupFailure {
            level,
            source: Box::new(self),
        }
    }

    /// Wrap `self` as the cause of a [`SkipGraphError::BootstrapFailed`] for `entry_index`.
    #[must_use]
    pub fn into_bootstrap_failure(self, entry_index: usize) -> Self {
        Self::BootstrapFailed {
            entry_index,
            source: Box::new(self),
        }
    }
}

/// Convenience alias used throughout the skip graph routing core.
pub type Result<T> = std::result::Result<T, SkipGraphError>;
