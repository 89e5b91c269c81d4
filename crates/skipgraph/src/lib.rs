//! Public API for the skip graph routing core.
//!
//! Re-exports the pieces an embedder actually needs — the key algebra, the
//! lookup table capability traits, and the bootstrap/search/diagnostics
//! operations — without requiring a direct dependency on the individual
//! `skipgraph-*` crates.

pub use skipgraph_core::{
    bootstrap, check_invariants, count_components, search_by_id, BootstrapConfig, Cx,
    InvariantReport, InvariantViolation, Node, SearchRequest, SearchResponse,
};
pub use skipgraph_error::{GenerationKind, Result, SkipGraphError};
pub use skipgraph_table::{LookupTable, LookupTableRead, LookupTableWrite};
pub use skipgraph_types::{
    validate_level, Address, CompareResult, Direction, Identifier, Identity, MembershipVector,
    IDENTIFIER_BYTES, MAX_LEVEL, MEMBERSHIP_VECTOR_BYTES,
};
