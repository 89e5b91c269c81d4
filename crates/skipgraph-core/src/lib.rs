//! Bootstrap construction, the per-node search operation, and offline
//! diagnostics for the skip graph routing core.
//!
//! This crate is transport-free: it never opens a socket or spawns a
//! task. A [`Node`] only ever touches its own [`skipgraph_table::LookupTable`];
//! handing a request to a different node (a real hop) or collecting a
//! slice of nodes to audit (diagnostics) is the caller's job.

mod bootstrap;
mod cx;
mod diagnostics;
mod node;
mod search;

pub use bootstrap::{bootstrap, BootstrapConfig};
pub use cx::Cx;
pub use diagnostics::{check_invariants, count_components, InvariantReport, InvariantViolation};
pub use node::{Node, SearchRequest, SearchResponse};
pub use search::search_by_id;
