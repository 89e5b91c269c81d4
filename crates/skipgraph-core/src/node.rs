//! The per-node facade: identity, lookup table, and the search entry point.

use skipgraph_error::Result;
use skipgraph_table::{LookupTable, LookupTableRead, LookupTableWrite};
use skipgraph_types::{Direction, Identifier, Identity, MembershipVector};

use crate::cx::Cx;
use crate::search;

/// One search request, as a node would receive it from a peer or a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRequest {
    /// The identifier being searched for.
    pub target: Identifier,
    /// Highest level to consider; callers doing a full network search pass
    /// `MAX_LEVEL - 1` on the first hop and the returned level on each
    /// subsequent hop, so the search never climbs back up.
    pub max_level: usize,
    /// Which side of `target` this node believes it is on.
    pub direction: Direction,
}

/// The outcome of one hop of [`Node::search_by_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResponse {
    /// The level at which the next hop (or self-termination) was found.
    pub termination_level: usize,
    /// The identifier to hop to next, or `target`'s requester's own
    /// identifier when the search terminates at this node.
    pub result: Identifier,
}

/// A single skip graph participant: its identity plus its own lookup table.
///
/// Identity is held by value, never as a reference to another `Node` — two
/// nodes never hold live references into each other. A search or bootstrap
/// that needs another node's table is handed that table explicitly by the
/// caller (the harness, in tests), never discovered through this struct.
pub struct Node {
    identity: Identity,
    table: LookupTable,
}

impl Node {
    /// Build a node around an identity and a freshly empty lookup table.
    #[must_use]
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            table: LookupTable::new(),
        }
    }

    /// Build a node from an identity and a pre-populated table (used by the
    /// bootstrap constructor, which fills tables before nodes are handed
    /// out).
    #[must_use]
    pub fn from_parts(identity: Identity, table: LookupTable) -> Self {
        Self { identity, table }
    }

    /// The node's identity triple.
    #[must_use]
    pub const fn identity(&self) -> &Identity {
        &self.identity
    }

    /// The node's identifier.
    #[must_use]
    pub const fn identifier(&self) -> Identifier {
        self.identity.identifier()
    }

    /// The node's membership vector.
    #[must_use]
    pub const fn membership_vector(&self) -> MembershipVector {
        self.identity.membership_vector()
    }

    /// The node's lookup table.
    #[must_use]
    pub const fn table(&self) -> &LookupTable {
        &self.table
    }

    /// Read a neighbor slot.
    ///
    /// # Errors
    ///
    /// See [`LookupTableRead::get_entry`].
    pub fn get_neighbor(
        &self,
        _cx: &Cx,
        direction: Direction,
        level: usize,
    ) -> Result<Option<Identity>> {
        self.table.get_entry(direction, level)
    }

    /// Write a neighbor slot.
    ///
    /// # Errors
    ///
    /// See [`LookupTableWrite::add_entry`].
    pub fn set_neighbor(
        &self,
        _cx: &Cx,
        direction: Direction,
        level: usize,
        identity: Identity,
    ) -> Result<()> {
        self.table.add_entry(direction, level, identity)
    }

    /// Make one routing hop decision toward `request.target`.
    ///
    /// # Errors
    ///
    /// Propagates lookup-table read failures as
    /// [`skipgraph_error::SkipGraphError::LookupFailure`].
    pub fn search_by_id(&self, _cx: &Cx, request: SearchRequest) -> Result<SearchResponse> {
        let (termination_level, result) = search::search_by_id(
            &self.table,
            self.identity.identifier(),
            request.target,
            request.max_level,
            request.direction,
        )?;
        Ok(SearchResponse {
            termination_level,
            result,
        })
    }
}
