//! Deterministic scenario builders for skip graph integration tests.
//!
//! Small scenarios (a singleton, a hand-linked pair) are built directly
//! against a node's lookup table so their shape is exact and independent
//! of the RNG. Larger scenarios go through the real [`bootstrap`]
//! constructor seeded with a fixed [`ChaCha20Rng`], so a given seed always
//! reproduces the same graph.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use skipgraph::{
    bootstrap, Address, BootstrapConfig, Direction, Identifier, Identity, LookupTableWrite,
    MembershipVector, Node,
};

/// A `ChaCha20Rng` seeded deterministically, for reproducible scenarios.
#[must_use]
pub fn deterministic_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Build an `n`-node graph via the real bootstrap constructor under a fixed
/// seed.
///
/// # Panics
///
/// Panics if bootstrap itself fails, which does not happen for a
/// deterministic RNG and a sane node count.
#[must_use]
pub fn bootstrap_graph(count: i64, seed: u64) -> Vec<Node> {
    let mut rng = deterministic_rng(seed);
    bootstrap(count, &mut rng, &BootstrapConfig::default())
        .expect("deterministic bootstrap does not fail")
}

fn identity(id_byte: u8, mv_byte: u8) -> Identity {
    Identity::new(
        Identifier::from_bytes(&[id_byte]).expect("single byte fits an Identifier"),
        MembershipVector::from_bytes(&[mv_byte]).expect("single byte fits a MembershipVector"),
        Address::new("127.0.0.1", 9000 + u16::from(id_byte)),
    )
}

/// S1: a single node, isolated, with no neighbors at any level.
#[must_use]
pub fn singleton() -> Node {
    Node::new(identity(1, 0b0000_0000))
}

/// S2: two nodes whose membership vectors share zero bits of prefix (they
/// differ at bit 0), linked only at level 0.
#[must_use]
pub fn two_node_zero_prefix() -> (Node, Node) {
    let left = Node::new(identity(1, 0b0000_0000));
    let right = Node::new(identity(2, 0b1000_0000));
    left.table()
        .add_entry(Direction::Right, 0, right.identity().clone())
        .unwrap();
    right
        .table()
        .add_entry(Direction::Left, 0, left.identity().clone())
        .unwrap();
    (left, right)
}

/// S3: a 5-node graph built by the real bootstrap constructor.
#[must_use]
pub fn five_node_bootstrap(seed: u64) -> Vec<Node> {
    bootstrap_graph(5, seed)
}

/// S4: a node with a known right neighbor present at both level 0 and
/// level 2, used to confirm a search reports the higher of the two levels.
#[must_use]
pub fn search_exact_match_multi_level() -> (Node, Identifier) {
    let origin = Node::new(identity(5, 0));
    let neighbor = identity(8, 0);
    origin
        .table()
        .add_entry(Direction::Right, 0, neighbor.clone())
        .unwrap();
    origin
        .table()
        .add_entry(Direction::Right, 2, neighbor.clone())
        .unwrap();
    (origin, neighbor.identifier())
}

/// S5: a node whose every left-direction neighbor, at every populated
/// level up to `MAX_LEVEL - 1`, has an identifier strictly below `target` —
/// none of them qualifies as a left candidate (which requires `>= target`),
/// so the search must fall back to terminating at the origin itself.
#[must_use]
pub fn search_fallback_no_progress() -> (Node, Identifier) {
    let origin = Node::new(identity(20, 0));
    let table = origin.table();
    for (level, id_byte) in [(0u8, 15u8), (1, 12), (2, 8), (3, 1)] {
        table
            .add_entry(Direction::Left, usize::from(level), identity(id_byte, 0))
            .unwrap();
    }
    (origin, Identifier::from_bytes(&[18]).unwrap())
}

/// A node whose only right neighbor overshoots `target`, so a search must
/// fall back to terminating at the origin itself. A generic right-direction
/// fallback case, distinct from [`search_fallback_no_progress`]'s
/// left-direction undershoot.
#[must_use]
pub fn right_search_overshoot_fallback() -> (Node, Identifier) {
    let origin = Node::new(identity(5, 0));
    let overshoot = identity(99, 0);
    origin
        .table()
        .add_entry(Direction::Right, 0, overshoot)
        .unwrap();
    (origin, Identifier::from_bytes(&[10]).unwrap())
}

/// S6: a 500-node graph, used to bound the level-0 component count.
#[must_use]
pub fn five_hundred_node_bootstrap(seed: u64) -> Vec<Node> {
    bootstrap_graph(500, seed)
}
