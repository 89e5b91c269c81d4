//! Centralized skip graph construction (Algorithm 2).
//!
//! Given a target node count, draws unique identifiers and membership
//! vectors, sorts nodes by identifier, links them into a level-0 doubly
//! linked list, then for each node and each increasing level links it to
//! its nearest same-prefix-class neighbor on each side until none remains.

use std::collections::HashSet;

use rand::{CryptoRng, RngCore};
use skipgraph_error::{Result, SkipGraphError};
use skipgraph_table::LookupTableWrite;
use skipgraph_types::{
    Address, Direction, Identifier, Identity, MembershipVector, IDENTIFIER_BYTES, MAX_LEVEL,
    MEMBERSHIP_VECTOR_BYTES,
};

use crate::node::Node;

/// Tuning knobs for [`bootstrap`].
#[derive(Debug, Clone, Copy)]
pub struct BootstrapConfig {
    /// Upper bound on rejection-sampling retries per drawn value before
    /// [`SkipGraphError::GenerationExhausted`] is returned. Guards against a
    /// broken RNG; 1000 draws colliding in a 256-bit space is not expected
    /// to happen under a working generator at any realistic node count.
    pub max_gen_retries: usize,
    /// Highest level the construction will populate; levels above this are
    /// left empty even if a node's membership vector would otherwise share
    /// a longer prefix with a neighbor.
    pub max_level: usize,
    /// Whether membership vectors must be pairwise distinct across the
    /// constructed graph. The skip graph algorithm only requires unique
    /// identifiers; uniqueness of membership vectors is a policy choice
    /// that shortens the higher levels' fan-out. Defaults to `true`.
    pub require_unique_membership_vectors: bool,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            max_gen_retries: 1000,
            max_level: MAX_LEVEL - 1,
            require_unique_membership_vectors: true,
        }
    }
}

/// Build a skip graph of `count` nodes using `rng` for identifier and
/// membership vector generation.
///
/// Returns nodes sorted ascending by identifier, each with its lookup table
/// fully populated per Algorithm 2.
///
/// # Errors
///
/// Returns [`SkipGraphError::InvalidNodeCount`] if `count <= 0`,
/// [`SkipGraphError::GenerationExhausted`] if unique values could not be
/// drawn within `config.max_gen_retries` attempts, or
/// [`SkipGraphError::BootstrapFailed`] wrapping any lookup-table write
/// failure encountered while linking a specific entry.
pub fn bootstrap<R: RngCore + CryptoRng>(
    count: i64,
    rng: &mut R,
    config: &BootstrapConfig,
) -> Result<Vec<Node>> {
    if count <= 0 {
        return Err(SkipGraphError::InvalidNodeCount { requested: count });
    }
    let n = usize::try_from(count).map_err(|_| SkipGraphError::InvalidNodeCount {
        requested: count,
    })?;

    let _span = tracing::info_span!("bootstrap", requested_count = n).entered();

    let identifiers = generate_unique(
        n,
        config.max_gen_retries,
        SkipGraphError::GenerationExhausted {
            kind: skipgraph_error::GenerationKind::Identifier,
            attempts: config.max_gen_retries,
        },
        |rng| {
            let mut buf = [0u8; IDENTIFIER_BYTES];
            rng.fill_bytes(&mut buf);
            Identifier::from_bytes(&buf).expect("32 bytes always fits an Identifier")
        },
        rng,
    )?;

    let membership_vectors: Vec<MembershipVector> = if config.require_unique_membership_vectors {
        generate_unique(
            n,
            config.max_gen_retries,
            SkipGraphError::GenerationExhausted {
                kind: skipgraph_error::GenerationKind::MembershipVector,
                attempts: config.max_gen_retries,
            },
            |rng| {
                let mut buf = [0u8; MEMBERSHIP_VECTOR_BYTES];
                rng.fill_bytes(&mut buf);
                MembershipVector::from_bytes(&buf).expect("32 bytes always fits a MembershipVector")
            },
            rng,
        )?
    } else {
        (0..n)
            .map(|_| {
                let mut buf = [0u8; MEMBERSHIP_VECTOR_BYTES];
                rng.fill_bytes(&mut buf);
                MembershipVector::from_bytes(&buf).expect("32 bytes always fits a MembershipVector")
            })
            .collect()
    };

    let mut identities: Vec<Identity> = identifiers
        .into_iter()
        .zip(membership_vectors)
        .map(|(identifier, membership_vector)| {
            Identity::new(identifier, membership_vector, Address::new("", 0))
        })
        .collect();
    identities.sort_by_key(Identity::identifier);

    let nodes: Vec<Node> = identities
        .iter()
        .map(|identity| Node::new(identity.clone()))
        .collect();

    tracing::debug!(node_count = n, "identities drawn and sorted");

    link_level_zero(&nodes, &identities)?;
    link_higher_levels(&nodes, &identities, config.max_level)?;

    Ok(nodes)
}

fn link_level_zero(nodes: &[Node], identities: &[Identity]) -> Result<()> {
    for i in 0..nodes.len() {
        if i > 0 {
            nodes[i]
                .table()
                .add_entry(Direction::Left, 0, identities[i - 1].clone())
                .map_err(|e| e.into_bootstrap_failure(i))?;
        }
        if i + 1 < nodes.len() {
            nodes[i]
                .table()
                .add_entry(Direction::Right, 0, identities[i + 1].clone())
                .map_err(|e| e.into_bootstrap_failure(i))?;
        }
    }
    Ok(())
}

fn link_higher_levels(nodes: &[Node], identities: &[Identity], max_level: usize) -> Result<()> {
    for i in 0..nodes.len() {
        let mut level = 1;
        loop {
            if level > max_level {
                break;
            }
            let left = (0..i)
                .rev()
                .find(|&j| same_prefix_class(&identities[i], &identities[j], level));
            let right = (i + 1..nodes.len())
                .find(|&j| same_prefix_class(&identities[i], &identities[j], level));

            if left.is_none() && right.is_none() {
                break;
            }

            if let Some(j) = left {
                nodes[i]
                    .table()
                    .add_entry(Direction::Left, level, identities[j].clone())
                    .map_err(|e| e.into_bootstrap_failure(i))?;
                nodes[j]
                    .table()
                    .add_entry(Direction::Right, level, identities[i].clone())
                    .map_err(|e| e.into_bootstrap_failure(j))?;
            }
            if let Some(j) = right {
                nodes[i]
                    .table()
                    .add_entry(Direction::Right, level, identities[j].clone())
                    .map_err(|e| e.into_bootstrap_failure(i))?;
                nodes[j]
                    .table()
                    .add_entry(Direction::Left, level, identities[i].clone())
                    .map_err(|e| e.into_bootstrap_failure(j))?;
            }

            level += 1;
        }
        tracing::debug!(entry_index = i, terminated_at_level = level - 1, "entry linked");
    }
    Ok(())
}

fn same_prefix_class(a: &Identity, b: &Identity, level: usize) -> bool {
    a.membership_vector().common_prefix(&b.membership_vector()) >= level
}

fn generate_unique<R: RngCore, T, F>(
    n: usize,
    max_retries: usize,
    exhausted: SkipGraphError,
    mut draw: F,
    rng: &mut R,
) -> Result<Vec<T>>
where
    T: std::hash::Hash + Eq + Clone,
    F: FnMut(&mut R) -> T,
{
    let mut seen = HashSet::with_capacity(n);
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let mut attempts = 0;
        loop {
            let candidate = draw(rng);
            if seen.insert(candidate.clone()) {
                out.push(candidate);
                break;
            }
            attempts += 1;
            if attempts >= max_retries {
                return Err(exhausted);
            }
        }
    }
    Ok(out)
}
