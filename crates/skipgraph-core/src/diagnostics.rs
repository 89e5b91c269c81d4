//! Offline checks over a constructed graph: connected-component counting
//! and invariant auditing. Nothing here mutates a table; both walk the
//! graph purely through [`LookupTableRead`].

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use skipgraph_error::Result;
use skipgraph_table::LookupTableRead;
use skipgraph_types::{validate_level, Direction, Identifier};

use crate::node::Node;

/// One invariant violation found by [`check_invariants`], with enough
/// detail to locate it without re-walking the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Human-readable description of what failed and where.
    pub description: String,
}

/// The full result of an invariant audit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InvariantReport {
    /// Every violation found; empty means the graph is internally
    /// consistent at every level checked.
    pub violations: Vec<InvariantViolation>,
}

impl InvariantReport {
    /// Whether the audited graph has no known violations.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

fn index_by_identifier(nodes: &[Node]) -> HashMap<Identifier, usize> {
    nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (node.identifier(), i))
        .collect()
}

/// Count connected components of the graph at a given level, treating each
/// node's level-`level` left/right neighbors as undirected edges.
///
/// Uses an explicit work stack (iterative DFS) rather than recursion, since
/// component size is bounded only by node count, not by call-stack depth.
///
/// # Errors
///
/// Returns an error if `level` is out of range or a table read fails.
pub fn count_components(nodes: &[Node], level: usize) -> Result<usize> {
    validate_level(level)?;
    let index = index_by_identifier(nodes);
    let mut visited = vec![false; nodes.len()];
    let mut components = 0usize;

    for start in 0..nodes.len() {
        if visited[start] {
            continue;
        }
        components += 1;
        let mut stack = vec![start];
        visited[start] = true;
        while let Some(current) = stack.pop() {
            for direction in [Direction::Left, Direction::Right] {
                if let Some(neighbor) = nodes[current].table().get_entry(direction, level)? {
                    if let Some(&next) = index.get(&neighbor.identifier()) {
                        if !visited[next] {
                            visited[next] = true;
                            stack.push(next);
                        }
                    }
                }
            }
        }
    }

    Ok(components)
}

/// Audit a constructed graph against the universal invariants: unique
/// identifiers, unique membership vectors (when the construction policy
/// required it), the level-`L` prefix rule, bidirectional neighbor
/// consistency, and a well-formed ascending level-0 chain.
///
/// # Errors
///
/// Returns an error only if a table read itself fails; individual
/// invariant breaks are reported in the returned [`InvariantReport`], not
/// as an `Err`.
pub fn check_invariants(nodes: &[Node]) -> Result<InvariantReport> {
    let mut violations = Vec::new();
    let index = index_by_identifier(nodes);

    check_uniqueness(nodes, &mut violations);
    check_levels(nodes, &index, &mut violations)?;
    check_level_zero_chain(nodes, &mut violations)?;

    Ok(InvariantReport { violations })
}

fn check_uniqueness(nodes: &[Node], violations: &mut Vec<InvariantViolation>) {
    let mut seen_ids = HashSet::with_capacity(nodes.len());
    let mut seen_mvs = HashSet::with_capacity(nodes.len());
    for node in nodes {
        if !seen_ids.insert(node.identifier()) {
            violations.push(InvariantViolation {
                description: format!("duplicate identifier {}", node.identifier()),
            });
        }
        if !seen_mvs.insert(node.membership_vector()) {
            violations.push(InvariantViolation {
                description: format!(
                    "duplicate membership vector {} (identifier {})",
                    node.membership_vector(),
                    node.identifier()
                ),
            });
        }
    }
}

fn check_levels(
    nodes: &[Node],
    index: &HashMap<Identifier, usize>,
    violations: &mut Vec<InvariantViolation>,
) -> Result<()> {
    for node in nodes {
        for level in 0..skipgraph_types::MAX_LEVEL {
            for direction in [Direction::Left, Direction::Right] {
                let Some(neighbor) = node.table().get_entry(direction, level)? else {
                    continue;
                };

                if level > 0 {
                    let shared = node
                        .membership_vector()
                        .common_prefix(&neighbor.membership_vector());
                    if shared < level {
                        violations.push(InvariantViolation {
                            description: format!(
                                "prefix rule violated: {} -> {} at level {level} ({direction:?}), shared prefix only {shared} bits",
                                node.identifier(),
                                neighbor.identifier()
                            ),
                        });
                    }
                }

                match index.get(&neighbor.identifier()) {
                    None => violations.push(InvariantViolation {
                        description: format!(
                            "{} has a {direction:?} neighbor at level {level} ({}) absent from the node set",
                            node.identifier(),
                            neighbor.identifier()
                        ),
                    }),
                    Some(&j) => {
                        let back = nodes[j].table().get_entry(direction.opposite(), level)?;
                        let reciprocal = matches!(&back, Some(identity) if identity.identifier() == node.identifier());
                        if !reciprocal {
                            violations.push(InvariantViolation {
                                description: format!(
                                    "asymmetric link: {} -> {} at level {level} ({direction:?}) has no matching back-pointer",
                                    node.identifier(),
                                    neighbor.identifier()
                                ),
                            });
                        }
                    }
                }
            }
        }
    }
    Ok(())
}

fn check_level_zero_chain(nodes: &[Node], violations: &mut Vec<InvariantViolation>) -> Result<()> {
    if nodes.is_empty() {
        return Ok(());
    }
    let index = index_by_identifier(nodes);

    let starts: Vec<usize> = {
        let mut starts = Vec::new();
        for (i, node) in nodes.iter().enumerate() {
            if node.table().get_entry(Direction::Left, 0)?.is_none() {
                starts.push(i);
            }
        }
        starts
    };

    if starts.len() != 1 {
        violations.push(InvariantViolation {
            description: format!(
                "expected exactly one level-0 chain head, found {}",
                starts.len()
            ),
        });
        return Ok(());
    }

    let mut visited = HashSet::with_capacity(nodes.len());
    let mut current = starts[0];
    visited.insert(current);

    loop {
        let next = nodes[current].table().get_entry(Direction::Right, 0)?;
        let Some(identity) = next else {
            break;
        };
        let Some(&next_idx) = index.get(&identity.identifier()) else {
            violations.push(InvariantViolation {
                description: format!(
                    "level-0 chain points to {} which is absent from the node set",
                    identity.identifier()
                ),
            });
            break;
        };
        if nodes[next_idx].identifier().compare(&nodes[current].identifier()).ordering
            != Ordering::Greater
        {
            violations.push(InvariantViolation {
                description: format!(
                    "level-0 chain is not strictly ascending at {} -> {}",
                    nodes[current].identifier(),
                    nodes[next_idx].identifier()
                ),
            });
        }
        if !visited.insert(next_idx) {
            violations.push(InvariantViolation {
                description: "level-0 chain contains a cycle".to_string(),
            });
            break;
        }
        current = next_idx;
    }

    if visited.len() != nodes.len() {
        violations.push(InvariantViolation {
            description: format!(
                "level-0 chain visited {} of {} nodes",
                visited.len(),
                nodes.len()
            ),
        });
    }

    Ok(())
}
