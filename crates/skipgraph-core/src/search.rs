//! The single-hop routing decision a node makes toward a target identifier.
//!
//! This is the Algorithm 1 kernel: collect every present neighbor across
//! levels `0..=max_level` in the requested direction, keep the ones that
//! make progress toward `target`, and return the best of those plus the
//! highest level at which it was seen. Composing repeated calls of this
//! function across nodes (each call against the hop target's own table) is
//! how a full distributed search is driven; that composition lives in the
//! harness, not here, since this crate has no notion of a node-to-node
//! transport.

use std::collections::HashMap;

use skipgraph_error::{Result, SkipGraphError};
use skipgraph_table::LookupTableRead;
use skipgraph_types::{Direction, Identifier, MAX_LEVEL};

/// Make one routing hop decision from `self_identifier` toward `target`.
///
/// Neighbors are collected ascending from level `0` to `max_level`, so a
/// candidate identifier present at more than one level is recorded under
/// the highest level it was seen at. Survivors are filtered by direction:
/// for [`Direction::Left`] only identifiers `>= target` qualify and the
/// smallest wins; for [`Direction::Right`] only identifiers `<= target`
/// qualify and the largest wins.
///
/// Returns `(0, self_identifier)` when no neighbor survives the filter,
/// signaling that the search terminates at this node.
///
/// # Errors
///
/// Returns [`SkipGraphError::InvalidLevel`] when `max_level >= MAX_LEVEL`,
/// or [`SkipGraphError::LookupFailure`] wrapping any table read failure,
/// tagged with the offending level.
pub fn search_by_id(
    table: &dyn LookupTableRead,
    self_identifier: Identifier,
    target: Identifier,
    max_level: usize,
    direction: Direction,
) -> Result<(usize, Identifier)> {
    if max_level >= MAX_LEVEL {
        return Err(SkipGraphError::InvalidLevel {
            level: max_level,
            max: MAX_LEVEL,
        });
    }

    let mut highest_level_seen: HashMap<Identifier, usize> = HashMap::new();
    for level in 0..=max_level {
        if let Some(identity) = table
            .get_entry(direction, level)
            .map_err(|e| e.into_lookup_failure(level))?
        {
            highest_level_seen.insert(identity.identifier(), level);
        }
    }

    let best = match direction {
        Direction::Left => highest_level_seen
            .keys()
            .filter(|&&candidate| candidate >= target)
            .min()
            .copied(),
        Direction::Right => highest_level_seen
            .keys()
            .filter(|&&candidate| candidate <= target)
            .max()
            .copied(),
    };

    Ok(match best {
        Some(candidate) => (highest_level_seen[&candidate], candidate),
        None => (0, self_identifier),
    })
}
