//! The concurrent lookup table every skip graph node owns.
//!
//! A [`LookupTable`] holds two arrays of length `MAX_LEVEL`, one per
//! [`Direction`], each slot an `Option<Identity>`. Reads are admitted
//! concurrently; writes are exclusive. There is no coordination across
//! tables — cross-table invariants (bidirectional links, the prefix rule)
//! are the responsibility of whoever performs writes, i.e. the bootstrap
//! constructor in `skipgraph-core`.

use parking_lot::RwLock;
use skipgraph_error::{Result, SkipGraphError};
use skipgraph_types::{validate_level, Direction, Identity, MAX_LEVEL};

/// Read-only capability over a lookup table.
///
/// Callers that only ever query neighbors — the search operation, for
/// instance — depend on this narrower trait instead of the full
/// [`LookupTableWrite`] capability.
pub trait LookupTableRead {
    /// Read the neighbor at `(direction, level)`.
    ///
    /// # Errors
    ///
    /// Returns [`SkipGraphError::LevelExceedsMax`] when `level >= MAX_LEVEL`.
    fn get_entry(&self, direction: Direction, level: usize) -> Result<Option<Identity>>;
}

/// Read/write capability over a lookup table.
///
/// Only the bootstrap constructor needs this; search and diagnostics use
/// [`LookupTableRead`] alone.
pub trait LookupTableWrite: LookupTableRead {
    /// Overwrite the neighbor slot at `(direction, level)`.
    ///
    /// A slot may be overwritten any number of times; table state is never
    /// mutated on a validation failure.
    ///
    /// # Errors
    ///
    /// Returns [`SkipGraphError::LevelExceedsMax`] when `level >= MAX_LEVEL`.
    fn add_entry(&self, direction: Direction, level: usize, identity: Identity) -> Result<()>;
}

struct TableState {
    left: Vec<Option<Identity>>,
    right: Vec<Option<Identity>>,
}

impl TableState {
    fn new() -> Self {
        Self {
            left: (0..MAX_LEVEL).map(|_| None).collect(),
            right: (0..MAX_LEVEL).map(|_| None).collect(),
        }
    }

    fn slots(&self, direction: Direction) -> &[Option<Identity>] {
        match direction {
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }

    fn slots_mut(&mut self, direction: Direction) -> &mut [Option<Identity>] {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }
}

/// A node's neighbor map: two `MAX_LEVEL`-long arrays (one per direction)
/// behind a single reader-preferring lock.
///
/// All operations are non-blocking with respect to I/O; the only possible
/// wait is on the lock itself, and contention is bounded because the
/// routing core never holds it across anything but a slot read or write.
pub struct LookupTable {
    state: RwLock<TableState>,
}

impl Default for LookupTable {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupTable {
    /// Build an empty lookup table: every slot at every level, in both
    /// directions, starts absent.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwLock::new(TableState::new()),
        }
    }
}

impl LookupTableRead for LookupTable {
    fn get_entry(&self, direction: Direction, level: usize) -> Result<Option<Identity>> {
        validate_level(level)?;
        let state = self.state.read();
        Ok(state.slots(direction)[level].clone())
    }
}

impl LookupTableWrite for LookupTable {
    fn add_entry(&self, direction: Direction, level: usize, identity: Identity) -> Result<()> {
        validate_level(level)?;
        let _span = tracing::trace_span!(
            "lookup_table_add_entry",
            direction = ?direction,
            level,
            identifier = %identity.identifier(),
        )
        .entered();
        let mut state = self.state.write();
        state.slots_mut(direction)[level] = Some(identity);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skipgraph_types::{Address, Identifier, MembershipVector};

    fn identity(byte: u8) -> Identity {
        Identity::new(
            Identifier::from_bytes(&[byte]).unwrap(),
            MembershipVector::from_bytes(&[byte]).unwrap(),
            Address::new("127.0.0.1", 9000 + u16::from(byte)),
        )
    }

    #[test]
    fn absent_slot_reads_as_none() {
        let table = LookupTable::new();
        assert_eq!(table.get_entry(Direction::Left, 0).unwrap(), None);
    }

    #[test]
    fn written_slot_reads_back() {
        let table = LookupTable::new();
        let id = identity(1);
        table.add_entry(Direction::Right, 3, id.clone()).unwrap();
        assert_eq!(table.get_entry(Direction::Right, 3).unwrap(), Some(id));
    }

    #[test]
    fn directions_are_independent() {
        let table = LookupTable::new();
        table.add_entry(Direction::Left, 0, identity(1)).unwrap();
        assert_eq!(table.get_entry(Direction::Right, 0).unwrap(), None);
    }

    #[test]
    fn level_at_or_above_max_is_rejected() {
        let table = LookupTable::new();
        let err = table.get_entry(Direction::Left, MAX_LEVEL).unwrap_err();
        assert!(matches!(err, SkipGraphError::LevelExceedsMax { .. }));
        let err = table
            .add_entry(Direction::Left, MAX_LEVEL, identity(1))
            .unwrap_err();
        assert!(matches!(err, SkipGraphError::LevelExceedsMax { .. }));
    }

    #[test]
    fn validation_failure_does_not_mutate_state() {
        let table = LookupTable::new();
        table.add_entry(Direction::Left, 5, identity(9)).unwrap();
        let _ = table.add_entry(Direction::Left, MAX_LEVEL, identity(1));
        assert_eq!(
            table.get_entry(Direction::Left, 5).unwrap(),
            Some(identity(9))
        );
    }

    #[test]
    fn overwriting_a_slot_replaces_the_previous_value() {
        let table = LookupTable::new();
        table.add_entry(Direction::Left, 1, identity(1)).unwrap();
        table.add_entry(Direction::Left, 1, identity(2)).unwrap();
        assert_eq!(
            table.get_entry(Direction::Left, 1).unwrap(),
            Some(identity(2))
        );
    }

    #[test]
    fn concurrent_reads_are_admitted_together() {
        use std::sync::Arc;
        use std::thread;

        let table = Arc::new(LookupTable::new());
        table.add_entry(Direction::Right, 7, identity(42)).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let table = Arc::clone(&table);
                thread::spawn(move || table.get_entry(Direction::Right, 7).unwrap())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), Some(identity(42)));
        }
    }
}
