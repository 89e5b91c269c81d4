//! Level validation shared by the lookup table and the search operation.

use skipgraph_error::{Result, SkipGraphError};

use crate::membership_vector::MAX_LEVEL;

/// Validate that `level` is a usable lookup-table row, i.e. in
/// `[0, MAX_LEVEL)`.
///
/// # Errors
///
/// Returns [`SkipGraphError::LevelExceedsMax`] when `level >= MAX_LEVEL`.
pub fn validate_level(level: usize) -> Result<()> {
    if level >= MAX_LEVEL {
        return Err(SkipGraphError::LevelExceedsMax {
            level,
            max: MAX_LEVEL,
        });
    }
    Ok(())
}
