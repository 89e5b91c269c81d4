//! Capability-scoped execution context threaded through node operations.
//!
//! Mirrors the teacher's component-lifecycle-facade stub: a zero-sized
//! marker today, reserved as the seam where cancellation, deadlines, or
//! tracing-span propagation would attach without changing every call site's
//! signature again.

use std::marker::PhantomData;

/// Execution context for one routing call, parameterized by a capability
/// marker type (currently unused — `Cx<()>` is the only instantiation in
/// this crate).
#[derive(Clone, Copy)]
pub struct Cx<Caps = ()> {
    _caps: PhantomData<Caps>,
}

impl<Caps> Default for Cx<Caps> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Caps> Cx<Caps> {
    /// Build a fresh context.
    #[must_use]
    pub const fn new() -> Self {
        Self { _caps: PhantomData }
    }

    /// Narrow (or widen) to a different capability marker.
    #[must_use]
    pub const fn restrict<NewCaps>(&self) -> Cx<NewCaps> {
        Cx::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restrict_changes_only_the_marker_type() {
        let cx: Cx<()> = Cx::new();
        let _restricted: Cx<u8> = cx.restrict();
    }
}
