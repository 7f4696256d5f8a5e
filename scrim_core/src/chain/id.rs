// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinator, view, and controller identity types.

use core::fmt;

/// Sentinel value indicating "no slot" in index fields.
pub const INVALID: u32 = u32::MAX;

/// A handle to a presentation level in a
/// [`CoordinatorChain`](super::CoordinatorChain).
///
/// Contains both a slot index and a generation counter so that stale handles
/// can be detected after a level is dismissed and the slot is reused. This is
/// how the chain answers "is this coordinator still the one I presented?"
/// without reference identity.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordinatorId {
    /// Slot index into the chain's arrays.
    pub(crate) idx: u32,
    /// Generation counter — must match the chain's generation for this slot.
    pub(crate) generation: u32,
}

impl CoordinatorId {
    /// Returns the raw slot index (for diagnostics only).
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.idx
    }

    /// Returns the generation counter.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for CoordinatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CoordinatorId({}@gen{})", self.idx, self.generation)
    }
}

/// An opaque reference to declarative view content.
///
/// View content is created and managed externally by the declarative
/// frontend. The chain never inspects it; it only forwards the handle to the
/// host when presenting or replacing content in place.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(pub u32);

impl fmt::Debug for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ViewId({})", self.0)
    }
}

/// An opaque reference to a native hosting controller.
///
/// Controllers are created and owned by the
/// [`HostController`](crate::host::HostController) implementation; the chain
/// holds handles only and clears them during teardown.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControllerId(pub u32);

impl fmt::Debug for ControllerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ControllerId({})", self.0)
    }
}
