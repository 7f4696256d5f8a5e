// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena storage for presentation levels with allocation and topology
//! management.

use alloc::vec::Vec;

use crate::presentation::{AttemptCallback, Presentation};

use super::id::{INVALID, ControllerId, CoordinatorId};

/// Arena of presentation levels, one slot per level of the modal stack.
///
/// Slots are addressed by [`CoordinatorId`] handles. Internally, each level
/// occupies a slot in parallel arrays. Freed slots are recycled via a free
/// list, and generation counters make outstanding handles to dismissed
/// levels go stale immediately.
///
/// The chain owns its slots top-down: a level's `child` link is the one
/// presentation it currently displays, and the `parent` link is a non-owning
/// back-index used only for identity checks during dismissal. At most one
/// child exists per slot at any time.
pub struct CoordinatorChain {
    // -- Topology --
    pub(crate) parent: Vec<u32>,
    pub(crate) child: Vec<u32>,

    // -- Per-level state --
    pub(crate) presentation: Vec<Option<Presentation>>,
    pub(crate) controller: Vec<Option<ControllerId>>,
    pub(crate) attempt_observers: Vec<Vec<AttemptCallback>>,

    // -- Allocation --
    pub(crate) generation: Vec<u32>,
    pub(crate) free_list: Vec<u32>,
    pub(crate) len: u32,
}

impl core::fmt::Debug for CoordinatorChain {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CoordinatorChain")
            .field("len", &self.len)
            .field("free", &self.free_list.len())
            .field("parent", &self.parent)
            .field("child", &self.child)
            .finish_non_exhaustive()
    }
}

impl Default for CoordinatorChain {
    fn default() -> Self {
        Self::new()
    }
}

impl CoordinatorChain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parent: Vec::new(),
            child: Vec::new(),
            presentation: Vec::new(),
            controller: Vec::new(),
            attempt_observers: Vec::new(),
            generation: Vec::new(),
            free_list: Vec::new(),
            len: 0,
        }
    }

    // -- Allocation API --

    /// Creates a root level representing the un-presented base of a chain.
    ///
    /// A root holds no descriptor and has no parent. Attach a native
    /// controller with
    /// [`Coordinator::attach_controller`](super::Coordinator::attach_controller)
    /// before presenting from it.
    pub fn create_root(&mut self) -> CoordinatorId {
        self.alloc_slot(INVALID, None)
    }

    /// Allocates a presented level under `parent`, linking both directions.
    ///
    /// The caller must have cleared any existing child first.
    pub(crate) fn create_presented(
        &mut self,
        parent: CoordinatorId,
        presentation: Presentation,
    ) -> CoordinatorId {
        debug_assert!(
            self.child[parent.idx as usize] == INVALID,
            "parent already has a child"
        );
        let id = self.alloc_slot(parent.idx, Some(presentation));
        self.child[parent.idx as usize] = id.idx;
        id
    }

    fn alloc_slot(&mut self, parent: u32, presentation: Option<Presentation>) -> CoordinatorId {
        let idx = if let Some(idx) = self.free_list.pop() {
            // Reuse a freed slot.
            self.generation[idx as usize] += 1;
            self.parent[idx as usize] = parent;
            self.child[idx as usize] = INVALID;
            self.presentation[idx as usize] = presentation;
            self.controller[idx as usize] = None;
            self.attempt_observers[idx as usize].clear();
            idx
        } else {
            // Allocate a new slot.
            let idx = self.len;
            self.len += 1;
            self.parent.push(parent);
            self.child.push(INVALID);
            self.presentation.push(presentation);
            self.controller.push(None);
            self.attempt_observers.push(Vec::new());
            self.generation.push(0);
            idx
        };

        CoordinatorId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    /// Returns whether the given handle refers to a live level.
    #[must_use]
    pub fn is_alive(&self, id: CoordinatorId) -> bool {
        (id.idx < self.len)
            && self.generation[id.idx as usize] == id.generation
            && !self.free_list.contains(&id.idx)
    }

    // -- Topology API --

    /// Returns the level that presented `id`, if any.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn parent_of(&self, id: CoordinatorId) -> Option<CoordinatorId> {
        self.validate(id);
        let p = self.parent[id.idx as usize];
        if p == INVALID {
            None
        } else {
            Some(CoordinatorId {
                idx: p,
                generation: self.generation[p as usize],
            })
        }
    }

    /// Returns the level currently presented by `id`, if any.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn child_of(&self, id: CoordinatorId) -> Option<CoordinatorId> {
        self.validate(id);
        let c = self.child[id.idx as usize];
        if c == INVALID {
            None
        } else {
            Some(CoordinatorId {
                idx: c,
                generation: self.generation[c as usize],
            })
        }
    }

    /// Returns the root levels (those with no parent).
    #[must_use]
    pub fn roots(&self) -> Vec<CoordinatorId> {
        let mut roots = Vec::new();
        for idx in 0..self.len {
            if self.parent[idx as usize] == INVALID && !self.free_list.contains(&idx) {
                roots.push(CoordinatorId {
                    idx,
                    generation: self.generation[idx as usize],
                });
            }
        }
        roots
    }

    // -- Per-level state --

    /// Returns the descriptor held by a level (`None` for roots).
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn presentation(&self, id: CoordinatorId) -> Option<&Presentation> {
        self.validate(id);
        self.presentation[id.idx as usize].as_ref()
    }

    /// Returns the native controller attached to a level, if any.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn controller(&self, id: CoordinatorId) -> Option<ControllerId> {
        self.validate(id);
        self.controller[id.idx as usize]
    }

    /// Sets or clears the native controller reference of a level.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub(crate) fn set_controller(&mut self, id: CoordinatorId, controller: Option<ControllerId>) {
        self.validate(id);
        self.controller[id.idx as usize] = controller;
    }

    /// Registers a callback for uncommitted interactive dismiss attempts on
    /// this level.
    ///
    /// Callbacks run in registration order and never mutate chain state.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn observe_dismiss_attempt(&mut self, id: CoordinatorId, callback: impl Fn() + 'static) {
        self.validate(id);
        self.attempt_observers[id.idx as usize].push(alloc::boxed::Box::new(callback));
    }

    /// Returns the registered attempt observers of a level.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn attempt_observers(&self, id: CoordinatorId) -> &[AttemptCallback] {
        self.validate(id);
        &self.attempt_observers[id.idx as usize]
    }

    // -- Teardown helpers --

    /// Takes the descriptor out of `parent`'s current child, leaving the
    /// slot in place for [`release_subtree`](Self::release_subtree).
    pub(crate) fn take_presented(&mut self, parent: CoordinatorId) -> Option<Presentation> {
        self.validate(parent);
        let c = self.child[parent.idx as usize];
        if c == INVALID {
            return None;
        }
        self.presentation[c as usize].take()
    }

    /// Frees `parent`'s child and every deeper level, clearing the link.
    ///
    /// Descriptors still held by the freed slots are dropped without firing
    /// any callbacks; the platform tears the native sub-stack down together
    /// with the dismissed controller.
    pub(crate) fn release_subtree(&mut self, parent: CoordinatorId) {
        self.validate(parent);
        let mut idx = self.child[parent.idx as usize];
        self.child[parent.idx as usize] = INVALID;
        while idx != INVALID {
            let next = self.child[idx as usize];
            self.free_slot(idx);
            idx = next;
        }
    }

    /// Frees a single slot: drops its state, bumps the generation so old
    /// handles immediately fail validation, and recycles the index.
    fn free_slot(&mut self, idx: u32) {
        self.parent[idx as usize] = INVALID;
        self.child[idx as usize] = INVALID;
        self.presentation[idx as usize] = None;
        self.controller[idx as usize] = None;
        self.attempt_observers[idx as usize].clear();
        self.generation[idx as usize] += 1;
        self.free_list.push(idx);
    }

    // -- Internal helpers --

    /// Panics if the handle is stale.
    fn validate(&self, id: CoordinatorId) {
        assert!(
            id.idx < self.len && self.generation[id.idx as usize] == id.generation,
            "stale CoordinatorId: {id:?} (current gen: {})",
            if id.idx < self.len {
                self.generation[id.idx as usize]
            } else {
                u32::MAX
            }
        );
    }
}
