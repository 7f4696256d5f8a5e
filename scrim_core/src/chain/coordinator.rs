// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Present and dismiss operations on the coordinator chain.
//!
//! Operations run through a [`Coordinator`], a short-lived borrow binding a
//! chain, a host, and one level's handle. Presenting either updates the
//! displayed content in place (same style) or tears down the existing child
//! and opens a new level; dismissal flows upward, with the leaf asking its
//! parent to perform the teardown after the policy gate and a staleness
//! check pass.
//!
//! Teardown order is fixed: native dismiss, reference clear, conditional
//! binding reset, completion callback — exactly once per successful
//! dismissal, regardless of whether the dismissal was programmatic or
//! committed interactively by the platform.

use crate::host::HostController;
use crate::presentation::Presentation;
use crate::trace::{DismissEvent, PresentEvent, ReplaceEvent, TraceSink, Tracer};

use super::id::{ControllerId, CoordinatorId};
use super::store::CoordinatorChain;

/// A borrow of one presentation level, bound to a chain and a host.
///
/// All operations are synchronous and run on the caller's (main) scheduling
/// context. Operations on a stale handle are silent no-ops, matching the
/// chain's policy that dismissing an already-replaced level does nothing.
pub struct Coordinator<'a, H: HostController> {
    pub(crate) chain: &'a mut CoordinatorChain,
    pub(crate) host: &'a mut H,
    pub(crate) tracer: Tracer<'a>,
    pub(crate) id: CoordinatorId,
}

impl<H: HostController> core::fmt::Debug for Coordinator<'_, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Coordinator")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl<'a, H: HostController> Coordinator<'a, H> {
    /// Binds `id` in `chain` to `host` for a sequence of operations.
    #[must_use]
    pub fn new(chain: &'a mut CoordinatorChain, host: &'a mut H, id: CoordinatorId) -> Self {
        Self {
            chain,
            host,
            tracer: Tracer::none(),
            id,
        }
    }

    /// Routes this coordinator's outbound native calls through `sink`.
    #[must_use]
    pub fn traced(mut self, sink: &'a mut dyn TraceSink) -> Self {
        self.tracer = Tracer::new(sink);
        self
    }

    /// Returns the handle this coordinator operates on.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> CoordinatorId {
        self.id
    }

    /// Attaches an existing native controller to this level and registers
    /// the level as its interactive-dismiss delegate.
    ///
    /// Root levels need this before they can present anything; presented
    /// levels get their controller wired automatically.
    pub fn attach_controller(&mut self, controller: ControllerId) {
        if !self.chain.is_alive(self.id) {
            return;
        }
        self.chain.set_controller(self.id, Some(controller));
        self.host.set_dismiss_delegate(controller, self.id);
    }

    /// Presents `presentation` from this level.
    ///
    /// If the currently displayed controller's configured style equals the
    /// descriptor's style, the displayed content is replaced in place and no
    /// callbacks fire. Otherwise any existing child is dismissed first, then
    /// a new level and controller are created and presented.
    ///
    /// Dropped silently if this level has no live native controller.
    pub fn present(&mut self, presentation: Presentation) {
        present_inner(self.chain, self.host, &mut self.tracer, self.id, presentation);
    }

    /// Asks this level's parent to dismiss it.
    ///
    /// No-op for roots, when the dismissal policy answers false, or when
    /// this level is no longer its parent's recorded child.
    pub fn dismiss_self(&mut self) {
        dismiss_self_inner(self.chain, self.host, &mut self.tracer, self.id);
    }

    /// Dismisses the level currently presented by this one.
    ///
    /// No-op if nothing is presented. Runs the fixed teardown order and
    /// fires the child's completion callback exactly once.
    pub fn dismiss_presented(&mut self) {
        dismiss_presented_inner(self.chain, self.host, &mut self.tracer, self.id);
    }
}

fn present_inner<H: HostController>(
    chain: &mut CoordinatorChain,
    host: &mut H,
    tracer: &mut Tracer<'_>,
    id: CoordinatorId,
    presentation: Presentation,
) {
    if !chain.is_alive(id) {
        return;
    }

    // Same style already displayed: overwrite the content slot in place.
    // The stored descriptor (callbacks, policy) stays as it was.
    if let Some(child) = chain.child_of(id)
        && let Some(controller) = chain.controller(child)
        && host.style(controller) == presentation.style()
    {
        let content = presentation.content();
        host.replace_content(controller, content);
        tracer.replace(&ReplaceEvent {
            coordinator: id,
            controller,
            content,
        });
        return;
    }

    // Nothing to present from.
    let Some(own_controller) = chain.controller(id) else {
        return;
    };

    if let Some(child) = chain.child_of(id) {
        dismiss_self_inner(chain, host, tracer, child);
        if chain.child_of(id).is_some() {
            // The child's policy vetoed the dismissal, but the new
            // presentation replaces that chain regardless. Free the stale
            // levels without firing their callbacks.
            chain.release_subtree(id);
        }
    }

    let style = presentation.style();
    let child = chain.create_presented(id, presentation);
    let Some(descriptor) = chain.presentation(child) else {
        return;
    };
    let controller = host.instantiate(descriptor, child);
    chain.set_controller(child, Some(controller));
    host.present(own_controller, controller, true);
    tracer.present(&PresentEvent {
        coordinator: child,
        controller,
        style,
    });
}

fn dismiss_self_inner<H: HostController>(
    chain: &mut CoordinatorChain,
    host: &mut H,
    tracer: &mut Tracer<'_>,
    id: CoordinatorId,
) {
    if !chain.is_alive(id) {
        return;
    }
    let Some(presentation) = chain.presentation(id) else {
        return;
    };
    if !(presentation.should_dismiss)() {
        return;
    }
    let Some(parent) = chain.parent_of(id) else {
        return;
    };
    if chain.child_of(parent) != Some(id) {
        return;
    }
    dismiss_presented_inner(chain, host, tracer, parent);
}

fn dismiss_presented_inner<H: HostController>(
    chain: &mut CoordinatorChain,
    host: &mut H,
    tracer: &mut Tracer<'_>,
    id: CoordinatorId,
) {
    if !chain.is_alive(id) {
        return;
    }
    let Some(child) = chain.child_of(id) else {
        return;
    };
    if chain.presentation(child).is_none() {
        return;
    }

    let controller = chain.controller(child);
    if let Some(controller) = controller {
        host.dismiss(controller, true);
    }
    chain.set_controller(child, None);
    tracer.dismiss(&DismissEvent {
        coordinator: child,
        controller,
    });

    let presentation = chain.take_presented(id);
    chain.release_subtree(id);

    if let Some(presentation) = presentation {
        // Re-evaluate the policy: if the dismissal went through despite a
        // veto (interactive dismiss committed by the platform, or state
        // changed since the request gate), the caller's binding re-syncs.
        if !(presentation.should_dismiss)() {
            (presentation.reset_binding)();
        }
        if let Some(on_dismiss) = presentation.on_dismiss {
            on_dismiss();
        }
    }
}
