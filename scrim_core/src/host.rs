// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract for hosting-controller integrations.
//!
//! Scrim splits platform-specific work into *host* implementations. The
//! coordinator chain decides *whether* and *on what* to present or dismiss;
//! the host performs the native calls. A host provides:
//!
//! - **Controller construction** — [`instantiate`](HostController::instantiate)
//!   wraps declarative content in a native hosting controller configured with
//!   a descriptor's style and initial content, and registers the new
//!   coordinator as the controller's interactive-dismiss delegate.
//!
//! - **Presentation plumbing** — [`present`](HostController::present) and
//!   [`dismiss`](HostController::dismiss) map onto the platform's
//!   controller-presentation calls. Animations complete asynchronously at
//!   the platform level; the chain never awaits them.
//!
//! - **Content slot** — [`replace_content`](HostController::replace_content)
//!   overwrites a controller's displayed content for update-in-place, and
//!   [`style`](HostController::style) exposes the configured style the chain
//!   compares against an incoming descriptor.
//!
//! # Crate boundaries
//!
//! `scrim_core` owns the chain data model, the descriptor, and this contract
//! module. Host crates depend on `scrim_core` and provide platform glue;
//! `scrim_host_harness` provides a recording test double. Application code
//! depends on both and wires a root level to a live controller.

use crate::chain::{ControllerId, CoordinatorId, ViewId};
use crate::presentation::{Presentation, PresentationStyle};

/// Performs native presentation work on behalf of the coordinator chain.
///
/// Both real platform hosts and test doubles implement this trait, enabling
/// generic coordinator operations and recorded assertions.
pub trait HostController {
    /// Constructs a native hosting controller for `presentation`, configured
    /// with its style and initial content, and registers `coordinator` as
    /// the controller's interactive-dismiss delegate.
    fn instantiate(
        &mut self,
        presentation: &Presentation,
        coordinator: CoordinatorId,
    ) -> ControllerId;

    /// Presents `controller` from `from`.
    fn present(&mut self, from: ControllerId, controller: ControllerId, animated: bool);

    /// Dismisses `controller` and its presented sub-stack.
    fn dismiss(&mut self, controller: ControllerId, animated: bool);

    /// Overwrites the displayed content of `controller` in place.
    fn replace_content(&mut self, controller: ControllerId, content: ViewId);

    /// Returns the style `controller` was configured with.
    fn style(&self, controller: ControllerId) -> PresentationStyle;

    /// Registers `coordinator` as the interactive-dismiss delegate of an
    /// existing controller (used when attaching a root level).
    fn set_dismiss_delegate(&mut self, controller: ControllerId, coordinator: CoordinatorId);
}
