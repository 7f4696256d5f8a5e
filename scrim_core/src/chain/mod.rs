// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinator chain data model.
//!
//! A *level* is one entry in the nested-modal stack. Each level has:
//!
//! - An identity ([`CoordinatorId`]) — a generational handle that becomes
//!   stale when the level is dismissed, so "is this still the coordinator I
//!   presented?" is answered structurally instead of by reference identity.
//! - Topology — a non-owning `parent` back-index and at most one `child`,
//!   the single presentation this level currently displays.
//! - A [`Presentation`](crate::presentation::Presentation) descriptor, set
//!   when the level is created and never replaced (`None` for roots).
//! - A native [`ControllerId`] reference, set on present and cleared on
//!   dismiss.
//! - Registered attempt observers, notified when the platform reports an
//!   uncommitted interactive dismiss.
//!
//! Levels are stored in parallel arrays with index-based handles; freed
//! slots are recycled through a free list with a generation bump.
//!
//! # Operations
//!
//! [`Coordinator`] binds a level to a [`HostController`](crate::host::HostController)
//! and runs the present/dismiss operations; see its documentation for the
//! in-place-update and teardown-order contracts.

mod coordinator;
mod id;
mod store;

pub use coordinator::Coordinator;
pub use id::{INVALID, ControllerId, CoordinatorId, ViewId};
pub use store::CoordinatorChain;
