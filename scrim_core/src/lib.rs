// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinator chain bridging declarative modal presentations onto a
//! controller hierarchy.
//!
//! `scrim_core` lets declarative view code trigger and observe native modal
//! presentations (sheets, full-screen covers, popovers) without talking to
//! the platform directly. It is `no_std` compatible (with `alloc`) and uses
//! array-based storage with generational index handles, so back-references
//! between presentation levels carry no ownership and stale handles are
//! detected structurally.
//!
//! # Architecture
//!
//! The crate is organized around a chain of presentation levels, one slot
//! per active modal, mutated through synchronous host calls:
//!
//! ```text
//!   declarative frontend
//!       │ present_view / present
//!       ▼
//!   Coordinator ──► CoordinatorChain (slots, parent/child links)
//!       │                                │
//!       │ instantiate / present /        │ did_dismiss /
//!       │ replace_content / dismiss      │ did_attempt_to_dismiss
//!       ▼                                ▼
//!   HostController ◄──────────── platform dismiss delegate
//! ```
//!
//! **[`chain`]** — The [`CoordinatorChain`](chain::CoordinatorChain) arena of
//! presentation slots and the [`Coordinator`](chain::Coordinator) borrow that
//! runs present and dismiss operations against a host.
//!
//! **[`presentation`]** — The immutable [`Presentation`](presentation::Presentation)
//! descriptor (content producer, completion callback, dismissal policy,
//! binding reset, style).
//!
//! **[`host`]** — The [`HostController`](host::HostController) trait that
//! hosting-controller integrations implement to perform native presentation
//! work.
//!
//! **[`presenter`]** — The [`DynamicPresenter`](presenter::DynamicPresenter)
//! and [`DismissObserver`](presenter::DismissObserver) capability traits a
//! coordinator satisfies.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! instrumenting outbound native calls, with zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod chain;
pub mod host;
pub mod presentation;
pub mod presenter;
pub mod trace;
