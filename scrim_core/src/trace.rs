// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for coordinator operations.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! coordinator operations call at each outbound native call. All method
//! bodies default to no-ops, so implementing only the events you care about
//! is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing (zero
//! overhead). When **on**, each method performs a single `Option` branch
//! before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

use crate::chain::{ControllerId, CoordinatorId, ViewId};
use crate::presentation::PresentationStyle;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a new level is presented natively.
#[derive(Clone, Copy, Debug)]
pub struct PresentEvent {
    /// The newly created level.
    pub coordinator: CoordinatorId,
    /// The controller instantiated for it.
    pub controller: ControllerId,
    /// The style it was configured with.
    pub style: PresentationStyle,
}

/// Emitted when displayed content is replaced in place.
#[derive(Clone, Copy, Debug)]
pub struct ReplaceEvent {
    /// The level whose displayed child content was replaced.
    pub coordinator: CoordinatorId,
    /// The controller whose content slot was overwritten.
    pub controller: ControllerId,
    /// The new content.
    pub content: ViewId,
}

/// Emitted when a level is dismissed natively.
#[derive(Clone, Copy, Debug)]
pub struct DismissEvent {
    /// The level being torn down.
    pub coordinator: CoordinatorId,
    /// Its controller at teardown time, if still attached.
    pub controller: Option<ControllerId>,
}

/// Emitted when the platform reports an uncommitted dismiss attempt.
#[derive(Clone, Copy, Debug)]
pub struct AttemptEvent {
    /// The level the attempt targeted.
    pub coordinator: CoordinatorId,
    /// How many observers were notified.
    pub observers: usize,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from coordinator operations.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a new level is presented.
    fn on_present(&mut self, e: &PresentEvent) {
        _ = e;
    }

    /// Called when content is replaced in place.
    fn on_replace(&mut self, e: &ReplaceEvent) {
        _ = e;
    }

    /// Called when a level is dismissed.
    fn on_dismiss(&mut self, e: &DismissEvent) {
        _ = e;
    }

    /// Called when an uncommitted dismiss attempt is reported.
    fn on_attempt(&mut self, e: &AttemptEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`PresentEvent`].
    #[inline]
    pub fn present(&mut self, e: &PresentEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_present(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ReplaceEvent`].
    #[inline]
    pub fn replace(&mut self, e: &ReplaceEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_replace(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DismissEvent`].
    #[inline]
    pub fn dismiss(&mut self, e: &DismissEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_dismiss(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`AttemptEvent`].
    #[inline]
    pub fn attempt(&mut self, e: &AttemptEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_attempt(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}
