// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and JSON export for Scrim diagnostics.
//!
//! This crate provides [`TraceSink`](scrim_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-event output,
//!   plus [`pretty::render_chain`] for dumping the live modal stack.
//! - [`record::RecorderSink`] — in-memory recording of coordinator events.
//! - [`json::export`] — writes a recorded log as a JSON array.

pub mod json;
pub mod pretty;
pub mod record;
