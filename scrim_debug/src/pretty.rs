// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).
//! [`render_chain`] dumps the current modal stack of a
//! [`CoordinatorChain`](scrim_core::chain::CoordinatorChain) as indented text.

use std::io::Write;

use scrim_core::chain::CoordinatorChain;
use scrim_core::presentation::PresentationStyle;
use scrim_core::trace::{AttemptEvent, DismissEvent, PresentEvent, ReplaceEvent, TraceSink};

/// Writes human-readable trace lines to a [`Write`](std::io::Write)
/// destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }
}

fn style_name(style: PresentationStyle) -> &'static str {
    match style {
        PresentationStyle::Automatic => "automatic",
        PresentationStyle::FullScreen => "full-screen",
        PresentationStyle::PageSheet => "page-sheet",
        PresentationStyle::FormSheet => "form-sheet",
        PresentationStyle::Popover { .. } => "popover",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_present(&mut self, e: &PresentEvent) {
        let _ = writeln!(
            self.writer,
            "[present] slot={}@gen{} ctrl={} style={}",
            e.coordinator.index(),
            e.coordinator.generation(),
            e.controller.0,
            style_name(e.style),
        );
    }

    fn on_replace(&mut self, e: &ReplaceEvent) {
        let _ = writeln!(
            self.writer,
            "[replace] slot={}@gen{} ctrl={} view={}",
            e.coordinator.index(),
            e.coordinator.generation(),
            e.controller.0,
            e.content.0,
        );
    }

    fn on_dismiss(&mut self, e: &DismissEvent) {
        let ctrl = e
            .controller
            .map_or_else(|| "-".to_string(), |c| c.0.to_string());
        let _ = writeln!(
            self.writer,
            "[dismiss] slot={}@gen{} ctrl={ctrl}",
            e.coordinator.index(),
            e.coordinator.generation(),
        );
    }

    fn on_attempt(&mut self, e: &AttemptEvent) {
        let _ = writeln!(
            self.writer,
            "[attempt] slot={}@gen{} observers={}",
            e.coordinator.index(),
            e.coordinator.generation(),
            e.observers,
        );
    }
}

/// Renders the live modal stacks of a chain as indented text, one line per
/// level, roots first.
#[must_use]
pub fn render_chain(chain: &CoordinatorChain) -> String {
    let mut out = String::new();
    for root in chain.roots() {
        let mut depth = 0usize;
        let mut current = Some(root);
        while let Some(id) = current {
            let style = chain
                .presentation(id)
                .map_or("root", |p| style_name(p.style()));
            let ctrl = chain
                .controller(id)
                .map_or_else(|| "-".to_string(), |c| c.0.to_string());
            out.push_str(&format!(
                "{:indent$}slot {}@gen{} [{style}] ctrl={ctrl}\n",
                "",
                id.index(),
                id.generation(),
                indent = depth * 2,
            ));
            depth += 1;
            current = chain.child_of(id);
        }
    }
    out
}
