// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of recorded coordinator events.
//!
//! [`export`] reads events from a [`RecorderSink`](crate::record::RecorderSink)
//! and writes a JSON array to the given writer, one object per event with a
//! monotonically increasing sequence number.

use std::io::{self, Write};

use serde_json::{Value, json};

use scrim_core::presentation::PresentationStyle;

use crate::record::RecordedEvent;

/// Exports recorded events as a JSON array.
///
/// Each event becomes one object carrying its sequence number, kind, the
/// affected coordinator slot and generation, and event-specific fields.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let mut out: Vec<Value> = Vec::new();

    for (seq, recorded) in events.iter().enumerate() {
        match recorded {
            RecordedEvent::Present(e) => {
                out.push(json!({
                    "seq": seq,
                    "kind": "present",
                    "coordinator": e.coordinator.index(),
                    "generation": e.coordinator.generation(),
                    "controller": e.controller.0,
                    "style": style_name(e.style),
                }));
            }
            RecordedEvent::Replace(e) => {
                out.push(json!({
                    "seq": seq,
                    "kind": "replace",
                    "coordinator": e.coordinator.index(),
                    "generation": e.coordinator.generation(),
                    "controller": e.controller.0,
                    "content": e.content.0,
                }));
            }
            RecordedEvent::Dismiss(e) => {
                out.push(json!({
                    "seq": seq,
                    "kind": "dismiss",
                    "coordinator": e.coordinator.index(),
                    "generation": e.coordinator.generation(),
                    "controller": e.controller.map(|c| c.0),
                }));
            }
            RecordedEvent::Attempt(e) => {
                out.push(json!({
                    "seq": seq,
                    "kind": "attempt",
                    "coordinator": e.coordinator.index(),
                    "generation": e.coordinator.generation(),
                    "observers": e.observers,
                }));
            }
        }
    }

    serde_json::to_writer_pretty(&mut *writer, &out)?;
    writer.write_all(b"\n")
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

#[cfg(test)]
mod tests {
    use scrim_core::chain::{ControllerId, CoordinatorId, ViewId};
    use scrim_core::trace::{DismissEvent, PresentEvent, ReplaceEvent, TraceSink};

    use crate::record::RecorderSink;

    use super::*;

    fn slot(idx: u32) -> CoordinatorId {
        // Round-trip a handle through its public shape for test fixtures.
        let mut chain = scrim_core::chain::CoordinatorChain::new();
        let mut id = chain.create_root();
        for _ in 0..idx {
            id = chain.create_root();
        }
        id
    }

    #[test]
    fn export_produces_one_object_per_event() {
        let mut sink = RecorderSink::new();
        sink.on_present(&PresentEvent {
            coordinator: slot(1),
            controller: ControllerId(1),
            style: PresentationStyle::PageSheet,
        });
        sink.on_replace(&ReplaceEvent {
            coordinator: slot(0),
            controller: ControllerId(1),
            content: ViewId(2),
        });
        sink.on_dismiss(&DismissEvent {
            coordinator: slot(1),
            controller: None,
        });

        let mut buffer = Vec::new();
        export(sink.events(), &mut buffer).expect("export succeeds");
        let parsed: Vec<serde_json::Value> =
            serde_json::from_slice(&buffer).expect("valid JSON");

        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0]["kind"], "present");
        assert_eq!(parsed[0]["style"], "page-sheet");
        assert_eq!(parsed[1]["content"], 2);
        assert_eq!(parsed[2]["controller"], serde_json::Value::Null);
    }
}
