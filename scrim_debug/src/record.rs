// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory recording of coordinator trace events.
//!
//! [`RecorderSink`] implements [`TraceSink`] and appends every event to an
//! owned log in arrival order. Pair with [`json::export`](crate::json::export)
//! for post-mortem analysis of a presentation session.

use scrim_core::trace::{AttemptEvent, DismissEvent, PresentEvent, ReplaceEvent, TraceSink};

/// One recorded coordinator event.
#[derive(Clone, Copy, Debug)]
pub enum RecordedEvent {
    /// A new level was presented.
    Present(PresentEvent),
    /// Displayed content was replaced in place.
    Replace(ReplaceEvent),
    /// A level was dismissed.
    Dismiss(DismissEvent),
    /// An uncommitted interactive dismiss attempt was reported.
    Attempt(AttemptEvent),
}

/// A [`TraceSink`] that stores events in memory.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in arrival order.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Clears the recording.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TraceSink for RecorderSink {
    fn on_present(&mut self, e: &PresentEvent) {
        self.events.push(RecordedEvent::Present(*e));
    }

    fn on_replace(&mut self, e: &ReplaceEvent) {
        self.events.push(RecordedEvent::Replace(*e));
    }

    fn on_dismiss(&mut self, e: &DismissEvent) {
        self.events.push(RecordedEvent::Dismiss(*e));
    }

    fn on_attempt(&mut self, e: &AttemptEvent) {
        self.events.push(RecordedEvent::Attempt(*e));
    }
}

#[cfg(test)]
mod tests {
    use scrim_core::chain::{ControllerId, Coordinator, CoordinatorChain, ViewId};
    use scrim_core::host::HostController;
    use scrim_core::presentation::{Presentation, PresentationStyle};

    use super::*;

    struct NullHost(u32);

    impl HostController for NullHost {
        fn instantiate(
            &mut self,
            _presentation: &Presentation,
            _coordinator: scrim_core::chain::CoordinatorId,
        ) -> ControllerId {
            self.0 += 1;
            ControllerId(self.0)
        }

        fn present(&mut self, _from: ControllerId, _controller: ControllerId, _animated: bool) {}

        fn dismiss(&mut self, _controller: ControllerId, _animated: bool) {}

        fn replace_content(&mut self, _controller: ControllerId, _content: ViewId) {}

        fn style(&self, _controller: ControllerId) -> PresentationStyle {
            PresentationStyle::Automatic
        }

        fn set_dismiss_delegate(
            &mut self,
            _controller: ControllerId,
            _coordinator: scrim_core::chain::CoordinatorId,
        ) {
        }
    }

    #[test]
    fn records_present_and_dismiss() {
        let mut chain = CoordinatorChain::new();
        let root = chain.create_root();
        let mut host = NullHost(0);
        let mut sink = RecorderSink::new();

        Coordinator::new(&mut chain, &mut host, root).attach_controller(ControllerId(0));
        Coordinator::new(&mut chain, &mut host, root)
            .traced(&mut sink)
            .present(Presentation::new(PresentationStyle::PageSheet, || {
                ViewId(1)
            }));
        Coordinator::new(&mut chain, &mut host, root)
            .traced(&mut sink)
            .dismiss_presented();

        assert!(matches!(sink.events()[0], RecordedEvent::Present(_)));
        assert!(matches!(sink.events()[1], RecordedEvent::Dismiss(_)));
        assert_eq!(sink.events().len(), 2);
    }
}
