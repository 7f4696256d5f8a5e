// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording host double for coordinator-chain tests and demos.
//!
//! [`RecordingHost`] implements
//! [`HostController`](scrim_core::host::HostController) without any platform
//! plumbing: it hands out controller handles, remembers each controller's
//! configured style, content, and dismiss delegate, and appends every call
//! to an ordered [`HostEvent`] log. Tests drive a chain against it and
//! assert on the exact sequence of outbound native calls.
//!
//! Interactive dismissal is simulated by reading
//! [`delegate_of`](RecordingHost::delegate_of) for a controller and invoking
//! the [`DismissObserver`](scrim_core::presenter::DismissObserver) entry
//! points on that coordinator, the way the platform drives its delegate.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use scrim_core::chain::{ControllerId, CoordinatorId, ViewId};
use scrim_core::host::HostController;
use scrim_core::presentation::{Presentation, PresentationStyle};

/// One recorded outbound native call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostEvent {
    /// A hosting controller was constructed for a new level.
    Instantiate {
        /// The new controller.
        controller: ControllerId,
        /// The level it hosts.
        coordinator: CoordinatorId,
        /// The style it was configured with.
        style: PresentationStyle,
        /// The initial content produced by the descriptor.
        content: ViewId,
    },
    /// A controller was presented from another.
    Present {
        /// The presenting controller.
        from: ControllerId,
        /// The presented controller.
        controller: ControllerId,
        /// Whether the platform would animate.
        animated: bool,
    },
    /// A controller (and its sub-stack) was dismissed.
    Dismiss {
        /// The dismissed controller.
        controller: ControllerId,
        /// Whether the platform would animate.
        animated: bool,
    },
    /// A controller's displayed content was overwritten in place.
    ReplaceContent {
        /// The controller whose content slot was rewritten.
        controller: ControllerId,
        /// The new content.
        content: ViewId,
    },
    /// A coordinator was registered as a controller's dismiss delegate.
    SetDismissDelegate {
        /// The controller.
        controller: ControllerId,
        /// The delegate coordinator.
        coordinator: CoordinatorId,
    },
}

/// A [`HostController`] that records every call instead of touching a
/// platform.
#[derive(Debug, Default)]
pub struct RecordingHost {
    events: Vec<HostEvent>,
    styles: Vec<PresentationStyle>,
    contents: Vec<ViewId>,
    delegates: Vec<Option<CoordinatorId>>,
    presented: Vec<bool>,
}

impl RecordingHost {
    /// Creates an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a pre-existing controller (the window's root) without
    /// recording an event, and returns its handle.
    ///
    /// Root controllers exist before the chain does; this mirrors attaching
    /// a chain root to a live window.
    pub fn install_root(&mut self, style: PresentationStyle) -> ControllerId {
        self.push_controller(style, ViewId(0), None, true)
    }

    /// Returns the recorded events in call order.
    #[must_use]
    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }

    /// Clears the recorded events, keeping controller state.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Returns how many controllers exist (including installed roots).
    #[must_use]
    pub fn controllers(&self) -> usize {
        self.styles.len()
    }

    /// Returns how many `Present` calls were recorded.
    #[must_use]
    pub fn presents(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, HostEvent::Present { .. }))
            .count()
    }

    /// Returns how many `Dismiss` calls were recorded.
    #[must_use]
    pub fn dismisses(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, HostEvent::Dismiss { .. }))
            .count()
    }

    /// Returns the current content of a controller.
    ///
    /// # Panics
    ///
    /// Panics if the handle was never issued by this host.
    #[must_use]
    pub fn content_of(&self, controller: ControllerId) -> ViewId {
        self.contents[controller.0 as usize]
    }

    /// Returns the dismiss delegate registered for a controller, if any.
    ///
    /// # Panics
    ///
    /// Panics if the handle was never issued by this host.
    #[must_use]
    pub fn delegate_of(&self, controller: ControllerId) -> Option<CoordinatorId> {
        self.delegates[controller.0 as usize]
    }

    /// Returns whether a controller is currently presented.
    ///
    /// # Panics
    ///
    /// Panics if the handle was never issued by this host.
    #[must_use]
    pub fn is_presented(&self, controller: ControllerId) -> bool {
        self.presented[controller.0 as usize]
    }

    fn push_controller(
        &mut self,
        style: PresentationStyle,
        content: ViewId,
        delegate: Option<CoordinatorId>,
        presented: bool,
    ) -> ControllerId {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "controller counts stay far below u32::MAX"
        )]
        let id = ControllerId(self.styles.len() as u32);
        self.styles.push(style);
        self.contents.push(content);
        self.delegates.push(delegate);
        self.presented.push(presented);
        id
    }
}

impl HostController for RecordingHost {
    fn instantiate(
        &mut self,
        presentation: &Presentation,
        coordinator: CoordinatorId,
    ) -> ControllerId {
        let style = presentation.style();
        let content = presentation.content();
        let controller = self.push_controller(style, content, Some(coordinator), false);
        self.events.push(HostEvent::Instantiate {
            controller,
            coordinator,
            style,
            content,
        });
        controller
    }

    fn present(&mut self, from: ControllerId, controller: ControllerId, animated: bool) {
        self.presented[controller.0 as usize] = true;
        self.events.push(HostEvent::Present {
            from,
            controller,
            animated,
        });
    }

    fn dismiss(&mut self, controller: ControllerId, animated: bool) {
        self.presented[controller.0 as usize] = false;
        self.events.push(HostEvent::Dismiss {
            controller,
            animated,
        });
    }

    fn replace_content(&mut self, controller: ControllerId, content: ViewId) {
        self.contents[controller.0 as usize] = content;
        self.events.push(HostEvent::ReplaceContent {
            controller,
            content,
        });
    }

    fn style(&self, controller: ControllerId) -> PresentationStyle {
        self.styles[controller.0 as usize]
    }

    fn set_dismiss_delegate(&mut self, controller: ControllerId, coordinator: CoordinatorId) {
        self.delegates[controller.0 as usize] = Some(coordinator);
        self.events.push(HostEvent::SetDismissDelegate {
            controller,
            coordinator,
        });
    }
}

#[cfg(test)]
mod tests {
    use core::cell::{Cell, RefCell};

    use alloc::rc::Rc;
    use alloc::vec;

    use scrim_core::chain::{Coordinator, CoordinatorChain};
    use scrim_core::presentation::Presentation;
    use scrim_core::presenter::{DismissObserver, DynamicPresenter};

    use super::*;

    fn rooted() -> (CoordinatorChain, RecordingHost, CoordinatorId) {
        let mut chain = CoordinatorChain::new();
        let root = chain.create_root();
        let mut host = RecordingHost::new();
        let ctrl = host.install_root(PresentationStyle::Automatic);
        Coordinator::new(&mut chain, &mut host, root).attach_controller(ctrl);
        host.clear_events();
        (chain, host, root)
    }

    fn sheet(view: u32) -> Presentation {
        Presentation::new(PresentationStyle::PageSheet, move || ViewId(view))
    }

    // Scenario A: presenting the same style twice replaces content in place.
    #[test]
    fn repeat_present_with_same_style_updates_in_place() {
        let (mut chain, mut host, root) = rooted();

        Coordinator::new(&mut chain, &mut host, root).present(sheet(1));
        let child = chain.child_of(root).expect("child created");
        let ctrl = chain.controller(child).expect("controller attached");
        assert_eq!(host.presents(), 1);
        assert_eq!(host.content_of(ctrl), ViewId(1));

        Coordinator::new(&mut chain, &mut host, root).present(sheet(2));

        assert_eq!(chain.child_of(root), Some(child), "same level survives");
        assert_eq!(host.controllers(), 2, "no new controller");
        assert_eq!(host.presents(), 1, "no second native present");
        assert_eq!(host.content_of(ctrl), ViewId(2), "content replaced");
        assert_eq!(
            host.events().last(),
            Some(&HostEvent::ReplaceContent {
                controller: ctrl,
                content: ViewId(2),
            })
        );
    }

    // Scenario B: a different style tears the sheet down and presents anew.
    #[test]
    fn different_style_dismisses_old_child_before_presenting() {
        let (mut chain, mut host, root) = rooted();

        Coordinator::new(&mut chain, &mut host, root).present(sheet(1));
        let old_ctrl = chain
            .controller(chain.child_of(root).expect("child created"))
            .expect("controller attached");
        host.clear_events();

        let cover = Presentation::new(PresentationStyle::FullScreen, || ViewId(2));
        Coordinator::new(&mut chain, &mut host, root).present(cover);

        let new_child = chain.child_of(root).expect("replacement child");
        let new_ctrl = chain.controller(new_child).expect("controller attached");
        assert!(!host.is_presented(old_ctrl));
        assert!(host.is_presented(new_ctrl));
        assert_eq!(
            host.events(),
            &[
                HostEvent::Dismiss {
                    controller: old_ctrl,
                    animated: true,
                },
                HostEvent::Instantiate {
                    controller: new_ctrl,
                    coordinator: new_child,
                    style: PresentationStyle::FullScreen,
                    content: ViewId(2),
                },
                HostEvent::Present {
                    from: ControllerId(0),
                    controller: new_ctrl,
                    animated: true,
                },
            ]
        );
    }

    // Scenario C: platform-committed dismiss with an allowing policy.
    #[test]
    fn interactive_dismiss_with_allowing_policy() {
        let (mut chain, mut host, root) = rooted();

        let dismissed = Rc::new(Cell::new(0u32));
        let reset = Rc::new(Cell::new(0u32));
        let dismissed2 = Rc::clone(&dismissed);
        let reset2 = Rc::clone(&reset);
        let presentation = sheet(1)
            .on_dismiss(move || dismissed2.set(dismissed2.get() + 1))
            .dismiss_policy(|| true, move || reset2.set(reset2.get() + 1));
        Coordinator::new(&mut chain, &mut host, root).present(presentation);
        let ctrl = chain
            .controller(chain.child_of(root).expect("child created"))
            .expect("controller attached");

        // The platform calls its registered delegate.
        let delegate = host.delegate_of(ctrl).expect("delegate registered");
        Coordinator::new(&mut chain, &mut host, delegate).did_dismiss();

        assert!(chain.child_of(root).is_none());
        assert_eq!(host.dismisses(), 1);
        assert_eq!(dismissed.get(), 1, "completion fires exactly once");
        assert_eq!(reset.get(), 0, "no binding reset when policy allows");
    }

    // Scenario D: identical, but the policy answers false at teardown.
    #[test]
    fn interactive_dismiss_over_veto_resets_binding() {
        let (mut chain, mut host, root) = rooted();

        let dismissed = Rc::new(Cell::new(0u32));
        let reset = Rc::new(Cell::new(0u32));
        // Allows the dismissal at the request gate, answers false when
        // teardown re-evaluates (the external binding was already cleared).
        let answers = Rc::new(RefCell::new(vec![false, true]));
        let dismissed2 = Rc::clone(&dismissed);
        let reset2 = Rc::clone(&reset);
        let answers2 = Rc::clone(&answers);
        let presentation = sheet(1)
            .on_dismiss(move || dismissed2.set(dismissed2.get() + 1))
            .dismiss_policy(
                move || answers2.borrow_mut().pop().unwrap_or(false),
                move || reset2.set(reset2.get() + 1),
            );
        Coordinator::new(&mut chain, &mut host, root).present(presentation);
        let ctrl = chain
            .controller(chain.child_of(root).expect("child created"))
            .expect("controller attached");

        let delegate = host.delegate_of(ctrl).expect("delegate registered");
        Coordinator::new(&mut chain, &mut host, delegate).did_dismiss();

        assert!(chain.child_of(root).is_none());
        assert_eq!(reset.get(), 1, "binding reset fires exactly once");
        assert_eq!(dismissed.get(), 1, "completion still fires exactly once");
    }

    // P1: any sequence of presents leaves at most one child, whose
    // controller matches the most recent non-in-place present.
    #[test]
    fn present_sequence_keeps_single_child() {
        let (mut chain, mut host, root) = rooted();

        Coordinator::new(&mut chain, &mut host, root).present(sheet(1));
        Coordinator::new(&mut chain, &mut host, root)
            .present(Presentation::new(PresentationStyle::FullScreen, || ViewId(2)));
        Coordinator::new(&mut chain, &mut host, root)
            .present(Presentation::new(PresentationStyle::FormSheet, || ViewId(3)));
        Coordinator::new(&mut chain, &mut host, root)
            .present(Presentation::new(PresentationStyle::FormSheet, || ViewId(4)));

        let child = chain.child_of(root).expect("one child remains");
        let ctrl = chain.controller(child).expect("controller attached");
        assert_eq!(host.style(ctrl), PresentationStyle::FormSheet);
        assert_eq!(host.content_of(ctrl), ViewId(4), "last present updated in place");
        assert_eq!(host.controllers(), 4, "root + three instantiated");
        assert_eq!(host.presents(), 3, "in-place update presented nothing");
    }

    // P4: a vetoed programmatic request produces zero side effects.
    #[test]
    fn vetoed_request_records_no_host_calls() {
        let (mut chain, mut host, root) = rooted();

        let presentation = sheet(1).dismiss_policy(|| false, || {});
        Coordinator::new(&mut chain, &mut host, root).present(presentation);
        let child = chain.child_of(root).expect("child created");
        host.clear_events();

        Coordinator::new(&mut chain, &mut host, child).dismiss_self();

        assert!(host.events().is_empty());
        assert_eq!(chain.child_of(root), Some(child));
    }

    // Popover styles compare by anchor, so moving the anchor re-presents.
    #[test]
    fn moved_popover_anchor_is_a_new_presentation() {
        let (mut chain, mut host, root) = rooted();

        let anchor = PresentationStyle::Popover {
            anchor: kurbo::Rect::new(0.0, 0.0, 44.0, 44.0),
        };
        Coordinator::new(&mut chain, &mut host, root)
            .present(Presentation::new(anchor, || ViewId(1)));
        assert_eq!(host.presents(), 1);

        let moved = PresentationStyle::Popover {
            anchor: kurbo::Rect::new(100.0, 0.0, 44.0, 44.0),
        };
        Coordinator::new(&mut chain, &mut host, root)
            .present(Presentation::new(moved, || ViewId(1)));

        assert_eq!(host.dismisses(), 1, "old popover torn down");
        assert_eq!(host.presents(), 2, "new popover presented");
    }

    // The generic entry point wires always-true policy and a no-op reset.
    #[test]
    fn present_view_entry_point_round_trips() {
        let (mut chain, mut host, root) = rooted();

        let fired = Rc::new(Cell::new(0u32));
        let fired2 = Rc::clone(&fired);
        Coordinator::new(&mut chain, &mut host, root).present_view(
            ViewId(5),
            Some(alloc::boxed::Box::new(move || fired2.set(fired2.get() + 1))),
            PresentationStyle::PageSheet,
        );
        let child = chain.child_of(root).expect("child created");
        let ctrl = chain.controller(child).expect("controller attached");
        assert_eq!(host.content_of(ctrl), ViewId(5));

        let delegate = host.delegate_of(ctrl).expect("delegate registered");
        Coordinator::new(&mut chain, &mut host, delegate).did_dismiss();

        assert!(chain.child_of(root).is_none());
        assert_eq!(fired.get(), 1);
    }
}
