// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability traits a coordinator satisfies.
//!
//! Following the capability-over-inheritance split, a
//! [`Coordinator`](crate::chain::Coordinator) plays two separate roles for
//! external collaborators:
//!
//! - [`DynamicPresenter`] — the simplified entry point declarative view code
//!   uses when it does not need dismissal-veto policy.
//! - [`DismissObserver`] — the role the platform's interactive-dismiss
//!   delegate machinery drives, unifying interactive and programmatic
//!   dismissal through the same policy-gated path.

use alloc::boxed::Box;

use crate::chain::{Coordinator, ViewId};
use crate::host::HostController;
use crate::presentation::{Presentation, PresentationStyle};
use crate::trace::AttemptEvent;

/// Generic present capability for content without dismissal policy.
pub trait DynamicPresenter {
    /// Presents `view` with the given style.
    ///
    /// The presentation is always dismissible and performs no binding reset;
    /// `on_dismiss`, if supplied, fires exactly once on full dismissal.
    fn present_view(
        &mut self,
        view: ViewId,
        on_dismiss: Option<Box<dyn FnOnce()>>,
        style: PresentationStyle,
    );
}

impl<H: HostController> DynamicPresenter for Coordinator<'_, H> {
    fn present_view(
        &mut self,
        view: ViewId,
        on_dismiss: Option<Box<dyn FnOnce()>>,
        style: PresentationStyle,
    ) {
        let mut presentation = Presentation::new(style, move || view);
        if let Some(callback) = on_dismiss {
            presentation = presentation.on_dismiss(callback);
        }
        self.present(presentation);
    }
}

/// The interactive-dismiss observer role of a presented level.
///
/// The platform registers a coordinator as its controller's dismiss
/// delegate; these entry points mirror the delegate's notifications.
pub trait DismissObserver {
    /// The user attempted an interactive dismiss but the platform did not
    /// commit it. Notifies registered observers; alters no state.
    fn did_attempt_to_dismiss(&mut self);

    /// The platform is about to dismiss. Reserved; no action.
    fn will_dismiss(&mut self) {}

    /// The platform fully committed an interactive dismiss. Runs the same
    /// policy-gated path as a programmatic dismiss request.
    fn did_dismiss(&mut self);
}

impl<H: HostController> DismissObserver for Coordinator<'_, H> {
    fn did_attempt_to_dismiss(&mut self) {
        if !self.chain.is_alive(self.id) {
            return;
        }
        let observers = self.chain.attempt_observers(self.id);
        for callback in observers {
            callback();
        }
        let notified = observers.len();
        self.tracer.attempt(&AttemptEvent {
            coordinator: self.id,
            observers: notified,
        });
    }

    fn did_dismiss(&mut self) {
        self.dismiss_self();
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use alloc::rc::Rc;
    use alloc::vec::Vec;

    use crate::chain::{ControllerId, CoordinatorChain, CoordinatorId};

    use super::*;

    /// Host double that answers a fixed style for every controller.
    struct FixedStyleHost {
        style: PresentationStyle,
        next: u32,
        presents: u32,
    }

    impl FixedStyleHost {
        fn new(style: PresentationStyle) -> Self {
            Self {
                style,
                next: 0,
                presents: 0,
            }
        }

        fn controller(&mut self) -> ControllerId {
            let id = ControllerId(self.next);
            self.next += 1;
            id
        }
    }

    impl HostController for FixedStyleHost {
        fn instantiate(
            &mut self,
            _presentation: &Presentation,
            _coordinator: CoordinatorId,
        ) -> ControllerId {
            self.controller()
        }

        fn present(&mut self, _from: ControllerId, _controller: ControllerId, _animated: bool) {
            self.presents += 1;
        }

        fn dismiss(&mut self, _controller: ControllerId, _animated: bool) {}

        fn replace_content(&mut self, _controller: ControllerId, _content: ViewId) {}

        fn style(&self, _controller: ControllerId) -> PresentationStyle {
            self.style
        }

        fn set_dismiss_delegate(
            &mut self,
            _controller: ControllerId,
            _coordinator: CoordinatorId,
        ) {
        }
    }

    #[test]
    fn present_view_is_always_dismissible() {
        let mut chain = CoordinatorChain::new();
        let root = chain.create_root();
        let mut host = FixedStyleHost::new(PresentationStyle::Automatic);
        let ctrl = host.controller();
        Coordinator::new(&mut chain, &mut host, root).attach_controller(ctrl);

        let fired = Rc::new(Cell::new(0u32));
        let fired2 = Rc::clone(&fired);
        Coordinator::new(&mut chain, &mut host, root).present_view(
            ViewId(9),
            Some(Box::new(move || fired2.set(fired2.get() + 1))),
            PresentationStyle::FullScreen,
        );
        let child = chain.child_of(root).expect("child created");
        assert_eq!(host.presents, 1);

        // The wired-in policy always allows dismissal.
        Coordinator::new(&mut chain, &mut host, child).dismiss_self();
        assert!(chain.child_of(root).is_none());
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn attempt_observers_run_in_order_without_state_change() {
        let mut chain = CoordinatorChain::new();
        let root = chain.create_root();
        let mut host = FixedStyleHost::new(PresentationStyle::Automatic);
        let ctrl = host.controller();
        Coordinator::new(&mut chain, &mut host, root).attach_controller(ctrl);
        Coordinator::new(&mut chain, &mut host, root)
            .present_view(ViewId(1), None, PresentationStyle::PageSheet);
        let child = chain.child_of(root).expect("child created");

        let order = Rc::new(core::cell::RefCell::new(Vec::new()));
        for tag in [1, 2] {
            let order = Rc::clone(&order);
            chain.observe_dismiss_attempt(child, move || order.borrow_mut().push(tag));
        }

        Coordinator::new(&mut chain, &mut host, child).did_attempt_to_dismiss();

        assert_eq!(*order.borrow(), [1, 2]);
        assert_eq!(chain.child_of(root), Some(child), "attempt changes nothing");
    }

    #[test]
    fn will_dismiss_is_reserved_noop() {
        let mut chain = CoordinatorChain::new();
        let root = chain.create_root();
        let mut host = FixedStyleHost::new(PresentationStyle::Automatic);
        let ctrl = host.controller();
        Coordinator::new(&mut chain, &mut host, root).attach_controller(ctrl);
        Coordinator::new(&mut chain, &mut host, root)
            .present_view(ViewId(1), None, PresentationStyle::PageSheet);
        let child = chain.child_of(root).expect("child created");

        Coordinator::new(&mut chain, &mut host, child).will_dismiss();

        assert_eq!(chain.child_of(root), Some(child));
    }
}
