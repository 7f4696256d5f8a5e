// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The presentation descriptor value.
//!
//! A [`Presentation`] describes one presentation request: how to produce the
//! view content, what to do when the presentation fully dismisses, and the
//! policy that may veto a dismissal request. Descriptors are immutable once
//! constructed; a chain slot keeps the descriptor it was created for until
//! the level is torn down.

use alloc::boxed::Box;
use core::fmt;

use kurbo::Rect;

use crate::chain::ViewId;

/// A callback invoked when the platform reports a dismiss attempt that was
/// not committed (e.g. the user pulled a sheet down and released it).
pub type AttemptCallback = Box<dyn Fn()>;

/// Visual style of a modal presentation.
///
/// Style equality decides whether a subsequent present on the same level can
/// update the displayed content in place instead of tearing the controller
/// down. The popover anchor participates in that comparison: moving the
/// anchor is a new presentation, not a content update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PresentationStyle {
    /// The platform picks an appropriate style.
    Automatic,
    /// Covers the full screen.
    FullScreen,
    /// A sheet that partially covers the presenting context.
    PageSheet,
    /// A centered sheet sized to its content.
    FormSheet,
    /// A popover anchored to a rectangle in the presenting view.
    Popover {
        /// Anchor rectangle in the presenting view's coordinate space.
        anchor: Rect,
    },
}

/// An immutable description of one presentation request.
///
/// Construct with [`Presentation::new`] and refine with the builder methods.
/// The defaults give an always-dismissible presentation with no completion
/// callback, which is what the generic
/// [`DynamicPresenter`](crate::presenter::DynamicPresenter) entry point uses.
pub struct Presentation {
    /// Lazy producer of view content; re-invoked on update-in-place.
    pub(crate) content: Box<dyn Fn() -> ViewId>,
    /// Invoked exactly once when the presentation fully dismisses.
    pub(crate) on_dismiss: Option<Box<dyn FnOnce()>>,
    /// Dismissal policy, re-evaluated at dismissal time.
    pub(crate) should_dismiss: Box<dyn Fn() -> bool>,
    /// Invoked once, only when a dismissal proceeds despite the policy
    /// answering false, so external bindings can resynchronize.
    pub(crate) reset_binding: Box<dyn FnOnce()>,
    /// Visual style, compared for update-in-place eligibility.
    pub(crate) style: PresentationStyle,
}

impl Presentation {
    /// Creates a descriptor with the given style and content producer.
    ///
    /// The dismissal policy defaults to always-true and the binding reset to
    /// a no-op.
    #[must_use]
    pub fn new(style: PresentationStyle, content: impl Fn() -> ViewId + 'static) -> Self {
        Self {
            content: Box::new(content),
            on_dismiss: None,
            should_dismiss: Box::new(|| true),
            reset_binding: Box::new(|| {}),
            style,
        }
    }

    /// Sets the completion callback, invoked exactly once on full dismissal.
    #[must_use]
    pub fn on_dismiss(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_dismiss = Some(Box::new(callback));
        self
    }

    /// Sets the dismissal policy and the binding reset that accompanies it.
    ///
    /// `should_dismiss` is re-evaluated every time a dismissal is requested
    /// or performed; answering false vetoes a programmatic request. If a
    /// dismissal happens anyway (the platform committed an interactive
    /// dismiss, or external state changed between the request gate and
    /// teardown), `reset_binding` runs once so the caller's state can
    /// re-sync.
    #[must_use]
    pub fn dismiss_policy(
        mut self,
        should_dismiss: impl Fn() -> bool + 'static,
        reset_binding: impl FnOnce() + 'static,
    ) -> Self {
        self.should_dismiss = Box::new(should_dismiss);
        self.reset_binding = Box::new(reset_binding);
        self
    }

    /// Invokes the content producer.
    #[must_use]
    pub fn content(&self) -> ViewId {
        (self.content)()
    }

    /// Returns the visual style.
    #[inline]
    #[must_use]
    pub const fn style(&self) -> PresentationStyle {
        self.style
    }
}

impl fmt::Debug for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Presentation")
            .field("style", &self.style)
            .field("has_on_dismiss", &self.on_dismiss.is_some())
            .finish_non_exhaustive()
    }
}
