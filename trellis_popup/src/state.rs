// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The popup state controller.
//!
//! ## Overview
//!
//! Holds one piece of state, the [`AnchorState`](crate::types::AnchorState)
//! tag, and exposes the open/close/toggle transitions over it. Everything
//! else — `is_open`, the anchor element, the per-render snapshot — is derived
//! on demand.
//!
//! ## Transitions
//!
//! - [`PopupState::open`] resolves an anchor from its source and lands on
//!   `Open(anchor)`. Re-opening replaces the anchor (last write wins).
//! - [`PopupState::close`] lands on `Closed` and is idempotent.
//! - [`PopupState::toggle`] closes when open (its source is ignored) and
//!   opens when closed.
//! - [`PopupState::set_open`] selects between the two by a boolean.
//!
//! Every transition is synchronous and total; after it returns the host
//! re-renders and reads a fresh snapshot via [`PopupState::render`].
//!
//! ## See Also
//!
//! [`bindings`](crate::bindings) for turning snapshots into prop bundles, and
//! [`diag`](crate::diag) for how anchorless opens are reported.

use alloc::string::String;

use crate::diag::{DiagSink, NoDiag};
use crate::types::{AnchorSource, AnchorState, InjectedProps, PopupAction, Variant};

/// State controller for a single popup.
///
/// ## Usage
///
/// - Construct with [`PopupState::new`] for silent misuse handling, or
///   [`PopupState::with_diag`] to inject a [`DiagSink`] such as
///   [`WarnOnce`](crate::diag::WarnOnce).
/// - Optionally configure a pass-through identifier with
///   [`PopupState::set_popup_id`]; it flows into ARIA wiring and the surface
///   `id`.
/// - Each render, call [`PopupState::render`] with the host's render callback
///   to hand it the current [`InjectedProps`] snapshot.
/// - When the toolkit delivers an interaction on a bound element, feed the
///   binding's [`PopupAction`] tag back through [`PopupState::apply`].
///
/// `E` is the host's anchor element key (a `Copy` id or handle, as in the
/// rest of this workspace); instances are fully independent of one another.
pub struct PopupState<E, D: DiagSink = NoDiag> {
    anchor: AnchorState<E>,
    popup_id: Option<String>,
    variant: Variant,
    diag: D,
}

impl<E: core::fmt::Debug, D: DiagSink> core::fmt::Debug for PopupState<E, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PopupState")
            .field("anchor", &self.anchor)
            .field("popup_id", &self.popup_id)
            .field("variant", &self.variant)
            .finish_non_exhaustive()
    }
}

impl<E: Copy, D: DiagSink + Default> PopupState<E, D> {
    /// Create a closed controller with a default diagnostic sink.
    pub fn new(variant: Variant) -> Self {
        Self {
            anchor: AnchorState::Closed,
            popup_id: None,
            variant,
            diag: D::default(),
        }
    }
}

impl<E: Copy, D: DiagSink> PopupState<E, D> {
    /// Create a closed controller with an explicit diagnostic sink.
    pub fn with_diag(variant: Variant, diag: D) -> Self {
        Self {
            anchor: AnchorState::Closed,
            popup_id: None,
            variant,
            diag,
        }
    }

    /// Set or clear the pass-through popup identifier.
    pub fn set_popup_id(&mut self, id: Option<String>) {
        self.popup_id = id;
    }

    /// Open the popup anchored to whatever `source` resolves to.
    ///
    /// Opening while already open replaces the anchor; no error is raised.
    /// A source that resolves to no anchor is caller misuse: it is reported
    /// to the diagnostic sink and the update proceeds anyway — with the
    /// tagged state an anchorless open can only land on `Closed`.
    pub fn open(&mut self, source: &impl AnchorSource<E>) {
        match source.resolve() {
            Some(anchor) => self.anchor = AnchorState::Open(anchor),
            None => {
                self.diag.missing_anchor();
                self.anchor = AnchorState::Closed;
            }
        }
    }

    /// Close the popup. Idempotent; still counts as a state update for the
    /// host's re-render purposes.
    pub fn close(&mut self) {
        self.anchor = AnchorState::Closed;
    }

    /// Close when open (ignoring `source`), otherwise open via `source`.
    pub fn toggle(&mut self, source: &impl AnchorSource<E>) {
        if self.anchor.is_open() {
            self.close();
        } else {
            self.open(source);
        }
    }

    /// Drive the state to the requested openness.
    ///
    /// `true` behaves as [`PopupState::open`] (the source must then carry a
    /// usable anchor); `false` behaves as [`PopupState::close`] and ignores
    /// the source.
    pub fn set_open(&mut self, should_be_open: bool, source: &impl AnchorSource<E>) {
        if should_be_open {
            self.open(source);
        } else {
            self.close();
        }
    }

    /// Execute a [`PopupAction`] tag produced by a binding function.
    ///
    /// This is the dispatcher entry point: the host matches a toolkit event
    /// to the bound element's handler slot and feeds the tag back here with
    /// the event itself as the anchor source.
    pub fn apply(&mut self, action: PopupAction, source: &impl AnchorSource<E>) {
        match action {
            PopupAction::Open => self.open(source),
            PopupAction::Close => self.close(),
            PopupAction::Toggle => self.toggle(source),
        }
    }

    /// Whether the popup is open.
    pub fn is_open(&self) -> bool {
        self.anchor.is_open()
    }

    /// The current anchor element, `None` while closed.
    pub fn anchor_el(&self) -> Option<E> {
        self.anchor.anchor()
    }

    /// The configured pass-through identifier, if any.
    pub fn popup_id(&self) -> Option<&str> {
        self.popup_id.as_deref()
    }

    /// The display-surface convention fixed at construction.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Assemble the read-only snapshot for the current state.
    pub fn props(&self) -> InjectedProps<'_, E> {
        InjectedProps {
            is_open: self.is_open(),
            anchor_el: self.anchor_el(),
            popup_id: self.popup_id(),
            variant: self.variant,
        }
    }

    /// Invoke the host's render callback with a fresh snapshot.
    ///
    /// The callback's output may borrow from the controller (for example a
    /// prop bundle referencing the popup id).
    pub fn render<'s, R>(&'s self, render: impl FnOnce(InjectedProps<'s, E>) -> R) -> R {
        render(self.props())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::WarnOnce;
    use crate::types::PointerEvent;
    use core::cell::Cell;

    fn popover() -> PopupState<u32> {
        PopupState::new(Variant::Popover)
    }

    #[test]
    fn starts_closed() {
        let p = popover();
        assert!(!p.is_open());
        assert_eq!(p.anchor_el(), None);
    }

    // Openness is exactly anchor presence, across every operation.
    #[test]
    fn openness_tracks_anchor_presence() {
        let mut p = popover();
        p.open(&1_u32);
        assert_eq!(p.is_open(), p.anchor_el().is_some());
        p.close();
        assert_eq!(p.is_open(), p.anchor_el().is_some());
        p.toggle(&2_u32);
        assert_eq!(p.is_open(), p.anchor_el().is_some());
        p.set_open(false, &3_u32);
        assert_eq!(p.is_open(), p.anchor_el().is_some());
    }

    #[test]
    fn open_from_event_anchors_to_target() {
        let mut p = popover();
        p.open(&PointerEvent { target: Some(7_u32) });
        assert!(p.is_open());
        assert_eq!(p.anchor_el(), Some(7));
    }

    #[test]
    fn open_from_element_anchors_directly() {
        let mut p = popover();
        p.open(&5_u32);
        assert_eq!(p.anchor_el(), Some(5));
    }

    #[test]
    fn reopen_replaces_anchor() {
        let mut p = popover();
        p.open(&1_u32);
        p.open(&2_u32);
        assert_eq!(p.anchor_el(), Some(2));
    }

    #[test]
    fn close_is_idempotent() {
        let mut p = popover();
        p.open(&1_u32);
        p.close();
        let after_one = (p.is_open(), p.anchor_el());
        p.close();
        assert_eq!((p.is_open(), p.anchor_el()), after_one);
    }

    #[test]
    fn toggle_from_closed_opens_with_anchor() {
        let mut p = popover();
        p.toggle(&9_u32);
        assert_eq!(p.anchor_el(), Some(9));
    }

    #[test]
    fn toggle_from_open_closes_regardless_of_source() {
        let mut p = popover();
        p.open(&1_u32);
        p.toggle(&999_u32);
        assert!(!p.is_open());
        assert_eq!(p.anchor_el(), None);
    }

    #[test]
    fn set_open_true_opens_with_anchor() {
        let mut p = popover();
        p.set_open(true, &4_u32);
        assert_eq!(p.anchor_el(), Some(4));
    }

    #[test]
    fn set_open_false_always_closes() {
        let mut p = popover();
        p.open(&1_u32);
        p.set_open(false, &2_u32);
        assert!(!p.is_open());
        p.set_open(false, &3_u32);
        assert!(!p.is_open());
    }

    #[test]
    fn apply_dispatches_each_action() {
        let mut p = popover();
        p.apply(PopupAction::Open, &1_u32);
        assert_eq!(p.anchor_el(), Some(1));
        p.apply(PopupAction::Close, &2_u32);
        assert!(!p.is_open());
        p.apply(PopupAction::Toggle, &3_u32);
        assert_eq!(p.anchor_el(), Some(3));
        p.apply(PopupAction::Toggle, &4_u32);
        assert!(!p.is_open());
    }

    #[test]
    fn props_snapshot_reflects_current_state() {
        let mut p = popover();
        p.set_popup_id(Some("pop".into()));
        p.open(&6_u32);
        let props = p.props();
        assert_eq!(
            props,
            InjectedProps {
                is_open: true,
                anchor_el: Some(6),
                popup_id: Some("pop"),
                variant: Variant::Popover,
            }
        );
    }

    #[test]
    fn render_passes_snapshot_and_returns_output() {
        let mut p = popover();
        p.open(&8_u32);
        let anchor = p.render(|props| props.anchor_el);
        assert_eq!(anchor, Some(8));
    }

    // Misuse: a target-less event cannot produce an open state; the sink is
    // notified on the first occurrence only and the controller stays usable.
    #[test]
    fn anchorless_open_warns_once_and_lands_closed() {
        let warnings = Cell::new(0_u32);
        let sink = WarnOnce::new(|| warnings.set(warnings.get() + 1));
        let mut p: PopupState<u32, _> = PopupState::with_diag(Variant::Popover, sink);

        let no_target: PointerEvent<u32> = PointerEvent::default();
        p.open(&no_target);
        assert!(!p.is_open());
        p.open(&no_target);
        p.set_open(true, &no_target);
        assert_eq!(warnings.get(), 1);

        // A proper open still works afterwards.
        p.open(&PointerEvent { target: Some(1) });
        assert!(p.is_open());
    }

    // An anchorless open while already open still performs the update,
    // which under the tagged state means it closes.
    #[test]
    fn anchorless_open_replaces_open_state_with_closed() {
        let mut p = popover();
        p.open(&1_u32);
        let no_target: PointerEvent<u32> = PointerEvent::default();
        p.open(&no_target);
        assert!(!p.is_open());
    }

    #[test]
    fn controllers_are_independent() {
        let mut a = popover();
        let mut b = popover();
        a.open(&1_u32);
        assert!(a.is_open());
        assert!(!b.is_open());
        b.toggle(&2_u32);
        a.close();
        assert!(!a.is_open());
        assert_eq!(b.anchor_el(), Some(2));
    }
}
