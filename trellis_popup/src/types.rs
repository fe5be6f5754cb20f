// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for popup state: variants, anchor state, anchor sources,
//! actions, and the per-render snapshot.
//!
//! ## Overview
//!
//! These types describe the popup protocol and its inputs/outputs.
//! They are referenced by the [`state`](crate::state) controller and consumed
//! by the [`bindings`](crate::bindings) functions and downstream toolkits.

use alloc::string::String;

/// Display-surface convention for a popup, fixed for a controller's lifetime.
///
/// Selects the accessibility relation a trigger advertises: popovers own
/// their surface (`aria-owns`), poppers describe it (`aria-describedby`).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Variant {
    /// Anchored overlay with built-in close wiring (menus included).
    Popover,
    /// Lightweight positioned surface without close wiring (tooltips).
    Popper,
}

impl Variant {
    /// The ARIA relation triggers of this variant advertise.
    pub fn relation(self) -> AriaRelation {
        match self {
            Self::Popover => AriaRelation::Owns,
            Self::Popper => AriaRelation::DescribedBy,
        }
    }

    /// Canonical lowercase name, the inverse of [`FromStr`](core::str::FromStr).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Popover => "popover",
            Self::Popper => "popper",
        }
    }
}

impl core::str::FromStr for Variant {
    type Err = InvalidVariant;

    fn from_str(s: &str) -> Result<Self, InvalidVariant> {
        match s {
            "popover" => Ok(Self::Popover),
            "popper" => Ok(Self::Popper),
            other => Err(InvalidVariant {
                found: String::from(other),
            }),
        }
    }
}

/// Error for a variant name outside `popover`/`popper`.
///
/// Returned by `Variant::from_str` so string-driven configuration fails at
/// setup rather than misbehaving at interaction time.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvalidVariant {
    /// The rejected variant name.
    pub found: String,
}

impl core::fmt::Display for InvalidVariant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "invalid popup variant {:?}, expected \"popover\" or \"popper\"",
            self.found
        )
    }
}

impl core::error::Error for InvalidVariant {}

/// Accessibility relation linking a trigger to the popup it controls.
///
/// Exactly one relation applies per popup; which one is decided by
/// [`Variant::relation`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AriaRelation {
    /// `aria-owns`: the trigger owns the popup surface.
    Owns,
    /// `aria-describedby`: the popup describes the trigger.
    DescribedBy,
}

impl AriaRelation {
    /// Concrete attribute key for hosts that render attribute maps.
    pub fn attr_name(self) -> &'static str {
        match self {
            Self::Owns => "aria-owns",
            Self::DescribedBy => "aria-describedby",
        }
    }
}

/// The popup's entire state: closed, or open and anchored to an element.
///
/// There is no separate open flag; `Open` always carries its anchor, so
/// "open" and "anchored" cannot disagree.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AnchorState<E> {
    /// No popup is showing.
    Closed,
    /// The popup is showing, attached to the given anchor element.
    Open(E),
}

impl<E> Default for AnchorState<E> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<E: Copy> AnchorState<E> {
    /// Whether the popup is open.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// The current anchor element, or `None` while closed.
    pub fn anchor(&self) -> Option<E> {
        match self {
            Self::Open(e) => Some(*e),
            Self::Closed => None,
        }
    }
}

/// Resolve an anchor element out of an interaction event or element reference.
///
/// Implement this for host event types so they can be passed straight to
/// [`PopupState::open`](crate::state::PopupState::open) and friends. A bare
/// element key resolves to itself via the blanket impl;
/// [`PointerEvent`] resolves to its target.
///
/// Returning `None` means no usable anchor exists, which open-style calls
/// treat as caller misuse (see [`diag`](crate::diag)).
pub trait AnchorSource<E> {
    /// The anchor this source designates, if any.
    fn resolve(&self) -> Option<E>;
}

impl<E: Copy> AnchorSource<E> for E {
    #[inline]
    fn resolve(&self) -> Option<E> {
        Some(*self)
    }
}

/// A minimal interaction-event carrier: an optional target element.
///
/// Stands in for the host event system's pointer events when the host does
/// not implement [`AnchorSource`] on its own types.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PointerEvent<E> {
    /// Element the interaction landed on, if the host resolved one.
    pub target: Option<E>,
}

// Manual impl: the derive would demand `E: Default` for a field that is
// already `None` by default.
impl<E> Default for PointerEvent<E> {
    fn default() -> Self {
        Self { target: None }
    }
}

impl<E: Copy> AnchorSource<E> for PointerEvent<E> {
    #[inline]
    fn resolve(&self) -> Option<E> {
        self.target
    }
}

/// Which controller operation a binding's handler slot stands for.
///
/// Binding outputs carry these tags instead of callbacks; the host dispatcher
/// feeds them back through [`PopupState::apply`](crate::state::PopupState::apply)
/// when the corresponding toolkit event fires.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PopupAction {
    /// Open the popup anchored to the event's element.
    Open,
    /// Close the popup.
    Close,
    /// Close if open, otherwise open anchored to the event's element.
    Toggle,
}

/// Read-only snapshot handed to the render callback each render.
///
/// Recomputed from the current [`AnchorState`] on every
/// [`PopupState::render`](crate::state::PopupState::render) or
/// [`PopupState::props`](crate::state::PopupState::props) call; never stored.
/// This is the sole input of every [`bindings`](crate::bindings) function.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct InjectedProps<'a, E> {
    /// Whether the popup is open (exactly: the anchor state is `Open`).
    pub is_open: bool,
    /// The current anchor element, `None` while closed.
    pub anchor_el: Option<E>,
    /// Pass-through identifier configured on the controller, if any.
    pub popup_id: Option<&'a str>,
    /// The controller's display-surface convention.
    pub variant: Variant,
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn variant_selects_relation() {
        assert_eq!(Variant::Popover.relation(), AriaRelation::Owns);
        assert_eq!(Variant::Popper.relation(), AriaRelation::DescribedBy);
    }

    #[test]
    fn variant_parse_round_trip() {
        for v in [Variant::Popover, Variant::Popper] {
            assert_eq!(Variant::from_str(v.as_str()), Ok(v));
        }
    }

    #[test]
    fn variant_parse_rejects_unknown() {
        let err = Variant::from_str("tooltip").unwrap_err();
        assert_eq!(err.found, "tooltip");
        // Config names are canonical lowercase; case variants are rejected.
        assert!(Variant::from_str("Popover").is_err());
        assert!(Variant::from_str("").is_err());
    }

    #[test]
    fn relation_attr_names() {
        assert_eq!(AriaRelation::Owns.attr_name(), "aria-owns");
        assert_eq!(AriaRelation::DescribedBy.attr_name(), "aria-describedby");
    }

    #[test]
    fn anchor_state_presence_is_openness() {
        let closed: AnchorState<u32> = AnchorState::Closed;
        assert!(!closed.is_open());
        assert_eq!(closed.anchor(), None);

        let open = AnchorState::Open(4_u32);
        assert!(open.is_open());
        assert_eq!(open.anchor(), Some(4));
    }

    #[test]
    fn element_resolves_to_itself() {
        let el = 9_u32;
        assert_eq!(AnchorSource::<u32>::resolve(&el), Some(9));
    }

    // `PointerEvent<u32>` is itself `Copy`, so the blanket impl applies to it
    // too; qualify the anchor type to pick the target-resolving impl.
    #[test]
    fn pointer_event_resolves_to_target_not_itself() {
        let ev = PointerEvent { target: Some(3_u32) };
        assert_eq!(AnchorSource::<u32>::resolve(&ev), Some(3));
        let no_target: PointerEvent<u32> = PointerEvent::default();
        assert_eq!(AnchorSource::<u32>::resolve(&no_target), None);
    }
}
