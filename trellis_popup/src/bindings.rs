// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binding functions: turn a snapshot into prop bundles for concrete roles.
//!
//! ## Overview
//!
//! Each function here is a pure map from an
//! [`InjectedProps`](crate::types::InjectedProps) snapshot to a plain record
//! meant to be spread onto one element: a click trigger, a toggle trigger, a
//! hover trigger, a popover/menu surface, or a popper surface. Nothing here
//! holds state or has side effects; handler slots are
//! [`PopupAction`](crate::types::PopupAction) tags the host dispatcher feeds
//! back into the controller when the matching toolkit event fires.
//!
//! ## ARIA wiring
//!
//! Trigger-side bundles share one [`AriaProps`] record. The relation key is
//! decided by the controller's variant — `aria-owns` for popovers,
//! `aria-describedby` for poppers — and is always present; its value is the
//! popup id while open and `None` while closed, so consumers can rely on the
//! key and clear the rendered attribute from the value. `aria-haspopup` is
//! advertised unconditionally.

use crate::types::{AriaRelation, InjectedProps, PopupAction};

/// Accessibility wiring shared by every trigger-side bundle.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct AriaProps<'a> {
    /// Which relation attribute to render; exactly one per popup.
    pub relation: AriaRelation,
    /// Relation value: the popup id while open, `None` while closed.
    pub controls: Option<&'a str>,
    /// `aria-haspopup`; always `true`, open or closed.
    pub has_popup: bool,
}

/// Props for a click-driven trigger element.
///
/// Produced by [`bind_trigger`] (opens) and [`bind_toggle`] (toggles).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TriggerProps<'a> {
    /// Accessibility wiring for the trigger.
    pub aria: AriaProps<'a>,
    /// Action to apply when the element is clicked.
    pub on_click: PopupAction,
}

/// Props for a hover-driven trigger element. Produced by [`bind_hover`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct HoverProps<'a> {
    /// Accessibility wiring for the trigger.
    pub aria: AriaProps<'a>,
    /// Action to apply when the pointer enters the element.
    pub on_mouse_enter: PopupAction,
    /// Action to apply when the pointer leaves the element.
    pub on_mouse_leave: PopupAction,
}

/// Props for an anchored overlay surface (popover or menu).
///
/// Produced by [`bind_popover`] and its alias [`bind_menu`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PopoverProps<'a, E> {
    /// Identifier forwarded to the surface, if configured.
    pub id: Option<&'a str>,
    /// Element the surface is anchored to, `None` while closed.
    pub anchor_el: Option<E>,
    /// Whether the surface should be showing.
    pub open: bool,
    /// Action to apply when the surface requests to close.
    pub on_close: PopupAction,
}

/// Props for a lightweight positioned surface. Produced by [`bind_popper`].
///
/// Unlike [`PopoverProps`] there is no close slot; poppers follow their
/// trigger's hover/click wiring instead of closing themselves.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PopperProps<'a, E> {
    /// Identifier forwarded to the surface, if configured.
    pub id: Option<&'a str>,
    /// Element the surface is anchored to, `None` while closed.
    pub anchor_el: Option<E>,
    /// Whether the surface should be showing.
    pub open: bool,
}

fn aria_props<'a, E>(props: &InjectedProps<'a, E>) -> AriaProps<'a> {
    AriaProps {
        relation: props.variant.relation(),
        controls: if props.is_open { props.popup_id } else { None },
        has_popup: true,
    }
}

/// Props for an element that opens the popup on click.
pub fn bind_trigger<'a, E>(props: &InjectedProps<'a, E>) -> TriggerProps<'a> {
    TriggerProps {
        aria: aria_props(props),
        on_click: PopupAction::Open,
    }
}

/// Props for an element that toggles the popup on click.
pub fn bind_toggle<'a, E>(props: &InjectedProps<'a, E>) -> TriggerProps<'a> {
    TriggerProps {
        aria: aria_props(props),
        on_click: PopupAction::Toggle,
    }
}

/// Props for an element that opens on pointer enter and closes on leave.
pub fn bind_hover<'a, E>(props: &InjectedProps<'a, E>) -> HoverProps<'a> {
    HoverProps {
        aria: aria_props(props),
        on_mouse_enter: PopupAction::Open,
        on_mouse_leave: PopupAction::Close,
    }
}

/// Props for an anchored overlay surface.
pub fn bind_popover<'a, E: Copy>(props: &InjectedProps<'a, E>) -> PopoverProps<'a, E> {
    PopoverProps {
        id: props.popup_id,
        anchor_el: props.anchor_el,
        open: props.is_open,
        on_close: PopupAction::Close,
    }
}

/// Props for a menu surface. Alias of [`bind_popover`].
pub fn bind_menu<'a, E: Copy>(props: &InjectedProps<'a, E>) -> PopoverProps<'a, E> {
    bind_popover(props)
}

/// Props for a lightweight positioned surface.
pub fn bind_popper<'a, E: Copy>(props: &InjectedProps<'a, E>) -> PopperProps<'a, E> {
    PopperProps {
        id: props.popup_id,
        anchor_el: props.anchor_el,
        open: props.is_open,
    }
}
