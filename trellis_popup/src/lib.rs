// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_popup --heading-base-level=0

//! Trellis Popup: anchored popup state for UI toolkits.
//!
//! ## Overview
//!
//! This crate holds the open/closed state of a single popup (menu, popover, or
//! popper-style tooltip) together with the anchor element it is attached to,
//! and derives plain prop bundles that wire that state into trigger elements
//! and popup surfaces. It does not render anything and does not position
//! anything. Instead, feed interaction events into
//! [`PopupState`](crate::state::PopupState) and spread the records produced by
//! the [`bindings`] functions onto your toolkit's elements.
//!
//! ## State model
//!
//! The whole state is one tag: [`AnchorState`](crate::types::AnchorState) is
//! either `Closed` or `Open(anchor)`. "Open" and "has an anchor" are the same
//! fact, so an open popup always knows what it is anchored to.
//!
//! ## Anchor sources
//!
//! Open-style operations accept anything implementing
//! [`AnchorSource`](crate::types::AnchorSource): a bare element key resolves
//! to itself, a [`PointerEvent`](crate::types::PointerEvent) resolves to its
//! target, and hosts can implement the trait for their own event types.
//!
//! ## Layering
//!
//! Binding outputs carry handler slots as [`PopupAction`](crate::types::PopupAction)
//! tags rather than callbacks. A higher-level dispatcher owns event delivery:
//! when the toolkit reports a click on an element carrying
//! `TriggerProps { on_click, .. }`, it feeds that tag back through
//! [`PopupState::apply`](crate::state::PopupState::apply) along with the event,
//! then re-renders.
//!
//! ## Minimal example
//!
//! ```
//! use trellis_popup::bindings::{bind_popover, bind_trigger};
//! use trellis_popup::state::PopupState;
//! use trellis_popup::types::{PointerEvent, Variant};
//!
//! // One controller per popup; the anchor key type is host-chosen.
//! let mut popup: PopupState<u32> = PopupState::new(Variant::Popover);
//! popup.set_popup_id(Some("demo-menu".into()));
//!
//! // Render pass: compute prop bundles from the current snapshot.
//! let on_click = popup.render(|props| bind_trigger(&props).on_click);
//!
//! // The host dispatcher feeds the click back with its event.
//! popup.apply(on_click, &PointerEvent { target: Some(7) });
//! assert!(popup.is_open());
//!
//! let surface = popup.render(|props| bind_popover(&props));
//! assert!(surface.open);
//! assert_eq!(surface.anchor_el, Some(7));
//! assert_eq!(surface.id, Some("demo-menu"));
//! ```
//!
//! ## Diagnostics
//!
//! Opening without a usable anchor is a caller bug. It is reported through an
//! injected [`DiagSink`](crate::diag::DiagSink) rather than a global flag;
//! [`WarnOnce`](crate::diag::WarnOnce) reproduces the conventional
//! warn-once-then-stay-silent behavior per controller.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod bindings;
pub mod diag;
pub mod state;
pub mod types;
