// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Popup basics: a click trigger wired to a popover surface.
//!
//! Renders prop bundles from the controller snapshot, simulates a click on
//! the trigger, and shows the surface props before and after.
//!
//! Run:
//! - `cargo run -p trellis_demos --example popup_basics`

use trellis_popup::bindings::{bind_menu, bind_trigger};
use trellis_popup::state::PopupState;
use trellis_popup::types::{PointerEvent, Variant};

// Stand-in for a toolkit element id.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Node(u32);

fn main() {
    let mut popup: PopupState<Node> = PopupState::new(Variant::Popover);
    popup.set_popup_id(Some("file-menu".into()));

    // First render: closed. The relation key is present with an empty value.
    popup.render(|props| {
        let trigger = bind_trigger(&props);
        println!(
            "closed trigger: {}={:?} aria-haspopup={}",
            trigger.aria.relation.attr_name(),
            trigger.aria.controls,
            trigger.aria.has_popup,
        );
    });

    // The user clicks the trigger button; the host dispatcher looks up the
    // bound action and applies it with the click event.
    let on_click = popup.render(|props| bind_trigger(&props).on_click);
    popup.apply(on_click, &PointerEvent { target: Some(Node(42)) });

    // Second render: open, anchored to the clicked element.
    popup.render(|props| {
        let trigger = bind_trigger(&props);
        let menu = bind_menu(&props);
        println!(
            "open trigger:   {}={:?}",
            trigger.aria.relation.attr_name(),
            trigger.aria.controls,
        );
        println!(
            "menu surface:   id={:?} open={} anchored to {:?}",
            menu.id, menu.open, menu.anchor_el,
        );
    });

    // The surface requests to close (click-away, escape, item chosen).
    let on_close = popup.render(|props| bind_menu(&props).on_close);
    popup.apply(on_close, &PointerEvent::default());
    assert!(!popup.is_open(), "close action should close the popup");
    println!("closed again:   open={}", popup.is_open());
}
