// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover-driven popper with a warn-once diagnostic sink.
//!
//! A tooltip-style popper opens on pointer enter and closes on leave. The
//! second half deliberately feeds target-less events to show the sink
//! reporting the misuse exactly once.
//!
//! Run:
//! - `cargo run -p trellis_demos --example popup_hover`

use trellis_popup::bindings::{bind_hover, bind_popper};
use trellis_popup::diag::WarnOnce;
use trellis_popup::state::PopupState;
use trellis_popup::types::{PointerEvent, Variant};

fn main() {
    let sink = WarnOnce::new(|| eprintln!("popup opened without a usable anchor"));
    let mut tip: PopupState<u32, _> = PopupState::with_diag(Variant::Popper, sink);
    tip.set_popup_id(Some("save-tip".into()));

    let hover = tip.render(|props| {
        let h = bind_hover(&props);
        (h.on_mouse_enter, h.on_mouse_leave)
    });

    // Pointer enters the save button, then leaves it.
    tip.apply(hover.0, &PointerEvent { target: Some(11_u32) });
    tip.render(|props| {
        let p = bind_popper(&props);
        println!("hovering: id={:?} open={} anchor={:?}", p.id, p.open, p.anchor_el);
    });
    tip.apply(hover.1, &PointerEvent { target: Some(11_u32) });
    println!("left:     open={}", tip.is_open());

    // A broken caller opens with events that never carry a target. The sink
    // warns on the first one and suppresses the rest.
    for _ in 0..3 {
        tip.apply(hover.0, &PointerEvent::<u32>::default());
    }
    println!("after anchorless opens: open={}", tip.is_open());
}
