//! Modal sheet sliding up from the bottom edge
//!
//! Dismissed by a tap on the backdrop, the close button, or a downward drag
//! on the sheet past its own thresholds.

use leptos::prelude::*;
use minireel_core::gesture::{DragBounds, DragOutcome, DragTracker};
use wasm_bindgen::JsCast;
use web_sys::PointerEvent;
use crate::app::use_player;
use super::CloseIcon;

#[component]
pub fn BottomSheet(
    #[prop(into)]
    open: Signal<bool>,
    #[prop(into)]
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let ctx = use_player();
    let tracker = StoredValue::new(DragTracker::with_slop(ctx.config.with_value(|c| c.drag_slop_px)));
    let drag_offset = RwSignal::new(0.0_f64);
    let (dragging, set_dragging) = signal(false);
    let bounds = DragBounds::FreeBelow { elastic: ctx.config.with_value(|c| c.drag_elastic) };

    let reset = move || {
        set_dragging.set(false);
        drag_offset.set(0.0);
    };

    let on_pointer_down = move |ev: PointerEvent| {
        // The player underneath has its own swipe
        ev.stop_propagation();
        tracker.update_value(|t| t.press(f64::from(ev.client_y()), ev.time_stamp()));
        if let Some(target) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
            let _ = target.set_pointer_capture(ev.pointer_id());
        }
        set_dragging.set(true);
    };

    let on_pointer_move = move |ev: PointerEvent| {
        if !tracker.with_value(|t| t.is_active()) {
            return;
        }
        tracker.update_value(|t| t.move_to(f64::from(ev.client_y()), ev.time_stamp()));
        let (dragging, offset) = tracker.with_value(|t| (t.is_dragging(), t.offset()));
        if dragging {
            drag_offset.set(bounds.visual_offset(offset));
        }
    };

    let on_pointer_up = move |ev: PointerEvent| {
        let release = tracker.try_update_value(|t| t.release(ev.time_stamp())).flatten();
        reset();
        if let Some(release) = release {
            let thresholds = ctx.config.with_value(|c| c.sheet_drag);
            if thresholds.decide(release) == DragOutcome::Commit {
                tracing::debug!(offset = release.offset_y, velocity = release.velocity_y, "sheet: dismissed by drag");
                on_close.run(());
            }
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="sheet-backdrop" on:click=move |_| on_close.run(())></div>
            <div
                class="bottom-sheet"
                class:dragging=move || dragging.get()
                style:transform=move || format!("translateY({}px)", drag_offset.get())
            >
                <div
                    class="sheet-grip"
                    on:pointerdown=on_pointer_down
                    on:pointermove=on_pointer_move
                    on:pointerup=on_pointer_up
                    on:pointercancel=move |_| {
                        tracker.update_value(|t| t.cancel());
                        reset();
                    }
                >
                    <div class="sheet-handle"></div>
                    <button
                        class="sheet-close"
                        aria-label="Close"
                        on:pointerdown=|ev| ev.stop_propagation()
                        on:click=move |_| on_close.run(())
                    >
                        <CloseIcon />
                    </button>
                </div>
                <div class="sheet-content">{children()}</div>
            </div>
        </Show>
    }
}
