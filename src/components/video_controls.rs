//! Transport bar for the full-screen player

use leptos::prelude::*;
use leptos::html;
use minireel_core::controls::seek_target;
use minireel_core::format::format_time;
use super::{PauseIcon, PlayIcon, SkipBackIcon, SkipForwardIcon};

#[component]
pub fn VideoControls(
    #[prop(into)]
    is_playing: Signal<bool>,
    #[prop(into)]
    current_time: Signal<f64>,
    #[prop(into)]
    duration: Signal<f64>,
    /// Step used by the skip buttons, for their labels
    skip_seconds: f64,
    #[prop(into)]
    on_toggle_play: Callback<()>,
    #[prop(into)]
    on_skip_backward: Callback<()>,
    #[prop(into)]
    on_skip_forward: Callback<()>,
    #[prop(into)]
    on_seek: Callback<f64>,
) -> impl IntoView {
    let bar_ref = NodeRef::<html::Div>::new();
    let (scrubbing, set_scrubbing) = signal(false);

    let progress = move || {
        let d = duration.get();
        if d > 0.0 { (current_time.get() / d * 100.0).clamp(0.0, 100.0) } else { 0.0 }
    };

    let seek_to_pointer = move |client_x: i32| {
        let Some(bar) = bar_ref.get_untracked() else {
            return;
        };
        let rect = bar.get_bounding_client_rect();
        if let Some(t) = seek_target(f64::from(client_x), rect.left(), rect.width(), duration.get_untracked()) {
            on_seek.run(t);
        }
    };

    let skip_label = format!("{}", skip_seconds.round() as i64);
    let skip_label_fwd = skip_label.clone();

    view! {
        <div class="video-controls">
            <div
                class="progress-container"
                node_ref=bar_ref
                // Scrubbing must not start a swipe on the player behind it
                on:pointerdown=move |ev| {
                    ev.stop_propagation();
                    set_scrubbing.set(true);
                    seek_to_pointer(ev.client_x());
                }
                on:pointermove=move |ev| {
                    if scrubbing.get_untracked() {
                        ev.stop_propagation();
                        seek_to_pointer(ev.client_x());
                    }
                }
                on:pointerup=move |_| set_scrubbing.set(false)
                on:pointerleave=move |_| set_scrubbing.set(false)
                on:pointercancel=move |_| set_scrubbing.set(false)
            >
                <div class="progress-track">
                    <div class="progress-fill" style:width=move || format!("{}%", progress())></div>
                    <div class="progress-thumb" style:left=move || format!("{}%", progress())></div>
                </div>
            </div>

            <div class="controls-row">
                <div class="time-display">
                    <span>{move || format_time(current_time.get())}</span>
                    <span class="time-separator">"/"</span>
                    <span>{move || format_time(duration.get())}</span>
                </div>

                <div class="center-controls">
                    <button
                        class="skip-button"
                        aria-label=format!("Rewind {} seconds", skip_label)
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_skip_backward.run(());
                        }
                    >
                        <SkipBackIcon />
                        <span class="skip-label">{skip_label.clone()}</span>
                    </button>

                    <button
                        class="play-button"
                        aria-label=move || if is_playing.get() { "Pause" } else { "Play" }
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_toggle_play.run(());
                        }
                    >
                        {move || if is_playing.get() {
                            view! { <PauseIcon size=32 /> }.into_any()
                        } else {
                            view! { <PlayIcon size=32 /> }.into_any()
                        }}
                    </button>

                    <button
                        class="skip-button"
                        aria-label=format!("Forward {} seconds", skip_label_fwd)
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_skip_forward.run(());
                        }
                    >
                        <SkipForwardIcon />
                        <span class="skip-label">{skip_label_fwd.clone()}</span>
                    </button>
                </div>

                <div class="right-spacer"></div>
            </div>
        </div>
    }
}
