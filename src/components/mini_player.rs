//! Collapsed player bar docked above the bottom edge
//!
//! The video picture itself belongs to the global player and is laid out into
//! the left of this bar by CSS; this component draws everything else.

use leptos::prelude::*;
use crate::app::use_player;
use crate::player::PlayerRuntime;
use super::{CloseIcon, PauseIcon, PlayIcon};

#[component]
pub fn MiniPlayer(runtime: PlayerRuntime) -> impl IntoView {
    let ctx = use_player();
    let video = move || ctx.store.with(|s| s.current_video().cloned());
    let is_playing = move || ctx.store.with(|s| s.is_playing());
    let progress = move || ctx.store.with(|s| s.progress_percent());

    view! {
        <div class="mini-player" on:click=move |_| runtime.restore()>
            <div class="mini-progress">
                <div class="mini-progress-fill" style:width=move || format!("{}%", progress())></div>
            </div>
            <div class="mini-content">
                <div class="mini-video-slot"></div>
                <div class="mini-info">
                    <span class="mini-title">{move || video().map(|v| v.title).unwrap_or_default()}</span>
                    <span class="mini-category">{move || video().map(|v| v.category.label()).unwrap_or_default()}</span>
                </div>
                <button
                    class="mini-button"
                    aria-label=move || if is_playing() { "Pause" } else { "Play" }
                    on:click=move |ev| {
                        ev.stop_propagation();
                        runtime.toggle_play();
                    }
                >
                    {move || if is_playing() {
                        view! { <PauseIcon /> }.into_any()
                    } else {
                        view! { <PlayIcon /> }.into_any()
                    }}
                </button>
                <button
                    class="mini-button"
                    aria-label="Close"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        runtime.close();
                    }
                >
                    <CloseIcon />
                </button>
            </div>
        </div>
    }
}
