//! The one player surface of the app
//!
//! A single `<video>` element stays mounted for the whole session. Full screen
//! and minimized are two layouts of the same subtree, so switching between
//! them never interrupts playback.

use leptos::html;
use leptos::prelude::*;
use minireel_core::gesture::{release_player_drag, DragBounds, DragTracker, PlayerDragAction};
use minireel_core::route::Route;
use minireel_core::{PlayerMode, VideoItem};
use wasm_bindgen::JsCast;
use web_sys::PointerEvent;
use crate::app::use_player;
use crate::media::media_event;
use crate::player::PlayerRuntime;
use super::{AutoplayCountdown, BottomSheet, ErrorIcon, MiniPlayer, RelatedVideosList, SwipeUpHint, VideoControls};

#[component]
pub fn GlobalPlayer() -> impl IntoView {
    let ctx = use_player();
    let runtime = PlayerRuntime::new(ctx);
    let video_ref = NodeRef::<html::Video>::new();

    let mode = Memo::new(move |_| ctx.store.with(|s| s.mode()));
    let is_fullscreen = move || mode.get() == PlayerMode::Fullscreen;
    let is_minimized = move || mode.get() == PlayerMode::Minimized;

    // Reload only when the session changes, not on every time update
    let source = Memo::new(move |_| ctx.store.with(|s| (s.session(), s.current_video().cloned())));

    Effect::new(move |_| {
        let Some(video) = video_ref.get() else {
            return;
        };
        let (_, current) = source.get();
        if !runtime.is_attached() {
            runtime.attach(video);
        }
        runtime.load(current.as_ref());
    });

    on_cleanup(move || runtime.dispose());

    let forward = move |name: &str| {
        if let Some(event) = video_ref.get_untracked().and_then(|v| media_event(name, &v)) {
            runtime.dispatch(event);
        }
    };

    // Swipe down to minimize
    let tracker = StoredValue::new(DragTracker::with_slop(ctx.config.with_value(|c| c.drag_slop_px)));
    let drag_offset = RwSignal::new(0.0_f64);
    let (settling, set_settling) = signal(false);
    let bounds = DragBounds::Pinned { elastic: ctx.config.with_value(|c| c.drag_elastic) };

    let on_pointer_down = move |ev: PointerEvent| {
        runtime.interact();
        if !ev.is_primary() || mode.get_untracked() != PlayerMode::Fullscreen {
            return;
        }
        tracker.update_value(|t| t.press(f64::from(ev.client_y()), ev.time_stamp()));
        set_settling.set(false);
    };

    let on_pointer_move = move |ev: PointerEvent| {
        if !tracker.with_value(|t| t.is_active()) {
            return;
        }
        let was_dragging = tracker.with_value(|t| t.is_dragging());
        tracker.update_value(|t| t.move_to(f64::from(ev.client_y()), ev.time_stamp()));
        let (dragging, offset) = tracker.with_value(|t| (t.is_dragging(), t.offset()));
        if !dragging {
            return;
        }
        if !was_dragging {
            // Capture late so taps still reach the buttons underneath
            if let Some(target) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                let _ = target.set_pointer_capture(ev.pointer_id());
            }
        }
        drag_offset.set(bounds.visual_offset(offset));
    };

    let on_pointer_up = move |ev: PointerEvent| {
        let Some(release) = tracker.try_update_value(|t| t.release(ev.time_stamp())).flatten() else {
            return;
        };
        let thresholds = ctx.config.with_value(|c| c.player_drag);
        let on_watch_route = ctx.router.route_untracked().is_watch();
        let action = ctx.store.try_update(|s| release_player_drag(s, &thresholds, release, on_watch_route));
        if let Some(PlayerDragAction::Minimized { leave_watch_route: true }) = action {
            ctx.router.replace(Route::Home);
        }
        set_settling.set(true);
        drag_offset.set(0.0);
    };

    let on_pointer_cancel = move |_: PointerEvent| {
        tracker.update_value(|t| t.cancel());
        set_settling.set(true);
        drag_offset.set(0.0);
    };

    let (sheet_open, set_sheet_open) = signal(false);
    // The sheet and the countdown belong to the full-screen view only
    Effect::new(move |_| {
        if !is_fullscreen() {
            set_sheet_open.set(false);
            runtime.cancel_countdown();
        }
    });

    let is_playing = Signal::derive(move || ctx.store.with(|s| s.is_playing()));
    let current_time = Signal::derive(move || ctx.store.with(|s| s.current_time()));
    let duration = Signal::derive(move || ctx.store.with(|s| s.duration()));
    let skip_seconds = ctx.config.with_value(|c| c.skip_seconds);

    view! {
        <div
            class="global-player"
            class:fullscreen=is_fullscreen
            class:minimized=is_minimized
            class:hidden=move || mode.get() == PlayerMode::Hidden
        >
            <div
                class="player-surface"
                class:settling=move || settling.get()
                style:transform=move || format!("translateY({}px)", drag_offset.get())
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointercancel=on_pointer_cancel
                on:transitionend=move |_| set_settling.set(false)
            >
                <div class="video-frame">
                    <video
                        node_ref=video_ref
                        class="video-element"
                        playsinline=true
                        preload="metadata"
                        on:click=move |_| {
                            match mode.get_untracked() {
                                PlayerMode::Fullscreen => runtime.toggle_play(),
                                PlayerMode::Minimized => runtime.restore(),
                                PlayerMode::Hidden => {}
                            }
                        }
                        on:timeupdate=move |_| forward("timeupdate")
                        on:durationchange=move |_| forward("durationchange")
                        on:loadedmetadata=move |_| forward("loadedmetadata")
                        on:play=move |_| forward("play")
                        on:pause=move |_| forward("pause")
                        on:waiting=move |_| forward("waiting")
                        on:canplay=move |_| forward("canplay")
                        on:ended=move |_| forward("ended")
                        on:error=move |_| forward("error")
                    ></video>

                    <Show when=move || runtime.buffering.get() && runtime.failed.with(Option::is_none)>
                        <div class="buffering-overlay">
                            <div class="spinner"></div>
                        </div>
                    </Show>

                    <Show when=move || runtime.failed.with(Option::is_some)>
                        <div class="error-overlay">
                            <ErrorIcon />
                            <p class="error-title">"Failed to load video"</p>
                            <p class="error-subtitle">"Please try again later"</p>
                        </div>
                    </Show>

                    <Show when=move || is_fullscreen() && runtime.controls_visible.get() && runtime.failed.with(Option::is_none)>
                        <VideoControls
                            is_playing=is_playing
                            current_time=current_time
                            duration=duration
                            skip_seconds=skip_seconds
                            on_toggle_play=move || runtime.toggle_play()
                            on_skip_backward=move || runtime.skip_backward()
                            on_skip_forward=move || runtime.skip_forward()
                            on_seek=Callback::new(move |t: f64| runtime.seek(t))
                        />
                    </Show>
                </div>

                <Show when=is_fullscreen>
                    <div class="video-info">
                        {move || ctx.store.with(|s| s.current_video().cloned()).map(|video| view! {
                            <h1 class="video-title">{video.title}</h1>
                            <span class="video-category">{video.category.label()}</span>
                            {video.description.map(|d| view! { <p class="video-description">{d}</p> })}
                        })}
                    </div>
                    <SwipeUpHint on_open=move || set_sheet_open.set(true) />
                </Show>
            </div>

            <Show when=is_minimized>
                <MiniPlayer runtime=runtime />
            </Show>

            <Show when=move || is_fullscreen() && runtime.up_next.with(Option::is_some)>
                <AutoplayCountdown runtime=runtime />
            </Show>

            <BottomSheet open=sheet_open on_close=move || set_sheet_open.set(false)>
                <RelatedVideosList on_select=Callback::new(move |video: VideoItem| {
                    set_sheet_open.set(false);
                    runtime.select(video);
                }) />
            </BottomSheet>
        </div>
    }
}
