//! "Up next" overlay shown after a video ends in full screen

use leptos::prelude::*;
use crate::player::{PlayerRuntime, UpNext};
use super::Thumbnail;

/// Circumference of the countdown ring (r = 16)
const RING_CIRCUMFERENCE: f64 = 100.53;

/// Stroke offset that leaves the unexpired share of the ring drawn
fn ring_offset(remaining: u32, total: u32) -> f64 {
    if total == 0 {
        return RING_CIRCUMFERENCE;
    }
    RING_CIRCUMFERENCE * (1.0 - f64::from(remaining) / f64::from(total))
}

#[component]
pub fn AutoplayCountdown(runtime: PlayerRuntime) -> impl IntoView {
    let up_next = runtime.up_next;
    // The card only changes when the next video does
    let next = Memo::new(move |_| up_next.with(|u| u.as_ref().map(|u| u.video.clone())));
    let remaining = move || up_next.with(|u| u.as_ref().map(|u| u.remaining).unwrap_or(0));
    let offset = move || up_next.with(|u| match u {
        Some(UpNext { remaining, total, .. }) => ring_offset(*remaining, *total),
        None => RING_CIRCUMFERENCE,
    });

    view! {
        <div class="countdown-overlay" on:pointerdown=|ev| ev.stop_propagation()>
            <div class="countdown-card">
                <div class="countdown-header">
                    <span class="countdown-label">"Up next"</span>
                    <div class="countdown-ring">
                        <svg viewBox="0 0 36 36" width="40" height="40">
                            <circle class="ring-track" cx="18" cy="18" r="16" fill="none" stroke-width="3" />
                            <circle
                                class="ring-progress"
                                cx="18"
                                cy="18"
                                r="16"
                                fill="none"
                                stroke-width="3"
                                stroke-dasharray=RING_CIRCUMFERENCE.to_string()
                                stroke-dashoffset=move || offset().to_string()
                            />
                        </svg>
                        <span class="countdown-seconds">{remaining}</span>
                    </div>
                </div>

                {move || next.get().map(|video| view! {
                    <div class="countdown-next">
                        <Thumbnail src=video.thumbnail.clone() alt=video.title.clone() class="countdown-thumb" />
                        <div class="countdown-next-info">
                            <span class="countdown-next-title">{video.title.clone()}</span>
                            <span class="countdown-next-category">{video.category.label()}</span>
                        </div>
                    </div>
                })}

                <div class="countdown-actions">
                    <button class="countdown-cancel" on:click=move |_| runtime.cancel_countdown()>"Cancel"</button>
                    <button class="countdown-play" on:click=move |_| runtime.play_now()>"Play now"</button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_offset() {
        assert_eq!(ring_offset(5, 5), 0.0);
        assert_eq!(ring_offset(0, 5), RING_CIRCUMFERENCE);
        assert!((ring_offset(4, 5) - 20.106).abs() < 1e-3);
        assert_eq!(ring_offset(3, 0), RING_CIRCUMFERENCE);
    }
}
