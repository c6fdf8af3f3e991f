//! `/watch/:id` route
//!
//! The player itself is drawn by the global player overlay. This route only
//! loads the requested video into the store and fills the page behind the
//! overlay with placeholders.

use leptos::prelude::*;
use minireel_core::Catalog;
use crate::app::use_player;
use super::VideoCardSkeleton;

#[component]
pub fn PlayerPage(id: String) -> impl IntoView {
    let ctx = use_player();

    Catalog::builtin().require(&id).map(|video| {
        let video = video.clone();
        Effect::new(move |_| {
            // Already on screen (restored from the mini player): keep its position
            if ctx.store.with_untracked(|s| s.needs_video(&video.id)) {
                ctx.store.update(|s| s.set_video(video.clone()));
            }
        });

        view! {
            <div class="player-page" aria-hidden="true">
                {(0..3).map(|_| view! { <VideoCardSkeleton /> }).collect::<Vec<_>>()}
            </div>
        }
    })
}
