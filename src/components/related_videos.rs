//! Same-category suggestions for the video on screen

use leptos::prelude::*;
use minireel_core::format::format_duration;
use minireel_core::{Catalog, VideoItem};
use crate::app::use_player;
use super::{ChevronUpIcon, Thumbnail};

#[component]
pub fn RelatedVideosList(#[prop(into)] on_select: Callback<VideoItem>) -> impl IntoView {
    let ctx = use_player();
    let current = Memo::new(move |_| ctx.store.with(|s| s.current_video().cloned()));

    move || {
        let Some(current) = current.get() else {
            return ().into_any();
        };
        let related = Catalog::builtin().related_to(&current);

        view! {
            <div class="related-videos">
                <h2 class="related-title">{format!("More in {}", current.category)}</h2>
                {if related.is_empty() {
                    view! { <p class="related-empty">"No more videos in this category"</p> }.into_any()
                } else {
                    view! {
                        <ul class="related-list">
                            {related.into_iter().map(|video| view! {
                                <RelatedVideoItem video=video on_select=on_select />
                            }).collect::<Vec<_>>()}
                        </ul>
                    }.into_any()
                }}
            </div>
        }.into_any()
    }
}

#[component]
pub fn RelatedVideoItem(video: VideoItem, on_select: Callback<VideoItem>) -> impl IntoView {
    let picked = video.clone();

    view! {
        <li class="related-item" on:click=move |_| on_select.run(picked.clone())>
            <div class="related-thumb">
                <Thumbnail src=video.thumbnail.clone() alt=video.title.clone() />
                <span class="duration-badge">{format_duration(video.duration)}</span>
            </div>
            <div class="related-info">
                <span class="related-item-title">{video.title.clone()}</span>
                <span class="related-item-category">{video.category.label()}</span>
            </div>
        </li>
    }
}

/// Tap target at the bottom of the full-screen player that opens the related sheet
#[component]
pub fn SwipeUpHint(#[prop(into)] on_open: Callback<()>) -> impl IntoView {
    view! {
        <button
            class="swipe-hint"
            on:pointerdown=|ev| ev.stop_propagation()
            on:click=move |_| on_open.run(())
        >
            <ChevronUpIcon />
            <span>"Related videos"</span>
        </button>
    }
}
