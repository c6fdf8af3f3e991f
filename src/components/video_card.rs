//! Feed cards and the per-category rows they sit in

use leptos::prelude::*;
use minireel_core::format::format_duration;
use minireel_core::route::Route;
use minireel_core::{CategoryGroup, VideoItem};
use crate::app::use_player;
use super::Thumbnail;

#[component]
pub fn VideoCard(video: VideoItem) -> impl IntoView {
    let ctx = use_player();
    let route = Route::Watch(video.id.clone());

    view! {
        <article class="video-card" on:click=move |_| ctx.router.push(route.clone())>
            <div class="video-card-thumb">
                <Thumbnail src=video.thumbnail.clone() alt=video.title.clone() />
                <span class="duration-badge">{format_duration(video.duration)}</span>
            </div>
            <div class="video-card-info">
                <h3 class="video-card-title">{video.title.clone()}</h3>
                <span class="video-card-category">{video.category.label()}</span>
            </div>
        </article>
    }
}

#[component]
pub fn CategorySection(group: CategoryGroup) -> impl IntoView {
    view! {
        <section class="category-section">
            <h2 class="category-title">{group.category.label()}</h2>
            <div class="category-scroll">
                <div class="category-row">
                    {group.videos.into_iter().map(|video| view! { <VideoCard video=video /> }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
