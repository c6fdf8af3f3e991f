//! Shimmer placeholders

use leptos::prelude::*;

#[component]
pub fn Skeleton(
    #[prop(default = "100%".to_string(), into)]
    width: String,
    #[prop(default = "100%".to_string(), into)]
    height: String,
    #[prop(default = "8px".to_string(), into)]
    radius: String,
    #[prop(default = "".to_string(), into)]
    class: String,
) -> impl IntoView {
    view! {
        <div
            class=format!("skeleton {}", class)
            style:width=width
            style:height=height
            style:border-radius=radius
        ></div>
    }
}

/// Placeholder with the footprint of a video card
#[component]
pub fn VideoCardSkeleton() -> impl IntoView {
    view! {
        <div class="video-card-skeleton">
            <Skeleton height="0" class="skeleton-thumbnail" />
            <div class="skeleton-info">
                <Skeleton height="16px" width="90%" radius="4px" />
                <Skeleton height="12px" width="40%" radius="4px" />
            </div>
        </div>
    }
}
