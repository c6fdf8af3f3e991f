//! Thumbnail image that degrades to a placeholder glyph when it fails to load

use leptos::prelude::*;
use web_sys::console;

/// Loading state for a thumbnail
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageState {
    Loading,
    Ready,
    /// The image failed; show the placeholder instead
    Failed,
}

#[component]
pub fn Thumbnail(
    /// Image URL
    src: String,
    /// Alt text, also the source of the placeholder glyph
    alt: String,
    /// CSS class for the container
    #[prop(default = "".to_string(), into)]
    class: String,
) -> impl IntoView {
    let (state, set_state) = signal(ImageState::Loading);
    // Only flipping to Failed swaps the element; Loading -> Ready keeps the same <img>
    let failed = Memo::new(move |_| state.get() == ImageState::Failed);

    let glyph = alt.chars().next().unwrap_or('?').to_string();
    let src = StoredValue::new(src);
    let alt = StoredValue::new(alt);

    view! {
        <div
            class=format!("{} thumbnail", class)
            class:loading=move || state.get() == ImageState::Loading
        >
            {move || if failed.get() {
                view! { <div class="thumbnail-placeholder">{glyph.clone()}</div> }.into_any()
            } else {
                view! {
                    <img
                        src=src.get_value()
                        alt=alt.get_value()
                        class="thumbnail-image"
                        loading="lazy"
                        on:load=move |_| set_state.set(ImageState::Ready)
                        on:error=move |_| {
                            console::warn_1(&format!("Thumbnail failed to load: {}", src.get_value()).into());
                            set_state.set(ImageState::Failed);
                        }
                    />
                }.into_any()
            }}
        </div>
    }
}
