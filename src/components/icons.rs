//! Inline SVG icons

use leptos::prelude::*;

#[component]
pub fn PlayIcon(#[prop(default = 24)] size: u32) -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" fill="currentColor" width=size height=size>
            <path d="M8 5v14l11-7z" />
        </svg>
    }
}

#[component]
pub fn PauseIcon(#[prop(default = 24)] size: u32) -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" fill="currentColor" width=size height=size>
            <path d="M6 19h4V5H6v14zm8-14v14h4V5h-4z" />
        </svg>
    }
}

#[component]
pub fn CloseIcon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" fill="currentColor" width="24" height="24">
            <path d="M19 6.41L17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z" />
        </svg>
    }
}

#[component]
pub fn SkipBackIcon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" fill="currentColor" width="24" height="24">
            <path d="M12 5V1L7 6l5 5V7c3.31 0 6 2.69 6 6s-2.69 6-6 6-6-2.69-6-6H4c0 4.42 3.58 8 8 8s8-3.58 8-8-3.58-8-8-8z" />
        </svg>
    }
}

#[component]
pub fn SkipForwardIcon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" fill="currentColor" width="24" height="24">
            <path d="M12 5V1l5 5-5 5V7c-3.31 0-6 2.69-6 6s2.69 6 6 6 6-2.69 6-6h2c0 4.42-3.58 8-8 8s-8-3.58-8-8 3.58-8 8-8z" />
        </svg>
    }
}

#[component]
pub fn ChevronUpIcon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" fill="currentColor" width="20" height="20">
            <path d="M7.41 15.41L12 10.83l4.59 4.58L18 14l-6-6-6 6z" />
        </svg>
    }
}

#[component]
pub fn ErrorIcon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" fill="currentColor" width="48" height="48">
            <path d="M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm1 15h-2v-2h2v2zm0-4h-2V7h2v6z" />
        </svg>
    }
}
