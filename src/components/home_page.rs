//! Home feed: one horizontally scrolling row per category

use leptos::prelude::*;
use minireel_core::{Catalog, PlayerMode};
use crate::app::use_player;
use super::CategorySection;

const BUILD_HASH: &str = env!("BUILD_HASH");
const BUILD_TIMESTAMP: &str = env!("BUILD_TIMESTAMP");

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_player();
    let groups = Catalog::builtin().grouped_by_category();
    let mini_visible = move || ctx.store.with(|s| s.mode() == PlayerMode::Minimized);

    view! {
        <div class="home-page" class:compact=mini_visible>
            <header class="home-header">
                <h1 class="logo">"Minireel"</h1>
            </header>
            <main class="feed">
                {groups.into_iter().map(|group| view! { <CategorySection group=group /> }).collect::<Vec<_>>()}
            </main>
            <footer class="build-info">{format!("build {} ({})", BUILD_HASH, BUILD_TIMESTAMP)}</footer>
        </div>
    }
}
