use leptos::prelude::*;
use minireel_core::route::Route;
use minireel_core::{Catalog, PlayerConfig, PlayerMode, PlayerStore};
use crate::components::{GlobalPlayer, HomePage, PlayerPage};
use crate::config::load_config;
use crate::router::Router;

/// Shared by every view: the global player state, tuning and navigation
#[derive(Clone, Copy)]
pub struct PlayerContext {
    pub store: RwSignal<PlayerStore>,
    pub config: StoredValue<PlayerConfig>,
    pub router: Router,
}

pub fn use_player() -> PlayerContext {
    expect_context::<PlayerContext>()
}

#[component]
pub fn App() -> impl IntoView {
    let ctx = PlayerContext {
        store: RwSignal::new(PlayerStore::new()),
        config: StoredValue::new(load_config()),
        router: Router::install(),
    };
    provide_context(ctx);

    // Unknown ids are not an error, just the feed
    Effect::new(move |_| {
        let route = ctx.router.route();
        let resolved = route.clone().resolve(Catalog::builtin());
        if resolved != route {
            ctx.router.replace(resolved);
        }
    });

    // Leaving the watch route (Back, or any link home) while full screen
    // lands in the same place as the swipe: a minimized player.
    Effect::new(move |_| {
        let route = ctx.router.route();
        if !route.is_watch() && ctx.store.with_untracked(|s| s.mode() == PlayerMode::Fullscreen) {
            ctx.store.update(|s| s.minimize());
        }
    });

    let content = move || match ctx.router.route().resolve(Catalog::builtin()) {
        Route::Home => view! { <HomePage /> }.into_any(),
        Route::Watch(id) => view! { <PlayerPage id=id /> }.into_any(),
    };

    view! {
        <div class="app-container">
            <ErrorBoundary fallback=|errors| {
                let listed = errors.clone();
                view! {
                    <div class="error-boundary">
                        <h2>"Something went wrong"</h2>
                        <ul class="error-list">
                            {move || listed.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()}
                        </ul>
                        <button
                            class="retry-button"
                            on:click=move |_| errors.update(|e| *e = Default::default())
                        >
                            "Try again"
                        </button>
                    </div>
                }
            }>
                {content}
            </ErrorBoundary>
            <GlobalPlayer />
        </div>
    }
}
