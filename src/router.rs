//! History-API routing
//!
//! The current route lives in a signal. `push`/`replace` update both the
//! browser history and the signal; Back/Forward arrive through `popstate`.

use leptos::prelude::*;
use minireel_core::route::Route;
use wasm_bindgen::JsValue;

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

#[derive(Clone, Copy)]
pub struct Router {
    route: RwSignal<Route>,
}

impl Router {
    /// Read the initial location and start listening for history navigation
    pub fn install() -> Self {
        let route = RwSignal::new(Route::parse(&current_path()));

        let handle = window_event_listener(leptos::ev::popstate, move |_| {
            route.set(Route::parse(&current_path()));
        });
        // The router lives as long as the app
        std::mem::forget(handle);

        Self { route }
    }

    pub fn route(&self) -> Route {
        self.route.get()
    }

    pub fn route_untracked(&self) -> Route {
        self.route.get_untracked()
    }

    /// Navigate, adding a history entry
    pub fn push(&self, route: Route) {
        self.navigate(route, false);
    }

    /// Navigate, replacing the current history entry
    pub fn replace(&self, route: Route) {
        self.navigate(route, true);
    }

    fn navigate(&self, route: Route, replace: bool) {
        let path = route.path();
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let result = if replace {
                history.replace_state_with_url(&JsValue::NULL, "", Some(&path))
            } else {
                history.push_state_with_url(&JsValue::NULL, "", Some(&path))
            };
            if let Err(e) = result {
                tracing::warn!(%path, error = ?e, "router: history update failed");
            }
        }
        tracing::debug!(%path, replace, "router: navigate");
        self.route.set(route);
    }
}
