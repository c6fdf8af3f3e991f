//! Application routes: `/` is the feed, `/watch/:id` the player view

use crate::catalog::Catalog;

const WATCH_PREFIX: &str = "/watch/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Watch(String),
}

impl Route {
    /// Parse a location path. Unrecognized paths fall back to the feed.
    pub fn parse(path: &str) -> Route {
        let Some(rest) = path.strip_prefix(WATCH_PREFIX) else {
            return Route::Home;
        };
        let raw = rest.trim_end_matches('/');
        if raw.is_empty() || raw.contains('/') {
            return Route::Home;
        }
        match urlencoding::decode(raw) {
            Ok(id) => Route::Watch(id.into_owned()),
            Err(_) => Route::Home,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Watch(id) => format!("{}{}", WATCH_PREFIX, urlencoding::encode(id)),
        }
    }

    pub fn is_watch(&self) -> bool {
        matches!(self, Route::Watch(_))
    }

    /// Watch routes for ids missing from `catalog` resolve to the feed
    pub fn resolve(self, catalog: &Catalog) -> Route {
        match self {
            Route::Watch(id) if catalog.require(&id).is_err() => {
                tracing::debug!(%id, "route: unknown video, redirecting home");
                Route::Home
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_paths() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/watch/action-1"), Route::Watch("action-1".to_string()));
        assert_eq!(Route::parse("/watch/action-1/"), Route::Watch("action-1".to_string()));
        assert_eq!(Route::parse("/watch/"), Route::Home);
        assert_eq!(Route::parse("/watch/a/b"), Route::Home);
        assert_eq!(Route::parse("/settings"), Route::Home);
    }

    #[test]
    fn test_path_encodes_id() {
        let route = Route::Watch("my clip".to_string());
        assert_eq!(route.path(), "/watch/my%20clip");
        assert_eq!(Route::parse(&route.path()), route);
        assert_eq!(Route::Home.path(), "/");
    }

    #[test]
    fn test_resolve_unknown_id() {
        let catalog = Catalog::builtin();
        assert_eq!(Route::Watch("nope".to_string()).resolve(catalog), Route::Home);
        assert_eq!(
            Route::Watch("drama-1".to_string()).resolve(catalog),
            Route::Watch("drama-1".to_string())
        );
    }
}
