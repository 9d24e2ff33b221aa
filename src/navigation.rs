//! Navigation
//!
//! The single boundary between the app and the browser location. Views
//! derive their state from the location signal and write back only through
//! `push` / `replace`.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::query::ViewState;

/// Current path and query string (without `?`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: String,
}

impl Location {
    /// Split an app-relative href like `/search?search=x`
    pub fn parse(href: &str) -> Self {
        let href = href.split('#').next().unwrap_or_default();
        match href.split_once('?') {
            Some((path, query)) => Self {
                path: normalize_path(path),
                query: query.to_string(),
            },
            None => Self {
                path: normalize_path(href),
                query: String::new(),
            },
        }
    }

    fn current() -> Self {
        let Some(location) = web_sys::window().map(|w| w.location()) else {
            return Self::default();
        };
        let path = location.pathname().unwrap_or_default();
        let search = location.search().unwrap_or_default();
        Self {
            path: normalize_path(&path),
            query: search.trim_start_matches('?').to_string(),
        }
    }
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// App screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Search,
    Submit,
    Login,
    Dashboard,
    BrandReview(String),
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let path = normalize_path(path);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["search"] => Route::Search,
            ["submit"] => Route::Submit,
            ["login"] => Route::Login,
            ["dashboard"] => Route::Dashboard,
            ["dashboard", id] => Route::BrandReview(id.to_string()),
            _ => Route::NotFound,
        }
    }
}

#[derive(Clone, Copy)]
pub struct Navigator {
    location: RwSignal<Location>,
}

impl Navigator {
    /// Read the browser location and follow back/forward navigation
    pub fn install() -> Self {
        let location = RwSignal::new(Location::current());
        let _ = window_event_listener(leptos::ev::popstate, move |_| {
            let next = Location::current();
            log::debug!("[Navigator] popstate -> {}?{}", next.path, next.query);
            location.set(next);
        });
        Self { location }
    }

    pub fn route(&self) -> Route {
        self.location.with(|loc| Route::from_path(&loc.path))
    }

    /// View state parsed from the current query string
    pub fn view_state(&self) -> ViewState {
        self.location.with(|loc| ViewState::from_query_string(&loc.query))
    }

    /// New history entry
    pub fn push(&self, href: &str) {
        self.update_history(href, false);
    }

    /// Overwrite the current entry (filter edits, redirects)
    pub fn replace(&self, href: &str) {
        self.update_history(href, true);
    }

    fn update_history(&self, href: &str, replace: bool) {
        let next = Location::parse(href);
        if self.location.with_untracked(|loc| *loc == next) {
            return;
        }
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let result = if replace {
                history.replace_state_with_url(&JsValue::NULL, "", Some(href))
            } else {
                history.push_state_with_url(&JsValue::NULL, "", Some(href))
            };
            if let Err(e) = result {
                log::error!("[Navigator] history update to {} failed: {:?}", href, e);
            }
        }
        self.location.set(next);
    }
}

pub fn use_navigator() -> Navigator {
    expect_context::<Navigator>()
}
