//! Client-side Routing
//!
//! Keeps the store's route in sync with the address bar. Hash mode follows
//! `hashchange`; path mode pushes History entries and follows `popstate`.

use leptos::ev;
use leptos::prelude::*;
use portfolio_core::{Route, RouterMode};
use tracing::{debug, info, warn};
use wasm_bindgen::JsValue;

use crate::store::{store_is_on, store_navigate, SiteStore};

/// Route named by the address bar. `None` in hash mode when the hash is an
/// in-page anchor, which leaves the current page in place.
fn address_route(mode: RouterMode) -> Option<Route> {
    let location = web_sys::window()?.location();
    match mode {
        RouterMode::Hash => Route::from_hash(&location.hash().unwrap_or_default()),
        RouterMode::Path => Some(Route::parse(&location.pathname().unwrap_or_default())),
    }
}

/// Route for the current address bar contents
pub fn location_route(mode: RouterMode) -> Route {
    address_route(mode).unwrap_or_default()
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

fn on_location_change(store: SiteStore, mode: RouterMode) {
    // Anchor jumps stay on the page; the browser scrolls to the target
    let Some(route) = address_route(mode) else {
        debug!("in-page anchor");
        return;
    };
    if store_is_on(&store, &route) {
        return;
    }
    info!(path = %route.path(), "route changed");
    store_navigate(&store, route);
    scroll_to_top();
}

/// Follow address bar changes for the lifetime of the current owner
pub fn bind_location_listener(store: SiteStore, mode: RouterMode) {
    let handle = match mode {
        RouterMode::Hash => window_event_listener(ev::hashchange, move |_| on_location_change(store, mode)),
        RouterMode::Path => window_event_listener(ev::popstate, move |_| on_location_change(store, mode)),
    };
    on_cleanup(move || handle.remove());
}

/// Programmatic navigation
pub fn navigate(store: SiteStore, mode: RouterMode, route: Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match mode {
        // hashchange fires and updates the store
        RouterMode::Hash => {
            if let Err(err) = window.location().set_hash(&route.path()) {
                warn!(error = ?err, "failed to set location hash");
            }
        }
        RouterMode::Path => {
            let path = route.path();
            match window.history() {
                Ok(history) => {
                    if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(path.as_str())) {
                        warn!(error = ?err, "pushState failed");
                    }
                }
                Err(err) => warn!(error = ?err, "history unavailable"),
            }
            debug!(path = %path, "navigate");
            store_navigate(&store, route);
            scroll_to_top();
        }
    }
}
