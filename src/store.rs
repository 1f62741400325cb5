//! Site UI State Store
//!
//! Uses Leptos reactive_stores so the page switch only reacts to route
//! changes and the header only to menu changes.

use leptos::prelude::*;
use portfolio_core::Route;
use reactive_stores::Store;

#[derive(Clone, Debug, Default, Store)]
pub struct SiteState {
    /// Page currently shown
    pub route: Route,
    /// Mobile navigation menu
    pub menu_open: bool,
}

impl SiteState {
    pub fn new(route: Route) -> Self {
        Self { route, menu_open: false }
    }
}

/// Type alias for the store
pub type SiteStore = Store<SiteState>;

/// Get the site store from context
pub fn use_site_store() -> SiteStore {
    expect_context::<SiteStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Current route (tracked)
pub fn store_route(store: &SiteStore) -> Route {
    store.route().get()
}

/// Whether `route` is already shown (untracked)
pub fn store_is_on(store: &SiteStore, route: &Route) -> bool {
    store.route().with_untracked(|current| current == route)
}

/// Whether the menu is open (tracked)
pub fn store_menu_open(store: &SiteStore) -> bool {
    store.menu_open().get()
}

/// Show a page; navigation always closes the menu
pub fn store_navigate(store: &SiteStore, route: Route) {
    store.menu_open().set(false);
    store.route().set(route);
}

pub fn store_toggle_menu(store: &SiteStore) {
    store.menu_open().update(|open| *open = !*open);
}

pub fn store_close_menu(store: &SiteStore) {
    store.menu_open().set(false);
}
