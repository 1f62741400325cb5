//! Site Header
//!
//! Site name, primary navigation and the mobile menu toggle.

use leptos::prelude::*;
use portfolio_core::route::PRIMARY_NAV;
use portfolio_core::Route;

use crate::components::Link;
use crate::context::use_app_context;
use crate::store::{store_menu_open, store_route, store_toggle_menu, use_site_store};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_site_store();

    let nav_class = move || {
        if store_menu_open(&store) {
            "site-nav open"
        } else {
            "site-nav"
        }
    };

    let nav_items = PRIMARY_NAV
        .iter()
        .map(|(route, label)| {
            let section = route.clone();
            let item_class = move || {
                if section.is_section_of(&store_route(&store)) {
                    "nav-item active"
                } else {
                    "nav-item"
                }
            };
            view! {
                <li class=item_class>
                    <Link route=route.clone()>{*label}</Link>
                </li>
            }
        })
        .collect_view();

    view! {
        <header class="site-header">
            <Link route=Route::Home class="site-name">
                {ctx.config.site_title.clone()}
            </Link>
            <button
                class="menu-toggle"
                aria-label="Toggle navigation"
                aria-expanded=move || store_menu_open(&store).to_string()
                on:click=move |_| store_toggle_menu(&store)
            >
                "☰"
            </button>
            <nav class=nav_class>
                <ul>{nav_items}</ul>
            </nav>
        </header>
    }
}
