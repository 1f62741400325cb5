//! Router Link
//!
//! Plain anchor in hash mode; in path mode the click is intercepted and
//! routed through the History API. Either way the mobile menu closes.

use leptos::prelude::*;
use portfolio_core::{Route, RouterMode};
use web_sys::MouseEvent;

use crate::context::use_app_context;
use crate::router;
use crate::store::{store_close_menu, use_site_store};

#[component]
pub fn Link(
    route: Route,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_site_store();
    let mode = ctx.config.router_mode;
    let href = ctx.href(&route);

    let on_click = move |ev: MouseEvent| match mode {
        RouterMode::Hash => store_close_menu(&store),
        RouterMode::Path => {
            // Let the browser handle new-tab and new-window clicks
            if ev.button() != 0 || ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key() {
                return;
            }
            ev.prevent_default();
            router::navigate(store, mode, route.clone());
        }
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
