//! Site Footer

use leptos::prelude::*;
use portfolio_core::Route;

use crate::components::Link;
use crate::context::use_app_context;

const QUICK_LINKS: &[(Route, &str)] = &[
    (Route::Home, "Home"),
    (Route::About, "About"),
    (Route::Blog, "Blog"),
    (Route::Gallery, "Gallery"),
    (Route::Contact, "Contact"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_app_context();
    let profile = ctx.content.resume().profile.clone();
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="site-footer">
            <nav class="footer-links">
                {QUICK_LINKS
                    .iter()
                    .map(|(route, label)| view! { <Link route=route.clone()>{*label}</Link> })
                    .collect_view()}
            </nav>
            <div class="footer-social">
                {profile
                    .social
                    .into_iter()
                    .map(|link| {
                        view! {
                            <a href=link.url target="_blank" rel="noopener noreferrer" title=link.label.clone()>
                                {link.short}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="copyright">{format!("© {} {}. All rights reserved.", year, profile.name)}</p>
        </footer>
    }
}
