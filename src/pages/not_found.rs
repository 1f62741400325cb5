use leptos::prelude::*;
use portfolio_core::Route;

use crate::components::Link;

#[component]
pub fn NotFoundPage(path: String) -> impl IntoView {
    view! {
        <section class="page not-found">
            <h1>"Page Not Found"</h1>
            <p>"Nothing lives at " <code>{path}</code> "."</p>
            <Link route=Route::Home class="button">"Back to Home"</Link>
        </section>
    }
}
