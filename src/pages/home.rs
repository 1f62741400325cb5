//! Home Page
//!
//! Intro plus the most recent articles.

use leptos::prelude::*;
use portfolio_core::{Article, Route};

use crate::components::{ArticleCard, Link};
use crate::context::use_app_context;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let profile = ctx.content.resume().profile.clone();
    let recent: Vec<Article> = ctx
        .content
        .recent_articles(ctx.config.recent_articles)
        .into_iter()
        .cloned()
        .collect();

    view! {
        <section class="hero">
            <h1>{profile.name}</h1>
            <p class="tagline">{profile.tagline}</p>
            <div class="hero-actions">
                <Link route=Route::About class="button">"About Me"</Link>
                <Link route=Route::Contact class="button secondary">"Get in Touch"</Link>
            </div>
        </section>
        <section class="recent-articles">
            <h2>"Recent Articles"</h2>
            <div class="card-grid">
                {recent.into_iter().map(|article| view! { <ArticleCard article /> }).collect_view()}
            </div>
        </section>
    }
}
