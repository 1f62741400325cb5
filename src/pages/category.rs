//! Category Page
//!
//! Articles sharing one category, newest first.

use leptos::prelude::*;
use portfolio_core::Article;

use crate::components::{ArticleCard, EmptyState};
use crate::context::use_app_context;

#[component]
pub fn CategoryPage(slug: String) -> impl IntoView {
    let ctx = use_app_context();
    let name = ctx
        .content
        .article_category_name(&slug)
        .map(str::to_string)
        .unwrap_or_else(|| slug.clone());
    let articles: Vec<Article> = ctx.content.articles_in_category(&slug).into_iter().cloned().collect();

    let listing = if articles.is_empty() {
        view! { <EmptyState message="No articles in this category yet. Check back soon!" /> }.into_any()
    } else {
        view! {
            <div class="card-grid">
                {articles.into_iter().map(|article| view! { <ArticleCard article /> }).collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <section class="page category">
            <h1>{name}</h1>
            {listing}
        </section>
    }
}
