//! Article Card
//!
//! Summary tile used by the home, category and related-article listings.

use leptos::prelude::*;
use portfolio_core::{Article, Route};

use crate::components::Link;
use crate::context::use_app_context;

#[component]
pub fn ArticleCard(article: Article) -> impl IntoView {
    let ctx = use_app_context();
    let image = ctx.asset(&article.image);
    let route = Route::Article(article.id.to_string());
    let category = Route::Category(article.category_slug());

    view! {
        <article class="card article-card">
            <img class="card-image" src=image alt=article.title.clone() loading="lazy" />
            <div class="card-body">
                <Link route=category class="card-category">{article.category.clone()}</Link>
                <h3 class="card-title">
                    <Link route=route.clone()>{article.title.clone()}</Link>
                </h3>
                <p class="card-meta">
                    <span>{article.published.to_string()}</span>
                    {article.read_time.clone().map(|t| view! { <span>" · " {t}</span> })}
                </p>
                <p class="card-excerpt">{article.excerpt.clone()}</p>
                <Link route=route class="read-more">"Read More →"</Link>
            </div>
        </article>
    }
}
