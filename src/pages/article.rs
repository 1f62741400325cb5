//! Article Page
//!
//! Bundled article with author block and related articles. The id comes
//! straight from the URL; anything that doesn't resolve gets a not-found view.

use leptos::prelude::*;
use portfolio_core::{Article, Route};
use tracing::info;

use crate::components::{ArticleCard, Link, MarkdownView};
use crate::context::use_app_context;
use crate::markdown::render_markdown;

#[component]
pub fn ArticlePage(id: String) -> impl IntoView {
    let ctx = use_app_context();
    let article = match ctx.content.article_by_param(&id) {
        Ok(article) => article.clone(),
        Err(err) => {
            info!(error = %err, "article lookup failed");
            return view! { <ArticleNotFound /> }.into_any();
        }
    };

    let related: Vec<Article> = ctx.content.related_articles(&article).into_iter().cloned().collect();
    let html = render_markdown(&article.body, &ctx.config);
    let image = ctx.asset(&article.image);
    let category = Route::Category(article.category_slug());

    let related_section = (!related.is_empty()).then(|| {
        view! {
            <section class="related-articles">
                <h2>"Related Articles"</h2>
                <div class="card-grid">
                    {related.into_iter().map(|article| view! { <ArticleCard article /> }).collect_view()}
                </div>
            </section>
        }
    });

    view! {
        <article class="page article">
            <header class="post-header">
                <Link route=category class="card-category">{article.category.clone()}</Link>
                <h1>{article.title.clone()}</h1>
                <p class="post-meta">
                    <span>{article.published.to_string()}</span>
                    {article.read_time.clone().map(|t| view! { <span>" · " {t}</span> })}
                </p>
                <img class="post-cover" src=image alt=article.title.clone() />
            </header>
            <MarkdownView html />
            <aside class="author-block">
                <p class="author-label">"Written by"</p>
                <p class="author-name">{article.author.clone()}</p>
            </aside>
            {related_section}
            <Link route=Route::Home class="back-link">"← Back to Home"</Link>
        </article>
    }
    .into_any()
}

#[component]
fn ArticleNotFound() -> impl IntoView {
    view! {
        <section class="page not-found">
            <h1>"Article Not Found"</h1>
            <p>"The article you're looking for doesn't exist."</p>
            <Link route=Route::Home class="button">"Back to Home"</Link>
        </section>
    }
}
