//! Blog Card

use leptos::prelude::*;
use portfolio_core::{BlogPost, Route};

use crate::components::Link;
use crate::context::use_app_context;

#[component]
pub fn BlogCard(post: BlogPost) -> impl IntoView {
    let ctx = use_app_context();
    let cover = ctx.asset(post.cover_or_default());
    let route = Route::BlogPost(post.id.clone());

    view! {
        <article class="card blog-card">
            <img class="card-image" src=cover alt=post.title.clone() loading="lazy" />
            <div class="card-body">
                <h3 class="card-title">
                    <Link route=route.clone()>{post.title.clone()}</Link>
                </h3>
                <p class="card-meta">
                    <span>{post.published.to_string()}</span>
                    <span>" · " {post.author.clone()}</span>
                </p>
                <p class="card-excerpt">{post.excerpt.clone()}</p>
                <ul class="tag-list">
                    {post.tags.into_iter().map(|tag| view! { <li class="tag">{tag}</li> }).collect_view()}
                </ul>
                <Link route=route class="read-more">"Read More →"</Link>
            </div>
        </article>
    }
}
