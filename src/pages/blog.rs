//! Blog Index

use leptos::prelude::*;
use portfolio_core::BlogPost;

use crate::components::{BlogCard, EmptyState};
use crate::context::use_app_context;

#[component]
pub fn BlogPage() -> impl IntoView {
    let ctx = use_app_context();
    let posts: Vec<BlogPost> = ctx.content.posts_newest_first().into_iter().cloned().collect();

    let listing = if posts.is_empty() {
        view! { <EmptyState message="No blog posts yet. Check back soon!" /> }.into_any()
    } else {
        view! {
            <div class="card-grid">
                {posts.into_iter().map(|post| view! { <BlogCard post /> }).collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <section class="page blog">
            <h1>"Blog"</h1>
            <p class="page-intro">"Notes on data science, machine learning and building things."</p>
            {listing}
        </section>
    }
}
