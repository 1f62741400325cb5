//! Blog Post Page
//!
//! Remote bodies are fetched once per mount. The request is ticketed and
//! aborted when the page unmounts, so a late response never touches a page
//! that is gone.

use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_core::domain::estimate_read_minutes;
use portfolio_core::loader::{LoadState, Loader, LOAD_ERROR_TEXT};
use portfolio_core::{BlogBody, BlogPost, Route};
use tracing::{debug, info, warn};
use web_sys::AbortController;

use crate::components::{Link, MarkdownView};
use crate::context::use_app_context;
use crate::fetch::fetch_text;
use crate::markdown::render_markdown;

#[component]
pub fn BlogPostPage(slug: String) -> impl IntoView {
    let ctx = use_app_context();
    let post = match ctx.content.post_by_slug(&slug) {
        Ok(post) => post.clone(),
        Err(err) => {
            info!(error = %err, "blog post lookup failed");
            return view! { <BlogPostNotFound /> }.into_any();
        }
    };

    let loader = RwSignal::new(Loader::<String>::new());
    let abort = StoredValue::new_local(None::<AbortController>);

    match &post.body {
        BlogBody::Inline { markdown } => loader.update(|l| l.ready(markdown.clone())),
        BlogBody::Remote { url } => {
            let url = ctx.asset(url);
            if let Some(ticket) = loader.try_update(Loader::begin) {
                let controller = match AbortController::new() {
                    Ok(controller) => Some(controller),
                    Err(err) => {
                        warn!(error = ?err, "AbortController unavailable");
                        None
                    }
                };
                let signal = controller.as_ref().map(AbortController::signal);
                abort.set_value(controller);

                debug!(url = %url, "fetching post body");
                spawn_local(async move {
                    let result = fetch_text(&url, signal.as_ref()).await;
                    loader.try_update(|l| l.finish(ticket, result));
                });
            }
        }
    }

    on_cleanup(move || {
        loader.try_update(Loader::cancel);
        abort.try_with_value(|controller| {
            if let Some(controller) = controller {
                controller.abort();
            }
        });
    });

    let config = ctx.config.clone();
    let body = move || {
        loader.with(|l| match l.state() {
            LoadState::Idle | LoadState::Loading => {
                view! { <p class="loading">"Loading article..."</p> }.into_any()
            }
            LoadState::Ready(markdown) => {
                view! { <MarkdownView html=render_markdown(markdown, &config) /> }.into_any()
            }
            LoadState::Failed(_) => view! { <p class="load-error">{LOAD_ERROR_TEXT}</p> }.into_any(),
        })
    };

    let read_time = move || {
        loader.with(|l| match l.state() {
            LoadState::Ready(markdown) => Some(format!(" · {} min read", estimate_read_minutes(markdown))),
            _ => None,
        })
    };

    view! {
        <article class="page blog-post">
            <PostHeader post=post.clone() />
            <p class="post-meta">
                <span>{post.published.to_string()}</span>
                <span>" · " {post.author.clone()}</span>
                <span>{read_time}</span>
            </p>
            {body}
            <Link route=Route::Blog class="back-link">"← Back to Blog"</Link>
        </article>
    }
    .into_any()
}

#[component]
fn PostHeader(post: BlogPost) -> impl IntoView {
    let ctx = use_app_context();
    let cover = post.featured_image().map(|src| {
        view! { <img class="post-cover" src=ctx.asset(src) alt=post.title.clone() /> }
    });

    view! {
        <header class="post-header">
            <h1>{post.title.clone()}</h1>
            <ul class="tag-list">
                {post.tags.into_iter().map(|tag| view! { <li class="tag">{tag}</li> }).collect_view()}
            </ul>
            {cover}
        </header>
    }
}

#[component]
fn BlogPostNotFound() -> impl IntoView {
    view! {
        <section class="page not-found">
            <h1>"Blog Post Not Found"</h1>
            <p>"The blog post you're looking for doesn't exist."</p>
            <Link route=Route::Blog class="button">"Back to Blog"</Link>
        </section>
    }
}
