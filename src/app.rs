//! Portfolio Frontend App
//!
//! Loads the bundled content, provides context and switches pages on the
//! current route.

use leptos::prelude::*;
use portfolio_core::{ContentStore, Route, SiteConfig};
use reactive_stores::Store;
use tracing::{error, info};

use crate::components::{Footer, Header};
use crate::context::AppContext;
use crate::pages::{
    AboutPage, ArticlePage, BlogPage, BlogPostPage, CategoryPage, ContactPage, EducationPage,
    ExperiencePage, GalleryPage, HomePage, NotFoundPage, ProjectsPage, SkillsPage,
};
use crate::router::{bind_location_listener, location_route};
use crate::store::{store_route, SiteState};

#[component]
pub fn App(site_config: SiteConfig) -> impl IntoView {
    let content = match ContentStore::bundled() {
        Ok(content) => content,
        Err(err) => {
            error!(error = %err, "bundled content failed validation");
            return view! { <ContentFailure /> }.into_any();
        }
    };

    let mode = site_config.router_mode;
    let ctx = AppContext::new(content, site_config);
    provide_context(ctx.clone());

    let store = Store::new(SiteState::new(location_route(mode)));
    provide_context(store);
    bind_location_listener(store, mode);
    info!(mode = ?mode, "portfolio started");

    // Document title follows the page
    let site_title = ctx.config.site_title.clone();
    Effect::new(move |_| {
        let route = store_route(&store);
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&format!("{} | {}", route.title(), site_title));
        }
    });

    view! {
        <Header />
        <main class="site-main">{move || render_page(store_route(&store))}</main>
        <Footer />
    }
    .into_any()
}

fn render_page(route: Route) -> AnyView {
    match route {
        Route::Home => view! { <HomePage /> }.into_any(),
        Route::About => view! { <AboutPage /> }.into_any(),
        Route::Experience => view! { <ExperiencePage /> }.into_any(),
        Route::Education => view! { <EducationPage /> }.into_any(),
        Route::Skills => view! { <SkillsPage /> }.into_any(),
        Route::Projects => view! { <ProjectsPage /> }.into_any(),
        Route::Blog => view! { <BlogPage /> }.into_any(),
        Route::BlogPost(slug) => view! { <BlogPostPage slug /> }.into_any(),
        Route::Article(id) => view! { <ArticlePage id /> }.into_any(),
        Route::Gallery => view! { <GalleryPage /> }.into_any(),
        Route::Contact => view! { <ContactPage /> }.into_any(),
        Route::Category(slug) => view! { <CategoryPage slug /> }.into_any(),
        Route::NotFound(path) => view! { <NotFoundPage path /> }.into_any(),
    }
}

#[component]
fn ContentFailure() -> impl IntoView {
    view! {
        <main class="site-main">
            <section class="page not-found">
                <h1>"Something went wrong"</h1>
                <p>"The site content could not be loaded. Please try again later."</p>
            </section>
        </main>
    }
}
