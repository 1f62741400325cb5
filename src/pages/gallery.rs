//! Gallery Page
//!
//! Category filter buttons, photo grid and lightbox. All state lives in one
//! `Browser`; the keyboard listener is bound for the life of the page and
//! only acts while a photo is open.

use leptos::prelude::*;
use leptos_keynav::{bind_key_commands, KeyCommand};
use portfolio_core::{Browser, Category, Direction, Photo, Repository};
use tracing::warn;
use web_sys::MouseEvent;

use crate::components::EmptyState;
use crate::context::use_app_context;

#[component]
pub fn GalleryPage() -> impl IntoView {
    let ctx = use_app_context();
    let content = ctx.content.clone();
    let browser = RwSignal::new(Browser::new());

    let visible = {
        let content = content.clone();
        move || browser.with(|b| b.visible(content.photos().list()).into_iter().cloned().collect::<Vec<Photo>>())
    };
    let has_photos = {
        let visible = visible.clone();
        move || !visible().is_empty()
    };

    let open = {
        let content = content.clone();
        move |id: u32| {
            browser.update(|b| {
                b.open(content.photos().list(), &id);
            });
        }
    };

    let step = {
        let content = content.clone();
        move |direction: Direction| {
            browser.update(|b| {
                b.navigate(content.photos().list(), direction);
            });
        }
    };

    {
        let step = step.clone();
        bind_key_commands(
            move || browser.with_untracked(Browser::is_viewing),
            move |command| match command {
                KeyCommand::Dismiss => browser.update(Browser::close),
                KeyCommand::Previous => step(Direction::Prev),
                KeyCommand::Next => step(Direction::Next),
            },
        );
    }

    let on_close = Callback::new(move |_: ()| browser.update(Browser::close));
    let on_step = Callback::new(step);

    let filters = content
        .categories()
        .iter()
        .cloned()
        .map(|category| view! { <FilterButton category browser /> })
        .collect_view();

    let lightbox = {
        let content = content.clone();
        move || {
            let photos = content.photos().list();
            let (current, index, total) =
                browser.with(|b| (b.current(photos).cloned(), b.viewing_index(), b.visible(photos).len()));
            current.zip(index).map(|(photo, position)| {
                view! { <Lightbox photo position total on_close on_step /> }
            })
        }
    };

    let asset_config = ctx.config.clone();

    view! {
        <section class="page gallery">
            <h1>"Gallery"</h1>
            <div class="filter-bar">{filters}</div>
            <Show
                when=has_photos
                fallback=|| view! { <EmptyState message="No photos in this category yet. Check back soon!" /> }
            >
                <div class="gallery-grid">
                    <For
                        each=visible.clone()
                        key=|photo| photo.id
                        children={
                            let open = open.clone();
                            let asset_config = asset_config.clone();
                            move |photo: Photo| {
                                let open = open.clone();
                                let id = photo.id;
                                view! {
                                    <button class="gallery-item" on:click=move |_| open(id)>
                                        <img src=asset_config.asset_url(&photo.src) alt=photo.alt loading="lazy" />
                                        <span class="gallery-caption">{photo.title}</span>
                                    </button>
                                }
                            }
                        }
                    />
                </div>
            </Show>
            {lightbox}
        </section>
    }
}

#[component]
fn FilterButton(category: Category, browser: RwSignal<Browser>) -> impl IntoView {
    let ctx = use_app_context();
    let label = category.label();
    let active_id = category.id.clone();
    let class = move || {
        if browser.with(|b| b.is_active(&active_id)) {
            "filter-btn active"
        } else {
            "filter-btn"
        }
    };

    let on_click = move |_| {
        let result = browser.try_update(|b| b.set_filter(&category.id, ctx.content.categories()));
        if let Some(Err(err)) = result {
            warn!(error = %err, "filter rejected");
        }
    };

    view! {
        <button class=class on:click=on_click>
            {label}
        </button>
    }
}

/// Modal view of one photo. Clicking the backdrop closes it; clicks inside
/// the content stay inside.
#[component]
fn Lightbox(
    photo: Photo,
    position: usize,
    total: usize,
    on_close: Callback<()>,
    on_step: Callback<Direction>,
) -> impl IntoView {
    let ctx = use_app_context();
    let src = ctx.asset(&photo.src);

    let nav = (total > 1).then(|| {
        view! {
            <button
                class="lightbox-nav prev"
                aria-label="Previous photo"
                on:click=move |_| on_step.run(Direction::Prev)
            >
                "‹"
            </button>
            <button
                class="lightbox-nav next"
                aria-label="Next photo"
                on:click=move |_| on_step.run(Direction::Next)
            >
                "›"
            </button>
        }
    });

    view! {
        <div class="lightbox" role="dialog" aria-modal="true" on:click=move |_| on_close.run(())>
            <div class="lightbox-content" on:click=|ev: MouseEvent| ev.stop_propagation()>
                <button class="lightbox-close" aria-label="Close" on:click=move |_| on_close.run(())>
                    "×"
                </button>
                <img src=src alt=photo.alt />
                {nav}
                <div class="lightbox-caption">
                    <h3>{photo.title}</h3>
                    <p>{photo.description}</p>
                    <span class="lightbox-counter">{format!("{} / {}", position + 1, total)}</span>
                </div>
            </div>
        </div>
    }
}
