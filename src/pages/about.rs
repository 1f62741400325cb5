//! About Page

use leptos::prelude::*;
use portfolio_core::Route;

use crate::components::Link;
use crate::context::use_app_context;

#[component]
pub fn AboutPage() -> impl IntoView {
    let ctx = use_app_context();
    let resume = ctx.content.resume();
    let profile = resume.profile.clone();
    let awards = resume.awards.clone();

    view! {
        <section class="page about">
            <h1>"About Me"</h1>
            <p class="tagline">{profile.tagline}</p>
            {profile.bio.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}

            <h2>"Awards"</h2>
            <ul class="entry-list">
                {awards
                    .into_iter()
                    .map(|award| {
                        view! {
                            <li class="entry">
                                <h3>{award.title}</h3>
                                <p class="entry-meta">{award.organization} " · " {award.date}</p>
                                <ul>
                                    {award.details.into_iter().map(|d| view! { <li>{d}</li> }).collect_view()}
                                </ul>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <div class="page-actions">
                <Link route=Route::Experience class="button">"View Experience"</Link>
                <Link route=Route::Contact class="button secondary">"Contact Me"</Link>
            </div>
        </section>
    }
}
