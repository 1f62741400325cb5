use leptos::prelude::*;

use crate::context::use_app_context;

/// Work history, in source order
#[component]
pub fn ExperiencePage() -> impl IntoView {
    let ctx = use_app_context();
    let jobs = ctx.content.resume().experience.clone();

    view! {
        <section class="page experience">
            <h1>"Experience"</h1>
            <ol class="timeline">
                {jobs
                    .into_iter()
                    .map(|job| {
                        view! {
                            <li class="entry">
                                <h2>{job.title}</h2>
                                <p class="entry-meta">
                                    {job.company} " · " {job.location} " · " {job.period}
                                </p>
                                <ul>
                                    {job.highlights.into_iter().map(|h| view! { <li>{h}</li> }).collect_view()}
                                </ul>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}
