use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let ctx = use_app_context();
    let projects = ctx.content.resume().projects.clone();

    view! {
        <section class="page projects">
            <h1>"Projects"</h1>
            <div class="card-grid">
                {projects
                    .into_iter()
                    .map(|project| {
                        let technologies = project.technologies_line();
                        view! {
                            <article class="card project-card">
                                <div class="card-body">
                                    <h2 class="card-title">{project.title}</h2>
                                    <p>{project.description}</p>
                                    <p class="technologies">{technologies}</p>
                                    <ul>
                                        {project.achievements.into_iter().map(|a| view! { <li>{a}</li> }).collect_view()}
                                    </ul>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
