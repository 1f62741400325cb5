use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn SkillsPage() -> impl IntoView {
    let ctx = use_app_context();
    let groups = ctx.content.resume().skills.clone();

    view! {
        <section class="page skills">
            <h1>"Skills"</h1>
            <div class="skill-groups">
                {groups
                    .into_iter()
                    .map(|group| {
                        view! {
                            <div class="skill-group">
                                <h2>{group.category}</h2>
                                <ul class="tag-list">
                                    {group.items.into_iter().map(|s| view! { <li class="tag">{s}</li> }).collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
