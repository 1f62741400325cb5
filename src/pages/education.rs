//! Education Page
//!
//! Degrees followed by certifications.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn EducationPage() -> impl IntoView {
    let ctx = use_app_context();
    let resume = ctx.content.resume();
    let degrees = resume.education.clone();
    let certifications = resume.certifications.clone();

    view! {
        <section class="page education">
            <h1>"Education"</h1>
            <ul class="entry-list">
                {degrees
                    .into_iter()
                    .map(|edu| {
                        let courses = (!edu.courses.is_empty()).then(|| {
                            view! { <p class="courses">"Relevant courses: " {edu.courses.join(", ")}</p> }
                        });
                        view! {
                            <li class="entry">
                                <h2>{edu.degree}</h2>
                                <p class="entry-meta">
                                    {edu.school} " · " {edu.location} " · " {edu.period}
                                </p>
                                <ul>
                                    {edu.highlights.into_iter().map(|h| view! { <li>{h}</li> }).collect_view()}
                                </ul>
                                {courses}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <h2>"Certifications"</h2>
            <ul class="entry-list">
                {certifications
                    .into_iter()
                    .map(|cert| {
                        view! {
                            <li class="entry">
                                <h3>{cert.title}</h3>
                                <p class="entry-meta">{cert.institution} " · " {cert.period}</p>
                                <ul class="tag-list">
                                    {cert.topics.into_iter().map(|t| view! { <li class="tag">{t}</li> }).collect_view()}
                                </ul>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
