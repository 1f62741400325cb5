use leptos::prelude::*;

/// Rendered markdown. The HTML comes from our own renderer.
#[component]
pub fn MarkdownView(html: String) -> impl IntoView {
    view! { <div class="markdown-body" inner_html=html></div> }
}
