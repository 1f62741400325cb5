use leptos::prelude::*;

/// Placeholder shown in place of an empty listing
#[component]
pub fn EmptyState(message: &'static str) -> impl IntoView {
    view! {
        <div class="empty-state">
            <p>{message}</p>
        </div>
    }
}
