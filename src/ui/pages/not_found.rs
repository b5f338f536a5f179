//! Fallback page for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1 class="not-found-title">"404"</h1>
            <p class="not-found-message">"This page does not exist."</p>
            <A href="/" attr:class="btn-primary">"Go home"</A>
        </div>
    }
}
