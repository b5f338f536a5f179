//! Route guard for authenticated pages.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::ui::auth::use_auth_context;

/// Renders its children only while an access token is present; otherwise
/// redirects to the login page. Token presence is known synchronously (the
/// auth context hydrates eagerly), so there is no loading state to model.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth_context();

    view! {
        <Show
            when=move || auth.access_token.get().is_some()
            fallback=|| view! { <Redirect path="/login"/> }
        >
            {children()}
        </Show>
    }
}
