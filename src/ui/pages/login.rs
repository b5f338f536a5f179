//! Login page.
//!
//! Collects credentials, runs the auth-context login, and maps HTTP
//! failures to the user-facing messages by status code. Navigation to the
//! home page only happens once a session was actually established.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::error::login_failure_message;
use crate::ui::auth::login;
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_notifications;

#[component]
pub fn LoginPage() -> impl IntoView {
    let toasts = use_notifications();
    let navigate = use_navigate();

    // Form state
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        loading.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            match login(&username.get_untracked(), &password.get_untracked()).await {
                Ok(true) => navigate("/home", Default::default()),
                Ok(false) => {
                    toasts.error("An unexpected error occurred. Please try again.");
                }
                Err(err) => toasts.error(login_failure_message(&err)),
            }
            loading.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-title">"Login"</h1>

                <form on:submit=on_submit>
                    <div class="form-field">
                        <input
                            type="text"
                            name="username"
                            placeholder="Username"
                            required
                            class="form-input"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-field form-field-password">
                        <input
                            type=move || if show_password.get() { "text" } else { "password" }
                            name="password"
                            placeholder="Password"
                            required
                            class="form-input"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="password-toggle"
                            aria-label="Toggle password visibility"
                            on:click=move |_| show_password.update(|visible| *visible = !*visible)
                        >
                            {move || {
                                if show_password.get() {
                                    view! { <Icon name=icons::EYE_CLOSED/> }.into_any()
                                } else {
                                    view! { <Icon name=icons::EYE/> }.into_any()
                                }
                            }}
                        </button>
                    </div>

                    <button type="submit" class="btn-primary btn-block" disabled=move || loading.get()>
                        {move || if loading.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>

                <div class="auth-switch">
                    <A href="/signup">"Don't have an account? Sign up here."</A>
                </div>
            </div>
        </div>
    }
}
