//! Signup page.
//!
//! The password/confirmation mismatch is caught before any network call;
//! server failures map to messages by status code (400 = username taken).
//! Success sends the user to the login page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::error::{PASSWORD_MISMATCH_MESSAGE, signup_failure_message};
use crate::core::models::Credentials;
use crate::ui::api;
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_notifications;

#[component]
pub fn SignupPage() -> impl IntoView {
    let toasts = use_notifications();
    let navigate = use_navigate();

    // Form state
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let show_confirm_password = RwSignal::new(false);
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Never reaches the network when the two passwords differ.
        if password.get_untracked() != confirm_password.get_untracked() {
            toasts.error(PASSWORD_MISMATCH_MESSAGE);
            return;
        }

        loading.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            let credentials = Credentials {
                username: username.get_untracked(),
                password: password.get_untracked(),
            };

            match api::signup(&credentials).await {
                Ok(()) => navigate("/login", Default::default()),
                Err(err) => toasts.error(signup_failure_message(&err)),
            }
            loading.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-title">"Sign Up"</h1>

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

                    <div class="form-field form-field-password">
                        <input
                            type=move || if show_confirm_password.get() { "text" } else { "password" }
                            name="confirmPassword"
                            placeholder="Confirm Password"
                            required
                            class="form-input"
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| confirm_password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="password-toggle"
                            aria-label="Toggle confirm password visibility"
                            on:click=move |_| show_confirm_password.update(|visible| *visible = !*visible)
                        >
                            {move || {
                                if show_confirm_password.get() {
                                    view! { <Icon name=icons::EYE_CLOSED/> }.into_any()
                                } else {
                                    view! { <Icon name=icons::EYE/> }.into_any()
                                }
                            }}
                        </button>
                    </div>

                    <button type="submit" class="btn-primary btn-block" disabled=move || loading.get()>
                        {move || if loading.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>

                <div class="auth-switch">
                    <A href="/login">"Already have an account? Login here."</A>
                </div>
            </div>
        </div>
    }
}
