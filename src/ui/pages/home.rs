//! Home page: greeting, current date, logout, and the item list.

use chrono::Local;
use leptos::prelude::*;

use crate::ui::auth::use_auth_context;
use crate::ui::common::ConfirmDialog;
use crate::ui::icon::{Icon, icons};
use crate::ui::item_list::ItemList;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth_context();

    let show_logout_confirm = RwSignal::new(false);
    let current_date = RwSignal::new(String::new());

    // Formatted once on the client; the server shell renders it empty.
    Effect::new(move |_| {
        current_date.set(Local::now().format("%b %-d, %Y, %-I:%M %p").to_string());
    });

    // Logout clears the token; the route guard then redirects to login.
    let confirm_logout = Callback::new(move |_: ()| auth.logout());
    let cancel_logout = Callback::new(move |_: ()| show_logout_confirm.set(false));

    view! {
        <div class="home-page">
            <header class="home-header">
                <h1 class="home-greeting">
                    {move || format!("Welcome, {}", auth.username.get())}
                </h1>
                <div class="home-header-actions">
                    <span class="home-date">{move || current_date.get()}</span>
                    <button
                        class="btn-danger btn-icon"
                        aria-label="Logout"
                        on:click=move |_| show_logout_confirm.set(true)
                    >
                        <Icon name=icons::SIGN_OUT class="w-6 h-6"/>
                    </button>
                </div>
            </header>

            <section class="home-content">
                <ItemList/>
            </section>

            <ConfirmDialog
                title="Are you sure?".to_string()
                message="Do you really want to log out?".to_string()
                is_open=show_logout_confirm.into()
                on_confirm=confirm_logout
                on_cancel=cancel_logout
                confirm_text="Yes, log out!".to_string()
                is_destructive=true
            />
        </div>
    }
}
