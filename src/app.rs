use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::ui::ProtectedRoute;
use crate::ui::auth::{provide_auth_context, use_auth_context};
use crate::ui::items::provide_items_cache;
use crate::ui::notifications::{ToastContainer, provide_notifications};
use crate::ui::pages::{HomePage, LoginPage, NotFoundPage, SignupPage};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Session state, the item-list cache slot, and the toast queue live at
    // the root so they survive route changes.
    provide_auth_context();
    provide_items_cache();
    let notifications = provide_notifications();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/itemdeck.css"/>

        // sets the document title
        <Title text="Itemdeck"/>

        <ToastContainer toasts=notifications.toasts()/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/signup") view=SignupPage/>
                <Route
                    path=path!("/home")
                    view=|| view! {
                        <ProtectedRoute>
                            <HomePage/>
                        </ProtectedRoute>
                    }
                />
                <Route path=path!("/") view=RootRedirect/>
            </Routes>
        </Router>
    }
}

/// Send "/" to the home page when a session exists, else to login.
#[component]
fn RootRedirect() -> impl IntoView {
    let auth = use_auth_context();

    view! {
        {move || {
            if auth.access_token.get().is_some() {
                view! { <Redirect path="/home"/> }.into_any()
            } else {
                view! { <Redirect path="/login"/> }.into_any()
            }
        }}
    }
}
