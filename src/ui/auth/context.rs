//! Auth context owning the session lifecycle.
//!
//! The token signal is the single source of truth for "is the user
//! authenticated." It is hydrated synchronously from localStorage when the
//! context is created, so a reload keeps the session with no intermediate
//! loading state, and every write goes back through the session store.

use leptos::prelude::*;

use super::session;
use crate::core::error::ApiError;
use crate::core::models::Credentials;
use crate::ui::api;

/// Auth context providing session state and actions.
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current access token, `None` when signed out.
    pub access_token: RwSignal<Option<String>>,
    /// Persisted username, for the greeting on the home page.
    pub username: RwSignal<String>,
}

impl AuthContext {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.get().is_some()
    }

    /// Clear the in-memory token and the persisted token key. Synchronous,
    /// always succeeds; there is no server-side session to invalidate.
    pub fn logout(&self) {
        self.access_token.set(None);
        session::clear_access_token();
    }
}

/// Provide the auth context to the component tree.
pub fn provide_auth_context() -> AuthContext {
    let ctx = AuthContext {
        access_token: RwSignal::new(session::access_token()),
        username: RwSignal::new(session::username().unwrap_or_default()),
    };
    provide_context(ctx);
    ctx
}

/// Get the auth context from the component tree.
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Log in against the auth API.
///
/// `Ok(true)` means the session was established: the token is stored in the
/// signal and localStorage, the username in the session store. `Ok(false)`
/// means the server answered 2xx but the payload was missing the token or
/// the user, so nothing was stored. Transport and non-2xx failures come back
/// as `Err` for the caller to translate by status code.
pub async fn login(username: &str, password: &str) -> Result<bool, ApiError> {
    let ctx = use_auth_context();

    let credentials = Credentials {
        username: username.to_string(),
        password: password.to_string(),
    };

    let response = api::login(&credentials).await?;

    match (response.access_token, response.user) {
        (Some(token), Some(user)) => {
            session::set_access_token(&token);
            session::set_username(&user.username);
            ctx.access_token.set(Some(token));
            ctx.username.set(user.username);
            Ok(true)
        }
        _ => {
            leptos::logging::error!("Login failed: no token received");
            Ok(false)
        }
    }
}
