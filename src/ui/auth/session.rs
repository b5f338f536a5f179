//! Session store backed by localStorage.
//!
//! The access token and username live under two separate keys. Logout
//! removes only the token key; the username stays behind and only the token
//! gates access to protected routes.

/// localStorage key for the access token.
pub const STORAGE_KEY_TOKEN: &str = "accessToken";

/// localStorage key for the signed-in username.
pub const STORAGE_KEY_USERNAME: &str = "username";

#[cfg(not(feature = "ssr"))]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Get the persisted access token, if any.
#[cfg(not(feature = "ssr"))]
pub fn access_token() -> Option<String> {
    storage()?.get_item(STORAGE_KEY_TOKEN).ok()?
}

#[cfg(not(feature = "ssr"))]
pub fn set_access_token(token: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(STORAGE_KEY_TOKEN, token);
    }
}

#[cfg(not(feature = "ssr"))]
pub fn clear_access_token() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(STORAGE_KEY_TOKEN);
    }
}

/// Get the persisted username, if any.
#[cfg(not(feature = "ssr"))]
pub fn username() -> Option<String> {
    storage()?.get_item(STORAGE_KEY_USERNAME).ok()?
}

#[cfg(not(feature = "ssr"))]
pub fn set_username(username: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(STORAGE_KEY_USERNAME, username);
    }
}

// SSR stubs - these functions do nothing on the server

#[cfg(feature = "ssr")]
pub fn access_token() -> Option<String> {
    None
}

#[cfg(feature = "ssr")]
pub fn set_access_token(_token: &str) {}

#[cfg(feature = "ssr")]
pub fn clear_access_token() {}

#[cfg(feature = "ssr")]
pub fn username() -> Option<String> {
    None
}

#[cfg(feature = "ssr")]
pub fn set_username(_username: &str) {}
