//! REST client for the auth and item endpoints.
//!
//! Thin wrappers over fetch: every call is single-attempt, returns the typed
//! payload on 2xx and an [`ApiError`] otherwise, and leaves all user-facing
//! handling to the views. Item calls carry the bearer token from the session
//! store.

use serde::{Deserialize, Serialize};

use crate::core::error::ApiError;
use crate::core::models::{Credentials, Item};

/// Login payload. The session is only established when both fields are
/// present; the server may answer 2xx with either missing.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "accessToken")]
    pub access_token: Option<String>,
    pub user: Option<LoginUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginUser {
    pub username: String,
}

/// Body for item create/update calls.
#[derive(Debug, Clone, Serialize)]
struct ItemPayload<'a> {
    name: &'a str,
    description: &'a str,
}

#[cfg(not(feature = "ssr"))]
fn network_error(error: gloo_net::Error) -> ApiError {
    ApiError::Network(error.to_string())
}

#[cfg(not(feature = "ssr"))]
fn check(response: &gloo_net::http::Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Status(response.status()))
    }
}

#[cfg(not(feature = "ssr"))]
fn bearer() -> Result<String, ApiError> {
    // Guarded routes mean the token should be present; treat its absence
    // like the 401 the server would answer with.
    crate::ui::auth::session::access_token()
        .map(|token| format!("Bearer {token}"))
        .ok_or(ApiError::Status(401))
}

/// POST /auth/login
#[cfg(not(feature = "ssr"))]
pub async fn login(credentials: &Credentials) -> Result<LoginResponse, ApiError> {
    use gloo_net::http::Request;

    let response = Request::post(&crate::core::config::api_url("/auth/login"))
        .json(credentials)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    check(&response)?;
    response.json::<LoginResponse>().await.map_err(network_error)
}

/// POST /auth/signup (400 = username taken)
#[cfg(not(feature = "ssr"))]
pub async fn signup(credentials: &Credentials) -> Result<(), ApiError> {
    use gloo_net::http::Request;

    let response = Request::post(&crate::core::config::api_url("/auth/signup"))
        .json(credentials)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    check(&response)
}

/// GET /items?join=user
///
/// The join enriches items with owning-user data on the server; only the
/// item fields are consumed here, the rest of the payload is ignored.
#[cfg(not(feature = "ssr"))]
pub async fn fetch_items() -> Result<Vec<Item>, ApiError> {
    use gloo_net::http::Request;

    let response = Request::get(&crate::core::config::api_url("/items?join=user"))
        .header("Authorization", &bearer()?)
        .send()
        .await
        .map_err(network_error)?;
    check(&response)?;
    response.json::<Vec<Item>>().await.map_err(network_error)
}

/// POST /items
#[cfg(not(feature = "ssr"))]
pub async fn create_item(name: &str, description: &str) -> Result<Item, ApiError> {
    use gloo_net::http::Request;

    let response = Request::post(&crate::core::config::api_url("/items"))
        .header("Authorization", &bearer()?)
        .json(&ItemPayload { name, description })
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    check(&response)?;
    response.json::<Item>().await.map_err(network_error)
}

/// PATCH /items/:id
#[cfg(not(feature = "ssr"))]
pub async fn update_item(id: i64, name: &str, description: &str) -> Result<Item, ApiError> {
    use gloo_net::http::Request;

    let response = Request::patch(&crate::core::config::api_url(&format!("/items/{id}")))
        .header("Authorization", &bearer()?)
        .json(&ItemPayload { name, description })
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    check(&response)?;
    response.json::<Item>().await.map_err(network_error)
}

/// DELETE /items/:id (200/204, no body consumed)
#[cfg(not(feature = "ssr"))]
pub async fn delete_item(id: i64) -> Result<(), ApiError> {
    use gloo_net::http::Request;

    let response = Request::delete(&crate::core::config::api_url(&format!("/items/{id}")))
        .header("Authorization", &bearer()?)
        .send()
        .await
        .map_err(network_error)?;
    check(&response)
}

// SSR stubs - none of these calls happen during server rendering

#[cfg(feature = "ssr")]
pub async fn login(_credentials: &Credentials) -> Result<LoginResponse, ApiError> {
    Err(ApiError::Network("login not available on server".to_string()))
}

#[cfg(feature = "ssr")]
pub async fn signup(_credentials: &Credentials) -> Result<(), ApiError> {
    Err(ApiError::Network("signup not available on server".to_string()))
}

#[cfg(feature = "ssr")]
pub async fn fetch_items() -> Result<Vec<Item>, ApiError> {
    Ok(vec![])
}

#[cfg(feature = "ssr")]
pub async fn create_item(_name: &str, _description: &str) -> Result<Item, ApiError> {
    Err(ApiError::Network("create not available on server".to_string()))
}

#[cfg(feature = "ssr")]
pub async fn update_item(_id: i64, _name: &str, _description: &str) -> Result<Item, ApiError> {
    Err(ApiError::Network("update not available on server".to_string()))
}

#[cfg(feature = "ssr")]
pub async fn delete_item(_id: i64) -> Result<(), ApiError> {
    Err(ApiError::Network("delete not available on server".to_string()))
}
