//! Error taxonomy for the REST client and the status-code to user-facing
//! message mapping owned by the view layer.

use thiserror::Error;

/// Failure surfaced by the REST client.
///
/// All calls are single-attempt; nothing here is retried or fatal. The views
/// translate these into notifications.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The server answered with a non-success status code.
    #[error("request failed with status {0}")]
    Status(u16),
    /// No usable HTTP response arrived (connection failure, or a body that
    /// could not be read).
    #[error("network error: {0}")]
    Network(String),
}

impl ApiError {
    /// HTTP status code, when a response was received at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status(code) => Some(*code),
            ApiError::Network(_) => None,
        }
    }
}

/// Shown on signup when the password confirmation does not match.
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match. Please try again.";

/// Map a login failure to the message shown to the user.
///
/// 404 means the username is unknown, 401 a bad password; anything else with
/// a status is unexpected, and no response at all is a network problem.
pub fn login_failure_message(error: &ApiError) -> &'static str {
    match error {
        ApiError::Status(404) => "User not found. Please check your username.",
        ApiError::Status(401) => "Invalid password. Please try again.",
        ApiError::Status(_) => "An unexpected error occurred. Please try again.",
        ApiError::Network(_) => "Network error. Please check your connection.",
    }
}

/// Map a signup failure to the message shown to the user.
///
/// 400 is the backend's "username taken" answer.
pub fn signup_failure_message(error: &ApiError) -> &'static str {
    match error {
        ApiError::Status(400) => "Username already exists.",
        ApiError::Status(500) => "Server error. Please try again later.",
        ApiError::Status(_) => "An unexpected error occurred. Please try again.",
        ApiError::Network(_) => "Network error. Please check your connection.",
    }
}
