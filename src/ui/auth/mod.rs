//! Authentication UI module
//!
//! Session state, localStorage persistence, and the login action shared by
//! the auth pages and the route guard.

mod context;
pub mod session;

pub use context::{AuthContext, login, provide_auth_context, use_auth_context};
