//! Application pages.
//!
//! - Login page
//! - Signup page
//! - Home page (protected: greeting + item list)
//! - Not-found fallback

mod home;
mod login;
mod not_found;
mod signup;

pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use signup::SignupPage;
