//! Common reusable UI components

pub mod modal;
pub mod spinner;

pub use modal::{BaseModal, ConfirmDialog};
pub use spinner::LoadingSpinner;
