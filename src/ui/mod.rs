//! UI components and client-side glue.

pub mod api;
pub mod auth;
pub mod common;
pub mod icon;
pub mod item_list;
pub mod items;
pub mod notifications;
pub mod pages;
pub mod protected;

pub use icon::{Icon, icons};
pub use item_list::ItemList;
pub use protected::ProtectedRoute;
