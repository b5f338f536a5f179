//! Core domain types and logic for the item manager.
//!
//! Everything in this module compiles natively and carries the unit tests;
//! browser-only glue lives under `crate::ui`.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
#[cfg(test)]
mod tests;
