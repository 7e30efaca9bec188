//! Error handling
//!
//! Defines error types and the user-facing messages derived from them.

pub mod handlers;
pub mod types;

pub use types::*;
