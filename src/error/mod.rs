//! Error handling
//!
//! Defines error types for the filesystem helpers.

pub mod types;

pub use types::*;
