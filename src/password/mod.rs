//! Password generation
//!
//! Pronounceable random passwords for newly provisioned accounts.

pub mod generator;

pub use generator::{DEFAULT_LENGTH, PasswordOptions, generate, generate_default};
