//! Directory management
//!
//! Handles directory creation, recursive removal, permission management,
//! and existence checks.

pub mod hooks;
pub mod operations;
pub mod remover;
pub mod results;

// Re-export the operation entry points and their supporting types
pub use hooks::MutationHooks;
pub use operations::{
    create_directory, create_directory_with_hooks, directory_exists, file_exists,
    set_permissions, set_permissions_with_hooks,
};
pub use remover::{remove_directory, remove_directory_with_hooks};
pub use results::{FailedEntry, RemovalReport};
