//! Path string helpers
//!
//! Separator normalization for path strings that cross platform
//! boundaries.

pub mod slashes;

pub use slashes::{
    collapse_repeated_separators, to_native_separators, to_unix_separators, to_windows_separators,
};
