//! Format validation
//!
//! Accept/reject predicates for user-supplied identifiers. Every check
//! returns a plain `bool`; callers wanting diagnostics produce their own.

pub mod email;
pub mod names;
pub mod network;

pub use email::is_valid_email;
pub use names::{is_valid_domain, is_valid_username};
pub use network::{is_valid_ip, is_valid_ipv4, is_valid_ipv6};
