//! Domain and account name validation
//!
//! Both checks share the hostname-label rule: ASCII alphanumerics and
//! hyphens, leading alphanumeric, no trailing hyphen, at most 63
//! characters.

/// Validate a domain name: at least two dot-separated labels, each one a
/// valid hostname label.
pub fn is_valid_domain(domain: &str) -> bool {
    domain.contains('.') && domain.split('.').all(is_valid_label)
}

/// Validate an account username (a single hostname-style label).
pub fn is_valid_username(username: &str) -> bool {
    is_valid_label(username)
}

fn is_valid_label(label: &str) -> bool {
    if label.is_empty() || label.len() > 63 || label.ends_with('-') {
        return false;
    }
    label.starts_with(|c: char| c.is_ascii_alphanumeric())
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
