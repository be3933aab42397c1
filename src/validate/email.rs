//! Email address validation

use once_cell::sync::Lazy;
use regex::Regex;

/// Dot-atom local part, hostname-style domain, alphabetic TLD of at
/// least two characters. Deliberately stricter than RFC 5322: quoted
/// local parts and address literals are rejected.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z0-9]+([_.-][a-z0-9]+)*@[a-z0-9]+([.-][a-z0-9]+)*\.[a-z]{2,}$")
        .expect("email pattern compiles")
});

/// Validate the format of an email address.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_addresses_accepted() {
        assert!(is_valid_email("admin@example.com"));
        assert!(is_valid_email("first.last@example.co.uk"));
        assert!(is_valid_email("user_name-1@mail-01.example.org"));
        assert!(is_valid_email("ADMIN@EXAMPLE.COM"));
    }

    #[test]
    fn test_malformed_addresses_rejected() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign.example.com"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email(".leading@example.com"));
        assert!(!is_valid_email("trailing.@example.com"));
        assert!(!is_valid_email("double..dot@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email("user@-example.com"));
        assert!(!is_valid_email("user@example.123"));
    }
}
