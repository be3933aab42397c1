//! Pronounceable password generator
//!
//! Alternates consonant and vowel draws so the result can be read out to
//! a customer over the phone. The base pools leave out glyphs that are
//! easy to mishear or misread.

use rand::Rng;
use serde::{Deserialize, Serialize};

const CONSONANTS: &str = "bdghjmnpqrstvz";
const VOWELS: &str = "aeuy";
const UPPER_CONSONANTS: &str = "BDGHJLMNPQRSTVWXZ";
const UPPER_VOWELS: &str = "AEUY";
const DIGITS: &str = "23456789";
const SYMBOLS: &str = "@#$%";

/// Default password length for provisioned accounts.
pub const DEFAULT_LENGTH: usize = 9;

/// Character-pool switches controlling generated password strength.
///
/// Digits and symbols join the consonant pool so they land between
/// vowels and the result stays pronounceable. Host applications can
/// deserialize this from their own configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordOptions {
    pub uppercase_consonants: bool,
    pub uppercase_vowels: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl PasswordOptions {
    /// All pools enabled.
    pub fn strong() -> Self {
        Self {
            uppercase_consonants: true,
            uppercase_vowels: true,
            digits: true,
            symbols: true,
        }
    }
}

/// Generate a password of `length` characters from the pools selected by
/// `options`, alternating between the consonant and vowel pools. Which
/// pool goes first is decided by a coin flip.
pub fn generate(length: usize, options: &PasswordOptions) -> String {
    let mut consonants = String::from(CONSONANTS);
    let mut vowels = String::from(VOWELS);
    if options.uppercase_consonants {
        consonants.push_str(UPPER_CONSONANTS);
    }
    if options.uppercase_vowels {
        vowels.push_str(UPPER_VOWELS);
    }
    if options.digits {
        consonants.push_str(DIGITS);
    }
    if options.symbols {
        consonants.push_str(SYMBOLS);
    }

    let consonants: Vec<char> = consonants.chars().collect();
    let vowels: Vec<char> = vowels.chars().collect();

    let mut rng = rand::rng();
    let mut consonant_turn = rng.random_bool(0.5);
    let mut password = String::with_capacity(length);
    for _ in 0..length {
        let pool = if consonant_turn { &consonants } else { &vowels };
        password.push(pool[rng.random_range(0..pool.len())]);
        consonant_turn = !consonant_turn;
    }
    password
}

/// Generate a password with the default length and pools.
pub fn generate_default() -> String {
    generate(DEFAULT_LENGTH, &PasswordOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_base_consonant(c: char) -> bool {
        !VOWELS.contains(c) && !UPPER_VOWELS.contains(c)
    }

    #[test]
    fn test_generated_length() {
        assert_eq!(generate(0, &PasswordOptions::default()).chars().count(), 0);
        assert_eq!(generate(16, &PasswordOptions::default()).chars().count(), 16);
        assert_eq!(generate_default().chars().count(), DEFAULT_LENGTH);
    }

    #[test]
    fn test_default_pools_are_lowercase_letters_only() {
        for _ in 0..20 {
            let password = generate(32, &PasswordOptions::default());
            assert!(
                password
                    .chars()
                    .all(|c| CONSONANTS.contains(c) || VOWELS.contains(c)),
                "unexpected character in {password:?}"
            );
        }
    }

    #[test]
    fn test_pools_alternate() {
        for _ in 0..20 {
            let password = generate(24, &PasswordOptions::strong());
            let classes: Vec<bool> = password.chars().map(is_base_consonant).collect();
            for pair in classes.windows(2) {
                assert_ne!(pair[0], pair[1], "pools did not alternate in {password:?}");
            }
        }
    }

    #[test]
    fn test_strong_pool_membership() {
        let allowed = [
            CONSONANTS,
            VOWELS,
            UPPER_CONSONANTS,
            UPPER_VOWELS,
            DIGITS,
            SYMBOLS,
        ]
        .concat();
        for _ in 0..10 {
            let password = generate(32, &PasswordOptions::strong());
            assert!(password.chars().all(|c| allowed.contains(c)));
        }
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: PasswordOptions = serde_json::from_str("{\"digits\": true}").unwrap();
        assert!(options.digits);
        assert!(!options.symbols);
        assert!(!options.uppercase_consonants);
    }
}
