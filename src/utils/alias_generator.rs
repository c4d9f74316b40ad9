//! Random alias generation.
//!
//! Aliases are public, guessable identifiers, so they are drawn from OS
//! entropy rather than a seeded pseudo-random generator.

/// Length of generated aliases.
pub const ALIAS_LENGTH: usize = 6;

/// Alphabet for generated aliases: lowercase, uppercase, digits.
const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Random bytes at or above this value are rejected so that `byte % 62` is
/// uniform (248 = 62 * 4).
const ACCEPT_BELOW: u8 = 248;

/// Produces candidate aliases.
///
/// Generators are pure: they never consult storage and give no uniqueness
/// guarantee. Collisions are detected by the durable store and handled by
/// [`crate::application::services::ShortenService`].
pub trait AliasGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Default generator: fixed-length alphanumeric aliases from OS entropy.
#[derive(Debug, Clone)]
pub struct RandomAliasGenerator {
    length: usize,
}

impl RandomAliasGenerator {
    pub fn new() -> Self {
        Self {
            length: ALIAS_LENGTH,
        }
    }

    /// Creates a generator producing aliases of `length` characters.
    pub fn with_length(length: usize) -> Self {
        Self { length }
    }
}

impl Default for RandomAliasGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl AliasGenerator for RandomAliasGenerator {
    fn generate(&self) -> String {
        generate_alias(self.length)
    }
}

/// Generates a random alias of `length` characters.
///
/// Uses `getrandom` for entropy and rejection sampling so every symbol of the
/// 62-character alphabet is equally likely.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_alias(length: usize) -> String {
    let mut alias = String::with_capacity(length);
    let mut buffer = [0u8; 16];

    while alias.len() < length {
        getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

        for &byte in buffer.iter().filter(|&&b| b < ACCEPT_BELOW) {
            if alias.len() == length {
                break;
            }
            alias.push(ALPHABET[(byte % 62) as usize] as char);
        }
    }

    alias
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_has_default_length() {
        let alias = RandomAliasGenerator::new().generate();
        assert_eq!(alias.len(), ALIAS_LENGTH);
    }

    #[test]
    fn test_generate_custom_length() {
        assert_eq!(RandomAliasGenerator::with_length(12).generate().len(), 12);
        assert_eq!(generate_alias(0), "");
    }

    #[test]
    fn test_generate_alphanumeric_only() {
        for _ in 0..200 {
            let alias = generate_alias(ALIAS_LENGTH);
            assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_produces_distinct_aliases() {
        let aliases: HashSet<String> = (0..1000).map(|_| generate_alias(ALIAS_LENGTH)).collect();

        // 62^6 possible aliases; a thousand draws colliding more than once is
        // vanishingly unlikely.
        assert!(aliases.len() >= 999);
    }

    #[test]
    fn test_generate_covers_every_character_class() {
        let sample = generate_alias(5000);

        assert!(sample.chars().any(|c| c.is_ascii_lowercase()));
        assert!(sample.chars().any(|c| c.is_ascii_uppercase()));
        assert!(sample.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_alphabet_has_no_duplicates() {
        let unique: HashSet<u8> = ALPHABET.iter().copied().collect();
        assert_eq!(unique.len(), 62);
        assert_eq!(ACCEPT_BELOW as usize, 62 * 4);
    }
}
