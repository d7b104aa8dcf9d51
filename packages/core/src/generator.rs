//! Password generation engine
//!
//! Composes an alphabet from the enabled character classes and samples a
//! fixed-length random string from it. The RNG is injectable so tests can
//! run against a seeded generator.

use rand::Rng;
use thiserror::Error;

/// Minimum accepted password length.
///
/// A product policy floor, not a cryptographic bound. Enforced here, in the
/// generator, so every caller gets the same check exactly once.
pub const MIN_LENGTH: usize = 6;

/// ASCII uppercase letters.
const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// ASCII lowercase letters.
const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
/// ASCII digits.
const DIGIT: &str = "0123456789";
/// ASCII punctuation, the 32 printable non-alphanumeric characters.
const SPECIAL: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Which character classes participate in the generation alphabet.
///
/// The four classes are disjoint by construction, so concatenating them
/// never duplicates a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacterClasses {
    pub upper: bool,
    pub lower: bool,
    pub digit: bool,
    pub special: bool,
}

impl CharacterClasses {
    /// All four classes enabled.
    pub fn all() -> Self {
        Self {
            upper: true,
            lower: true,
            digit: true,
            special: true,
        }
    }

    /// True when no class is enabled.
    pub fn is_empty(&self) -> bool {
        !(self.upper || self.lower || self.digit || self.special)
    }

    /// Concatenate the enabled class ranges in stable order:
    /// upper, lower, digit, special.
    pub fn alphabet(&self) -> String {
        let mut chars = String::new();
        if self.upper {
            chars.push_str(UPPER);
        }
        if self.lower {
            chars.push_str(LOWER);
        }
        if self.digit {
            chars.push_str(DIGIT);
        }
        if self.special {
            chars.push_str(SPECIAL);
        }
        chars
    }
}

/// Why generation was refused.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// The class set was empty, so there is no alphabet to sample from.
    #[error("select at least one character class")]
    NoClassSelected,

    /// The requested length is below the policy minimum.
    #[error("password length must be at least {minimum} characters (got {requested})")]
    LengthTooShort { requested: usize, minimum: usize },
}

/// Generate a random password using the thread-local RNG.
///
/// Not a hardened generator: sampling is uniform over the composed alphabet
/// with a general-purpose PRNG, and no cryptographic strength is claimed.
pub fn generate(length: usize, classes: CharacterClasses) -> Result<String, GenerateError> {
    generate_with(&mut rand::rng(), length, classes)
}

/// Generate a random password from a caller-supplied RNG.
///
/// Each character is drawn independently and uniformly from the alphabet,
/// with replacement, so repeats are expected. Returns exactly `length`
/// characters on success.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    classes: CharacterClasses,
) -> Result<String, GenerateError> {
    if classes.is_empty() {
        return Err(GenerateError::NoClassSelected);
    }
    if length < MIN_LENGTH {
        return Err(GenerateError::LengthTooShort {
            requested: length,
            minimum: MIN_LENGTH,
        });
    }

    let alphabet: Vec<char> = classes.alphabet().chars().collect();
    let password = (0..length)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect();
    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn classes(upper: bool, lower: bool, digit: bool, special: bool) -> CharacterClasses {
        CharacterClasses {
            upper,
            lower,
            digit,
            special,
        }
    }

    #[test]
    fn alphabet_concatenates_in_stable_order() {
        let c = CharacterClasses::all();
        let alphabet = c.alphabet();
        assert!(alphabet.starts_with('A'));
        assert!(alphabet.ends_with('~'));
        assert_eq!(alphabet.len(), 26 + 26 + 10 + 32);
    }

    #[test]
    fn alphabet_classes_are_disjoint() {
        let alphabet = CharacterClasses::all().alphabet();
        let mut seen = std::collections::HashSet::new();
        for ch in alphabet.chars() {
            assert!(seen.insert(ch), "duplicate character {ch:?} in alphabet");
        }
    }

    #[test]
    fn empty_class_set_is_rejected_for_any_length() {
        for length in [0, 5, 6, 100] {
            let err = generate(length, CharacterClasses::default()).unwrap_err();
            assert_eq!(err, GenerateError::NoClassSelected);
        }
    }

    #[test]
    fn length_below_minimum_is_rejected() {
        let err = generate(5, CharacterClasses::all()).unwrap_err();
        assert_eq!(
            err,
            GenerateError::LengthTooShort {
                requested: 5,
                minimum: MIN_LENGTH
            }
        );
    }

    #[test]
    fn length_at_minimum_succeeds() {
        let password = generate(MIN_LENGTH, CharacterClasses::all()).unwrap();
        assert_eq!(password.len(), MIN_LENGTH);
    }

    #[test]
    fn output_has_exact_length_and_stays_in_alphabet() {
        let subsets = [
            classes(true, false, false, false),
            classes(false, true, false, false),
            classes(false, false, true, false),
            classes(false, false, false, true),
            classes(true, true, false, false),
            classes(false, true, true, true),
            CharacterClasses::all(),
        ];
        for c in subsets {
            let alphabet: Vec<char> = c.alphabet().chars().collect();
            for length in [6, 7, 16, 64] {
                let password = generate(length, c).unwrap();
                assert_eq!(password.chars().count(), length);
                assert!(password.chars().all(|ch| alphabet.contains(&ch)));
            }
        }
    }

    #[test]
    fn digits_only_produces_digits_only() {
        let password = generate(32, classes(false, false, true, false)).unwrap();
        assert!(password.chars().all(|ch| ch.is_ascii_digit()));
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let c = CharacterClasses::all();
        let a = generate_with(&mut StdRng::seed_from_u64(7), 24, c).unwrap();
        let b = generate_with(&mut StdRng::seed_from_u64(7), 24, c).unwrap();
        assert_eq!(a, b);

        let other = generate_with(&mut StdRng::seed_from_u64(8), 24, c).unwrap();
        assert_ne!(a, other);
    }
}
