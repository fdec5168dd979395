//! Random shorthand generation.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of generated shorthands.
pub const SHORTHAND_LENGTH: usize = 8;

/// Generates a random, URL-safe shorthand of [`SHORTHAND_LENGTH`] characters.
///
/// Draws from `[A-Za-z0-9]` using the thread-local CSPRNG, so identifiers
/// are not guessable. Each call is independent: there is no global
/// uniqueness guarantee, and collision avoidance is the caller's
/// responsibility via a pre-insertion existence check against the store.
///
/// # Examples
///
/// ```
/// use shorthand::utils::shorthand::{SHORTHAND_LENGTH, generate_shorthand};
///
/// let code = generate_shorthand();
/// assert_eq!(code.len(), SHORTHAND_LENGTH);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_shorthand() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SHORTHAND_LENGTH)
        .map(char::from)
        .collect()
}
