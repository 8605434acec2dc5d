//! Random password generation.
//!
//! Characters are drawn independently and uniformly, with replacement, from
//! [`ALPHABET`].
//!
//! # Security
//!
//! [`generate_password`] uses [`SmallRng`], a fast general-purpose PRNG that
//! is **not** cryptographically secure. Callers that need a CSPRNG should
//! pass one (for example [`rand::rngs::OsRng`]) to [`generate_password_with`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use secrecy::SecretString;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL: &str = "!@#$%^&*";

/// The 70 characters a generated password is drawn from.
pub const ALPHABET: &str = concat!(
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "abcdefghijklmnopqrstuvwxyz",
    "0123456789",
    "!@#$%^&*",
);

/// Generates a password of `length` characters. `0` yields an empty password.
pub fn generate_password(length: usize) -> SecretString {
    let mut rng = SmallRng::from_entropy();
    generate_password_with(&mut rng, length)
}

/// Generates a password of `length` characters using the given random source.
pub fn generate_password_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> SecretString {
    let alphabet = ALPHABET.as_bytes();
    let password: String = (0..length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(length, "password generated");

    SecretString::new(password.into())
}
