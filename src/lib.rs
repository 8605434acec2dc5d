//! Password strength meter library
//!
//! Scores a password against five character-class checks (length, uppercase,
//! lowercase, digit, special character), classifies it as weak, medium or
//! strong, and reports a hint for every check it fails. Also generates random
//! passwords and keeps a per-session history of checked passwords.
//!
//! # Features
//!
//! - `async` (default): Enables the debounced, cancellable evaluation helper
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{evaluate_password_strength, Strength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Password1".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//!
//! assert_eq!(evaluation.score.value(), 4);
//! assert_eq!(evaluation.strength, Strength::Medium);
//! assert_eq!(evaluation.hints, vec!["missing special character"]);
//! ```
//!
//! Generated passwords come from a non-cryptographic PRNG; see [`generator`].

mod evaluator;
pub mod generator;
mod sections;
mod session;
mod types;

// Public API
pub use evaluator::evaluate_password_strength;
pub use generator::{generate_password, generate_password_with};
pub use sections::{MIN_LENGTH, SPECIAL_CHARS};
pub use session::{
    HistoryEntry, Session, SessionError, DEFAULT_LENGTH, LENGTH_OPTIONS, RECENT_LIMIT,
};
pub use types::{EvaluationResult, Score, Strength};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_password_strength_tx, EVALUATION_DEBOUNCE};
