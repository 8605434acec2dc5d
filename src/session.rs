//! Per-session password history.
//!
//! A [`Session`] is owned by whichever layer serves one user. It records every
//! checked or generated password for the lifetime of the value and shows the
//! most recent few. Sessions never share state.
//!
//! Passwords are kept as entered (wrapped in [`SecretString`], not hashed) and
//! are exposed again through [`Session::recent`] for display.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::evaluator::evaluate_password_strength;
use crate::generator::generate_password;
use crate::types::EvaluationResult;

/// Lengths offered for generation.
pub const LENGTH_OPTIONS: [usize; 4] = [8, 12, 16, 20];

pub const DEFAULT_LENGTH: usize = LENGTH_OPTIONS[0];

/// Number of entries returned by [`Session::recent`].
pub const RECENT_LIMIT: usize = 5;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Please enter a password!")]
    EmptyPassword,
    #[error("Unsupported password length {0}, expected 8, 12, 16 or 20")]
    UnsupportedLength(usize),
}

/// A recorded password with its evaluation, computed when listed.
#[derive(Debug)]
pub struct HistoryEntry<'a> {
    pub password: &'a SecretString,
    pub evaluation: EvaluationResult,
}

#[derive(Debug, Default)]
pub struct Session {
    history: Vec<SecretString>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates `password` and records it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyPassword`] for an empty password; nothing
    /// is evaluated or recorded in that case.
    pub fn check(&mut self, password: &SecretString) -> Result<EvaluationResult, SessionError> {
        let value = password.expose_secret();
        if value.is_empty() {
            return Err(SessionError::EmptyPassword);
        }

        let evaluation = evaluate_password_strength(password);
        self.record(SecretString::new(value.into()));
        Ok(evaluation)
    }

    /// Generates a password of one of the [`LENGTH_OPTIONS`] and records it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnsupportedLength`] if `length` is not offered.
    pub fn generate(&mut self, length: usize) -> Result<SecretString, SessionError> {
        if !LENGTH_OPTIONS.contains(&length) {
            return Err(SessionError::UnsupportedLength(length));
        }

        let password = generate_password(length);
        self.record(SecretString::new(password.expose_secret().into()));
        Ok(password)
    }

    /// Up to [`RECENT_LIMIT`] entries, most recent first, each re-evaluated.
    pub fn recent(&self) -> Vec<HistoryEntry<'_>> {
        self.history
            .iter()
            .rev()
            .take(RECENT_LIMIT)
            .map(|password| HistoryEntry {
                password,
                evaluation: evaluate_password_strength(password),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Forgets every recorded password.
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::info!(cleared = self.history.len(), "password history cleared");

        self.history.clear();
    }

    fn record(&mut self, password: SecretString) {
        self.history.push(password);

        #[cfg(feature = "tracing")]
        tracing::debug!(history_len = self.history.len(), "password recorded");
    }
}
