//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::SECTIONS;
use crate::types::{EvaluationResult, Score};

/// Delay applied by [`evaluate_password_strength_tx`] before evaluating.
#[cfg(feature = "async")]
pub const EVALUATION_DEBOUNCE: Duration = Duration::from_millis(300);

/// Evaluates password strength.
///
/// Runs every section in declaration order. Each passing section adds one
/// point; each failing section contributes its hint. Total for any input,
/// including the empty string.
pub fn evaluate_password_strength(password: &SecretString) -> EvaluationResult {
    let mut hints = Vec::new();
    let mut score = 0u8;

    for (_section_name, section_fn) in SECTIONS {
        match section_fn(password) {
            Some(hint) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(section = _section_name, "password section failed");
                hints.push(hint.to_string());
            }
            None => score += 1,
        }
    }

    let evaluation = EvaluationResult::new(Score::new(score), hints);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        score = evaluation.score.value(),
        strength = %evaluation.strength,
        "password evaluated"
    );

    evaluation
}

/// Debounced evaluation that sends the result via channel.
///
/// Waits [`EVALUATION_DEBOUNCE`] first. If `token` is cancelled before the
/// delay elapses, nothing is evaluated and nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<EvaluationResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled");
            return;
        }
        _ = tokio::time::sleep(EVALUATION_DEBOUNCE) => {}
    }

    let evaluation = evaluate_password_strength(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
