//! Password strength evaluator - main evaluation logic.

use secrecy::ExposeSecret;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{length_section, scan_character_classes};
use crate::types::{PasswordEvaluation, PasswordInput};

/// Evaluates a candidate password against the five criteria.
///
/// Non-text input and the empty string are rejected up front and evaluate
/// as weak. For text input, one criterion is the minimum length and the
/// other four come from a single scan over the characters.
///
/// # Arguments
/// * `input` - The candidate value from the form boundary
///
/// # Returns
/// A `PasswordEvaluation` with the criteria count and reasons.
pub fn evaluate_password_strength(input: &PasswordInput) -> PasswordEvaluation {
    let text = match input {
        PasswordInput::Text(secret) => secret,
        PasswordInput::Other => {
            return PasswordEvaluation::rejected("Password must be text");
        }
    };

    let pwd = text.expose_secret();
    if pwd.is_empty() {
        return PasswordEvaluation::rejected("Password must not be empty");
    }

    let mut criteria_met = 0;
    let mut reasons = Vec::new();

    match length_section(pwd) {
        None => criteria_met += 1,
        Some(reason) => reasons.push(reason),
    }

    let classes = scan_character_classes(pwd);
    criteria_met += classes.count();
    if let Some(reason) = classes.missing_reason() {
        reasons.push(reason);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!("password evaluation complete: {}/5 criteria met", criteria_met);

    PasswordEvaluation {
        criteria_met,
        reasons,
    }
}

/// Async version that sends the evaluation via channel.
///
/// Debounces for 300ms first so a newer keystroke can cancel a pending
/// run via `token`; a cancelled run sends nothing.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    input: &PasswordInput,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("evaluation cancelled before it started");
        return;
    }

    let evaluation = evaluate_password_strength(input);

    if let Err(e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", e);
    }
}
