//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::types::PasswordEvaluation;

#[cfg(feature = "async")]
const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Evaluates password strength and returns a detailed evaluation.
///
/// Every criterion is checked; the score is the number that pass and
/// `reasons` holds one message for each that does not.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `PasswordEvaluation` containing score and reasons.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    let evaluation = PasswordEvaluation::of(password.expose_secret());

    #[cfg(feature = "tracing")]
    tracing::debug!(
        score = evaluation.score.value(),
        unmet = evaluation.reasons.len(),
        "password evaluated"
    );

    evaluation
}

/// Classifies `password` and returns its label, e.g. `"Medium password ⚠️"`.
///
/// Total: any string, including the empty one, yields exactly one label.
pub fn check_password_strength(password: &str) -> &'static str {
    PasswordEvaluation::of(password).strength().label()
}

/// Async version that sends evaluation result via channel.
///
/// Waits a short debounce first. If `token` is cancelled before or during
/// the wait nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let evaluation = evaluate_password_strength(password);

    if tx.send(evaluation).await.is_err() {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: receiver dropped");
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use crate::types::PasswordStrength;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_strength_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        evaluate_password_strength_tx(&secret("TestPass123!"), token, tx).await;

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(evaluation.strength(), PasswordStrength::Strong);
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_with_cancellation() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        evaluate_password_strength_tx(&secret("SomePassword123!"), token, tx).await;

        // sender dropped without sending
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_during_debounce() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let child = token.clone();

        let handle = tokio::spawn(async move {
            let pwd = SecretString::new("TestPass123!".to_string().into());
            evaluate_password_strength_tx(&pwd, child, tx).await;
        });

        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        token.cancel();
        handle.await.expect("task should finish");

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_receiver_is_ignored() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        evaluate_password_strength_tx(&secret("abc"), CancellationToken::new(), tx).await;
    }
}
