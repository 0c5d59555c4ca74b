//! Incident verification - main orchestration logic.

use std::fmt;

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::checks::{
    ValidationError, capacity_check, pattern_check, single_user_check, tally_check,
};
use crate::counter::count_incidents;

/// Outcome of one verification run.
///
/// `Display` renders the wire format: `Saída: <n>` on success, the terminal
/// diagnostic on rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Input passed every check; carries the incident count.
    Incidents(u64),
    /// Input failed a check; carries the terminal diagnostic.
    Rejected(ValidationError),
    /// Verification was cancelled before completing.
    #[cfg(feature = "async")]
    Cancelled,
}

impl Verdict {
    /// Returns the incident count, or `None` if the run did not produce one.
    pub fn incidents(&self) -> Option<u64> {
        match self {
            Verdict::Incidents(count) => Some(*count),
            _ => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Incidents(count) => write!(f, "Saída: {count}"),
            Verdict::Rejected(error) => write!(f, "{error}"),
            #[cfg(feature = "async")]
            Verdict::Cancelled => write!(f, "Verificação cancelada."),
        }
    }
}

/// Checks run in a fixed order, stopping at the first failure.
fn run_checks(count: usize, passwords: &[SecretString]) -> Result<(), ValidationError> {
    single_user_check(count)?;
    capacity_check(count)?;
    tally_check(count, passwords.len())?;
    pattern_check(passwords)?;
    Ok(())
}

/// Verifies one run: validates the declared count against the supplied
/// passwords and, on success, counts containment incidents.
///
/// # Arguments
/// * `count` - The declared number of users
/// * `passwords` - The supplied password lines, verbatim
/// * `token` - Optional cancellation token (async feature only)
///
/// # Returns
/// A [`Verdict`] carrying the incident count or the diagnostic. The same
/// input always produces the same verdict.
pub fn verify_incidents(
    count: usize,
    passwords: &[SecretString],
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> Verdict {
    #[cfg(feature = "async")]
    {
        if let Some(ref t) = token {
            if t.is_cancelled() {
                return Verdict::Cancelled;
            }
        }
    }

    if let Err(error) = run_checks(count, passwords) {
        #[cfg(feature = "tracing")]
        tracing::warn!("input rejected: {}", error);
        return Verdict::Rejected(error);
    }

    // Check cancellation again before the quadratic scan (async only)
    #[cfg(feature = "async")]
    {
        if let Some(ref t) = token {
            if t.is_cancelled() {
                return Verdict::Cancelled;
            }
        }
    }

    Verdict::Incidents(count_incidents(passwords))
}

/// Async version that sends the verdict via channel.
#[cfg(feature = "async")]
pub async fn verify_incidents_tx(
    count: usize,
    passwords: &[SecretString],
    token: CancellationToken,
    tx: mpsc::Sender<Verdict>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("verification is about to start...");

    let verdict = verify_incidents(count, passwords, Some(token));

    if let Err(e) = tx.send(verdict).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send verification verdict: {}", e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secrets(words: &[&str]) -> Vec<SecretString> {
        words
            .iter()
            .map(|w| SecretString::new(w.to_string().into()))
            .collect()
    }

    #[tokio::test]
    async fn test_verify_with_cancellation() {
        let token = CancellationToken::new();
        token.cancel();

        let passwords = secrets(&["a", "ab", "abc"]);
        let verdict = verify_incidents(3, &passwords, Some(token));

        assert_eq!(verdict, Verdict::Cancelled);
        assert_eq!(verdict.incidents(), None);
    }

    #[tokio::test]
    async fn test_verify_without_cancellation() {
        let token = CancellationToken::new();

        let passwords = secrets(&["a", "ab", "abc"]);
        let verdict = verify_incidents(3, &passwords, Some(token));

        assert_eq!(verdict, Verdict::Incidents(3));
    }

    #[tokio::test]
    async fn test_verify_incidents_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let passwords = secrets(&["a", "ab", "abc"]);
        verify_incidents_tx(3, &passwords, token, tx).await;

        let verdict = rx.recv().await.expect("Should receive verdict");
        assert_eq!(verdict, Verdict::Incidents(3));
    }
}
