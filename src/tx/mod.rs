//! Transaction lifecycle tracking for user-triggered writes (plan
//! creation, deposits). The contract layer owns submission and
//! confirmation; this module tracks the surfaced status and forces two
//! staggered re-fetches after confirmation so the dashboard catches up
//! faster than the fixed-interval poll alone.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

use crate::errors::{Error, Result};

/// First forced re-fetch after confirmation.
pub const REFRESH_DELAY_SHORT: Duration = Duration::from_secs(2);
/// Second forced re-fetch, after indexing has usually caught up.
pub const REFRESH_DELAY_LONG: Duration = Duration::from_secs(8);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "camelCase")]
pub enum TxStatus {
    Submitted,
    Confirming,
    Confirmed,
    /// Terminal, with a human-readable reason (user rejection, revert,
    /// insufficient balance, unsupported token). Never retried
    /// automatically; the user must re-initiate.
    Failed(String),
}

impl TxStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TxStatus::Confirmed | TxStatus::Failed(_))
    }
}

/// Tracks one in-flight operation through
/// submitted -> confirming -> confirmed | failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxMonitor {
    pub status: TxStatus,
    pub hash: Option<String>,
}

impl TxMonitor {
    pub fn submitted(hash: impl Into<String>) -> Self {
        TxMonitor {
            status: TxStatus::Submitted,
            hash: Some(hash.into()),
        }
    }

    pub fn confirming(&mut self) -> Result<()> {
        self.transition(TxStatus::Confirming)
    }

    pub fn confirmed(&mut self) -> Result<()> {
        self.transition(TxStatus::Confirmed)
    }

    pub fn failed(&mut self, reason: impl Into<String>) -> Result<()> {
        self.transition(TxStatus::Failed(reason.into()))
    }

    fn transition(&mut self, next: TxStatus) -> Result<()> {
        if self.status.is_terminal() {
            return Err(Error::Transaction(format!(
                "transaction already {:?}",
                self.status
            )));
        }
        self.status = next;
        Ok(())
    }
}

/// After a confirmation, force plan and balance re-fetch at two staggered
/// delays instead of waiting for the next poll tick.
pub fn schedule_confirmation_refresh<F, Fut>(refresh: F) -> JoinHandle<()>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send,
{
    tokio::spawn(async move {
        tokio::time::sleep(REFRESH_DELAY_SHORT).await;
        refresh().await;
        tokio::time::sleep(REFRESH_DELAY_LONG - REFRESH_DELAY_SHORT).await;
        refresh().await;
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_happy_path() {
        let mut tx = TxMonitor::submitted("0xabc");
        tx.confirming().unwrap();
        tx.confirmed().unwrap();
        assert!(tx.status.is_terminal());
    }

    #[test]
    fn terminal_status_rejects_transitions() {
        let mut tx = TxMonitor::submitted("0xabc");
        tx.failed("user rejected").unwrap();
        assert!(tx.confirming().is_err());
        assert_eq!(tx.status, TxStatus::Failed("user rejected".to_string()));
    }
}
