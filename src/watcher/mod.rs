use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{sleep, timeout};
use crate::ledger::{LedgerClient, LedgerClientError, TransactionReceipt};
use crate::registry::node::RegistryState;
use crate::types::{ChainId, TxHash};

#[cfg(test)]
mod tests;

/// Tuning for confirmation watchers
#[derive(Debug, Clone)]
pub struct WatcherConfig {
    /// Upper bound on a single receipt wait; `None` waits indefinitely
    pub receipt_timeout: Option<Duration>,
    /// Total receipt attempts before giving up and leaving the record pending
    pub max_attempts: u32,
    /// Backoff before the first retry; doubles on each further retry
    pub initial_backoff: Duration,
    /// Cap on the backoff between attempts
    pub max_backoff: Duration,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            receipt_timeout: Some(Duration::from_secs(15 * 60)),
            max_attempts: 5,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(30),
        }
    }
}

/// Watches one tracked transaction until the ledger reports its final
/// outcome, then writes that outcome back into the registry exactly once.
///
/// A watcher has no observable side effect besides the single status write
/// and its subscriber notification. If the record disappears while the
/// receipt is in flight, the result is discarded. A transport failure is
/// retried with capped exponential backoff; if every attempt fails, the
/// record is left `Pending` and the problem is surfaced as a non-fatal
/// diagnostic rather than written into the record.
pub struct ConfirmationWatcher {
    watcher_id: u64,
    chain_id: ChainId,
    hash: TxHash,
    state: Arc<Mutex<RegistryState>>,
    ledger: Arc<dyn LedgerClient>,
    config: WatcherConfig,
}

impl ConfirmationWatcher {
    /// Spawn a watcher task for a newly tracked transaction
    pub(crate) fn spawn(
        watcher_id: u64,
        chain_id: ChainId,
        hash: TxHash,
        state: Arc<Mutex<RegistryState>>,
        ledger: Arc<dyn LedgerClient>,
        config: WatcherConfig,
    ) -> JoinHandle<()> {
        let watcher = Self {
            watcher_id,
            chain_id,
            hash,
            state,
            ledger,
            config,
        };
        tokio::spawn(watcher.run())
    }

    async fn run(self) {
        let receipt = self.await_receipt().await;
        let mut state = self.state.lock().await;
        match receipt {
            Some(receipt) => {
                if state.apply_receipt(self.chain_id, &self.hash, receipt.success) {
                    tracing::info!(
                        "transaction {} on chain {} reached its outcome: {}",
                        self.hash,
                        self.chain_id,
                        if receipt.success { "confirmed" } else { "failed" }
                    );
                } else {
                    tracing::debug!(
                        "discarding receipt for {} on chain {}: no longer tracked as pending",
                        self.hash,
                        self.chain_id
                    );
                }
            }
            None => {
                tracing::warn!(
                    "receipt for {} on chain {} unavailable after {} attempts, leaving it pending",
                    self.hash,
                    self.chain_id,
                    self.config.max_attempts
                );
            }
        }
        state.finish_watcher(self.watcher_id);
    }

    /// Await the receipt, retrying transient failures with capped
    /// exponential backoff. `None` once every attempt is exhausted.
    async fn await_receipt(&self) -> Option<TransactionReceipt> {
        let mut backoff = self.config.initial_backoff;
        for attempt in 1..=self.config.max_attempts {
            match self.request_once().await {
                Ok(receipt) => return Some(receipt),
                Err(err) if attempt < self.config.max_attempts => {
                    tracing::warn!(
                        "receipt attempt {}/{} for {} on chain {} failed: {}, retrying in {:?}",
                        attempt,
                        self.config.max_attempts,
                        self.hash,
                        self.chain_id,
                        err,
                        backoff
                    );
                    sleep(backoff).await;
                    backoff = (backoff * 2).min(self.config.max_backoff);
                }
                Err(err) => {
                    tracing::warn!(
                        "receipt attempt {}/{} for {} on chain {} failed: {}",
                        attempt,
                        self.config.max_attempts,
                        self.hash,
                        self.chain_id,
                        err
                    );
                }
            }
        }
        None
    }

    /// One receipt request, bounded by the configured timeout
    async fn request_once(&self) -> Result<TransactionReceipt, LedgerClientError> {
        let request = self.ledger.request_receipt(self.chain_id, &self.hash);
        match self.config.receipt_timeout {
            Some(limit) => timeout(limit, request)
                .await
                .unwrap_or(Err(LedgerClientError::Timeout(limit))),
            None => request.await,
        }
    }
}
