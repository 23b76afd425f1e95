use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::sleep;
use crate::types::{ChainId, TxHash};
use super::{LedgerClient, LedgerClientError, TransactionReceipt};

/// Terminal behavior scripted for a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptOutcome {
    /// Serve a receipt with `success = true`
    Confirm,
    /// Serve a receipt with `success = false`
    Fail,
    /// Never serve a receipt; the request stays suspended
    NeverResolve,
}

/// Scripted behavior for one `(chain, hash)` pair
#[derive(Debug, Clone)]
pub struct ReceiptScript {
    pub outcome: ReceiptOutcome,
    /// How long the ledger "takes" before the receipt is available
    pub delay: Duration,
    /// Number of transport errors to serve before the receipt
    pub transient_failures: u32,
}

enum Step {
    Transient,
    Receipt(ReceiptOutcome, Duration),
    Unknown,
}

/// A scripted stand-in for a remote ledger, used by tests and the simulator
///
/// Receipts are served per `(chain_id, hash)` according to their script.
/// A request for an unscripted hash suspends forever, the way a real node
/// waits indefinitely for a hash it has never seen.
pub struct MockLedgerClient {
    scripts: Mutex<HashMap<(ChainId, TxHash), ReceiptScript>>,
}

impl MockLedgerClient {
    pub fn new() -> Self {
        Self {
            scripts: Mutex::new(HashMap::new()),
        }
    }

    /// Script the full behavior for a transaction
    pub async fn script_receipt(&self, chain_id: ChainId, hash: TxHash, script: ReceiptScript) {
        self.scripts.lock().await.insert((chain_id, hash), script);
    }

    /// Script a successful receipt after `delay`
    pub async fn confirm_after(&self, chain_id: ChainId, hash: TxHash, delay: Duration) {
        self.script_receipt(
            chain_id,
            hash,
            ReceiptScript {
                outcome: ReceiptOutcome::Confirm,
                delay,
                transient_failures: 0,
            },
        )
        .await;
    }

    /// Script a failure receipt after `delay`
    pub async fn fail_after(&self, chain_id: ChainId, hash: TxHash, delay: Duration) {
        self.script_receipt(
            chain_id,
            hash,
            ReceiptScript {
                outcome: ReceiptOutcome::Fail,
                delay,
                transient_failures: 0,
            },
        )
        .await;
    }

    /// Script a transaction whose receipt never arrives
    pub async fn never_resolve(&self, chain_id: ChainId, hash: TxHash) {
        self.script_receipt(
            chain_id,
            hash,
            ReceiptScript {
                outcome: ReceiptOutcome::NeverResolve,
                delay: Duration::ZERO,
                transient_failures: 0,
            },
        )
        .await;
    }

    /// Make the next `count` receipt requests for a transaction fail with a
    /// transport error before the scripted receipt is served
    pub async fn inject_transient_failures(&self, chain_id: ChainId, hash: &TxHash, count: u32) {
        let mut scripts = self.scripts.lock().await;
        if let Some(script) = scripts.get_mut(&(chain_id, hash.clone())) {
            script.transient_failures = count;
        }
    }
}

impl Default for MockLedgerClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LedgerClient for MockLedgerClient {
    async fn request_receipt(
        &self,
        chain_id: ChainId,
        hash: &TxHash,
    ) -> Result<TransactionReceipt, LedgerClientError> {
        let step = {
            let mut scripts = self.scripts.lock().await;
            match scripts.get_mut(&(chain_id, hash.clone())) {
                None => Step::Unknown,
                Some(script) if script.transient_failures > 0 => {
                    script.transient_failures -= 1;
                    Step::Transient
                }
                Some(script) => Step::Receipt(script.outcome, script.delay),
            }
        };

        match step {
            Step::Unknown => futures::future::pending().await,
            Step::Transient => {
                sleep(Duration::from_millis(5)).await;
                Err(LedgerClientError::Transport(format!(
                    "connection reset while fetching receipt for {}",
                    hash
                )))
            }
            Step::Receipt(ReceiptOutcome::NeverResolve, _) => futures::future::pending().await,
            Step::Receipt(outcome, delay) => {
                sleep(delay).await;
                Ok(TransactionReceipt {
                    hash: hash.clone(),
                    success: outcome == ReceiptOutcome::Confirm,
                })
            }
        }
    }
}
