use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use crate::types::{ChainId, TxHash};

pub mod explorer;
pub mod mock;

pub use explorer::explorer_link;
pub use mock::MockLedgerClient;

#[derive(Debug, Error)]
pub enum LedgerClientError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("timed out after {0:?} waiting for a receipt")]
    Timeout(Duration),
}

/// The ledger's final record of a transaction's execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionReceipt {
    /// The transaction the receipt is for
    pub hash: TxHash,
    /// Whether the transaction executed successfully on chain
    pub success: bool,
}

/// Client for a remote distributed ledger
///
/// `request_receipt` resolves only once the transaction has reached a final
/// on-chain outcome, which can take an unbounded, network-dependent amount
/// of time. Callers that need bounded waiting wrap the call in a timeout.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Await the receipt for a transaction submitted to the given network
    async fn request_receipt(
        &self,
        chain_id: ChainId,
        hash: &TxHash,
    ) -> Result<TransactionReceipt, LedgerClientError>;
}
