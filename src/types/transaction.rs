use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use super::ChainId;

/// Opaque transaction hash returned by the ledger upon submission
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct TxHash(pub String);

impl TxHash {
    /// Whether this is a well-formed hash (non-empty)
    pub fn is_well_formed(&self) -> bool {
        !self.0.is_empty()
    }
}

/// Status of a tracked transaction
///
/// Transitions are monotonic: `Pending -> Confirmed` or `Pending -> Failed`.
/// `Confirmed` and `Failed` are terminal and are never rewritten.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionStatus {
    /// Submitted, final outcome not yet known
    Pending,
    /// The ledger reports the transaction executed successfully
    Confirmed,
    /// The ledger reports the transaction failed
    Failed,
}

impl TransactionStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TransactionStatus::Pending)
    }
}

/// A transaction tracked by the registry for the current session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedTransaction {
    /// The hash obtained from the ledger at submission
    pub hash: TxHash,
    /// The network the transaction was submitted to
    pub chain_id: ChainId,
    /// Current lifecycle status
    pub status: TransactionStatus,
    /// When the registry started tracking this transaction, as a duration
    /// since the Unix epoch. Used only for ordering and display.
    pub submitted_at: Duration,
}

impl TrackedTransaction {
    /// Create a new record in the `Pending` state, stamped with the current time
    pub fn new(chain_id: ChainId, hash: TxHash) -> Self {
        let submitted_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self {
            hash,
            chain_id,
            status: TransactionStatus::Pending,
            submitted_at,
        }
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionStatus::Pending => write!(f, "Pending"),
            TransactionStatus::Confirmed => write!(f, "Confirmed"),
            TransactionStatus::Failed => write!(f, "Failed"),
        }
    }
}
