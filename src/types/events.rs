use serde::{Deserialize, Serialize};
use super::{ChainId, TxHash, TransactionStatus};

/// A change notification delivered to registry subscribers
///
/// One event is emitted after every successful mutation of the registry.
/// Subscribers observe events for the same chain in the order the mutations
/// were applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// A new transaction entered tracking in the `Pending` state
    Added { chain_id: ChainId, hash: TxHash },
    /// A transaction was removed from tracking (at any status)
    Removed { chain_id: ChainId, hash: TxHash },
    /// A tracked transaction reached its final on-chain outcome
    StatusChanged {
        chain_id: ChainId,
        hash: TxHash,
        status: TransactionStatus,
    },
}
