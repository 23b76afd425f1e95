use async_trait::async_trait;
use thiserror::Error;
use crate::types::{ChainId, TxHash, TrackedTransaction, RegistryEvent};
use crate::types::communication::Receiver;

pub mod node;
pub use node::TransactionRegistryNode;

#[cfg(test)]
mod tests;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Invalid chain id: {0}")]
    InvalidChainId(u64),
    #[error("Invalid transaction hash: {0:?}")]
    InvalidHash(String),
}

/// Identifier for a registered subscriber
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct SubscriptionId(pub u64);

/// A live subscription to registry change notifications
///
/// Events arrive from subscription time forward; a new subscriber should
/// call `get_transactions` once to obtain the current snapshot. Dropping
/// the subscription (or passing its id to `unsubscribe`) stops delivery.
pub struct Subscription {
    id: SubscriptionId,
    receiver: Receiver<RegistryEvent>,
}

impl Subscription {
    pub(crate) fn new(id: SubscriptionId, receiver: Receiver<RegistryEvent>) -> Self {
        Self { id, receiver }
    }

    /// The id to pass to `unsubscribe`
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Receive the next change notification; `None` once deregistered
    pub async fn recv(&mut self) -> Option<RegistryEvent> {
        self.receiver.recv().await
    }
}

/// The registry of transactions tracked during the current session
///
/// Single source of truth for submitted-but-unresolved transactions; all
/// reads and writes go through it. Mutations never block on the network,
/// and every successful mutation notifies subscribers.
#[async_trait]
pub trait TransactionTracker: Send + Sync {
    /// Start tracking a transaction that was just submitted to a network.
    ///
    /// Appends a `Pending` record to that network's sequence and spawns a
    /// confirmation watcher for it. Adding a hash that is already tracked
    /// on the same chain is a silent no-op; no second watcher starts.
    async fn add_transaction(&self, chain_id: ChainId, hash: TxHash) -> Result<(), RegistryError>;

    /// Stop tracking a transaction, whatever its status.
    ///
    /// Removing an unknown hash is a silent no-op. An in-flight watcher for
    /// the removed record is not cancelled; its late result is discarded.
    async fn remove_transaction(&self, chain_id: ChainId, hash: &TxHash);

    /// Snapshot of the records tracked for a network, oldest first.
    /// Returns an empty sequence for an unknown chain.
    async fn get_transactions(&self, chain_id: ChainId) -> Vec<TrackedTransaction>;

    /// Register a subscriber notified after every successful mutation
    async fn subscribe(&self) -> Subscription;

    /// Deregister a subscriber
    async fn unsubscribe(&self, id: SubscriptionId);
}
