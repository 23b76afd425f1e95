use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use futures::future::join_all;
use tokio::sync::Mutex;
use tokio::sync::mpsc::error::TrySendError;
use tokio::task::JoinHandle;
use crate::types::{ChainId, TxHash, TransactionStatus, TrackedTransaction, RegistryEvent};
use crate::types::communication::{Channel, Sender};
use crate::ledger::LedgerClient;
use crate::watcher::{ConfirmationWatcher, WatcherConfig};
use super::{TransactionTracker, RegistryError, Subscription, SubscriptionId};

/// Buffer size for subscriber notification channels
const SUBSCRIPTION_BUFFER: usize = 100;

/// The internal state of the registry node
///
/// Guarded by a single mutex; `add_transaction`, `remove_transaction` and
/// the watchers' status write-backs are all serialized through it, which is
/// what upholds the per-chain hash uniqueness and the monotonic status
/// transitions.
pub struct RegistryState {
    /// Tracked transactions per chain, oldest submission first
    transactions: HashMap<ChainId, Vec<TrackedTransaction>>,
    /// Live subscriber channels
    subscribers: Vec<(SubscriptionId, Sender<RegistryEvent>)>,
    /// Next subscription id to hand out
    next_subscription: u64,
    /// Handles of in-flight confirmation watchers
    watchers: HashMap<u64, JoinHandle<()>>,
    /// Next watcher id to hand out
    next_watcher: u64,
}

impl RegistryState {
    fn new() -> Self {
        Self {
            transactions: HashMap::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
            watchers: HashMap::new(),
            next_watcher: 0,
        }
    }

    fn contains(&self, chain_id: ChainId, hash: &TxHash) -> bool {
        self.transactions
            .get(&chain_id)
            .map(|list| list.iter().any(|record| &record.hash == hash))
            .unwrap_or(false)
    }

    /// Deliver an event to every live subscriber.
    ///
    /// Delivery is best-effort and must not block a mutation: a subscriber
    /// with a full buffer loses the event, a subscriber whose receiver is
    /// gone is pruned.
    fn notify(&mut self, event: RegistryEvent) {
        self.subscribers.retain(|(id, sender)| {
            match sender.try_send(event.clone()) {
                Ok(()) => true,
                Err(TrySendError::Full(_)) => {
                    tracing::warn!("subscriber {} is not draining, dropping event", id.0);
                    true
                }
                Err(TrySendError::Closed(_)) => {
                    tracing::debug!("subscriber {} is gone, pruning", id.0);
                    false
                }
            }
        });
    }

    /// Write a receipt outcome into a record.
    ///
    /// Returns `false` when the write is discarded: the record was removed
    /// while the receipt was in flight, or it already reached a terminal
    /// status. A discarded receipt never re-inserts a record.
    pub(crate) fn apply_receipt(&mut self, chain_id: ChainId, hash: &TxHash, success: bool) -> bool {
        let record = self
            .transactions
            .get_mut(&chain_id)
            .and_then(|list| list.iter_mut().find(|record| &record.hash == hash));
        let Some(record) = record else {
            return false;
        };
        if record.status.is_terminal() {
            return false;
        }
        record.status = if success {
            TransactionStatus::Confirmed
        } else {
            TransactionStatus::Failed
        };
        let status = record.status;
        self.notify(RegistryEvent::StatusChanged {
            chain_id,
            hash: hash.clone(),
            status,
        });
        true
    }

    /// Drop the bookkeeping entry of a watcher that has run to completion
    pub(crate) fn finish_watcher(&mut self, watcher_id: u64) {
        self.watchers.remove(&watcher_id);
    }
}

/// The single implementation of the transaction registry
///
/// Constructed once per application session with an injected ledger client;
/// holds no durable storage. Dropping the node (after `shutdown`) discards
/// all tracked state.
pub struct TransactionRegistryNode {
    /// The internal state of the node
    pub state: Arc<Mutex<RegistryState>>,
    /// Client used by confirmation watchers to await receipts
    ledger: Arc<dyn LedgerClient>,
    /// Tuning applied to every spawned watcher
    watcher_config: WatcherConfig,
}

impl TransactionRegistryNode {
    /// Create a registry with default watcher tuning
    pub fn new(ledger: Arc<dyn LedgerClient>) -> Self {
        Self::new_with_config(ledger, WatcherConfig::default())
    }

    /// Create a registry with explicit watcher tuning
    pub fn new_with_config(ledger: Arc<dyn LedgerClient>, watcher_config: WatcherConfig) -> Self {
        Self {
            state: Arc::new(Mutex::new(RegistryState::new())),
            ledger,
            watcher_config,
        }
    }

    /// Number of confirmation watchers still in flight
    pub async fn watcher_count(&self) -> usize {
        self.state.lock().await.watchers.len()
    }

    /// Abort all in-flight watchers and wait for them to wind down.
    /// Call at session end so no receipt wait outlives the registry's use.
    pub async fn shutdown(&self) {
        let handles: Vec<JoinHandle<()>> = {
            let mut state = self.state.lock().await;
            state.watchers.drain().map(|(_, handle)| handle).collect()
        };
        for handle in &handles {
            handle.abort();
        }
        join_all(handles).await;
    }
}

#[async_trait]
impl TransactionTracker for TransactionRegistryNode {
    async fn add_transaction(&self, chain_id: ChainId, hash: TxHash) -> Result<(), RegistryError> {
        if !chain_id.is_well_formed() {
            return Err(RegistryError::InvalidChainId(chain_id.0));
        }
        if !hash.is_well_formed() {
            return Err(RegistryError::InvalidHash(hash.0.clone()));
        }

        let mut state = self.state.lock().await;
        if state.contains(chain_id, &hash) {
            tracing::debug!("already tracking {} on chain {}, ignoring", hash, chain_id);
            return Ok(());
        }

        state
            .transactions
            .entry(chain_id)
            .or_default()
            .push(TrackedTransaction::new(chain_id, hash.clone()));
        state.notify(RegistryEvent::Added {
            chain_id,
            hash: hash.clone(),
        });

        let watcher_id = state.next_watcher;
        state.next_watcher += 1;
        let handle = ConfirmationWatcher::spawn(
            watcher_id,
            chain_id,
            hash.clone(),
            self.state.clone(),
            self.ledger.clone(),
            self.watcher_config.clone(),
        );
        state.watchers.insert(watcher_id, handle);
        tracing::info!("tracking {} on chain {}", hash, chain_id);
        Ok(())
    }

    async fn remove_transaction(&self, chain_id: ChainId, hash: &TxHash) {
        let mut state = self.state.lock().await;
        let Some(list) = state.transactions.get_mut(&chain_id) else {
            return;
        };
        let before = list.len();
        list.retain(|record| &record.hash != hash);
        if list.len() == before {
            // removing an untracked hash is a no-op
            return;
        }
        let chain_empty = list.is_empty();
        if chain_empty {
            state.transactions.remove(&chain_id);
        }
        state.notify(RegistryEvent::Removed {
            chain_id,
            hash: hash.clone(),
        });
        tracing::info!("stopped tracking {} on chain {}", hash, chain_id);
    }

    async fn get_transactions(&self, chain_id: ChainId) -> Vec<TrackedTransaction> {
        self.state
            .lock()
            .await
            .transactions
            .get(&chain_id)
            .cloned()
            .unwrap_or_default()
    }

    async fn subscribe(&self) -> Subscription {
        let mut state = self.state.lock().await;
        let id = SubscriptionId(state.next_subscription);
        state.next_subscription += 1;
        let (sender, receiver) = Channel::new(SUBSCRIPTION_BUFFER).split();
        state.subscribers.push((id, sender));
        Subscription::new(id, receiver)
    }

    async fn unsubscribe(&self, id: SubscriptionId) {
        let mut state = self.state.lock().await;
        state.subscribers.retain(|(existing, _)| *existing != id);
    }
}
