use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use crate::ledger::{LedgerClient, MockLedgerClient};
use crate::registry::{TransactionTracker, TransactionRegistryNode};
use crate::types::{ChainId, TxHash, TransactionStatus};
use crate::watcher::WatcherConfig;


/// Watcher tuning that keeps test runs fast
pub fn test_watcher_config() -> WatcherConfig {
    WatcherConfig {
        receipt_timeout: Some(Duration::from_millis(250)),
        max_attempts: 3,
        initial_backoff: Duration::from_millis(10),
        max_backoff: Duration::from_millis(40),
    }
}

/// Helper function to set up a registry over a scripted mock ledger
pub async fn setup_registry_with_config(
    config: WatcherConfig,
) -> (TransactionRegistryNode, Arc<MockLedgerClient>) {
    let mock = Arc::new(MockLedgerClient::new());
    let ledger: Arc<dyn LedgerClient> = mock.clone();
    let registry = TransactionRegistryNode::new_with_config(ledger, config);
    (registry, mock)
}

pub async fn setup_registry() -> (TransactionRegistryNode, Arc<MockLedgerClient>) {
    setup_registry_with_config(test_watcher_config()).await
}

/// Poll until the record reaches the expected status
pub async fn wait_for_status(
    registry: &TransactionRegistryNode,
    chain_id: ChainId,
    hash: &TxHash,
    expected: TransactionStatus,
) {
    for _ in 0..100 {
        let records = registry.get_transactions(chain_id).await;
        if records
            .iter()
            .any(|record| &record.hash == hash && record.status == expected)
        {
            return;
        }
        sleep(Duration::from_millis(20)).await;
    }
    panic!("transaction {} never reached status {:?}", hash, expected);
}

/// Poll until every in-flight watcher has wound down
pub async fn wait_for_watchers_to_drain(registry: &TransactionRegistryNode) {
    for _ in 0..100 {
        if registry.watcher_count().await == 0 {
            return;
        }
        sleep(Duration::from_millis(20)).await;
    }
    panic!("watchers never drained");
}
