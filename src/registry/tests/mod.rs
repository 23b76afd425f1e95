use std::sync::Arc;
use std::time::Duration;
use crate::ledger::{LedgerClient, MockLedgerClient};
use crate::registry::TransactionRegistryNode;
use crate::watcher::WatcherConfig;

mod basic;

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
pub async fn setup_registry() -> (TransactionRegistryNode, Arc<MockLedgerClient>) {
    let mock = Arc::new(MockLedgerClient::new());
    let ledger: Arc<dyn LedgerClient> = mock.clone();
    let registry = TransactionRegistryNode::new_with_config(ledger, test_watcher_config());
    (registry, mock)
}
