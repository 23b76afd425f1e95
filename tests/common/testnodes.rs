use std::sync::Arc;
use std::time::Duration;
use txwatch::ledger::{LedgerClient, MockLedgerClient};
use txwatch::registry::TransactionRegistryNode;
use txwatch::watcher::WatcherConfig;

/// Helper function to create a registry over a scripted mock ledger with
/// watcher tuning that keeps test runs fast
pub async fn setup_tracker() -> (TransactionRegistryNode, Arc<MockLedgerClient>) {
    let mock = Arc::new(MockLedgerClient::new());
    let ledger: Arc<dyn LedgerClient> = mock.clone();
    let registry = TransactionRegistryNode::new_with_config(
        ledger,
        WatcherConfig {
            receipt_timeout: Some(Duration::from_millis(500)),
            max_attempts: 4,
            initial_backoff: Duration::from_millis(10),
            max_backoff: Duration::from_millis(50),
        },
    );
    (registry, mock)
}
