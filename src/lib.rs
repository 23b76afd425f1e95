pub mod types;
pub mod ledger;
pub mod registry;
pub mod watcher;
pub mod utils;

pub use ledger::LedgerClient;
pub use registry::{TransactionTracker, TransactionRegistryNode};
pub use watcher::{ConfirmationWatcher, WatcherConfig};
