pub mod chain;
pub mod transaction;
pub mod events;
pub mod constants;
pub mod communication;

pub use chain::ChainId;
pub use transaction::{TxHash, TransactionStatus, TrackedTransaction};
pub use events::RegistryEvent;
