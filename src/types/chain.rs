use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a ledger network
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct ChainId(pub u64);

impl ChainId {
    /// Whether this is a well-formed chain id (no network uses id 0)
    pub fn is_well_formed(&self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
