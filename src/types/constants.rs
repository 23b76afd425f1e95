use crate::types::ChainId;

/// Chain ID of the main public network
pub fn chain_main() -> ChainId {
    ChainId(1)
}

/// Chain ID of the first test network
pub fn chain_test_1() -> ChainId {
    ChainId(4)
}

/// Chain ID of the second test network
pub fn chain_test_2() -> ChainId {
    ChainId(5)
}
