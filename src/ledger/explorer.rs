use once_cell::sync::Lazy;
use std::collections::HashMap;
use crate::types::{ChainId, TxHash};

/// Explorer hosts for the well-known public networks
static EXPLORER_HOSTS: Lazy<HashMap<u64, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (1, "etherscan.io"),
        (3, "ropsten.etherscan.io"),
        (4, "rinkeby.etherscan.io"),
        (5, "goerli.etherscan.io"),
        (42, "kovan.etherscan.io"),
    ])
});

/// Format a human-viewable explorer link for a transaction
///
/// Pure formatting, no network call. Returns `None` for a network without
/// a known explorer host.
pub fn explorer_link(chain_id: ChainId, hash: &TxHash) -> Option<String> {
    EXPLORER_HOSTS
        .get(&chain_id.0)
        .map(|host| format!("https://{}/tx/{}", host, hash))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_network_link() {
        let link = explorer_link(ChainId(4), &TxHash("0xabc".to_string()));
        assert_eq!(
            link.as_deref(),
            Some("https://rinkeby.etherscan.io/tx/0xabc")
        );
    }

    #[test]
    fn test_main_network_has_no_prefix() {
        let link = explorer_link(ChainId(1), &TxHash("0xabc".to_string()));
        assert_eq!(link.as_deref(), Some("https://etherscan.io/tx/0xabc"));
    }

    #[test]
    fn test_unknown_network_has_no_link() {
        assert!(explorer_link(ChainId(777), &TxHash("0xabc".to_string())).is_none());
    }
}
