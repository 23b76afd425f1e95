use crate::registry::{TransactionTracker, RegistryError};
use crate::types::{constants, ChainId, TxHash, TransactionStatus};
use crate::utils::logging;
use super::setup_registry;

/// Tests that adding a transaction creates exactly one pending record
#[tokio::test]
async fn test_add_creates_pending_record() {
    logging::init_logging();
    logging::log("TEST", "\n=== Starting add-transaction test ===");
    let (registry, _mock) = setup_registry().await;

    registry
        .add_transaction(constants::chain_test_1(), TxHash("0xaa".to_string()))
        .await
        .expect("Failed to add transaction");

    let records = registry.get_transactions(constants::chain_test_1()).await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].hash, TxHash("0xaa".to_string()));
    assert_eq!(records[0].chain_id, constants::chain_test_1());
    assert_eq!(records[0].status, TransactionStatus::Pending);
    logging::log("TEST", "=== Test completed successfully ===\n");
}

/// Tests that adding the same hash twice leaves exactly one record
#[tokio::test]
async fn test_add_is_idempotent() {
    logging::init_logging();
    let (registry, _mock) = setup_registry().await;

    let hash = TxHash("0xaa".to_string());
    registry
        .add_transaction(constants::chain_test_1(), hash.clone())
        .await
        .expect("Failed to add transaction");
    registry
        .add_transaction(constants::chain_test_1(), hash.clone())
        .await
        .expect("Duplicate add should be a no-op, not an error");

    let records = registry.get_transactions(constants::chain_test_1()).await;
    assert_eq!(records.len(), 1, "duplicate add must not create a second entry");
}

/// Tests that records keep submission order, oldest first
#[tokio::test]
async fn test_insertion_order_is_preserved() {
    logging::init_logging();
    let (registry, _mock) = setup_registry().await;

    for hash in ["0x01", "0x02", "0x03"] {
        registry
            .add_transaction(constants::chain_test_1(), TxHash(hash.to_string()))
            .await
            .expect("Failed to add transaction");
    }

    let records = registry.get_transactions(constants::chain_test_1()).await;
    let hashes: Vec<&str> = records.iter().map(|record| record.hash.0.as_str()).collect();
    assert_eq!(hashes, vec!["0x01", "0x02", "0x03"]);
}

/// Tests that records for different chains are fully independent
#[tokio::test]
async fn test_chains_are_independent() {
    logging::init_logging();
    logging::log("TEST", "\n=== Starting chain-independence test ===");
    let (registry, _mock) = setup_registry().await;

    registry
        .add_transaction(constants::chain_main(), TxHash("0xcc".to_string()))
        .await
        .expect("Failed to add transaction");
    registry
        .add_transaction(constants::chain_test_1(), TxHash("0xdd".to_string()))
        .await
        .expect("Failed to add transaction");

    let main_records = registry.get_transactions(constants::chain_main()).await;
    let test_records = registry.get_transactions(constants::chain_test_1()).await;
    assert_eq!(main_records.len(), 1);
    assert_eq!(main_records[0].hash, TxHash("0xcc".to_string()));
    assert_eq!(test_records.len(), 1);
    assert_eq!(test_records[0].hash, TxHash("0xdd".to_string()));
    logging::log("TEST", "=== Test completed successfully ===\n");
}

/// Tests that the same hash can be tracked on two chains at once
#[tokio::test]
async fn test_same_hash_on_two_chains() {
    logging::init_logging();
    let (registry, _mock) = setup_registry().await;

    let hash = TxHash("0xaa".to_string());
    registry
        .add_transaction(constants::chain_main(), hash.clone())
        .await
        .expect("Failed to add transaction");
    registry
        .add_transaction(constants::chain_test_1(), hash.clone())
        .await
        .expect("Failed to add transaction");

    assert_eq!(registry.get_transactions(constants::chain_main()).await.len(), 1);
    assert_eq!(registry.get_transactions(constants::chain_test_1()).await.len(), 1);
}

/// Tests that reading an unknown chain yields an empty sequence
#[tokio::test]
async fn test_unknown_chain_reads_empty() {
    logging::init_logging();
    let (registry, _mock) = setup_registry().await;
    assert!(registry.get_transactions(ChainId(999)).await.is_empty());
}

/// Tests that malformed identifiers are rejected synchronously and leave
/// the registry unchanged
#[tokio::test]
async fn test_malformed_identifiers_are_rejected() {
    logging::init_logging();
    let (registry, _mock) = setup_registry().await;

    let result = registry
        .add_transaction(ChainId(0), TxHash("0xaa".to_string()))
        .await;
    assert!(matches!(result, Err(RegistryError::InvalidChainId(0))));

    let result = registry
        .add_transaction(constants::chain_test_1(), TxHash(String::new()))
        .await;
    assert!(matches!(result, Err(RegistryError::InvalidHash(_))));

    assert!(registry.get_transactions(ChainId(0)).await.is_empty());
    assert!(registry.get_transactions(constants::chain_test_1()).await.is_empty());
}
