use anyhow::Context;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Bernoulli, Distribution, LogNormal};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use txwatch::ledger::mock::{MockLedgerClient, ReceiptOutcome, ReceiptScript};
use txwatch::ledger::LedgerClient;
use txwatch::registry::{TransactionRegistryNode, TransactionTracker};
use txwatch::types::{ChainId, RegistryEvent, TransactionStatus, TxHash};
use txwatch::watcher::WatcherConfig;
use crate::config::Config;

/// How long the run waits for outcomes after the last event before giving up
const EVENT_DEADLINE: Duration = Duration::from_secs(10);

/// Outcome tally of one simulated session
#[derive(Debug, Serialize)]
pub struct SimulationResults {
    pub submitted: usize,
    pub confirmed: usize,
    pub failed: usize,
    pub still_pending: usize,
    pub events_observed: usize,
}

/// Drive a full session against a scripted mock ledger: submit
/// transactions on every configured chain, watch them resolve through the
/// subscription interface, and tally the outcomes.
pub async fn run_simulation(config: &Config) -> anyhow::Result<SimulationResults> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let delay_dist = LogNormal::new(
        config.median_receipt_delay_ms.ln(),
        config.receipt_delay_sigma,
    )
    .context("invalid receipt delay distribution")?;
    let outcome_dist =
        Bernoulli::new(config.confirmation_rate).context("invalid confirmation rate")?;
    let transient_dist =
        Bernoulli::new(config.transient_failure_rate).context("invalid transient failure rate")?;

    // script a receipt for every transaction we are about to submit
    let mock = Arc::new(MockLedgerClient::new());
    let mut planned: Vec<(ChainId, TxHash)> = Vec::new();
    for &chain in &config.chains {
        let chain_id = ChainId(chain);
        for index in 0..config.transactions_per_chain {
            let hash = TxHash(format!("0x{:08x}{:04x}", rng.gen::<u32>(), index));
            let outcome = if outcome_dist.sample(&mut rng) {
                ReceiptOutcome::Confirm
            } else {
                ReceiptOutcome::Fail
            };
            let delay = Duration::from_millis(delay_dist.sample(&mut rng).max(1.0) as u64);
            let transient_failures = if transient_dist.sample(&mut rng) { 1 } else { 0 };
            mock.script_receipt(
                chain_id,
                hash.clone(),
                ReceiptScript {
                    outcome,
                    delay,
                    transient_failures,
                },
            )
            .await;
            planned.push((chain_id, hash));
        }
    }

    let ledger: Arc<dyn LedgerClient> = mock.clone();
    let registry = TransactionRegistryNode::new_with_config(
        ledger,
        WatcherConfig {
            receipt_timeout: Some(Duration::from_secs(5)),
            max_attempts: 4,
            initial_backoff: Duration::from_millis(20),
            max_backoff: Duration::from_millis(200),
        },
    );

    // drain events concurrently so submission never outruns the subscriber
    let mut subscription = registry.subscribe().await;
    let expected = planned.len();
    let drain = tokio::spawn(async move {
        let mut events_observed = 0usize;
        let mut terminal = 0usize;
        while terminal < expected {
            match timeout(EVENT_DEADLINE, subscription.recv()).await {
                Ok(Some(event)) => {
                    events_observed += 1;
                    if let RegistryEvent::StatusChanged {
                        chain_id,
                        hash,
                        status,
                    } = &event
                    {
                        tracing::info!("{} on chain {} -> {}", hash, chain_id, status);
                        if status.is_terminal() {
                            terminal += 1;
                        }
                    }
                }
                Ok(None) => break,
                Err(_) => {
                    tracing::warn!("gave up waiting for further outcomes");
                    break;
                }
            }
        }
        events_observed
    });

    for (chain_id, hash) in &planned {
        registry.add_transaction(*chain_id, hash.clone()).await?;
    }

    let events_observed = drain.await.context("event drain task died")?;

    let mut results = SimulationResults {
        submitted: expected,
        confirmed: 0,
        failed: 0,
        still_pending: 0,
        events_observed,
    };
    for &chain in &config.chains {
        for record in registry.get_transactions(ChainId(chain)).await {
            match record.status {
                TransactionStatus::Confirmed => results.confirmed += 1,
                TransactionStatus::Failed => results.failed += 1,
                TransactionStatus::Pending => results.still_pending += 1,
            }
        }
    }

    registry.shutdown().await;
    Ok(results)
}
