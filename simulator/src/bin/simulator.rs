use std::env;
use simulator::config::Config;
use simulator::simulation::run_simulation;
use txwatch::utils::logging;

// ------------------------------------------------------------------------------------------------
// Main
// ------------------------------------------------------------------------------------------------

/// Run one simulated session and print the outcome tally as JSON.
/// An optional argument names a TOML config file.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let config_path = env::args().nth(1);
    let config = Config::load(config_path.as_deref())?;
    tracing::info!(
        "simulating {} transactions across {} chains",
        config.chains.len() * config.transactions_per_chain,
        config.chains.len()
    );

    let results = run_simulation(&config).await?;
    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
