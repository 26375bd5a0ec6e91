// Copyright (C) 2025 Category Labs, Inc.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Gas fee estimator - prints the fee caps the configured strategy would use.

use clap::Parser;
use gas_fee_estimator::{
    create_provider, with_gas_fee_estimator, Config, GasFeeProvider, ProviderFeeSource,
};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Command line overrides for the environment configuration.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// RPC endpoint (overrides RPC_URL)
    #[arg(long)]
    rpc_url: Option<String>,

    /// DEFAULT, FIXED, BASE_FEE_PERCENTAGE or PRIORITY_FEE_PERCENTAGE (overrides GAS_FEE_STRATEGY)
    #[arg(long)]
    strategy: Option<String>,

    /// Wei amount or percentage for the strategy (overrides GAS_FEE_VALUE)
    #[arg(long)]
    value: Option<String>,

    /// Safety margin on the suggested priority fee, in percent (overrides PRIORITY_FEE_BUFFER_PERCENT)
    #[arg(long)]
    buffer_percent: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging; stdout is reserved for the quote
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    // CLI flags win over the environment
    let config = Config::from_env_with_overrides(|name| match name {
        "RPC_URL" => cli.rpc_url.clone(),
        "GAS_FEE_STRATEGY" => cli.strategy.clone(),
        "GAS_FEE_VALUE" => cli.value.clone(),
        "PRIORITY_FEE_BUFFER_PERCENT" => cli.buffer_percent.map(|p| p.to_string()),
        _ => None,
    })
    .map_err(|e| {
        error!("Failed to load config: {}", e);
        e
    })?;

    info!("📡 RPC: {}", config.rpc_url);

    let provider = create_provider(&config.rpc())?;
    let provider = with_gas_fee_estimator(
        GasFeeProvider::new(ProviderFeeSource::new(provider)),
        config.fee_mode(),
        config.priority_fee_buffer_percent,
    );

    let quote = provider.fee_data().await.map_err(|e| {
        error!("Fee estimation failed: {}", e);
        e
    })?;

    info!(
        "✅ {}: max_fee={} wei, priority={} wei",
        config.fee_mode(),
        quote.max_fee_per_gas,
        quote.max_priority_fee_per_gas
    );
    println!("{}", serde_json::to_string_pretty(&quote)?);

    Ok(())
}
