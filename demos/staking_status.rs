/// Show the staking and referral state of the node's first account
///
/// This example demonstrates:
/// 1. Loading `StakingConfig` from the environment (and `.env`)
/// 2. Wrapping an Alloy provider as a wallet with `AlloyWallet`
/// 3. Connecting a `Session` with status events on a channel
/// 4. Reading the stake position, pending reward and referral summary
///
/// The node must expose an account through `eth_accounts`, e.g. an anvil
/// fork of BSC:
///
/// ```bash
/// anvil --fork-url https://bsc-dataseed.binance.org/ --chain-id 56
/// RPC_URL=http://127.0.0.1:8545 cargo run --example staking_status
/// ```
use std::env;
use std::sync::Arc;

use alloy_provider::ProviderBuilder;
use anyhow::{Context, Result};
use stakeflow::referral_link::referral_link;
use stakeflow::{AlloyWallet, ClaimDecision, Session, StakingConfig, StatusEvent};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,stakeflow=debug")),
        )
        .init();

    dotenvy::dotenv().ok();

    let config = StakingConfig::from_env().context("Invalid staking configuration")?;
    let rpc_url = env::var("RPC_URL").unwrap_or_else(|_| "http://127.0.0.1:8545".to_string());
    let page_url = env::var("PAGE_URL").unwrap_or_else(|_| "https://kjc.example/".to_string());

    let provider = ProviderBuilder::new().connect_http(rpc_url.parse()?);
    let wallet = AlloyWallet::new(provider);

    let (tx, mut rx) = mpsc::unbounded_channel::<StatusEvent>();
    let printer = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            info!(operation = ?event.operation, status = ?event.status, "Status");
        }
    });

    let session = Session::connect_with_status(wallet, config, Arc::new(tx))
        .await
        .context("Failed to connect")?;

    let staking = session.staking_summary().await?;
    let referral = session.referral_summary().await?;

    println!("\n=== Staking ===");
    println!("Account:        {}", session.account());
    println!("Staked:         {}", staking.staked_display);
    println!("Pending reward: {}", staking.pending_display);
    println!("Lock ends at:   {}", staking.position.end_time());
    match staking.claim {
        ClaimDecision::Permitted => println!("Claim:          available"),
        denied => println!(
            "Claim:          in {}",
            denied.remaining().map(|r| r.to_string()).unwrap_or_default()
        ),
    }

    println!("\n=== Referral ===");
    match referral.referrer {
        Some(referrer) => println!("Referrer:       {referrer}"),
        None => println!("Referrer:       none"),
    }
    println!("Reward:         {}", referral.reward_display);
    println!(
        "Minimum claim:  {}",
        session.reward_token().display(referral.minimum_claim)
    );
    println!(
        "Referral link:  {}",
        referral_link(&page_url.parse()?, session.account())
    );

    drop(session);
    printer.await?;
    Ok(())
}
