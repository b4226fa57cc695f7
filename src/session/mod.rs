// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Connected session and the user-facing flows
//!
//! A [`Session`] is built once by [`Session::connect`]: it requests the
//! account, puts the wallet on the configured chain, validates the contract
//! addresses and resolves both tokens' decimals. Every flow then runs against
//! that context; nothing is kept in global state.
//!
//! # Flows
//!
//! | Method | Contract calls |
//! |--------|----------------|
//! | [`Session::buy_and_stake`] | `allowance`, `approve` or `getAmountsOut` + `buyAndStake` |
//! | [`Session::claim_staking_reward`] | `stakedAmount`, `lastClaim`, `CLAIM_INTERVAL`, `claimStakingReward` |
//! | [`Session::claim_referral_reward`] | `lastClaimReferral`, `COOLDOWN`, `referralReward`, `MIN_REF_CLAIM`, `claimReferralReward` |
//! | [`Session::register_referrer`] | `setReferrer` |
//! | [`Session::withdraw_stake`] | `canWithdraw`, `withdrawStake` |
//!
//! Each flow reports progress and its final status to the session's
//! [`StatusSink`] and returns the same information as a typed outcome.

mod buy;
mod claim;
mod position;
mod referral;

pub use buy::{BuyAndStakeOutcome, BuyQuote};
pub use claim::ClaimOutcome;
pub use position::{ReferralSummary, StakingSummary, WithdrawOutcome};
pub use referral::ReferrerRegistered;

use std::future::Future;
use std::sync::Arc;

use alloy_primitives::Address;
use chrono::Utc;
use tracing::{info, warn, Instrument, Span};

use crate::chain::ContractClient;
use crate::classifier::classify;
use crate::config::constants::rpc_codes;
use crate::config::StakingConfig;
use crate::contracts::IERC20;
use crate::errors::StakeError;
use crate::spans;
use crate::status::{NoopStatus, Operation, OperationStatus, Stage, StatusEvent, StatusSink};
use crate::types::chain::ChainDescriptor;
use crate::types::stake::UnixSeconds;
use crate::types::tokens::{TokenDecimals, TokenDescriptor};
use crate::wallet::WalletProvider;

/// Outcomes that map onto a final [`OperationStatus`]
pub(crate) trait Reportable {
    fn status(&self) -> OperationStatus;
}

/// A connected wallet session
#[derive(Debug)]
pub struct Session<W> {
    client: ContractClient<W>,
    config: StakingConfig,
    stable: TokenDescriptor,
    reward: TokenDescriptor,
}

impl<W: WalletProvider> Session<W> {
    /// Connect without status reporting.
    pub async fn connect(wallet: W, config: StakingConfig) -> Result<Self, StakeError> {
        Self::connect_with_status(wallet, config, Arc::new(NoopStatus)).await
    }

    /// Connect the wallet and report progress to `status`.
    ///
    /// Fails with [`StakeError::WrongNetwork`] when the wallet cannot be put
    /// on the configured chain and with [`StakeError::Config`] when a
    /// contract address is unset.
    pub async fn connect_with_status(
        wallet: W,
        config: StakingConfig,
        status: Arc<dyn StatusSink>,
    ) -> Result<Self, StakeError> {
        let span = spans::connect(config.chain.chain_id, config.chain.named());
        let result = Self::establish(wallet, config, Arc::clone(&status))
            .instrument(span)
            .await;

        match &result {
            Ok(session) => status.emit(StatusEvent::new(
                Operation::Connect,
                OperationStatus::Success {
                    message: format!("Connected {}", session.account()),
                    tx_hash: None,
                },
            )),
            Err(err) => {
                warn!(error = %err, "Connect failed");
                status.emit(StatusEvent::failed(Operation::Connect, err));
            }
        }
        result
    }

    async fn establish(
        wallet: W,
        config: StakingConfig,
        status: Arc<dyn StatusSink>,
    ) -> Result<Self, StakeError> {
        progress(status.as_ref(), Operation::Connect, Stage::RequestingAccounts);
        let mut account = first_account(&wallet).await?;

        if ensure_network(&wallet, &config.chain, status.as_ref()).await? {
            // The wallet may expose a different account after switching
            account = first_account(&wallet).await?;
        }

        config.validate()?;

        progress(status.as_ref(), Operation::Connect, Stage::ReadingState);
        let client = ContractClient::new(wallet, account, config.receipt_poll_interval, status);
        let stable = resolve_token(&client, config.contracts.stable_token, config.default_decimals).await;
        let reward = resolve_token(&client, config.contracts.reward_token, config.default_decimals).await;

        info!(
            %account,
            stable_decimals = stable.decimals.as_u8(),
            reward_decimals = reward.decimals.as_u8(),
            "Session established"
        );

        Ok(Self {
            client,
            config,
            stable,
            reward,
        })
    }

    /// The connected account
    pub fn account(&self) -> Address {
        self.client.account()
    }

    /// Configuration the session was connected with
    pub fn config(&self) -> &StakingConfig {
        &self.config
    }

    /// The token spent by buy-and-stake
    pub fn stable_token(&self) -> &TokenDescriptor {
        &self.stable
    }

    /// The staked and rewarded token
    pub fn reward_token(&self) -> &TokenDescriptor {
        &self.reward
    }

    /// Call layer, for reads not covered by the flows
    pub fn client(&self) -> &ContractClient<W> {
        &self.client
    }

    fn staking(&self) -> Address {
        self.config.contracts.staking
    }

    /// Run `flow` inside `span` and report its final status.
    async fn track<T, Fut>(&self, operation: Operation, span: Span, flow: Fut) -> Result<T, StakeError>
    where
        T: Reportable,
        Fut: Future<Output = Result<T, StakeError>>,
    {
        let result = flow.instrument(span).await;
        match &result {
            Ok(outcome) => self.client.emit(operation, outcome.status()),
            Err(err) => {
                warn!(?operation, error = %err, kind = ?err.kind(), "Operation failed");
                self.client.sink().emit(StatusEvent::failed(operation, err));
            }
        }
        result
    }
}

fn progress(status: &dyn StatusSink, operation: Operation, stage: Stage) {
    status.emit(StatusEvent::new(operation, OperationStatus::InProgress(stage)));
}

/// Current wall-clock time in unix seconds
pub(crate) fn now() -> UnixSeconds {
    u64::try_from(Utc::now().timestamp()).unwrap_or_default()
}

async fn first_account<W: WalletProvider>(wallet: &W) -> Result<Address, StakeError> {
    wallet
        .request_accounts()
        .await
        .map_err(|e| classify(&e))?
        .into_iter()
        .next()
        .ok_or(StakeError::ProviderUnavailable)
}

/// Put the wallet on `chain`, switching or adding it when needed.
///
/// Returns whether the chain had to be changed.
async fn ensure_network<W: WalletProvider>(
    wallet: &W,
    chain: &ChainDescriptor,
    status: &dyn StatusSink,
) -> Result<bool, StakeError> {
    let expected = chain.chain_id;
    let current = wallet.chain_id().await.map_err(|e| classify(&e))?;
    if current == expected {
        return Ok(false);
    }

    async {
        progress(status, Operation::Connect, Stage::SwitchingNetwork);
        info!("Wallet on another network, requesting switch");
        let wrong_network = |actual| StakeError::WrongNetwork { expected, actual };

        match wallet.switch_chain(expected).await {
            Ok(()) => {}
            Err(err) if err.code == Some(rpc_codes::UNRECOGNIZED_CHAIN) => {
                info!("Wallet does not know the chain, requesting add");
                wallet.add_chain(chain).await.map_err(|err| {
                    warn!(error = %err, "Adding chain failed");
                    wrong_network(current)
                })?;
            }
            Err(err) => {
                warn!(error = %err, code = ?err.code, "Switching chain failed");
                return Err(wrong_network(current));
            }
        }

        let actual = wallet.chain_id().await.map_err(|e| classify(&e))?;
        if actual != expected {
            warn!(actual, "Wallet still on another network");
            return Err(wrong_network(actual));
        }
        info!("Switched network");
        Ok(true)
    }
    .instrument(spans::ensure_network(current, expected))
    .await
}

/// Read `decimals()` once, falling back to `fallback` on any failure.
async fn resolve_token<W: WalletProvider>(
    client: &ContractClient<W>,
    address: Address,
    fallback: TokenDecimals,
) -> TokenDescriptor {
    match client.view(address, IERC20::decimalsCall {}).await {
        Ok(decimals) => TokenDescriptor::new(address, TokenDecimals::new(decimals)),
        Err(err) => {
            warn!(
                token = %address,
                error = %err,
                fallback = fallback.as_u8(),
                "Failed to read token decimals, using fallback"
            );
            TokenDescriptor::with_fallback(address, fallback)
        }
    }
}
