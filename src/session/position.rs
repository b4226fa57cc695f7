// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Stake and referral reads, and withdrawal of a matured stake.

use alloy_primitives::{Address, TxHash};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::claim::saturating_u64;
use super::{now, Reportable, Session};
use crate::contracts::IKjcStaking;
use crate::cooldown::{ClaimDecision, RemainingTime};
use crate::errors::StakeError;
use crate::spans;
use crate::status::{Operation, OperationStatus, Stage};
use crate::types::stake::{AllowanceState, StakePosition, UnixSeconds};
use crate::types::tokens::TokenAmount;
use crate::wallet::WalletProvider;

/// Staking state prepared for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingSummary {
    /// Raw position
    pub position: StakePosition,
    /// Staked amount in reward-token units
    pub staked_display: String,
    /// Claimable reward
    pub pending_reward: TokenAmount,
    /// Claimable reward in reward-token units
    pub pending_display: String,
    /// Whether the staking claim is permitted now
    pub claim: ClaimDecision,
    /// Whether the lock has ended
    pub matured: bool,
}

/// Referral state prepared for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralSummary {
    /// Referrer of the connected account, if registered
    pub referrer: Option<Address>,
    /// Accrued referral reward
    pub reward: TokenAmount,
    /// Accrued referral reward in reward-token units
    pub reward_display: String,
    /// `MIN_REF_CLAIM`
    pub minimum_claim: TokenAmount,
    /// Whether the referral claim is permitted now
    pub claim: ClaimDecision,
}

/// Result of [`Session::withdraw_stake`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WithdrawOutcome {
    /// `withdrawStake` was mined
    Withdrawn {
        /// Withdrawal transaction
        tx_hash: TxHash,
    },
    /// The contract does not allow withdrawal yet
    Locked {
        /// End of the lock according to the position
        unlock_time: UnixSeconds,
        /// Wait for display, rounded up
        remaining: RemainingTime,
    },
    /// Nothing staked
    NothingStaked,
}

impl Reportable for WithdrawOutcome {
    fn status(&self) -> OperationStatus {
        match self {
            WithdrawOutcome::Withdrawn { tx_hash } => OperationStatus::Success {
                message: "Stake withdrawn successfully".to_string(),
                tx_hash: Some(*tx_hash),
            },
            WithdrawOutcome::Locked { remaining, .. } => OperationStatus::Deferred {
                message: format!("Stake is locked for another {remaining}"),
            },
            WithdrawOutcome::NothingStaked => OperationStatus::Deferred {
                message: "Nothing staked yet".to_string(),
            },
        }
    }
}

impl<W: WalletProvider> Session<W> {
    /// Current stake (`stakedAmount`, `lastStakeTime`, `STAKE_DURATION`)
    pub async fn stake_position(&self) -> Result<StakePosition, StakeError> {
        let user = self.account();
        let amount = self
            .client
            .view(self.staking(), IKjcStaking::stakedAmountCall { user })
            .await?;
        let start = self
            .client
            .view(self.staking(), IKjcStaking::lastStakeTimeCall { user })
            .await?;
        let duration = self
            .client
            .view(self.staking(), IKjcStaking::STAKE_DURATIONCall {})
            .await?;

        Ok(StakePosition {
            amount: TokenAmount::new(amount),
            start_time: saturating_u64(start),
            duration_seconds: saturating_u64(duration),
        })
    }

    /// Staking reward claimable now (`getClaimable`)
    pub async fn pending_reward(&self) -> Result<TokenAmount, StakeError> {
        let claimable = self
            .client
            .view(self.staking(), IKjcStaking::getClaimableCall { user: self.account() })
            .await?;
        Ok(TokenAmount::new(claimable))
    }

    /// Allowance the staking contract has on the stable token
    pub async fn allowance(&self) -> Result<AllowanceState, StakeError> {
        crate::approval::ApprovalSequencer::new(&self.client, self.stable.address, self.staking())
            .read_allowance()
            .await
    }

    /// Staking position, reward and claim gate, evaluated at `now`
    pub async fn staking_summary_at(&self, now: UnixSeconds) -> Result<StakingSummary, StakeError> {
        let position = self.stake_position().await?;
        let pending_reward = self.pending_reward().await?;
        let claim = self.staking_claim_window().await?.evaluate(now);

        Ok(StakingSummary {
            staked_display: self.reward.display(position.amount),
            pending_display: self.reward.display(pending_reward),
            pending_reward,
            claim,
            matured: position.is_matured(now),
            position,
        })
    }

    /// [`staking_summary_at`](Self::staking_summary_at) with the wall clock
    pub async fn staking_summary(&self) -> Result<StakingSummary, StakeError> {
        self.staking_summary_at(now()).await
    }

    /// Referrer, referral reward and claim gate, evaluated at `now`
    pub async fn referral_summary_at(&self, now: UnixSeconds) -> Result<ReferralSummary, StakeError> {
        let referrer = self.referrer().await?;
        let reward = TokenAmount::new(
            self.client
                .view(self.staking(), IKjcStaking::referralRewardCall { user: self.account() })
                .await?,
        );
        let minimum_claim = TokenAmount::new(
            self.client
                .view(self.staking(), IKjcStaking::MIN_REF_CLAIMCall {})
                .await?,
        );
        let claim = self.referral_claim_window().await?.evaluate(now);

        Ok(ReferralSummary {
            referrer,
            reward_display: self.reward.display(reward),
            reward,
            minimum_claim,
            claim,
        })
    }

    /// [`referral_summary_at`](Self::referral_summary_at) with the wall clock
    pub async fn referral_summary(&self) -> Result<ReferralSummary, StakeError> {
        self.referral_summary_at(now()).await
    }

    /// Withdraw the stake once the contract reports `canWithdraw`.
    pub async fn withdraw_stake(&self) -> Result<WithdrawOutcome, StakeError> {
        self.withdraw_stake_at(now()).await
    }

    /// [`withdraw_stake`](Self::withdraw_stake) with an explicit clock for
    /// the displayed remaining lock.
    pub async fn withdraw_stake_at(&self, now: UnixSeconds) -> Result<WithdrawOutcome, StakeError> {
        let operation = Operation::WithdrawStake;
        let span = spans::withdraw_stake(self.account());
        self.track(operation, span, async {
            self.client
                .emit(operation, OperationStatus::InProgress(Stage::ReadingState));

            let position = self.stake_position().await?;
            if !position.is_staked() {
                return Ok(WithdrawOutcome::NothingStaked);
            }

            let allowed = self
                .client
                .view(self.staking(), IKjcStaking::canWithdrawCall { user: self.account() })
                .await?;
            if !allowed {
                let remaining = RemainingTime::from_seconds(position.remaining_lock(now));
                info!(unlock_time = position.end_time(), "Stake still locked");
                return Ok(WithdrawOutcome::Locked {
                    unlock_time: position.end_time(),
                    remaining,
                });
            }

            let receipt = self
                .client
                .transact(operation, self.staking(), IKjcStaking::withdrawStakeCall {})
                .await?;
            Ok::<_, StakeError>(WithdrawOutcome::Withdrawn {
                tx_hash: receipt.tx_hash,
            })
        })
        .await
    }
}
