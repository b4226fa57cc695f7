// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Time-gated reward claims.
//!
//! Both claims read their gate inputs from the contract immediately before
//! deciding, and only submit when the gate permits. A denied gate is not an
//! error: the outcome carries the remaining wait for display.

use alloy_primitives::TxHash;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{now, Reportable, Session};
use crate::contracts::IKjcStaking;
use crate::cooldown::{ClaimDecision, RemainingTime};
use crate::errors::StakeError;
use crate::spans;
use crate::status::{Operation, OperationStatus, Stage};
use crate::types::stake::{ClaimWindow, UnixSeconds};
use crate::types::tokens::TokenAmount;
use crate::wallet::WalletProvider;

/// Result of a claim invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimOutcome {
    /// The claim was mined
    Claimed {
        /// Claim transaction
        tx_hash: TxHash,
    },
    /// The previous claim is too recent; nothing was submitted
    CoolingDown {
        /// Exact seconds left
        remaining_seconds: u64,
        /// Rounded-up wait for display
        remaining: RemainingTime,
        /// When the claim becomes permitted
        next_eligible_time: UnixSeconds,
    },
    /// No stake, so no staking reward to claim
    NothingStaked,
    /// Referral reward below the contract's minimum claim
    BelowMinimum {
        /// Accrued referral reward
        available: TokenAmount,
        /// `MIN_REF_CLAIM`
        minimum: TokenAmount,
    },
}

impl ClaimOutcome {
    fn cooling_down(window: ClaimWindow, remaining_seconds: u64) -> Self {
        ClaimOutcome::CoolingDown {
            remaining_seconds,
            remaining: RemainingTime::from_seconds(remaining_seconds),
            next_eligible_time: window.next_eligible_time(),
        }
    }
}

impl Reportable for ClaimOutcome {
    fn status(&self) -> OperationStatus {
        match self {
            ClaimOutcome::Claimed { tx_hash } => OperationStatus::Success {
                message: "Reward claimed successfully".to_string(),
                tx_hash: Some(*tx_hash),
            },
            ClaimOutcome::CoolingDown { remaining, .. } => OperationStatus::Deferred {
                message: format!("Next claim available in {remaining}"),
            },
            ClaimOutcome::NothingStaked => OperationStatus::Deferred {
                message: "Nothing staked yet".to_string(),
            },
            ClaimOutcome::BelowMinimum { .. } => OperationStatus::Deferred {
                message: "Referral reward is below the minimum claim amount".to_string(),
            },
        }
    }
}

impl<W: WalletProvider> Session<W> {
    /// Claim window of the staking reward (`lastClaim`, `CLAIM_INTERVAL`)
    pub async fn staking_claim_window(&self) -> Result<ClaimWindow, StakeError> {
        let user = self.account();
        let last = self
            .client
            .view(self.staking(), IKjcStaking::lastClaimCall { user })
            .await?;
        let interval = self
            .client
            .view(self.staking(), IKjcStaking::CLAIM_INTERVALCall {})
            .await?;
        Ok(ClaimWindow {
            last_claim_time: saturating_u64(last),
            interval_seconds: saturating_u64(interval),
        })
    }

    /// Claim window of the referral reward (`lastClaimReferral`, `COOLDOWN`)
    pub async fn referral_claim_window(&self) -> Result<ClaimWindow, StakeError> {
        let user = self.account();
        let last = self
            .client
            .view(self.staking(), IKjcStaking::lastClaimReferralCall { user })
            .await?;
        let interval = self
            .client
            .view(self.staking(), IKjcStaking::COOLDOWNCall {})
            .await?;
        Ok(ClaimWindow {
            last_claim_time: saturating_u64(last),
            interval_seconds: saturating_u64(interval),
        })
    }

    /// Claim the staking reward if the cooldown has passed.
    pub async fn claim_staking_reward(&self) -> Result<ClaimOutcome, StakeError> {
        self.claim_staking_reward_at(now()).await
    }

    /// [`claim_staking_reward`](Self::claim_staking_reward) with an explicit clock.
    pub async fn claim_staking_reward_at(&self, now: UnixSeconds) -> Result<ClaimOutcome, StakeError> {
        let operation = Operation::ClaimStakingReward;
        let span = spans::claim(self.account(), "staking");
        self.track(operation, span, async {
            self.client
                .emit(operation, OperationStatus::InProgress(Stage::ReadingState));

            let staked = self
                .client
                .view(self.staking(), IKjcStaking::stakedAmountCall { user: self.account() })
                .await?;
            if staked.is_zero() {
                return Ok(ClaimOutcome::NothingStaked);
            }

            let window = self.staking_claim_window().await?;
            if let ClaimDecision::Denied { remaining_seconds } = window.evaluate(now) {
                info!(remaining_seconds, "Staking claim still cooling down");
                return Ok(ClaimOutcome::cooling_down(window, remaining_seconds));
            }

            let receipt = self
                .client
                .transact(operation, self.staking(), IKjcStaking::claimStakingRewardCall {})
                .await?;
            Ok::<_, StakeError>(ClaimOutcome::Claimed {
                tx_hash: receipt.tx_hash,
            })
        })
        .await
    }

    /// Claim the referral reward if the cooldown has passed and the
    /// accrued reward reaches `MIN_REF_CLAIM`.
    pub async fn claim_referral_reward(&self) -> Result<ClaimOutcome, StakeError> {
        self.claim_referral_reward_at(now()).await
    }

    /// [`claim_referral_reward`](Self::claim_referral_reward) with an explicit clock.
    pub async fn claim_referral_reward_at(&self, now: UnixSeconds) -> Result<ClaimOutcome, StakeError> {
        let operation = Operation::ClaimReferralReward;
        let span = spans::claim(self.account(), "referral");
        self.track(operation, span, async {
            self.client
                .emit(operation, OperationStatus::InProgress(Stage::ReadingState));

            let window = self.referral_claim_window().await?;
            if let ClaimDecision::Denied { remaining_seconds } = window.evaluate(now) {
                info!(remaining_seconds, "Referral claim still cooling down");
                return Ok(ClaimOutcome::cooling_down(window, remaining_seconds));
            }

            let available = TokenAmount::new(
                self.client
                    .view(self.staking(), IKjcStaking::referralRewardCall { user: self.account() })
                    .await?,
            );
            let minimum = TokenAmount::new(
                self.client
                    .view(self.staking(), IKjcStaking::MIN_REF_CLAIMCall {})
                    .await?,
            );
            if available.is_zero() || available < minimum {
                info!(%available, %minimum, "Referral reward below minimum claim");
                return Ok(ClaimOutcome::BelowMinimum { available, minimum });
            }

            let receipt = self
                .client
                .transact(operation, self.staking(), IKjcStaking::claimReferralRewardCall {})
                .await?;
            Ok::<_, StakeError>(ClaimOutcome::Claimed {
                tx_hash: receipt.tx_hash,
            })
        })
        .await
    }
}

/// Timestamps and intervals beyond `u64` are treated as "never".
pub(crate) fn saturating_u64(value: alloy_primitives::U256) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}
