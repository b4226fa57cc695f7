// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Snapshots of on-chain staking state
//!
//! Every value here is a read-only projection of contract state taken at one
//! moment. Nothing is cached: flows re-read before each decision.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use super::tokens::TokenAmount;
use crate::cooldown::{self, ClaimDecision};

/// Seconds since the Unix epoch, as stored by the contracts
pub type UnixSeconds = u64;

/// How much a spender may currently pull from an owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceState {
    /// Token holder
    pub owner: Address,
    /// Contract allowed to spend
    pub spender: Address,
    /// Current allowance in base units
    pub current_allowance: TokenAmount,
}

impl AllowanceState {
    /// Whether the allowance covers `required`
    pub fn covers(&self, required: TokenAmount) -> bool {
        self.current_allowance >= required
    }
}

/// A user's stake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakePosition {
    /// Staked reward-token amount in base units
    pub amount: TokenAmount,
    /// When the stake started
    pub start_time: UnixSeconds,
    /// Lock duration
    pub duration_seconds: u64,
}

impl StakePosition {
    /// When the lock ends
    pub fn end_time(&self) -> UnixSeconds {
        self.start_time.saturating_add(self.duration_seconds)
    }

    /// Whether anything is staked
    pub fn is_staked(&self) -> bool {
        !self.amount.is_zero()
    }

    /// Whether the lock has ended at `now`
    pub fn is_matured(&self, now: UnixSeconds) -> bool {
        self.is_staked() && now >= self.end_time()
    }

    /// Seconds left in the lock at `now` (zero once matured)
    pub fn remaining_lock(&self, now: UnixSeconds) -> u64 {
        self.end_time().saturating_sub(now)
    }
}

/// Time gate for a reward claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimWindow {
    /// Timestamp of the previous claim (zero if never claimed)
    pub last_claim_time: UnixSeconds,
    /// Minimum seconds between claims
    pub interval_seconds: u64,
}

impl ClaimWindow {
    /// Earliest time the next claim is allowed
    pub fn next_eligible_time(&self) -> UnixSeconds {
        self.last_claim_time.saturating_add(self.interval_seconds)
    }

    /// Evaluate the gate at `now`
    pub fn evaluate(&self, now: UnixSeconds) -> ClaimDecision {
        cooldown::evaluate(now, self.last_claim_time, self.interval_seconds)
    }
}
