// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Allowance check → approve → spend sequencing.
//!
//! A spend that pulls ERC-20 tokens needs an allowance first. Approval and
//! spend are two transactions with two signatures, so they are split across
//! two invocations:
//!
//! ```text
//!             fresh allowance read
//!                     |
//!        allowance < required ?
//!          /                  \
//!        yes                   no
//!         |                     |
//!   NeedsApproval          ReadyToSpend
//!   approve(exact amount)  run the spend
//!   wait for receipt            |
//!   return ApprovalSubmitted  return Spent
//! ```
//!
//! Invoking again after an approval re-reads the allowance and moves on to
//! the spend. The approval is for exactly the amount about to be spent,
//! never unlimited and never just the shortfall.

use std::future::Future;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use tracing::{info, Instrument};

use crate::chain::ContractClient;
use crate::contracts::IERC20;
use crate::errors::StakeError;
use crate::spans;
use crate::status::{Operation, OperationStatus, Stage};
use crate::types::stake::AllowanceState;
use crate::types::tokens::TokenAmount;
use crate::wallet::{TxReceipt, WalletProvider};

/// What the next invocation has to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalStep {
    /// The allowance is short; submit an approval and stop
    NeedsApproval,
    /// The allowance covers the amount; submit the spend
    ReadyToSpend,
}

/// Decide the step from a fresh allowance snapshot.
///
/// ```
/// use alloy_primitives::Address;
/// use stakeflow::{approval, AllowanceState, ApprovalStep, TokenAmount};
///
/// let state = AllowanceState {
///     owner: Address::ZERO,
///     spender: Address::ZERO,
///     current_allowance: TokenAmount::from(100u64),
/// };
/// assert_eq!(approval::decide(&state, TokenAmount::from(150u64)), ApprovalStep::NeedsApproval);
/// assert_eq!(approval::decide(&state, TokenAmount::from(100u64)), ApprovalStep::ReadyToSpend);
/// ```
pub fn decide(state: &AllowanceState, required: TokenAmount) -> ApprovalStep {
    if state.covers(required) {
        ApprovalStep::ReadyToSpend
    } else {
        ApprovalStep::NeedsApproval
    }
}

/// Result of one sequencer invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sequenced<T> {
    /// An approval was mined; invoke again to spend
    ApprovalSubmitted {
        /// Receipt of the approval
        receipt: TxReceipt,
        /// Amount approved
        approved: TokenAmount,
    },
    /// The spend ran
    Spent(T),
}

/// Drives the approval state machine for one token and spender
#[derive(Debug)]
pub struct ApprovalSequencer<'a, W> {
    client: &'a ContractClient<W>,
    token: Address,
    spender: Address,
}

impl<'a, W: WalletProvider> ApprovalSequencer<'a, W> {
    /// Sequencer for `token` spent by `spender` on behalf of the client's account
    pub fn new(client: &'a ContractClient<W>, token: Address, spender: Address) -> Self {
        Self {
            client,
            token,
            spender,
        }
    }

    /// Read the current allowance. Never cached.
    pub async fn read_allowance(&self) -> Result<AllowanceState, StakeError> {
        let owner = self.client.account();
        let current = self
            .client
            .view(
                self.token,
                IERC20::allowanceCall {
                    owner,
                    spender: self.spender,
                },
            )
            .await?;

        Ok(AllowanceState {
            owner,
            spender: self.spender,
            current_allowance: TokenAmount::new(current),
        })
    }

    /// Approve `required` or run `spend`, depending on the fresh allowance.
    ///
    /// `spend` is only polled when the allowance already covers `required`.
    pub async fn run<F, Fut, T>(
        &self,
        operation: Operation,
        required: TokenAmount,
        spend: F,
    ) -> Result<Sequenced<T>, StakeError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, StakeError>>,
    {
        let span = spans::approval_sequence(self.token, self.spender, required);

        async move {
            self.client
                .emit(operation, OperationStatus::InProgress(Stage::ReadingState));
            let state = self.read_allowance().await?;

            match decide(&state, required) {
                ApprovalStep::NeedsApproval => {
                    info!(
                        current = %state.current_allowance,
                        "Allowance too low, submitting exact-amount approval"
                    );
                    let call = IERC20::approveCall {
                        spender: self.spender,
                        amount: required.as_u256(),
                    };
                    let receipt = self.client.transact(operation, self.token, call).await?;
                    Ok::<_, StakeError>(Sequenced::ApprovalSubmitted {
                        receipt,
                        approved: required,
                    })
                }
                ApprovalStep::ReadyToSpend => {
                    info!(current = %state.current_allowance, "Allowance sufficient");
                    Ok(Sequenced::Spent(spend().await?))
                }
            }
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(allowance: u64) -> AllowanceState {
        AllowanceState {
            owner: Address::ZERO,
            spender: Address::ZERO,
            current_allowance: TokenAmount::from(allowance),
        }
    }

    #[test]
    fn test_short_allowance_needs_approval() {
        assert_eq!(
            decide(&state(100), TokenAmount::from(150u64)),
            ApprovalStep::NeedsApproval
        );
        assert_eq!(
            decide(&state(0), TokenAmount::from(1u64)),
            ApprovalStep::NeedsApproval
        );
    }

    #[test]
    fn test_sufficient_allowance_is_ready() {
        assert_eq!(
            decide(&state(200), TokenAmount::from(150u64)),
            ApprovalStep::ReadyToSpend
        );
        assert_eq!(
            decide(&state(150), TokenAmount::from(150u64)),
            ApprovalStep::ReadyToSpend
        );
    }
}
