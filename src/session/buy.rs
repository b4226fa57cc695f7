// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Buy-and-stake: approve the stable token, then swap and stake in one call.

use alloy_primitives::TxHash;
use serde::{Deserialize, Serialize};
use tracing::{debug, Instrument};

use super::{Reportable, Session};
use crate::approval::{ApprovalSequencer, Sequenced};
use crate::contracts::{IKjcStaking, IPancakeRouter};
use crate::errors::{AmountError, StakeError};
use crate::slippage::{minimum_out, SlippageBps};
use crate::spans;
use crate::status::{Operation, OperationStatus, Stage};
use crate::types::tokens::TokenAmount;
use crate::wallet::WalletProvider;

/// Router quote with the slippage floor applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyQuote {
    /// Stable-token amount going in
    pub amount_in: TokenAmount,
    /// Reward-token amount the router quotes
    pub quoted_out: TokenAmount,
    /// Least output the swap may produce
    pub minimum_out: TokenAmount,
    /// Tolerance used for `minimum_out`
    pub slippage: SlippageBps,
}

/// Result of one [`Session::buy_and_stake`] invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuyAndStakeOutcome {
    /// Allowance was short; an approval was mined. Invoke again to stake.
    ApprovalSubmitted {
        /// Approval transaction
        tx_hash: TxHash,
        /// Exact amount approved
        approved: TokenAmount,
    },
    /// `buyAndStake` was mined
    Staked {
        /// Stake transaction
        tx_hash: TxHash,
        /// Quote the transaction was built from
        quote: BuyQuote,
    },
}

impl Reportable for BuyAndStakeOutcome {
    fn status(&self) -> OperationStatus {
        match self {
            BuyAndStakeOutcome::ApprovalSubmitted { tx_hash, .. } => OperationStatus::Success {
                message: "Approval confirmed. Submit again to buy and stake.".to_string(),
                tx_hash: Some(*tx_hash),
            },
            BuyAndStakeOutcome::Staked { tx_hash, .. } => OperationStatus::Success {
                message: "Bought and staked successfully".to_string(),
                tx_hash: Some(*tx_hash),
            },
        }
    }
}

impl<W: WalletProvider> Session<W> {
    /// Quote `amount_in` of the stable token through the router.
    ///
    /// The last element of `getAmountsOut` is the quoted output; an empty
    /// result is [`StakeError::EmptyQuote`].
    pub async fn quote_buy(&self, amount_in: TokenAmount) -> Result<BuyQuote, StakeError> {
        let router = self.config.contracts.router;

        async {
            let amounts = self
                .client
                .view(
                    router,
                    IPancakeRouter::getAmountsOutCall {
                        amountIn: amount_in.as_u256(),
                        path: self.config.swap_path(),
                    },
                )
                .await?;

            let quoted_out = amounts
                .last()
                .copied()
                .map(TokenAmount::new)
                .ok_or(StakeError::EmptyQuote)?;
            let slippage = self.config.slippage;
            let minimum_out = minimum_out(quoted_out, slippage);

            debug!(%quoted_out, %minimum_out, slippage_bps = slippage.as_bps(), "Quote received");
            Ok::<_, StakeError>(BuyQuote {
                amount_in,
                quoted_out,
                minimum_out,
                slippage,
            })
        }
        .instrument(spans::quote(router, amount_in))
        .await
    }

    /// Buy the reward token with `input` stable tokens and stake it.
    ///
    /// When the allowance is short this only submits an approval for exactly
    /// the entered amount and returns
    /// [`BuyAndStakeOutcome::ApprovalSubmitted`]; the next invocation reads
    /// the allowance again and stakes.
    pub async fn buy_and_stake(&self, input: &str) -> Result<BuyAndStakeOutcome, StakeError> {
        let span = spans::buy_and_stake(self.account(), input);
        self.track(Operation::BuyAndStake, span, async {
            let amount = self.stable.parse(input)?;
            if amount.is_zero() {
                return Err(StakeError::from(AmountError::Zero));
            }

            let sequencer =
                ApprovalSequencer::new(&self.client, self.stable.address, self.staking());
            let sequenced = sequencer
                .run(Operation::BuyAndStake, amount, move || async move {
                    self.client
                        .emit(Operation::BuyAndStake, OperationStatus::InProgress(Stage::Quoting));
                    let quote = self.quote_buy(amount).await?;

                    let call = IKjcStaking::buyAndStakeCall {
                        usdtAmount: amount.as_u256(),
                        amountOutMin: quote.minimum_out.as_u256(),
                    };
                    let receipt = self
                        .client
                        .transact(Operation::BuyAndStake, self.staking(), call)
                        .await?;
                    Ok::<_, StakeError>((receipt, quote))
                })
                .await?;

            Ok::<_, StakeError>(match sequenced {
                Sequenced::ApprovalSubmitted { receipt, approved } => {
                    BuyAndStakeOutcome::ApprovalSubmitted {
                        tx_hash: receipt.tx_hash,
                        approved,
                    }
                }
                Sequenced::Spent((receipt, quote)) => BuyAndStakeOutcome::Staked {
                    tx_hash: receipt.tx_hash,
                    quote,
                },
            })
        })
        .await
    }
}
