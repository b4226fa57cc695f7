// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Referrer registration.
//!
//! A referrer is checked locally before anything is sent: the zero address
//! and the connected account are rejected without a wallet prompt.

use alloy_primitives::{Address, TxHash};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{Reportable, Session};
use crate::contracts::IKjcStaking;
use crate::errors::StakeError;
use crate::spans;
use crate::status::{Operation, OperationStatus};
use crate::wallet::WalletProvider;

/// A mined `setReferrer`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferrerRegistered {
    /// Registration transaction
    pub tx_hash: TxHash,
    /// The registered referrer
    pub referrer: Address,
}

impl Reportable for ReferrerRegistered {
    fn status(&self) -> OperationStatus {
        OperationStatus::Success {
            message: "Referrer registered successfully".to_string(),
            tx_hash: Some(self.tx_hash),
        }
    }
}

impl<W: WalletProvider> Session<W> {
    /// Register `referrer` for the connected account.
    ///
    /// The zero address and the account itself are rejected before any
    /// transaction is built.
    pub async fn register_referrer(
        &self,
        referrer: Address,
    ) -> Result<ReferrerRegistered, StakeError> {
        let operation = Operation::RegisterReferrer;
        let span = spans::register_referrer(self.account(), referrer);
        self.track(operation, span, async {
            if referrer.is_zero() || referrer == self.account() {
                return Err(StakeError::InvalidReferrer { referrer });
            }

            let receipt = self
                .client
                .transact(operation, self.staking(), IKjcStaking::setReferrerCall { referrer })
                .await?;
            info!(tx_hash = %receipt.tx_hash, "Referrer registered");
            Ok(ReferrerRegistered {
                tx_hash: receipt.tx_hash,
                referrer,
            })
        })
        .await
    }

    /// Referrer recorded for the connected account, if any
    pub async fn referrer(&self) -> Result<Option<Address>, StakeError> {
        let referrer = self
            .client
            .view(self.staking(), IKjcStaking::referrerOfCall { user: self.account() })
            .await?;
        Ok((!referrer.is_zero()).then_some(referrer))
    }
}
