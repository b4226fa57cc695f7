// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Typed contract calls over a [`WalletProvider`]
//!
//! [`ContractClient`] turns `sol!` call structs into calldata, sends them
//! through the wallet and decodes the results. Every wallet failure leaves
//! this module already classified. Nothing is retried: a failure is returned
//! to the flow, which returns it to the user.

use std::sync::Arc;
use std::time::Duration;

use alloy_primitives::{Address, TxHash};
use alloy_sol_types::SolCall;
use tracing::{debug, info, warn, Instrument};

use crate::classifier::classify;
use crate::errors::{ClassifiedError, ErrorKind, StakeError};
use crate::spans;
use crate::status::{Operation, OperationStatus, Stage, StatusEvent, StatusSink};
use crate::wallet::{TxReceipt, WalletProvider};

/// Wallet, connected account and status sink bundled for contract calls
pub struct ContractClient<W> {
    wallet: W,
    account: Address,
    poll_interval: Duration,
    status: Arc<dyn StatusSink>,
}

impl<W: WalletProvider> ContractClient<W> {
    /// Create a client acting as `account`
    pub fn new(
        wallet: W,
        account: Address,
        poll_interval: Duration,
        status: Arc<dyn StatusSink>,
    ) -> Self {
        Self {
            wallet,
            account,
            poll_interval,
            status,
        }
    }

    /// The connected account
    pub fn account(&self) -> Address {
        self.account
    }

    pub(crate) fn emit(&self, operation: Operation, status: OperationStatus) {
        self.status.emit(StatusEvent::new(operation, status));
    }

    pub(crate) fn sink(&self) -> &dyn StatusSink {
        self.status.as_ref()
    }

    /// Run a `view` function and decode its return value.
    pub async fn view<C>(&self, to: Address, call: C) -> Result<C::Return, ClassifiedError>
    where
        C: SolCall + Send,
    {
        let output = self
            .wallet
            .call(to, call.abi_encode().into())
            .await
            .map_err(|e| classify(&e))?;

        C::abi_decode_returns(&output).map_err(|e| {
            warn!(%to, function = C::SIGNATURE, error = %e, "Failed to decode call result");
            ClassifiedError::with_message(
                ErrorKind::NodeDataIncomplete,
                format!("Could not decode result of {}: {e}", C::SIGNATURE),
            )
        })
    }

    /// Sign and broadcast a call from the connected account.
    pub async fn submit<C>(
        &self,
        operation: Operation,
        to: Address,
        call: C,
    ) -> Result<TxHash, ClassifiedError>
    where
        C: SolCall + Send,
    {
        self.emit(operation, OperationStatus::InProgress(Stage::AwaitingSignature));
        let tx_hash = self
            .wallet
            .send_transaction(self.account, to, call.abi_encode().into())
            .await
            .map_err(|e| classify(&e))?;

        info!(%tx_hash, %to, function = C::SIGNATURE, "Transaction submitted");
        Ok(tx_hash)
    }

    /// Wait until `tx_hash` has a receipt and check its status.
    ///
    /// There is no timeout: polling continues until the provider returns a
    /// receipt or an error. A receipt with `status == false` becomes
    /// [`StakeError::TransactionFailed`].
    pub async fn confirm(&self, operation: Operation, tx_hash: TxHash) -> Result<TxReceipt, StakeError> {
        self.emit(operation, OperationStatus::InProgress(Stage::AwaitingConfirmation));

        async {
            loop {
                match self
                    .wallet
                    .transaction_receipt(tx_hash)
                    .await
                    .map_err(|e| classify(&e))?
                {
                    Some(receipt) if receipt.status => {
                        info!(block = ?receipt.block_number, gas_used = receipt.gas_used, "Transaction confirmed");
                        return Ok(receipt);
                    }
                    Some(receipt) => {
                        warn!(block = ?receipt.block_number, gas_used = receipt.gas_used, "Transaction mined but failed");
                        return Err(StakeError::TransactionFailed { tx_hash });
                    }
                    None => {
                        debug!("Receipt not available yet");
                        tokio::time::sleep(self.poll_interval).await;
                    }
                }
            }
        }
        .instrument(spans::wait_for_receipt(tx_hash))
        .await
    }

    /// [`submit`](Self::submit) followed by [`confirm`](Self::confirm).
    pub async fn transact<C>(
        &self,
        operation: Operation,
        to: Address,
        call: C,
    ) -> Result<TxReceipt, StakeError>
    where
        C: SolCall + Send,
    {
        let tx_hash = self.submit(operation, to, call).await?;
        self.confirm(operation, tx_hash).await
    }
}

impl<W> std::fmt::Debug for ContractClient<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContractClient")
            .field("account", &self.account)
            .field("poll_interval", &self.poll_interval)
            .finish_non_exhaustive()
    }
}
