// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! [`WalletProvider`] over an Alloy provider

use std::marker::PhantomData;

use alloy_network::{Ethereum, Network, ReceiptResponse, TransactionBuilder};
use alloy_primitives::{Address, Bytes, TxHash};
use alloy_provider::Provider;
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use super::{TxReceipt, WalletProvider};
use crate::config::constants::rpc_codes;
use crate::errors::ProviderError;
use crate::types::chain::ChainDescriptor;

/// Adapter exposing an Alloy [`Provider`] as a [`WalletProvider`]
///
/// Generic over the network so OP-stack or `AnyNetwork` providers work too;
/// defaults to [`Ethereum`], which also covers BSC.
///
/// Accounts are requested with `eth_requestAccounts`; a node that does not
/// know that method is asked for `eth_accounts` instead.
///
/// Signing is whatever the provider does: a node with unlocked accounts,
/// or a provider built with a wallet filler. Chain switching is forwarded as
/// the EIP-3326/EIP-3085 wallet methods and fails on plain nodes, which the
/// session treats like a wallet that refused to switch.
#[derive(Debug, Clone)]
pub struct AlloyWallet<P, N = Ethereum> {
    provider: P,
    _network: PhantomData<fn() -> N>,
}

impl<P, N> AlloyWallet<P, N>
where
    P: Provider<N>,
    N: Network,
{
    /// Wrap a provider
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            _network: PhantomData,
        }
    }

    /// Access the underlying provider
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[async_trait]
impl<P, N> WalletProvider for AlloyWallet<P, N>
where
    P: Provider<N> + Send + Sync,
    N: Network,
{
    async fn request_accounts(&self) -> Result<Vec<Address>, ProviderError> {
        let requested: Result<Vec<Address>, _> = self
            .provider
            .raw_request("eth_requestAccounts".into(), Vec::<Value>::new())
            .await;
        match requested.map_err(ProviderError::from) {
            Ok(accounts) => Ok(accounts),
            Err(err) if err.code == Some(rpc_codes::METHOD_NOT_FOUND) => {
                debug!(error = %err, "eth_requestAccounts unsupported, falling back to eth_accounts");
                Ok(self.provider.get_accounts().await?)
            }
            Err(err) => Err(err),
        }
    }

    async fn chain_id(&self) -> Result<u64, ProviderError> {
        Ok(self.provider.get_chain_id().await?)
    }

    async fn switch_chain(&self, chain_id: u64) -> Result<(), ProviderError> {
        let params = vec![json!({ "chainId": format!("{chain_id:#x}") })];
        let _: Value = self
            .provider
            .raw_request("wallet_switchEthereumChain".into(), params)
            .await?;
        Ok(())
    }

    async fn add_chain(&self, chain: &ChainDescriptor) -> Result<(), ProviderError> {
        let params = vec![serde_json::to_value(chain)
            .map_err(|e| ProviderError::message(format!("Failed to encode chain: {e}")))?];
        let _: Value = self
            .provider
            .raw_request("wallet_addEthereumChain".into(), params)
            .await?;
        Ok(())
    }

    async fn call(&self, to: Address, input: Bytes) -> Result<Bytes, ProviderError> {
        let request = N::TransactionRequest::default()
            .with_to(to)
            .with_input(input);
        Ok(self.provider.call(request).await?)
    }

    async fn send_transaction(
        &self,
        from: Address,
        to: Address,
        input: Bytes,
    ) -> Result<TxHash, ProviderError> {
        let request = N::TransactionRequest::default()
            .with_from(from)
            .with_to(to)
            .with_input(input);
        let pending = self.provider.send_transaction(request).await?;
        let tx_hash = *pending.tx_hash();
        debug!(%tx_hash, %from, %to, "Transaction broadcast");
        Ok(tx_hash)
    }

    async fn transaction_receipt(
        &self,
        tx_hash: TxHash,
    ) -> Result<Option<TxReceipt>, ProviderError> {
        let receipt = self.provider.get_transaction_receipt(tx_hash).await?;
        Ok(receipt.map(|r| TxReceipt {
            tx_hash,
            status: r.status(),
            block_number: r.block_number(),
            gas_used: r.gas_used(),
        }))
    }
}
