// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Wallet/chain provider capability
//!
//! The flows never talk to a node directly. Everything goes through
//! [`WalletProvider`], which mirrors what an injected browser wallet offers:
//! account access, chain id and chain switching, `eth_call`, transaction
//! submission and receipts.
//!
//! # Implementations
//!
//! - [`AlloyWallet`] adapts any `alloy_provider::Provider`, e.g. a node with
//!   unlocked accounts or a provider built with a signing wallet filler.
//! - Tests implement the trait with scripted responses.
//!
//! # Example
//!
//! ```rust,ignore
//! use alloy_provider::ProviderBuilder;
//! use stakeflow::{AlloyWallet, Session, StakingConfig};
//!
//! let provider = ProviderBuilder::new().connect_http("http://localhost:8545".parse()?);
//! let wallet = AlloyWallet::new(provider);
//! let session = Session::connect(wallet, StakingConfig::default()).await?;
//! ```

mod adapter;

pub use adapter::AlloyWallet;

use alloy_primitives::{Address, Bytes, TxHash};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;
use crate::types::chain::ChainDescriptor;

/// The parts of a transaction receipt the flows look at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxReceipt {
    /// Transaction hash
    pub tx_hash: TxHash,
    /// `true` if execution succeeded
    pub status: bool,
    /// Block the transaction was mined in
    pub block_number: Option<u64>,
    /// Gas consumed
    pub gas_used: u64,
}

/// Capability offered by the wallet/provider collaborator
///
/// Implementations report failures as raw [`ProviderError`]s. Classification
/// happens in the caller.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// `eth_requestAccounts`: prompt for (or return) the authorized accounts
    ///
    /// Node-backed implementations may answer from `eth_accounts` when the
    /// node does not implement the wallet method.
    async fn request_accounts(&self) -> Result<Vec<Address>, ProviderError>;

    /// `eth_chainId`
    async fn chain_id(&self) -> Result<u64, ProviderError>;

    /// `wallet_switchEthereumChain`
    async fn switch_chain(&self, chain_id: u64) -> Result<(), ProviderError>;

    /// `wallet_addEthereumChain`
    async fn add_chain(&self, chain: &ChainDescriptor) -> Result<(), ProviderError>;

    /// `eth_call` against `to` with ABI-encoded `input`
    async fn call(&self, to: Address, input: Bytes) -> Result<Bytes, ProviderError>;

    /// Sign and broadcast a transaction, returning its hash
    async fn send_transaction(
        &self,
        from: Address,
        to: Address,
        input: Bytes,
    ) -> Result<TxHash, ProviderError>;

    /// `eth_getTransactionReceipt`; `None` while the transaction is pending
    async fn transaction_receipt(&self, tx_hash: TxHash)
        -> Result<Option<TxReceipt>, ProviderError>;
}
