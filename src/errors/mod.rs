// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the stakeflow library.
//!
//! This module follows a hybrid approach:
//!
//! - **Concern-specific errors** for fine-grained handling ([`AmountError`],
//!   [`ConfigError`], [`ProviderError`])
//! - **Unified error type** ([`StakeError`]) returned by every flow, with
//!   [`StakeError::kind`] projecting any failure onto the closed [`ErrorKind`] set
//!
//! # Architecture
//!
//! - [`ProviderError`] - raw wallet/RPC failure (code, text, cancellation flag)
//! - [`ClassifiedError`] - a [`ProviderError`] after [`classify`](crate::classify)
//! - [`AmountError`] - user input that is not a valid token amount
//! - [`ConfigError`] - unset addresses or unparsable configuration
//!
//! # Example
//!
//! ```rust
//! use stakeflow::{AmountError, ErrorKind, StakeError};
//!
//! let err = StakeError::from(AmountError::Empty);
//! assert_eq!(err.kind(), ErrorKind::InvalidAmount);
//! ```

mod amount;
mod config;
mod kind;
mod provider;

pub use amount::AmountError;
pub use config::{ConfigError, SlippageError};
pub use kind::{ClassifiedError, ErrorKind};
pub use provider::ProviderError;

use alloy_primitives::{Address, TxHash};

/// Unified error type for all stakeflow operations.
#[derive(Debug, thiserror::Error)]
pub enum StakeError {
    /// The entered amount could not be converted to base units.
    #[error("Invalid amount: {0}")]
    Amount(#[from] AmountError),

    /// Configuration is incomplete or invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A chain-facing call failed; already classified.
    #[error("{0}")]
    Chain(#[from] ClassifiedError),

    /// The transaction was mined but its receipt reports failure.
    ///
    /// Unlike [`StakeError::Chain`], the transaction reached the chain: gas was
    /// spent even though the intended effect did not happen.
    #[error("Transaction {tx_hash} was mined but failed; gas fees may have been spent")]
    TransactionFailed {
        /// Hash of the failed transaction
        tx_hash: TxHash,
    },

    /// The wallet stayed on the wrong chain after switch/add attempts.
    #[error("Wallet is on chain {actual}, expected chain {expected}")]
    WrongNetwork {
        /// Chain id the contracts live on
        expected: u64,
        /// Chain id the wallet reports
        actual: u64,
    },

    /// The wallet returned no accounts.
    #[error("No wallet account available")]
    ProviderUnavailable,

    /// Referrer is the zero address or the connected account.
    #[error("Invalid referrer address {referrer}")]
    InvalidReferrer {
        /// The rejected referrer
        referrer: Address,
    },

    /// The router returned no amounts for the swap path.
    #[error("Router returned an empty quote")]
    EmptyQuote,
}

impl StakeError {
    /// Project this error onto the closed [`ErrorKind`] set.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StakeError::Amount(_) => ErrorKind::InvalidAmount,
            StakeError::Config(ConfigError::ContractsNotConfigured { .. }) => {
                ErrorKind::ContractsNotConfigured
            }
            StakeError::Config(_) => ErrorKind::InvalidConfig,
            StakeError::Chain(classified) => classified.kind.clone(),
            StakeError::TransactionFailed { .. } => ErrorKind::ContractReverted(None),
            StakeError::WrongNetwork { .. } => ErrorKind::WrongNetwork,
            StakeError::ProviderUnavailable => ErrorKind::ProviderUnavailable,
            StakeError::InvalidReferrer { .. } => ErrorKind::InvalidReferrer,
            StakeError::EmptyQuote => ErrorKind::NodeDataIncomplete,
        }
    }

    /// Message to show the user.
    pub fn user_message(&self) -> String {
        match self {
            StakeError::Chain(classified) => classified.message.clone(),
            StakeError::Amount(err) => format!("{}: {err}", ErrorKind::InvalidAmount.default_message()),
            StakeError::TransactionFailed { .. } => self.to_string(),
            other => other.kind().default_message(),
        }
    }

    /// Whether the failure happened after the transaction was mined.
    pub fn is_onchain_failure(&self) -> bool {
        matches!(self, StakeError::TransactionFailed { .. })
    }
}
