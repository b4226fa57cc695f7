// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! The closed set of user-facing failure categories.

use serde::{Deserialize, Serialize};

/// Category attached to every failure surfaced to the caller.
///
/// The set is closed: a UI can match on it exhaustively to choose what to show.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail")]
pub enum ErrorKind {
    /// The entered amount is empty, non-numeric, negative, zero or too large.
    InvalidAmount,
    /// The user declined the wallet prompt.
    UserRejected,
    /// The contract reverted, with its reason string when one was extractable.
    ContractReverted(Option<String>),
    /// The node could not estimate gas for the call.
    GasEstimationFailed,
    /// The account cannot pay for gas.
    InsufficientGasFunds,
    /// The node returned stale or incomplete data.
    NodeDataIncomplete,
    /// The transaction was not mined in the provider's wait window.
    TransactionNotMined,
    /// The account nonce was already used.
    NonceTooLow,
    /// A JSON-RPC error with an unrecognized code.
    RpcError(i64),
    /// Nothing matched.
    UnknownError,
    /// The wallet is on another chain and could not be switched.
    WrongNetwork,
    /// No wallet provider or no account is available.
    ProviderUnavailable,
    /// One or more contract addresses are not configured.
    ContractsNotConfigured,
    /// A configuration value is malformed or out of range.
    InvalidConfig,
    /// The referrer address is zero or the connected account itself.
    InvalidReferrer,
}

impl ErrorKind {
    /// Default user-facing message for this kind.
    pub fn default_message(&self) -> String {
        match self {
            ErrorKind::InvalidAmount => "Please enter a valid amount".to_string(),
            ErrorKind::UserRejected => "Transaction was rejected in the wallet".to_string(),
            ErrorKind::ContractReverted(Some(reason)) => {
                format!("Transaction reverted: {reason}")
            }
            ErrorKind::ContractReverted(None) => {
                "Transaction reverted, possibly due to slippage or a contract condition"
                    .to_string()
            }
            ErrorKind::GasEstimationFailed => {
                "Gas estimation failed, the transaction would likely fail".to_string()
            }
            ErrorKind::InsufficientGasFunds => {
                "Not enough native balance to pay for gas".to_string()
            }
            ErrorKind::NodeDataIncomplete => {
                "The node returned incomplete data, please try again".to_string()
            }
            ErrorKind::TransactionNotMined => {
                "Transaction was not mined in time, check the explorer before retrying"
                    .to_string()
            }
            ErrorKind::NonceTooLow => {
                "Nonce too low, reset the wallet account or wait for pending transactions"
                    .to_string()
            }
            ErrorKind::RpcError(code) => format!("RPC error (code {code})"),
            ErrorKind::UnknownError => "An unknown error occurred".to_string(),
            ErrorKind::WrongNetwork => "Please switch the wallet to the staking network".to_string(),
            ErrorKind::ProviderUnavailable => "No wallet provider or account available".to_string(),
            ErrorKind::ContractsNotConfigured => "Contract addresses are not configured".to_string(),
            ErrorKind::InvalidConfig => "Configuration is invalid".to_string(),
            ErrorKind::InvalidReferrer => {
                "Referrer address is invalid or is your own address".to_string()
            }
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::ContractReverted(Some(reason)) => write!(f, "ContractReverted({reason})"),
            ErrorKind::RpcError(code) => write!(f, "RpcError({code})"),
            other => write!(f, "{other:?}"),
        }
    }
}

/// A chain-facing failure after classification.
///
/// # Examples
///
/// ```rust
/// use stakeflow::{classify, ErrorKind, ProviderError};
///
/// let classified = classify(&ProviderError::message("nonce too low"));
/// assert_eq!(classified.kind, ErrorKind::NonceTooLow);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ClassifiedError {
    /// Category of the failure
    pub kind: ErrorKind,
    /// Message suitable for showing to the user
    pub message: String,
}

impl ClassifiedError {
    /// Classified error with the kind's default message.
    pub fn new(kind: ErrorKind) -> Self {
        let message = kind.default_message();
        Self { kind, message }
    }

    /// Classified error with a custom message.
    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<ErrorKind> for ClassifiedError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revert_message_includes_reason() {
        let err = ClassifiedError::new(ErrorKind::ContractReverted(Some("Cooldown active".into())));
        assert_eq!(err.to_string(), "Transaction reverted: Cooldown active");
    }

    #[test]
    fn test_display_of_kinds() {
        assert_eq!(ErrorKind::RpcError(-32603).to_string(), "RpcError(-32603)");
        assert_eq!(ErrorKind::NonceTooLow.to_string(), "NonceTooLow");
    }

    #[test]
    fn test_kind_serializes_with_tag() {
        let json = serde_json::to_string(&ErrorKind::RpcError(7)).unwrap();
        assert_eq!(json, r#"{"kind":"RpcError","detail":7}"#);
        let json = serde_json::to_string(&ErrorKind::UserRejected).unwrap();
        assert_eq!(json, r#"{"kind":"UserRejected"}"#);
    }
}
