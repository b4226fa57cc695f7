// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw failures reported by the wallet/provider collaborator.
//!
//! Wallet providers report errors as free text plus, sometimes, a numeric
//! JSON-RPC code. [`ProviderError`] keeps exactly those signals so the
//! [classifier](crate::classifier) can map them to an [`ErrorKind`](super::ErrorKind).

use alloy_json_rpc::ErrorPayload;
use alloy_transport::TransportError;

/// An unclassified failure from the wallet or RPC node.
///
/// # Examples
///
/// ```rust
/// use stakeflow::ProviderError;
///
/// let err = ProviderError::rpc(4001, "User rejected the request.");
/// assert_eq!(err.code, Some(4001));
/// assert!(!err.cancelled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ProviderError {
    /// JSON-RPC or EIP-1193 error code, when the provider supplied one
    pub code: Option<i64>,
    /// Provider error text
    pub message: String,
    /// Set when the caller or wallet explicitly cancelled the request
    pub cancelled: bool,
}

impl ProviderError {
    /// Error carrying only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            cancelled: false,
        }
    }

    /// Error carrying a JSON-RPC code and message.
    pub fn rpc(code: i64, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
            cancelled: false,
        }
    }

    /// Explicit cancellation, e.g. the user closed the signing prompt.
    pub fn cancelled(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            cancelled: true,
        }
    }

    /// Build from a JSON-RPC error response payload.
    ///
    /// Revert reasons are often only present in `data`, so it is appended to
    /// the message where the classifier can find it.
    pub fn from_payload(payload: &ErrorPayload) -> Self {
        let message = match &payload.data {
            Some(data) => format!("{}: {}", payload.message, data.get()),
            None => payload.message.to_string(),
        };
        Self::rpc(payload.code, message)
    }
}

impl From<TransportError> for ProviderError {
    fn from(err: TransportError) -> Self {
        match err.as_error_resp() {
            Some(payload) => Self::from_payload(payload),
            None => Self::message(err.to_string()),
        }
    }
}
