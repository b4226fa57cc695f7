//! Error types for amount parsing.

use crate::types::tokens::TokenDecimals;

/// Errors from converting a human-readable amount into base units.
///
/// All variants map to [`ErrorKind::InvalidAmount`](super::ErrorKind::InvalidAmount).
///
/// # Examples
///
/// ```rust
/// use stakeflow::{AmountError, TokenAmount, TokenDecimals};
///
/// let err = TokenAmount::parse_decimal("-5", TokenDecimals::STANDARD).unwrap_err();
/// assert!(matches!(err, AmountError::Negative { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    /// Nothing was entered.
    #[error("Amount is empty")]
    Empty,

    /// The amount starts with a minus sign.
    #[error("Amount cannot be negative: {input}")]
    Negative {
        /// The rejected input
        input: String,
    },

    /// The amount is not of the form `digits[.digits]`.
    #[error("Amount is not a decimal number: {input}")]
    Malformed {
        /// The rejected input
        input: String,
    },

    /// The amount does not fit in a 256-bit integer at this precision.
    #[error("Amount {input} with {decimals} does not fit in 256 bits")]
    Overflow {
        /// The rejected input
        input: String,
        /// Precision the amount was scaled by
        decimals: TokenDecimals,
    },

    /// The amount parsed but is zero where a positive amount is required.
    #[error("Amount must be greater than zero")]
    Zero,
}

impl AmountError {
    /// Create a `Negative` error.
    pub fn negative(input: impl Into<String>) -> Self {
        AmountError::Negative {
            input: input.into(),
        }
    }

    /// Create a `Malformed` error.
    pub fn malformed(input: impl Into<String>) -> Self {
        AmountError::Malformed {
            input: input.into(),
        }
    }

    /// Create an `Overflow` error.
    pub fn overflow(input: impl Into<String>, decimals: TokenDecimals) -> Self {
        AmountError::Overflow {
            input: input.into(),
            decimals,
        }
    }
}
