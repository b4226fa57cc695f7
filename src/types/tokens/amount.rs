// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw token amount type

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use super::decimals::TokenDecimals;
use crate::codec;
use crate::errors::AmountError;

/// Raw token amount in base units
///
/// This is the integer the contracts see (e.g. wei for an 18-decimal token).
/// It is never fractional and never negative. Conversions to and from the
/// human-readable form go through [`crate::codec`] and are exact.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use stakeflow::{TokenAmount, TokenDecimals};
///
/// let amount = TokenAmount::parse_decimal("1.5", TokenDecimals::STANDARD).unwrap();
/// assert_eq!(amount.as_u256(), U256::from(1_500_000_000_000_000_000u64));
/// assert_eq!(amount.to_decimal_string(TokenDecimals::STANDARD), "1.5");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TokenAmount(U256);

impl TokenAmount {
    /// Zero token amount
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new token amount from U256
    pub const fn new(amount: U256) -> Self {
        Self(amount)
    }

    /// Get the inner U256 value
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Parse a human-readable decimal string into base units.
    ///
    /// Fraction digits beyond `decimals` are dropped, not rounded.
    pub fn parse_decimal(input: &str, decimals: TokenDecimals) -> Result<Self, AmountError> {
        codec::to_base_units(input, decimals)
    }

    /// Render as an exact human-readable decimal string.
    pub fn to_decimal_string(&self, decimals: TokenDecimals) -> String {
        codec::to_decimal_display(*self, decimals)
    }
}

impl From<u64> for TokenAmount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for TokenAmount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl From<TokenAmount> for U256 {
    fn from(value: TokenAmount) -> Self {
        value.0
    }
}

impl std::fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
