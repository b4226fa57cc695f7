// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token decimal precision type

use serde::{Deserialize, Serialize};

/// ERC-20 token decimal precision
///
/// The number of base-unit digits a token treats as its fractional part.
/// Most tokens use 18, but the staking flow mixes tokens, so every amount
/// conversion takes the decimals of the token it belongs to:
/// - BSC-USD (USDT on BSC): 18 decimals
/// - USDT on Ethereum: 6 decimals
///
/// # Examples
///
/// ```
/// use stakeflow::TokenDecimals;
///
/// let decimals = TokenDecimals::STANDARD;
/// assert_eq!(decimals.as_u8(), 18);
/// assert_eq!(decimals.as_usize(), 18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenDecimals(u8);

impl TokenDecimals {
    /// Standard decimals for ETH-like tokens (18)
    pub const STANDARD: Self = Self(18);

    /// USDT/USDC decimals on Ethereum mainnet (6)
    pub const SIX: Self = Self(6);

    /// Create a new decimal precision value
    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Decimal count as a `usize`, handy for string padding
    pub const fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl Default for TokenDecimals {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl From<u8> for TokenDecimals {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenDecimals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_decimals_constants() {
        assert_eq!(TokenDecimals::STANDARD.as_u8(), 18);
        assert_eq!(TokenDecimals::SIX.as_u8(), 6);
        assert_eq!(TokenDecimals::default(), TokenDecimals::STANDARD);
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(format!("{}", TokenDecimals::STANDARD), "18 decimals");
    }

    #[test]
    fn test_serialization() {
        let decimals = TokenDecimals::SIX;
        let json = serde_json::to_string(&decimals).unwrap();
        assert_eq!(json, "6");
        let deserialized: TokenDecimals = serde_json::from_str(&json).unwrap();
        assert_eq!(decimals, deserialized);
    }
}
