// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Minimum acceptable swap output under a slippage tolerance.
//!
//! The router quote is the output the pool would give right now. Between
//! quoting and mining the price can move, so the swap is sent with a floor:
//!
//! ```text
//! minimum_out = quoted_out * (10000 - slippage_bps) / 10000   (truncating)
//! ```
//!
//! The floor is computed with integer arithmetic only.
//!
//! ```
//! use stakeflow::{minimum_out, SlippageBps, TokenAmount};
//!
//! let floor = minimum_out(TokenAmount::from(1000u64), SlippageBps::DEFAULT);
//! assert_eq!(floor, TokenAmount::from(950u64));
//! ```

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::config::constants::{BPS_DENOMINATOR, DEFAULT_SLIPPAGE_BPS};
use crate::errors::SlippageError;
use crate::types::tokens::TokenAmount;

/// Slippage tolerance in basis points, always within `0..=10000`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SlippageBps(u16);

impl SlippageBps {
    /// 500 bps (5%)
    pub const DEFAULT: Self = Self(DEFAULT_SLIPPAGE_BPS);

    /// No tolerance: the swap must return at least the quote
    pub const ZERO: Self = Self(0);

    /// Validate a basis-point value
    pub fn new(bps: u32) -> Result<Self, SlippageError> {
        u16::try_from(bps)
            .ok()
            .filter(|b| *b <= BPS_DENOMINATOR)
            .map(Self)
            .ok_or(SlippageError::OutOfRange { bps })
    }

    /// Basis points as an integer
    pub const fn as_bps(&self) -> u16 {
        self.0
    }
}

impl Default for SlippageBps {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for SlippageBps {
    type Error = SlippageError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SlippageBps> for u32 {
    fn from(value: SlippageBps) -> Self {
        u32::from(value.0)
    }
}

impl std::fmt::Display for SlippageBps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} bps", self.0)
    }
}

/// Lowest output accepted for a swap quoted at `quoted_out`.
///
/// Exact for every `U256` quote: the quote is split as
/// `q * 10000 + r`, so no intermediate product can exceed `quoted_out`.
pub fn minimum_out(quoted_out: TokenAmount, slippage: SlippageBps) -> TokenAmount {
    let denominator = U256::from(BPS_DENOMINATOR);
    let keep = U256::from(BPS_DENOMINATOR - slippage.as_bps());

    let quoted = quoted_out.as_u256();
    let whole = quoted / denominator;
    let remainder = quoted % denominator;

    TokenAmount::new(whole * keep + remainder * keep / denominator)
}
