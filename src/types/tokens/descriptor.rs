// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token identity plus its resolved precision

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use super::amount::TokenAmount;
use super::decimals::TokenDecimals;
use crate::errors::AmountError;

/// A token as seen by one session
///
/// `decimals` is read from the chain once at connect time and kept for the
/// session. When the read fails the configured default is used and
/// `decimals_from_chain` is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDescriptor {
    /// Token contract
    pub address: Address,
    /// Precision used for every conversion of this token
    pub decimals: TokenDecimals,
    /// Whether `decimals` came from the contract rather than the fallback
    pub decimals_from_chain: bool,
}

impl TokenDescriptor {
    /// Descriptor with decimals read from the contract
    pub const fn new(address: Address, decimals: TokenDecimals) -> Self {
        Self {
            address,
            decimals,
            decimals_from_chain: true,
        }
    }

    /// Descriptor using fallback decimals
    pub const fn with_fallback(address: Address, decimals: TokenDecimals) -> Self {
        Self {
            address,
            decimals,
            decimals_from_chain: false,
        }
    }

    /// Parse user input in this token's precision
    pub fn parse(&self, input: &str) -> Result<TokenAmount, AmountError> {
        TokenAmount::parse_decimal(input, self.decimals)
    }

    /// Render base units in this token's precision
    pub fn display(&self, amount: TokenAmount) -> String {
        amount.to_decimal_string(self.decimals)
    }
}
