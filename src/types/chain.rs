// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Target network description

use alloy_chains::NamedChain;
use serde::{Serialize, Serializer};

use crate::config::constants::bsc;

/// Native gas currency of a chain, as wallets expect it in `wallet_addEthereumChain`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NativeCurrency {
    /// Currency name, e.g. "BNB"
    pub name: String,
    /// Ticker symbol
    pub symbol: String,
    /// Always 18 for EVM native currencies
    pub decimals: u8,
}

/// The chain the contracts are deployed on
///
/// Serializes to the EIP-3085 `wallet_addEthereumChain` parameter object.
///
/// # Examples
///
/// ```
/// use stakeflow::ChainDescriptor;
///
/// let chain = ChainDescriptor::bsc_mainnet();
/// assert_eq!(chain.chain_id, 56);
/// assert_eq!(chain.chain_id_hex(), "0x38");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainDescriptor {
    /// Numeric chain id
    #[serde(serialize_with = "serialize_hex_id")]
    pub chain_id: u64,
    /// Display name
    pub chain_name: String,
    /// Gas currency
    pub native_currency: NativeCurrency,
    /// RPC endpoints
    pub rpc_urls: Vec<String>,
    /// Block explorers
    pub block_explorer_urls: Vec<String>,
}

impl ChainDescriptor {
    /// BNB Smart Chain mainnet, where the KJC contracts live
    pub fn bsc_mainnet() -> Self {
        Self {
            chain_id: bsc::CHAIN_ID,
            chain_name: bsc::CHAIN_NAME.to_string(),
            native_currency: NativeCurrency {
                name: "BNB".to_string(),
                symbol: "BNB".to_string(),
                decimals: 18,
            },
            rpc_urls: vec![bsc::RPC_URL.to_string()],
            block_explorer_urls: vec![bsc::EXPLORER_URL.to_string()],
        }
    }

    /// The well-known chain behind `chain_id`, if any
    pub fn named(&self) -> Option<NamedChain> {
        NamedChain::try_from(self.chain_id).ok()
    }

    /// Chain id in the `0x`-prefixed form wallets use
    pub fn chain_id_hex(&self) -> String {
        format!("{:#x}", self.chain_id)
    }
}

fn serialize_hex_id<S: Serializer>(id: &u64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{id:#x}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_chain_params_shape() {
        let json = serde_json::to_value(ChainDescriptor::bsc_mainnet()).unwrap();
        assert_eq!(json["chainId"], "0x38");
        assert_eq!(json["chainName"], "Binance Smart Chain Mainnet");
        assert_eq!(json["nativeCurrency"]["symbol"], "BNB");
        assert_eq!(json["nativeCurrency"]["decimals"], 18);
        assert_eq!(json["rpcUrls"][0], "https://bsc-dataseed.binance.org/");
        assert_eq!(json["blockExplorerUrls"][0], "https://bscscan.com/");
    }

    #[test]
    fn test_named_chain() {
        assert_eq!(
            ChainDescriptor::bsc_mainnet().named(),
            Some(NamedChain::BinanceSmartChain)
        );
    }
}
