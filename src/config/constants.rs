//! Well-known addresses and constants
//!
//! This module centralizes the deployment addresses and numeric constants
//! used throughout the stakeflow crate.

use std::time::Duration;

use alloy_primitives::{address, Address};

/// The KJC deployment on BNB Smart Chain mainnet
pub mod bsc {
    use super::*;

    /// BNB Smart Chain mainnet chain id (`0x38`)
    pub const CHAIN_ID: u64 = 56;

    /// Human-readable chain name shown by wallets
    pub const CHAIN_NAME: &str = "Binance Smart Chain Mainnet";

    /// Public RPC endpoint offered to wallets when adding the chain
    pub const RPC_URL: &str = "https://bsc-dataseed.binance.org/";

    /// Block explorer offered to wallets when adding the chain
    pub const EXPLORER_URL: &str = "https://bscscan.com/";

    /// KJC referral staking contract
    ///
    /// Contract: 0xC444F117806B725E12154Fa7D0cd090Eec325B48
    pub const STAKING_CONTRACT: Address = address!("c444f117806b725e12154fa7d0cd090eec325b48");

    /// KJC reward token
    ///
    /// Contract: 0xd479ae350dc24168e8db863c5413c35fb2044ecd
    pub const KJC_TOKEN: Address = address!("d479ae350dc24168e8db863c5413c35fb2044ecd");

    /// BSC-USD (Binance-Peg USDT), 18 decimals on BSC
    ///
    /// Contract: 0x55d398326f99059fF775485246999027B3197955
    pub const USDT_TOKEN: Address = address!("55d398326f99059ff775485246999027b3197955");

    /// PancakeSwap Router V2
    ///
    /// Contract: 0x10ED43C718714eb63d5aA57B78B54704E256024E
    pub const PANCAKE_ROUTER_V2: Address = address!("10ed43c718714eb63d5aa57b78b54704e256024e");
}

/// EIP-1193 provider error codes the flows react to
pub mod rpc_codes {
    /// The user rejected the request
    pub const USER_REJECTED: i64 = 4001;

    /// `wallet_switchEthereumChain` target is unknown to the wallet
    pub const UNRECOGNIZED_CHAIN: i64 = 4902;

    /// JSON-RPC method not found, e.g. wallet methods sent to a plain node
    pub const METHOD_NOT_FOUND: i64 = -32601;
}

/// Default slippage tolerance: 500 bps (5%)
pub const DEFAULT_SLIPPAGE_BPS: u16 = 500;

/// Basis points in 100%
pub const BPS_DENOMINATOR: u16 = 10_000;

/// Decimals assumed when a token's `decimals()` call fails
pub const DEFAULT_TOKEN_DECIMALS: u8 = 18;

/// Delay between receipt polls while waiting for a transaction to be mined
pub const DEFAULT_RECEIPT_POLL_INTERVAL: Duration = Duration::from_secs(2);
