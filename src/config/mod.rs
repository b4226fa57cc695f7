//! Configuration for stakeflow sessions
//!
//! Controls which chain and contracts a session talks to, the slippage
//! tolerance for buy-and-stake, the decimals fallback and receipt polling.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use stakeflow::StakingConfig;
//!
//! // The KJC deployment on BSC mainnet with 5% slippage
//! let config = StakingConfig::default();
//! assert!(config.validate().is_ok());
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use stakeflow::{SlippageBps, StakingConfigBuilder};
//! use std::time::Duration;
//!
//! let config = StakingConfigBuilder::with_defaults()
//!     .slippage(SlippageBps::new(100).unwrap()) // 1%
//!     .receipt_poll_interval(Duration::from_millis(500))
//!     .build();
//! assert_eq!(config.slippage.as_bps(), 100);
//! ```
//!
//! # Example: From the environment
//!
//! ```rust,no_run
//! use stakeflow::StakingConfig;
//!
//! // Reads STAKING_CONTRACT, STABLE_TOKEN, REWARD_TOKEN, ROUTER_CONTRACT,
//! // CHAIN_ID and SLIPPAGE_BPS (also from a .env file)
//! let config = StakingConfig::from_env()?;
//! # Ok::<(), stakeflow::ConfigError>(())
//! ```

use std::time::Duration;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::slippage::SlippageBps;
use crate::types::chain::ChainDescriptor;
use crate::types::tokens::TokenDecimals;

pub mod constants;

use constants::{bsc, DEFAULT_RECEIPT_POLL_INTERVAL, DEFAULT_TOKEN_DECIMALS};

/// Addresses of the contracts a session interacts with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractAddresses {
    /// Referral staking contract (spender of the stable token)
    pub staking: Address,
    /// Token the user pays with (USDT)
    pub stable_token: Address,
    /// Token that is bought and staked (KJC)
    pub reward_token: Address,
    /// Router used for `getAmountsOut` quotes
    pub router: Address,
}

impl ContractAddresses {
    /// Addresses of the KJC deployment on BSC mainnet
    pub const fn bsc_mainnet() -> Self {
        Self {
            staking: bsc::STAKING_CONTRACT,
            stable_token: bsc::USDT_TOKEN,
            reward_token: bsc::KJC_TOKEN,
            router: bsc::PANCAKE_ROUTER_V2,
        }
    }

    /// Names of the addresses that are still unset
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("staking", self.staking),
            ("stable_token", self.stable_token),
            ("reward_token", self.reward_token),
            ("router", self.router),
        ]
        .into_iter()
        .filter(|(_, address)| address.is_zero())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Configuration for a staking session
///
/// Use [`StakingConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone)]
pub struct StakingConfig {
    /// Chain the contracts live on, also used for `wallet_addEthereumChain`
    pub chain: ChainDescriptor,

    /// Contract addresses
    pub contracts: ContractAddresses,

    /// Slippage tolerance applied to router quotes
    /// Default: 500 bps (5%)
    pub slippage: SlippageBps,

    /// Decimals assumed when `decimals()` cannot be read
    /// Default: 18
    pub default_decimals: TokenDecimals,

    /// Delay between receipt polls
    /// Default: 2 seconds
    pub receipt_poll_interval: Duration,
}

impl Default for StakingConfig {
    fn default() -> Self {
        Self::bsc_mainnet()
    }
}

impl StakingConfig {
    /// Configuration for the KJC deployment on BSC mainnet
    pub fn bsc_mainnet() -> Self {
        Self {
            chain: ChainDescriptor::bsc_mainnet(),
            contracts: ContractAddresses::bsc_mainnet(),
            slippage: SlippageBps::DEFAULT,
            default_decimals: TokenDecimals::new(DEFAULT_TOKEN_DECIMALS),
            receipt_poll_interval: DEFAULT_RECEIPT_POLL_INTERVAL,
        }
    }

    /// Load configuration from environment variables (and `.env`)
    ///
    /// Unset variables keep their BSC mainnet defaults. Set but unparsable
    /// variables are errors.
    ///
    /// | Variable           | Meaning                              |
    /// |--------------------|--------------------------------------|
    /// | `STAKING_CONTRACT` | staking contract address             |
    /// | `STABLE_TOKEN`     | token paid in (USDT)                 |
    /// | `REWARD_TOKEN`     | token bought and staked (KJC)        |
    /// | `ROUTER_CONTRACT`  | swap router address                  |
    /// | `CHAIN_ID`         | chain id, decimal or `0x` hex        |
    /// | `SLIPPAGE_BPS`     | slippage tolerance in basis points   |
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = StakingConfigBuilder::with_defaults();

        if let Some(address) = env_address("STAKING_CONTRACT")? {
            builder = builder.staking(address);
        }
        if let Some(address) = env_address("STABLE_TOKEN")? {
            builder = builder.stable_token(address);
        }
        if let Some(address) = env_address("REWARD_TOKEN")? {
            builder = builder.reward_token(address);
        }
        if let Some(address) = env_address("ROUTER_CONTRACT")? {
            builder = builder.router(address);
        }
        if let Ok(raw) = dotenvy::var("CHAIN_ID") {
            builder = builder.chain_id(parse_chain_id(&raw)?);
        }
        if let Ok(raw) = dotenvy::var("SLIPPAGE_BPS") {
            let bps = raw
                .trim()
                .parse::<u32>()
                .map_err(|e| ConfigError::invalid_env_var("SLIPPAGE_BPS", e))?;
            builder = builder.slippage(SlippageBps::new(bps)?);
        }

        Ok(builder.build())
    }

    /// Fail with [`ConfigError::ContractsNotConfigured`] if any address is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let missing = self.contracts.missing();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::ContractsNotConfigured { missing })
        }
    }

    /// Swap path used for quotes: stable token → reward token
    pub fn swap_path(&self) -> Vec<Address> {
        vec![self.contracts.stable_token, self.contracts.reward_token]
    }
}

/// Builder for [`StakingConfig`]
#[derive(Debug, Clone)]
pub struct StakingConfigBuilder {
    config: StakingConfig,
}

impl StakingConfigBuilder {
    /// Builder with no contract addresses set
    pub fn new() -> Self {
        let mut config = StakingConfig::bsc_mainnet();
        config.contracts = ContractAddresses {
            staking: Address::ZERO,
            stable_token: Address::ZERO,
            reward_token: Address::ZERO,
            router: Address::ZERO,
        };
        Self { config }
    }

    /// Builder starting from the BSC mainnet defaults
    pub fn with_defaults() -> Self {
        Self {
            config: StakingConfig::bsc_mainnet(),
        }
    }

    /// Set the staking contract address
    pub fn staking(mut self, address: Address) -> Self {
        self.config.contracts.staking = address;
        self
    }

    /// Set the stable token address
    pub fn stable_token(mut self, address: Address) -> Self {
        self.config.contracts.stable_token = address;
        self
    }

    /// Set the reward token address
    pub fn reward_token(mut self, address: Address) -> Self {
        self.config.contracts.reward_token = address;
        self
    }

    /// Set the router address
    pub fn router(mut self, address: Address) -> Self {
        self.config.contracts.router = address;
        self
    }

    /// Replace all contract addresses
    pub fn contracts(mut self, contracts: ContractAddresses) -> Self {
        self.config.contracts = contracts;
        self
    }

    /// Replace the target chain description
    pub fn chain(mut self, chain: ChainDescriptor) -> Self {
        self.config.chain = chain;
        self
    }

    /// Override only the target chain id
    pub fn chain_id(mut self, chain_id: u64) -> Self {
        self.config.chain.chain_id = chain_id;
        self
    }

    /// Set the slippage tolerance
    pub fn slippage(mut self, slippage: SlippageBps) -> Self {
        self.config.slippage = slippage;
        self
    }

    /// Set the decimals fallback
    pub fn default_decimals(mut self, decimals: TokenDecimals) -> Self {
        self.config.default_decimals = decimals;
        self
    }

    /// Set the receipt poll interval
    pub fn receipt_poll_interval(mut self, interval: Duration) -> Self {
        self.config.receipt_poll_interval = interval;
        self
    }

    /// Build the configuration
    pub fn build(self) -> StakingConfig {
        self.config
    }
}

impl Default for StakingConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn env_address(name: &'static str) -> Result<Option<Address>, ConfigError> {
    match dotenvy::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<Address>()
            .map(Some)
            .map_err(|e| ConfigError::invalid_env_var(name, e)),
        Err(_) => Ok(None),
    }
}

fn parse_chain_id(raw: &str) -> Result<u64, ConfigError> {
    let raw = raw.trim();
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => raw.parse::<u64>(),
    };
    parsed.map_err(|e| ConfigError::invalid_env_var("CHAIN_ID", e))
}
