//! Error types for configuration loading and validation.

/// Slippage tolerance outside `[0, 10000]` basis points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlippageError {
    /// Basis points above 100%.
    #[error("Slippage of {bps} bps is outside 0..=10000")]
    OutOfRange {
        /// The rejected value
        bps: u32,
    },
}

/// Errors that can occur while building or validating a [`StakingConfig`](crate::StakingConfig).
///
/// # Examples
///
/// ```rust
/// use alloy_primitives::Address;
/// use stakeflow::{ConfigError, StakingConfigBuilder};
///
/// let config = StakingConfigBuilder::with_defaults()
///     .router(Address::ZERO)
///     .build();
///
/// match config.validate() {
///     Err(ConfigError::ContractsNotConfigured { missing }) => assert_eq!(missing, vec!["router"]),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// One or more contract addresses are unset (zero).
    #[error("Contract addresses not configured: {}", missing.join(", "))]
    ContractsNotConfigured {
        /// Names of the unset addresses
        missing: Vec<&'static str>,
    },

    /// An environment variable was present but could not be parsed.
    #[error("Invalid value for {name}: {reason}")]
    InvalidEnvVar {
        /// Variable name
        name: &'static str,
        /// Why parsing failed
        reason: String,
    },

    /// Slippage tolerance out of range.
    #[error(transparent)]
    Slippage(#[from] SlippageError),
}

impl ConfigError {
    /// Create an `InvalidEnvVar` error.
    pub fn invalid_env_var(name: &'static str, reason: impl std::fmt::Display) -> Self {
        ConfigError::InvalidEnvVar {
            name,
            reason: reason.to_string(),
        }
    }
}
