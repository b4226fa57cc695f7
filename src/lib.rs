//! Wallet-side core of a referral staking dApp.
//!
//! The crate holds the logic that sits between a browser wallet and the
//! staking contracts: exact token amount conversion, classification of
//! wallet/RPC failures, slippage floors for router quotes, the
//! approve-before-spend sequence and the claim cooldown gate. The flows in
//! [`Session`] combine them against any [`WalletProvider`].
//!
//! ```rust
//! use stakeflow::{codec, minimum_out, SlippageBps, TokenAmount, TokenDecimals};
//!
//! let amount = codec::to_base_units("12.5", TokenDecimals::STANDARD).unwrap();
//! assert_eq!(codec::to_decimal_display(amount, TokenDecimals::STANDARD), "12.5");
//!
//! let floor = minimum_out(TokenAmount::from(1_000u64), SlippageBps::DEFAULT);
//! assert_eq!(floor, TokenAmount::from(950u64));
//! ```

pub mod approval;
mod chain;
mod classifier;
pub mod codec;
pub mod config;
pub mod contracts;
pub mod cooldown;
mod errors;
pub mod referral_link;
mod session;
mod slippage;
mod spans;
mod status;
mod types;
mod wallet;

pub use approval::{ApprovalSequencer, ApprovalStep, Sequenced};
pub use chain::ContractClient;
pub use classifier::{classify, extract_revert_reason};
pub use config::{ContractAddresses, StakingConfig, StakingConfigBuilder};
pub use cooldown::{ClaimDecision, RemainingTime};
pub use errors::*;
pub use session::{
    BuyAndStakeOutcome, BuyQuote, ClaimOutcome, ReferralSummary, ReferrerRegistered, Session,
    StakingSummary, WithdrawOutcome,
};
pub use slippage::{minimum_out, SlippageBps};
pub use status::{NoopStatus, Operation, OperationStatus, Stage, StatusEvent, StatusSink};
pub use types::chain::{ChainDescriptor, NativeCurrency};
pub use types::stake::{AllowanceState, ClaimWindow, StakePosition, UnixSeconds};
pub use types::tokens::{TokenAmount, TokenDecimals, TokenDescriptor};
pub use wallet::{AlloyWallet, TxReceipt, WalletProvider};
