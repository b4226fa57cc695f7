//! Span creation helpers for stakeflow operations.
//!
//! Telemetry is kept out of the flow code: each instrumented operation has a
//! span helper here, and the flow attaches it with
//! [`Instrument`](tracing::Instrument) so the span stays correct across
//! `.await` points.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub async fn my_operation(&self, param: Type) -> Result<T> {
//!     async move {
//!         // Business logic here
//!     }
//!     .instrument(spans::my_operation(param))
//!     .await
//! }
//! ```

use alloy_chains::NamedChain;
use alloy_primitives::{Address, TxHash};
use tracing::{Level, Span};

use crate::types::tokens::TokenAmount;

/// Create span for connecting the wallet and selecting the network.
///
/// Parent: None (root span for this operation)
/// Children: ensure_network span
#[inline]
pub(crate) fn connect(expected_chain_id: u64, chain: Option<NamedChain>) -> Span {
    tracing::span!(
        Level::INFO,
        "stakeflow.connect",
        expected_chain_id = expected_chain_id,
        chain = ?chain,
    )
}

/// Create span for the switch/add network sequence.
///
/// Parent: connect span
#[inline]
pub(crate) fn ensure_network(current_chain_id: u64, expected_chain_id: u64) -> Span {
    tracing::debug_span!(
        "stakeflow.ensure_network",
        current_chain_id = current_chain_id,
        expected_chain_id = expected_chain_id,
    )
}

/// Create span for a buy-and-stake invocation.
///
/// Parent: None (root span for this operation)
/// Children: approval_sequence span, wait_for_receipt spans
#[inline]
pub(crate) fn buy_and_stake(account: Address, input: &str) -> Span {
    tracing::span!(
        Level::INFO,
        "stakeflow.buy_and_stake",
        account = %account,
        input = input,
    )
}

/// Create span for a router quote.
///
/// Parent: buy_and_stake span
#[inline]
pub(crate) fn quote(router: Address, amount_in: TokenAmount) -> Span {
    tracing::debug_span!(
        "stakeflow.quote",
        router = %router,
        amount_in = %amount_in,
    )
}

/// Create span for one allowance check and the approval or spend that follows.
///
/// Parent: flow span (e.g. buy_and_stake)
/// Children: wait_for_receipt span
#[inline]
pub(crate) fn approval_sequence(token: Address, spender: Address, required: TokenAmount) -> Span {
    tracing::debug_span!(
        "stakeflow.approval_sequence",
        token = %token,
        spender = %spender,
        required = %required,
    )
}

/// Create span for a claim invocation.
///
/// Parent: None (root span for this operation)
/// Children: wait_for_receipt span
#[inline]
pub(crate) fn claim(account: Address, reward: &'static str) -> Span {
    tracing::span!(
        Level::INFO,
        "stakeflow.claim",
        account = %account,
        reward = reward,
    )
}

/// Create span for registering a referrer.
#[inline]
pub(crate) fn register_referrer(account: Address, referrer: Address) -> Span {
    tracing::span!(
        Level::INFO,
        "stakeflow.register_referrer",
        account = %account,
        referrer = %referrer,
    )
}

/// Create span for withdrawing a matured stake.
#[inline]
pub(crate) fn withdraw_stake(account: Address) -> Span {
    tracing::span!(Level::INFO, "stakeflow.withdraw_stake", account = %account,)
}

/// Create span for polling a transaction receipt.
///
/// Parent: flow span
#[inline]
pub(crate) fn wait_for_receipt(tx_hash: TxHash) -> Span {
    tracing::debug_span!("stakeflow.wait_for_receipt", tx_hash = %tx_hash,)
}
