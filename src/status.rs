// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Status events for the UI collaborator
//!
//! Every flow reports its progress as [`StatusEvent`]s through a
//! [`StatusSink`]. The UI decides how to render them.
//!
//! ```rust
//! use stakeflow::{Operation, OperationStatus, StatusEvent, StatusSink};
//! use tokio::sync::mpsc;
//!
//! let (tx, mut rx) = mpsc::unbounded_channel();
//! tx.emit(StatusEvent::new(Operation::BuyAndStake, OperationStatus::Idle));
//! assert_eq!(rx.try_recv().unwrap().operation, Operation::BuyAndStake);
//! ```

use alloy_primitives::TxHash;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::errors::{ErrorKind, StakeError};

/// User-triggered operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Connect wallet and select network
    Connect,
    /// Register a referrer
    RegisterReferrer,
    /// Approve and/or buy-and-stake
    BuyAndStake,
    /// Claim the staking reward
    ClaimStakingReward,
    /// Claim the referral reward
    ClaimReferralReward,
    /// Withdraw a matured stake
    WithdrawStake,
}

/// Step an in-flight operation is waiting on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// Requesting accounts from the wallet
    RequestingAccounts,
    /// Switching or adding the target network
    SwitchingNetwork,
    /// Reading contract state
    ReadingState,
    /// Fetching a router quote
    Quoting,
    /// Waiting for the user to sign
    AwaitingSignature,
    /// Waiting for the transaction to be mined
    AwaitingConfirmation,
}

/// Status of one operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationStatus {
    /// Nothing running
    Idle,
    /// Running, waiting on `Stage`
    InProgress(Stage),
    /// Finished successfully
    Success {
        /// Message for the user
        message: String,
        /// Transaction involved, if any
        tx_hash: Option<TxHash>,
    },
    /// Not performed now, e.g. a claim still cooling down
    Deferred {
        /// Message for the user
        message: String,
    },
    /// Finished with an error
    Error {
        /// Category for the UI to match on
        kind: ErrorKind,
        /// Message for the user
        message: String,
        /// Whether the transaction was mined (gas spent) before failing
        onchain: bool,
    },
}

/// A status change of one operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEvent {
    /// Which operation changed
    pub operation: Operation,
    /// Its new status
    pub status: OperationStatus,
}

impl StatusEvent {
    /// Create an event
    pub fn new(operation: Operation, status: OperationStatus) -> Self {
        Self { operation, status }
    }

    /// Error event for `err`
    pub fn failed(operation: Operation, err: &StakeError) -> Self {
        Self::new(
            operation,
            OperationStatus::Error {
                kind: err.kind(),
                message: err.user_message(),
                onchain: err.is_onchain_failure(),
            },
        )
    }
}

/// Receiver of status events
pub trait StatusSink: Send + Sync {
    /// Deliver one event. Must not block.
    fn emit(&self, event: StatusEvent);
}

/// Sink that drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStatus;

impl StatusSink for NoopStatus {
    fn emit(&self, _event: StatusEvent) {}
}

impl StatusSink for mpsc::UnboundedSender<StatusEvent> {
    fn emit(&self, event: StatusEvent) {
        // A dropped receiver means nobody is rendering status
        let _ = self.send(event);
    }
}
