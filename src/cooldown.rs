// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Claim cooldown gate.
//!
//! Both reward claims are rate limited by the contract: a claim is allowed
//! once `now >= last_claim_time + interval`. Checking the same rule before
//! submitting saves the user a reverted transaction and its gas.
//!
//! ```
//! use stakeflow::{cooldown, ClaimDecision};
//!
//! assert_eq!(cooldown::evaluate(4_600, 1_000, 3_600), ClaimDecision::Permitted);
//! assert_eq!(
//!     cooldown::evaluate(4_599, 1_000, 3_600),
//!     ClaimDecision::Denied { remaining_seconds: 1 }
//! );
//! ```

use serde::{Deserialize, Serialize};

use crate::types::stake::UnixSeconds;

/// Outcome of the cooldown check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimDecision {
    /// The claim may be submitted now
    Permitted,
    /// The claim must wait
    Denied {
        /// Seconds until the claim becomes permitted
        remaining_seconds: u64,
    },
}

impl ClaimDecision {
    /// Whether the claim may be submitted
    pub fn is_permitted(&self) -> bool {
        matches!(self, ClaimDecision::Permitted)
    }

    /// Remaining wait for display, if denied
    pub fn remaining(&self) -> Option<RemainingTime> {
        match self {
            ClaimDecision::Permitted => None,
            ClaimDecision::Denied { remaining_seconds } => {
                Some(RemainingTime::from_seconds(*remaining_seconds))
            }
        }
    }
}

/// Decide whether a claim is allowed at `now`.
pub fn evaluate(now: UnixSeconds, last_claim_time: UnixSeconds, interval_seconds: u64) -> ClaimDecision {
    let next_eligible = last_claim_time.saturating_add(interval_seconds);
    if now >= next_eligible {
        ClaimDecision::Permitted
    } else {
        ClaimDecision::Denied {
            remaining_seconds: next_eligible - now,
        }
    }
}

/// Remaining wait in whole hours and minutes.
///
/// Partial minutes round up, so a denied claim never shows "0 minutes".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemainingTime {
    /// Whole hours
    pub hours: u64,
    /// Minutes past the hours, 0..=59
    pub minutes: u64,
}

impl RemainingTime {
    /// Round `seconds` up to the next whole minute and split into hours/minutes
    pub fn from_seconds(seconds: u64) -> Self {
        let total_minutes = seconds.div_ceil(60);
        Self {
            hours: total_minutes / 60,
            minutes: total_minutes % 60,
        }
    }
}

impl std::fmt::Display for RemainingTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn unit(n: u64, name: &str) -> String {
            if n == 1 {
                format!("1 {name}")
            } else {
                format!("{n} {name}s")
            }
        }

        match (self.hours, self.minutes) {
            (0, m) => write!(f, "{}", unit(m, "minute")),
            (h, 0) => write!(f, "{}", unit(h, "hour")),
            (h, m) => write!(f, "{} {}", unit(h, "hour"), unit(m, "minute")),
        }
    }
}
