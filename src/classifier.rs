// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Best-effort classification of wallet/provider failures.
//!
//! Wallets and nodes report failures as free text, sometimes with a numeric
//! code. Substrings are the only signal available, so classification is a
//! single ordered table of rules: the first rule whose predicate matches
//! decides the [`ErrorKind`]. Text that no rule recognizes falls through to
//! [`ErrorKind::RpcError`] (when a code is present) or [`ErrorKind::UnknownError`].
//!
//! ```
//! use stakeflow::{classify, ErrorKind, ProviderError};
//!
//! let err = ProviderError::message("execution reverted: revert: Cooldown active");
//! assert_eq!(
//!     classify(&err).kind,
//!     ErrorKind::ContractReverted(Some("Cooldown active".to_string()))
//! );
//! ```

use tracing::debug;

use crate::config::constants::rpc_codes;
use crate::errors::{ClassifiedError, ErrorKind, ProviderError};

const USER_DENIED: &[&str] = &[
    "user denied",
    "user rejected",
    "rejected by user",
    "user cancelled",
    "user canceled",
];
const REVERT: &[&str] = &["revert"];
const GAS_ESTIMATION: &[&str] = &[
    "gas required exceeds allowance",
    "cannot estimate gas",
    "unpredictable_gas_limit",
];
const INSUFFICIENT_FUNDS: &[&str] = &["insufficient funds"];
const NODE_DATA: &[&str] = &[
    "header not found",
    "missing trie node",
    "returned values aren't valid",
];
const NOT_MINED: &[&str] = &["not mined"];
const NONCE: &[&str] = &["nonce too low", "nonce has already been used"];

/// Markers that precede a revert reason, most specific first.
const REVERT_REASON_MARKERS: &[&str] = &["revert: ", "reverted: "];

/// One row of the classification table.
struct Rule {
    matches: fn(&ProviderError, &str) -> bool,
    kind: fn(&ProviderError) -> ErrorKind,
}

/// Ordered classification table. The first matching rule wins.
const RULES: &[Rule] = &[
    Rule {
        matches: |err, text| err.cancelled || contains_any(text, USER_DENIED),
        kind: |_| ErrorKind::UserRejected,
    },
    Rule {
        matches: |_, text| contains_any(text, REVERT),
        kind: |err| ErrorKind::ContractReverted(extract_revert_reason(&err.message)),
    },
    Rule {
        matches: |_, text| contains_any(text, GAS_ESTIMATION),
        kind: |_| ErrorKind::GasEstimationFailed,
    },
    Rule {
        matches: |_, text| contains_any(text, INSUFFICIENT_FUNDS),
        kind: |_| ErrorKind::InsufficientGasFunds,
    },
    Rule {
        matches: |_, text| contains_any(text, NODE_DATA),
        kind: |_| ErrorKind::NodeDataIncomplete,
    },
    Rule {
        matches: |_, text| contains_any(text, NOT_MINED),
        kind: |_| ErrorKind::TransactionNotMined,
    },
    Rule {
        matches: |_, text| contains_any(text, NONCE),
        kind: |_| ErrorKind::NonceTooLow,
    },
    Rule {
        matches: |err, _| err.code == Some(rpc_codes::USER_REJECTED),
        kind: |_| ErrorKind::UserRejected,
    },
    Rule {
        matches: |err, _| err.code.is_some(),
        kind: |err| ErrorKind::RpcError(err.code.unwrap_or_default()),
    },
];

/// Classify a raw provider failure into an [`ErrorKind`] and a user-facing message.
pub fn classify(err: &ProviderError) -> ClassifiedError {
    let text = err.message.to_ascii_lowercase();

    let kind = RULES
        .iter()
        .find(|rule| (rule.matches)(err, &text))
        .map(|rule| (rule.kind)(err))
        .unwrap_or(ErrorKind::UnknownError);

    let message = match &kind {
        ErrorKind::RpcError(code) => format!("RPC error (code {code}): {}", err.message),
        ErrorKind::UnknownError => format!("{}: {}", kind.default_message(), err.message),
        other => other.default_message(),
    };

    debug!(kind = %kind, code = ?err.code, raw = %err.message, "Classified provider error");

    ClassifiedError { kind, message }
}

/// Extract the revert reason: the text after `revert: ` up to the next `,` or `}`.
///
/// Returns `None` when no marker is present or the reason is empty.
pub fn extract_revert_reason(message: &str) -> Option<String> {
    // ASCII lowercasing keeps byte offsets valid for slicing `message`
    let lower = message.to_ascii_lowercase();
    let start = REVERT_REASON_MARKERS
        .iter()
        .find_map(|marker| lower.find(marker).map(|idx| idx + marker.len()))?;

    let rest = &message[start..];
    let end = rest.find([',', '}']).unwrap_or(rest.len());
    let reason = rest[..end].trim().trim_matches(['"', '\\']).trim();

    (!reason.is_empty()).then(|| reason.to_string())
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| text.contains(needle))
}
