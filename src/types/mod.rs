// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across stakeflow.
//!
//! This module provides newtype wrappers for various domain concepts:
//! - Token amounts, decimals and resolved token descriptors
//! - Stake, allowance and claim-window snapshots
//! - The target chain description

pub mod chain;
pub mod stake;
pub mod tokens;

// Note: Public types are re-exported from lib.rs, not here
