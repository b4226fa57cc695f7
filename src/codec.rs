// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Exact conversion between human-readable decimal strings and base units.
//!
//! Every amount that crosses the chain boundary passes through this module.
//! Both directions work on digit strings and `U256` integers only; no value is
//! ever routed through `f64`, so amounts above 2^53 survive unchanged.
//!
//! ```
//! use alloy_primitives::U256;
//! use stakeflow::{codec, TokenAmount, TokenDecimals};
//!
//! let raw = codec::to_base_units("12.5", TokenDecimals::SIX).unwrap();
//! assert_eq!(raw, TokenAmount::from(12_500_000u64));
//! assert_eq!(codec::to_decimal_display(raw, TokenDecimals::SIX), "12.5");
//! ```

use alloy_primitives::U256;
use tracing::warn;

use crate::errors::AmountError;
use crate::types::tokens::{TokenAmount, TokenDecimals};

/// Convert a decimal string such as `"1.25"` into base units.
///
/// The integer part is scaled by `10^decimals` and the fraction is
/// right-padded with zeros to `decimals` digits. A fraction longer than
/// `decimals` is truncated: the extra digits are discarded, never rounded.
///
/// Surrounding whitespace is ignored. Either side of the point may be empty
/// (`".5"`, `"3."`) but not both.
///
/// # Errors
///
/// - [`AmountError::Empty`] for empty input
/// - [`AmountError::Negative`] for a leading minus sign
/// - [`AmountError::Malformed`] for anything that is not `digits[.digits]`
/// - [`AmountError::Overflow`] when the result does not fit in 256 bits
pub fn to_base_units(amount: &str, decimals: TokenDecimals) -> Result<TokenAmount, AmountError> {
    let input = amount.trim();
    if input.is_empty() {
        return Err(AmountError::Empty);
    }
    if input.starts_with('-') {
        return Err(AmountError::negative(input));
    }

    let (integer, fraction) = input.split_once('.').unwrap_or((input, ""));
    if integer.is_empty() && fraction.is_empty() {
        return Err(AmountError::malformed(input));
    }
    if !is_ascii_digits(integer) || !is_ascii_digits(fraction) {
        return Err(AmountError::malformed(input));
    }

    let places = decimals.as_usize();
    let kept = if fraction.len() > places {
        warn!(
            input,
            decimals = places,
            dropped = &fraction[places..],
            "Fractional part exceeds token decimals, truncating"
        );
        &fraction[..places]
    } else {
        fraction
    };

    // integer * 10^places + padded fraction is the digit string integer ++ padded fraction
    let mut digits = String::with_capacity(integer.len() + places);
    digits.push_str(integer);
    digits.push_str(kept);
    digits.extend(std::iter::repeat_n('0', places - kept.len()));

    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Ok(TokenAmount::ZERO);
    }

    U256::from_str_radix(significant, 10)
        .map(TokenAmount::new)
        .map_err(|_| AmountError::overflow(input, decimals))
}

/// Render a base-unit amount as an exact decimal string.
///
/// Zero renders as `"0"`. Otherwise the integer is zero-padded to at least
/// `decimals + 1` digits, the point is placed `decimals` digits from the
/// right, and trailing fractional zeros (and a bare point) are stripped.
pub fn to_decimal_display(amount: TokenAmount, decimals: TokenDecimals) -> String {
    if amount.is_zero() {
        return "0".to_string();
    }

    let places = decimals.as_usize();
    let digits = amount.as_u256().to_string();
    let padded = format!("{digits:0>width$}", width = places + 1);
    let (integer, fraction) = padded.split_at(padded.len() - places);

    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{integer}.{fraction}")
    }
}

fn is_ascii_digits(part: &str) -> bool {
    part.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(d: u8) -> TokenDecimals {
        TokenDecimals::new(d)
    }

    fn units(input: &str, d: u8) -> U256 {
        to_base_units(input, dec(d)).unwrap().as_u256()
    }

    fn display(raw: U256, d: u8) -> String {
        to_decimal_display(TokenAmount::new(raw), dec(d))
    }

    #[test]
    fn test_integer_and_fraction_are_scaled() {
        assert_eq!(units("1", 18), U256::from(10u64).pow(U256::from(18u8)));
        assert_eq!(units("1.5", 6), U256::from(1_500_000u64));
        assert_eq!(units("0.000001", 6), U256::from(1u64));
        assert_eq!(units(".5", 2), U256::from(50u64));
        assert_eq!(units("3.", 2), U256::from(300u64));
        assert_eq!(units("  42  ", 0), U256::from(42u64));
    }

    #[test]
    fn test_excess_fraction_is_truncated_not_rounded() {
        assert_eq!(units("1.23456", 2), units("1.23", 2));
        assert_eq!(units("1.999", 2), U256::from(199u64));
        assert_eq!(units("0.0000009", 6), U256::ZERO);
        assert_eq!(units("7.9", 0), U256::from(7u64));
    }

    #[test]
    fn test_leading_zeros_are_accepted() {
        assert_eq!(units("000123.40", 2), U256::from(12340u64));
        assert_eq!(units("0", 18), U256::ZERO);
        assert_eq!(units("0.000", 18), U256::ZERO);
    }

    #[test]
    fn test_invalid_inputs_are_rejected() {
        assert!(matches!(to_base_units("", dec(18)), Err(AmountError::Empty)));
        assert!(matches!(to_base_units("   ", dec(18)), Err(AmountError::Empty)));
        assert!(matches!(
            to_base_units("-1", dec(18)),
            Err(AmountError::Negative { .. })
        ));
        for bad in [".", "abc", "1e18", "1.2.3", "+1", "1,5", "0x10", "1 000"] {
            assert!(
                matches!(to_base_units(bad, dec(18)), Err(AmountError::Malformed { .. })),
                "{bad:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_overflow_is_an_error_not_a_wrap() {
        let max = U256::MAX.to_string();
        assert_eq!(units(&max, 0), U256::MAX);
        assert!(matches!(
            to_base_units(&max, dec(1)),
            Err(AmountError::Overflow { .. })
        ));
        assert!(matches!(
            to_base_units("1", dec(80)),
            Err(AmountError::Overflow { .. })
        ));
    }

    #[test]
    fn test_display_strips_trailing_zeros() {
        assert_eq!(display(U256::from(1_500_000u64), 6), "1.5");
        assert_eq!(display(U256::from(1_000_000u64), 6), "1");
        assert_eq!(display(U256::from(1u64), 6), "0.000001");
        assert_eq!(display(U256::from(120u64), 3), "0.12");
    }

    #[test]
    fn test_display_zero_for_any_decimals() {
        for d in [0u8, 1, 6, 18, 77, 255] {
            assert_eq!(display(U256::ZERO, d), "0");
        }
    }

    #[test]
    fn test_display_with_zero_decimals() {
        assert_eq!(display(U256::from(1000u64), 0), "1000");
        assert_eq!(units("1000", 0), U256::from(1000u64));
    }

    #[test]
    fn test_display_exact_powers_of_ten() {
        let ten = U256::from(10u64);
        assert_eq!(display(ten.pow(U256::from(18u8)), 18), "1");
        assert_eq!(display(ten.pow(U256::from(17u8)), 18), "0.1");
        assert_eq!(display(ten.pow(U256::from(19u8)), 18), "10");
        assert_eq!(display(ten.pow(U256::from(30u8)), 18), "1000000000000");
    }

    #[test]
    fn test_display_beyond_float_precision() {
        // 2^53 + 1 is the first integer an f64 cannot hold
        let raw = U256::from(9_007_199_254_740_993u64);
        assert_eq!(display(raw, 0), "9007199254740993");
        assert_eq!(display(raw, 18), "0.009007199254740993");
        assert_eq!(units("0.009007199254740993", 18), raw);
    }

    #[test]
    fn test_display_max_value() {
        let rendered = display(U256::MAX, 18);
        assert_eq!(units(&rendered, 18), U256::MAX);
    }
}
