//! Currency unit conversion.
//!
//! The form takes a human-facing decimal ETH amount; the contract
//! denominates prices in wei. `parse_ether` is exact for every decimal it
//! accepts, but it tolerates two inputs the contract must never see: an
//! empty string parses as zero, and fractional digits past the 18th are
//! quietly dropped. Both are rejected here before delegating, so a valid
//! input never loses precision on the way to the transaction.

use alloy_primitives::{utils::parse_ether, U256};

use crate::error::Error;

/// Convert a decimal ETH string to its wei value.
pub fn to_wei(input: &str) -> Result<U256, Error> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid(input, "empty amount"));
    }
    if let Some((_, frac)) = trimmed.split_once('.') {
        if frac.len() > 18 {
            return Err(invalid(input, "more than 18 decimal places"));
        }
    }
    parse_ether(trimmed).map_err(|e| invalid(input, &e.to_string()))
}

fn invalid(input: &str, reason: &str) -> Error {
    Error::InvalidPrice {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_ether_scales_to_wei() {
        assert_eq!(to_wei("1").unwrap(), U256::from(1_000_000_000_000_000_000u64));
    }

    #[test]
    fn zero_is_accepted() {
        assert_eq!(to_wei("0").unwrap(), U256::ZERO);
    }

    #[test]
    fn fractional_amounts_are_exact() {
        assert_eq!(to_wei("0.5").unwrap(), U256::from(500_000_000_000_000_000u64));
        assert_eq!(
            to_wei("1.000000000000000001").unwrap(),
            U256::from(1_000_000_000_000_000_001u64)
        );
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(to_wei(" 2 ").unwrap(), U256::from(2_000_000_000_000_000_000u64));
    }

    #[test]
    fn empty_input_is_rejected() {
        // parse_ether would read these as zero.
        assert!(matches!(to_wei(""), Err(Error::InvalidPrice { .. })));
        assert!(matches!(to_wei("   "), Err(Error::InvalidPrice { .. })));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(to_wei("not a number"), Err(Error::InvalidPrice { .. })));
        assert!(matches!(to_wei("1.2.3"), Err(Error::InvalidPrice { .. })));
    }

    #[test]
    fn eighteen_decimals_is_the_limit() {
        assert_eq!(
            to_wei("0.123456789012345678").unwrap(),
            U256::from(123_456_789_012_345_678u64)
        );
        // A 19th digit cannot be represented in wei; parse_ether would
        // silently drop it instead of failing.
        assert!(matches!(
            to_wei("0.1234567890123456789"),
            Err(Error::InvalidPrice { .. })
        ));
    }
}
