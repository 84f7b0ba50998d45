//! Fixed-point codec for wire quantities.
//!
//! ## Overview
//!
//! The on-chain VM has no floating point: every price and amount travels as
//! an unsigned 128-bit integer scaled by 10^8. This module is the single
//! conversion point between human decimal quantities and those scaled
//! integers.
//!
//! ## Rounding Rule
//!
//! Conversions toward the wire **floor**. One rule, applied everywhere:
//! the input builders, the wallet path, and the display mappers all go
//! through [`to_scaled`]/[`from_scaled`], so no two modules can disagree by
//! one wire unit.
//!
//! ## Examples
//!
//! ```
//! use rust_decimal::Decimal;
//! use obscura_core::types::scaled::{to_scaled, from_scaled};
//!
//! let amount = Decimal::new(15, 1); // 1.5
//! assert_eq!(to_scaled(amount).unwrap(), 150_000_000);
//! assert_eq!(from_scaled(150_000_000).unwrap(), amount);
//! ```

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::errors::{DarkpoolError, Result};

/// Scaling factor for fixed-point arithmetic: 10^8
///
/// Applied uniformly to all price/amount fields on the wire.
pub const SCALE: u128 = 100_000_000;

/// Number of decimal places carried by the scale factor.
pub const SCALE_DECIMALS: u32 = 8;

/// Convert a decimal quantity to its scaled wire integer.
///
/// Multiplies by [`SCALE`] and floors. Negative input is rejected rather
/// than clamped: every quantity this codec handles is defined non-negative.
///
/// # Errors
///
/// [`DarkpoolError::Validation`] for negative input or values too large for
/// the fixed-point range.
pub fn to_scaled(value: Decimal) -> Result<u128> {
    if value.is_sign_negative() {
        return Err(DarkpoolError::Validation(format!(
            "scaled quantities must be non-negative, got {value}"
        )));
    }

    let scaled = value
        .checked_mul(Decimal::from(SCALE as u64))
        .ok_or_else(|| DarkpoolError::Validation(format!("{value} overflows the scaled range")))?;

    scaled.floor().to_u128().ok_or_else(|| {
        DarkpoolError::Validation(format!("{value} does not fit a u128 after scaling"))
    })
}

/// Convert a scaled wire integer back to a decimal quantity.
///
/// Exact: the result carries 8 fractional digits.
///
/// # Errors
///
/// [`DarkpoolError::Validation`] if the value exceeds the decimal range
/// (u128 is wider than a 96-bit decimal mantissa).
pub fn from_scaled(value: u128) -> Result<Decimal> {
    if value > i128::MAX as u128 {
        return Err(DarkpoolError::Validation(format!(
            "{value} exceeds the representable scaled range"
        )));
    }
    Decimal::try_from_i128_with_scale(value as i128, SCALE_DECIMALS)
        .map(|d| d.normalize())
        .map_err(|_| {
            DarkpoolError::Validation(format!("{value} exceeds the representable scaled range"))
        })
}

/// Convert a scaled wire literal string (optionally `u128`-suffixed) back to
/// a decimal quantity.
///
/// ```
/// use rust_decimal::Decimal;
/// use obscura_core::types::scaled::from_scaled_str;
///
/// assert_eq!(from_scaled_str("150000000u128").unwrap(), Decimal::new(15, 1));
/// assert_eq!(from_scaled_str("150000000").unwrap(), Decimal::new(15, 1));
/// ```
pub fn from_scaled_str(raw: &str) -> Result<Decimal> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_suffix("u128").unwrap_or(trimmed);
    let value: u128 = digits
        .parse()
        .map_err(|_| DarkpoolError::parse("expected a scaled u128 quantity", raw))?;
    from_scaled(value)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_scale_constant() {
        assert_eq!(SCALE, 100_000_000);
    }

    #[test]
    fn test_to_scaled_basic() {
        assert_eq!(to_scaled(dec("1.5")).unwrap(), 150_000_000);
        assert_eq!(to_scaled(dec("2000")).unwrap(), 200_000_000_000);
        assert_eq!(to_scaled(dec("0.00000001")).unwrap(), 1);
        assert_eq!(to_scaled(dec("0")).unwrap(), 0);
    }

    #[test]
    fn test_to_scaled_floors() {
        // 9th decimal place is dropped, never rounded up
        assert_eq!(to_scaled(dec("0.000000019")).unwrap(), 1);
        assert_eq!(to_scaled(dec("1.999999999")).unwrap(), 199_999_999);
    }

    #[test]
    fn test_to_scaled_rejects_negative() {
        assert!(matches!(
            to_scaled(dec("-1.0")),
            Err(DarkpoolError::Validation(_))
        ));
    }

    #[test]
    fn test_from_scaled() {
        assert_eq!(from_scaled(150_000_000).unwrap(), dec("1.5"));
        assert_eq!(from_scaled(1).unwrap(), dec("0.00000001"));
        assert_eq!(from_scaled(0).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_from_scaled_str() {
        assert_eq!(from_scaled_str("150000000u128").unwrap(), dec("1.5"));
        assert_eq!(from_scaled_str("150000000").unwrap(), dec("1.5"));
        assert!(from_scaled_str("abcu128").is_err());
        assert!(from_scaled_str("").is_err());
    }

    #[test]
    fn test_roundtrip() {
        // All representable 8-decimal values survive the round trip exactly
        for s in ["1.5", "0.00000001", "50000.12345678", "123456.78901234", "0"] {
            let x = dec(s);
            assert_eq!(from_scaled(to_scaled(x).unwrap()).unwrap(), x, "roundtrip of {s}");
        }
    }
}
