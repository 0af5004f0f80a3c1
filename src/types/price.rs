//! Fixed-point price utilities.
//!
//! ## Overview
//!
//! Engine prices are unsigned integers with 4 implied decimal places
//! (1 unit = 0.0001 currency), the convention used by NASDAQ OUCH. The
//! engine itself only ever compares these integers; the conversions here
//! exist for display, trace inspection, and tests.
//!
//! ## Examples
//!
//! ```
//! use matchbook::types::price::{to_fixed, from_fixed};
//!
//! let price = to_fixed("99.5").unwrap();
//! assert_eq!(price, 995_000);
//! assert_eq!(from_fixed(price), "99.5000");
//! ```

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Scaling factor for fixed-point prices: 10^4
pub const SCALE: u64 = 10_000;

/// Largest price representable without overflowing the raw u64
pub const MAX_VALUE: u64 = u64::MAX / SCALE;

/// Convert a decimal string to a fixed-point price
///
/// Returns `None` if the string does not parse, is negative, or is out of
/// range. Sub-tick precision is rounded to the nearest 0.0001.
///
/// ```
/// use matchbook::types::price::to_fixed;
///
/// assert_eq!(to_fixed("100"), Some(1_000_000));
/// assert_eq!(to_fixed("0.0001"), Some(1));
/// assert_eq!(to_fixed("-1"), None);
/// ```
pub fn to_fixed(s: &str) -> Option<u64> {
    let decimal = Decimal::from_str(s).ok()?;
    decimal_to_fixed(decimal)
}

/// Convert a `Decimal` to a fixed-point price
pub fn decimal_to_fixed(d: Decimal) -> Option<u64> {
    if d.is_sign_negative() {
        return None;
    }

    let scaled = d.checked_mul(Decimal::from(SCALE))?;
    scaled.round_dp(0).to_u64()
}

/// Convert a fixed-point price to a `Decimal`
pub fn fixed_to_decimal(value: u64) -> Decimal {
    Decimal::from(value) / Decimal::from(SCALE)
}

/// Render a fixed-point price with all 4 decimal places
///
/// ```
/// use matchbook::types::price::from_fixed;
///
/// assert_eq!(from_fixed(990_000), "99.0000");
/// assert_eq!(from_fixed(1), "0.0001");
/// ```
pub fn from_fixed(value: u64) -> String {
    format!("{:.4}", fixed_to_decimal(value))
}

/// Render a fixed-point price with trailing zeros trimmed
///
/// ```
/// use matchbook::types::price::from_fixed_trimmed;
///
/// assert_eq!(from_fixed_trimmed(1_000_000), "100");
/// assert_eq!(from_fixed_trimmed(995_000), "99.5");
/// ```
pub fn from_fixed_trimmed(value: u64) -> String {
    format!("{}", fixed_to_decimal(value).normalize())
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_constant() {
        assert_eq!(SCALE, 10_000);
    }

    #[test]
    fn test_to_fixed_basic() {
        assert_eq!(to_fixed("1"), Some(10_000));
        assert_eq!(to_fixed("99.5"), Some(995_000));
        assert_eq!(to_fixed("100.0000"), Some(1_000_000));
        assert_eq!(to_fixed("0.0001"), Some(1));
        assert_eq!(to_fixed("15.5"), Some(155_000));
    }

    #[test]
    fn test_to_fixed_edge_cases() {
        assert_eq!(to_fixed("0"), Some(0));
        assert_eq!(to_fixed("-1.0"), None);
        assert_eq!(to_fixed("abc"), None);
        assert_eq!(to_fixed(""), None);
    }

    #[test]
    fn test_from_fixed() {
        assert_eq!(from_fixed(10_000), "1.0000");
        assert_eq!(from_fixed(995_000), "99.5000");
        assert_eq!(from_fixed(1), "0.0001");
        assert_eq!(from_fixed(0), "0.0000");
    }

    #[test]
    fn test_from_fixed_trimmed() {
        assert_eq!(from_fixed_trimmed(1_000_000), "100");
        assert_eq!(from_fixed_trimmed(995_000), "99.5");
        assert_eq!(from_fixed_trimmed(1_234_567), "123.4567");
    }

    #[test]
    fn test_roundtrip() {
        for s in ["1", "0.5", "99.0000", "0.0001", "12345.6789"] {
            let fixed = to_fixed(s).unwrap();
            let back = from_fixed(fixed);
            let original = Decimal::from_str(s).unwrap();
            let converted = Decimal::from_str(&back).unwrap();
            assert_eq!(original, converted, "roundtrip failed for {}", s);
        }
    }
}
