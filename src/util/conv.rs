//! Conversion utilities.

use {
    alloy::primitives::U256,
    bigdecimal::BigDecimal,
    num::{BigUint, Signed, Zero},
};

/// Decimal digits of `U256::MAX`.
const MAX_DIGITS: i64 = 78;

pub fn biguint_to_u256(i: &BigUint) -> Option<U256> {
    let bytes = i.to_bytes_be();
    if bytes.len() > 32 {
        return None;
    }
    Some(U256::from_be_slice(&bytes))
}

pub fn u256_to_biguint(i: &U256) -> BigUint {
    BigUint::from_bytes_be(&i.to_be_bytes::<32>())
}

/// Scales a decimal amount by `10^decimals` into an integer amount of the
/// smallest unit. Returns `None` for negative amounts, amounts with more
/// fractional digits than `decimals` and amounts that overflow a `U256`.
///
/// The exponent is bounded before any power of ten is built, so inputs like
/// `1e-1000000` are rejected without scaling them.
pub fn decimal_to_units(d: &BigDecimal, decimals: u8) -> Option<U256> {
    let (int, scale) = d.as_bigint_and_exponent();
    if int.is_negative() {
        return None;
    }
    if int.is_zero() {
        return Some(U256::ZERO);
    }

    // Trailing zeros of the digits only shift the exponent.
    let digits = int.magnitude().to_str_radix(10);
    let significant = digits.trim_end_matches('0');
    let zeros = i64::try_from(digits.len() - significant.len()).ok()?;
    let exp = scale.checked_sub(zeros)?.checked_sub(i64::from(decimals))?;
    if exp > 0 || i64::try_from(significant.len()).ok()? - exp > MAX_DIGITS {
        return None;
    }

    let units = BigUint::parse_bytes(significant.as_bytes(), 10)?
        * BigUint::from(10_u8).pow(u32::try_from(-exp).ok()?);
    biguint_to_u256(&units)
}

/// Converts an integer amount of the smallest unit back to a decimal amount.
pub fn units_to_decimal(units: &U256, decimals: u8) -> BigDecimal {
    BigDecimal::new(u256_to_biguint(units).into(), i64::from(decimals))
}
