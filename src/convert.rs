//! Conversions between `Z`, native integers, and the `0z`-tagged textual
//! form.

use crate::bigint_ops::is_zero;
use crate::error::ZeckError;
use crate::z::Z;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Builds a `Z` from a native signed integer, greedily selecting Fibonacci
/// numbers from the top down (the standard Zeckendorf construction), which
/// produces an already-canonical bitstring.
pub(crate) fn from_int(n: i64) -> Z {
    let sign = n >= 0;
    let stream = BigUint::from(n.unsigned_abs());
    let (mut i, mut a, mut b) = crate::fib::climb(&stream);
    let mut remaining = stream;
    let mut bits = BigUint::zero();
    while !is_zero(&a) {
        if remaining >= b {
            remaining -= &b;
            bits |= &i;
        }
        let new_i = &i >> 1u64;
        let new_a = &b - &a;
        let new_b = a.clone();
        i = new_i;
        a = new_a;
        b = new_b;
    }
    Z::from_bits(sign, bits)
}

/// Parses the `0z`-tagged textual form: `"0z0"` or
/// `"-"? "0z" "1" ("0"|"1")*`. Non-canonical input (adjacent set bits) is
/// accepted and silently renormalized, matching every other entry point
/// into `Z`.
pub(crate) fn parse(s: &str) -> Result<Z, ZeckError> {
    let malformed = || ZeckError::MalformedText { input: s.to_string() };

    let (sign, rest) = match s.strip_prefix('-') {
        Some(r) => (false, r),
        None => (true, s),
    };
    let digits = rest.strip_prefix("0z").ok_or_else(malformed)?;

    if digits == "0" {
        return if sign { Ok(Z::zero()) } else { Err(malformed()) };
    }
    if !digits.starts_with('1') || !digits.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(malformed());
    }

    let mut bits = BigUint::zero();
    for c in digits.chars() {
        bits <<= 1u64;
        if c == '1' {
            bits |= BigUint::one();
        }
    }
    Ok(Z::from_bits(sign, bits))
}

/// Recovers the native-integer value encoded by a canonical Zeckendorf
/// magnitude bitstring, by descending bit-by-bit and weighting each set bit
/// by its corresponding Fibonacci number.
pub(crate) fn magnitude_to_biguint(bits: &BigUint) -> BigUint {
    let (mut i, mut a, mut b) = crate::fib::climb_selector(bits);
    let mut out = BigUint::zero();
    while !is_zero(&a) {
        if !is_zero(&(bits & &i)) {
            out += &b;
        }
        let new_i = &i >> 1u64;
        let new_a = &b - &a;
        let new_b = a.clone();
        i = new_i;
        a = new_a;
        b = new_b;
    }
    out
}

/// Truncating conversion to `i64`: takes the low 64 bits of the magnitude
/// and applies the sign. Values outside `i64`'s range wrap rather than
/// error, matching the conversion contract for native-width views.
pub(crate) fn to_i64(z: &Z) -> i64 {
    let magnitude = magnitude_to_biguint(&z.bits);
    let low = magnitude.iter_u64_digits().next().unwrap_or(0) as i64;
    if z.sign { low } else { low.wrapping_neg() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn from_int_round_trips_through_to_i64() {
        for n in [0i64, 1, 2, 3, 6, -6, 100, -187, 1296, i64::MAX / 2] {
            let z = Z::from_int(n);
            assert_eq!(z.to_i64(), n, "round trip failed for {n}");
        }
    }

    #[test]
    fn negative_nine_bits_parses_to_minus_six() {
        // Spec worked example: Z("-0z1001") == -6.
        let z = Z::from_str("-0z1001").unwrap();
        assert_eq!(z.to_i64(), -6);
    }

    #[test]
    fn parse_rejects_negative_zero() {
        assert!(Z::from_str("-0z0").is_err());
    }

    #[test]
    fn parse_rejects_missing_tag() {
        assert!(Z::from_str("101").is_err());
    }

    #[test]
    fn parse_rejects_leading_zero_digit() {
        assert!(Z::from_str("0z0101").is_err());
    }

    #[test]
    fn parse_accepts_plain_zero() {
        let z = Z::from_str("0z0").unwrap();
        assert!(z.is_zero());
    }

    #[test]
    fn display_matches_expected_tagged_form() {
        assert_eq!(Z::from_int(0).to_string(), "0z0");
        assert_eq!(Z::from_int(-1).to_string(), "-0z1");
    }
}
