//! The `Z` type: a signed arbitrary-precision integer whose magnitude is
//! stored as a canonical Zeckendorf bitstring.

use crate::compare::compare;
use crate::error::ZeckError;
use num_bigint::BigUint;
use num_traits::Zero;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A signed arbitrary-precision integer backed by a Zeckendorf (Fibonacci)
/// bitstring rather than a place-value one.
///
/// Programming bit `k` (0-indexed, LSB first) corresponds to Fibonacci
/// number `F(k+2)`; `bits` never has two adjacent set bits (Brown's
/// Criterion) and zero is always stored with `sign = true`.
#[derive(Clone, Debug)]
pub struct Z {
    pub(crate) sign: bool,
    pub(crate) bits: BigUint,
}

impl Z {
    /// Builds a `Z` from a requested sign and a raw (not necessarily
    /// canonical) magnitude bitstring, canonicalizing it first.
    ///
    /// Zero has no sign of its own: if the canonicalized magnitude is zero,
    /// the sign is forced to `true` regardless of what was requested, so
    /// `Z` never has to reason about a distinct "negative zero".
    pub(crate) fn from_bits(sign: bool, bitstring: BigUint) -> Z {
        let bits = crate::canonical::canonicalize(bitstring);
        let sign = sign || bits.is_zero();
        Z { sign, bits }
    }

    /// The additive identity.
    pub fn zero() -> Z {
        Z::from_bits(true, BigUint::zero())
    }

    /// Builds a `Z` from a native signed integer.
    pub fn from_int(n: i64) -> Z {
        crate::convert::from_int(n)
    }

    /// Parses the `0z`-tagged textual form (`"0z0"` or
    /// `"-"? "0z" "1" ("0"|"1")*`).
    pub fn parse(s: &str) -> Result<Z, ZeckError> {
        crate::convert::parse(s)
    }

    /// Whether this value is zero.
    pub fn is_zero(&self) -> bool {
        self.bits.is_zero()
    }

    /// Whether this value is strictly negative.
    pub fn is_negative(&self) -> bool {
        !self.sign && !self.is_zero()
    }

    /// Whether this value is zero or positive — the external `sign` query
    /// the Zeckendorf integer type exposes alongside `is_negative`/`is_zero`.
    pub fn is_non_negative(&self) -> bool {
        self.sign
    }

    /// Truncating conversion to `i64`. Values outside `i64`'s range wrap,
    /// mirroring the native-width conversions the spec explicitly allows to
    /// overflow rather than error.
    pub fn to_i64(&self) -> i64 {
        crate::convert::to_i64(self)
    }

    /// A lossy `f64` view of this value, for convenience display only —
    /// not used anywhere in the arithmetic engine itself.
    pub fn to_f64(&self) -> f64 {
        use num_traits::ToPrimitive;
        let magnitude = crate::convert::magnitude_to_biguint(&self.bits);
        let value = magnitude.to_f64().unwrap_or(f64::INFINITY);
        if self.sign { value } else { -value }
    }
}

impl Default for Z {
    fn default() -> Z {
        Z::zero()
    }
}

impl PartialEq for Z {
    fn eq(&self, other: &Z) -> bool {
        compare(self, other) == Ordering::Equal
    }
}

impl Eq for Z {}

impl PartialOrd for Z {
    fn partial_cmp(&self, other: &Z) -> Option<Ordering> {
        Some(compare(self, other))
    }
}

impl Ord for Z {
    fn cmp(&self, other: &Z) -> Ordering {
        compare(self, other)
    }
}

impl Hash for Z {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Zero is canonically sign = true, so (sign, bits) agreeing with
        // `==` is exactly what Hash requires.
        self.sign.hash(state);
        self.bits.hash(state);
    }
}

impl FromStr for Z {
    type Err = ZeckError;

    fn from_str(s: &str) -> Result<Z, ZeckError> {
        Z::parse(s)
    }
}

impl std::fmt::Display for Z {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.sign {
            write!(f, "-")?;
        }
        write!(f, "0z{}", self.bits.to_str_radix(2))
    }
}

impl serde::Serialize for Z {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Z {
    fn deserialize<D>(deserializer: D) -> Result<Z, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Z::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_has_positive_sign() {
        let z = Z::zero();
        assert!(z.sign);
        assert!(z.is_zero());
    }

    #[test]
    fn from_bits_forces_positive_sign_on_zero_magnitude() {
        let z = Z::from_bits(false, BigUint::zero());
        assert!(z.sign);
    }

    #[test]
    fn display_round_trips_through_parse() {
        let z = Z::from_int(-187);
        let text = z.to_string();
        let parsed = Z::from_str(&text).unwrap();
        assert_eq!(z, parsed);
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Z::default(), Z::zero());
    }

    #[test]
    fn hash_agrees_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Z::from_int(5));
        assert!(set.contains(&Z::from_int(5)));
    }

    #[test]
    fn is_non_negative_matches_sign() {
        assert!(Z::zero().is_non_negative());
        assert!(Z::from_int(5).is_non_negative());
        assert!(!Z::from_int(-5).is_non_negative());
    }

    #[test]
    fn to_f64_matches_positive_and_negative_values() {
        assert_eq!(Z::from_int(38).to_f64(), 38.0);
        assert_eq!(Z::from_int(-23).to_f64(), -23.0);
        assert_eq!(Z::zero().to_f64(), 0.0);
    }

    #[test]
    fn to_f64_overflows_to_infinity_for_oversized_magnitude() {
        let huge = Z::from_int(2).pow(&Z::from_int(1100)).unwrap();
        assert_eq!(huge.to_f64(), f64::INFINITY);
        assert_eq!(huge.neg().to_f64(), f64::NEG_INFINITY);
    }
}
