//! Plain-integer Fibonacci climb/descend helper shared by the two
//! native-integer conversion routines.
//!
//! Multiplication, division, and exponentiation perform this same climb
//! but accumulate with full `Z` addition (see `arith.rs`) so the result
//! stays canonical throughout; native-integer conversion only ever needs
//! the raw magnitude, so it climbs over plain [`BigUint`]s instead.

use num_bigint::BigUint;
use num_traits::One;

/// Climbs the Fibonacci pair `(a, b)` together with selector bit `i`,
/// starting from `(i, a, b) = (1, 1, 1)`, until `b >= target`.
///
/// Used to build a magnitude bitstring from a native integer: the climb
/// finds the largest Fibonacci number not exceeding the remaining value,
/// then the matching descend greedily subtracts.
pub(crate) fn climb(target: &BigUint) -> (BigUint, BigUint, BigUint) {
    let mut i = BigUint::one();
    let mut a = BigUint::one();
    let mut b = BigUint::one();
    while target >= &b {
        let new_i = &i << 1u64;
        let new_a = b.clone();
        let new_b = &b + &a;
        i = new_i;
        a = new_a;
        b = new_b;
    }
    (i, a, b)
}

/// Climbs the same Fibonacci pair, but stops once selector bit `i` exceeds
/// `value` rather than once `b` does.
///
/// Used to decode a magnitude bitstring back to a native integer: the
/// descend then tests each bit of `value` directly instead of comparing
/// against a running remainder.
pub(crate) fn climb_selector(value: &BigUint) -> (BigUint, BigUint, BigUint) {
    let mut i = BigUint::one();
    let mut a = BigUint::one();
    let mut b = BigUint::one();
    while &i <= value {
        let new_i = &i << 1u64;
        let new_a = b.clone();
        let new_b = &b + &a;
        i = new_i;
        a = new_a;
        b = new_b;
    }
    (i, a, b)
}
