//! Bitwise primitives over the unbounded non-negative integer backing a
//! Zeckendorf bitstring.
//!
//! [`num_bigint::BigUint`] already gives us AND/OR/XOR and shifts; the one
//! primitive it doesn't give us is a bounded complement, since `BigUint` has
//! no sign bit to flip. Every reducer in this crate only ever needs NOT
//! within a window that's provably zero outside its own operands, so
//! [`local_not`] takes an explicit width and complements within it.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// Returns the 1-based position of the highest set bit of `x`, or 0 if `x`
/// is zero. This is the "most-significant-bit length query" the spec asks
/// the storage layer to expose.
pub(crate) fn highest_bit(x: &BigUint) -> u64 {
    x.bits()
}

/// Complements `x` within a `width`-bit window. Requires `x` to already fit
/// in `width` bits; every call site picks a width a few bits wider than the
/// operands it's complementing, so this requirement always holds.
pub(crate) fn local_not(x: &BigUint, width: u64) -> BigUint {
    let mask = (BigUint::from(1u8) << width) - BigUint::from(1u8);
    &mask ^ x
}

/// Clears every bit set in `mask` from `value`. Equivalent to `value & !mask`
/// without needing an unbounded complement: any bit that's 1 in both
/// operands is exactly the bit we want gone, and subtracting that submask
/// out of `value` clears it without touching anything else.
pub(crate) fn clear_bits(value: &BigUint, mask: &BigUint) -> BigUint {
    let overlap = value & mask;
    value - overlap
}

/// Extracts a small (sub-u64) window of bits already known to be narrow by
/// construction (a 3- or 4-bit nibble pulled out of a reducer's sliding
/// window) and returns it as a plain integer for table lookups.
pub(crate) fn extract_nibble(value: &BigUint, window: &BigUint, position: u64) -> u64 {
    let isolated = (value & window) << 4u64 >> position;
    isolated.to_u64().unwrap_or(0)
}

/// Same as [`extract_nibble`] but for the width-3 windows used by the
/// difference reducer.
pub(crate) fn extract_triple(value: &BigUint, window: &BigUint, position: u64) -> u64 {
    let isolated = (value & window) << 3u64 >> position;
    isolated.to_u64().unwrap_or(0)
}

/// Builds a bitmask placing the low nibble of `value` (0..=15) at bit
/// position `position - 4` (mirrors `value << position >> 4` with the
/// shift amounts used throughout the reducers).
pub(crate) fn place_nibble(value: u64, position: u64) -> BigUint {
    (BigUint::from(value) << position) >> 4u64
}

/// Same as [`place_nibble`] but for the width-3 windows in the difference
/// reducer (`value << position >> 3`).
pub(crate) fn place_triple(value: u64, position: u64) -> BigUint {
    (BigUint::from(value) << position) >> 3u64
}

pub(crate) fn is_zero(x: &BigUint) -> bool {
    x.is_zero()
}
