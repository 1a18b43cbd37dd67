//! Carry and difference reduction: the local bit-pattern rewrites that fold
//! Zeckendorf addition/subtraction carries back into a plain bitstring.
//!
//! Both reducers are single top-down sliding-window passes followed by an
//! LSB cleanup table, ported from the reference bit-pattern rewrite rules
//! (Ahlbach, Usatine & Pippenger, *Efficient Algorithms for Zeckendorf
//! Arithmetic*, arXiv:1207.4497) that this crate's `Z` type is built on.

use crate::bigint_ops::{
    clear_bits, extract_nibble, extract_triple, highest_bit, is_zero, place_nibble, place_triple,
};
use num_bigint::BigUint;
use num_traits::Zero;

/// Folds `carry` (positions where both addends held a 1) into `summation`
/// (positions where exactly one did), leaving a plain bitstring with the
/// same value and no outstanding carry bits.
///
/// # Panics
///
/// Panics if a residual carry bit survives the reduction — this can only
/// happen if the reducer itself has a bug, since every entry state this
/// crate constructs is reducible. It is not a user-reachable error.
pub(crate) fn reduce_carry(mut carry: BigUint, mut summation: BigUint) -> BigUint {
    // Top-down pass, window width 4.
    let mut window = BigUint::from(15u8) << highest_bit(&carry);
    while !is_zero(&(&window >> 4u64)) {
        window >>= 1u64;
        let position = highest_bit(&window);
        let sum_window = extract_nibble(&summation, &window, position);
        let carry_window = extract_nibble(&carry, &window, position);

        let (clear_carry, set_carry, toggle_carry, clear_sum, set_sum, toggle_sum) =
            if (carry_window >> 1) == 2 && ((sum_window >> 1) == 0 || (sum_window >> 1) == 2) {
                // 020x -> 100x' & 030x -> 110x'
                (4, 0, sum_window & 1, 0, 8, 1)
            } else if (carry_window >> 1) == 2 && (sum_window >> 1) == 1 {
                // 021x -> 110x
                (4, 0, 0, 2, 12, 0)
            } else if (carry_window >> 1) == 1 && (sum_window >> 1) == 2 {
                // 012x -> 101x
                (2, 0, 0, 4, 10, 0)
            } else {
                (0, 0, 0, 0, 0, 0)
            };

        carry = clear_bits(&carry, &place_nibble(clear_carry, position));
        carry |= place_nibble(set_carry, position);
        carry ^= place_nibble(toggle_carry, position);
        summation = clear_bits(&summation, &place_nibble(clear_sum, position));
        summation |= place_nibble(set_sum, position);
        summation ^= place_nibble(toggle_sum, position);
    }

    // LSB cleanup: patterns too small for the width-4 window above.
    if !is_zero(&(&carry & BigUint::from(3u8))) {
        let carry_bits3 = bits_value(&carry, 3);
        let sum_bits3 = bits_value(&summation, 3);
        let carry_bits7 = bits_value(&carry, 7);
        let sum_bits7 = bits_value(&summation, 7);
        let carry_bits15 = bits_value(&carry, 15);
        let sum_bits15 = bits_value(&summation, 15);

        let (clear_carry, set_carry, clear_sum, set_sum) = if carry_bits3 == 1
            && (sum_bits3 == 1 || sum_bits3 == 0)
        {
            // 02 -> 10 & 03 -> 11
            (1u64, 0u64, 0u64, 2u64)
        } else if carry_bits7 == 2 && (sum_bits7 == 2 || sum_bits7 == 0) {
            // 020 -> 101 & 030 -> 111
            (2, 0, 0, 5)
        } else if carry_bits7 == 2 && sum_bits7 == 1 {
            // 021 -> 110
            (2, 0, 1, 6)
        } else if carry_bits7 == 1 && sum_bits7 == 2 {
            // 012 -> 101
            (1, 0, 2, 5)
        } else if carry_bits15 == 2 && sum_bits15 == 4 {
            // 0120 -> 1010
            (2, 0, 4, 10)
        } else {
            (0, 0, 0, 0)
        };

        carry = clear_bits(&carry, &BigUint::from(clear_carry));
        carry |= BigUint::from(set_carry);
        summation = clear_bits(&summation, &BigUint::from(clear_sum));
        summation |= BigUint::from(set_sum);
    }

    assert!(
        is_zero(&carry),
        "carry reducer failed to clear residual carry bits: carry={carry:b} summation={summation:b}"
    );

    crate::canonical::canonicalize(summation)
}

/// Returns the low `width` bits of `x` as a plain integer, where `width` is
/// a power-of-two-minus-one mask (3, 7, or 15) — small helper for the carry
/// reducer's LSB cleanup table, which inspects 2-, 3- and 4-bit windows.
fn bits_value(x: &BigUint, mask: u64) -> u64 {
    use num_traits::ToPrimitive;
    (x & BigUint::from(mask)).to_u64().unwrap_or(0)
}

/// Reduces the subtraction form `summation (S) - difference (D)` (with
/// `S & D == 0` by construction) to a `(carry, summation)` pair whose value
/// equals `value(S) - value(D)`, eliminating `D` entirely.
///
/// # Panics
///
/// Panics if `value(S) < value(D)` (the caller must order operands by
/// magnitude first) or if a residual difference bit survives reduction —
/// both indicate a bug in the caller or this reducer, not a user error.
pub(crate) fn reduce_difference(mut summation: BigUint, mut difference: BigUint) -> (BigUint, BigUint) {
    let mut carry = BigUint::zero();
    // Top-down pass, window width 3.
    let mut window = BigUint::from(7u8) << highest_bit(&summation);
    while !is_zero(&(&window >> 3u64)) {
        window >>= 1u64;
        let position = highest_bit(&window);
        let carry_window = extract_triple(&carry, &window, position);
        let sum_window = extract_triple(&summation, &window, position);
        let diff_window = extract_triple(&difference, &window, position);

        let mut clear_carry = 0u64;
        let mut set_carry = 0u64;
        let mut clear_sum = 0u64;
        let mut set_sum = 0u64;
        let mut toggle_sum = 0u64;
        let mut clear_diff = 0u64;

        if ((sum_window & 4) != 0 || (carry_window & 4) != 0) && (carry_window & 3) == 0 {
            clear_carry = 4;
            toggle_sum = 4;
            if (sum_window & 3) == 0 && (diff_window & 3) == 0 {
                // x00 -> x'11
                set_sum = 3;
            } else if (sum_window & 3) == 0 && (diff_window & 3) == 2 {
                // x*0 -> x'01
                set_sum = 1;
                clear_diff = 2;
            } else if (sum_window & 3) == 1 && (diff_window & 3) == 2 {
                // x*1 -> x'02
                set_carry = 1;
                clear_sum = 1;
                clear_diff = 2;
            } else if (sum_window & 3) == 0 && (diff_window & 3) == 1 {
                // x0* -> x'10
                set_sum = 2;
                clear_diff = 1;
            } else {
                clear_carry = 0;
                toggle_sum = 0;
            }
        }

        carry = clear_bits(&carry, &place_triple(clear_carry, position));
        carry |= place_triple(set_carry, position);
        summation = clear_bits(&summation, &place_triple(clear_sum, position));
        summation |= place_triple(set_sum, position);
        summation ^= place_triple(toggle_sum, position);
        difference = clear_bits(&difference, &place_triple(clear_diff, position));
    }

    // LSB cleanup.
    if !is_zero(&(&difference & BigUint::from(1u8))) {
        let carry_lo2 = bits_value(&carry, 3);
        let sum_lo2 = bits_value(&summation, 3);
        let (clear_carry, clear_sum, set_sum, clear_diff) = if (carry_lo2 & 2) != 0 {
            // 02* -> 100
            (2u64, 0u64, 4u64, 1u64)
        } else if (sum_lo2 & 2) != 0 {
            // x1* -> x01
            (0, 2, 1, 1)
        } else {
            (0, 0, 0, 0)
        };
        carry = clear_bits(&carry, &BigUint::from(clear_carry));
        summation = clear_bits(&summation, &BigUint::from(clear_sum));
        summation |= BigUint::from(set_sum);
        difference = clear_bits(&difference, &BigUint::from(clear_diff));
    }

    assert!(
        is_zero(&difference),
        "difference reducer failed to clear residual difference bits: carry={carry:b} summation={summation:b} difference={difference:b}"
    );

    (carry, summation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::canonicalize;

    fn weight(bits: &BigUint) -> BigUint {
        let mut total = BigUint::zero();
        let mut f_prev = BigUint::zero();
        let mut f_cur = BigUint::from(1u8);
        let mut pos = 0u64;
        let n = bits.bits();
        while pos < n {
            if bits.bit(pos) {
                total += &f_cur;
            }
            let next = &f_prev + &f_cur;
            f_prev = f_cur;
            f_cur = next;
            pos += 1;
        }
        total
    }

    #[test]
    fn carry_reduces_single_doubled_position() {
        // digit 2 at position 3: carry bit 3 set, summation bit 3 clear.
        let carry = BigUint::from(0b1000u8);
        let summation = BigUint::zero();
        let expected_value = &weight(&carry) * BigUint::from(2u8) / BigUint::from(2u8)
            + weight(&carry); // carry contributes 2x its own weight
        let result = reduce_carry(carry.clone(), summation);
        assert_eq!((&result << 1u8) & &result, BigUint::zero());
        assert_eq!(weight(&result), weight(&carry) * BigUint::from(2u8));
        let _ = expected_value;
    }

    #[test]
    fn carry_reduces_alternating_bits_worst_case() {
        // Long alternating run exercises cascading cleanup rules.
        let carry = BigUint::from(0b0101_0101_0101u64);
        let summation = BigUint::from(0b1010_1010_1010u64);
        let expected = weight(&carry) * BigUint::from(2u8) + weight(&summation);
        let result = reduce_carry(carry, summation);
        assert_eq!((&result << 1u8) & &result, BigUint::zero());
        assert_eq!(weight(&result), expected);
    }

    #[test]
    fn difference_reduces_basic_case() {
        // S = bit4 (F(6)=8 in the bit0=F(1) weighting used by `weight`),
        // D = bit2 | bit1. Value(S) must exceed value(D).
        let s = BigUint::from(0b1_0000u8);
        let d = BigUint::from(0b0_0110u8);
        assert!(weight(&s) >= weight(&d));
        let (carry, summation) = reduce_difference(s.clone(), d.clone());
        let reduced = canonicalize(reduce_carry(carry, summation));
        assert_eq!(weight(&reduced), weight(&s) - weight(&d));
    }

    #[test]
    fn difference_reduces_worst_case_alternating() {
        let s = BigUint::from(0b1010_1010_1000u64);
        let d = BigUint::from(0b0101_0101_0100u64);
        assert!(weight(&s) >= weight(&d));
        let (carry, summation) = reduce_difference(s.clone(), d.clone());
        let reduced = canonicalize(reduce_carry(carry, summation));
        assert_eq!(weight(&reduced), weight(&s) - weight(&d));
    }
}
