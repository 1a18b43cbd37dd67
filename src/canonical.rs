//! Canonicalization: rewriting a Zeckendorf bitstring so no two adjacent
//! bits are set (Brown's Criterion).

use crate::bigint_ops::{highest_bit, is_zero, local_not};
use num_bigint::BigUint;
use num_traits::Zero;

/// Rewrites `x` into canonical form by repeatedly replacing the pattern
/// `011` (bits `p, p+1, p+2` read LSB-to-MSB as `1,1,0`) with `100`, using
/// the identity `F(n) + F(n-1) = F(n+1)`.
///
/// Every pass is done in parallel across all occurrences: `W` marks the
/// middle bit of every `011` pattern, and XORing `(W<<1)|W|(W>>1)` flips
/// all three bits of each pattern at once. The loop terminates once `W`
/// is zero.
pub(crate) fn canonicalize(mut x: BigUint) -> BigUint {
    if is_zero(&x) {
        return x;
    }
    loop {
        let width = highest_bit(&x) + 2;
        let shifted_not = local_not(&(&x >> 1u64), width);
        let window = (&x << 1u64) & &x & shifted_not;
        if is_zero(&window) {
            return x;
        }
        x ^= (&window << 1u64) | &window | (&window >> 1u64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_already_canonical() {
        assert_eq!(canonicalize(BigUint::zero()), BigUint::zero());
    }

    #[test]
    fn single_bit_is_unchanged() {
        let x = BigUint::from(0b0010u8);
        assert_eq!(canonicalize(x.clone()), x);
    }

    #[test]
    fn simple_carry_collapses() {
        // bits 1 and 2 set (0b0110) -> bit 3 set (0b1000)
        let x = BigUint::from(0b0110u8);
        assert_eq!(canonicalize(x), BigUint::from(0b1000u8));
    }

    #[test]
    fn cascading_carries_resolve() {
        // 0b01110110 has overlapping 011 patterns that must cascade
        let x = BigUint::from(0b0111_0110u16);
        let result = canonicalize(x.clone());
        assert_eq!((&result << 1u8) & &result, BigUint::zero());
        // value is preserved: recompute via naive Fibonacci weighting
        assert_eq!(
            naive_value(&x),
            naive_value(&result)
        );
    }

    fn naive_value(bits: &BigUint) -> BigUint {
        let mut total = BigUint::zero();
        let mut f_prev = BigUint::zero();
        let mut f_cur = BigUint::from(1u8); // F(2) = 1 at bit position 1
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
}
