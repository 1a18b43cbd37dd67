//! Arithmetic on `Z`: addition and subtraction via the carry/difference
//! reducers, and multiplication, division, and exponentiation built from
//! Fibonacci-indexed repeated addition.

use crate::bigint_ops::local_not;
use crate::error::ZeckError;
use crate::reduce::{reduce_carry, reduce_difference};
use crate::z::Z;
use num_bigint::BigUint;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// `a & !b`, complementing `b` within a window wide enough to hold both
/// operands — the shared building block for both halves of opposite-sign
/// addition (`summation = a & !b`, `difference = b & !a`).
fn and_not(a: &BigUint, b: &BigUint) -> BigUint {
    let width = a.bits().max(b.bits()) + 1;
    a & local_not(b, width)
}

impl Z {
    /// The sum of `self` and `other`.
    ///
    /// Same-sign addition routes bitwise-AND positions into the carry
    /// reducer; opposite-sign addition (signed subtraction) splits into a
    /// summation/difference pair and orders operands by magnitude first so
    /// the difference reducer always subtracts the smaller from the larger.
    pub fn add(&self, other: &Z) -> Z {
        if self.sign == other.sign {
            let carry = &self.bits & &other.bits;
            let summation = &self.bits ^ &other.bits;
            Z::from_bits(self.sign, reduce_carry(carry, summation))
        } else {
            let (larger, smaller, result_sign) = if other.bits > self.bits {
                (other, self, other.sign)
            } else {
                (self, other, self.sign)
            };
            if larger.bits == smaller.bits {
                return Z::zero();
            }
            let summation = and_not(&larger.bits, &smaller.bits);
            let difference = and_not(&smaller.bits, &larger.bits);
            let (carry, summation) = reduce_difference(summation, difference);
            Z::from_bits(result_sign, reduce_carry(carry, summation))
        }
    }

    /// `self - other`, defined as `self + (-other)`.
    pub fn sub(&self, other: &Z) -> Z {
        self.add(&other.neg())
    }

    /// `self * other`, by Fibonacci-indexed repeated addition: climbs to
    /// the largest Fibonacci multiple of `|self|` not exceeding `|other|`,
    /// then descends, accumulating with full canonical `Z` addition at
    /// every step so the running total never drifts from canonical form.
    pub fn mul(&self, other: &Z) -> Z {
        let result_sign = !(self.sign ^ other.sign);
        let multiplier = other.abs();
        let multiplicand = self.abs();

        let mut product = Z::zero();
        let mut i = BigUint::from(1u8);
        let mut a = Z::from_int(1);
        let mut b = Z::from_int(1);
        let mut za = multiplicand.clone();
        let mut zb = multiplicand;

        while multiplier > b {
            let new_b = b.add(&a);
            let new_zb = zb.add(&za);
            i <<= 1u64;
            a = b;
            za = zb;
            b = new_b;
            zb = new_zb;
        }
        while !a.is_zero() {
            if !(&multiplier.bits & &i).is_zero() {
                product = product.add(&zb);
            }
            let new_a = b.sub(&a);
            let new_za = zb.sub(&za);
            i >>= 1u64;
            b = a;
            zb = za;
            a = new_a;
            za = new_za;
        }

        if result_sign { product } else { product.neg() }
    }

    /// Floor-style division and remainder, by Fibonacci-indexed repeated
    /// subtraction: climbs to the largest Fibonacci multiple of `|other|`
    /// not exceeding the running remainder, then descends, subtracting
    /// whenever the remainder can still afford it.
    ///
    /// When the operand signs disagree, the quotient is negated and the
    /// remainder is adjusted by `|other|` so that `self == other * quotient
    /// + remainder` continues to hold with a remainder whose sign matches
    /// the divisor's (the conventional floor-division convention).
    pub fn divmod(&self, other: &Z) -> Result<(Z, Z), ZeckError> {
        if other.is_zero() {
            return Err(ZeckError::DivisionByZero);
        }
        let result_sign = !(self.sign ^ other.sign);
        let divisor = other.abs();

        let mut quotient = Z::zero();
        let mut remainder = self.abs();
        let mut a = Z::from_int(1);
        let mut b = Z::from_int(1);
        let mut za = divisor.clone();
        let mut zb = divisor.clone();

        while remainder > zb {
            let new_b = b.add(&a);
            let new_zb = zb.add(&za);
            a = b;
            za = zb;
            b = new_b;
            zb = new_zb;
        }
        while remainder >= divisor {
            if remainder >= zb {
                quotient = quotient.add(&b);
                remainder = remainder.sub(&zb);
            }
            let new_a = b.sub(&a);
            let new_za = zb.sub(&za);
            b = a;
            zb = za;
            a = new_a;
            za = new_za;
        }

        if result_sign {
            Ok((quotient, remainder))
        } else {
            Ok((quotient.neg(), remainder.sub(&divisor)))
        }
    }

    /// `self / other`, floor division. See [`Z::divmod`].
    pub fn div(&self, other: &Z) -> Result<Z, ZeckError> {
        self.divmod(other).map(|(quotient, _)| quotient)
    }

    /// `self % other`. See [`Z::divmod`].
    pub fn rem(&self, other: &Z) -> Result<Z, ZeckError> {
        self.divmod(other).map(|(_, remainder)| remainder)
    }

    /// `self.pow(other)`, by Fibonacci-indexed repeated multiplication.
    ///
    /// The exponent must be non-negative, and `0.pow(0)` is undefined.
    /// The result's sign is positive whenever the base is non-negative or
    /// the exponent is even, and negative otherwise.
    pub fn pow(&self, other: &Z) -> Result<Z, ZeckError> {
        if other.is_negative() {
            return Err(ZeckError::NegativeExponent);
        }
        if other.is_zero() && self.is_zero() {
            return Err(ZeckError::ZeroToZerothPower);
        }

        let two = Z::from_int(2);
        let exponent = other.abs();
        let exponent_is_even = exponent.rem(&two)?.is_zero();
        let result_sign = self.sign || exponent_is_even;

        let base = self.abs();
        let mut power = Z::from_int(1);
        let mut i = BigUint::from(1u8);
        let mut a = Z::from_int(1);
        let mut b = Z::from_int(1);
        let mut za = base.clone();
        let mut zb = base;

        while exponent > b {
            let new_b = b.add(&a);
            let new_zb = zb.mul(&za);
            i <<= 1u64;
            a = b;
            za = zb;
            b = new_b;
            zb = new_zb;
        }
        while !a.is_zero() {
            if !(&exponent.bits & &i).is_zero() {
                power = power.mul(&zb);
            }
            let new_a = b.sub(&a);
            let new_za = zb.div(&za)?;
            i >>= 1u64;
            b = a;
            zb = za;
            a = new_a;
            za = new_za;
        }

        Ok(if result_sign { power } else { power.neg() })
    }

    /// Additive inverse. Zero is its own negation, since zero is always
    /// stored with `sign = true`.
    pub fn neg(&self) -> Z {
        Z::from_bits(!self.sign, self.bits.clone())
    }

    /// Unary plus: a cheap renormalization that returns an equal value in
    /// canonical form (a no-op for any `Z` this crate ever constructs,
    /// since every constructor already canonicalizes).
    pub fn plus(&self) -> Z {
        Z::from_bits(self.sign, self.bits.clone())
    }

    /// Absolute value.
    pub fn abs(&self) -> Z {
        Z::from_bits(true, self.bits.clone())
    }
}

impl Add for Z {
    type Output = Z;
    fn add(self, rhs: Z) -> Z {
        Z::add(&self, &rhs)
    }
}

impl Sub for Z {
    type Output = Z;
    fn sub(self, rhs: Z) -> Z {
        Z::sub(&self, &rhs)
    }
}

impl Mul for Z {
    type Output = Z;
    fn mul(self, rhs: Z) -> Z {
        Z::mul(&self, &rhs)
    }
}

impl Div for Z {
    type Output = Z;
    fn div(self, rhs: Z) -> Z {
        Z::div(&self, &rhs).expect("division by zero")
    }
}

impl Rem for Z {
    type Output = Z;
    fn rem(self, rhs: Z) -> Z {
        Z::rem(&self, &rhs).expect("division by zero")
    }
}

impl Neg for Z {
    type Output = Z;
    fn neg(self) -> Z {
        Z::neg(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_scenario() {
        assert_eq!(Z::from_int(38).add(&Z::from_int(23)), Z::from_int(61));
    }

    #[test]
    fn subtraction_scenario() {
        assert_eq!(Z::from_int(37).sub(&Z::from_int(48)), Z::from_int(-11));
    }

    #[test]
    fn multiplication_scenario() {
        assert_eq!(Z::from_int(17).mul(&Z::from_int(-11)), Z::from_int(-187));
    }

    #[test]
    fn division_scenario() {
        let (q, r) = Z::from_int(100).divmod(&Z::from_int(7)).unwrap();
        assert_eq!(q, Z::from_int(14));
        assert_eq!(r, Z::from_int(2));
    }

    #[test]
    fn power_scenario() {
        assert_eq!(Z::from_int(6).pow(&Z::from_int(4)).unwrap(), Z::from_int(1296));
    }

    #[test]
    fn division_by_zero_is_reported() {
        assert_eq!(
            Z::from_int(1).divmod(&Z::zero()),
            Err(ZeckError::DivisionByZero)
        );
    }

    #[test]
    fn negative_exponent_is_rejected() {
        assert_eq!(
            Z::from_int(2).pow(&Z::from_int(-1)),
            Err(ZeckError::NegativeExponent)
        );
    }

    #[test]
    fn zero_to_zeroth_power_is_rejected() {
        assert_eq!(
            Z::zero().pow(&Z::zero()),
            Err(ZeckError::ZeroToZerothPower)
        );
    }

    #[test]
    fn negative_base_odd_exponent_is_negative() {
        let result = Z::from_int(-2).pow(&Z::from_int(3)).unwrap();
        assert_eq!(result, Z::from_int(-8));
    }

    #[test]
    fn negative_base_even_exponent_is_positive() {
        let result = Z::from_int(-2).pow(&Z::from_int(4)).unwrap();
        assert_eq!(result, Z::from_int(16));
    }

    #[test]
    fn negation_is_involutive() {
        let z = Z::from_int(1001);
        assert_eq!(z.clone().neg().neg(), z);
    }

    #[test]
    fn addition_is_commutative_and_associative() {
        let (a, b, c) = (Z::from_int(17), Z::from_int(-42), Z::from_int(99));
        assert_eq!(a.add(&b), b.add(&a));
        assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
    }

    #[test]
    fn divmod_identity_holds() {
        let (a, b) = (Z::from_int(1000), Z::from_int(-13));
        let (q, r) = a.divmod(&b).unwrap();
        assert_eq!(b.mul(&q).add(&r), a);
    }
}
