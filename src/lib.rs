//! Signed arbitrary-precision integer arithmetic on Zeckendorf bitstrings.
//!
//! Every non-negative integer has a unique representation as a sum of
//! non-consecutive Fibonacci numbers (Zeckendorf's theorem). This crate
//! stores a [`Z`]'s magnitude as that representation directly — a bitstring
//! where bit `k` marks whether `F(k+2)` is part of the sum, with no two
//! adjacent bits ever both set (Brown's Criterion) — and implements the
//! full signed arithmetic surface (comparison, addition, subtraction,
//! multiplication, division, exponentiation) as local bit-pattern rewrites
//! on that bitstring, never converting through a place-value integer.
//!
//! ```
//! use zeck::Z;
//!
//! let a = Z::from_int(38);
//! let b = Z::from_int(23);
//! assert_eq!(a.add(&b), Z::from_int(61));
//!
//! let parsed: Z = "-0z1001".parse().unwrap();
//! assert_eq!(parsed.to_i64(), -6);
//! ```

mod arith;
mod bigint_ops;
mod canonical;
mod compare;
mod convert;
mod error;
mod fib;
mod reduce;
mod z;

pub use error::ZeckError;
pub use z::Z;
