//! Errors returned by the public surface of the `zeck` crate.

/// Errors that can occur when parsing or evaluating a [`crate::Z`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZeckError {
    /// The input text did not match the `0z`-tagged grammar (`"0z0"` or
    /// `"-"? "0z" "1" ("0"|"1")*`).
    MalformedText {
        /// The rejected input, for inclusion in diagnostics.
        input: String,
    },
    /// `pow` was called with a negative exponent.
    NegativeExponent,
    /// `pow` was called with a zero base and a zero exponent.
    ZeroToZerothPower,
    /// `divmod`, `div`, or `rem` was called with a zero divisor.
    DivisionByZero,
}

impl std::fmt::Display for ZeckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZeckError::MalformedText { input } => {
                write!(f, "malformed Zeckendorf text: {input:?}")
            }
            ZeckError::NegativeExponent => {
                write!(f, "exponentiation requires a non-negative exponent")
            }
            ZeckError::ZeroToZerothPower => {
                write!(f, "0 raised to the 0th power is undefined")
            }
            ZeckError::DivisionByZero => {
                write!(f, "division by zero")
            }
        }
    }
}

impl std::error::Error for ZeckError {}
