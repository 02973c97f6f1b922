//! Error types surfaced by fallible operations.

use core::fmt;

/// Result type with this crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// The failure conditions of the arithmetic entry points.
///
/// None of these are recoverable inside the crate; they describe contract
/// violations on the inputs and are surfaced to the caller as-is.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The divisor of a division or remainder operation was zero.
    DivisionByZero,
    /// A modulus was zero or negative where a positive one is required.
    NegativeModulus,
    /// No modular inverse exists for the given operands, e.g. because they
    /// share a common factor.
    NotInvertible,
    /// A negative exponent was supplied to an operation that cannot route it
    /// through a modular inverse.
    NegativeExponent,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::NegativeModulus => write!(f, "modulus must be positive"),
            Self::NotInvertible => write!(f, "no modular inverse exists"),
            Self::NegativeExponent => write!(f, "negative exponent"),
        }
    }
}

impl core::error::Error for Error {}
