//! [`Int`] modular inverse.

use crate::{modular::inv, Error, Int, Result};

impl Int {
    /// Computes `self^-1 mod modulus`: the value `x` in `[0, modulus)` with
    /// `self * x ≡ 1 (mod modulus)`.
    ///
    /// The modulus must be positive. Fails with [`Error::NotInvertible`]
    /// when `gcd(self, modulus) != 1`.
    pub fn mod_inverse(&self, modulus: &Self) -> Result<Self> {
        if !modulus.is_positive() {
            return Err(Error::NegativeModulus);
        }
        // two even values always share the factor 2
        if !self.is_odd() && !modulus.is_odd() {
            return Err(Error::NotInvertible);
        }
        let m = modulus.magnitude();
        if m.is_one() {
            return Ok(Self::zero());
        }

        let value = self.magnitude().div_rem_unchecked(m).1;
        let inverse = inv::invert(&value, m)?;
        if inverse.is_zero() {
            return Err(Error::NotInvertible);
        }
        // |self|^-1 found; a negative input flips the result across m
        if self.is_negative() {
            Ok(Self::from(m.sub(&inverse)))
        } else {
            Ok(Self::from(inverse))
        }
    }
}
