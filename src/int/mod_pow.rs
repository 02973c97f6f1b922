//! [`Int`] modular exponentiation.

use crate::{
    modular::{even::even_mod_pow, pow::odd_mod_pow},
    Error, Int, Odd, Result,
};

impl Int {
    /// Computes `self^exponent mod modulus`, returning a value in
    /// `[0, modulus)`.
    ///
    /// The modulus must be positive. A negative exponent is routed through
    /// [`Int::mod_inverse`], so it fails with [`Error::NotInvertible`] when
    /// the base and modulus share a factor.
    pub fn mod_pow(&self, exponent: &Self, modulus: &Self) -> Result<Self> {
        if !modulus.is_positive() {
            return Err(Error::NegativeModulus);
        }
        let m = modulus.magnitude();
        if m.is_one() {
            return Ok(Self::zero());
        }

        let base = if exponent.is_negative() {
            self.mod_inverse(modulus)?
        } else {
            self.clone()
        };
        // reduce into [0, m) so the sign never reaches the kernels
        let base = base.rem_euclid(modulus)?.into_magnitude();

        if exponent.is_zero() {
            return Ok(Self::one());
        }
        if base.is_zero() {
            return Ok(Self::zero());
        }

        let result = if m.is_odd() {
            odd_mod_pow(&base, exponent.magnitude(), &Odd(m.clone()))
        } else {
            even_mod_pow(&base, exponent.magnitude(), m)
        };
        Ok(Self::from(result))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, Int};

    #[test]
    fn odd_modulus() {
        let result = Int::from(4).mod_pow(&Int::from(13), &Int::from(497)).unwrap();
        assert_eq!(result, Int::from(445));
    }

    #[test]
    fn power_of_two_modulus() {
        // 3^100 = (8 + 1)^50 == 1 + 50*8 + 1225*64 == 977 (mod 2^10)
        let result = Int::from(3).mod_pow(&Int::from(100), &Int::from(1024)).unwrap();
        assert_eq!(result, Int::from(977));
    }

    #[test]
    fn even_composite_modulus() {
        // 7^5 = 16807 = 1372 * 12 + 343
        let result = Int::from(7).mod_pow(&Int::from(5), &Int::from(12)).unwrap();
        assert_eq!(result, Int::from(7));
    }

    #[test]
    fn negative_base() {
        // (-2)^3 mod 5 = -8 mod 5 = 2
        let result = Int::from(-2).mod_pow(&Int::from(3), &Int::from(5)).unwrap();
        assert_eq!(result, Int::from(2));
    }

    #[test]
    fn negative_exponent() {
        // 3^-1 mod 11 = 4, so 3^-2 mod 11 = 16 mod 11 = 5
        let result = Int::from(3).mod_pow(&Int::from(-2), &Int::from(11)).unwrap();
        assert_eq!(result, Int::from(5));
    }

    #[test]
    fn zero_exponent() {
        assert_eq!(
            Int::from(12).mod_pow(&Int::zero(), &Int::from(7)).unwrap(),
            Int::one()
        );
        assert_eq!(
            Int::zero().mod_pow(&Int::zero(), &Int::from(7)).unwrap(),
            Int::one()
        );
    }

    #[test]
    fn unit_modulus() {
        assert_eq!(
            Int::from(12).mod_pow(&Int::from(3), &Int::one()).unwrap(),
            Int::zero()
        );
    }

    #[test]
    fn rejects_bad_modulus() {
        assert_eq!(
            Int::from(2).mod_pow(&Int::from(3), &Int::from(-7)),
            Err(Error::NegativeModulus)
        );
        assert_eq!(
            Int::from(2).mod_pow(&Int::from(3), &Int::zero()),
            Err(Error::NegativeModulus)
        );
    }

    #[test]
    fn negative_exponent_without_inverse() {
        assert_eq!(
            Int::from(6).mod_pow(&Int::from(-1), &Int::from(9)),
            Err(Error::NotInvertible)
        );
    }
}
