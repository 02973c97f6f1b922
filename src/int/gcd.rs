//! [`Int`] greatest common divisor.

use crate::Int;

impl Int {
    /// Computes the greatest common divisor of `self` and `rhs`.
    ///
    /// The result is non-negative regardless of the operand signs;
    /// `gcd(0, 0) == 0`.
    pub fn gcd(&self, rhs: &Self) -> Self {
        Self::from(self.magnitude().gcd(rhs.magnitude()))
    }
}

#[cfg(test)]
mod tests {
    use crate::Int;

    #[test]
    fn ignores_signs() {
        assert_eq!(Int::from(-12).gcd(&Int::from(18)), Int::from(6));
        assert_eq!(Int::from(12).gcd(&Int::from(-18)), Int::from(6));
        assert_eq!(Int::from(-12).gcd(&Int::from(-18)), Int::from(6));
    }

    #[test]
    fn zero_operands() {
        assert_eq!(Int::from(-5).gcd(&Int::zero()), Int::from(5));
        assert_eq!(Int::zero().gcd(&Int::zero()), Int::zero());
    }
}
