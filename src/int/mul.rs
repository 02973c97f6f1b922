//! [`Int`] multiplication.

use crate::Int;
use core::ops::{Mul, MulAssign};

impl Int {
    /// Computes `self * rhs`.
    pub fn mul(&self, rhs: &Self) -> Self {
        Self::from_sign_magnitude(
            self.sign() * rhs.sign(),
            self.magnitude().mul(rhs.magnitude()),
        )
    }
}

impl Mul<&Int> for &Int {
    type Output = Int;

    fn mul(self, rhs: &Int) -> Int {
        Int::mul(self, rhs)
    }
}

impl Mul<Int> for Int {
    type Output = Int;

    fn mul(self, rhs: Int) -> Int {
        Int::mul(&self, &rhs)
    }
}

impl MulAssign<&Int> for Int {
    fn mul_assign(&mut self, rhs: &Int) {
        *self = Int::mul(self, rhs);
    }
}
