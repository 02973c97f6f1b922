//! [`Uint`] multiplication.

use crate::{Limb, Uint};
use alloc::vec;
use core::ops::{Mul, MulAssign};

impl Uint {
    /// Computes `self * rhs` with the schoolbook algorithm.
    pub fn mul(&self, rhs: &Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }
        let mut limbs = vec![Limb::ZERO; self.nlimbs() + rhs.nlimbs()];
        for (i, &a) in self.limbs.iter().enumerate() {
            let mut carry = Limb::ZERO;
            for (j, &b) in rhs.limbs.iter().enumerate() {
                let (lo, hi) = limbs[i + j].mac(a, b, carry);
                limbs[i + j] = lo;
                carry = hi;
            }
            limbs[i + rhs.nlimbs()] = carry;
        }
        Self::from_limbs(limbs)
    }

    /// Computes `self * rhs` for a single-limb multiplier.
    pub fn mul_limb(&self, rhs: Limb) -> Self {
        if rhs.is_zero() {
            return Self::zero();
        }
        let mut limbs = vec![Limb::ZERO; self.nlimbs() + 1];
        let mut carry = Limb::ZERO;
        for (i, &a) in self.limbs.iter().enumerate() {
            let (lo, hi) = Limb::ZERO.mac(a, rhs, carry);
            limbs[i] = lo;
            carry = hi;
        }
        limbs[self.nlimbs()] = carry;
        Self::from_limbs(limbs)
    }
}

impl Mul<&Uint> for &Uint {
    type Output = Uint;

    fn mul(self, rhs: &Uint) -> Uint {
        Uint::mul(self, rhs)
    }
}

impl Mul<Uint> for Uint {
    type Output = Uint;

    fn mul(self, rhs: Uint) -> Uint {
        Uint::mul(&self, &rhs)
    }
}

impl Mul<&Uint> for Uint {
    type Output = Uint;

    fn mul(self, rhs: &Uint) -> Uint {
        Uint::mul(&self, rhs)
    }
}

impl MulAssign<&Uint> for Uint {
    fn mul_assign(&mut self, rhs: &Uint) {
        *self = Uint::mul(self, rhs);
    }
}
