//! [`Uint`] addition.

use crate::{Limb, Uint};
use alloc::vec;
use core::ops::{Add, AddAssign};

impl Uint {
    /// Computes `self + rhs`.
    pub fn add(&self, rhs: &Self) -> Self {
        let (a, b) = if self.nlimbs() >= rhs.nlimbs() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let mut limbs = vec![Limb::ZERO; a.nlimbs() + 1];
        limbs[..a.nlimbs()].copy_from_slice(&a.limbs);
        let carry = add_assign_slice(&mut limbs[..a.nlimbs()], &b.limbs);
        limbs[a.nlimbs()] = carry;
        Self::from_limbs(limbs)
    }
}

/// Adds `rhs` into the low limbs of `acc`, propagating the carry through the
/// rest of `acc` and returning the final carry.
///
/// Requires `acc.len() >= rhs.len()`.
pub(crate) fn add_assign_slice(acc: &mut [Limb], rhs: &[Limb]) -> Limb {
    debug_assert!(acc.len() >= rhs.len());
    let mut carry = Limb::ZERO;
    for i in 0..rhs.len() {
        let (sum, c) = acc[i].carrying_add(rhs[i], carry);
        acc[i] = sum;
        carry = c;
    }
    for limb in acc[rhs.len()..].iter_mut() {
        if carry.is_zero() {
            break;
        }
        let (sum, c) = limb.carrying_add(carry, Limb::ZERO);
        *limb = sum;
        carry = c;
    }
    carry
}

impl Add<&Uint> for &Uint {
    type Output = Uint;

    fn add(self, rhs: &Uint) -> Uint {
        Uint::add(self, rhs)
    }
}

impl Add<Uint> for Uint {
    type Output = Uint;

    fn add(self, rhs: Uint) -> Uint {
        Uint::add(&self, &rhs)
    }
}

impl Add<&Uint> for Uint {
    type Output = Uint;

    fn add(self, rhs: &Uint) -> Uint {
        Uint::add(&self, rhs)
    }
}

impl AddAssign<&Uint> for Uint {
    fn add_assign(&mut self, rhs: &Uint) {
        *self = Uint::add(self, rhs);
    }
}
