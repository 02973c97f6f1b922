//! [`Uint`] subtraction.

use crate::{Limb, Uint};
use core::ops::{Sub, SubAssign};

impl Uint {
    /// Computes `self - rhs`, returning `None` if the result would be
    /// negative.
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        if self < rhs {
            return None;
        }
        Some(self.sub(rhs))
    }

    /// Computes `self - rhs`.
    ///
    /// Panics when `rhs > self`; magnitudes cannot go negative.
    pub fn sub(&self, rhs: &Self) -> Self {
        let mut limbs = self.limbs.clone();
        let borrow = sub_assign_slice(&mut limbs, &rhs.limbs);
        assert!(borrow.is_zero(), "attempt to subtract with underflow");
        Self::from_limbs(limbs)
    }
}

/// Subtracts `rhs` from the low limbs of `acc`, propagating the borrow
/// through the rest of `acc` and returning the final borrow.
///
/// Requires `acc.len() >= rhs.len()`.
pub(crate) fn sub_assign_slice(acc: &mut [Limb], rhs: &[Limb]) -> Limb {
    debug_assert!(acc.len() >= rhs.len());
    let mut borrow = Limb::ZERO;
    for i in 0..rhs.len() {
        let (diff, b) = acc[i].borrowing_sub(rhs[i], borrow);
        acc[i] = diff;
        borrow = b;
    }
    for limb in acc[rhs.len()..].iter_mut() {
        if borrow.is_zero() {
            break;
        }
        let (diff, b) = limb.borrowing_sub(borrow, Limb::ZERO);
        *limb = diff;
        borrow = b;
    }
    borrow
}

impl Sub<&Uint> for &Uint {
    type Output = Uint;

    fn sub(self, rhs: &Uint) -> Uint {
        Uint::sub(self, rhs)
    }
}

impl Sub<Uint> for Uint {
    type Output = Uint;

    fn sub(self, rhs: Uint) -> Uint {
        Uint::sub(&self, &rhs)
    }
}

impl Sub<&Uint> for Uint {
    type Output = Uint;

    fn sub(self, rhs: &Uint) -> Uint {
        Uint::sub(&self, rhs)
    }
}

impl SubAssign<&Uint> for Uint {
    fn sub_assign(&mut self, rhs: &Uint) {
        *self = Uint::sub(self, rhs);
    }
}
