//! [`Uint`] division operations.

pub(crate) mod burnikel_ziegler;
pub(crate) mod knuth;

use crate::{NonZero, Uint};
use core::{
    cmp::Ordering,
    ops::{Div, DivAssign, Rem, RemAssign},
};

impl Uint {
    /// Computes `self / rhs`, returning the quotient and remainder.
    ///
    /// Dispatches on the divisor size: single limb divisors use a word-wide
    /// running remainder, large divisors go through the Burnikel-Ziegler
    /// recursion, everything in between is schoolbook long division.
    pub fn div_rem(&self, rhs: &NonZero<Uint>) -> (Self, Self) {
        self.div_rem_unchecked(rhs.as_ref())
    }

    /// Computes `self % rhs`, returning the remainder.
    pub fn rem(&self, rhs: &NonZero<Uint>) -> Self {
        self.div_rem(rhs).1
    }

    /// Division dispatch for callers that already hold a nonzero divisor.
    pub(crate) fn div_rem_unchecked(&self, rhs: &Uint) -> (Uint, Uint) {
        debug_assert!(!rhs.is_zero());
        if rhs.nlimbs() >= burnikel_ziegler::THRESHOLD && self >= rhs {
            burnikel_ziegler::div_rem(self, rhs)
        } else {
            schoolbook_div_rem(self, rhs)
        }
    }
}

/// Schoolbook division entry, also serving as the base case of the recursive
/// divider. Handles the trivial orderings before committing to Knuth D.
pub(crate) fn schoolbook_div_rem(a: &Uint, b: &Uint) -> (Uint, Uint) {
    match a.cmp(b) {
        Ordering::Less => (Uint::zero(), a.clone()),
        Ordering::Equal => (Uint::one(), Uint::zero()),
        Ordering::Greater => {
            if b.nlimbs() == 1 {
                let (quot, rem) = super::div_limb::div_rem_limb(a, b.limbs[0]);
                (quot, Uint::from_word(rem.0))
            } else {
                knuth::div_rem(a, b)
            }
        }
    }
}

impl Div<&NonZero<Uint>> for &Uint {
    type Output = Uint;

    fn div(self, rhs: &NonZero<Uint>) -> Uint {
        self.div_rem(rhs).0
    }
}

impl Div<&NonZero<Uint>> for Uint {
    type Output = Uint;

    fn div(self, rhs: &NonZero<Uint>) -> Uint {
        self.div_rem(rhs).0
    }
}

impl DivAssign<&NonZero<Uint>> for Uint {
    fn div_assign(&mut self, rhs: &NonZero<Uint>) {
        *self = self.div_rem(rhs).0;
    }
}

impl Rem<&NonZero<Uint>> for &Uint {
    type Output = Uint;

    fn rem(self, rhs: &NonZero<Uint>) -> Uint {
        Uint::rem(self, rhs)
    }
}

impl Rem<&NonZero<Uint>> for Uint {
    type Output = Uint;

    fn rem(self, rhs: &NonZero<Uint>) -> Uint {
        Uint::rem(&self, rhs)
    }
}

impl RemAssign<&NonZero<Uint>> for Uint {
    fn rem_assign(&mut self, rhs: &NonZero<Uint>) {
        *self = Uint::rem(self, rhs);
    }
}
