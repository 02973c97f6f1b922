//! [`Uint`] division by a single limb.

use crate::{Limb, NonZero, Uint, WideWord, Word};
use alloc::vec;

impl Uint {
    /// Computes `self / rhs` for a single-limb divisor, returning the
    /// quotient and remainder.
    pub fn div_rem_limb(&self, rhs: NonZero<Limb>) -> (Self, Limb) {
        div_rem_limb(self, rhs.get())
    }

    /// Computes `self % rhs` for a single-limb divisor.
    pub fn rem_limb(&self, rhs: NonZero<Limb>) -> Limb {
        rem_limb(self, rhs.get())
    }
}

/// Long division by one limb: walk the limbs from most significant down,
/// carrying a double-wide running remainder.
pub(crate) fn div_rem_limb(u: &Uint, divisor: Limb) -> (Uint, Limb) {
    debug_assert!(!divisor.is_zero());
    let mut quot = vec![Limb::ZERO; u.nlimbs()];
    let mut rem: WideWord = 0;
    for (i, limb) in u.limbs.iter().enumerate().rev() {
        let cur = rem << Limb::BITS | limb.0 as WideWord;
        quot[i] = Limb((cur / divisor.0 as WideWord) as Word);
        rem = cur % divisor.0 as WideWord;
    }
    (Uint::from_limbs(quot), Limb(rem as Word))
}

/// Remainder-only variant of [`div_rem_limb`].
pub(crate) fn rem_limb(u: &Uint, divisor: Limb) -> Limb {
    debug_assert!(!divisor.is_zero());
    let mut rem: WideWord = 0;
    for limb in u.limbs.iter().rev() {
        let cur = rem << Limb::BITS | limb.0 as WideWord;
        rem = cur % divisor.0 as WideWord;
    }
    Limb(rem as Word)
}
