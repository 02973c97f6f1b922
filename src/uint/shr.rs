//! [`Uint`] right shifts.

use crate::{Limb, Uint};
use core::ops::{Shr, ShrAssign};

impl Uint {
    /// Computes `self >> shift`, discarding the shifted-out bits. Returns
    /// zero when every significant bit is shifted out.
    pub fn shr(&self, shift: u32) -> Self {
        let limb_shift = (shift / Limb::BITS) as usize;
        if limb_shift >= self.nlimbs() {
            return Self::zero();
        }
        let bit_shift = shift % Limb::BITS;
        let mut limbs = self.limbs[limb_shift..].to_vec();
        shr_slice_in_place(&mut limbs, bit_shift);
        Self::from_limbs(limbs)
    }
}

/// Shifts a limb slice right by a sub-limb `shift`, in place.
pub(crate) fn shr_slice_in_place(limbs: &mut [Limb], shift: u32) {
    debug_assert!(shift < Limb::BITS);
    if shift == 0 {
        return;
    }
    let mut carry = Limb::ZERO;
    for limb in limbs.iter_mut().rev() {
        let next_carry = Limb(limb.0 << (Limb::BITS - shift));
        *limb = Limb(limb.0 >> shift | carry.0);
        carry = next_carry;
    }
}

impl Shr<u32> for &Uint {
    type Output = Uint;

    fn shr(self, shift: u32) -> Uint {
        Uint::shr(self, shift)
    }
}

impl Shr<u32> for Uint {
    type Output = Uint;

    fn shr(self, shift: u32) -> Uint {
        Uint::shr(&self, shift)
    }
}

impl ShrAssign<u32> for Uint {
    fn shr_assign(&mut self, shift: u32) {
        *self = Uint::shr(self, shift);
    }
}
