//! [`Uint`] left shifts.

use crate::{Limb, Uint};
use alloc::vec;
use core::ops::{Shl, ShlAssign};

impl Uint {
    /// Computes `self << shift`. The value grows as needed; shifts never
    /// overflow.
    pub fn shl(&self, shift: u32) -> Self {
        if self.is_zero() || shift == 0 {
            return self.clone();
        }
        let limb_shift = (shift / Limb::BITS) as usize;
        let bit_shift = shift % Limb::BITS;
        let mut limbs = vec![Limb::ZERO; self.nlimbs() + limb_shift + 1];
        shl_slice_into(&mut limbs[limb_shift..], &self.limbs, bit_shift);
        Self::from_limbs(limbs)
    }
}

/// Writes `src << shift` into `dst` for a sub-limb `shift`.
///
/// `dst` must hold at least `src.len()` limbs; when it is exactly that long,
/// the shift must not carry out of the top limb.
pub(crate) fn shl_slice_into(dst: &mut [Limb], src: &[Limb], shift: u32) {
    debug_assert!(shift < Limb::BITS);
    debug_assert!(dst.len() >= src.len());
    if shift == 0 {
        dst[..src.len()].copy_from_slice(src);
        return;
    }
    let mut carry = Limb::ZERO;
    for i in 0..src.len() {
        dst[i] = Limb(src[i].0 << shift | carry.0);
        carry = Limb(src[i].0 >> (Limb::BITS - shift));
    }
    if dst.len() > src.len() {
        dst[src.len()] = carry;
    } else {
        debug_assert!(carry.is_zero());
    }
}

impl Shl<u32> for &Uint {
    type Output = Uint;

    fn shl(self, shift: u32) -> Uint {
        Uint::shl(self, shift)
    }
}

impl Shl<u32> for Uint {
    type Output = Uint;

    fn shl(self, shift: u32) -> Uint {
        Uint::shl(&self, shift)
    }
}

impl ShlAssign<u32> for Uint {
    fn shl_assign(&mut self, shift: u32) {
        *self = Uint::shl(self, shift);
    }
}
