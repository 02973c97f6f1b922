//! Random generation of [`Uint`] values.

use crate::{Limb, Uint};
use alloc::vec::Vec;
use rand_core::RngCore;

impl Uint {
    /// Generate a uniformly random value below `2^bit_length`.
    #[cfg_attr(docsrs, doc(cfg(feature = "rand_core")))]
    pub fn random_bits(rng: &mut (impl RngCore + ?Sized), bit_length: u32) -> Self {
        let nlimbs = bit_length.div_ceil(Limb::BITS) as usize;
        let mut limbs = Vec::with_capacity(nlimbs);
        for _ in 0..nlimbs {
            limbs.push(Limb(rng.next_u32()));
        }
        let rem = bit_length % Limb::BITS;
        if rem != 0 {
            if let Some(high) = limbs.last_mut() {
                high.0 &= (1 << rem) - 1;
            }
        }
        Self::from_limbs(limbs)
    }
}
