//! Random generation of [`Int`] values.

use crate::{Int, Sign, Uint};
use rand_core::RngCore;

impl Int {
    /// Generate a random value whose magnitude lies below `2^bit_length`,
    /// with a uniformly random sign.
    #[cfg_attr(docsrs, doc(cfg(feature = "rand_core")))]
    pub fn random_bits(rng: &mut (impl RngCore + ?Sized), bit_length: u32) -> Self {
        let magnitude = Uint::random_bits(rng, bit_length);
        let sign = Sign::nonzero(rng.next_u32() & 1 == 1);
        Self::from_sign_magnitude(sign, magnitude)
    }
}
