//! Heap-allocated unsigned big integers.

pub(crate) mod add;
pub(crate) mod bits;
pub(crate) mod cmp;
pub(crate) mod div;
pub(crate) mod div_limb;
pub(crate) mod encoding;
pub(crate) mod gcd;
pub(crate) mod mul;
pub(crate) mod shl;
pub(crate) mod shr;
pub(crate) mod sub;

#[cfg(feature = "rand_core")]
mod rand;

use crate::Limb;
use alloc::{vec, vec::Vec};
use core::fmt;

/// Heap-allocated unsigned big integer, also serving as the magnitude of an
/// [`Int`][`crate::Int`].
///
/// Limbs are stored least significant first. The representation is always
/// normalized: the most significant limb is nonzero, and the value zero has
/// no limbs at all. Values grow and shrink as needed and never wrap.
#[derive(Clone, Default, Eq, Hash, PartialEq)]
pub struct Uint {
    /// Little-endian limbs; `limbs.last() != Some(&Limb::ZERO)`.
    pub(crate) limbs: Vec<Limb>,
}

impl Uint {
    /// Get the value `0`.
    pub const fn zero() -> Self {
        Self { limbs: Vec::new() }
    }

    /// Get the value `1`.
    pub fn one() -> Self {
        Self::from_word(1)
    }

    /// Create a [`Uint`] from a single [`Word`][`crate::Word`].
    pub fn from_word(word: u32) -> Self {
        if word == 0 {
            Self::zero()
        } else {
            Self {
                limbs: vec![Limb(word)],
            }
        }
    }

    /// Create a [`Uint`] from a `u64`.
    pub fn from_u64(value: u64) -> Self {
        let mut ret = Self {
            limbs: vec![Limb(value as u32), Limb((value >> Limb::BITS) as u32)],
        };
        ret.normalize();
        ret
    }

    /// Create a [`Uint`] from little-endian limbs, stripping high zero limbs.
    pub fn from_limbs(limbs: Vec<Limb>) -> Self {
        let mut ret = Self { limbs };
        ret.normalize();
        ret
    }

    /// Returns the value `2^exponent`.
    pub fn power_of_two(exponent: u32) -> Self {
        let mut ret = Self::zero();
        ret.set_bit(exponent);
        ret
    }

    /// Returns the value `2^(32·n) - 1`, i.e. `n` limbs of all ones.
    pub(crate) fn ones(n: usize) -> Self {
        Self {
            limbs: vec![Limb::MAX; n],
        }
    }

    /// Number of significant limbs; zero for the value zero.
    pub fn nlimbs(&self) -> usize {
        self.limbs.len()
    }

    /// Borrow the limbs of this value.
    pub fn as_limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// Is this [`Uint`] equal to zero?
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Is this [`Uint`] equal to one?
    pub fn is_one(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == Limb::ONE
    }

    /// Is this [`Uint`] odd?
    pub fn is_odd(&self) -> bool {
        self.limbs.first().is_some_and(|limb| limb.0 & 1 == 1)
    }

    /// Strip high zero limbs after an operation that may have produced them.
    pub(crate) fn normalize(&mut self) {
        while self.limbs.last() == Some(&Limb::ZERO) {
            self.limbs.pop();
        }
    }
}

impl num_traits::Zero for Uint {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        Uint::is_zero(self)
    }
}

impl num_traits::One for Uint {
    fn one() -> Self {
        Self::one()
    }

    fn is_one(&self) -> bool {
        Uint::is_one(self)
    }
}

impl From<u32> for Uint {
    fn from(value: u32) -> Self {
        Self::from_word(value)
    }
}

impl From<u64> for Uint {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl fmt::Debug for Uint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint(0x{self:x})")
    }
}

impl fmt::LowerHex for Uint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.limbs.is_empty() {
            return write!(f, "0");
        }
        let mut iter = self.limbs.iter().rev();
        if let Some(high) = iter.next() {
            write!(f, "{:x}", high.0)?;
        }
        for limb in iter {
            write!(f, "{:08x}", limb.0)?;
        }
        Ok(())
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::Zeroize for Uint {
    fn zeroize(&mut self) {
        zeroize::Zeroize::zeroize(&mut self.limbs);
    }
}
