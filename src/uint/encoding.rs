//! Byte-level encoding of [`Uint`] values.

use crate::{Limb, Uint, Word};
use alloc::vec::Vec;

impl Uint {
    /// Decode a big-endian byte slice of any length.
    pub fn from_be_slice(bytes: &[u8]) -> Self {
        let mut limbs = Vec::with_capacity(bytes.len().div_ceil(Limb::BYTES));
        for chunk in bytes.rchunks(Limb::BYTES) {
            let mut word: Word = 0;
            for &byte in chunk {
                word = word << 8 | byte as Word;
            }
            limbs.push(Limb(word));
        }
        Self::from_limbs(limbs)
    }

    /// Encode to big-endian bytes without leading zeroes; the value zero
    /// encodes as an empty vector.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.nlimbs() * Limb::BYTES);
        for limb in self.limbs.iter().rev() {
            out.extend_from_slice(&limb.0.to_be_bytes());
        }
        let skip = out.iter().take_while(|&&byte| byte == 0).count();
        out.drain(..skip);
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::Uint;

    #[test]
    fn decode_unaligned_length() {
        let n = Uint::from_be_slice(&[0x01, 0x02, 0x03, 0x04, 0x05]);
        assert_eq!(n, Uint::from_u64(0x01_0203_0405));
    }

    #[test]
    fn decode_ignores_leading_zeroes() {
        assert_eq!(Uint::from_be_slice(&[0, 0, 0, 7]), Uint::from_word(7));
        assert_eq!(Uint::from_be_slice(&[]), Uint::zero());
    }

    #[test]
    fn round_trip() {
        let n = Uint::from_u64(0xDEAD_BEEF_0102_0304);
        assert_eq!(Uint::from_be_slice(&n.to_be_bytes()), n);
        assert!(Uint::zero().to_be_bytes().is_empty());
    }
}
