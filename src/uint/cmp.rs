//! [`Uint`] comparisons.

use crate::{Limb, Uint};
use core::cmp::Ordering;

/// Compare two little-endian limb slices, ignoring high zero limbs.
pub(crate) fn cmp_slice(lhs: &[Limb], rhs: &[Limb]) -> Ordering {
    let lhs_len = significant_limbs(lhs);
    let rhs_len = significant_limbs(rhs);
    match lhs_len.cmp(&rhs_len) {
        Ordering::Equal => {}
        other => return other,
    }
    for i in (0..lhs_len).rev() {
        match lhs[i].cmp(&rhs[i]) {
            Ordering::Equal => {}
            other => return other,
        }
    }
    Ordering::Equal
}

fn significant_limbs(limbs: &[Limb]) -> usize {
    let mut len = limbs.len();
    while len > 0 && limbs[len - 1].is_zero() {
        len -= 1;
    }
    len
}

impl Ord for Uint {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_slice(&self.limbs, &other.limbs)
    }
}

impl PartialOrd for Uint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
