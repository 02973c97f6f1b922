//! Burnikel-Ziegler recursive division.
//!
//! Splits the dividend into blocks the size of the divisor and divides block
//! pairs recursively, halving the divisor at each level until the schoolbook
//! base case takes over. Asymptotically faster than algorithm D once the
//! divisor is large enough to amortize the recursion overhead.

use super::schoolbook_div_rem;
use crate::{Limb, Uint};
use alloc::vec;
use core::cmp::Ordering;

/// Divisor length in limbs at which the recursive divider takes over.
pub(crate) const THRESHOLD: usize = 80;

/// Divides `a` by `b` block-wise. Requires `a >= b` and
/// `b.nlimbs() >= THRESHOLD`.
pub(crate) fn div_rem(a: &Uint, b: &Uint) -> (Uint, Uint) {
    let s = b.nlimbs();
    debug_assert!(s >= THRESHOLD && a >= b);

    // Block geometry: m is the smallest power of two above s / THRESHOLD,
    // j * m limbs cover the divisor, and sigma aligns the divisor's top bit
    // with the top of its block.
    let ratio = (s / THRESHOLD) as u32;
    let m = 1usize << (u32::BITS - ratio.leading_zeros());
    let j = s.div_ceil(m);
    let n = j * m;
    let n_bits = n as u64 * Limb::BITS as u64;
    let sigma = (n_bits - b.bits() as u64) as u32;
    let a_sh = a.shl(sigma);
    let b_sh = b.shl(sigma);

    // t blocks hold the shifted dividend plus one extra bit.
    let t = (((a_sh.bits() as u64 + n_bits) / n_bits) as usize).max(2);

    // Seed with the two most significant blocks, then fold in one block per
    // round, dividing a 2-block value by the 1-block divisor each time.
    let mut z = join(&a_sh.block(t - 1, n), &a_sh.block(t - 2, n), n);
    let mut quotient = Uint::zero();
    for i in (1..t - 1).rev() {
        let (qi, ri) = divide_2n_1n(&z, &b_sh, n);
        z = join(&ri, &a_sh.block(i - 1, n), n);
        quotient = quotient.add(&qi.shl((n * i) as u32 * Limb::BITS));
    }
    let (q0, r0) = divide_2n_1n(&z, &b_sh, n);
    quotient = quotient.add(&q0);

    (quotient, r0.shr(sigma))
}

/// Divides a dividend of at most `2n` limbs by an `n`-limb divisor, given
/// that the quotient fits in `n` limbs.
fn divide_2n_1n(a: &Uint, b: &Uint, n: usize) -> (Uint, Uint) {
    if n % 2 != 0 || n < THRESHOLD {
        return schoolbook_div_rem(a, b);
    }
    let half = n / 2;
    let half_bits = half as u32 * Limb::BITS;

    // View a as four half-blocks [a1, a2, a3, a4]; divide [a1, a2, a3] first
    // and fold a4 into its remainder for the second round.
    let a_upper = a.shr(half_bits);
    let a4 = a.lower(half);
    let (q1, r1) = divide_3n_2n(&a_upper, b, half);
    let (q2, r2) = divide_3n_2n(&join(&r1, &a4, half), b, half);
    (join(&q1, &q2, half), r2)
}

/// Divides a dividend of at most `3 * half` limbs by a `2 * half`-limb
/// divisor, given that the quotient fits in `half` limbs.
fn divide_3n_2n(a: &Uint, b: &Uint, half: usize) -> (Uint, Uint) {
    let half_bits = half as u32 * Limb::BITS;
    let a12 = a.shr(half_bits);
    let b1 = b.shr(half_bits);
    let b2 = b.lower(half);

    // Only the single topmost half-block of a decides the branch; when it
    // reaches b1 the quotient saturates, even if [a1, a2] is still below
    // [b1, b2].
    let a1 = a.shr(2 * half_bits);
    let (mut q, r1, d) = if a1.cmp(&b1) == Ordering::Less {
        // a1 < b1, so dividing [a1, a2] by b1 fits a half-block quotient
        let (q, r1) = divide_2n_1n(&a12, &b1, half);
        let d = q.mul(&b2);
        (q, r1, d)
    } else {
        // quotient saturates at 2^(32 * half) - 1;
        // r1 = a12 - b1 * 2^(32 * half) + b1
        let q = Uint::ones(half);
        let r1 = a12.add(&b1).sub(&b1.shl(half_bits));
        let d = b2.shl(half_bits).sub(&b2);
        (q, r1, d)
    };

    // r = r1 * 2^(32 * half) + a3 - d, deferring the subtraction until the
    // value is known to be non-negative. The compensation loop runs at most
    // twice.
    let mut r = join(&r1, &a.lower(half), half);
    while r < d {
        r = r.add(b);
        q = q.sub(&Uint::one());
    }
    (q, r.sub(&d))
}

/// Computes `high * 2^(32 * block_len) + low` for `low` of at most
/// `block_len` limbs.
fn join(high: &Uint, low: &Uint, block_len: usize) -> Uint {
    debug_assert!(low.nlimbs() <= block_len);
    if high.is_zero() {
        return low.clone();
    }
    let mut limbs = vec![Limb::ZERO; block_len + high.nlimbs()];
    limbs[..low.nlimbs()].copy_from_slice(&low.limbs);
    limbs[block_len..].copy_from_slice(&high.limbs);
    Uint::from_limbs(limbs)
}
