//! Modular exponentiation for even moduli.
//!
//! An even modulus factors as `q * 2^j` with `q` odd; the two halves are
//! handled by the Montgomery kernel and by arithmetic modulo `2^j`, then
//! recombined with one step of Garner's algorithm.

use super::pow::odd_mod_pow;
use crate::{Int, Odd, Uint};

/// Computes `base^exponent mod modulus` for an even, nonzero modulus.
pub(crate) fn even_mod_pow(base: &Uint, exponent: &Uint, modulus: &Uint) -> Uint {
    debug_assert!(!modulus.is_odd() && !modulus.is_zero());

    // modulus = q * 2^j with q odd
    let j = modulus.trailing_zeros();
    let q = modulus.shr(j);

    let x1 = odd_mod_pow(base, exponent, &Odd(q.clone()));
    let x2 = pow2_mod_pow(base, exponent, j);

    // combine: result == x1 (mod q), == x2 (mod 2^j); with
    // y = (x2 - x1) * q^-1 mod 2^j the value x1 + q * y satisfies both
    let q_inv = inv_mod_pow2(&q, j);
    let mut y = Int::from(x2)
        .sub(&Int::from(x1.clone()))
        .mul(&Int::from(q_inv))
        .rem_pow2_abs(j);
    if y.is_negative() {
        y = y.add(&Int::from(Uint::power_of_two(j)));
    }
    x1.add(&q.mul(y.magnitude()))
}

/// Computes `base^exponent mod 2^j` by square-and-multiply, truncating to
/// `j` bits after every step.
pub(crate) fn pow2_mod_pow(base: &Uint, exponent: &Uint, j: u32) -> Uint {
    debug_assert!(j > 0);
    let mut e = exponent.clone();
    if base.is_odd() {
        // Euler: an odd base is a unit, and the group modulo 2^j has order
        // 2^(j-1), so the exponent reduces first
        e = e.rem_pow2(j - 1);
    }
    let base = base.rem_pow2(j);
    let mut res = Uint::one();
    for i in (0..e.bits()).rev() {
        res = res.mul(&res).rem_pow2(j);
        if e.bit(i) {
            res = res.mul(&base).rem_pow2(j);
        }
    }
    res
}

/// Computes `x^-1 mod 2^n` for odd `x` by lifting one bit per step: bit `i`
/// of the inverse is set exactly when bit `i` of `x * y` is still set.
pub(crate) fn inv_mod_pow2(x: &Uint, n: u32) -> Uint {
    debug_assert!(x.is_odd());
    let x = x.rem_pow2(n);
    let mut y = Uint::one();
    for i in 1..n {
        if x.mul(&y).bit(i) {
            y.set_bit(i);
        }
    }
    y
}
