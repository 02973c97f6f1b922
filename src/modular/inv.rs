//! Modular inverses.
//!
//! Odd moduli go through the Savas-Koc Montgomery "almost inverse": a
//! shift-and-subtract phase that produces `a^-1 * 2^k mod p`, followed by
//! Montgomery multiplications stripping the excess power of two. Even moduli
//! use the Lorencz algorithm, which tracks signed working values and handles
//! any modulus.

use super::monty::{pad, MontyMultiplier, MontyParams};
use crate::{Error, Int, Limb, Odd, Result, Uint};
use alloc::vec;

/// Computes `a^-1 mod modulus` for `a` already reduced into
/// `[0, modulus)`. Returns a value in `[0, modulus)`.
pub(crate) fn invert(a: &Uint, modulus: &Uint) -> Result<Uint> {
    if a.is_zero() {
        return Err(Error::NotInvertible);
    }
    if modulus.is_odd() {
        invert_montgomery(a, modulus)
    } else {
        invert_lorencz(a, modulus)
    }
}

/// Montgomery almost-inverse for an odd modulus `p > 1`.
fn invert_montgomery(a: &Uint, p: &Uint) -> Result<Uint> {
    debug_assert!(p.is_odd() && !p.is_one());
    let m = p.nlimbs() as u32 * Limb::BITS;

    let mut u = p.clone();
    let mut v = a.clone();
    let mut r = Uint::zero();
    let mut s = Uint::one();
    let mut k = 0u32;

    // strip initial powers of two, folding the difference into k
    let lsb_u = u.trailing_zeros();
    let lsb_v = v.trailing_zeros();
    if lsb_u > lsb_v {
        u = u.shr(lsb_u);
        v = v.shr(lsb_v);
        r = r.shl(lsb_v);
        k += lsb_u - lsb_v;
    } else {
        u = u.shr(lsb_u);
        v = v.shr(lsb_v);
        s = s.shl(lsb_u);
        k += lsb_v - lsb_u;
    }

    // parallel reduction of (u, r) against (v, s); every shift lands in k
    while !v.is_zero() {
        while u > v {
            u = u.sub(&v);
            let shift = u.trailing_zeros();
            u = u.shr(shift);
            r = r.add(&s);
            s = s.shl(shift);
            k += shift;
        }
        while u <= v {
            v = v.sub(&u);
            if v.is_zero() {
                break;
            }
            let shift = v.trailing_zeros();
            v = v.shr(shift);
            s = s.add(&r);
            r = r.shl(shift);
            k += shift;
        }
    }
    if !u.is_one() {
        return Err(Error::NotInvertible);
    }

    if r >= *p {
        r = r.sub(p);
    }
    let mut r = p.sub(&r);

    // r == a^-1 * 2^k (mod p); cancel the 2^k with Montgomery products,
    // in two steps when k exceeds the radix exponent
    let params = MontyParams::new(Odd(p.clone()));
    let mut mm = MontyMultiplier::new(&params);
    if k > m {
        r = mon_pro(&mut mm, &r, &Uint::one(), p.nlimbs());
        k -= m;
    }
    Ok(mon_pro(&mut mm, &r, &Uint::power_of_two(m - k), p.nlimbs()))
}

/// One Montgomery product over freshly padded operands.
fn mon_pro(mm: &mut MontyMultiplier<'_>, a: &Uint, b: &Uint, m_len: usize) -> Uint {
    let mut out = vec![Limb::ZERO; m_len];
    mm.mul_into(&pad(a, m_len), &pad(b, m_len), &mut out);
    Uint::from_limbs(out)
}

/// Lorencz inverse, usable with any modulus; required for even ones.
///
/// Works on signed values: `u` and `v` are repeatedly aligned to the top
/// modulus bit by left shifts and then combined by an add or subtract chosen
/// from their signs, with `r` and `s` mirroring every step, until one of
/// them collapses to a power of two.
fn invert_lorencz(a: &Uint, modulo: &Uint) -> Result<Uint> {
    let n = modulo.bits();
    let mut u = Int::from(modulo.clone());
    let mut v = Int::from(a.clone());
    let mut r = Int::zero();
    let mut s = Int::one();
    let mut coef_u = 0u32;
    let mut coef_v = 0u32;

    while !is_power_of_two(&u, coef_u) && !is_power_of_two(&v, coef_v) {
        let k = alignment_shift(&u, n);
        if k != 0 {
            u = u.shl_abs(k);
            if coef_u >= coef_v {
                r = r.shl_abs(k);
            } else {
                s = s.shr_abs((coef_v - coef_u).min(k));
                if k > coef_v - coef_u {
                    r = r.shl_abs(k - (coef_v - coef_u));
                }
            }
            coef_u += k;
        }

        let k = alignment_shift(&v, n);
        if k != 0 {
            v = v.shl_abs(k);
            if coef_v >= coef_u {
                s = s.shl_abs(k);
            } else {
                r = r.shr_abs((coef_u - coef_v).min(k));
                if k > coef_u - coef_v {
                    s = s.shl_abs(k - (coef_u - coef_v));
                }
            }
            coef_v += k;
        }

        if u.sign() == v.sign() {
            if coef_u <= coef_v {
                u = u.sub(&v);
                r = r.sub(&s);
            } else {
                v = v.sub(&u);
                s = s.sub(&r);
            }
        } else if coef_u <= coef_v {
            u = u.add(&v);
            r = r.add(&s);
        } else {
            v = v.add(&u);
            s = s.add(&r);
        }
        if u.is_zero() || v.is_zero() {
            return Err(Error::NotInvertible);
        }
    }

    if is_power_of_two(&v, coef_v) {
        r = s;
        if v.sign() != u.sign() {
            u = u.neg();
        }
    }
    let modulo_int = Int::from(modulo.clone());
    if u.bit(n) {
        if r.is_negative() {
            r = r.neg();
        } else {
            r = modulo_int.sub(&r);
        }
    }
    if r.is_negative() {
        r = r.add(&modulo_int);
    }
    debug_assert!(!r.is_negative());
    Ok(r.into_magnitude())
}

/// Does `value` equal `±2^exponent`?
fn is_power_of_two(value: &Int, exponent: u32) -> bool {
    let mag = value.magnitude();
    !mag.is_zero() && mag.bits() == exponent + 1 && mag.trailing_zeros() == exponent
}

/// Number of left shifts aligning the first bit that differs from the sign
/// to the top modulus bit `n - 1`.
fn alignment_shift(value: &Int, n: u32) -> u32 {
    let mut i = n as i64 - 1;
    if value.is_negative() {
        while i >= 0 && value.bit(i as u32) {
            i -= 1;
        }
    } else {
        while i >= 0 && !value.bit(i as u32) {
            i -= 1;
        }
    }
    (n as i64 - 1 - i) as u32
}

#[cfg(test)]
mod tests {
    use super::invert;
    use crate::{Error, Uint};

    fn check_inverse(a: u64, m: u64) {
        let inv = invert(&Uint::from_u64(a % m), &Uint::from_u64(m)).unwrap();
        let product = Uint::from_u64(a)
            .mul(&inv)
            .div_rem_unchecked(&Uint::from_u64(m))
            .1;
        assert_eq!(product, Uint::one(), "a = {a}, m = {m}");
    }

    #[test]
    fn odd_moduli() {
        check_inverse(3, 11);
        check_inverse(1, 17);
        check_inverse(2, 0xFFFF_FFFF_FFFF_FFC5);
        check_inverse(0x1234_5678_9ABC_DEF1, 0xFFFF_FFFF_FFFF_FFC5);
        check_inverse(10, 497);
    }

    #[test]
    fn even_moduli() {
        check_inverse(3, 10);
        check_inverse(7, 100);
        check_inverse(5, 1 << 20);
        check_inverse(0xDEAD_BEEF, 1 << 32);
    }

    #[test]
    fn known_value() {
        assert_eq!(
            invert(&Uint::from_u64(3), &Uint::from_u64(11)).unwrap(),
            Uint::from_u64(4)
        );
    }

    #[test]
    fn not_invertible() {
        assert_eq!(
            invert(&Uint::from_u64(6), &Uint::from_u64(9)),
            Err(Error::NotInvertible)
        );
        assert_eq!(
            invert(&Uint::zero(), &Uint::from_u64(9)),
            Err(Error::NotInvertible)
        );
    }
}
