//! Montgomery multiplication with a modulus chosen at runtime.

use crate::{uint::cmp::cmp_slice, Limb, Odd, Uint, WideWord, Word};
use alloc::{sync::Arc, vec, vec::Vec};
use core::cmp::Ordering;

/// Parameters derived from an odd modulus `m`, fixing the Montgomery radix
/// `R = 2^(32 * m_len)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MontyParams {
    /// The modulus. Odd, so coprime to the radix.
    modulus: Odd<Uint>,
    /// `-m^-1 mod 2^32`, the per-limb reduction multiplier.
    mod_neg_inv: Limb,
}

impl MontyParams {
    /// Derive the parameters for the given odd modulus.
    pub fn new(modulus: Odd<Uint>) -> Self {
        let mod_neg_inv = mod_neg_inv(modulus.as_ref().limbs[0]);
        Self {
            modulus,
            mod_neg_inv,
        }
    }

    /// The modulus these parameters were derived from.
    pub fn modulus(&self) -> &Odd<Uint> {
        &self.modulus
    }

    /// Number of limbs in the modulus, fixing the width of every buffer in
    /// the Montgomery domain.
    pub(crate) fn nlimbs(&self) -> usize {
        self.modulus.as_ref().nlimbs()
    }
}

/// Computes `-m^-1 mod 2^32` from the lowest modulus limb.
///
/// Lifts the inverse one bit at a time: bit `k` of the inverse is set exactly
/// when the partial product `m * inv` still has bit `k` set.
fn mod_neg_inv(m0: Limb) -> Limb {
    debug_assert!(m0.0 & 1 == 1);
    let mut inv: Word = 1;
    for bit in 1..Limb::BITS {
        if m0.0.wrapping_mul(inv) & (1 << bit) != 0 {
            inv |= 1 << bit;
        }
    }
    Limb(inv.wrapping_neg())
}

/// Montgomery multiplier with a pre-allocated product buffer, reused across
/// the many multiplications of an exponentiation.
pub(crate) struct MontyMultiplier<'a> {
    modulus: &'a [Limb],
    mod_neg_inv: Limb,
    /// `2 * m_len + 1` limbs of product scratch.
    product: Vec<Limb>,
}

impl<'a> MontyMultiplier<'a> {
    pub(crate) fn new(params: &'a MontyParams) -> Self {
        let m_len = params.nlimbs();
        Self {
            modulus: params.modulus.as_ref().as_limbs(),
            mod_neg_inv: params.mod_neg_inv,
            product: vec![Limb::ZERO; 2 * m_len + 1],
        }
    }

    /// Montgomery product: `out = a * b * R^-1 mod m`.
    ///
    /// `a`, `b` and `out` are `m_len`-limb buffers; inputs must be below the
    /// modulus.
    ///
    /// Multiplication and reduction are fused: each row adds `a[i] * b` and
    /// `u * m` in one pass, with the reduction multiplier `u` chosen so the
    /// lowest product limb cancels.
    pub(crate) fn mul_into(&mut self, a: &[Limb], b: &[Limb], out: &mut [Limb]) {
        let m_len = self.modulus.len();
        debug_assert_eq!(a.len(), m_len);
        debug_assert_eq!(b.len(), m_len);
        debug_assert_eq!(out.len(), m_len);

        self.clear_product();
        let mut outer = Limb::ZERO;
        for i in 0..m_len {
            let a_i = a[i];
            let u = self.product[i]
                .wrapping_add(a_i.wrapping_mul(b[0]))
                .wrapping_mul(self.mod_neg_inv);
            let mut carry_mul = Limb::ZERO;
            let mut carry_red = Limb::ZERO;
            for j in 0..m_len {
                let (t, c) = self.product[i + j].mac(a_i, b[j], carry_mul);
                carry_mul = c;
                let (t, c) = t.mac(u, self.modulus[j], carry_red);
                carry_red = c;
                self.product[i + j] = t;
            }
            let sum = self.product[i + m_len].0 as WideWord
                + carry_mul.0 as WideWord
                + carry_red.0 as WideWord
                + outer.0 as WideWord;
            self.product[i + m_len] = Limb(sum as Word);
            outer = Limb((sum >> Limb::BITS) as Word);
        }
        self.product[2 * m_len] = outer;
        self.finish_into(out);
    }

    /// Montgomery squaring: `out = a^2 * R^-1 mod m`.
    ///
    /// Exploits symmetry: each off-diagonal product is computed once and
    /// doubled by a one-bit shift, then the diagonal terms are added, then
    /// the product is reduced. The doubling and diagonal stages each carry
    /// on their own; fusing them would drop the shifted-out bit.
    pub(crate) fn square_into(&mut self, a: &[Limb], out: &mut [Limb]) {
        let m_len = self.modulus.len();
        debug_assert_eq!(a.len(), m_len);
        debug_assert_eq!(out.len(), m_len);

        self.clear_product();
        // off-diagonal products a[i] * a[j] for i < j
        for i in 0..m_len {
            let mut carry = Limb::ZERO;
            for j in (i + 1)..m_len {
                let (t, c) = self.product[i + j].mac(a[i], a[j], carry);
                self.product[i + j] = t;
                carry = c;
            }
            self.product[i + m_len] = carry;
        }
        // double, carrying the top bit of each limb into the next
        let mut shift_carry = Limb::ZERO;
        for limb in self.product[..2 * m_len].iter_mut() {
            let last_left_bit = Limb(limb.0 >> (Limb::BITS - 1));
            *limb = Limb(limb.0 << 1 | shift_carry.0);
            shift_carry = last_left_bit;
        }
        self.product[2 * m_len] = shift_carry;
        // diagonal terms a[i]^2 at the even positions
        let mut carry = Limb::ZERO;
        for i in 0..m_len {
            let (t, c) = self.product[2 * i].mac(a[i], a[i], carry);
            self.product[2 * i] = t;
            let sum = self.product[2 * i + 1].0 as WideWord + c.0 as WideWord;
            self.product[2 * i + 1] = Limb(sum as Word);
            carry = Limb((sum >> Limb::BITS) as Word);
        }
        self.product[2 * m_len] = self.product[2 * m_len].wrapping_add(carry);

        self.reduce();
        self.finish_into(out);
    }

    /// Montgomery reduction of the full product buffer: divides by `R`
    /// modulo `m`, leaving the result in the upper half.
    fn reduce(&mut self) {
        let m_len = self.modulus.len();
        let mut outer = Limb::ZERO;
        for i in 0..m_len {
            let u = self.product[i].wrapping_mul(self.mod_neg_inv);
            let mut carry = Limb::ZERO;
            for j in 0..m_len {
                let (t, c) = self.product[i + j].mac(u, self.modulus[j], carry);
                self.product[i + j] = t;
                carry = c;
            }
            let sum = self.product[i + m_len].0 as WideWord
                + carry.0 as WideWord
                + outer.0 as WideWord;
            self.product[i + m_len] = Limb(sum as Word);
            outer = Limb((sum >> Limb::BITS) as Word);
        }
        let top = self.product[2 * m_len].wrapping_add(outer);
        self.product[2 * m_len] = top;
    }

    /// Reads the reduced value out of the upper product limbs, subtracting
    /// the modulus once if the value still reaches it.
    fn finish_into(&mut self, out: &mut [Limb]) {
        let m_len = self.modulus.len();
        let upper = &self.product[m_len..2 * m_len];
        let needs_sub = !self.product[2 * m_len].is_zero()
            || cmp_slice(upper, self.modulus) != Ordering::Less;
        out.copy_from_slice(upper);
        if needs_sub {
            // at most 2m before subtraction; the top limb absorbs the borrow
            crate::uint::sub::sub_assign_slice(out, self.modulus);
        }
        debug_assert!(cmp_slice(out, self.modulus) == Ordering::Less);
    }

    fn clear_product(&mut self) {
        self.product.fill(Limb::ZERO);
    }
}

/// Copies a reduced value into an `m_len`-limb working buffer.
pub(crate) fn pad(value: &Uint, m_len: usize) -> Vec<Limb> {
    debug_assert!(value.nlimbs() <= m_len);
    let mut buf = vec![Limb::ZERO; m_len];
    buf[..value.nlimbs()].copy_from_slice(value.as_limbs());
    buf
}

/// An integer in Montgomery form, i.e. `x * R mod m`.
///
/// Multiplication and squaring stay in the Montgomery domain, where the
/// reduction needs no trial division; [`MontyForm::retrieve`] converts back.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MontyForm {
    value: Uint,
    params: Arc<MontyParams>,
}

impl MontyForm {
    /// Converts `integer` into Montgomery form modulo the parameters'
    /// modulus.
    pub fn new(integer: &Uint, params: Arc<MontyParams>) -> Self {
        let m = params.modulus().as_ref();
        let radix_bits = params.nlimbs() as u32 * Limb::BITS;
        let value = integer.shl(radix_bits).div_rem_unchecked(m).1;
        Self { value, params }
    }

    /// The parameters this value was reduced with.
    pub fn params(&self) -> &MontyParams {
        &self.params
    }

    /// The raw Montgomery-domain value.
    pub fn as_montgomery(&self) -> &Uint {
        &self.value
    }

    /// Converts back out of Montgomery form, returning a value in `[0, m)`.
    pub fn retrieve(&self) -> Uint {
        let m_len = self.params.nlimbs();
        let mut mm = MontyMultiplier::new(&self.params);
        let mut one = vec![Limb::ZERO; m_len];
        one[0] = Limb::ONE;
        let mut out = vec![Limb::ZERO; m_len];
        mm.mul_into(&pad(&self.value, m_len), &one, &mut out);
        Uint::from_limbs(out)
    }

    /// Montgomery-domain multiplication.
    pub fn mul(&self, rhs: &Self) -> Self {
        debug_assert_eq!(self.params, rhs.params);
        let m_len = self.params.nlimbs();
        let mut mm = MontyMultiplier::new(&self.params);
        let mut out = vec![Limb::ZERO; m_len];
        mm.mul_into(&pad(&self.value, m_len), &pad(&rhs.value, m_len), &mut out);
        Self {
            value: Uint::from_limbs(out),
            params: self.params.clone(),
        }
    }

    /// Montgomery-domain squaring.
    pub fn square(&self) -> Self {
        let m_len = self.params.nlimbs();
        let mut mm = MontyMultiplier::new(&self.params);
        let mut out = vec![Limb::ZERO; m_len];
        mm.square_into(&pad(&self.value, m_len), &mut out);
        Self {
            value: Uint::from_limbs(out),
            params: self.params.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{mod_neg_inv, MontyForm, MontyParams};
    use crate::{Limb, Odd, Uint};
    use alloc::sync::Arc;

    fn params(m: u64) -> Arc<MontyParams> {
        Arc::new(MontyParams::new(Odd::new(Uint::from_u64(m)).unwrap()))
    }

    #[test]
    fn neg_inv_is_inverse() {
        for m0 in [1u32, 3, 5, 0xFFFF_FFFF, 0x8000_0001, 123_456_789] {
            let n = mod_neg_inv(Limb(m0));
            // m0 * n == -1 (mod 2^32)
            assert_eq!(m0.wrapping_mul(n.0), u32::MAX, "bad inverse for {m0}");
        }
    }

    #[test]
    fn round_trip() {
        let p = params(497);
        for x in [0u64, 1, 2, 255, 400, 496] {
            let m = MontyForm::new(&Uint::from_u64(x), p.clone());
            assert_eq!(m.retrieve(), Uint::from_u64(x));
        }
    }

    #[test]
    fn mul_matches_plain_arithmetic() {
        let p = params(0xFFFF_FFFF_FFFF_FFC5); // odd, two limbs
        let a = Uint::from_u64(0x1234_5678_9ABC_DEF1);
        let b = Uint::from_u64(0x0FED_CBA9_8765_4321);
        let ma = MontyForm::new(&a, p.clone());
        let mb = MontyForm::new(&b, p.clone());
        let expected = a
            .mul(&b)
            .div_rem_unchecked(p.modulus().as_ref())
            .1;
        assert_eq!(ma.mul(&mb).retrieve(), expected);
    }

    #[test]
    fn square_matches_mul() {
        let p = params(0xABCD_EF01_2345_6789 | 1);
        let a = Uint::from_u64(0x1111_2222_3333_4444);
        let m = MontyForm::new(&a, p);
        assert_eq!(m.square(), m.mul(&m));
    }
}
