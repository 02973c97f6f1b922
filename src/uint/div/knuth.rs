//! Schoolbook long division (Knuth TAOCP vol. 2, 4.3.1, algorithm D).

use crate::{
    uint::{shl::shl_slice_into, shr::shr_slice_in_place},
    Limb, Uint, WideWord, Word,
};
use alloc::vec;

/// Divides `a` by `b` with multi-limb long division.
///
/// Requires `a > b` and a divisor of at least two limbs; smaller cases are
/// peeled off by the dispatch in [`super`].
pub(crate) fn div_rem(a: &Uint, b: &Uint) -> (Uint, Uint) {
    let a_len = a.nlimbs();
    let b_len = b.nlimbs();
    debug_assert!(b_len >= 2 && a_len >= b_len);
    let quot_len = a_len - b_len + 1;

    // D1: normalize so the top divisor limb has its high bit set; the digit
    // guesses below divide by that limb and need it as large as possible.
    let shift = b.limbs[b_len - 1].leading_zeros();
    let mut norm_a = vec![Limb::ZERO; a_len + 1];
    let mut norm_b = vec![Limb::ZERO; b_len];
    shl_slice_into(&mut norm_a, &a.limbs, shift);
    shl_slice_into(&mut norm_b, &b.limbs, shift);
    let b_top = norm_b[b_len - 1];
    let b_next = norm_b[b_len - 2];

    let mut quot = vec![Limb::ZERO; quot_len];
    for i in (0..quot_len).rev() {
        let j = i + b_len;

        // D3: guess the quotient digit from the top two dividend limbs.
        let mut guess = if norm_a[j] == b_top {
            Limb::MAX
        } else {
            let dividend = (norm_a[j].0 as WideWord) << Limb::BITS | norm_a[j - 1].0 as WideWord;
            let mut digit = (dividend / b_top.0 as WideWord) as Word;
            let mut rem = dividend % b_top.0 as WideWord;
            // Walk the guess down while it provably overshoots. Once the
            // running remainder outgrows a limb the comparison can never
            // trigger again, so exit right after the final decrement.
            while (digit as WideWord) * (b_next.0 as WideWord)
                > rem << Limb::BITS | norm_a[j - 2].0 as WideWord
            {
                digit -= 1;
                rem += b_top.0 as WideWord;
                if rem > Limb::MAX.0 as WideWord {
                    break;
                }
            }
            Limb(digit)
        };

        // D4: multiply and subtract; D5/D6: the guess can still be one too
        // large, in which case the subtraction borrows and we add back.
        if !guess.is_zero() {
            let borrowed = mul_sub_assign(&mut norm_a[i..=j], &norm_b, guess);
            if borrowed {
                guess = guess.wrapping_sub(Limb::ONE);
                add_back(&mut norm_a[i..=j], &norm_b);
            }
        }
        quot[i] = guess;
    }

    // D8: the remainder sits in the low divisor-length limbs, still shifted.
    shr_slice_in_place(&mut norm_a[..b_len], shift);
    norm_a.truncate(b_len);
    (Uint::from_limbs(quot), Uint::from_limbs(norm_a))
}

/// Computes `a -= b * digit` over `b.len() + 1` limbs of `a`, returning
/// whether the subtraction borrowed out of the top limb.
///
/// The unsigned product carry and the signed subtraction borrow run as two
/// chains, merged limb by limb through a signed double-wide accumulator.
fn mul_sub_assign(a: &mut [Limb], b: &[Limb], digit: Limb) -> bool {
    debug_assert_eq!(a.len(), b.len() + 1);
    let mut product: WideWord = 0;
    let mut borrow: i64 = 0;
    for i in 0..b.len() {
        product += (b[i].0 as WideWord) * (digit.0 as WideWord);
        borrow += a[i].0 as i64 - (product as Word) as i64;
        a[i] = Limb(borrow as Word);
        borrow >>= Limb::BITS;
        product >>= Limb::BITS;
    }
    borrow += a[b.len()].0 as i64 - product as i64;
    a[b.len()] = Limb(borrow as Word);
    borrow >> Limb::BITS != 0
}

/// Compensation step for an overshot digit guess: `a += b`, with the final
/// carry cancelling the earlier borrow in the top limb.
fn add_back(a: &mut [Limb], b: &[Limb]) {
    debug_assert_eq!(a.len(), b.len() + 1);
    let mut carry = Limb::ZERO;
    for i in 0..b.len() {
        let (sum, c) = a[i].carrying_add(b[i], carry);
        a[i] = sum;
        carry = c;
    }
    a[b.len()] = a[b.len()].wrapping_add(carry);
}

#[cfg(test)]
mod tests {
    use super::div_rem;
    use crate::Uint;

    fn check(a: &Uint, b: &Uint) {
        let (q, r) = div_rem(a, b);
        assert!(&r < b, "remainder not reduced");
        assert_eq!(&q.mul(b).add(&r), a, "a != q*b + r");
    }

    #[test]
    fn mersenne_by_fermat() {
        // (2^128 - 1) / (2^64 + 1) = 2^64 - 1 exactly
        let a = Uint::power_of_two(128).sub(&Uint::one());
        let b = Uint::power_of_two(64).add(&Uint::one());
        let (q, r) = div_rem(&a, &b);
        assert_eq!(q, Uint::power_of_two(64).sub(&Uint::one()));
        assert_eq!(r, Uint::zero());
    }

    #[test]
    fn guess_digit_top_limbs_equal() {
        // crafted so the top dividend limb equals the top divisor limb,
        // forcing the all-ones digit guess
        let b = Uint::from_u64(0x8000_0000_0000_0001);
        let a = b.shl(64).sub(&Uint::one());
        check(&a, &b);
    }

    #[test]
    fn long_dividend() {
        let a = Uint::power_of_two(2048).sub(&Uint::from_word(11));
        let b = Uint::power_of_two(192).add(&Uint::from_u64(0xFFFF_FFFF_FFFF));
        check(&a, &b);
    }

    #[test]
    fn identity_on_random_pattern() {
        // deterministic pseudo-random limbs via a multiplicative recurrence
        let mut limbs = alloc::vec::Vec::new();
        let mut x = 0x9E37_79B9u32;
        for _ in 0..40 {
            x = x.wrapping_mul(0x0019_660D).wrapping_add(0x3C6E_F35F);
            limbs.push(crate::Limb(x));
        }
        let a = Uint::from_limbs(limbs.clone());
        let b = Uint::from_limbs(limbs[..7].to_vec());
        check(&a, &b);
    }
}
