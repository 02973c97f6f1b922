//! Signed arithmetic: equivalence with `num_bigint::BigInt` plus fixed
//! division and modular-arithmetic scenarios.

mod common;

use common::{to_bigint, to_biguint, to_int};
use num_bigint::BigUint;
use num_integer::Integer as _;
use proptest::prelude::*;
use signed_bigint::{Error, Int, NonZero, Uint};

fn uint_pow(base: u32, exp: u32) -> Uint {
    let mut result = Uint::one();
    let base = Uint::from_word(base);
    for _ in 0..exp {
        result = result.mul(&base);
    }
    result
}

#[test]
fn mersenne_divided_by_fermat() {
    // (2^128 - 1) = (2^64 + 1) * (2^64 - 1) exactly
    let a = Uint::power_of_two(128).sub(&Uint::one());
    let b = NonZero::new(Uint::power_of_two(64).add(&Uint::one())).unwrap();
    let (quot, rem) = a.div_rem(&b);
    assert_eq!(quot, Uint::power_of_two(64).sub(&Uint::one()));
    assert_eq!(rem, Uint::zero());
}

#[test]
fn huge_power_division_cross_checked() {
    // 10^1000 / 7^300, verified against num-bigint byte for byte
    let a = uint_pow(10, 1000);
    let b = uint_pow(7, 300);
    let (quot, rem) = a.div_rem(&NonZero::new(b.clone()).unwrap());
    assert!(rem < b);

    let a_ref = BigUint::from(10u32).pow(1000);
    let b_ref = BigUint::from(7u32).pow(300);
    let (quot_ref, rem_ref) = a_ref.div_rem(&b_ref);
    assert_eq!(to_biguint(&quot), quot_ref);
    assert_eq!(to_biguint(&rem), rem_ref);
}

#[test]
fn mod_pow_odd_modulus() {
    let result = Int::from(4).mod_pow(&Int::from(13), &Int::from(497)).unwrap();
    assert_eq!(result, Int::from(445));
}

#[test]
fn mod_pow_power_of_two_modulus() {
    // 3^100 = (8 + 1)^50 == 1 + 50*8 + 1225*64 == 977 (mod 2^10)
    let result = Int::from(3)
        .mod_pow(&Int::from(100), &Int::from(1024))
        .unwrap();
    assert_eq!(result, Int::from(977));
    assert_eq!(
        to_biguint(result.magnitude()),
        BigUint::from(3u32).modpow(&BigUint::from(100u32), &BigUint::from(1024u32))
    );
}

#[test]
fn mod_inverse_odd_modulus() {
    assert_eq!(
        Int::from(3).mod_inverse(&Int::from(11)).unwrap(),
        Int::from(4)
    );
}

#[test]
fn mod_inverse_shared_factor_fails() {
    assert_eq!(
        Int::from(6).mod_inverse(&Int::from(9)),
        Err(Error::NotInvertible)
    );
}

#[test]
fn binary_gcd_scenario() {
    assert_eq!(
        Int::from(461_952).gcd(&Int::from(116_298)),
        Int::from(18)
    );
}

prop_compose! {
    fn int()(bytes in any::<Vec<u8>>(), negative in any::<bool>()) -> Int {
        let magnitude = Uint::from_be_slice(&bytes);
        if magnitude.is_zero() {
            Int::zero()
        } else {
            Int::from_sign_magnitude(signed_bigint::Sign::nonzero(negative), magnitude)
        }
    }
}

proptest! {
    #[test]
    fn conversion_roundtrip(a in int()) {
        prop_assert_eq!(&to_int(&to_bigint(&a)), &a);
    }

    #[test]
    fn ring_ops_match_reference(a in int(), b in int()) {
        prop_assert_eq!(to_bigint(&a.add(&b)), to_bigint(&a) + to_bigint(&b));
        prop_assert_eq!(to_bigint(&a.sub(&b)), to_bigint(&a) - to_bigint(&b));
        prop_assert_eq!(to_bigint(&a.mul(&b)), to_bigint(&a) * to_bigint(&b));
        prop_assert_eq!(to_bigint(&a.neg()), -to_bigint(&a));
    }

    #[test]
    fn ordering_matches_reference(a in int(), b in int()) {
        prop_assert_eq!(a.cmp(&b), to_bigint(&a).cmp(&to_bigint(&b)));
    }

    #[test]
    fn div_rem_matches_reference(a in int(), b in int()) {
        prop_assume!(!b.is_zero());
        let (quot, rem) = a.div_rem(&b).unwrap();
        // BigInt division also truncates toward zero
        let (quot_ref, rem_ref) = to_bigint(&a).div_rem(&to_bigint(&b));
        prop_assert_eq!(to_bigint(&quot), quot_ref);
        prop_assert_eq!(to_bigint(&rem), rem_ref);
    }

    #[test]
    fn div_rem_invariants(a in int(), b in int()) {
        prop_assume!(!b.is_zero());
        let (quot, rem) = a.div_rem(&b).unwrap();
        prop_assert_eq!(quot.mul(&b).add(&rem), a.clone());
        prop_assert!(rem.magnitude() < b.magnitude());
        prop_assert!(rem.is_zero() || rem.sign() == a.sign());
    }

    #[test]
    fn rem_euclid_in_range(a in int(), b in int()) {
        prop_assume!(!b.is_zero());
        let rem = a.rem_euclid(&b).unwrap();
        prop_assert!(!rem.is_negative());
        prop_assert!(rem.magnitude() < b.magnitude());
        let diff = a.sub(&rem);
        // b divides a - rem
        prop_assert!(diff.checked_rem(&b).unwrap().is_zero());
    }

    #[test]
    fn gcd_matches_reference(a in int(), b in int()) {
        prop_assert_eq!(to_bigint(&a.gcd(&b)), to_bigint(&a).gcd(&to_bigint(&b)));
    }
}
