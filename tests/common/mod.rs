//! Conversions between this crate's types and `num-bigint`'s.

#![allow(dead_code)]

use num_bigint::{BigInt, BigUint};
use signed_bigint::{Int, Sign, Uint};

pub fn to_biguint(uint: &Uint) -> BigUint {
    BigUint::from_bytes_be(&uint.to_be_bytes())
}

pub fn to_uint(value: &BigUint) -> Uint {
    Uint::from_be_slice(&value.to_bytes_be())
}

pub fn to_bigint(int: &Int) -> BigInt {
    let sign = match int.sign() {
        Sign::Negative => num_bigint::Sign::Minus,
        Sign::Zero => num_bigint::Sign::NoSign,
        Sign::Positive => num_bigint::Sign::Plus,
    };
    BigInt::from_biguint(sign, to_biguint(int.magnitude()))
}

pub fn to_int(value: &BigInt) -> Int {
    let (sign, magnitude) = value.clone().into_parts();
    let sign = match sign {
        num_bigint::Sign::Minus => Sign::Negative,
        num_bigint::Sign::NoSign => Sign::Zero,
        num_bigint::Sign::Plus => Sign::Positive,
    };
    Int::from_sign_magnitude(sign, to_uint(&magnitude))
}
