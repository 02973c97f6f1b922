//! Pure Rust implementation of arbitrary-precision signed integers.
//!
//! # About
//! This library implements signed integers of arbitrary size as a sign plus a
//! heap-allocated little-endian array of 32-bit limbs, with the engineering
//! weight placed on the operations where it matters:
//!
//! - Division: schoolbook long division (Knuth's algorithm D) with a
//!   Burnikel-Ziegler recursive divider kicking in for large divisors.
//! - Modular exponentiation: Montgomery multiplication driving
//!   square-and-multiply and sliding-window evaluation for odd moduli, and a
//!   CRT-style decomposition for even moduli.
//! - Modular inverses: the Savas-Koc Montgomery "almost inverse" for odd
//!   moduli and the Lorencz algorithm for the general case.
//! - Greatest common divisor: binary GCD with an interleaved Euclidean
//!   reduction step for lopsided operands.
//!
//! All operations run in variable time; this crate makes no timing-resistance
//! claims and is not intended for secret-dependent cryptographic use.
//!
//! # Example
//! ```
//! use signed_bigint::Int;
//!
//! let base = Int::from(4);
//! let exponent = Int::from(13);
//! let modulus = Int::from(497);
//! assert_eq!(base.mod_pow(&exponent, &modulus).unwrap(), Int::from(445));
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

extern crate alloc;

mod error;
mod int;
mod limb;
pub mod modular;
mod non_zero;
mod odd;
mod sign;
mod uint;

pub use crate::{
    error::{Error, Result},
    int::Int,
    limb::{Limb, WideWord, Word},
    non_zero::NonZero,
    odd::Odd,
    sign::Sign,
    uint::{gcd::gcd_word, Uint},
};
