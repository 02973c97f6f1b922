//! [`Int`] division and remainder.

use crate::{Error, Int, Result};
use core::ops::{Div, Rem};

impl Int {
    /// Computes `self / rhs`, returning the quotient and remainder.
    ///
    /// The quotient truncates toward zero; the remainder carries the sign of
    /// the dividend (or is zero), so `self == quot * rhs + rem` always holds.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self)> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let (quot, rem) = self.magnitude().div_rem_unchecked(rhs.magnitude());
        Ok((
            Self::from_sign_magnitude(self.sign() * rhs.sign(), quot),
            Self::from_sign_magnitude(self.sign(), rem),
        ))
    }

    /// Computes the quotient of `self / rhs`, or `None` when `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        self.div_rem(rhs).ok().map(|(quot, _)| quot)
    }

    /// Computes the remainder of `self / rhs`, or `None` when `rhs` is zero.
    pub fn checked_rem(&self, rhs: &Self) -> Option<Self> {
        self.div_rem(rhs).ok().map(|(_, rem)| rem)
    }

    /// Computes `self mod rhs` as a non-negative value in `[0, |rhs|)`.
    pub fn rem_euclid(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let rem = self.magnitude().div_rem_unchecked(rhs.magnitude()).1;
        if self.is_negative() && !rem.is_zero() {
            Ok(Self::from(rhs.magnitude().sub(&rem)))
        } else {
            Ok(Self::from(rem))
        }
    }
}

impl Div<&Int> for &Int {
    type Output = Int;

    /// Panics when `rhs` is zero.
    fn div(self, rhs: &Int) -> Int {
        self.checked_div(rhs).expect("division by zero")
    }
}

impl Div<Int> for Int {
    type Output = Int;

    /// Panics when `rhs` is zero.
    fn div(self, rhs: Int) -> Int {
        &self / &rhs
    }
}

impl Rem<&Int> for &Int {
    type Output = Int;

    /// Panics when `rhs` is zero.
    fn rem(self, rhs: &Int) -> Int {
        self.checked_rem(rhs).expect("division by zero")
    }
}

impl Rem<Int> for Int {
    type Output = Int;

    /// Panics when `rhs` is zero.
    fn rem(self, rhs: Int) -> Int {
        &self % &rhs
    }
}
