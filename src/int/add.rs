//! [`Int`] addition, subtraction and negation.

use crate::{Int, Sign};
use core::{
    cmp::Ordering,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

impl Int {
    /// Computes `self + rhs`.
    pub fn add(&self, rhs: &Self) -> Self {
        match (self.sign(), rhs.sign()) {
            (Sign::Zero, _) => rhs.clone(),
            (_, Sign::Zero) => self.clone(),
            (lhs_sign, rhs_sign) if lhs_sign == rhs_sign => {
                Self::from_sign_magnitude(lhs_sign, self.magnitude().add(rhs.magnitude()))
            }
            // opposite signs: the larger magnitude wins
            _ => match self.magnitude().cmp(rhs.magnitude()) {
                Ordering::Greater => Self::from_sign_magnitude(
                    self.sign(),
                    self.magnitude().sub(rhs.magnitude()),
                ),
                Ordering::Less => Self::from_sign_magnitude(
                    rhs.sign(),
                    rhs.magnitude().sub(self.magnitude()),
                ),
                Ordering::Equal => Self::zero(),
            },
        }
    }

    /// Computes `self - rhs`.
    pub fn sub(&self, rhs: &Self) -> Self {
        self.add(&rhs.neg())
    }

    /// Computes `-self`.
    pub fn neg(&self) -> Self {
        Self::from_sign_magnitude(-self.sign(), self.magnitude().clone())
    }
}

impl Add<&Int> for &Int {
    type Output = Int;

    fn add(self, rhs: &Int) -> Int {
        Int::add(self, rhs)
    }
}

impl Add<Int> for Int {
    type Output = Int;

    fn add(self, rhs: Int) -> Int {
        Int::add(&self, &rhs)
    }
}

impl AddAssign<&Int> for Int {
    fn add_assign(&mut self, rhs: &Int) {
        *self = Int::add(self, rhs);
    }
}

impl Sub<&Int> for &Int {
    type Output = Int;

    fn sub(self, rhs: &Int) -> Int {
        Int::sub(self, rhs)
    }
}

impl Sub<Int> for Int {
    type Output = Int;

    fn sub(self, rhs: Int) -> Int {
        Int::sub(&self, &rhs)
    }
}

impl SubAssign<&Int> for Int {
    fn sub_assign(&mut self, rhs: &Int) {
        *self = Int::sub(self, rhs);
    }
}

impl Neg for &Int {
    type Output = Int;

    fn neg(self) -> Int {
        Int::neg(self)
    }
}

impl Neg for Int {
    type Output = Int;

    fn neg(self) -> Int {
        Int::neg(&self)
    }
}
