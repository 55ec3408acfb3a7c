//! The field of rational numbers Q.

use crate::traits::{AbelianGroup, Field, Ring};
use monic_integers::Rational;

impl AbelianGroup for Rational {
    fn zero_like(&self) -> Self {
        num_traits::Zero::zero()
    }

    fn is_zero(&self) -> bool {
        num_traits::Zero::is_zero(self)
    }
}

impl Ring for Rational {
    fn one_like(&self) -> Self {
        num_traits::One::one()
    }

    fn is_one(&self) -> bool {
        num_traits::One::is_one(self)
    }
}

impl Field for Rational {
    fn inv(&self) -> Option<Self> {
        if AbelianGroup::is_zero(self) {
            None
        } else {
            Some(self.recip())
        }
    }
}
