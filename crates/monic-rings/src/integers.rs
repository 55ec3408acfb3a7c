//! The ring of integers Z.
//!
//! Integers satisfy the ring tier but not the field tier: they have no
//! multiplicative inverses, so field-only operations over an integer
//! base report a capability failure instead of ever reaching this
//! module.

use crate::traits::{AbelianGroup, Ring};
use monic_integers::Integer;

impl AbelianGroup for Integer {
    fn zero_like(&self) -> Self {
        num_traits::Zero::zero()
    }

    fn is_zero(&self) -> bool {
        num_traits::Zero::is_zero(self)
    }
}

impl Ring for Integer {
    fn one_like(&self) -> Self {
        num_traits::One::one()
    }

    fn is_one(&self) -> bool {
        num_traits::One::is_one(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_laws() {
        let a = Integer::new(10);
        let b = Integer::new(3);

        assert!(a.zero_like().is_zero());
        assert!(a.one_like().is_one());

        assert_eq!((a.clone() + b.clone()).to_i64(), Some(13));
        assert_eq!((a.clone() * b).to_i64(), Some(30));
        assert_eq!(a.pow(3).to_i64(), Some(1000));
    }
}
