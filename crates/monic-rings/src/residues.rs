//! Residue class fields Z/pZ.
//!
//! The modulus travels with each value, so the identities are derived
//! from the receiver's modulus.

use crate::traits::{AbelianGroup, Field, Ring};
use monic_integers::Residue;

impl AbelianGroup for Residue {
    fn zero_like(&self) -> Self {
        Residue::new(0, self.modulus())
    }

    fn is_zero(&self) -> bool {
        self.value() == 0
    }
}

impl Ring for Residue {
    fn one_like(&self) -> Self {
        Residue::new(1, self.modulus())
    }

    fn is_one(&self) -> bool {
        self.value() == 1
    }
}

impl Field for Residue {
    fn inv(&self) -> Option<Self> {
        Residue::inv(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_ops() {
        let a = Residue::new(5, 7);
        let b = Residue::new(4, 7);

        assert_eq!((a + b).value(), 2);
        assert_eq!((a - b).value(), 1);
        assert_eq!((a * b).value(), 6);
        assert!(a.zero_like().is_zero());
        assert!(a.one_like().is_one());
    }

    #[test]
    fn test_inverse() {
        let a = Residue::new(3, 7);
        let inv = Field::inv(&a).unwrap();
        assert_eq!((a * inv).value(), 1);
        assert_eq!(Field::inv(&Residue::new(0, 7)), None);
    }

    #[test]
    fn test_pow_via_ring() {
        let a = Residue::new(3, 7);
        // Fermat's little theorem through the trait default
        assert!(Ring::pow(&a, 6).is_one());
    }
}
