//! Coefficient domains and the coercion resolver.
//!
//! A [`Domain`] is the reified "base class" of a polynomial: it knows how
//! to construct its elements, which other domains embed into it, and
//! which algebraic capabilities it has. Coercion is a declared, directed
//! embedding table rather than a constructor probe, but the contract is
//! the same: unification only guarantees construction feasibility, not a
//! verified ring homomorphism.

use std::fmt;

use monic_integers::{is_prime, Integer, Rational, Residue};

use crate::coeff::Coeff;
use crate::error::{Error, Result};

/// A coefficient domain.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Domain {
    /// The ring of integers Z.
    Int,
    /// The field of rational numbers Q.
    Rational,
    /// The residue classes modulo the given value. Moduli below 2 are
    /// rejected when an element is constructed; use [`Domain::residue`]
    /// to also insist on primality.
    Residue(u64),
}

impl Domain {
    /// Creates a residue field domain, checking that the modulus is
    /// prime so that every non-zero element is invertible.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Construction`] for a composite (or < 2)
    /// modulus.
    pub fn residue(modulus: u64) -> Result<Self> {
        if is_prime(modulus) {
            Ok(Self::Residue(modulus))
        } else {
            Err(Error::Construction(format!(
                "residue domain modulus {modulus} is not prime"
            )))
        }
    }

    /// The additive identity of this domain.
    #[must_use]
    pub fn zero(self) -> Coeff {
        self.from_int(0)
    }

    /// The multiplicative identity of this domain.
    #[must_use]
    pub fn one(self) -> Coeff {
        self.from_int(1)
    }

    /// Injects a machine integer into this domain.
    #[must_use]
    pub fn from_int(self, n: i64) -> Coeff {
        match self {
            Self::Int => Coeff::Int(Integer::new(n)),
            Self::Rational => Coeff::Rational(Rational::from(n)),
            Self::Residue(p) => Coeff::Residue(Residue::from_signed(n, p)),
        }
    }

    /// Returns true if values of `other` embed into this domain.
    ///
    /// The table is deliberately small and directed: every domain embeds
    /// into itself, and the integers embed into the rationals and into
    /// every residue domain (by reduction). Nothing else embeds;
    /// in particular residues with distinct moduli are unrelated.
    #[must_use]
    pub fn embeds_from(self, other: Domain) -> bool {
        match (self, other) {
            (a, b) if a == b => true,
            (Self::Rational | Self::Residue(_), Self::Int) => true,
            _ => false,
        }
    }

    /// Resolves the common domain of two operands.
    ///
    /// Prefers the left domain when both directions embed (they then
    /// coincide), matching the resolution order of binary operations.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::TypeMismatch`] if neither domain embeds into
    /// the other.
    pub fn unify(self, other: Domain) -> Result<Domain> {
        if self.embeds_from(other) {
            Ok(self)
        } else if other.embeds_from(self) {
            Ok(other)
        } else {
            Err(Error::TypeMismatch {
                left: self,
                right: other,
            })
        }
    }

    /// Coerces a coefficient into this domain along the embedding table.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::TypeMismatch`] if the value's domain does not
    /// embed into this one.
    pub fn coerce(self, value: &Coeff) -> Result<Coeff> {
        match (self, value) {
            (Self::Int, Coeff::Int(_)) | (Self::Rational, Coeff::Rational(_)) => {
                Ok(value.clone())
            }
            (Self::Residue(p), Coeff::Residue(r)) if r.modulus() == p => Ok(value.clone()),
            (Self::Rational, Coeff::Int(v)) => {
                Ok(Coeff::Rational(Rational::from_integer(v.clone())))
            }
            (Self::Residue(p), Coeff::Int(v)) => Ok(Coeff::Residue(Residue::from_integer(v, p))),
            _ => Err(Error::TypeMismatch {
                left: self,
                right: value.domain(),
            }),
        }
    }

    /// Returns true if this domain satisfies the field capability.
    ///
    /// A residue domain is a field exactly when its modulus is prime.
    #[must_use]
    pub fn is_field(self) -> bool {
        match self {
            Self::Int => false,
            Self::Rational => true,
            Self::Residue(p) => is_prime(p),
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "Z"),
            Self::Rational => write!(f, "Q"),
            Self::Residue(p) => write!(f, "GF({p})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedding_table() {
        let gf5 = Domain::residue(5).unwrap();

        assert!(Domain::Rational.embeds_from(Domain::Int));
        assert!(gf5.embeds_from(Domain::Int));
        assert!(!Domain::Int.embeds_from(Domain::Rational));
        assert!(!Domain::Rational.embeds_from(gf5));
        assert!(!gf5.embeds_from(Domain::Rational));
        assert!(!gf5.embeds_from(Domain::Residue(7)));
    }

    #[test]
    fn test_unify() {
        let gf5 = Domain::residue(5).unwrap();

        assert_eq!(Domain::Int.unify(Domain::Rational), Ok(Domain::Rational));
        assert_eq!(Domain::Rational.unify(Domain::Int), Ok(Domain::Rational));
        assert_eq!(gf5.unify(Domain::Int), Ok(gf5));
        assert_eq!(
            Domain::Rational.unify(gf5),
            Err(Error::TypeMismatch {
                left: Domain::Rational,
                right: gf5,
            })
        );
    }

    #[test]
    fn test_coerce() {
        let seven = Coeff::from(7i64);
        let as_rational = Domain::Rational.coerce(&seven).unwrap();
        assert_eq!(as_rational, Coeff::Rational(Rational::from(7)));

        let as_residue = Domain::Residue(5).coerce(&seven).unwrap();
        assert_eq!(as_residue, Coeff::Residue(Residue::new(2, 5)));

        assert!(Domain::Int.coerce(&as_rational).is_err());
    }

    #[test]
    fn test_residue_domain_validation() {
        assert!(Domain::residue(5).is_ok());
        assert!(Domain::residue(4).is_err());
        assert!(Domain::residue(1).is_err());
        assert!(Domain::residue(0).is_err());
    }

    #[test]
    fn test_field_capability() {
        assert!(!Domain::Int.is_field());
        assert!(Domain::Rational.is_field());
        assert!(Domain::Residue(5).is_field());
        assert!(!Domain::Residue(6).is_field());
    }

    #[test]
    fn test_display() {
        assert_eq!(Domain::Int.to_string(), "Z");
        assert_eq!(Domain::Rational.to_string(), "Q");
        assert_eq!(Domain::Residue(5).to_string(), "GF(5)");
    }
}
