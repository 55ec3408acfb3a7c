//! Dynamic coefficient values.
//!
//! A [`Coeff`] is one element of some coefficient domain, with the
//! domain carried in the variant tag. The infallible `std::ops`
//! arithmetic requires both operands to already lie in the same domain
//! (the polynomial engine unifies domains first); the `checked_*`
//! methods perform unification themselves and are the fallible surface
//! for mixed-domain callers.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use monic_integers::{Integer, Rational, Residue};

use crate::domain::Domain;
use crate::error::{Error, Result};
use crate::traits::{AbelianGroup, Field, Ring};

/// A coefficient from one of the supported domains.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Coeff {
    /// An integer.
    Int(Integer),
    /// A rational number.
    Rational(Rational),
    /// A residue class.
    Residue(Residue),
}

impl Coeff {
    /// Returns the domain this coefficient belongs to.
    #[must_use]
    pub fn domain(&self) -> Domain {
        match self {
            Self::Int(_) => Domain::Int,
            Self::Rational(_) => Domain::Rational,
            Self::Residue(r) => Domain::Residue(r.modulus()),
        }
    }

    /// Adds after unifying the operands' domains.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::TypeMismatch`] if the domains cannot be
    /// unified.
    pub fn checked_add(&self, rhs: &Coeff) -> Result<Coeff> {
        let domain = self.domain().unify(rhs.domain())?;
        Ok(domain.coerce(self)? + domain.coerce(rhs)?)
    }

    /// Subtracts after unifying the operands' domains.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::TypeMismatch`] if the domains cannot be
    /// unified.
    pub fn checked_sub(&self, rhs: &Coeff) -> Result<Coeff> {
        let domain = self.domain().unify(rhs.domain())?;
        Ok(domain.coerce(self)? - domain.coerce(rhs)?)
    }

    /// Multiplies after unifying the operands' domains.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::TypeMismatch`] if the domains cannot be
    /// unified.
    pub fn checked_mul(&self, rhs: &Coeff) -> Result<Coeff> {
        let domain = self.domain().unify(rhs.domain())?;
        Ok(domain.coerce(self)? * domain.coerce(rhs)?)
    }

    /// Divides after unifying the operands' domains.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::TypeMismatch`] if the domains cannot be
    /// unified, [`Error::Capability`] if the unified domain is not a
    /// field, and [`Error::DivisionByZero`] for a zero divisor.
    pub fn checked_div(&self, rhs: &Coeff) -> Result<Coeff> {
        let domain = self.domain().unify(rhs.domain())?;
        if !domain.is_field() {
            return Err(Error::Capability {
                domain,
                operation: "division",
            });
        }
        let lhs = domain.coerce(self)?;
        let rhs = domain.coerce(rhs)?;
        Ok(lhs * rhs.inv()?)
    }

    /// Computes the multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Capability`] over the integers and
    /// [`Error::DivisionByZero`] for a non-invertible element.
    pub fn inv(&self) -> Result<Coeff> {
        match self {
            Self::Int(_) => Err(Error::Capability {
                domain: Domain::Int,
                operation: "inversion",
            }),
            Self::Rational(a) => Field::inv(a)
                .map(Coeff::Rational)
                .ok_or(Error::DivisionByZero),
            Self::Residue(a) => Field::inv(a)
                .map(Coeff::Residue)
                .ok_or(Error::DivisionByZero),
        }
    }
}

impl AbelianGroup for Coeff {
    fn zero_like(&self) -> Self {
        self.domain().zero()
    }

    fn is_zero(&self) -> bool {
        match self {
            Self::Int(a) => AbelianGroup::is_zero(a),
            Self::Rational(a) => AbelianGroup::is_zero(a),
            Self::Residue(a) => AbelianGroup::is_zero(a),
        }
    }
}

impl Ring for Coeff {
    fn one_like(&self) -> Self {
        self.domain().one()
    }

    fn is_one(&self) -> bool {
        match self {
            Self::Int(a) => Ring::is_one(a),
            Self::Rational(a) => Ring::is_one(a),
            Self::Residue(a) => Ring::is_one(a),
        }
    }
}

impl Add for Coeff {
    type Output = Coeff;

    fn add(self, rhs: Coeff) -> Coeff {
        match (self, rhs) {
            (Coeff::Int(a), Coeff::Int(b)) => Coeff::Int(a + b),
            (Coeff::Rational(a), Coeff::Rational(b)) => Coeff::Rational(a + b),
            (Coeff::Residue(a), Coeff::Residue(b)) => Coeff::Residue(a + b),
            (a, b) => mixed_domains(&a, &b),
        }
    }
}

impl Sub for Coeff {
    type Output = Coeff;

    fn sub(self, rhs: Coeff) -> Coeff {
        match (self, rhs) {
            (Coeff::Int(a), Coeff::Int(b)) => Coeff::Int(a - b),
            (Coeff::Rational(a), Coeff::Rational(b)) => Coeff::Rational(a - b),
            (Coeff::Residue(a), Coeff::Residue(b)) => Coeff::Residue(a - b),
            (a, b) => mixed_domains(&a, &b),
        }
    }
}

impl Mul for Coeff {
    type Output = Coeff;

    fn mul(self, rhs: Coeff) -> Coeff {
        match (self, rhs) {
            (Coeff::Int(a), Coeff::Int(b)) => Coeff::Int(a * b),
            (Coeff::Rational(a), Coeff::Rational(b)) => Coeff::Rational(a * b),
            (Coeff::Residue(a), Coeff::Residue(b)) => Coeff::Residue(a * b),
            (a, b) => mixed_domains(&a, &b),
        }
    }
}

impl Neg for Coeff {
    type Output = Coeff;

    fn neg(self) -> Coeff {
        match self {
            Coeff::Int(a) => Coeff::Int(-a),
            Coeff::Rational(a) => Coeff::Rational(-a),
            Coeff::Residue(a) => Coeff::Residue(-a),
        }
    }
}

// Invariant of the infallible operators; callers that cannot guarantee
// unified domains use the checked_* methods instead.
fn mixed_domains(a: &Coeff, b: &Coeff) -> ! {
    panic!(
        "coefficient domains differ ({} vs {}); unify before arithmetic",
        a.domain(),
        b.domain()
    )
}

impl fmt::Display for Coeff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(a) => write!(f, "{a}"),
            Self::Rational(a) => write!(f, "{a}"),
            Self::Residue(a) => write!(f, "{a}"),
        }
    }
}

impl From<i64> for Coeff {
    fn from(value: i64) -> Self {
        Self::Int(Integer::new(value))
    }
}

impl From<Integer> for Coeff {
    fn from(value: Integer) -> Self {
        Self::Int(value)
    }
}

impl From<Rational> for Coeff {
    fn from(value: Rational) -> Self {
        Self::Rational(value)
    }
}

impl From<Residue> for Coeff {
    fn from(value: Residue) -> Self {
        Self::Residue(value)
    }
}
