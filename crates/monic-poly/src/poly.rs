//! Univariate polynomials over a runtime coefficient domain.
//!
//! A [`Polynomial`] owns its coefficient sequence and its base domain.
//! Binary operations accept another polynomial, a bare coefficient, or a
//! machine integer; the operands' domains are unified through the
//! embedding table before any arithmetic happens, and the result lives
//! in the unified domain. Every operation returns a fresh value; nothing
//! is mutated in place.

use std::fmt;
use std::ops::Neg;

use monic_rings::{AbelianGroup, Coeff, Domain, Error, Result};

use crate::seq;

/// A polynomial over a coefficient domain.
///
/// Coefficients are stored in ascending degree order with no trailing
/// zeros; the empty sequence is the zero polynomial.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Polynomial {
    coeffs: Vec<Coeff>,
    domain: Domain,
}

/// A right-hand operand of a binary polynomial operation.
///
/// A bare coefficient or machine integer is treated as a one-coefficient
/// polynomial for domain resolution.
#[derive(Clone, Debug)]
pub enum Operand {
    /// Another polynomial.
    Poly(Polynomial),
    /// A bare coefficient.
    Scalar(Coeff),
    /// A machine integer, lifted through the integer domain.
    Int(i64),
}

impl Operand {
    /// The operand as a coefficient sequence plus its natural domain.
    fn lift(self) -> (Vec<Coeff>, Domain) {
        match self {
            Operand::Poly(p) => (p.coeffs, p.domain),
            Operand::Scalar(c) => {
                let domain = c.domain();
                (vec![c], domain)
            }
            Operand::Int(n) => (vec![Coeff::from(n)], Domain::Int),
        }
    }
}

impl From<Polynomial> for Operand {
    fn from(value: Polynomial) -> Self {
        Operand::Poly(value)
    }
}

impl From<&Polynomial> for Operand {
    fn from(value: &Polynomial) -> Self {
        Operand::Poly(value.clone())
    }
}

impl From<Coeff> for Operand {
    fn from(value: Coeff) -> Self {
        Operand::Scalar(value)
    }
}

impl From<&Coeff> for Operand {
    fn from(value: &Coeff) -> Self {
        Operand::Scalar(value.clone())
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Int(value)
    }
}

fn coerce_all(coeffs: &[Coeff], domain: Domain) -> Result<Vec<Coeff>> {
    coeffs.iter().map(|c| domain.coerce(c)).collect()
}

impl Polynomial {
    /// Normalizes a same-domain coefficient sequence into a polynomial.
    fn from_raw(mut coeffs: Vec<Coeff>, domain: Domain) -> Self {
        seq::trim(&mut coeffs);
        Self { coeffs, domain }
    }

    /// Creates a polynomial from coefficients, coercing every element
    /// into the base domain.
    ///
    /// `values[i]` is the coefficient of `X^i`. Trailing zeros are
    /// stripped.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Construction`] if any element cannot be
    /// coerced into `domain`.
    pub fn new(values: Vec<Coeff>, domain: Domain) -> Result<Self> {
        let mut coeffs = Vec::with_capacity(values.len());
        for value in &values {
            let coerced = domain.coerce(value).map_err(|_| {
                Error::Construction(format!("cannot coerce {value} into {domain}"))
            })?;
            coeffs.push(coerced);
        }
        Ok(Self::from_raw(coeffs, domain))
    }

    /// Creates a polynomial by injecting machine integers into the
    /// domain. Injection is total, so this cannot fail.
    #[must_use]
    pub fn from_ints(values: &[i64], domain: Domain) -> Self {
        let coeffs = values.iter().map(|&n| domain.from_int(n)).collect();
        Self::from_raw(coeffs, domain)
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero(domain: Domain) -> Self {
        Self {
            coeffs: Vec::new(),
            domain,
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one(domain: Domain) -> Self {
        Self::from_raw(vec![domain.one()], domain)
    }

    /// Creates a constant polynomial over the coefficient's own domain.
    #[must_use]
    pub fn constant(value: Coeff) -> Self {
        let domain = value.domain();
        Self::from_raw(vec![value], domain)
    }

    /// Creates the polynomial X.
    #[must_use]
    pub fn x(domain: Domain) -> Self {
        Self::from_raw(vec![domain.zero(), domain.one()], domain)
    }

    /// Creates the monomial `value * X^degree`.
    #[must_use]
    pub fn monomial(value: Coeff, degree: usize) -> Self {
        let domain = value.domain();
        let mut coeffs = vec![domain.zero(); degree];
        coeffs.push(value);
        Self::from_raw(coeffs, domain)
    }

    /// Returns the base domain.
    #[must_use]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Returns the coefficient sequence in ascending degree order.
    #[must_use]
    pub fn coeffs(&self) -> &[Coeff] {
        &self.coeffs
    }

    /// Returns the coefficient of `X^i`.
    #[must_use]
    pub fn coeff(&self, i: usize) -> Coeff {
        self.coeffs
            .get(i)
            .cloned()
            .unwrap_or_else(|| self.domain.zero())
    }

    /// Returns the degree; the zero polynomial has degree -1 by
    /// convention.
    #[must_use]
    pub fn degree(&self) -> isize {
        self.coeffs.len() as isize - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns the leading coefficient, or `None` for the zero
    /// polynomial.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&Coeff> {
        self.coeffs.last()
    }

    /// Resolves the common domain with an operand and coerces both
    /// coefficient sequences into it.
    fn align(&self, rhs: Operand) -> Result<(Vec<Coeff>, Vec<Coeff>, Domain)> {
        let (rhs_coeffs, rhs_domain) = rhs.lift();
        let domain = self.domain.unify(rhs_domain)?;
        let a = coerce_all(&self.coeffs, domain)?;
        let b = coerce_all(&rhs_coeffs, domain)?;
        Ok((a, b, domain))
    }

    /// Adds an operand.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::TypeMismatch`] if the domains cannot be
    /// unified.
    pub fn add<T: Into<Operand>>(&self, rhs: T) -> Result<Self> {
        let (a, b, domain) = self.align(rhs.into())?;
        Ok(Self::from_raw(seq::add(&a, &b), domain))
    }

    /// Subtracts an operand.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::TypeMismatch`] if the domains cannot be
    /// unified.
    pub fn sub<T: Into<Operand>>(&self, rhs: T) -> Result<Self> {
        let (a, b, domain) = self.align(rhs.into())?;
        Ok(Self::from_raw(seq::sub(&a, &b), domain))
    }

    /// Multiplies by an operand.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::TypeMismatch`] if the domains cannot be
    /// unified.
    pub fn mul<T: Into<Operand>>(&self, rhs: T) -> Result<Self> {
        let (a, b, domain) = self.align(rhs.into())?;
        Ok(Self::from_raw(seq::convolve(&a, &b), domain))
    }

    /// Multiplies every coefficient by a scalar.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::TypeMismatch`] if the scalar's domain cannot
    /// be unified with the base domain.
    pub fn scale(&self, factor: &Coeff) -> Result<Self> {
        let domain = self.domain.unify(factor.domain())?;
        let factor = domain.coerce(factor)?;
        let coeffs = coerce_all(&self.coeffs, domain)?
            .into_iter()
            .map(|c| c * factor.clone())
            .collect();
        Ok(Self::from_raw(coeffs, domain))
    }

    /// Multiplies by `X^n`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Domain`] for a negative shift amount.
    pub fn shift(&self, n: i64) -> Result<Self> {
        if n < 0 {
            return Err(Error::Domain(format!(
                "shift requires a non-negative amount, got {n}"
            )));
        }
        if self.is_zero() || n == 0 {
            return Ok(self.clone());
        }

        let mut coeffs = vec![self.domain.zero(); n as usize];
        coeffs.extend(self.coeffs.iter().cloned());
        Ok(Self {
            coeffs,
            domain: self.domain,
        })
    }

    /// Returns the monic scalar multiple of this polynomial.
    ///
    /// The zero polynomial is returned unchanged.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Capability`] unless the base domain is a
    /// field.
    pub fn to_monic(&self) -> Result<Self> {
        if !self.domain.is_field() {
            return Err(Error::Capability {
                domain: self.domain,
                operation: "monic normalization",
            });
        }

        match self.coeffs.last() {
            None => Ok(self.clone()),
            Some(lead) => {
                let lead_inv = lead.inv()?;
                let coeffs = self
                    .coeffs
                    .iter()
                    .map(|c| c.clone() * lead_inv.clone())
                    .collect();
                Ok(Self::from_raw(coeffs, self.domain))
            }
        }
    }

    /// Euclidean division, returning `(quotient, remainder)`.
    ///
    /// Repeatedly cancels the remainder's leading term against the
    /// divisor's; each step strictly decreases the remainder's degree,
    /// so the loop terminates with `deg r < deg divisor` or `r = 0`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::DivisionByZero`] for a zero divisor (also
    /// when the divisor vanishes under coercion into the unified
    /// domain), [`Error::TypeMismatch`] if the domains cannot be
    /// unified, and [`Error::Capability`] if the unified domain is not
    /// a field.
    pub fn div_rem(&self, divisor: &Polynomial) -> Result<(Self, Self)> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let domain = self.domain.unify(divisor.domain)?;
        if !domain.is_field() {
            return Err(Error::Capability {
                domain,
                operation: "euclidean division",
            });
        }

        // Coercion into a residue domain can zero out coefficients, so
        // both sequences are re-trimmed after it.
        let mut den = coerce_all(&divisor.coeffs, domain)?;
        seq::trim(&mut den);
        let Some(den_lead) = den.last() else {
            return Err(Error::DivisionByZero);
        };
        let lead_inv = den_lead.inv()?;

        let mut rem = coerce_all(&self.coeffs, domain)?;
        seq::trim(&mut rem);

        let mut quot = if rem.len() >= den.len() {
            vec![domain.zero(); rem.len() - den.len() + 1]
        } else {
            Vec::new()
        };

        while rem.len() >= den.len() {
            let offset = rem.len() - den.len();
            let k = rem[rem.len() - 1].clone() * lead_inv.clone();

            quot[offset] = k.clone();

            for (i, d) in den.iter().enumerate() {
                rem[offset + i] = rem[offset + i].clone() - k.clone() * d.clone();
            }

            // The leading term cancels exactly; lower terms may vanish
            // too.
            seq::trim(&mut rem);
        }

        Ok((
            Self::from_raw(quot, domain),
            Self { coeffs: rem, domain },
        ))
    }

    /// The quotient of Euclidean division.
    ///
    /// # Errors
    ///
    /// See [`Polynomial::div_rem`].
    pub fn div(&self, divisor: &Polynomial) -> Result<Self> {
        Ok(self.div_rem(divisor)?.0)
    }

    /// The remainder of Euclidean division.
    ///
    /// # Errors
    ///
    /// See [`Polynomial::div_rem`].
    pub fn rem(&self, divisor: &Polynomial) -> Result<Self> {
        Ok(self.div_rem(divisor)?.1)
    }

    /// Computes a greatest common divisor by the Euclidean remainder
    /// loop. The result is not normalized; compose with
    /// [`Polynomial::to_monic`] for a canonical representative.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::TypeMismatch`] if the domains cannot be
    /// unified and [`Error::Capability`] if the unified domain is not a
    /// field.
    pub fn gcd(&self, other: &Polynomial) -> Result<Self> {
        let domain = self.domain.unify(other.domain)?;
        if !domain.is_field() {
            return Err(Error::Capability {
                domain,
                operation: "polynomial gcd",
            });
        }

        let mut p = Self::from_raw(coerce_all(&self.coeffs, domain)?, domain);
        let mut q = Self::from_raw(coerce_all(&other.coeffs, domain)?, domain);

        while !q.is_zero() {
            let r = p.rem(&q)?;
            p = q;
            q = r;
        }

        Ok(p)
    }

    /// Evaluates the polynomial at `x` by Horner's method.
    ///
    /// The fold runs over polynomials starting from zero, so `x` may be
    /// a coefficient, a machine integer, or another polynomial
    /// (composition); a scalar argument yields a constant polynomial.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::TypeMismatch`] if `x`'s domain cannot be
    /// unified with the base domain.
    pub fn eval<T: Into<Operand>>(&self, x: T) -> Result<Self> {
        let (x_coeffs, x_domain) = x.into().lift();
        let domain = self.domain.unify(x_domain)?;
        let x_poly = Self::from_raw(coerce_all(&x_coeffs, domain)?, domain);

        let mut acc = Self::zero(domain);
        for c in self.coeffs.iter().rev() {
            acc = acc.mul(&x_poly)?.add(c)?;
        }
        Ok(acc)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial {
            coeffs: seq::negate(&self.coeffs),
            domain: self.domain,
        }
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        -&self
    }
}

impl PartialEq<Coeff> for Polynomial {
    /// A polynomial equals a bare scalar iff it equals the
    /// one-coefficient polynomial over the scalar's own domain,
    /// comparing coefficient sequences after coercion; the domains
    /// themselves need not match. Incompatible domains compare unequal.
    fn eq(&self, other: &Coeff) -> bool {
        let Ok(domain) = self.domain.unify(other.domain()) else {
            return false;
        };
        let Ok(mut a) = coerce_all(&self.coeffs, domain) else {
            return false;
        };
        let Ok(scalar) = domain.coerce(other) else {
            return false;
        };
        seq::trim(&mut a);
        let mut b = vec![scalar];
        seq::trim(&mut b);
        a == b
    }
}

impl PartialEq<i64> for Polynomial {
    fn eq(&self, other: &i64) -> bool {
        self == &Coeff::from(*other)
    }
}

impl fmt::Display for Polynomial {
    /// Renders highest-degree term first: `3/2*X^4 + X^2 + 1/3*X + 2`.
    ///
    /// A coefficient of ±1 is suppressed before `X`, negated terms are
    /// joined with `" - "`, zero terms are skipped, and the zero
    /// polynomial renders as the domain's zero element.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coeffs.is_empty() {
            return write!(f, "{}", self.domain.zero());
        }

        let mut out = String::new();
        for (i, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }

            let rendered = c.to_string();
            let (negative, magnitude) = match rendered.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, rendered.as_str()),
            };

            if out.is_empty() {
                if negative {
                    out.push('-');
                }
            } else {
                out.push_str(if negative { " - " } else { " + " });
            }

            if i == 0 {
                out.push_str(magnitude);
            } else {
                if magnitude != "1" {
                    out.push_str(magnitude);
                    out.push('*');
                }
                out.push('X');
                if i > 1 {
                    out.push('^');
                    out.push_str(&i.to_string());
                }
            }
        }

        write!(f, "{out}")
    }
}
