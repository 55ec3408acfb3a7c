//! Error kinds shared by the algebraic layer and the polynomial engine.
//!
//! Every failure is reported synchronously at the call that triggers it;
//! nothing is retried and nothing is silently downgraded.

use thiserror::Error;

use crate::domain::Domain;

/// Convenience alias used throughout the kernel.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by coefficient and polynomial operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A value could not be constructed: an element was not coercible
    /// into the requested base domain, or a residue domain was given an
    /// invalid modulus.
    #[error("construction failed: {0}")]
    Construction(String),

    /// Two operands' coefficient domains cannot be unified, because
    /// neither embeds into the other.
    #[error("no embedding between {left} and {right}")]
    TypeMismatch {
        /// Domain of the left operand.
        left: Domain,
        /// Domain of the right operand.
        right: Domain,
    },

    /// An operation requires an algebraic capability the base domain
    /// does not have (e.g. field division over the integers).
    #[error("{operation} requires a field, but {domain} is not one")]
    Capability {
        /// The offending domain.
        domain: Domain,
        /// The operation that was attempted.
        operation: &'static str,
    },

    /// An argument had an invalid shape, e.g. a negative shift amount.
    #[error("invalid argument: {0}")]
    Domain(String),

    /// Division by the zero element of a field, or Euclidean division
    /// by the zero polynomial.
    #[error("division by zero")]
    DivisionByZero,
}
