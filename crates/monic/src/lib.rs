//! # Monic
//!
//! An exact polynomial-ring kernel in Rust.
//!
//! Monic provides univariate polynomials over pluggable coefficient
//! domains — exact integers, exact rationals, and prime residue fields —
//! with ring and field arithmetic, Euclidean division, monic
//! normalization, and Horner evaluation. Arithmetic is always exact:
//! there is no floating point anywhere in the kernel.
//!
//! ## Quick Start
//!
//! ```rust
//! use monic::prelude::*;
//!
//! let num = Polynomial::from_ints(&[6, 0, 0, 5, 0, 1], Domain::Rational);
//! let den = Polynomial::from_ints(&[3, 2, 1], Domain::Rational);
//!
//! let (quot, rem) = num.div_rem(&den)?;
//! assert_eq!(quot.to_string(), "X^3 - 2*X^2 + 6*X - 6");
//! assert_eq!(rem.to_string(), "-6*X + 24");
//! # Ok::<(), monic::rings::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use monic_integers as integers;
pub use monic_poly as poly;
pub use monic_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use monic_integers::{Integer, Rational, Residue};
    pub use monic_poly::{Operand, Polynomial};
    pub use monic_rings::{AbelianGroup, Coeff, Domain, Error, Field, Ring};
}
