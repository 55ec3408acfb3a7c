//! # monic-rings
//!
//! Algebraic structures for the monic polynomial kernel.
//!
//! This crate provides:
//! - The capability contract: `AbelianGroup`, `Ring`, `Field`
//! - Trait implementations for the concrete coefficient types
//! - Reified coefficient domains with a directed embedding table
//! - Dynamic coefficient values ([`Coeff`]) and the shared error type
//!
//! ## Trait Hierarchy
//!
//! ```text
//! AbelianGroup
//!  └── Ring
//!       └── Field
//! ```
//!
//! Concrete types implement the tiers they satisfy: integers are a ring
//! but not a field, rationals and prime residues are fields.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod coeff;
pub mod domain;
pub mod error;
pub mod integers;
pub mod rationals;
pub mod residues;
pub mod traits;

pub use coeff::Coeff;
pub use domain::Domain;
pub use error::{Error, Result};
pub use traits::{AbelianGroup, Field, Ring};
