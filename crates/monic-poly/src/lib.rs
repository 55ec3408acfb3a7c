//! # monic-poly
//!
//! Exact univariate polynomial arithmetic for the monic kernel.
//!
//! This crate provides:
//! - Generic coefficient-sequence arithmetic ([`seq`])
//! - The [`Polynomial`] value type over a runtime coefficient domain,
//!   with ring operations, Euclidean division, monic normalization,
//!   GCD, and Horner evaluation
//!
//! All operations are pure value transformations: inputs are never
//! mutated, results are always normalized (no trailing zero
//! coefficients), and every failure propagates as a
//! [`monic_rings::Error`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod poly;
pub mod seq;

#[cfg(test)]
mod proptests;

pub use poly::{Operand, Polynomial};
