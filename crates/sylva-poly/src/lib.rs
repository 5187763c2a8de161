//! # sylva-poly
//!
//! Dense polynomial arithmetic over Z/nZ and the resultant kernel.
//!
//! This crate provides:
//! - Dense univariate polynomials over a runtime modulus (`ModPoly`)
//! - A half-GCD engine that reduces remainder chains in sub-quadratic time
//! - Resultant computation with exact sign and scale bookkeeping
//!
//! ## Algorithm Selection
//!
//! Multiplication picks its algorithm by degree:
//! - Degree < 32: Schoolbook O(n²)
//! - Degree >= 32: Karatsuba O(n^1.58)
//!
//! The resultant driver switches from classical Euclidean steps to
//! half-GCD blocks once the operand degree passes the crossover.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod dense;
pub mod error;

#[cfg(test)]
mod proptests;

pub use algorithms::hgcd::{half_gcd, ResultantAccumulator, TransformMatrix};
pub use algorithms::resultant::{resultant, resultant_classical, resultant_many};
pub use dense::ModPoly;
pub use error::PolyError;
