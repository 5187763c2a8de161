//! # sylva-integers
//!
//! Arbitrary precision integer arithmetic for the sylva resultant kernel.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - The word-sized fast modular multiplier with a precomputed
//!   approximate-reciprocal token (`mulmod`)
//!
//! ## Performance Notes
//!
//! - Small integers (fitting in a machine word) use stack allocation
//! - Coefficient multiplications modulo a word-sized modulus should go
//!   through [`mulmod::mulmod_precomp`] rather than full-width reduction

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod mulmod;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use mulmod::{mulmod_precomp, precompute_inverse, PrecomputedInverse, MULMOD_MAX_BITS};
