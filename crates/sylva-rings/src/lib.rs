//! # sylva-rings
//!
//! The coefficient ring Z/nZ with a runtime modulus.
//!
//! A [`ModRing`] carries the modulus and all ring operations; elements are
//! plain [`sylva_integers::Integer`] values kept canonical in `[0, n)`.
//! Moduli that fit in a machine word use the precomputed-reciprocal fast
//! multiplier from `sylva-integers`; larger moduli fall back to full
//! big-integer reduction. The two paths are observationally identical.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod mod_ring;

#[cfg(test)]
mod proptests;

pub use mod_ring::{ModRing, RingError};
