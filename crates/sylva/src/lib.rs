//! # Sylva
//!
//! Exact resultant computation over Z/nZ, accelerated by half-GCD.
//!
//! Sylva computes `res(f, g)` for dense univariate polynomials with
//! coefficients modulo a runtime n, keeping every intermediate value
//! exact.
//!
//! ## Features
//!
//! - **Arbitrary Moduli**: word-sized moduli ride a precomputed-reciprocal
//!   fast multiplier, larger ones fall back to big integers
//! - **Sub-Quadratic Chains**: half-GCD blocks advance the Euclidean
//!   remainder chain in `O(M(n) log n)`
//! - **Exact Bookkeeping**: sign and leading-coefficient scale are carried
//!   through truncated frames without ever being re-derived
//! - **Batch API**: independent pairs parallelize with rayon
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sylva::prelude::*;
//!
//! let ring = ModRing::new(Integer::new(7))?;
//! let f = ModPoly::from_coeffs(&[1, 0, 1].map(Integer::new), &ring);
//! let g = ModPoly::from_coeffs(&[1, 1].map(Integer::new), &ring);
//! assert_eq!(resultant(&f, &g, &ring)?, Integer::new(2));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use sylva_integers as integers;
pub use sylva_poly as poly;
pub use sylva_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use sylva_integers::Integer;
    pub use sylva_poly::{
        half_gcd, resultant, resultant_classical, resultant_many, ModPoly, PolyError,
        ResultantAccumulator, TransformMatrix,
    };
    pub use sylva_rings::{ModRing, RingError};
}
