//! Algorithms on dense polynomials over Z/nZ.

pub mod hgcd;
pub mod resultant;
