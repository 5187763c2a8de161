//! Error types for polynomial arithmetic over Z/nZ.

use sylva_integers::Integer;
use sylva_rings::RingError;
use thiserror::Error;

/// Errors from polynomial operations over Z/nZ.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolyError {
    /// A division required inverting a leading coefficient that shares a
    /// factor with the modulus. Arises only for composite moduli.
    #[error("leading coefficient {lc} is not invertible modulo {modulus}")]
    NonInvertibleLeadingCoefficient {
        /// The offending leading coefficient, canonical in `[0, n)`.
        lc: Integer,
        /// The modulus n.
        modulus: Integer,
    },

    /// The operation needs a nonzero polynomial where the zero polynomial
    /// was supplied, such as a zero divisor or a leading-coefficient query.
    #[error("operation requires a nonzero polynomial")]
    DegreeMismatch,

    /// An underlying ring construction failed.
    #[error(transparent)]
    Ring(#[from] RingError),
}
