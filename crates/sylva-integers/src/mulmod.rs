//! Word-sized modular multiplication with a precomputed reciprocal.
//!
//! For a modulus `d` of at most [`MULMOD_MAX_BITS`] bits, a one-time
//! floating-point reciprocal lets `(a * b) mod d` be computed in constant
//! time without a double-width division. The result is exactly the
//! remainder of the full 128-bit product: the float quotient estimate is
//! off by at most one in either direction, and the correction steps below
//! repair it.

/// Maximum bit width of a modulus usable with the precomputed reciprocal.
///
/// The quotient estimate `a * b * (1/d)` is formed in `f64` arithmetic;
/// 53 significand bits bound the rounding error to a single unit as long
/// as `d` fits in 53 bits.
pub const MULMOD_MAX_BITS: u32 = 53;

/// A precomputed approximate reciprocal of a word-sized modulus.
///
/// Tokens are cheap to copy and tied to the modulus they were computed
/// for; using one with a different modulus yields garbage.
#[derive(Clone, Copy, Debug)]
pub struct PrecomputedInverse {
    dinv: f64,
}

/// Precomputes the reciprocal token for a modulus `d`.
///
/// Requires `1 <= d < 2^53`.
#[must_use]
pub fn precompute_inverse(d: u64) -> PrecomputedInverse {
    debug_assert!(d >= 1);
    debug_assert!(64 - d.leading_zeros() <= MULMOD_MAX_BITS);
    #[allow(clippy::cast_precision_loss)]
    PrecomputedInverse { dinv: 1.0 / d as f64 }
}

/// Computes `(a * b) mod d` for `a, b < d` using the precomputed reciprocal.
///
/// The value returned is identical to the exact remainder of the 128-bit
/// product `a * b` by `d`.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn mulmod_precomp(a: u64, b: u64, d: u64, pre: PrecomputedInverse) -> u64 {
    debug_assert!(a < d && b < d);

    let quot = (a as f64 * b as f64 * pre.dinv) as u64;
    // a*b - quot*d fits in a signed word: the estimate is off by at most
    // one quotient unit, so the difference is within (-2d, 2d).
    let rem = a.wrapping_mul(b).wrapping_sub(quot.wrapping_mul(d)) as i64;

    let d = d as i64;
    if rem < 0 {
        let rem = rem + d;
        if rem < 0 {
            (rem + d) as u64
        } else {
            rem as u64
        }
    } else if rem >= d {
        (rem - d) as u64
    } else {
        rem as u64
    }
}
