//! Resultants of dense polynomials over Z/nZ.
//!
//! The resultant is computed from the Euclidean remainder chain of the two
//! operands: each step `f = q*g + r` satisfies
//! `res(f, g) = (-1)^(deg f * deg g) * lc(g)^(deg f - deg r) * res(g, r)`,
//! and the chain terminates at `res(f, c) = c^(deg f)` for a constant `c`.
//! Above a degree crossover the chain is advanced by half-GCD blocks
//! instead of single divisions, which brings the cost down to
//! `O(M(n) log n)` while the accumulator keeps the sign and scale exact.

use num_traits::Zero;
use rayon::prelude::*;
use sylva_integers::Integer;
use sylva_rings::ModRing;

use crate::algorithms::hgcd::{half_gcd, ResultantAccumulator};
use crate::dense::ModPoly;
use crate::error::PolyError;

/// Operand degree at which the driver starts taking half-GCD blocks.
const HGCD_CUTOFF: isize = 80;

/// Computes the resultant of `f` and `g` over Z/nZ.
///
/// Conventions at the degenerate corners:
/// - both operands of degree <= 0 (constants or zero): the resultant is 1;
/// - one operand zero, the other of positive degree: the resultant is 0;
/// - `res(f, c) = c^(deg f)` for a nonzero constant `c`.
///
/// # Errors
///
/// Returns [`PolyError::NonInvertibleLeadingCoefficient`] when a division
/// in the remainder chain meets a leading coefficient that shares a factor
/// with the modulus. This can only happen for composite moduli.
pub fn resultant(f: &ModPoly, g: &ModPoly, ring: &ModRing) -> Result<Integer, PolyError> {
    if f.degree() <= 0 && g.degree() <= 0 {
        return Ok(ring.one());
    }

    let mut f = f.clone();
    let mut g = g.clone();
    let mut acc = ResultantAccumulator::new(ring);

    if f.degree() < g.degree() {
        std::mem::swap(&mut f, &mut g);
        if f.degree() % 2 == 1 && g.degree() % 2 == 1 {
            acc.flip_sign();
        }
    }

    // invariant: deg f >= deg g and deg f >= 1
    loop {
        if g.is_zero() {
            return Ok(Integer::zero());
        }
        if g.degree() == 0 {
            acc.close(0, ring);
            let c = g.coeff(0);
            acc.mul_scale(&ring.pow(&c, f.degree() as u64), ring);
            return Ok(acc.value(ring));
        }

        if f.degree() >= HGCD_CUTOFF && f.degree() > g.degree() && g.degree() > f.degree() / 2 {
            let (_, fs, gs) = half_gcd(&f, &g, &mut acc, ring)?;
            f = fs;
            g = gs;
        } else {
            let lc = g.leading_coeff()?.clone();
            acc.open_step(f.degree() as usize, g.degree() as usize, &lc, ring)?;
            let (_, r) = f.div_rem(&g, ring)?;
            f = std::mem::replace(&mut g, r);
        }
    }
}

/// Computes the resultant by plain Euclidean steps, assembling the product
/// formula directly from each step's degrees and leading coefficient.
///
/// Quadratic in the degree; serves as the oracle for the accelerated
/// driver and is perfectly adequate for small operands.
///
/// # Errors
///
/// Same error surface as [`resultant`].
pub fn resultant_classical(f: &ModPoly, g: &ModPoly, ring: &ModRing) -> Result<Integer, PolyError> {
    if f.degree() <= 0 && g.degree() <= 0 {
        return Ok(ring.one());
    }

    let mut f = f.clone();
    let mut g = g.clone();
    let mut negate = false;

    if f.degree() < g.degree() {
        std::mem::swap(&mut f, &mut g);
        if f.degree() % 2 == 1 && g.degree() % 2 == 1 {
            negate = !negate;
        }
    }

    let mut scale = ring.one();

    loop {
        if g.is_zero() {
            return Ok(Integer::zero());
        }
        if g.degree() == 0 {
            scale = ring.mul(&scale, &ring.pow(&g.coeff(0), f.degree() as u64));
            return Ok(if negate { ring.neg(&scale) } else { scale });
        }

        let lc = g.leading_coeff()?.clone();
        let (_, r) = f.div_rem(&g, ring)?;

        if f.degree() % 2 == 1 && g.degree() % 2 == 1 {
            negate = !negate;
        }
        let e = (f.degree() - r.degree()) as u64;
        scale = ring.mul(&scale, &ring.pow(&lc, e));

        f = std::mem::replace(&mut g, r);
    }
}

/// Computes resultants for a batch of pairs in parallel.
///
/// Each pair is an independent computation; results come back in input
/// order, errors staying with the pair that produced them.
#[must_use]
pub fn resultant_many(
    pairs: &[(ModPoly, ModPoly)],
    ring: &ModRing,
) -> Vec<Result<Integer, PolyError>> {
    pairs
        .par_iter()
        .map(|(f, g)| resultant(f, g, ring))
        .collect()
}
