//! Half-GCD reduction of polynomial remainder chains.
//!
//! A run of Euclidean steps `(f, g) -> (g, f mod g)` can be encoded as a
//! 2x2 matrix of quotient polynomials. The half-GCD trick computes that
//! matrix from only the top coefficients of the operands: a recursion on
//! the reduction amount `d_red` truncates the pair, solves two half-sized
//! subproblems joined by a single classical division, and composes the
//! matrices. Applying the matrix to the full operands then lands the pair
//! deep into the remainder chain in sub-quadratic time.
//!
//! Every classical step, whether taken here or by the driver, contributes
//! a sign and a power of the divisor's leading coefficient to the
//! resultant. The [`ResultantAccumulator`] collects those contributions as
//! the steps happen, so the reduced pair and the running resultant factor
//! stay in lockstep.

use sylva_integers::Integer;
use sylva_rings::ModRing;

use crate::dense::ModPoly;
use crate::error::PolyError;

/// Below this reduction amount the recursion bottoms out into plain
/// iterated divisions.
const ITER_CROSSOVER: usize = 24;

/// A 2x2 matrix of polynomials encoding a run of Euclidean steps.
///
/// Acts on column pairs: `apply` sends `(f, g)` to
/// `(m00*f + m01*g, m10*f + m11*g)`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TransformMatrix {
    m00: ModPoly,
    m01: ModPoly,
    m10: ModPoly,
    m11: ModPoly,
}

impl TransformMatrix {
    /// The identity transform.
    #[must_use]
    pub fn identity(ring: &ModRing) -> Self {
        Self {
            m00: ModPoly::one(ring),
            m01: ModPoly::zero(),
            m10: ModPoly::zero(),
            m11: ModPoly::one(ring),
        }
    }

    /// Applies the transform to a pair of polynomials.
    #[must_use]
    pub fn apply(&self, f: &ModPoly, g: &ModPoly, ring: &ModRing) -> (ModPoly, ModPoly) {
        (
            self.m00.mul(f, ring).add(&self.m01.mul(g, ring), ring),
            self.m10.mul(f, ring).add(&self.m11.mul(g, ring), ring),
        )
    }

    /// Folds one Euclidean step with quotient `q` into the transform:
    /// `M := [[0, 1], [1, -q]] * M`.
    pub fn push_quotient(&mut self, q: &ModPoly, ring: &ModRing) {
        let m00 = std::mem::take(&mut self.m00);
        let m01 = std::mem::take(&mut self.m01);
        let m10 = std::mem::take(&mut self.m10);
        let m11 = std::mem::take(&mut self.m11);

        self.m00 = m10.clone();
        self.m01 = m11.clone();
        self.m10 = m00.sub(&q.mul(&m10, ring), ring);
        self.m11 = m01.sub(&q.mul(&m11, ring), ring);
    }

    /// Returns the product `self * rhs`.
    #[must_use]
    pub fn compose(&self, rhs: &Self, ring: &ModRing) -> Self {
        Self {
            m00: self.m00.mul(&rhs.m00, ring).add(&self.m01.mul(&rhs.m10, ring), ring),
            m01: self.m00.mul(&rhs.m01, ring).add(&self.m01.mul(&rhs.m11, ring), ring),
            m10: self.m10.mul(&rhs.m00, ring).add(&self.m11.mul(&rhs.m10, ring), ring),
            m11: self.m10.mul(&rhs.m01, ring).add(&self.m11.mul(&rhs.m11, ring), ring),
        }
    }
}

/// Running sign and scale of a resultant under a remainder chain.
///
/// One Euclidean step `f = q*g + r` multiplies the resultant by
/// `(-1)^(deg f * deg g) * lc(g)^(deg f - deg r)`. Inside a truncated
/// half-GCD frame the true degree of `r` is not yet visible, so the step
/// is *opened* with the factor `lc(g)^(deg f)` and the matching
/// `lc(g)^(-deg r)` is *closed* once `r` turns up as the next divisor
/// (or at termination, where its degree is 0). Degrees fed in here must
/// always be true degrees; callers working on truncated operands add the
/// cumulative truncation shift.
#[derive(Clone, Debug)]
pub struct ResultantAccumulator {
    scale: Integer,
    negate: bool,
    pending: Option<Pending>,
}

#[derive(Clone, Debug)]
struct Pending {
    lc_inv: Integer,
}

impl ResultantAccumulator {
    /// Starts an accumulator at sign +1, scale 1.
    #[must_use]
    pub fn new(ring: &ModRing) -> Self {
        Self {
            scale: ring.one(),
            negate: false,
            pending: None,
        }
    }

    /// Toggles the sign, for reorderings like the driver's initial swap.
    pub fn flip_sign(&mut self) {
        self.negate = !self.negate;
    }

    /// Records one Euclidean step with divisor degree `deg_g`, dividend
    /// degree `deg_f` and divisor leading coefficient `lc`.
    ///
    /// Closing the previous step happens first: the current divisor is
    /// that step's remainder, so `deg_g` is the deferred `deg r`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::NonInvertibleLeadingCoefficient`] when `lc`
    /// has no inverse modulo n.
    pub fn open_step(
        &mut self,
        deg_f: usize,
        deg_g: usize,
        lc: &Integer,
        ring: &ModRing,
    ) -> Result<(), PolyError> {
        self.close(deg_g, ring);

        if deg_f & 1 == 1 && deg_g & 1 == 1 {
            self.negate = !self.negate;
        }
        self.scale = ring.mul(&self.scale, &ring.pow(lc, deg_f as u64));

        let lc_inv = ring.inv(lc).ok_or_else(|| PolyError::NonInvertibleLeadingCoefficient {
            lc: lc.clone(),
            modulus: ring.modulus().clone(),
        })?;
        self.pending = Some(Pending { lc_inv });
        Ok(())
    }

    /// Closes the open step, now that its remainder degree is known.
    pub fn close(&mut self, deg_r: usize, ring: &ModRing) {
        if let Some(p) = self.pending.take() {
            if deg_r > 0 {
                self.scale = ring.mul(&self.scale, &ring.pow(&p.lc_inv, deg_r as u64));
            }
        }
    }

    /// Multiplies the running scale by a canonical factor.
    pub fn mul_scale(&mut self, factor: &Integer, ring: &ModRing) {
        self.scale = ring.mul(&self.scale, factor);
    }

    /// Consumes the accumulator, yielding the signed scale.
    #[must_use]
    pub fn value(self, ring: &ModRing) -> Integer {
        if self.negate {
            ring.neg(&self.scale)
        } else {
            self.scale
        }
    }
}

/// Reduces `(f, g)` with `deg f > deg g` until the second component has
/// degree at most `deg f / 2 - 1`, returning the transform and the reduced
/// pair `M * (f, g)`.
///
/// When `g` is zero or already below the threshold the transform is the
/// identity and the pair is returned unchanged. Classical steps taken
/// along the way are recorded into `acc`.
///
/// # Errors
///
/// Returns [`PolyError::NonInvertibleLeadingCoefficient`] if any division
/// in the chain meets a non-invertible leading coefficient.
pub fn half_gcd(
    f: &ModPoly,
    g: &ModPoly,
    acc: &mut ResultantAccumulator,
    ring: &ModRing,
) -> Result<(TransformMatrix, ModPoly, ModPoly), PolyError> {
    debug_assert!(f.degree() > g.degree());

    let df = f.degree();
    let d_red = usize::try_from(df - df / 2 + 1).unwrap_or(1);
    let m = hgcd_rec(f, g, d_red, 0, acc, ring)?;
    let (fs, gs) = m.apply(f, g, ring);
    Ok((m, fs, gs))
}

/// Recursive worker: reduces until `deg g <= deg f - d_red`.
///
/// Works on operands truncated to their top `2*d_red + 5` coefficients.
/// The truncation keeps enough headroom that every quotient computed here
/// coincides with the quotient of the untruncated chain, so degrees and
/// leading coefficients of the local remainders are exact; `shift` carries
/// the discarded low-order length so the accumulator sees true degrees.
fn hgcd_rec(
    f: &ModPoly,
    g: &ModPoly,
    d_red: usize,
    shift: usize,
    acc: &mut ResultantAccumulator,
    ring: &ModRing,
) -> Result<TransformMatrix, PolyError> {
    if g.is_zero() || g.degree() <= f.degree() - d_red as isize {
        return Ok(TransformMatrix::identity(ring));
    }

    let n = usize::try_from(f.degree()).unwrap_or(0).saturating_sub(2 * d_red + 5);
    let a = f.shr(n);
    let b = g.shr(n);
    let shift = shift + n;

    if d_red <= ITER_CROSSOVER {
        return iter_half_gcd(a, b, d_red, shift, acc, ring);
    }

    let d1 = ((d_red + 1) / 2).clamp(1, d_red - 1);
    let m1 = hgcd_rec(&a, &b, d1, shift, acc, ring)?;
    let (a, b) = m1.apply(&a, &b, ring);

    // remaining reduction relative to the local goal deg a_orig - d_red
    let goal = f.degree() - n as isize - d_red as isize;
    if b.is_zero() || b.degree() <= goal {
        return Ok(m1);
    }

    let lc = b.leading_coeff()?.clone();
    acc.open_step(
        a.degree() as usize + shift,
        b.degree() as usize + shift,
        &lc,
        ring,
    )?;
    let (q, r) = a.div_rem(&b, ring)?;
    let mut m1 = m1;
    m1.push_quotient(&q, ring);

    let d2 = usize::try_from(b.degree() - goal).unwrap_or(0);
    let m2 = hgcd_rec(&b, &r, d2, shift, acc, ring)?;
    Ok(m2.compose(&m1, ring))
}

/// Base case: iterated classical divisions on the (already truncated)
/// pair, folding each quotient into the transform.
fn iter_half_gcd(
    mut f: ModPoly,
    mut g: ModPoly,
    d_red: usize,
    shift: usize,
    acc: &mut ResultantAccumulator,
    ring: &ModRing,
) -> Result<TransformMatrix, PolyError> {
    let goal = f.degree() - d_red as isize;
    let mut m = TransformMatrix::identity(ring);

    while !g.is_zero() && g.degree() > goal {
        let lc = g.leading_coeff()?.clone();
        acc.open_step(
            f.degree() as usize + shift,
            g.degree() as usize + shift,
            &lc,
            ring,
        )?;
        let (q, r) = f.div_rem(&g, ring)?;
        m.push_quotient(&q, ring);
        f = std::mem::replace(&mut g, r);
    }

    Ok(m)
}
