//! Dense univariate polynomials over Z/nZ.
//!
//! Coefficients are canonical representatives in `[0, n)`, stored in
//! ascending degree order with no trailing zeros; the zero polynomial is
//! the empty vector and has degree -1. Every operation takes the ring
//! context explicitly and returns a canonical result.

use num_traits::Zero;
use sylva_integers::Integer;
use sylva_rings::ModRing;

use crate::error::PolyError;

/// A dense univariate polynomial over Z/nZ.
///
/// Multiplication selects its algorithm by degree:
/// - Degree < 32: Schoolbook
/// - Degree >= 32: Karatsuba
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ModPoly {
    /// Canonical coefficients in ascending degree order, no trailing zeros.
    coeffs: Vec<Integer>,
}

impl ModPoly {
    /// Builds a polynomial from coefficients already canonical in `[0, n)`.
    fn from_raw(mut coeffs: Vec<Integer>) -> Self {
        while coeffs.last().map_or(false, Zero::is_zero) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    /// Creates a polynomial from arbitrary integer coefficients, reducing
    /// each one into `[0, n)`.
    #[must_use]
    pub fn from_coeffs(coeffs: &[Integer], ring: &ModRing) -> Self {
        Self::from_raw(coeffs.iter().map(|c| ring.reduce(c)).collect())
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Creates the constant polynomial 1 (the zero polynomial when n = 1).
    #[must_use]
    pub fn one(ring: &ModRing) -> Self {
        Self::from_raw(vec![ring.one()])
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: &Integer, ring: &ModRing) -> Self {
        Self::from_raw(vec![ring.reduce(c)])
    }

    /// Creates the monomial `c * x^k`.
    #[must_use]
    pub fn monomial(c: &Integer, k: usize, ring: &ModRing) -> Self {
        let mut coeffs = vec![Integer::zero(); k + 1];
        coeffs[k] = ring.reduce(c);
        Self::from_raw(coeffs)
    }

    /// Returns the degree, with -1 for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> isize {
        self.coeffs.len() as isize - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns the leading coefficient.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DegreeMismatch`] for the zero polynomial.
    pub fn leading_coeff(&self) -> Result<&Integer, PolyError> {
        self.coeffs.last().ok_or(PolyError::DegreeMismatch)
    }

    /// Returns the coefficient of `x^i` (zero beyond the degree).
    #[must_use]
    pub fn coeff(&self, i: usize) -> Integer {
        self.coeffs.get(i).cloned().unwrap_or_else(Integer::zero)
    }

    /// Returns all stored coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[Integer] {
        &self.coeffs
    }

    /// Evaluates the polynomial at a canonical point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &Integer, ring: &ModRing) -> Integer {
        let mut result = Integer::zero();
        for c in self.coeffs.iter().rev() {
            result = ring.add(&ring.mul(&result, x), c);
        }
        result
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self, ring: &ModRing) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut result = Vec::with_capacity(len);
        for i in 0..len {
            result.push(ring.add(&self.coeff(i), &other.coeff(i)));
        }
        Self::from_raw(result)
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self, ring: &ModRing) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut result = Vec::with_capacity(len);
        for i in 0..len {
            result.push(ring.sub(&self.coeff(i), &other.coeff(i)));
        }
        Self::from_raw(result)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self, ring: &ModRing) -> Self {
        Self::from_raw(self.coeffs.iter().map(|c| ring.neg(c)).collect())
    }

    /// Multiplies by a canonical scalar.
    #[must_use]
    pub fn scale(&self, c: &Integer, ring: &ModRing) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self::from_raw(self.coeffs.iter().map(|x| ring.mul(x, c)).collect())
    }

    /// Multiplies two polynomials.
    ///
    /// Automatically selects the best algorithm based on degree.
    #[must_use]
    pub fn mul(&self, other: &Self, ring: &ModRing) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let max_len = self.coeffs.len().max(other.coeffs.len());
        if max_len < 32 {
            self.mul_schoolbook(other, ring)
        } else {
            self.mul_karatsuba(other, ring)
        }
    }

    /// Schoolbook multiplication: O(n²).
    fn mul_schoolbook(&self, other: &Self, ring: &ModRing) -> Self {
        // Karatsuba can hand us an all-zero split half
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let n = self.coeffs.len();
        let m = other.coeffs.len();
        let mut result = vec![Integer::zero(); n + m - 1];

        for i in 0..n {
            for j in 0..m {
                let term = ring.mul(&self.coeffs[i], &other.coeffs[j]);
                result[i + j] = ring.add(&result[i + j], &term);
            }
        }

        Self::from_raw(result)
    }

    /// Karatsuba multiplication: O(n^1.58).
    fn mul_karatsuba(&self, other: &Self, ring: &ModRing) -> Self {
        let n = self.coeffs.len();
        let m = other.coeffs.len();

        // Base case: schoolbook for small operands
        if n < 32 || m < 32 {
            return self.mul_schoolbook(other, ring);
        }

        let size = n.max(m).next_power_of_two();
        let half = size / 2;

        let mut a_coeffs = self.coeffs.clone();
        let mut b_coeffs = other.coeffs.clone();
        a_coeffs.resize(size, Integer::zero());
        b_coeffs.resize(size, Integer::zero());

        // Split: a = a0 + a1*x^half, b = b0 + b1*x^half
        let a0 = Self::from_raw(a_coeffs[..half].to_vec());
        let a1 = Self::from_raw(a_coeffs[half..].to_vec());
        let b0 = Self::from_raw(b_coeffs[..half].to_vec());
        let b1 = Self::from_raw(b_coeffs[half..].to_vec());

        // a*b = z2*x^(2*half) + z1*x^half + z0
        // where z0 = a0*b0, z2 = a1*b1, z1 = (a0+a1)*(b0+b1) - z0 - z2
        let z0 = a0.mul_karatsuba(&b0, ring);
        let z2 = a1.mul_karatsuba(&b1, ring);
        let z1_sum = a0.add(&a1, ring).mul_karatsuba(&b0.add(&b1, ring), ring);
        let z1 = z1_sum.sub(&z0, ring).sub(&z2, ring);

        let mut result = vec![Integer::zero(); 2 * size - 1];

        for (i, c) in z0.coeffs.iter().enumerate() {
            result[i] = c.clone();
        }
        for (i, c) in z1.coeffs.iter().enumerate() {
            result[i + half] = ring.add(&result[i + half], c);
        }
        for (i, c) in z2.coeffs.iter().enumerate() {
            result[i + 2 * half] = ring.add(&result[i + 2 * half], c);
        }

        Self::from_raw(result)
    }

    /// Multiplies by `x^k` (shift up).
    #[must_use]
    pub fn shift(&self, k: usize) -> Self {
        if self.is_zero() || k == 0 {
            return self.clone();
        }
        let mut coeffs = vec![Integer::zero(); k];
        coeffs.extend(self.coeffs.clone());
        Self { coeffs }
    }

    /// Divides by `x^k`, discarding the low-order coefficients.
    #[must_use]
    pub fn shr(&self, k: usize) -> Self {
        if k == 0 {
            return self.clone();
        }
        if k >= self.coeffs.len() {
            return Self::zero();
        }
        Self::from_raw(self.coeffs[k..].to_vec())
    }

    /// Divides `self` by `divisor`, returning `(quotient, remainder)` with
    /// `self = quotient * divisor + remainder` and
    /// `deg remainder < deg divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DegreeMismatch`] when the divisor is zero, and
    /// [`PolyError::NonInvertibleLeadingCoefficient`] when the divisor's
    /// leading coefficient shares a factor with the modulus.
    pub fn div_rem(&self, divisor: &Self, ring: &ModRing) -> Result<(Self, Self), PolyError> {
        let lc = divisor.leading_coeff()?;
        if self.degree() < divisor.degree() {
            return Ok((Self::zero(), self.clone()));
        }

        let lc_inv = ring.inv(lc).ok_or_else(|| PolyError::NonInvertibleLeadingCoefficient {
            lc: lc.clone(),
            modulus: ring.modulus().clone(),
        })?;

        let dlen = divisor.coeffs.len();
        let mut quotient = vec![Integer::zero(); self.coeffs.len() - dlen + 1];
        let mut remainder = self.coeffs.clone();

        while remainder.len() >= dlen {
            let shift = remainder.len() - dlen;
            // the top coefficient is nonzero and lc_inv is a unit, so q != 0
            let q = ring.mul(&remainder[remainder.len() - 1], &lc_inv);

            for (i, dc) in divisor.coeffs.iter().enumerate().take(dlen - 1) {
                remainder[shift + i] = ring.sub(&remainder[shift + i], &ring.mul(&q, dc));
            }
            quotient[shift] = q;

            // the top term cancels exactly
            remainder.pop();
            while remainder.last().map_or(false, Zero::is_zero) {
                remainder.pop();
            }
        }

        Ok((Self::from_raw(quotient), Self::from_raw(remainder)))
    }
}

impl std::fmt::Display for ModPoly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut terms = Vec::new();
        for (i, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            let term = match i {
                0 => format!("{c}"),
                1 => format!("{c}*x"),
                _ => format!("{c}*x^{i}"),
            };
            terms.push(term);
        }

        write!(f, "{}", terms.join(" + "))
    }
}
