//! The ring Z/nZ with a runtime modulus.
//!
//! All elements handed to the operations here must already be canonical
//! representatives in `[0, n)`; use [`ModRing::reduce`] to canonicalize
//! arbitrary integers first. Every operation returns a canonical value.

use num_traits::{One, Zero};
use sylva_integers::{mulmod_precomp, precompute_inverse, Integer, PrecomputedInverse, MULMOD_MAX_BITS};
use thiserror::Error;

/// Errors from constructing a modular ring.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RingError {
    /// The modulus must be a positive integer.
    #[error("modulus must be positive, got {0}")]
    ModulusNotPositive(Integer),
}

/// Fast-path data for a modulus that fits in a machine word.
#[derive(Clone, Copy, Debug)]
struct WordModulus {
    d: u64,
    pre: PrecomputedInverse,
}

/// The coefficient ring Z/nZ for a positive modulus n.
///
/// The modulus is fixed at construction. When it fits in
/// [`MULMOD_MAX_BITS`] bits, multiplications go through the
/// precomputed-reciprocal word multiplier; otherwise through
/// big-integer reduction. `n = 1` is the zero ring: every element
/// is 0, and the operations remain well defined.
#[derive(Clone, Debug)]
pub struct ModRing {
    modulus: Integer,
    word: Option<WordModulus>,
}

impl ModRing {
    /// Creates the ring Z/nZ.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::ModulusNotPositive`] if `n <= 0`.
    pub fn new(n: Integer) -> Result<Self, RingError> {
        if n.signum() <= 0 {
            return Err(RingError::ModulusNotPositive(n));
        }
        let word = n
            .to_u64()
            .filter(|d| 64 - d.leading_zeros() <= MULMOD_MAX_BITS)
            .map(|d| WordModulus { d, pre: precompute_inverse(d) });
        Ok(Self { modulus: n, word })
    }

    /// Returns the modulus n.
    #[must_use]
    pub fn modulus(&self) -> &Integer {
        &self.modulus
    }

    /// Canonicalizes an arbitrary integer into `[0, n)`.
    #[must_use]
    pub fn reduce(&self, a: &Integer) -> Integer {
        a.rem_euclid(&self.modulus)
    }

    /// The additive identity.
    #[must_use]
    pub fn zero(&self) -> Integer {
        Integer::zero()
    }

    /// The multiplicative identity (0 in the zero ring).
    #[must_use]
    pub fn one(&self) -> Integer {
        self.reduce(&Integer::one())
    }

    /// Adds two canonical elements.
    #[must_use]
    pub fn add(&self, a: &Integer, b: &Integer) -> Integer {
        let s = a + b;
        if s >= self.modulus {
            s - &self.modulus
        } else {
            s
        }
    }

    /// Subtracts two canonical elements.
    #[must_use]
    pub fn sub(&self, a: &Integer, b: &Integer) -> Integer {
        let d = a - b;
        if d.is_negative() {
            d + &self.modulus
        } else {
            d
        }
    }

    /// Negates a canonical element.
    #[must_use]
    pub fn neg(&self, a: &Integer) -> Integer {
        if a.is_zero() {
            Integer::zero()
        } else {
            &self.modulus - a
        }
    }

    /// Multiplies two canonical elements.
    #[must_use]
    pub fn mul(&self, a: &Integer, b: &Integer) -> Integer {
        if let Some(w) = self.word {
            if let (Some(a), Some(b)) = (a.to_u64(), b.to_u64()) {
                return Integer::from(mulmod_precomp(a, b, w.d, w.pre));
            }
        }
        (a * b).rem_euclid(&self.modulus)
    }

    /// Raises a canonical element to a non-negative power by binary
    /// exponentiation.
    #[must_use]
    pub fn pow(&self, base: &Integer, mut exp: u64) -> Integer {
        let mut result = self.one();
        let mut base = base.clone();
        while exp > 0 {
            if exp & 1 == 1 {
                result = self.mul(&result, &base);
            }
            exp >>= 1;
            if exp > 0 {
                base = self.mul(&base, &base);
            }
        }
        result
    }

    /// Returns the multiplicative inverse of a canonical element, or
    /// `None` when `gcd(a, n) != 1`.
    #[must_use]
    pub fn inv(&self, a: &Integer) -> Option<Integer> {
        let (g, x, _) = a.extended_gcd(&self.modulus);
        if g.is_one() {
            Some(x.rem_euclid(&self.modulus))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(n: i64) -> ModRing {
        ModRing::new(Integer::new(n)).unwrap()
    }

    #[test]
    fn test_modulus_not_positive() {
        let err = ModRing::new(Integer::new(0)).unwrap_err();
        assert_eq!(err, RingError::ModulusNotPositive(Integer::new(0)));
        let err = ModRing::new(Integer::new(-5)).unwrap_err();
        assert_eq!(err, RingError::ModulusNotPositive(Integer::new(-5)));
    }

    #[test]
    fn test_reduce_canonical() {
        let r = ring(7);
        assert_eq!(r.reduce(&Integer::new(-3)), Integer::new(4));
        assert_eq!(r.reduce(&Integer::new(10)), Integer::new(3));
        assert_eq!(r.reduce(&Integer::new(7)), Integer::new(0));
    }

    #[test]
    fn test_add_sub_neg_wrap() {
        let r = ring(7);
        assert_eq!(r.add(&Integer::new(5), &Integer::new(4)), Integer::new(2));
        assert_eq!(r.sub(&Integer::new(2), &Integer::new(5)), Integer::new(4));
        assert_eq!(r.neg(&Integer::new(3)), Integer::new(4));
        assert_eq!(r.neg(&Integer::new(0)), Integer::new(0));
    }

    #[test]
    fn test_word_and_big_paths_agree() {
        // 2^61 - 1 exceeds the word-multiplier bit limit, 1000003 doesn't
        let small = ring(1_000_003);
        let big = ModRing::new(
            Integer::from_str_radix("2305843009213693951", 10).unwrap(),
        )
        .unwrap();
        assert!(small.word.is_some());
        assert!(big.word.is_none());

        let a = Integer::new(999_999);
        let b = Integer::new(123_456);
        let expected = (999_999u128 * 123_456) % 1_000_003;
        assert_eq!(small.mul(&a, &b).to_u64(), Some(expected as u64));
        assert_eq!(big.mul(&a, &b), &a * &b);
    }

    #[test]
    fn test_fermat_inverse() {
        let r = ring(101);
        for a in 1..101 {
            let a = Integer::new(a);
            let via_pow = r.pow(&a, 99);
            assert_eq!(r.inv(&a), Some(via_pow.clone()));
            assert_eq!(r.mul(&a, &via_pow), Integer::one());
        }
    }

    #[test]
    fn test_inverse_missing_for_shared_factor() {
        let r = ring(6);
        assert_eq!(r.inv(&Integer::new(2)), None);
        assert_eq!(r.inv(&Integer::new(3)), None);
        assert_eq!(r.inv(&Integer::new(5)), Some(Integer::new(5)));
    }

    #[test]
    fn test_zero_ring() {
        let r = ring(1);
        assert_eq!(r.one(), Integer::zero());
        assert_eq!(r.mul(&Integer::zero(), &Integer::zero()), Integer::zero());
        assert_eq!(r.pow(&Integer::zero(), 10), Integer::zero());
    }

    #[test]
    fn test_pow_edges() {
        let r = ring(13);
        assert_eq!(r.pow(&Integer::new(5), 0), Integer::one());
        assert_eq!(r.pow(&Integer::new(0), 0), Integer::one());
        assert_eq!(r.pow(&Integer::new(2), 12), Integer::one());
    }
}
