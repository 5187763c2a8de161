//! Property-based tests for polynomial arithmetic and resultants.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;
    use sylva_integers::Integer;
    use sylva_rings::ModRing;

    use crate::algorithms::resultant::{resultant, resultant_classical};
    use crate::dense::ModPoly;

    const P: i64 = 101;

    fn ring() -> ModRing {
        ModRing::new(Integer::new(P)).unwrap()
    }

    fn small_poly() -> impl Strategy<Value = Vec<i64>> {
        proptest::collection::vec(0..P, 0..=6)
    }

    fn wide_poly() -> impl Strategy<Value = Vec<i64>> {
        // lengths straddling the Karatsuba threshold
        proptest::collection::vec(0..P, 1..=40)
    }

    fn build(coeffs: &[i64], r: &ModRing) -> ModPoly {
        let coeffs: Vec<Integer> = coeffs.iter().map(|&c| Integer::new(c)).collect();
        ModPoly::from_coeffs(&coeffs, r)
    }

    // Reference schoolbook multiplication
    fn schoolbook_mul(a: &ModPoly, b: &ModPoly, r: &ModRing) -> ModPoly {
        if a.is_zero() || b.is_zero() {
            return ModPoly::zero();
        }
        let mut result = vec![Integer::zero(); a.coeffs().len() + b.coeffs().len() - 1];
        for (i, ai) in a.coeffs().iter().enumerate() {
            for (j, bj) in b.coeffs().iter().enumerate() {
                result[i + j] = r.add(&result[i + j], &r.mul(ai, bj));
            }
        }
        ModPoly::from_coeffs(&result, r)
    }

    proptest! {
        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            let r = ring();
            let (a, b) = (build(&a, &r), build(&b, &r));
            prop_assert_eq!(a.add(&b, &r), b.add(&a, &r));
        }

        #[test]
        fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            let r = ring();
            let (a, b, c) = (build(&a, &r), build(&b, &r), build(&c, &r));
            prop_assert_eq!(a.mul(&b, &r).mul(&c, &r), a.mul(&b.mul(&c, &r), &r));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            let r = ring();
            let (a, b, c) = (build(&a, &r), build(&b, &r), build(&c, &r));
            let left = a.mul(&b.add(&c, &r), &r);
            let right = a.mul(&b, &r).add(&a.mul(&c, &r), &r);
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            let r = ring();
            let a = build(&a, &r);
            prop_assert!(a.add(&a.neg(&r), &r).is_zero());
        }

        #[test]
        fn poly_mul_degree(a in small_poly(), b in small_poly()) {
            let r = ring();
            let (a, b) = (build(&a, &r), build(&b, &r));
            // over a prime modulus degrees add exactly
            if !a.is_zero() && !b.is_zero() {
                prop_assert_eq!(a.mul(&b, &r).degree(), a.degree() + b.degree());
            }
        }

        // Evaluation is a ring homomorphism

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in 0..P) {
            let r = ring();
            let (a, b) = (build(&a, &r), build(&b, &r));
            let x = Integer::new(x);
            prop_assert_eq!(
                a.mul(&b, &r).eval(&x, &r),
                r.mul(&a.eval(&x, &r), &b.eval(&x, &r))
            );
        }

        // Karatsuba vs schoolbook equivalence

        #[test]
        fn karatsuba_matches_schoolbook(a in wide_poly(), b in wide_poly()) {
            let r = ring();
            let (a, b) = (build(&a, &r), build(&b, &r));
            prop_assert_eq!(a.mul(&b, &r), schoolbook_mul(&a, &b, &r));
        }

        // Division

        #[test]
        fn div_rem_identity(a in small_poly(), b in small_poly()) {
            let r = ring();
            let (a, b) = (build(&a, &r), build(&b, &r));
            prop_assume!(!b.is_zero());

            let (q, rem) = a.div_rem(&b, &r).unwrap();
            prop_assert!(rem.degree() < b.degree());
            prop_assert_eq!(q.mul(&b, &r).add(&rem, &r), a);
        }

        // Resultant properties at small degrees

        #[test]
        fn resultant_agrees_with_classical(a in small_poly(), b in small_poly()) {
            let r = ring();
            let (a, b) = (build(&a, &r), build(&b, &r));
            prop_assert_eq!(
                resultant(&a, &b, &r).unwrap(),
                resultant_classical(&a, &b, &r).unwrap()
            );
        }

        #[test]
        fn resultant_antisymmetry(a in small_poly(), b in small_poly()) {
            let r = ring();
            let (a, b) = (build(&a, &r), build(&b, &r));
            prop_assume!(a.degree() > 0 && b.degree() > 0);

            let ab = resultant(&a, &b, &r).unwrap();
            let ba = resultant(&b, &a, &r).unwrap();
            let expected = if a.degree() % 2 == 1 && b.degree() % 2 == 1 {
                r.neg(&ba)
            } else {
                ba
            };
            prop_assert_eq!(ab, expected);
        }
    }
}
