//! Property-based tests for the modular ring.

#[cfg(test)]
mod tests {
    use num_traits::One;
    use proptest::prelude::*;
    use sylva_integers::Integer;

    use crate::ModRing;

    const WORD_PRIME: u64 = 998_244_353;

    fn word_ring() -> ModRing {
        ModRing::new(Integer::from(WORD_PRIME)).unwrap()
    }

    fn big_ring() -> ModRing {
        // 2^89 - 1, well past the word-multiplier limit
        ModRing::new(Integer::from_str_radix("618970019642690137449562111", 10).unwrap())
            .unwrap()
    }

    proptest! {
        #[test]
        fn word_mul_matches_exact(a in 0..WORD_PRIME, b in 0..WORD_PRIME) {
            let r = word_ring();
            let exact = ((u128::from(a) * u128::from(b)) % u128::from(WORD_PRIME)) as u64;
            prop_assert_eq!(r.mul(&Integer::from(a), &Integer::from(b)), Integer::from(exact));
        }

        #[test]
        fn inverse_is_two_sided(a in 1..WORD_PRIME) {
            let r = word_ring();
            let a = Integer::from(a);
            let inv = r.inv(&a).unwrap();
            prop_assert_eq!(r.mul(&a, &inv), Integer::one());
            prop_assert_eq!(r.mul(&inv, &a), Integer::one());
        }

        #[test]
        fn big_path_ring_axioms(a in 0i64..1_000_000, b in 0i64..1_000_000, c in 0i64..1_000_000) {
            let r = big_ring();
            let (a, b, c) = (Integer::new(a), Integer::new(b), Integer::new(c));

            prop_assert_eq!(r.mul(&a, &b), r.mul(&b, &a));
            prop_assert_eq!(
                r.mul(&a, &r.add(&b, &c)),
                r.add(&r.mul(&a, &b), &r.mul(&a, &c))
            );
            prop_assert_eq!(r.add(&a, &r.neg(&a)), r.zero());
        }

        #[test]
        fn pow_splits_exponents(a in 0..WORD_PRIME, e1 in 0u64..64, e2 in 0u64..64) {
            let r = word_ring();
            let a = Integer::from(a);
            prop_assert_eq!(
                r.pow(&a, e1 + e2),
                r.mul(&r.pow(&a, e1), &r.pow(&a, e2))
            );
        }
    }
}
