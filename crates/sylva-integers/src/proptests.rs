//! Property-based tests for integer and mulmod arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::integer::Integer;
    use crate::mulmod::{mulmod_precomp, precompute_inverse, MULMOD_MAX_BITS};

    fn word_modulus() -> impl Strategy<Value = u64> {
        // moduli across the full permitted bit range
        (1u32..=MULMOD_MAX_BITS).prop_flat_map(|bits| {
            let lo = if bits == 1 { 1 } else { 1u64 << (bits - 1) };
            let hi = (1u64 << bits) - 1;
            lo..=hi
        })
    }

    proptest! {
        // Fast-multiplier consistency: the precomputed-reciprocal product
        // must equal the exact double-width remainder.
        #[test]
        fn mulmod_matches_double_width_remainder(
            (d, a, b) in word_modulus().prop_flat_map(|d| (Just(d), 0..d, 0..d))
        ) {
            let pre = precompute_inverse(d);
            let expected = ((u128::from(a) * u128::from(b)) % u128::from(d)) as u64;
            prop_assert_eq!(mulmod_precomp(a, b, d, pre), expected);
        }

        #[test]
        fn extended_gcd_bezout(a in -10_000i64..10_000, b in -10_000i64..10_000) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let (g, x, y) = a.extended_gcd(&b);

            prop_assert_eq!(x * a.clone() + y * b.clone(), g.clone());
            prop_assert!(g.signum() >= 0);
            prop_assert_eq!(g, a.gcd(&b));
        }

        #[test]
        fn rem_euclid_canonical(a in -100_000i64..100_000, n in 1i64..10_000) {
            let n = Integer::new(n);
            let r = Integer::new(a).rem_euclid(&n);

            prop_assert!(r.signum() >= 0);
            prop_assert!(r < n);
        }
    }
}
