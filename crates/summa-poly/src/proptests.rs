//! Property-based tests for sparse polynomials and geobuckets.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::config::{GeobucketConfig, RingConfig};
    use crate::geobucket::Geobucket;
    use crate::ordering::TermOrder;
    use crate::ring::SparsePolyRing;
    use crate::sparse::SparsePoly;
    use summa_rings::{Ring, Q, Z};

    type RawPoly = Vec<(i64, [u32; 3])>;

    fn raw_poly() -> impl Strategy<Value = RawPoly> {
        proptest::collection::vec((-5i64..=5i64, proptest::array::uniform3(0u32..4)), 0..8)
    }

    fn any_order() -> impl Strategy<Value = TermOrder> {
        prop_oneof![
            Just(TermOrder::Lex),
            Just(TermOrder::DegLex),
            Just(TermOrder::DegRevLex),
            Just(TermOrder::Weighted(vec![1, 2, 3])),
        ]
    }

    fn build<C: Ring + From<i64>>(ring: &SparsePolyRing<C>, raw: &RawPoly) -> SparsePoly<C> {
        ring.from_terms(raw.iter().map(|(c, e)| (C::from(*c), ring.pp(e))))
            .unwrap()
    }

    proptest! {
        #[test]
        fn construction_is_ordered(order in any_order(), a in raw_poly()) {
            let ring: SparsePolyRing<Q> = SparsePolyRing::new(RingConfig::new(3).with_order(order));
            let f = build(&ring, &a);
            prop_assert!(f.is_valid());
            prop_assert!(f.iter().all(|(c, _)| c != Q::from(0)));
        }

        #[test]
        fn add_clear_is_addition(order in any_order(), a in raw_poly(), b in raw_poly()) {
            let ring: SparsePolyRing<Q> = SparsePolyRing::new(RingConfig::new(3).with_order(order));
            let mut f = build(&ring, &a);
            let mut g = build(&ring, &b);
            let mut all = a.clone();
            all.extend(b.iter().cloned());
            let expected = build(&ring, &all);

            f.add_clear(&mut g).unwrap();
            prop_assert!(g.is_zero());
            prop_assert!(f.is_valid());
            prop_assert_eq!(f, expected);
        }

        #[test]
        fn geobucket_agrees_with_merge(a in raw_poly(), b in raw_poly(), c in raw_poly()) {
            let ring: SparsePolyRing<Z> = SparsePolyRing::with_indets(3);
            let config = GeobucketConfig::default().with_min_bucket_len(1).with_growth(2);
            let mut gb = Geobucket::with_config(ring.clone(), config);
            let mut expected = ring.zero();
            for raw in [&a, &b, &c] {
                let mut p = build(&ring, raw);
                expected.add_clear(&mut p.clone()).unwrap();
                gb.add_clear(&mut p).unwrap();
                prop_assert_eq!(gb.is_zero(), expected.is_zero());
                if !expected.is_zero() {
                    prop_assert_eq!(gb.lpp().unwrap(), expected.lpp().unwrap());
                }
            }
            prop_assert_eq!(gb.into_poly(), expected);
        }

        #[test]
        fn mul_commutes_and_distributes(a in raw_poly(), b in raw_poly(), c in raw_poly()) {
            let ring: SparsePolyRing<Z> = SparsePolyRing::with_indets(3);
            let (f, g, h) = (build(&ring, &a), build(&ring, &b), build(&ring, &c));

            let fg = f.mul(&g).unwrap();
            prop_assert!(fg.is_valid());
            prop_assert_eq!(&fg, &g.mul(&f).unwrap());

            let left = f.mul(&g.add(&h).unwrap()).unwrap();
            let right = fg.add(&f.mul(&h).unwrap()).unwrap();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn reduction_step_lowers_lpp(a in raw_poly(), b in raw_poly(), shift in proptest::array::uniform3(0u32..3)) {
            let ring: SparsePolyRing<Q> = SparsePolyRing::with_indets(3);
            let g = build(&ring, &b);
            prop_assume!(!g.is_zero());
            // f = shift * g + a has an LPP divisible by LPP(g) whenever the
            // shifted copy dominates
            let mut f = build(&ring, &a);
            f.add_mul(&Q::from(1), &ring.pp(&shift), &g).unwrap();
            prop_assume!(!f.is_zero());
            prop_assume!(f.lpp().unwrap().is_divisible_by(&g.lpp().unwrap()));

            let old = f.clone();
            let (c, t) = old.div_lm(&g).unwrap();
            f.reduction_step(&g).unwrap();
            prop_assert!(f.is_valid());
            if !f.is_zero() {
                prop_assert_eq!(f.cmp_lpp(&old).unwrap(), std::cmp::Ordering::Less);
            }

            let mut expected = old;
            expected.add_mul(&-c, &t, &g).unwrap();
            prop_assert_eq!(f, expected);
        }

        #[test]
        fn reduction_step_gcd_tracks_scale(a in raw_poly(), b in raw_poly()) {
            let ring: SparsePolyRing<Z> = SparsePolyRing::with_indets(3);
            let g = build(&ring, &b);
            prop_assume!(!g.is_zero());
            let mut f = build(&ring, &a);
            f.add_mul(&Z::from(3), &ring.pp(&[1, 0, 0]), &g).unwrap();
            prop_assume!(!f.is_zero());
            prop_assume!(f.lpp().unwrap().is_divisible_by(&g.lpp().unwrap()));

            let old = f.clone();
            let scale = f.reduction_step_gcd(&g).unwrap();
            prop_assert!(f.is_valid());
            prop_assert!(!scale.is_negative());

            // scale * old - sg * t * g == new, with sg fixed by the leading terms
            let t = old.lpp().unwrap().div(&g.lpp().unwrap()).unwrap();
            let sg = (scale.clone() * old.lc().unwrap()).div_exact(&g.lc().unwrap()).unwrap();
            let mut expected = old;
            expected.mul_by_coeff(&scale);
            expected.add_mul(&-sg, &t, &g).unwrap();
            prop_assert_eq!(f, expected);
        }

        #[test]
        fn clone_and_drop_release_everything(a in raw_poly(), b in raw_poly()) {
            let ring: SparsePolyRing<Q> = SparsePolyRing::with_indets(3);
            {
                let f = build(&ring, &a);
                let g = build(&ring, &b);
                let _p = f.mul(&g).unwrap();
                let _q = f.clone();
            }
            prop_assert_eq!(ring.live_summands(), 0);
        }
    }
}
