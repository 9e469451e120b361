//! Property-based tests for the reduction cogs.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::cog::{
        new_red_cog_geobucket_field_with, new_red_cog_geobucket_gcd_with, new_red_cog_poly_field,
        new_red_cog_poly_gcd_with, ReductionCog,
    };
    use crate::config::CogConfig;
    use crate::normal_form::normal_form;
    use summa_poly::{GeobucketConfig, RingConfig, SparsePoly, SparsePolyRing, TermOrder};
    use summa_rings::{Field, Q, Ring, Z};

    type RawPoly = Vec<(i64, [u32; 2])>;

    fn raw_poly() -> impl Strategy<Value = RawPoly> {
        proptest::collection::vec((-4i64..=4i64, proptest::array::uniform2(0u32..4)), 0..6)
    }

    fn raw_reducers() -> impl Strategy<Value = Vec<RawPoly>> {
        proptest::collection::vec(raw_poly(), 1..4)
    }

    fn build<C: Ring + From<i64>>(ring: &SparsePolyRing<C>, raw: &RawPoly) -> SparsePoly<C> {
        ring.from_terms(raw.iter().map(|(c, e)| (C::from(*c), ring.pp(e))))
            .unwrap()
    }

    fn small_config() -> CogConfig {
        CogConfig::default()
            .with_content_interval(2)
            .with_geobucket(GeobucketConfig::default().with_min_bucket_len(1).with_growth(2))
    }

    fn reduce_with(
        cog: &mut dyn ReductionCog<Q>,
        ring: &SparsePolyRing<Q>,
        f: &RawPoly,
        reducers: &[SparsePoly<Q>],
    ) -> SparsePoly<Q> {
        let mut p = build(ring, f);
        normal_form(cog, &mut p, reducers).unwrap();
        p
    }

    proptest! {
        #[test]
        fn all_cogs_agree_over_a_field(f in raw_poly(), gs in raw_reducers()) {
            let ring: SparsePolyRing<Q> =
                SparsePolyRing::new(RingConfig::new(2).with_order(TermOrder::DegLex));
            let reducers: Vec<_> = gs.iter().map(|g| build(&ring, g)).collect();

            let reference = reduce_with(new_red_cog_poly_field(&ring).as_mut(), &ring, &f, &reducers);
            prop_assert!(reference.is_valid());

            // Fully reduced: no term is divisible by a reducer's LPP
            for (_, pp) in &reference {
                for g in &reducers {
                    if let Some(lpp) = g.leading_pp() {
                        prop_assert!(!pp.is_divisible_by(&lpp));
                    }
                }
            }

            // Over a field every gcd scale is 1, so all cogs produce the same value
            for mut cog in [
                new_red_cog_poly_gcd_with(&ring, small_config()),
                new_red_cog_geobucket_field_with(&ring, small_config()),
                new_red_cog_geobucket_gcd_with(&ring, small_config()),
            ] {
                let r = reduce_with(cog.as_mut(), &ring, &f, &reducers);
                prop_assert_eq!(&r, &reference);
            }
        }

        #[test]
        fn normal_form_is_idempotent(f in raw_poly(), gs in raw_reducers()) {
            let ring: SparsePolyRing<Q> = SparsePolyRing::with_indets(2);
            let reducers: Vec<_> = gs.iter().map(|g| build(&ring, g)).collect();

            let mut cog = new_red_cog_geobucket_field_with(&ring, small_config());
            let mut p = build(&ring, &f);
            normal_form(cog.as_mut(), &mut p, &reducers).unwrap();
            let once = p.clone();
            let stats = normal_form(cog.as_mut(), &mut p, &reducers).unwrap();
            prop_assert_eq!(stats.reductions, 0);
            prop_assert_eq!(p, once);
        }

        #[test]
        fn gcd_result_is_a_multiple_of_field_result(f in raw_poly(), gs in raw_reducers()) {
            let rq: SparsePolyRing<Q> =
                SparsePolyRing::new(RingConfig::new(2).with_order(TermOrder::Lex));
            let rz: SparsePolyRing<Z> =
                SparsePolyRing::new(RingConfig::new(2).with_order(TermOrder::Lex));
            let q_reducers: Vec<_> = gs.iter().map(|g| build(&rq, g)).collect();
            let z_reducers: Vec<_> = gs.iter().map(|g| build(&rz, g)).collect();

            let expected = reduce_with(new_red_cog_poly_field(&rq).as_mut(), &rq, &f, &q_reducers);

            for mut cog in [
                new_red_cog_poly_gcd_with(&rz, small_config()),
                new_red_cog_geobucket_gcd_with(&rz, small_config()),
            ] {
                let mut p = build(&rz, &f);
                normal_form(cog.as_mut(), &mut p, &z_reducers).unwrap();
                prop_assert!(p.is_valid());
                prop_assert_eq!(p.num_terms(), expected.num_terms());
                if p.is_zero() {
                    continue;
                }

                let lambda = Q::from(p.lc().unwrap()) * expected.lc().unwrap().inv().unwrap();
                for ((cz, ppz), (cq, ppq)) in p.iter().zip(expected.iter()) {
                    prop_assert_eq!(ppz.exponents(), ppq.exponents());
                    prop_assert_eq!(Q::from(cz), lambda.clone() * cq);
                }
            }
        }
    }
}
