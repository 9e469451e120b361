//! A reference full-reduction scheduler.

use tracing::trace;

use summa_poly::{PPElem, SparsePoly};
use summa_rings::{Result, Ring};

use crate::cog::ReductionCog;

/// Counters from one [`normal_form`] run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReductionStats {
    /// Reduction steps performed.
    pub reductions: usize,
    /// Leading terms found irreducible.
    pub irreducible: usize,
}

/// Fully reduces `f` by `reducers` using `cog`, writing the remainder back
/// into `f`.
///
/// At each step the first reducer whose leading power product divides the
/// active one is used; when none applies, the leading term is final. Zero
/// reducers are skipped. Over a gcd domain the result is a multiple of the
/// remainder by a non-zero constant.
///
/// # Errors
///
/// Propagates errors from the cog, notably `MixedRings` if a reducer
/// belongs to another ring.
pub fn normal_form<C: Ring>(
    cog: &mut dyn ReductionCog<C>,
    f: &mut SparsePoly<C>,
    reducers: &[SparsePoly<C>],
) -> Result<ReductionStats> {
    let lpps: Vec<Option<PPElem>> = reducers.iter().map(SparsePoly::leading_pp).collect();
    let mut stats = ReductionStats::default();

    cog.assign_reset(f, f.num_terms())?;
    while !cog.is_active_zero() {
        let lpp = cog.active_lpp()?;
        let found = lpps
            .iter()
            .position(|g| g.as_ref().is_some_and(|g| lpp.is_divisible_by(g)));
        match found {
            Some(i) => {
                cog.reduce(&reducers[i], reducers[i].num_terms())?;
                stats.reductions += 1;
            }
            None => {
                cog.move_to_next_lm()?;
                stats.irreducible += 1;
            }
        }
    }
    cog.release(f)?;

    trace!(
        reductions = stats.reductions,
        irreducible = stats.irreducible,
        "normal form done"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cog::{
        new_red_cog_geobucket_field, new_red_cog_geobucket_gcd, new_red_cog_poly_field,
        new_red_cog_poly_gcd,
    };
    use summa_poly::{RingConfig, SparsePolyRing, TermOrder};
    use summa_rings::{Q, Z};

    #[test]
    fn test_normal_form_all_field_cogs() {
        let ring: SparsePolyRing<Q> =
            SparsePolyRing::new(RingConfig::new(2).with_order(TermOrder::DegRevLex));
        // x^2 + y^2 - 1 modulo {x - y}
        let f0 = ring
            .from_exponents(vec![
                (Q::from(1), &[2, 0][..]),
                (Q::from(1), &[0, 2][..]),
                (Q::from(-1), &[0, 0][..]),
            ])
            .unwrap();
        let g = ring
            .from_exponents(vec![(Q::from(1), &[1, 0][..]), (Q::from(-1), &[0, 1][..])])
            .unwrap();
        let expected = ring
            .from_exponents(vec![(Q::from(2), &[0, 2][..]), (Q::from(-1), &[0, 0][..])])
            .unwrap();

        let cogs = [
            new_red_cog_poly_field(&ring),
            new_red_cog_poly_gcd(&ring),
            new_red_cog_geobucket_field(&ring),
            new_red_cog_geobucket_gcd(&ring),
        ];
        for mut cog in cogs {
            let mut f = f0.clone();
            let stats = normal_form(cog.as_mut(), &mut f, std::slice::from_ref(&g)).unwrap();
            assert_eq!(f, expected, "{cog:?}");
            assert_eq!(stats.irreducible, 2);
            assert!(stats.reductions >= 2);
        }
    }

    #[test]
    fn test_irreducible_is_unchanged() {
        let ring: SparsePolyRing<Z> = SparsePolyRing::with_indets(2);
        let f0 = ring
            .from_exponents(vec![(Z::from(3), &[0, 2][..]), (Z::from(5), &[0, 0][..])])
            .unwrap();
        let g = ring.indet(0).unwrap();

        for mut cog in [new_red_cog_poly_gcd(&ring), new_red_cog_geobucket_gcd(&ring)] {
            let mut f = f0.clone();
            let stats = normal_form(cog.as_mut(), &mut f, &[g.clone(), ring.zero()]).unwrap();
            assert_eq!(f, f0);
            assert_eq!(stats.reductions, 0);
        }
    }
}
