//! Geobucket fraction-free reduction over a gcd domain.
//!
//! Same bookkeeping as the flat fraction-free cog, with the active part in
//! a geobucket. Before a leading term leaves the active part (and before
//! release) the pending scale is reduced by its gcd with the content of
//! the active part, so the multiplier finally applied to the ignored part
//! stays as small as possible.

use std::fmt;

use tracing::{debug, trace};

use summa_poly::{Geobucket, PPElem, SparsePoly, SparsePolyRing};
use summa_rings::{GcdDomain, Result};

use crate::cog::{check_ring, require_active, CogState, ReductionCog, Sealed};
use crate::config::CogConfig;

/// Reduces with a geobucket active part, without dividing coefficients.
pub struct RedCogGeobucketGcd<C: GcdDomain> {
    ring: SparsePolyRing<C>,
    active: Geobucket<C>,
    ignored: SparsePoly<C>,
    ignored_scale: C,
    reductions: usize,
    state: CogState,
}

impl<C: GcdDomain> RedCogGeobucketGcd<C> {
    /// Creates an idle cog with default bucket sizes.
    #[must_use]
    pub fn new(ring: &SparsePolyRing<C>) -> Self {
        Self::with_config(ring, CogConfig::default())
    }

    /// Creates an idle cog.
    #[must_use]
    pub fn with_config(ring: &SparsePolyRing<C>, config: CogConfig) -> Self {
        Self {
            ring: ring.clone(),
            active: Geobucket::with_config(ring.clone(), config.geobucket),
            ignored: ring.zero(),
            ignored_scale: C::one(),
            reductions: 0,
            state: CogState::Empty,
        }
    }

    /// The pending scale of the ignored part.
    #[must_use]
    pub fn ignored_scale(&self) -> &C {
        &self.ignored_scale
    }

    /// Divides the shared factor of the pending scale and the active part
    /// out of both, then applies what is left of the scale.
    fn settle_scale(&mut self) -> Result<()> {
        if self.ignored_scale.is_one() {
            return Ok(());
        }
        let g = self.active.content().gcd(&self.ignored_scale);
        if !g.is_one() {
            self.active.div_by_coeff(&g)?;
            self.ignored_scale = self.ignored_scale.div_exact(&g)?;
            trace!(common = %g, "shrunk pending scale");
        }
        if !self.ignored_scale.is_one() {
            self.ignored.mul_by_coeff(&self.ignored_scale);
            self.ignored_scale = C::one();
        }
        Ok(())
    }
}

impl<C: GcdDomain> Sealed for RedCogGeobucketGcd<C> {}

impl<C: GcdDomain> ReductionCog<C> for RedCogGeobucketGcd<C> {
    fn ring(&self) -> &SparsePolyRing<C> {
        &self.ring
    }

    fn state(&self) -> CogState {
        self.state
    }

    fn assign_reset(&mut self, f: &mut SparsePoly<C>, len_hint: usize) -> Result<()> {
        check_ring(&self.ring, f, "RedCogGeobucketGcd::assign_reset")?;
        self.active.clear();
        self.active.reserve(len_hint);
        self.active.add_clear(f)?;
        self.ignored.clear();
        self.ignored_scale = C::one();
        self.reductions = 0;
        self.state = CogState::Assigned;
        Ok(())
    }

    fn active_lpp(&self) -> Result<PPElem> {
        require_active(self.state, self.active.is_zero(), "RedCogGeobucketGcd::active_lpp")?;
        self.active.lpp()
    }

    fn is_active_zero(&self) -> bool {
        self.active.is_zero()
    }

    fn reduce(&mut self, reducer: &SparsePoly<C>, len_hint: usize) -> Result<()> {
        require_active(self.state, self.active.is_zero(), "RedCogGeobucketGcd::reduce")?;
        let scale = self.active.reduction_step_gcd(reducer, len_hint)?;
        if !self.ignored.is_zero() {
            self.ignored_scale = self.ignored_scale.clone() * scale;
        }
        self.reductions += 1;
        self.state = CogState::Reducing;
        Ok(())
    }

    fn move_to_next_lm(&mut self) -> Result<()> {
        const OP: &str = "RedCogGeobucketGcd::move_to_next_lm";
        require_active(self.state, self.active.is_zero(), OP)?;
        self.settle_scale()?;
        self.active.move_lm_to_back(&mut self.ignored)?;
        self.state = CogState::Reducing;
        Ok(())
    }

    fn release(&mut self, f: &mut SparsePoly<C>) -> Result<()> {
        const OP: &str = "RedCogGeobucketGcd::release";
        self.state.require_session(OP)?;
        check_ring(&self.ring, f, OP)?;
        self.settle_scale()?;
        f.clear();
        f.swap(&mut self.ignored)?;
        self.active.add_clear_into(f)?;
        self.state = CogState::Released;
        debug!(
            cog = "GeobucketGCD",
            reductions = self.reductions,
            terms = f.num_terms(),
            "released reduction session"
        );
        Ok(())
    }
}

impl<C: GcdDomain> fmt::Debug for RedCogGeobucketGcd<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedCogGeobucketGcd")
            .field("state", &self.state)
            .field("active", &self.active)
            .field("ignored", &self.ignored)
            .field("ignored_scale", &self.ignored_scale)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use summa_poly::{RingConfig, TermOrder};
    use summa_rings::Z;

    #[test]
    fn test_scale_shrinks_against_content() {
        let ring: SparsePolyRing<Z> =
            SparsePolyRing::new(RingConfig::new(2).with_order(TermOrder::Lex));
        let mut f = ring
            .from_exponents(vec![
                (Z::from(1), &[2, 0][..]),
                (Z::from(1), &[0, 1][..]),
                (Z::from(1), &[0, 0][..]),
            ])
            .unwrap();
        let g = ring
            .from_exponents(vec![(Z::from(2), &[0, 1][..]), (Z::from(4), &[0, 0][..])])
            .unwrap();

        let mut cog = RedCogGeobucketGcd::new(&ring);
        cog.assign_reset(&mut f, 3).unwrap();
        cog.move_to_next_lm().unwrap();
        cog.reduce(&g, 2).unwrap();
        // 2 * (y + 1) - (2y + 4) = -2, pending scale 2
        assert_eq!(cog.ignored_scale(), &Z::from(2));

        cog.move_to_next_lm().unwrap();
        assert!(cog.is_active_zero());
        cog.release(&mut f).unwrap();

        // gcd(-2, 2) = 2 is divided out instead of doubling x^2
        let expected = ring
            .from_exponents(vec![(Z::from(1), &[2, 0][..]), (Z::from(-1), &[0, 0][..])])
            .unwrap();
        assert_eq!(f, expected);
    }
}
