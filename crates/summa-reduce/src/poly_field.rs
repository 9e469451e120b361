//! Flat reduction over a field.

use std::fmt;

use tracing::debug;

use summa_poly::{PPElem, SparsePoly, SparsePolyRing};
use summa_rings::{Field, Result};

use crate::cog::{check_ring, require_active, CogState, ReductionCog, Sealed};

/// Reduces a flat polynomial with exact field division.
pub struct RedCogPolyField<C: Field> {
    ring: SparsePolyRing<C>,
    active: SparsePoly<C>,
    ignored: SparsePoly<C>,
    state: CogState,
}

impl<C: Field> RedCogPolyField<C> {
    /// Creates an idle cog for `ring`.
    #[must_use]
    pub fn new(ring: &SparsePolyRing<C>) -> Self {
        Self {
            ring: ring.clone(),
            active: ring.zero(),
            ignored: ring.zero(),
            state: CogState::Empty,
        }
    }
}

impl<C: Field> Sealed for RedCogPolyField<C> {}

impl<C: Field> ReductionCog<C> for RedCogPolyField<C> {
    fn ring(&self) -> &SparsePolyRing<C> {
        &self.ring
    }

    fn state(&self) -> CogState {
        self.state
    }

    fn assign_reset(&mut self, f: &mut SparsePoly<C>, _len_hint: usize) -> Result<()> {
        check_ring(&self.ring, f, "RedCogPolyField::assign_reset")?;
        self.active.clear();
        self.active.swap(f)?;
        self.ignored.clear();
        self.state = CogState::Assigned;
        Ok(())
    }

    fn active_lpp(&self) -> Result<PPElem> {
        const OP: &str = "RedCogPolyField::active_lpp";
        require_active(self.state, self.active.is_zero(), OP)?;
        self.active.lpp()
    }

    fn is_active_zero(&self) -> bool {
        self.active.is_zero()
    }

    fn reduce(&mut self, reducer: &SparsePoly<C>, _len_hint: usize) -> Result<()> {
        const OP: &str = "RedCogPolyField::reduce";
        require_active(self.state, self.active.is_zero(), OP)?;
        self.active.reduction_step(reducer)?;
        self.state = CogState::Reducing;
        Ok(())
    }

    fn move_to_next_lm(&mut self) -> Result<()> {
        const OP: &str = "RedCogPolyField::move_to_next_lm";
        require_active(self.state, self.active.is_zero(), OP)?;
        self.ignored.move_lm_to_back(&mut self.active)?;
        self.state = CogState::Reducing;
        Ok(())
    }

    fn release(&mut self, f: &mut SparsePoly<C>) -> Result<()> {
        const OP: &str = "RedCogPolyField::release";
        self.state.require_session(OP)?;
        check_ring(&self.ring, f, OP)?;
        f.clear();
        f.swap(&mut self.ignored)?;
        f.append_clear(&mut self.active)?;
        self.state = CogState::Released;
        debug!(cog = "PolyField", terms = f.num_terms(), "released reduction session");
        Ok(())
    }
}

impl<C: Field> fmt::Debug for RedCogPolyField<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedCogPolyField")
            .field("state", &self.state)
            .field("active", &self.active)
            .field("ignored", &self.ignored)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use summa_poly::{RingConfig, TermOrder};
    use summa_rings::Q;

    #[test]
    fn test_reduces_to_remainder() {
        let ring: SparsePolyRing<Q> =
            SparsePolyRing::new(RingConfig::new(1).with_order(TermOrder::Lex));
        let g = ring
            .from_exponents(vec![(Q::from(1), &[1][..]), (Q::from(1), &[0][..])])
            .unwrap();
        let mut f = ring
            .from_exponents(vec![
                (Q::from(1), &[2][..]),
                (Q::from(3), &[1][..]),
                (Q::from(5), &[0][..]),
            ])
            .unwrap();

        let mut cog = RedCogPolyField::new(&ring);
        cog.assign_reset(&mut f, 3).unwrap();
        cog.reduce(&g, 2).unwrap();
        cog.reduce(&g, 2).unwrap();
        assert_eq!(cog.active_lpp().unwrap(), ring.pp(&[0]));
        cog.release(&mut f).unwrap();

        // x^2 + 3x + 5 = (x + 2)(x + 1) + 3
        assert_eq!(f, ring.constant(Q::from(3)));
    }
}
