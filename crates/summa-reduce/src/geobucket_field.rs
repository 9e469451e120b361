//! Geobucket reduction over a field.

use std::fmt;

use tracing::debug;

use summa_poly::{Geobucket, PPElem, SparsePoly, SparsePolyRing};
use summa_rings::{Field, Result};

use crate::cog::{check_ring, require_active, CogState, ReductionCog, Sealed};
use crate::config::CogConfig;

/// Reduces with the active part held in a geobucket, so that long
/// reducers are added at amortized cost.
pub struct RedCogGeobucketField<C: Field> {
    ring: SparsePolyRing<C>,
    active: Geobucket<C>,
    ignored: SparsePoly<C>,
    state: CogState,
}

impl<C: Field> RedCogGeobucketField<C> {
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
            state: CogState::Empty,
        }
    }
}

impl<C: Field> Sealed for RedCogGeobucketField<C> {}

impl<C: Field> ReductionCog<C> for RedCogGeobucketField<C> {
    fn ring(&self) -> &SparsePolyRing<C> {
        &self.ring
    }

    fn state(&self) -> CogState {
        self.state
    }

    fn assign_reset(&mut self, f: &mut SparsePoly<C>, len_hint: usize) -> Result<()> {
        check_ring(&self.ring, f, "RedCogGeobucketField::assign_reset")?;
        self.active.clear();
        self.active.reserve(len_hint);
        self.active.add_clear(f)?;
        self.ignored.clear();
        self.state = CogState::Assigned;
        Ok(())
    }

    fn active_lpp(&self) -> Result<PPElem> {
        require_active(self.state, self.active.is_zero(), "RedCogGeobucketField::active_lpp")?;
        self.active.lpp()
    }

    fn is_active_zero(&self) -> bool {
        self.active.is_zero()
    }

    fn reduce(&mut self, reducer: &SparsePoly<C>, len_hint: usize) -> Result<()> {
        require_active(self.state, self.active.is_zero(), "RedCogGeobucketField::reduce")?;
        self.active.reduction_step(reducer, len_hint)?;
        self.state = CogState::Reducing;
        Ok(())
    }

    fn move_to_next_lm(&mut self) -> Result<()> {
        const OP: &str = "RedCogGeobucketField::move_to_next_lm";
        require_active(self.state, self.active.is_zero(), OP)?;
        self.active.move_lm_to_back(&mut self.ignored)?;
        self.state = CogState::Reducing;
        Ok(())
    }

    fn release(&mut self, f: &mut SparsePoly<C>) -> Result<()> {
        const OP: &str = "RedCogGeobucketField::release";
        self.state.require_session(OP)?;
        check_ring(&self.ring, f, OP)?;
        f.clear();
        f.swap(&mut self.ignored)?;
        self.active.add_clear_into(f)?;
        self.state = CogState::Released;
        debug!(cog = "GeobucketField", terms = f.num_terms(), "released reduction session");
        Ok(())
    }
}

impl<C: Field> fmt::Debug for RedCogGeobucketField<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedCogGeobucketField")
            .field("state", &self.state)
            .field("active", &self.active)
            .field("ignored", &self.ignored)
            .finish()
    }
}
