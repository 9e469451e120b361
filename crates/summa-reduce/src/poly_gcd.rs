//! Flat fraction-free reduction over a gcd domain.
//!
//! Every step multiplies the active part by a scale to make the leading
//! cancellation exact. The ignored part would need the same scale; instead
//! of rescaling it each time, the product of pending scales is kept in
//! `ignored_scale` and applied only when a term is moved or the session
//! ends. The value tracked is therefore
//! `ignored_scale * ignored + active`, a unit-free multiple of the true
//! remainder.
//!
//! Coefficients grow quickly under repeated scaling, so the content of the
//! active part (shared with the pending scale) is divided out every
//! `content_interval` steps.

use std::fmt;

use tracing::debug;

use summa_poly::{PPElem, SparsePoly, SparsePolyRing};
use summa_rings::{GcdDomain, Result};

use crate::cog::{check_ring, require_active, CogState, ReductionCog, Sealed};
use crate::config::CogConfig;

/// Reduces a flat polynomial without dividing coefficients.
pub struct RedCogPolyGcd<C: GcdDomain> {
    ring: SparsePolyRing<C>,
    config: CogConfig,
    active: SparsePoly<C>,
    ignored: SparsePoly<C>,
    ignored_scale: C,
    reductions: usize,
    state: CogState,
}

impl<C: GcdDomain> RedCogPolyGcd<C> {
    /// Creates an idle cog with default tuning.
    #[must_use]
    pub fn new(ring: &SparsePolyRing<C>) -> Self {
        Self::with_config(ring, CogConfig::default())
    }

    /// Creates an idle cog.
    #[must_use]
    pub fn with_config(ring: &SparsePolyRing<C>, config: CogConfig) -> Self {
        Self {
            ring: ring.clone(),
            config,
            active: ring.zero(),
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

    /// Number of reduction steps in the current session.
    #[must_use]
    pub fn reductions(&self) -> usize {
        self.reductions
    }

    fn flush_scale(&mut self) {
        if !self.ignored_scale.is_one() {
            self.ignored.mul_by_coeff(&self.ignored_scale);
            self.ignored_scale = C::one();
        }
    }

    fn remove_content(&mut self) -> Result<()> {
        let mut g = self.active.content();
        if !self.ignored.is_zero() {
            g = g.gcd(&self.ignored_scale);
        }
        if g.is_zero() || g.is_one() {
            return Ok(());
        }
        self.active.div_by_coeff(&g)?;
        if !self.ignored.is_zero() {
            self.ignored_scale = self.ignored_scale.div_exact(&g)?;
        }
        debug!(reductions = self.reductions, content = %g, "removed content from active part");
        Ok(())
    }
}

impl<C: GcdDomain> Sealed for RedCogPolyGcd<C> {}

impl<C: GcdDomain> ReductionCog<C> for RedCogPolyGcd<C> {
    fn ring(&self) -> &SparsePolyRing<C> {
        &self.ring
    }

    fn state(&self) -> CogState {
        self.state
    }

    fn assign_reset(&mut self, f: &mut SparsePoly<C>, _len_hint: usize) -> Result<()> {
        check_ring(&self.ring, f, "RedCogPolyGcd::assign_reset")?;
        self.active.clear();
        self.active.swap(f)?;
        self.ignored.clear();
        self.ignored_scale = C::one();
        self.reductions = 0;
        self.state = CogState::Assigned;
        Ok(())
    }

    fn active_lpp(&self) -> Result<PPElem> {
        require_active(self.state, self.active.is_zero(), "RedCogPolyGcd::active_lpp")?;
        self.active.lpp()
    }

    fn is_active_zero(&self) -> bool {
        self.active.is_zero()
    }

    fn reduce(&mut self, reducer: &SparsePoly<C>, _len_hint: usize) -> Result<()> {
        require_active(self.state, self.active.is_zero(), "RedCogPolyGcd::reduce")?;
        let scale = self.active.reduction_step_gcd(reducer)?;
        if !self.ignored.is_zero() {
            self.ignored_scale = self.ignored_scale.clone() * scale;
        }
        self.reductions += 1;
        self.state = CogState::Reducing;

        if self.config.content_due(self.reductions) {
            self.remove_content()?;
        }
        Ok(())
    }

    fn move_to_next_lm(&mut self) -> Result<()> {
        const OP: &str = "RedCogPolyGcd::move_to_next_lm";
        require_active(self.state, self.active.is_zero(), OP)?;
        self.flush_scale();
        self.ignored.move_lm_to_back(&mut self.active)?;
        self.state = CogState::Reducing;
        Ok(())
    }

    fn release(&mut self, f: &mut SparsePoly<C>) -> Result<()> {
        const OP: &str = "RedCogPolyGcd::release";
        self.state.require_session(OP)?;
        check_ring(&self.ring, f, OP)?;
        self.flush_scale();
        f.clear();
        f.swap(&mut self.ignored)?;
        f.append_clear(&mut self.active)?;
        self.state = CogState::Released;
        debug!(
            cog = "PolyGCD",
            reductions = self.reductions,
            terms = f.num_terms(),
            "released reduction session"
        );
        Ok(())
    }
}

impl<C: GcdDomain> fmt::Debug for RedCogPolyGcd<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedCogPolyGcd")
            .field("state", &self.state)
            .field("active", &self.active)
            .field("ignored", &self.ignored)
            .field("ignored_scale", &self.ignored_scale)
            .field("reductions", &self.reductions)
            .finish()
    }
}
