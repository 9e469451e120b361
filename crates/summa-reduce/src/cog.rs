//! The reduction cog contract.
//!
//! A session runs `assign_reset`, then any mix of `reduce` and
//! `move_to_next_lm` while the active part is non-zero, then `release`.
//! The active part holds the not yet finalized terms; the ignored part
//! collects leading terms the scheduler declared irreducible. Every
//! ignored term is above every active term, so releasing is a splice.

use std::fmt;

use summa_poly::{PPElem, SparsePoly, SparsePolyRing};
use summa_rings::{AlgebraError, Field, GcdDomain, Result, Ring};

use crate::config::CogConfig;
use crate::geobucket_field::RedCogGeobucketField;
use crate::geobucket_gcd::RedCogGeobucketGcd;
use crate::poly_field::RedCogPolyField;
use crate::poly_gcd::RedCogPolyGcd;

mod sealed {
    pub trait Sealed {}
}

pub(crate) use sealed::Sealed;

/// Where a cog is in its session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CogState {
    /// Nothing assigned yet.
    #[default]
    Empty,
    /// A polynomial was assigned and no step has run.
    Assigned,
    /// At least one reduction or leading-term move has run.
    Reducing,
    /// The result was handed back.
    Released,
}

impl CogState {
    /// Fails unless a session is open.
    pub(crate) fn require_session(self, op: &'static str) -> Result<()> {
        match self {
            CogState::Assigned | CogState::Reducing => Ok(()),
            CogState::Empty => Err(AlgebraError::precondition(op, "no polynomial assigned")),
            CogState::Released => Err(AlgebraError::precondition(op, "session already released")),
        }
    }
}

/// A stateful strategy for reducing one polynomial.
///
/// The set of implementations is closed; pick one with the
/// `new_red_cog_*` constructors.
pub trait ReductionCog<C: Ring>: Sealed + fmt::Debug {
    /// The ring of the polynomials this cog works on.
    fn ring(&self) -> &SparsePolyRing<C>;

    /// Current session state.
    fn state(&self) -> CogState;

    /// Starts a session on `f`, taking its value and leaving `f` zero.
    /// `len_hint` is the expected length of the polynomials involved.
    ///
    /// # Errors
    ///
    /// `MixedRings` if `f` belongs to another ring.
    fn assign_reset(&mut self, f: &mut SparsePoly<C>, len_hint: usize) -> Result<()>;

    /// Leading power product of the active part.
    ///
    /// # Errors
    ///
    /// `PreconditionViolation` outside a session or if the active part is
    /// zero.
    fn active_lpp(&self) -> Result<PPElem>;

    /// Returns true if nothing is left to reduce.
    fn is_active_zero(&self) -> bool;

    /// Cancels the active leading term against `reducer`, whose leading
    /// power product must divide it.
    ///
    /// # Errors
    ///
    /// `PreconditionViolation` outside a session, on a zero active part,
    /// or if `reducer` does not apply; coefficient errors propagate.
    fn reduce(&mut self, reducer: &SparsePoly<C>, len_hint: usize) -> Result<()>;

    /// Declares the active leading term irreducible and moves it to the
    /// ignored part.
    ///
    /// # Errors
    ///
    /// `PreconditionViolation` outside a session or on a zero active part.
    fn move_to_next_lm(&mut self) -> Result<()>;

    /// Ends the session, writing `ignored + active` into `f`.
    ///
    /// # Errors
    ///
    /// `PreconditionViolation` outside a session, `MixedRings` if `f`
    /// belongs to another ring.
    fn release(&mut self, f: &mut SparsePoly<C>) -> Result<()>;
}

/// Shared check for operations that need a non-zero active part.
pub(crate) fn require_active(state: CogState, active_zero: bool, op: &'static str) -> Result<()> {
    state.require_session(op)?;
    if active_zero {
        return Err(AlgebraError::precondition(op, "active part is zero"));
    }
    Ok(())
}

pub(crate) fn check_ring<C: Ring>(
    ring: &SparsePolyRing<C>,
    f: &SparsePoly<C>,
    op: &'static str,
) -> Result<()> {
    if ring.same_ring(f.ring()) {
        Ok(())
    } else {
        Err(AlgebraError::mixed_rings(op))
    }
}

/// Flat cog over a field.
#[must_use]
pub fn new_red_cog_poly_field<C: Field + 'static>(
    ring: &SparsePolyRing<C>,
) -> Box<dyn ReductionCog<C>> {
    Box::new(RedCogPolyField::new(ring))
}

/// Flat fraction-free cog with default tuning.
#[must_use]
pub fn new_red_cog_poly_gcd<C: GcdDomain + 'static>(
    ring: &SparsePolyRing<C>,
) -> Box<dyn ReductionCog<C>> {
    new_red_cog_poly_gcd_with(ring, CogConfig::default())
}

/// Flat fraction-free cog.
#[must_use]
pub fn new_red_cog_poly_gcd_with<C: GcdDomain + 'static>(
    ring: &SparsePolyRing<C>,
    config: CogConfig,
) -> Box<dyn ReductionCog<C>> {
    Box::new(RedCogPolyGcd::with_config(ring, config))
}

/// Geobucket cog over a field with default tuning.
#[must_use]
pub fn new_red_cog_geobucket_field<C: Field + 'static>(
    ring: &SparsePolyRing<C>,
) -> Box<dyn ReductionCog<C>> {
    new_red_cog_geobucket_field_with(ring, CogConfig::default())
}

/// Geobucket cog over a field.
#[must_use]
pub fn new_red_cog_geobucket_field_with<C: Field + 'static>(
    ring: &SparsePolyRing<C>,
    config: CogConfig,
) -> Box<dyn ReductionCog<C>> {
    Box::new(RedCogGeobucketField::with_config(ring, config))
}

/// Geobucket fraction-free cog with default tuning.
#[must_use]
pub fn new_red_cog_geobucket_gcd<C: GcdDomain + 'static>(
    ring: &SparsePolyRing<C>,
) -> Box<dyn ReductionCog<C>> {
    new_red_cog_geobucket_gcd_with(ring, CogConfig::default())
}

/// Geobucket fraction-free cog.
#[must_use]
pub fn new_red_cog_geobucket_gcd_with<C: GcdDomain + 'static>(
    ring: &SparsePolyRing<C>,
    config: CogConfig,
) -> Box<dyn ReductionCog<C>> {
    Box::new(RedCogGeobucketGcd::with_config(ring, config))
}
