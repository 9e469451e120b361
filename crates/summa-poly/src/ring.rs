//! Sparse polynomial rings.
//!
//! A [`SparsePolyRing`] is a cheap, clonable handle to one concrete ring
//! instance. The instance owns the power-product monoid and the summand
//! arena; every polynomial it produces keeps a handle, so the arena is
//! torn down only after the last of them.

use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use tracing::debug;

use summa_rings::{AlgebraError, Result, Ring};

use crate::arena::SummandArena;
use crate::chain::{self, Chain};
use crate::config::RingConfig;
use crate::monoid::PPMonoid;
use crate::pp::PPElem;
use crate::sparse::SparsePoly;

struct RingInner<C> {
    monoid: PPMonoid,
    arena: Mutex<SummandArena<C>>,
}

/// A handle to a polynomial ring `C[x_0, ..., x_{n-1}]` with sparse
/// representation.
///
/// Handles compare by identity: two rings built from identical
/// configurations are still different rings, and their elements cannot be
/// mixed.
pub struct SparsePolyRing<C> {
    inner: Arc<RingInner<C>>,
}

impl<C> Clone for SparsePolyRing<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C> fmt::Debug for SparsePolyRing<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SparsePolyRing[{}] ({})",
            self.inner.monoid.names().join(","),
            self.inner.monoid.order()
        )
    }
}

impl<C: Ring> SparsePolyRing<C> {
    /// Creates a new ring instance with its own arena.
    #[must_use]
    pub fn new(config: RingConfig) -> Self {
        debug!(
            indets = config.num_indets(),
            order = %config.order,
            "creating sparse polynomial ring"
        );
        Self {
            inner: Arc::new(RingInner {
                monoid: PPMonoid::new(&config),
                arena: Mutex::new(SummandArena::with_capacity(config.arena_capacity)),
            }),
        }
    }

    /// Creates a ring with `num_indets` default-named indeterminates and
    /// degrevlex order.
    #[must_use]
    pub fn with_indets(num_indets: usize) -> Self {
        Self::new(RingConfig::new(num_indets))
    }

    /// Returns the power-product monoid.
    #[must_use]
    pub fn monoid(&self) -> &PPMonoid {
        &self.inner.monoid
    }

    /// Returns the number of indeterminates.
    #[must_use]
    pub fn num_indets(&self) -> usize {
        self.inner.monoid.num_indets()
    }

    /// Returns true if both handles refer to the same ring instance.
    #[must_use]
    pub fn same_ring(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn check_same(&self, other: &Self, op: &'static str) -> Result<()> {
        if self.same_ring(other) {
            Ok(())
        } else {
            Err(AlgebraError::mixed_rings(op))
        }
    }

    pub(crate) fn check_pp(&self, pp: &PPElem, op: &'static str) -> Result<()> {
        if self.monoid().owns(pp) {
            Ok(())
        } else {
            Err(AlgebraError::precondition(op, "power product from another monoid"))
        }
    }

    /// Locks the arena. Never call while already holding the lock.
    pub(crate) fn lock(&self) -> MutexGuard<'_, SummandArena<C>> {
        self.inner.arena.lock()
    }

    /// Returns the number of summands currently alive in this ring.
    #[must_use]
    pub fn live_summands(&self) -> usize {
        self.lock().live()
    }

    /// Builds a power product of this ring.
    ///
    /// # Panics
    ///
    /// Panics if `exps` does not have one entry per indeterminate.
    #[must_use]
    pub fn pp(&self, exps: &[u32]) -> PPElem {
        assert_eq!(exps.len(), self.num_indets(), "wrong number of exponents");
        PPElem::from_exponents(exps)
    }

    /// The zero polynomial.
    #[must_use]
    pub fn zero(&self) -> SparsePoly<C> {
        SparsePoly::from_chain(self.clone(), Chain::default())
    }

    /// The constant polynomial 1.
    #[must_use]
    pub fn one(&self) -> SparsePoly<C> {
        self.constant(C::one())
    }

    /// A constant polynomial.
    #[must_use]
    pub fn constant(&self, c: C) -> SparsePoly<C> {
        let mut p = self.zero();
        p.push_front(c, self.monoid().one());
        p
    }

    /// The indeterminate `x_i`.
    ///
    /// # Errors
    ///
    /// `PreconditionViolation` if `i` is out of range.
    pub fn indet(&self, i: usize) -> Result<SparsePoly<C>> {
        let pp = self
            .monoid()
            .indet(i)
            .ok_or_else(|| AlgebraError::precondition("SparsePolyRing::indet", "index out of range"))?;
        self.monomial(C::one(), pp)
    }

    /// The monomial `c * pp`; zero if `c` is zero.
    ///
    /// # Errors
    ///
    /// `PreconditionViolation` if `pp` has the wrong number of exponents.
    pub fn monomial(&self, c: C, pp: PPElem) -> Result<SparsePoly<C>> {
        self.check_pp(&pp, "SparsePolyRing::monomial")?;
        let mut p = self.zero();
        p.push_front(c, pp);
        Ok(p)
    }

    /// Builds a polynomial from terms in any order. Like terms are combined
    /// and zero coefficients dropped.
    ///
    /// # Errors
    ///
    /// `PreconditionViolation` if a power product has the wrong number of
    /// exponents.
    pub fn from_terms<I>(&self, terms: I) -> Result<SparsePoly<C>>
    where
        I: IntoIterator<Item = (C, PPElem)>,
    {
        let monoid = self.monoid();
        let mut terms: Vec<(C, PPElem)> = terms.into_iter().collect();
        if terms.iter().any(|(_, pp)| !monoid.owns(pp)) {
            return Err(AlgebraError::precondition(
                "SparsePolyRing::from_terms",
                "power product from another monoid",
            ));
        }
        terms.sort_by(|a, b| monoid.cmp(&b.1, &a.1));

        let mut combined: Vec<(C, PPElem)> = Vec::with_capacity(terms.len());
        for (c, pp) in terms {
            match combined.last_mut() {
                Some((acc, last)) if *last == pp => chain::add_into(acc, c),
                _ => combined.push((c, pp)),
            }
        }

        let chain = {
            let mut arena = self.lock();
            let mut chain = Chain::default();
            for (c, pp) in combined {
                chain::push_back(&mut arena, monoid, &mut chain, c, pp);
            }
            chain
        };
        Ok(SparsePoly::from_chain(self.clone(), chain))
    }

    /// Builds a polynomial from `(coefficient, exponents)` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`SparsePolyRing::from_terms`].
    pub fn from_exponents<'a, I>(&self, terms: I) -> Result<SparsePoly<C>>
    where
        I: IntoIterator<Item = (C, &'a [u32])>,
    {
        self.from_terms(
            terms
                .into_iter()
                .map(|(c, e)| (c, PPElem::from_exponents(e))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use summa_rings::{ErrorKind, Q};

    #[test]
    fn test_ring_identity() {
        let r1: SparsePolyRing<Q> = SparsePolyRing::with_indets(2);
        let r2: SparsePolyRing<Q> = SparsePolyRing::with_indets(2);

        assert!(r1.same_ring(&r1.clone()));
        assert!(!r1.same_ring(&r2));
        assert_eq!(
            r1.check_same(&r2, "test").unwrap_err().kind(),
            &ErrorKind::MixedRings
        );
    }

    #[test]
    fn test_constructors() {
        let ring: SparsePolyRing<Q> = SparsePolyRing::with_indets(2);

        assert!(ring.zero().is_zero());
        assert!(ring.one().is_one());
        assert!(ring.constant(Q::zero()).is_zero());
        assert_eq!(ring.indet(1).unwrap().lpp().unwrap(), ring.pp(&[0, 1]));
        assert!(ring.indet(2).unwrap_err().is_precondition());
    }

    #[test]
    fn test_from_terms_combines() {
        let ring: SparsePolyRing<Q> = SparsePolyRing::with_indets(2);
        let p = ring
            .from_terms(vec![
                (Q::from(1), ring.pp(&[0, 0])),
                (Q::from(2), ring.pp(&[1, 0])),
                (Q::from(-1), ring.pp(&[0, 0])),
                (Q::from(3), ring.pp(&[1, 0])),
            ])
            .unwrap();

        assert_eq!(p.num_terms(), 1);
        assert_eq!(p.lc().unwrap(), Q::from(5));
        assert!(p.is_valid());
    }

    #[test]
    fn test_arena_outlives_values() {
        let ring: SparsePolyRing<Q> = SparsePolyRing::with_indets(1);
        let x = ring.indet(0).unwrap();
        let one = ring.one();
        assert_eq!(ring.live_summands(), 2);

        drop(x);
        drop(one);
        assert_eq!(ring.live_summands(), 0);
    }
}
