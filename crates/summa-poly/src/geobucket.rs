//! Geobuckets.
//!
//! A geobucket accumulates a long sum of polynomials without paying a full
//! merge for every addition. Terms live in buckets whose capacities grow
//! geometrically; a summand is added into the smallest bucket that can hold
//! it and overflowing buckets cascade into the next one. Merges therefore
//! cost amortized `O(n log n)` over the whole accumulation instead of
//! `O(n^2)`.
//!
//! The geobucket is kept normalized after every operation: when non-zero,
//! a single exact leading summand is held apart from the buckets and is
//! strictly greater than every bucket head. That makes `lpp` and `lc`
//! cheap and lets reduction loops inspect the leading term repeatedly.

use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use summa_rings::{AlgebraError, Field, GcdDomain, Result, Ring};

use crate::arena::SummandArena;
use crate::chain::{self, Chain};
use crate::config::GeobucketConfig;
use crate::handle::SummandId;
use crate::monoid::PPMonoid;
use crate::pp::PPElem;
use crate::ring::SparsePolyRing;
use crate::sparse::{gcd_multipliers, SparsePoly};

/// Bucket storage, split from the ring handle so both can be borrowed at
/// once.
#[derive(Default)]
struct Buckets {
    /// At most one summand: the exact leading term.
    lm: Chain,
    buckets: Vec<Chain>,
}

impl Buckets {
    fn ensure(&mut self, index: usize, config: &GeobucketConfig) {
        while self.buckets.len() <= index {
            trace!(
                bucket = self.buckets.len(),
                capacity = config.bucket_capacity(self.buckets.len()),
                "geobucket: new bucket"
            );
            self.buckets.push(Chain::default());
        }
    }

    fn index_for(len: usize, config: &GeobucketConfig) -> usize {
        let mut i = 0;
        while config.bucket_capacity(i) < len {
            i += 1;
        }
        i
    }

    /// Returns the leading summand to the buckets. It exceeds every bucket
    /// head, so linking it at the front of bucket 0 keeps the order.
    fn flush_lm<C: Ring>(
        &mut self,
        arena: &mut SummandArena<C>,
        monoid: &PPMonoid,
        config: &GeobucketConfig,
    ) {
        if let Some(id) = chain::unlink_front(arena, &mut self.lm) {
            self.ensure(0, config);
            chain::link_front(arena, &mut self.buckets[0], id);
            self.cascade(arena, monoid, config, 0);
        }
    }

    /// Pushes overflowing buckets into their successors, starting at `i`.
    fn cascade<C: Ring>(
        &mut self,
        arena: &mut SummandArena<C>,
        monoid: &PPMonoid,
        config: &GeobucketConfig,
        mut i: usize,
    ) {
        while self.buckets[i].len > config.bucket_capacity(i) {
            let mut overflow = self.buckets[i].take();
            self.ensure(i + 1, config);
            chain::merge(arena, monoid, &mut self.buckets[i + 1], &mut overflow);
            i += 1;
        }
    }

    fn insert<C: Ring>(
        &mut self,
        arena: &mut SummandArena<C>,
        monoid: &PPMonoid,
        config: &GeobucketConfig,
        mut chain: Chain,
    ) {
        if chain.is_empty() {
            return;
        }
        let i = Self::index_for(chain.len, config);
        self.ensure(i, config);
        chain::merge(arena, monoid, &mut self.buckets[i], &mut chain);
        self.cascade(arena, monoid, config, i);
    }

    /// Re-establishes the exact leading summand after the buckets changed.
    fn normalize_lm<C: Ring>(&mut self, arena: &mut SummandArena<C>, monoid: &PPMonoid) {
        if !self.lm.is_empty() {
            return;
        }
        loop {
            let mut best: Option<(usize, SummandId)> = None;
            for (i, b) in self.buckets.iter().enumerate() {
                let Some(h) = b.head else { continue };
                let better = match best {
                    None => true,
                    Some((_, bh)) => monoid.cmp(arena.get(h).pp(), arena.get(bh).pp()) == Ordering::Greater,
                };
                if better {
                    best = Some((i, h));
                }
            }

            let Some((bi, id)) = best else {
                return;
            };
            chain::unlink_front(arena, &mut self.buckets[bi]);

            // Equal heads can only sit in later buckets
            for j in bi + 1..self.buckets.len() {
                let Some(h) = self.buckets[j].head else { continue };
                if arena.get(h).pp() == arena.get(id).pp() {
                    chain::unlink_front(arena, &mut self.buckets[j]);
                    let (c, _) = arena.free(h);
                    chain::add_into(&mut arena.get_mut(id).coeff, c);
                }
            }

            if arena.get(id).coeff().is_zero() {
                arena.free(id);
            } else {
                chain::link_front(arena, &mut self.lm, id);
                return;
            }
        }
    }

    /// Merges everything into one chain, leaving the buckets empty.
    fn drain<C: Ring>(&mut self, arena: &mut SummandArena<C>, monoid: &PPMonoid) -> Chain {
        let mut out = self.lm.take();
        for b in &mut self.buckets {
            chain::merge(arena, monoid, &mut out, b);
        }
        out
    }

    fn free<C>(&mut self, arena: &mut SummandArena<C>) {
        chain::free(arena, &mut self.lm);
        for b in &mut self.buckets {
            chain::free(arena, b);
        }
    }
}

/// A multi-bucket accumulator for polynomials of one ring.
pub struct Geobucket<C: Ring> {
    ring: SparsePolyRing<C>,
    config: GeobucketConfig,
    state: Buckets,
}

impl<C: Ring> Geobucket<C> {
    /// Creates an empty geobucket with default bucket sizes.
    #[must_use]
    pub fn new(ring: SparsePolyRing<C>) -> Self {
        Self::with_config(ring, GeobucketConfig::default())
    }

    /// Creates an empty geobucket.
    #[must_use]
    pub fn with_config(ring: SparsePolyRing<C>, config: GeobucketConfig) -> Self {
        Self {
            ring,
            config,
            state: Buckets::default(),
        }
    }

    /// Returns the ring of the accumulated value.
    #[must_use]
    pub fn ring(&self) -> &SparsePolyRing<C> {
        &self.ring
    }

    /// Returns the bucket configuration.
    #[must_use]
    pub fn config(&self) -> &GeobucketConfig {
        &self.config
    }

    /// Creates buckets up to the one that would hold `len_hint` terms.
    pub fn reserve(&mut self, len_hint: usize) {
        let i = Buckets::index_for(len_hint, &self.config);
        self.state.ensure(i, &self.config);
    }

    /// Returns the number of buckets currently allocated.
    #[must_use]
    pub fn num_buckets(&self) -> usize {
        self.state.buckets.len()
    }

    /// Returns true if the accumulated value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.state.lm.is_empty()
    }

    fn lm_id(&self, op: &'static str) -> Result<SummandId> {
        self.state
            .lm
            .head
            .ok_or_else(|| AlgebraError::precondition(op, "zero geobucket"))
    }

    /// Leading power product.
    ///
    /// # Errors
    ///
    /// `PreconditionViolation` if the geobucket is zero.
    pub fn lpp(&self) -> Result<PPElem> {
        let id = self.lm_id("Geobucket::lpp")?;
        Ok(self.ring.lock().get(id).pp().clone())
    }

    /// Leading coefficient.
    ///
    /// # Errors
    ///
    /// `PreconditionViolation` if the geobucket is zero.
    pub fn lc(&self) -> Result<C> {
        let id = self.lm_id("Geobucket::lc")?;
        Ok(self.ring.lock().get(id).coeff().clone())
    }

    /// Adds `f` and leaves it zero. The summands of `f` are moved.
    ///
    /// # Errors
    ///
    /// `MixedRings` if `f` belongs to another ring.
    pub fn add_clear(&mut self, f: &mut SparsePoly<C>) -> Result<()> {
        self.ring.check_same(f.ring(), "Geobucket::add_clear")?;
        let monoid = self.ring.monoid();
        let mut arena = self.ring.lock();
        self.state.flush_lm(&mut arena, monoid, &self.config);
        self.state.insert(&mut arena, monoid, &self.config, f.chain.take());
        self.state.normalize_lm(&mut arena, monoid);
        Ok(())
    }

    /// Adds `c * t * g`. `len_hint` is the expected length of `g` and
    /// pre-sizes the buckets.
    ///
    /// # Errors
    ///
    /// `MixedRings` if `g` belongs to another ring, `PreconditionViolation`
    /// if `t` has the wrong number of exponents.
    pub fn add_mul(&mut self, c: &C, t: &PPElem, g: &SparsePoly<C>, len_hint: usize) -> Result<()> {
        self.ring.check_same(g.ring(), "Geobucket::add_mul")?;
        self.ring.check_pp(t, "Geobucket::add_mul")?;
        self.reserve(len_hint);
        self.add_mul_from(c, t, g.chain.head);
        Ok(())
    }

    fn add_mul_from(&mut self, c: &C, t: &PPElem, start: Option<SummandId>) {
        let monoid = self.ring.monoid();
        let mut arena = self.ring.lock();
        let mut product = Chain::default();
        chain::add_mul_from(&mut arena, monoid, &mut product, c, t, start);
        self.state.flush_lm(&mut arena, monoid, &self.config);
        self.state.insert(&mut arena, monoid, &self.config, product);
        self.state.normalize_lm(&mut arena, monoid);
    }

    /// Removes and returns the leading term.
    pub fn pop_lm(&mut self) -> Option<(C, PPElem)> {
        let monoid = self.ring.monoid();
        let mut arena = self.ring.lock();
        let lm = chain::pop_front(&mut arena, &mut self.state.lm)?;
        self.state.normalize_lm(&mut arena, monoid);
        Some(lm)
    }

    /// Moves the leading term to the back of `dst`, which must only hold
    /// terms above it (checked in debug builds).
    ///
    /// # Errors
    ///
    /// `MixedRings`, or `PreconditionViolation` if the geobucket is zero.
    pub fn move_lm_to_back(&mut self, dst: &mut SparsePoly<C>) -> Result<()> {
        const OP: &str = "Geobucket::move_lm_to_back";
        self.ring.check_same(dst.ring(), OP)?;
        self.lm_id(OP)?;

        let monoid = self.ring.monoid();
        let mut arena = self.ring.lock();
        if let Some(id) = chain::unlink_front(&mut arena, &mut self.state.lm) {
            debug_assert!(
                dst.chain
                    .tail
                    .map_or(true, |t| monoid.cmp(arena.get(id).pp(), arena.get(t).pp()) == Ordering::Less),
                "move_lm_to_back: order violated"
            );
            chain::link_back(&mut arena, &mut dst.chain, id);
        }
        self.state.normalize_lm(&mut arena, monoid);
        Ok(())
    }

    /// Multiplies the accumulated value by `c`.
    pub fn mul_by_coeff(&mut self, c: &C) {
        let monoid = self.ring.monoid();
        let mut arena = self.ring.lock();
        self.state.flush_lm(&mut arena, monoid, &self.config);
        for b in &mut self.state.buckets {
            chain::mul_by_coeff(&mut arena, b, c);
        }
        self.state.normalize_lm(&mut arena, monoid);
    }

    /// Divides the accumulated value exactly by `c`.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` or `InexactQuotient`. Weak guarantee: after an
    /// error the geobucket is valid but its value is unspecified.
    pub fn div_by_coeff(&mut self, c: &C) -> Result<()> {
        let monoid = self.ring.monoid();
        let mut arena = self.ring.lock();
        self.state.flush_lm(&mut arena, monoid, &self.config);
        let res = self
            .state
            .buckets
            .iter_mut()
            .try_for_each(|b| chain::div_by_coeff(&mut arena, b, c));
        self.state.normalize_lm(&mut arena, monoid);
        res
    }

    /// Sets the accumulated value to zero.
    pub fn clear(&mut self) {
        let mut arena = self.ring.lock();
        self.state.free(&mut arena);
    }

    /// Adds the accumulated value to `dst`, leaving the geobucket zero.
    ///
    /// # Errors
    ///
    /// `MixedRings` if `dst` belongs to another ring.
    pub fn add_clear_into(&mut self, dst: &mut SparsePoly<C>) -> Result<()> {
        self.ring.check_same(dst.ring(), "Geobucket::add_clear_into")?;
        let monoid = self.ring.monoid();
        let mut arena = self.ring.lock();
        let mut sum = self.state.drain(&mut arena, monoid);
        chain::merge(&mut arena, monoid, &mut dst.chain, &mut sum);
        Ok(())
    }

    /// Consumes the geobucket, returning the accumulated polynomial.
    #[must_use]
    pub fn into_poly(mut self) -> SparsePoly<C> {
        let chain = {
            let monoid = self.ring.monoid();
            let mut arena = self.ring.lock();
            self.state.drain(&mut arena, monoid)
        };
        SparsePoly::from_chain(self.ring.clone(), chain)
    }

    /// Checks the shift for a reduction step against `g`.
    fn reduction_shift(&self, g: &SparsePoly<C>, op: &'static str) -> Result<PPElem> {
        self.ring.check_same(g.ring(), op)?;
        let id = self.lm_id(op)?;
        let lpp_g = g.lpp()?;
        let arena = self.ring.lock();
        arena
            .get(id)
            .pp()
            .div(&lpp_g)
            .ok_or_else(|| AlgebraError::precondition(op, "LPP(g) does not divide LPP(f)"))
    }

    /// The start of `g` past its leading summand.
    fn tail_start(&self, g: &SparsePoly<C>) -> Option<SummandId> {
        let h = g.chain.head?;
        self.ring.lock().get(h).next()
    }
}

impl<C: Field> Geobucket<C> {
    /// One reduction step over a field, cancelling the leading term of the
    /// accumulated value against `g`.
    ///
    /// # Errors
    ///
    /// As [`SparsePoly::reduction_step`].
    pub fn reduction_step(&mut self, g: &SparsePoly<C>, len_hint: usize) -> Result<()> {
        let t = self.reduction_shift(g, "Geobucket::reduction_step")?;
        let c = -self.lc()?.field_div(&g.lc()?)?;
        self.reserve(len_hint);

        let start = self.tail_start(g);
        {
            let mut arena = self.ring.lock();
            chain::free(&mut arena, &mut self.state.lm);
        }
        self.add_mul_from(&c, &t, start);
        Ok(())
    }
}

impl<C: GcdDomain> Geobucket<C> {
    /// One fraction-free reduction step; returns the scale applied to the
    /// accumulated value.
    ///
    /// # Errors
    ///
    /// As [`SparsePoly::reduction_step_gcd`].
    pub fn reduction_step_gcd(&mut self, g: &SparsePoly<C>, len_hint: usize) -> Result<C> {
        let t = self.reduction_shift(g, "Geobucket::reduction_step_gcd")?;
        let (sf, sg) = gcd_multipliers(&self.lc()?, &g.lc()?)?;
        self.reserve(len_hint);

        let start = self.tail_start(g);
        {
            let mut arena = self.ring.lock();
            chain::free(&mut arena, &mut self.state.lm);
            for b in &mut self.state.buckets {
                chain::mul_by_coeff(&mut arena, b, &sf);
            }
        }
        self.add_mul_from(&-sg, &t, start);
        Ok(sf)
    }

    /// Normalized gcd of all coefficients; zero if the geobucket is zero.
    #[must_use]
    pub fn content(&self) -> C {
        let arena = self.ring.lock();
        let mut g = chain::content(&arena, &self.state.lm);
        for b in &self.state.buckets {
            if g.is_one() {
                break;
            }
            g = g.gcd(&chain::content(&arena, b));
        }
        g
    }
}

impl<C: Ring> Drop for Geobucket<C> {
    fn drop(&mut self) {
        let mut arena = self.ring.lock();
        self.state.free(&mut arena);
    }
}

impl<C: Ring> fmt::Debug for Geobucket<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lens: Vec<usize> = self.state.buckets.iter().map(|b| b.len).collect();
        f.debug_struct("Geobucket")
            .field("lm", &self.state.lm.len)
            .field("buckets", &lens)
            .finish()
    }
}
