//! Sparse polynomials.
//!
//! A [`SparsePoly`] owns a chain of summands in its ring's arena, sorted
//! strictly decreasing by the ring's term order. The zero polynomial is the
//! empty chain; no summand ever carries a zero coefficient.
//!
//! Besides ordinary arithmetic this module provides the in-place primitives
//! that reduction algorithms are built from: moving leading terms between
//! polynomials, dividing and comparing leading terms, merging with or
//! splicing in another polynomial, and the two reduction steps.
//!
//! Unless documented otherwise, a failing operation leaves its operands
//! unchanged.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;

use summa_rings::{AlgebraError, Field, GcdDomain, Result, Ring};

use crate::chain::{self, Chain};
use crate::geobucket::Geobucket;
use crate::handle::SummandId;
use crate::iter::Terms;
use crate::pp::PPElem;
use crate::ring::SparsePolyRing;

/// A polynomial in sparse representation.
pub struct SparsePoly<C: Ring> {
    ring: SparsePolyRing<C>,
    pub(crate) chain: Chain,
}

/// The multipliers `(sf, sg)` with `sf * a == sg * b`, made as small as the
/// gcd allows and normalized so that `sf` is in canonical form.
pub(crate) fn gcd_multipliers<C: GcdDomain>(a: &C, b: &C) -> Result<(C, C)> {
    let d = a.gcd(b);
    let sf = b.div_exact(&d)?;
    let sg = a.div_exact(&d)?;
    let u = sf.canonical_unit();
    Ok((sf.div_exact(&u)?, sg.div_exact(&u)?))
}

impl<C: Ring> SparsePoly<C> {
    pub(crate) fn from_chain(ring: SparsePolyRing<C>, chain: Chain) -> Self {
        Self { ring, chain }
    }

    /// Returns the ring this polynomial belongs to.
    #[must_use]
    pub fn ring(&self) -> &SparsePolyRing<C> {
        &self.ring
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.chain.is_empty()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn num_terms(&self) -> usize {
        self.chain.len
    }

    /// Returns true for zero and for non-zero constants.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        match self.chain.head {
            None => true,
            Some(h) => self.chain.len == 1 && self.ring.lock().get(h).pp().is_one(),
        }
    }

    /// Returns true if this is the constant 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        match self.chain.head {
            None => false,
            Some(h) => {
                if self.chain.len != 1 {
                    return false;
                }
                let arena = self.ring.lock();
                let s = arena.get(h);
                s.pp().is_one() && s.coeff().is_one()
            }
        }
    }

    fn head(&self, op: &'static str) -> Result<SummandId> {
        self.chain
            .head
            .ok_or_else(|| AlgebraError::precondition(op, "zero polynomial"))
    }

    /// Leading coefficient.
    ///
    /// # Errors
    ///
    /// `PreconditionViolation` on the zero polynomial.
    pub fn lc(&self) -> Result<C> {
        let h = self.head("SparsePoly::lc")?;
        Ok(self.ring.lock().get(h).coeff().clone())
    }

    /// Leading power product.
    ///
    /// # Errors
    ///
    /// `PreconditionViolation` on the zero polynomial.
    pub fn lpp(&self) -> Result<PPElem> {
        let h = self.head("SparsePoly::lpp")?;
        Ok(self.ring.lock().get(h).pp().clone())
    }

    /// Leading power product, or `None` for zero.
    #[must_use]
    pub fn leading_pp(&self) -> Option<PPElem> {
        let h = self.chain.head?;
        Some(self.ring.lock().get(h).pp().clone())
    }

    /// Leading term, or `None` for zero.
    #[must_use]
    pub fn leading_term(&self) -> Option<(C, PPElem)> {
        let h = self.chain.head?;
        let arena = self.ring.lock();
        let s = arena.get(h);
        Some((s.coeff().clone(), s.pp().clone()))
    }

    /// Smallest power product, or `None` for zero.
    #[must_use]
    pub fn last_pp(&self) -> Option<PPElem> {
        let t = self.chain.tail?;
        Some(self.ring.lock().get(t).pp().clone())
    }

    /// Total degree, or `None` for zero.
    ///
    /// Under a non-graded order the leading term need not have the largest
    /// degree, so every term is inspected.
    #[must_use]
    pub fn deg(&self) -> Option<u64> {
        let arena = self.ring.lock();
        let mut best = None;
        let mut cursor = self.chain.head;
        while let Some(id) = cursor {
            let s = arena.get(id);
            best = best.max(Some(s.pp().deg()));
            cursor = s.next();
        }
        best
    }

    /// Iterates over `(coefficient, power product)` pairs in decreasing
    /// order.
    #[must_use]
    pub fn iter(&self) -> Terms<'_, C> {
        Terms::new(self)
    }

    /// Checks the ordering invariant: power products strictly decreasing,
    /// no zero coefficients.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        chain::is_valid(&self.ring.lock(), self.ring.monoid(), &self.chain)
    }

    /// Inserts a new leading term. A zero coefficient is a no-op.
    ///
    /// `pp` must be strictly greater than the current leading power product
    /// (checked in debug builds).
    pub fn push_front(&mut self, c: C, pp: PPElem) {
        debug_assert!(self.ring.monoid().owns(&pp), "push_front: foreign power product");
        let mut arena = self.ring.lock();
        chain::push_front(&mut arena, self.ring.monoid(), &mut self.chain, c, pp);
    }

    /// Inserts a new trailing term. A zero coefficient is a no-op.
    ///
    /// `pp` must be strictly smaller than the current last power product
    /// (checked in debug builds).
    pub fn push_back(&mut self, c: C, pp: PPElem) {
        debug_assert!(self.ring.monoid().owns(&pp), "push_back: foreign power product");
        let mut arena = self.ring.lock();
        chain::push_back(&mut arena, self.ring.monoid(), &mut self.chain, c, pp);
    }

    /// Removes and returns the leading term.
    pub fn pop_front(&mut self) -> Option<(C, PPElem)> {
        let mut arena = self.ring.lock();
        chain::pop_front(&mut arena, &mut self.chain)
    }

    /// Moves the leading term of `g` onto the front of `self`.
    ///
    /// The moved power product must exceed the leading one of `self`
    /// (checked in debug builds).
    ///
    /// # Errors
    ///
    /// `MixedRings` if the operands belong to different rings,
    /// `PreconditionViolation` if `g` is zero.
    pub fn move_lm_to_front(&mut self, g: &mut Self) -> Result<()> {
        const OP: &str = "SparsePoly::move_lm_to_front";
        self.ring.check_same(&g.ring, OP)?;
        g.head(OP)?;

        let monoid = self.ring.monoid();
        let mut arena = self.ring.lock();
        if let Some(id) = chain::unlink_front(&mut arena, &mut g.chain) {
            debug_assert!(
                self.chain
                    .head
                    .map_or(true, |h| monoid.cmp(arena.get(id).pp(), arena.get(h).pp()) == Ordering::Greater),
                "move_lm_to_front: order violated"
            );
            chain::link_front(&mut arena, &mut self.chain, id);
        }
        Ok(())
    }

    /// Moves the leading term of `g` onto the back of `self`.
    ///
    /// The moved power product must be below every power product of
    /// `self` (checked in debug builds). This is how irreducible leading
    /// terms are accumulated during a reduction.
    ///
    /// # Errors
    ///
    /// `MixedRings` if the operands belong to different rings,
    /// `PreconditionViolation` if `g` is zero.
    pub fn move_lm_to_back(&mut self, g: &mut Self) -> Result<()> {
        const OP: &str = "SparsePoly::move_lm_to_back";
        self.ring.check_same(&g.ring, OP)?;
        g.head(OP)?;

        let monoid = self.ring.monoid();
        let mut arena = self.ring.lock();
        if let Some(id) = chain::unlink_front(&mut arena, &mut g.chain) {
            debug_assert!(
                self.chain
                    .tail
                    .map_or(true, |t| monoid.cmp(arena.get(id).pp(), arena.get(t).pp()) == Ordering::Less),
                "move_lm_to_back: order violated"
            );
            chain::link_back(&mut arena, &mut self.chain, id);
        }
        Ok(())
    }

    /// Quotient of leading terms: `(LC(self) / LC(g), LPP(self) / LPP(g))`.
    ///
    /// # Errors
    ///
    /// `PreconditionViolation` if either operand is zero or the leading
    /// power products do not divide; `InexactQuotient` from the
    /// coefficients.
    pub fn div_lm(&self, g: &Self) -> Result<(C, PPElem)> {
        const OP: &str = "SparsePoly::div_lm";
        self.ring.check_same(&g.ring, OP)?;
        let (fh, gh) = (self.head(OP)?, g.head(OP)?);

        let arena = self.ring.lock();
        let (fs, gs) = (arena.get(fh), arena.get(gh));
        let t = fs
            .pp()
            .div(gs.pp())
            .ok_or_else(|| AlgebraError::precondition(OP, "leading power products do not divide"))?;
        Ok((fs.coeff().div_exact(gs.coeff())?, t))
    }

    /// Compares leading power products.
    ///
    /// # Errors
    ///
    /// `MixedRings`, or `PreconditionViolation` if either operand is zero.
    pub fn cmp_lpp(&self, g: &Self) -> Result<Ordering> {
        const OP: &str = "SparsePoly::cmp_lpp";
        self.ring.check_same(&g.ring, OP)?;
        let (fh, gh) = (self.head(OP)?, g.head(OP)?);

        let arena = self.ring.lock();
        Ok(self.ring.monoid().cmp(arena.get(fh).pp(), arena.get(gh).pp()))
    }

    /// `self += g`, leaving `g` zero. Summands of `g` are moved, not copied.
    ///
    /// # Errors
    ///
    /// `MixedRings` if the operands belong to different rings.
    pub fn add_clear(&mut self, g: &mut Self) -> Result<()> {
        self.ring.check_same(&g.ring, "SparsePoly::add_clear")?;
        let mut arena = self.ring.lock();
        chain::merge(&mut arena, self.ring.monoid(), &mut self.chain, &mut g.chain);
        Ok(())
    }

    /// `self += g`, leaving `g` zero, by splicing `g` after the last term.
    ///
    /// Every power product of `g` must be below the last one of `self`
    /// (checked in debug builds). Runs in constant time.
    ///
    /// # Errors
    ///
    /// `MixedRings` if the operands belong to different rings.
    pub fn append_clear(&mut self, g: &mut Self) -> Result<()> {
        self.ring.check_same(&g.ring, "SparsePoly::append_clear")?;
        let mut arena = self.ring.lock();
        chain::append(&mut arena, self.ring.monoid(), &mut self.chain, &mut g.chain);
        Ok(())
    }

    /// `self += c * t * g` in a single merge pass.
    ///
    /// # Errors
    ///
    /// `MixedRings` if the operands belong to different rings,
    /// `PreconditionViolation` if `t` has the wrong number of exponents.
    pub fn add_mul(&mut self, c: &C, t: &PPElem, g: &Self) -> Result<()> {
        self.ring.check_same(&g.ring, "SparsePoly::add_mul")?;
        self.ring.check_pp(t, "SparsePoly::add_mul")?;
        let mut arena = self.ring.lock();
        chain::add_mul_from(&mut arena, self.ring.monoid(), &mut self.chain, c, t, g.chain.head);
        Ok(())
    }

    /// Multiplies every coefficient by `c`; products that vanish (zero
    /// divisors) are dropped.
    pub fn mul_by_coeff(&mut self, c: &C) {
        let mut arena = self.ring.lock();
        chain::mul_by_coeff(&mut arena, &mut self.chain, c);
    }

    /// Divides every coefficient exactly by `c`.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if `c` is zero, `InexactQuotient` if some
    /// coefficient is not a multiple of `c`. This operation only offers the
    /// weak guarantee: after an error the polynomial is valid but its value
    /// is unspecified.
    pub fn div_by_coeff(&mut self, c: &C) -> Result<()> {
        let mut arena = self.ring.lock();
        chain::div_by_coeff(&mut arena, &mut self.chain, c)
    }

    /// Multiplies by the power product `t`.
    ///
    /// # Errors
    ///
    /// `PreconditionViolation` if `t` has the wrong number of exponents.
    pub fn mul_by_pp(&mut self, t: &PPElem) -> Result<()> {
        self.ring.check_pp(t, "SparsePoly::mul_by_pp")?;
        let mut arena = self.ring.lock();
        chain::mul_by_pp(&mut arena, &self.chain, t);
        Ok(())
    }

    /// Multiplies by the term `c * t`.
    ///
    /// # Errors
    ///
    /// `PreconditionViolation` if `t` has the wrong number of exponents.
    pub fn mul_by_term(&mut self, c: &C, t: &PPElem) -> Result<()> {
        self.ring.check_pp(t, "SparsePoly::mul_by_term")?;
        let mut arena = self.ring.lock();
        chain::mul_by_coeff(&mut arena, &mut self.chain, c);
        chain::mul_by_pp(&mut arena, &self.chain, t);
        Ok(())
    }

    /// Negates in place.
    pub fn negate(&mut self) {
        let mut arena = self.ring.lock();
        chain::negate(&mut arena, &self.chain);
    }

    /// Returns `self + g`.
    ///
    /// # Errors
    ///
    /// `MixedRings` if the operands belong to different rings.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, g: &Self) -> Result<Self> {
        let mut sum = self.clone();
        sum.add_mul(&C::one(), &self.ring.monoid().one(), g)?;
        Ok(sum)
    }

    /// Returns `self - g`.
    ///
    /// # Errors
    ///
    /// `MixedRings` if the operands belong to different rings.
    #[allow(clippy::should_implement_trait)]
    pub fn sub(&self, g: &Self) -> Result<Self> {
        let mut diff = self.clone();
        diff.add_mul(&-C::one(), &self.ring.monoid().one(), g)?;
        Ok(diff)
    }

    /// Returns `self * g`.
    ///
    /// The shorter operand is distributed over the longer one and the
    /// partial products are accumulated in a geobucket.
    ///
    /// # Errors
    ///
    /// `MixedRings` if the operands belong to different rings.
    #[allow(clippy::should_implement_trait)]
    pub fn mul(&self, g: &Self) -> Result<Self> {
        self.ring.check_same(&g.ring, "SparsePoly::mul")?;
        let (short, long) = if self.num_terms() <= g.num_terms() {
            (self, g)
        } else {
            (g, self)
        };

        let mut acc = Geobucket::new(self.ring.clone());
        for (c, t) in short.iter() {
            acc.add_mul(&c, &t, long, long.num_terms())?;
        }
        Ok(acc.into_poly())
    }

    /// Swaps values with `g`.
    ///
    /// # Errors
    ///
    /// `MixedRings` if the operands belong to different rings.
    pub fn swap(&mut self, g: &mut Self) -> Result<()> {
        self.ring.check_same(&g.ring, "SparsePoly::swap")?;
        std::mem::swap(&mut self.chain, &mut g.chain);
        Ok(())
    }

    /// Sets the polynomial to zero, returning its summands to the arena.
    pub fn clear(&mut self) {
        let mut arena = self.ring.lock();
        chain::free(&mut arena, &mut self.chain);
    }

    /// Checks ring and non-zeroness of both operands of a reduction step and
    /// returns the shift `LPP(self) / LPP(g)`.
    fn reduction_shift(&self, g: &Self, op: &'static str) -> Result<PPElem> {
        self.ring.check_same(&g.ring, op)?;
        let (fh, gh) = (self.head(op)?, g.head(op)?);
        let arena = self.ring.lock();
        arena
            .get(fh)
            .pp()
            .div(arena.get(gh).pp())
            .ok_or_else(|| AlgebraError::precondition(op, "LPP(g) does not divide LPP(f)"))
    }
}

impl<C: Field> SparsePoly<C> {
    /// One reduction step over a field:
    /// `self -= (LC(self) / LC(g)) * (LPP(self) / LPP(g)) * g`.
    ///
    /// The leading term of `self` is cancelled exactly, so afterwards the
    /// leading power product is strictly smaller or `self` is zero.
    ///
    /// # Errors
    ///
    /// `MixedRings`, `PreconditionViolation` if either operand is zero or
    /// `LPP(g)` does not divide `LPP(self)`, `DivisionByZero` from the
    /// coefficient field.
    pub fn reduction_step(&mut self, g: &Self) -> Result<()> {
        let t = self.reduction_shift(g, "SparsePoly::reduction_step")?;
        let c = -self.lc()?.field_div(&g.lc()?)?;

        let mut arena = self.ring.lock();
        // The leading terms cancel by construction: drop ours and skip g's
        chain::pop_front(&mut arena, &mut self.chain);
        let start = g.chain.head.and_then(|h| arena.get(h).next());
        chain::add_mul_from(&mut arena, self.ring.monoid(), &mut self.chain, &c, &t, start);
        Ok(())
    }

    /// Divides by the leading coefficient. Zero stays zero.
    ///
    /// # Errors
    ///
    /// Propagates coefficient inversion failures.
    pub fn monic(&mut self) -> Result<()> {
        if self.is_zero() {
            return Ok(());
        }
        let inv = self.lc()?.inv()?;
        self.mul_by_coeff(&inv);
        Ok(())
    }
}

impl<C: GcdDomain> SparsePoly<C> {
    /// One fraction-free reduction step: `self := sf * self - sg * t * g`
    /// where `t = LPP(self) / LPP(g)` and `sf * LC(self) == sg * LC(g)`.
    ///
    /// Coefficients are never divided. Returns the scale `sf` applied to
    /// `self`, normalized so that it is in canonical form (over a field
    /// this is always 1).
    ///
    /// # Errors
    ///
    /// `MixedRings`, or `PreconditionViolation` if either operand is zero
    /// or `LPP(g)` does not divide `LPP(self)`.
    pub fn reduction_step_gcd(&mut self, g: &Self) -> Result<C> {
        let t = self.reduction_shift(g, "SparsePoly::reduction_step_gcd")?;
        let (sf, sg) = gcd_multipliers(&self.lc()?, &g.lc()?)?;
        let c = -sg;

        let mut arena = self.ring.lock();
        chain::pop_front(&mut arena, &mut self.chain);
        chain::mul_by_coeff(&mut arena, &mut self.chain, &sf);
        let start = g.chain.head.and_then(|h| arena.get(h).next());
        chain::add_mul_from(&mut arena, self.ring.monoid(), &mut self.chain, &c, &t, start);
        Ok(sf)
    }

    /// Normalized gcd of all coefficients; zero for the zero polynomial.
    #[must_use]
    pub fn content(&self) -> C {
        chain::content(&self.ring.lock(), &self.chain)
    }

    /// Divides by the content and returns it. Zero stays zero.
    ///
    /// # Errors
    ///
    /// Propagates coefficient division failures, which cannot occur for a
    /// lawful gcd.
    pub fn remove_content(&mut self) -> Result<C> {
        let mut arena = self.ring.lock();
        let g = chain::content(&arena, &self.chain);
        if !g.is_zero() {
            chain::div_by_coeff(&mut arena, &mut self.chain, &g)?;
        }
        Ok(g)
    }
}

impl<C: Ring> Clone for SparsePoly<C> {
    fn clone(&self) -> Self {
        let chain = {
            let mut arena = self.ring.lock();
            chain::copy(&mut arena, &self.chain)
        };
        Self::from_chain(self.ring.clone(), chain)
    }
}

impl<C: Ring> PartialEq for SparsePoly<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ring.same_ring(&other.ring) && chain::equal(&self.ring.lock(), &self.chain, &other.chain)
    }
}

impl<C: Ring> Eq for SparsePoly<C> {}

impl<C: Ring> Neg for SparsePoly<C> {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.negate();
        self
    }
}

impl<C: Ring> Drop for SparsePoly<C> {
    fn drop(&mut self) {
        if self.chain.is_empty() {
            return;
        }
        let mut arena = self.ring.lock();
        chain::free(&mut arena, &mut self.chain);
    }
}

impl<C: Ring> fmt::Display for SparsePoly<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let monoid = self.ring.monoid();
        let arena = self.ring.lock();
        let mut cursor = self.chain.head;
        let mut first = true;
        while let Some(id) = cursor {
            let s = arena.get(id);
            let coeff = s.coeff().to_string();
            let (negative, abs) = match coeff.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, coeff.as_str()),
            };

            match (first, negative) {
                (true, true) => write!(f, "-")?,
                (true, false) => {}
                (false, true) => write!(f, " - ")?,
                (false, false) => write!(f, " + ")?,
            }

            if s.pp().is_one() {
                write!(f, "{abs}")?;
            } else if abs == "1" {
                write!(f, "{}", monoid.format(s.pp()))?;
            } else {
                write!(f, "{abs}*{}", monoid.format(s.pp()))?;
            }

            first = false;
            cursor = s.next();
        }
        Ok(())
    }
}

impl<C: Ring> fmt::Debug for SparsePoly<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SparsePoly({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RingConfig;
    use crate::ordering::TermOrder;
    use summa_rings::{ErrorKind, Q, Z};

    fn qx() -> SparsePolyRing<Q> {
        SparsePolyRing::new(RingConfig::new(1).with_order(TermOrder::Lex))
    }

    fn zx() -> SparsePolyRing<Z> {
        SparsePolyRing::new(RingConfig::new(1).with_order(TermOrder::Lex))
    }

    /// Builds a univariate polynomial from coefficients, highest first.
    fn uni<C: Ring + From<i64>>(ring: &SparsePolyRing<C>, coeffs: &[i64]) -> SparsePoly<C> {
        let n = coeffs.len();
        let terms = coeffs.iter().enumerate().map(|(i, &c)| {
            let e = u32::try_from(n - 1 - i).unwrap();
            (C::from(c), ring.pp(&[e]))
        });
        ring.from_terms(terms).unwrap()
    }

    #[test]
    fn test_reduction_step_over_rationals() {
        let ring = qx();
        let mut f = uni(&ring, &[1, 3, 2]);
        let g = uni(&ring, &[1, 1]);

        f.reduction_step(&g).unwrap();
        assert_eq!(f, uni(&ring, &[2, 2]));
        assert!(f.is_valid());

        f.reduction_step(&g).unwrap();
        assert!(f.is_zero());
    }

    #[test]
    fn test_reduction_step_gcd_over_integers() {
        let ring = zx();
        let old = uni(&ring, &[2, 0, 4]);
        let g = uni(&ring, &[1, 1]);

        let mut f = old.clone();
        let scale = f.reduction_step_gcd(&g).unwrap();
        assert!(scale == Z::from(1) || scale == Z::from(2));

        // scale * old - 2 * x * g == new
        let x = ring.pp(&[1]);
        let mut expected = old.clone();
        expected.mul_by_coeff(&scale);
        expected.add_mul(&Z::from(-2), &x, &g).unwrap();
        assert_eq!(f, expected);
        assert_eq!(f, uni(&ring, &[-2, 4]));
    }

    #[test]
    fn test_reduction_step_gcd_scales() {
        let ring = zx();
        let mut f = uni(&ring, &[3, 1]);
        let g = uni(&ring, &[2, 5]);

        let scale = f.reduction_step_gcd(&g).unwrap();
        assert_eq!(scale, Z::from(2));
        // 2*(3x + 1) - 3*(2x + 5)
        assert_eq!(f, uni(&ring, &[-13]));
    }

    #[test]
    fn test_add_clear() {
        let ring = qx();
        let mut f = uni(&ring, &[1, 1]);
        let mut g = uni(&ring, &[1, -1]);

        f.add_clear(&mut g).unwrap();
        assert_eq!(f, uni(&ring, &[2, 0]));
        assert!(g.is_zero());
    }

    #[test]
    fn test_push_front_zero_is_noop() {
        let ring = qx();
        let mut f = uni(&ring, &[1, 1]);
        f.push_front(Q::zero(), ring.pp(&[5]));
        assert_eq!(f.num_terms(), 2);
        f.push_back(Q::zero(), ring.pp(&[0]));
        assert_eq!(f.num_terms(), 2);
    }

    #[test]
    fn test_lpp_on_zero() {
        let ring = qx();
        let err = ring.zero().lpp().unwrap_err();
        assert!(err.is_precondition());
        assert_eq!(err.op(), "SparsePoly::lpp");
    }

    #[test]
    fn test_move_lm() {
        let ring = qx();
        let mut f = ring.zero();
        let mut g = uni(&ring, &[1, 2, 3]);

        f.move_lm_to_back(&mut g).unwrap();
        f.move_lm_to_back(&mut g).unwrap();
        assert_eq!(f, uni(&ring, &[1, 2, 0]));
        assert_eq!(g, uni(&ring, &[3]));

        let mut h = uni(&ring, &[5, 0, 0, 0]);
        h.pop_front();
        h.push_front(Q::from(7), ring.pp(&[0]));
        let mut k = uni(&ring, &[1, 0]);
        h.move_lm_to_front(&mut k).unwrap();
        assert_eq!(h, uni(&ring, &[1, 7]));

        assert!(f.move_lm_to_back(&mut ring.zero()).unwrap_err().is_precondition());
    }

    #[test]
    fn test_append_clear() {
        let ring = qx();
        let mut f = uni(&ring, &[1, 0, 0]);
        let mut g = uni(&ring, &[1, 1]);
        f.append_clear(&mut g).unwrap();
        assert_eq!(f, uni(&ring, &[1, 1, 1]));
        assert!(g.is_zero());
        assert!(f.is_valid());
    }

    #[test]
    fn test_div_and_cmp_lm() {
        let ring: SparsePolyRing<Q> = SparsePolyRing::with_indets(2);
        let f = ring
            .from_exponents(vec![(Q::from(6), &[2, 1][..]), (Q::from(1), &[0, 0][..])])
            .unwrap();
        let g = ring.from_exponents(vec![(Q::from(3), &[1, 1][..])]).unwrap();

        let (c, t) = f.div_lm(&g).unwrap();
        assert_eq!(c, Q::from(2));
        assert_eq!(t, ring.pp(&[1, 0]));
        assert_eq!(f.cmp_lpp(&g).unwrap(), Ordering::Greater);
        assert!(g.div_lm(&f).unwrap_err().is_precondition());
    }

    #[test]
    fn test_mixed_rings() {
        let (r1, r2) = (qx(), qx());
        let mut f = r1.one();
        let mut g = r2.one();
        assert_eq!(f.add_clear(&mut g).unwrap_err().kind(), &ErrorKind::MixedRings);
        assert!(!g.is_zero());
        assert_ne!(r1.one(), r2.one());
    }

    #[test]
    fn test_div_by_coeff() {
        let ring = zx();
        let mut f = uni(&ring, &[4, 6]);
        f.div_by_coeff(&Z::from(2)).unwrap();
        assert_eq!(f, uni(&ring, &[2, 3]));

        let err = f.div_by_coeff(&Z::from(2)).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InexactQuotient);
        assert!(f.is_valid());

        assert_eq!(
            f.div_by_coeff(&Z::from(0)).unwrap_err().kind(),
            &ErrorKind::DivisionByZero
        );
    }

    #[test]
    fn test_content() {
        let ring = zx();
        let mut f = uni(&ring, &[-6, 0, 9]);
        assert_eq!(f.content(), Z::from(3));
        assert_eq!(f.remove_content().unwrap(), Z::from(3));
        assert_eq!(f, uni(&ring, &[-2, 0, 3]));
        assert_eq!(ring.zero().content(), Z::from(0));
    }

    #[test]
    fn test_arithmetic() {
        let ring = qx();
        let f = uni(&ring, &[1, 1]);
        let g = uni(&ring, &[1, -1]);

        assert_eq!(f.mul(&g).unwrap(), uni(&ring, &[1, 0, -1]));
        assert_eq!(f.add(&g).unwrap(), uni(&ring, &[2, 0]));
        assert_eq!(f.sub(&g).unwrap(), uni(&ring, &[2]));
        assert!(f.sub(&f).unwrap().is_zero());
        assert_eq!(-f.clone(), uni(&ring, &[-1, -1]));
    }

    #[test]
    fn test_mul_by_term_and_monic() {
        let ring = qx();
        let mut f = uni(&ring, &[2, 4]);
        f.mul_by_term(&Q::from(3), &ring.pp(&[2])).unwrap();
        assert_eq!(f, uni(&ring, &[6, 12, 0, 0]));
        f.monic().unwrap();
        assert_eq!(f.lc().unwrap(), Q::from(1));
        assert_eq!(f.deg(), Some(3));
    }

    #[test]
    fn test_foreign_power_product_rejected() {
        let ring = qx();
        let mut f = uni(&ring, &[2, 4]);
        let before = f.clone();
        let g = uni(&ring, &[1, 1]);
        let t = PPElem::from_exponents(&[1, 0]);

        assert!(f.add_mul(&Q::from(1), &t, &g).unwrap_err().is_precondition());
        assert!(f.mul_by_pp(&t).unwrap_err().is_precondition());
        assert!(f.mul_by_term(&Q::from(2), &t).unwrap_err().is_precondition());
        assert_eq!(f, before);
        assert!(ring.monomial(Q::from(1), t).unwrap_err().is_precondition());
    }

    #[test]
    fn test_display() {
        let ring = zx();
        assert_eq!(uni(&ring, &[1, -3, 2]).to_string(), "x^2 - 3*x + 2");
        assert_eq!(uni(&ring, &[-1, 0]).to_string(), "-x");
        assert_eq!(ring.zero().to_string(), "0");
    }

    #[test]
    fn test_predicates() {
        let ring = zx();
        assert!(ring.zero().is_constant());
        assert!(ring.constant(Z::from(5)).is_constant());
        assert!(!uni(&ring, &[1, 0]).is_constant());
        assert!(ring.one().is_one());
        assert!(!ring.constant(Z::from(2)).is_one());
        assert_eq!(uni(&ring, &[1, 0, 3]).last_pp(), Some(ring.pp(&[0])));
    }

    #[test]
    fn test_drop_returns_summands() {
        let ring = qx();
        {
            let f = uni(&ring, &[1, 2, 3]);
            let g = f.clone();
            let _h = f.mul(&g).unwrap();
        }
        assert_eq!(ring.live_summands(), 0);
    }
}
