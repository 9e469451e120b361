//! Term iteration.

use std::iter::FusedIterator;

use summa_rings::Ring;

use crate::handle::SummandId;
use crate::pp::PPElem;
use crate::sparse::SparsePoly;

/// Lazy iterator over the terms of a [`SparsePoly`] in decreasing order.
///
/// Yields owned `(coefficient, power product)` pairs. The arena is locked
/// only for the duration of each `next` call, so the polynomials of the
/// same ring may be built or dropped between steps. Call
/// [`SparsePoly::iter`] again to restart.
pub struct Terms<'a, C: Ring> {
    poly: &'a SparsePoly<C>,
    cursor: Option<SummandId>,
    remaining: usize,
}

impl<'a, C: Ring> Terms<'a, C> {
    pub(crate) fn new(poly: &'a SparsePoly<C>) -> Self {
        Self {
            poly,
            cursor: poly.chain.head,
            remaining: poly.chain.len,
        }
    }
}

impl<C: Ring> Iterator for Terms<'_, C> {
    type Item = (C, PPElem);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let arena = self.poly.ring().lock();
        let s = arena.get(id);
        self.cursor = s.next();
        self.remaining -= 1;
        Some((s.coeff().clone(), s.pp().clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<C: Ring> ExactSizeIterator for Terms<'_, C> {}

impl<C: Ring> FusedIterator for Terms<'_, C> {}

impl<'a, C: Ring> IntoIterator for &'a SparsePoly<C> {
    type Item = (C, PPElem);
    type IntoIter = Terms<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
