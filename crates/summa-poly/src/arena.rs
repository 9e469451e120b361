//! The summand arena.
//!
//! Every concrete polynomial ring owns one arena. All summands of all its
//! polynomials live in a single `Vec` of slots; freed slots go on a free
//! list and are handed out again before the vector grows. Chains of
//! summands are linked by [`SummandId`], never by address.

use tracing::trace;

use crate::handle::SummandId;
use crate::pp::PPElem;

/// One term of a sparse polynomial, linked to the next smaller term.
#[derive(Debug)]
pub struct Summand<C> {
    pub(crate) coeff: C,
    pub(crate) pp: PPElem,
    pub(crate) next: Option<SummandId>,
}

impl<C> Summand<C> {
    /// Returns the coefficient.
    #[must_use]
    pub fn coeff(&self) -> &C {
        &self.coeff
    }

    /// Returns the power product.
    #[must_use]
    pub fn pp(&self) -> &PPElem {
        &self.pp
    }

    /// Returns the handle of the next summand in the chain.
    #[must_use]
    pub fn next(&self) -> Option<SummandId> {
        self.next
    }
}

/// A fixed-size slot pool for the summands of one ring.
#[derive(Debug)]
pub struct SummandArena<C> {
    slots: Vec<Option<Summand<C>>>,
    free: Vec<SummandId>,
    live: usize,
}

impl<C> Default for SummandArena<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> SummandArena<C> {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an arena with `capacity` slots reserved.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            live: 0,
        }
    }

    /// Stores a new unlinked summand and returns its handle.
    pub fn alloc(&mut self, coeff: C, pp: PPElem) -> SummandId {
        let summand = Summand {
            coeff,
            pp,
            next: None,
        };
        self.live += 1;

        if let Some(id) = self.free.pop() {
            self.slots[id.index()] = Some(summand);
            return id;
        }

        if self.slots.len() == self.slots.capacity() {
            trace!(slots = self.slots.len(), "summand arena growing");
        }
        let index = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
        let id = SummandId::new(index);
        self.slots.push(Some(summand));
        id
    }

    /// Releases a summand and returns its coefficient and power product.
    ///
    /// # Panics
    ///
    /// Panics if the slot is already free.
    pub fn free(&mut self, id: SummandId) -> (C, PPElem) {
        let Some(summand) = self.slots[id.index()].take() else {
            panic!("summand {id} freed twice");
        };
        self.free.push(id);
        self.live -= 1;
        (summand.coeff, summand.pp)
    }

    /// Releases a whole chain starting at `head`; returns how many summands
    /// were freed.
    pub fn free_chain(&mut self, head: Option<SummandId>) -> usize {
        let mut count = 0;
        let mut cursor = head;
        while let Some(id) = cursor {
            cursor = self.get(id).next;
            self.free(id);
            count += 1;
        }
        count
    }

    /// Returns the summand at `id`.
    ///
    /// # Panics
    ///
    /// Panics if the slot is free.
    #[must_use]
    pub fn get(&self, id: SummandId) -> &Summand<C> {
        match &self.slots[id.index()] {
            Some(summand) => summand,
            None => panic!("summand {id} used after free"),
        }
    }

    /// Returns the summand at `id` mutably.
    ///
    /// # Panics
    ///
    /// Panics if the slot is free.
    pub fn get_mut(&mut self, id: SummandId) -> &mut Summand<C> {
        match &mut self.slots[id.index()] {
            Some(summand) => summand,
            None => panic!("summand {id} used after free"),
        }
    }

    /// Returns the number of summands currently allocated.
    #[must_use]
    pub fn live(&self) -> usize {
        self.live
    }

    /// Returns the number of slots, allocated or free.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no summand is allocated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }
}

impl<C> Drop for SummandArena<C> {
    fn drop(&mut self) {
        if !std::thread::panicking() {
            debug_assert_eq!(self.live, 0, "summand arena dropped with live summands");
        }
    }
}
