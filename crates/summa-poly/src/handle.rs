//! Summand handles.
//!
//! A handle is a 32-bit slot index into a ring's summand arena. The index
//! is stored off by one in a `NonZeroU32`, so `Option<SummandId>` (the
//! "next" link of a chain) is still four bytes.

use std::fmt;
use std::num::NonZeroU32;

/// A handle to a summand slot in a [`SummandArena`].
///
/// [`SummandArena`]: crate::arena::SummandArena
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SummandId(NonZeroU32);

impl SummandId {
    /// Creates a handle from a slot index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is `u32::MAX`.
    #[must_use]
    pub fn new(index: u32) -> Self {
        match index.checked_add(1).and_then(NonZeroU32::new) {
            Some(raw) => Self(raw),
            None => panic!("summand arena capacity exceeded"),
        }
    }

    /// Returns the slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl fmt::Debug for SummandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Summand({})", self.index())
    }
}

impl fmt::Display for SummandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index())
    }
}
