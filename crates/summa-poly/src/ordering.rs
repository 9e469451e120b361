//! Term orderings.
//!
//! A term ordering is a total order on power products compatible with
//! multiplication: `a > b` implies `a*c > b*c`. Sparse polynomials keep
//! their summands sorted by it, so it is the single source of truth for
//! "leading" everywhere in the engine.

use std::cmp::Ordering;

use crate::pp::PPElem;

/// A term ordering.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum TermOrder {
    /// Lexicographic order: the first differing exponent decides.
    Lex,

    /// Degree first, lexicographic tiebreak.
    DegLex,

    /// Degree first, then the last differing exponent decides with the
    /// comparison reversed.
    #[default]
    DegRevLex,

    /// Weighted degree first (one weight per indeterminate), then
    /// degrevlex as a tiebreak. Weights must be positive.
    Weighted(Vec<u32>),
}

impl TermOrder {
    /// Compares two power products according to this ordering.
    #[must_use]
    pub fn compare(&self, a: &PPElem, b: &PPElem) -> Ordering {
        match self {
            TermOrder::Lex => cmp_lex(a, b),
            TermOrder::DegLex => cmp_deglex(a, b),
            TermOrder::DegRevLex => cmp_degrevlex(a, b),
            TermOrder::Weighted(w) => a
                .wdeg(w)
                .cmp(&b.wdeg(w))
                .then_with(|| cmp_degrevlex(a, b)),
        }
    }

    /// Returns the grading row, if this ordering carries explicit weights.
    #[must_use]
    pub fn weights(&self) -> Option<&[u32]> {
        match self {
            TermOrder::Weighted(w) => Some(w),
            _ => None,
        }
    }

    /// Returns a short name for the ordering.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            TermOrder::Lex => "lex",
            TermOrder::DegLex => "deglex",
            TermOrder::DegRevLex => "degrevlex",
            TermOrder::Weighted(_) => "weighted",
        }
    }
}

impl std::fmt::Display for TermOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Compares two power products lexicographically.
#[must_use]
pub fn cmp_lex(a: &PPElem, b: &PPElem) -> Ordering {
    a.exponents().cmp(b.exponents())
}

/// Compares two power products by degree, then lexicographically.
#[must_use]
pub fn cmp_deglex(a: &PPElem, b: &PPElem) -> Ordering {
    a.deg().cmp(&b.deg()).then_with(|| cmp_lex(a, b))
}

/// Compares two power products by degree, then reverse lexicographically.
#[must_use]
pub fn cmp_degrevlex(a: &PPElem, b: &PPElem) -> Ordering {
    match a.deg().cmp(&b.deg()) {
        Ordering::Equal => {}
        ord => return ord,
    }

    for (ea, eb) in a.exponents().iter().zip(b.exponents()).rev() {
        match eb.cmp(ea) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}
