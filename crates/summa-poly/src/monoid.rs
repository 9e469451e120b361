//! The power-product monoid of a polynomial ring.

use std::cmp::Ordering;

use crate::config::RingConfig;
use crate::ordering::TermOrder;
use crate::pp::PPElem;

/// The monoid of power products of a ring: arity, names and term order.
///
/// All ordering decisions made by polynomial code go through [`PPMonoid::cmp`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PPMonoid {
    names: Vec<String>,
    order: TermOrder,
}

impl PPMonoid {
    /// Creates the monoid described by a ring configuration.
    #[must_use]
    pub fn new(config: &RingConfig) -> Self {
        Self {
            names: config.indet_names.clone(),
            order: config.order.clone(),
        }
    }

    /// Returns the number of indeterminates.
    #[must_use]
    pub fn num_indets(&self) -> usize {
        self.names.len()
    }

    /// Returns the indeterminate names.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the term ordering.
    #[must_use]
    pub fn order(&self) -> &TermOrder {
        &self.order
    }

    /// Returns the power product 1.
    #[must_use]
    pub fn one(&self) -> PPElem {
        PPElem::one(self.num_indets())
    }

    /// Returns the indeterminate `x_i`, or `None` if out of range.
    #[must_use]
    pub fn indet(&self, i: usize) -> Option<PPElem> {
        (i < self.num_indets()).then(|| PPElem::indet(i, self.num_indets()))
    }

    /// Returns true if `pp` belongs to this monoid.
    #[must_use]
    pub fn owns(&self, pp: &PPElem) -> bool {
        pp.num_indets() == self.num_indets()
    }

    /// Compares two power products under the term ordering.
    #[must_use]
    pub fn cmp(&self, a: &PPElem, b: &PPElem) -> Ordering {
        self.order.compare(a, b)
    }

    /// Multiplies two power products.
    #[must_use]
    pub fn mul(&self, a: &PPElem, b: &PPElem) -> PPElem {
        a.mul(b)
    }

    /// Divides `a` by `b` if `b` divides `a`.
    #[must_use]
    pub fn div(&self, a: &PPElem, b: &PPElem) -> Option<PPElem> {
        a.div(b)
    }

    /// Returns true if `b` divides `a`.
    #[must_use]
    pub fn is_divisible(&self, a: &PPElem, b: &PPElem) -> bool {
        a.is_divisible_by(b)
    }

    /// Standard degree: the sum of the exponents.
    #[must_use]
    pub fn deg(&self, pp: &PPElem) -> u64 {
        pp.deg()
    }

    /// Degree with respect to the first grading row.
    ///
    /// Orders without explicit weights grade every indeterminate by 1, so
    /// this agrees with [`PPMonoid::deg`] for them.
    #[must_use]
    pub fn wdeg(&self, pp: &PPElem) -> u64 {
        match self.order.weights() {
            Some(w) => pp.wdeg(w),
            None => pp.deg(),
        }
    }

    /// Formats a power product with this monoid's indeterminate names.
    #[must_use]
    pub fn format(&self, pp: &PPElem) -> String {
        pp.format_with(&self.names)
    }
}
