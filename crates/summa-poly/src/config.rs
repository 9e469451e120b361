//! Ring and accumulator configuration.

use crate::ordering::TermOrder;

/// Default indeterminate names for small rings.
const DEFAULT_NAMES: [&str; 6] = ["x", "y", "z", "w", "u", "v"];

/// Construction parameters of a [`SparsePolyRing`].
///
/// [`SparsePolyRing`]: crate::ring::SparsePolyRing
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RingConfig {
    /// Term ordering used to sort summands.
    pub order: TermOrder,
    /// One name per indeterminate; the length fixes the number of indeterminates.
    pub indet_names: Vec<String>,
    /// Number of summand slots reserved up front.
    pub arena_capacity: usize,
}

impl RingConfig {
    /// Creates a configuration with `num_indets` default-named indeterminates
    /// (`x, y, z, w, u, v`, then `x6, x7, ...`) and degrevlex order.
    #[must_use]
    pub fn new(num_indets: usize) -> Self {
        let indet_names = (0..num_indets)
            .map(|i| match DEFAULT_NAMES.get(i) {
                Some(name) if num_indets <= DEFAULT_NAMES.len() => (*name).to_string(),
                _ => format!("x{i}"),
            })
            .collect();
        Self {
            order: TermOrder::default(),
            indet_names,
            arena_capacity: 64,
        }
    }

    /// Uses the given indeterminate names.
    #[must_use]
    pub fn with_names<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        self.indet_names = names.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    /// Uses the given term ordering.
    #[must_use]
    pub fn with_order(mut self, order: TermOrder) -> Self {
        self.order = order;
        self
    }

    /// Reserves `capacity` summand slots at construction.
    #[must_use]
    pub fn with_arena_capacity(mut self, capacity: usize) -> Self {
        self.arena_capacity = capacity;
        self
    }

    /// Returns the number of indeterminates.
    #[must_use]
    pub fn num_indets(&self) -> usize {
        self.indet_names.len()
    }
}

/// Bucket sizing of a [`Geobucket`].
///
/// Bucket `i` holds at most `min_bucket_len * growth^i` summands.
/// Values below the minimum (1 for the length, 2 for the growth) are
/// read as the minimum, also when the struct is built literally.
///
/// [`Geobucket`]: crate::geobucket::Geobucket
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeobucketConfig {
    /// Capacity of the smallest bucket.
    pub min_bucket_len: usize,
    /// Ratio between consecutive bucket capacities.
    pub growth: usize,
}

impl Default for GeobucketConfig {
    fn default() -> Self {
        Self {
            min_bucket_len: 16,
            growth: 4,
        }
    }
}

impl GeobucketConfig {
    /// Sets the smallest bucket capacity (at least 1).
    #[must_use]
    pub fn with_min_bucket_len(mut self, len: usize) -> Self {
        self.min_bucket_len = len.max(1);
        self
    }

    /// Sets the growth ratio (at least 2).
    #[must_use]
    pub fn with_growth(mut self, growth: usize) -> Self {
        self.growth = growth.max(2);
        self
    }

    /// Returns the capacity of bucket `i`.
    #[must_use]
    pub fn bucket_capacity(&self, i: usize) -> usize {
        let growth = self.growth.max(2);
        let mut cap = self.min_bucket_len.max(1);
        for _ in 0..i {
            cap = cap.saturating_mul(growth);
        }
        cap
    }
}
