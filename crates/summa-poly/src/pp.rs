//! Power products: exponent vectors without a coefficient.
//!
//! A power product `x_0^e_0 ... x_{n-1}^e_{n-1}` is stored inline for up to
//! eight indeterminates. The total degree and a 64-bit support mask are
//! cached on construction; the mask gives a constant-time rejection test
//! for divisibility, which is the hot query during reducer lookup.

use std::fmt;

use smallvec::SmallVec;

/// Exponent storage, inline for small numbers of indeterminates.
pub type Exponents = SmallVec<[u32; 8]>;

/// An immutable exponent vector.
///
/// Power products are compared only through a [`TermOrder`]; the derived
/// `Eq`/`Hash` are structural.
///
/// [`TermOrder`]: crate::ordering::TermOrder
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct PPElem {
    exps: Exponents,
    deg: u64,
    mask: u64,
}

impl PPElem {
    /// Creates a power product from exponents.
    #[must_use]
    pub fn from_exponents(exps: &[u32]) -> Self {
        Self::from_vec(exps.iter().copied().collect())
    }

    fn from_vec(exps: Exponents) -> Self {
        let mut deg = 0u64;
        let mut mask = 0u64;
        for (i, &e) in exps.iter().enumerate() {
            deg += u64::from(e);
            if e > 0 {
                mask |= 1 << (i % 64);
            }
        }
        Self { exps, deg, mask }
    }

    /// Creates the power product 1 in `num_indets` indeterminates.
    #[must_use]
    pub fn one(num_indets: usize) -> Self {
        Self {
            exps: SmallVec::from_elem(0, num_indets),
            deg: 0,
            mask: 0,
        }
    }

    /// Creates the indeterminate `x_i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= num_indets`.
    #[must_use]
    pub fn indet(i: usize, num_indets: usize) -> Self {
        assert!(i < num_indets, "indeterminate index {i} out of range");
        let mut exps: Exponents = SmallVec::from_elem(0, num_indets);
        exps[i] = 1;
        Self {
            exps,
            deg: 1,
            mask: 1 << (i % 64),
        }
    }

    /// Returns the number of indeterminates.
    #[must_use]
    pub fn num_indets(&self) -> usize {
        self.exps.len()
    }

    /// Returns the exponent of `x_i`.
    #[must_use]
    pub fn exponent(&self, i: usize) -> u32 {
        self.exps[i]
    }

    /// Returns all exponents.
    #[must_use]
    pub fn exponents(&self) -> &[u32] {
        &self.exps
    }

    /// Returns the standard (total) degree.
    #[must_use]
    pub fn deg(&self) -> u64 {
        self.deg
    }

    /// Returns the degree with respect to a weight row.
    #[must_use]
    pub fn wdeg(&self, weights: &[u32]) -> u64 {
        self.exps
            .iter()
            .zip(weights)
            .map(|(&e, &w)| u64::from(e) * u64::from(w))
            .sum()
    }

    /// Returns true if this is the power product 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.deg == 0
    }

    /// Multiplies two power products (adds exponents).
    ///
    /// # Panics
    ///
    /// Panics if an exponent overflows `u32`, in every build profile.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        debug_assert_eq!(self.num_indets(), other.num_indets());
        let exps = self
            .exps
            .iter()
            .zip(&other.exps)
            .map(|(&a, &b)| a.checked_add(b).expect("exponent overflow"))
            .collect();
        Self {
            exps,
            deg: self.deg + other.deg,
            mask: self.mask | other.mask,
        }
    }

    /// Divides by `other` if it divides `self`.
    #[must_use]
    pub fn div(&self, other: &Self) -> Option<Self> {
        if !self.is_divisible_by(other) {
            return None;
        }
        let exps = self
            .exps
            .iter()
            .zip(&other.exps)
            .map(|(&a, &b)| a - b)
            .collect();
        Some(Self::from_vec(exps))
    }

    /// Returns true if `other` divides `self`.
    #[must_use]
    pub fn is_divisible_by(&self, other: &Self) -> bool {
        if other.mask & !self.mask != 0 || other.deg > self.deg {
            return false;
        }
        self.exps.iter().zip(&other.exps).all(|(&a, &b)| a >= b)
    }

    /// Returns true if `self` and `other` share no indeterminate.
    #[must_use]
    pub fn is_coprime(&self, other: &Self) -> bool {
        self.exps
            .iter()
            .zip(&other.exps)
            .all(|(&a, &b)| a == 0 || b == 0)
    }

    /// Computes the least common multiple.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        let exps = self
            .exps
            .iter()
            .zip(&other.exps)
            .map(|(&a, &b)| a.max(b))
            .collect();
        Self::from_vec(exps)
    }

    /// Computes the greatest common divisor.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let exps = self
            .exps
            .iter()
            .zip(&other.exps)
            .map(|(&a, &b)| a.min(b))
            .collect();
        Self::from_vec(exps)
    }

    /// Formats with the given indeterminate names.
    #[must_use]
    pub fn format_with(&self, names: &[String]) -> String {
        let parts: Vec<String> = self
            .exps
            .iter()
            .enumerate()
            .filter(|(_, &e)| e > 0)
            .map(|(i, &e)| {
                let name = names.get(i).cloned().unwrap_or_else(|| format!("x{i}"));
                if e == 1 {
                    name
                } else {
                    format!("{name}^{e}")
                }
            })
            .collect();

        if parts.is_empty() {
            "1".to_string()
        } else {
            parts.join("*")
        }
    }
}

impl fmt::Display for PPElem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with(&[]))
    }
}
