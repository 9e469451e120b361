//! Coefficient ring traits.
//!
//! These traits are the only window the polynomial engine has onto its
//! coefficients: arithmetic through the operator traits, a zero test, and
//! exact division. GCD-aware reduction additionally needs [`GcdDomain`],
//! field reduction needs [`Field`].

use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::Result;

/// A commutative ring with decidable equality.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative and commutative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
pub trait Ring:
    Clone
    + Eq
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Computes `self / other` when the quotient exists in the ring.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if `other` is zero, `InexactQuotient` if no `q`
    /// with `q * other == self` exists.
    fn div_exact(&self, other: &Self) -> Result<Self>;

    /// Computes self^n for non-negative n.
    #[must_use]
    fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}

/// A ring in which any two elements have a greatest common divisor.
///
/// The gcd is only defined up to units; implementations return the
/// normalized representative (non-negative for Z, one for fields).
pub trait GcdDomain: Ring {
    /// Computes the normalized greatest common divisor.
    ///
    /// `gcd(0, 0)` is zero.
    #[must_use]
    fn gcd(&self, other: &Self) -> Self;

    /// Returns the unit `u` such that `self / u` is in normal form.
    ///
    /// The canonical unit of zero is one.
    #[must_use]
    fn canonical_unit(&self) -> Self;

    /// Divides out the canonical unit.
    ///
    /// # Errors
    ///
    /// Propagates from [`Ring::div_exact`]; never fails for a lawful
    /// implementation since units always divide.
    fn normalize(&self) -> Result<Self> {
        if self.is_zero() {
            return Ok(Self::zero());
        }
        self.div_exact(&self.canonical_unit())
    }

    /// Folds `gcd` over a sequence, stopping early once the gcd is one.
    #[must_use]
    fn gcd_all<'a, I>(elems: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        Self: 'a,
    {
        let mut g = Self::zero();
        for c in elems {
            g = g.gcd(c);
            if g.is_one() {
                break;
            }
        }
        g
    }
}

/// A ring where every non-zero element has a multiplicative inverse.
pub trait Field: GcdDomain {
    /// Computes the multiplicative inverse.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if the element is zero.
    fn inv(&self) -> Result<Self>;

    /// Divides by another element.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if `other` is zero.
    fn field_div(&self, other: &Self) -> Result<Self> {
        Ok(self.clone() * other.inv()?)
    }
}
