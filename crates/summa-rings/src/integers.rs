//! The ring of integers Z.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use dashu::base::{Abs, Gcd};
use dashu::integer::IBig;

use crate::error::{AlgebraError, Result};
use crate::traits::{GcdDomain, Ring};

/// The ring of arbitrary precision integers.
///
/// Z is the typical coefficient ring for GCD-aware (fraction-free)
/// reduction: it is not a field, but any two elements have a gcd.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Z(pub IBig);

impl Z {
    /// Creates a new integer.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Returns the inner `dashu::IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::IBig`.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }

    /// Attempts to convert to an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < IBig::ZERO
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }
}

impl Ring for Z {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_zero(&self) -> bool {
        self.0 == IBig::ZERO
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }

    fn div_exact(&self, other: &Self) -> Result<Self> {
        if other.is_zero() {
            return Err(AlgebraError::division_by_zero("Z::div_exact"));
        }
        let r = &self.0 % &other.0;
        if r != IBig::ZERO {
            return Err(AlgebraError::inexact("Z::div_exact"));
        }
        Ok(Self(&self.0 / &other.0))
    }
}

impl GcdDomain for Z {
    fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() {
            return other.abs();
        }
        if other.is_zero() {
            return self.abs();
        }
        Self(IBig::from(self.0.clone().gcd(other.0.clone())))
    }

    fn canonical_unit(&self) -> Self {
        if self.is_negative() {
            Self::new(-1)
        } else {
            Self::one()
        }
    }
}

impl num_traits::Zero for Z {
    fn zero() -> Self {
        <Self as Ring>::zero()
    }

    fn is_zero(&self) -> bool {
        Ring::is_zero(self)
    }
}

impl num_traits::One for Z {
    fn one() -> Self {
        <Self as Ring>::one()
    }
}

impl Add for Z {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Z {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Z {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Neg for Z {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Z {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<IBig> for Z {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}

impl fmt::Display for Z {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_ring_laws() {
        let a = Z::new(10);
        let b = Z::new(3);

        assert!(Z::zero().is_zero());
        assert!(Z::one().is_one());
        assert_eq!((a.clone() + b.clone()).to_i64(), Some(13));
        assert_eq!((a.clone() - b.clone()).to_i64(), Some(7));
        assert_eq!((a * b).to_i64(), Some(30));
    }

    #[test]
    fn test_div_exact() {
        assert_eq!(Z::new(12).div_exact(&Z::new(-4)), Ok(Z::new(-3)));
        assert_eq!(
            Z::new(7).div_exact(&Z::new(2)).unwrap_err().kind(),
            &ErrorKind::InexactQuotient
        );
        assert_eq!(
            Z::new(7).div_exact(&Z::zero()).unwrap_err().kind(),
            &ErrorKind::DivisionByZero
        );
    }

    #[test]
    fn test_gcd_normalized() {
        assert_eq!(Z::new(-12).gcd(&Z::new(18)), Z::new(6));
        assert_eq!(Z::new(0).gcd(&Z::new(-5)), Z::new(5));
        assert!(Z::zero().gcd(&Z::zero()).is_zero());
        assert_eq!(Z::gcd_all(&[Z::new(4), Z::new(-6), Z::new(10)]), Z::new(2));
    }

    #[test]
    fn test_canonical_unit() {
        assert_eq!(Z::new(-7).canonical_unit(), Z::new(-1));
        assert_eq!(Z::new(-7).normalize(), Ok(Z::new(7)));
        assert_eq!(Z::zero().canonical_unit(), Z::one());
    }

    #[test]
    fn test_num_traits_interop() {
        assert!(<Z as num_traits::Zero>::is_zero(&<Z as num_traits::Zero>::zero()));
        assert!(<Z as num_traits::One>::one().is_one());
    }
}
