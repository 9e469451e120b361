//! The field of rational numbers Q.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use dashu::base::Inverse;
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;

use crate::error::{AlgebraError, Result};
use crate::integers::Z;
use crate::traits::{Field, GcdDomain, Ring};

/// The field of arbitrary precision rational numbers.
///
/// Values are always kept in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Q(pub RBig);

impl Q {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "denominator cannot be zero");
        let num = if den < 0 { -IBig::from(num) } else { IBig::from(num) };
        Self(RBig::from_parts(num, UBig::from(den.unsigned_abs())))
    }

    /// Creates a rational from an integer.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(RBig::from(IBig::from(n)))
    }

    /// Returns the numerator in lowest terms.
    #[must_use]
    pub fn numerator(&self) -> Z {
        Z(self.0.numerator().clone())
    }

    /// Returns the (positive) denominator in lowest terms.
    #[must_use]
    pub fn denominator(&self) -> Z {
        Z(IBig::from(self.0.denominator().clone()))
    }

    /// Returns true if the denominator is one.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        *self.0.denominator() == UBig::ONE
    }

    /// Returns the inner `dashu::RBig`.
    #[must_use]
    pub fn into_inner(self) -> RBig {
        self.0
    }
}

impl Ring for Q {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_zero(&self) -> bool {
        self.0 == RBig::ZERO
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }

    fn div_exact(&self, other: &Self) -> Result<Self> {
        if other.is_zero() {
            return Err(AlgebraError::division_by_zero("Q::div_exact"));
        }
        Ok(Self(&self.0 / &other.0))
    }
}

impl GcdDomain for Q {
    fn gcd(&self, other: &Self) -> Self {
        // Every non-zero element is a unit
        if self.is_zero() && other.is_zero() {
            Self::zero()
        } else {
            Self::one()
        }
    }

    fn canonical_unit(&self) -> Self {
        if self.is_zero() {
            Self::one()
        } else {
            self.clone()
        }
    }
}

impl Field for Q {
    fn inv(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(AlgebraError::division_by_zero("Q::inv"));
        }
        Ok(Self(self.0.clone().inv()))
    }
}

impl num_traits::Zero for Q {
    fn zero() -> Self {
        <Self as Ring>::zero()
    }

    fn is_zero(&self) -> bool {
        Ring::is_zero(self)
    }
}

impl num_traits::One for Q {
    fn one() -> Self {
        <Self as Ring>::one()
    }
}

impl Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<Z> for Q {
    fn from(value: Z) -> Self {
        Self(RBig::from(value.into_inner()))
    }
}

impl fmt::Display for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.0.numerator())
        } else {
            write!(f, "{}/{}", self.0.numerator(), self.0.denominator())
        }
    }
}
