//! Prime fields Z_p.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::{AlgebraError, Result};
use crate::traits::{Field, GcdDomain, Ring};

/// The field Z_p for a prime p below 2^63.
///
/// Values are kept reduced in `[0, P)`. `P` must be prime; this is not
/// checked, and inverses of non-units of a composite modulus are reported
/// as `DivisionByZero`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct FiniteField<const P: u64>(u64);

impl<const P: u64> FiniteField<P> {
    /// Creates a new field element.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value % P)
    }

    /// Creates a field element from a signed value.
    #[must_use]
    pub fn from_signed(value: i64) -> Self {
        let r = value.rem_euclid(P as i64);
        Self(r as u64)
    }

    /// Returns the representative in `[0, P)`.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the characteristic.
    #[must_use]
    pub const fn characteristic() -> u64 {
        P
    }

    fn inverse(self) -> Option<Self> {
        if self.0 == 0 {
            return None;
        }

        let (mut r0, mut r1) = (i128::from(P), i128::from(self.0));
        let (mut t0, mut t1) = (0i128, 1i128);
        while r1 != 0 {
            let q = r0 / r1;
            (r0, r1) = (r1, r0 - q * r1);
            (t0, t1) = (t1, t0 - q * t1);
        }
        if r0 != 1 {
            return None;
        }

        Some(Self(t0.rem_euclid(i128::from(P)) as u64))
    }
}

impl<const P: u64> Ring for FiniteField<P> {
    fn zero() -> Self {
        Self(0)
    }

    fn one() -> Self {
        Self(1 % P)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }

    fn is_one(&self) -> bool {
        self.0 == 1
    }

    fn div_exact(&self, other: &Self) -> Result<Self> {
        other
            .inverse()
            .map(|inv| *self * inv)
            .ok_or_else(|| AlgebraError::division_by_zero("FiniteField::div_exact"))
    }
}

impl<const P: u64> GcdDomain for FiniteField<P> {
    fn gcd(&self, other: &Self) -> Self {
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
            *self
        }
    }
}

impl<const P: u64> Field for FiniteField<P> {
    fn inv(&self) -> Result<Self> {
        self.inverse()
            .ok_or_else(|| AlgebraError::division_by_zero("FiniteField::inv"))
    }
}

impl<const P: u64> Add for FiniteField<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let s = self.0 + rhs.0;
        Self(if s >= P { s - P } else { s })
    }
}

impl<const P: u64> Sub for FiniteField<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        if self.0 >= rhs.0 {
            Self(self.0 - rhs.0)
        } else {
            Self(P - rhs.0 + self.0)
        }
    }
}

impl<const P: u64> Mul for FiniteField<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let prod = u128::from(self.0) * u128::from(rhs.0) % u128::from(P);
        Self(prod as u64)
    }
}

impl<const P: u64> Neg for FiniteField<P> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        if self.0 == 0 {
            self
        } else {
            Self(P - self.0)
        }
    }
}

impl<const P: u64> From<i64> for FiniteField<P> {
    fn from(value: i64) -> Self {
        Self::from_signed(value)
    }
}

impl<const P: u64> fmt::Display for FiniteField<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type F7 = FiniteField<7>;
    type F32003 = FiniteField<32003>;

    #[test]
    fn test_arithmetic() {
        let a = F7::new(5);
        let b = F7::new(4);
        assert_eq!((a + b).value(), 2);
        assert_eq!((b - a).value(), 6);
        assert_eq!((a * b).value(), 6);
        assert_eq!((-a).value(), 2);
        assert_eq!(F7::from_signed(-1).value(), 6);
    }

    #[test]
    fn test_inverse() {
        for v in 1..7 {
            let a = F7::new(v);
            assert!((a * a.inv().unwrap()).is_one());
        }
        assert!(F7::zero().inv().is_err());

        let a = F32003::new(12345);
        assert!((a * a.inv().unwrap()).is_one());
    }

    #[test]
    fn test_div_exact() {
        let a = F7::new(3);
        let b = F7::new(5);
        let q = a.div_exact(&b).unwrap();
        assert_eq!(q * b, a);
    }
}
