//! Property-based tests for the coefficient rings.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{FiniteField, GcdDomain, Q, Ring, Z};

    type F101 = FiniteField<101>;

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let (a, b, c) = (Z::new(a), Z::new(b), Z::new(c));
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn integer_div_exact_inverts_mul(a in small_int(), b in non_zero_int()) {
            let (a, b) = (Z::new(a), Z::new(b));
            prop_assert_eq!((a.clone() * b.clone()).div_exact(&b), Ok(a));
        }

        #[test]
        fn integer_gcd_divides(a in small_int(), b in small_int()) {
            let (a, b) = (Z::new(a), Z::new(b));
            let g = a.gcd(&b);
            prop_assert!(!g.is_negative());
            if !g.is_zero() {
                prop_assert!(a.div_exact(&g).is_ok());
                prop_assert!(b.div_exact(&g).is_ok());
            }
        }

        #[test]
        fn integer_normalize_is_non_negative(a in small_int()) {
            let n = Z::new(a).normalize().unwrap();
            prop_assert_eq!(n, Z::new(a.abs()));
        }

        #[test]
        fn rational_div_exact_inverts_mul(
            a in small_int(), b in non_zero_int(), c in non_zero_int(), d in non_zero_int()
        ) {
            let x = Q::new(a, b);
            let y = Q::new(c, d);
            prop_assert_eq!((x.clone() * y.clone()).div_exact(&y), Ok(x));
        }

        #[test]
        fn prime_field_sub_inverts_add(a in 0u64..101, b in 0u64..101) {
            let (a, b) = (F101::new(a), F101::new(b));
            prop_assert_eq!((a + b) - b, a);
            prop_assert!((a + (-a)).is_zero());
        }

        #[test]
        fn prime_field_pow_fermat(a in 1u64..101) {
            prop_assert!(F101::new(a).pow(100).is_one());
        }
    }
}
