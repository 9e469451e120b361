//! # Summa
//!
//! Exact sparse polynomial arithmetic with the reduction machinery that
//! Groebner-basis and normal-form algorithms are built on.
//!
//! ## Features
//!
//! - **Exact coefficients**: arbitrary-precision integers and rationals,
//!   prime fields
//! - **Arena-backed polynomials**: every term of a ring's polynomials
//!   lives in one per-ring slot pool
//! - **Term orders**: lex, deglex, degrevlex and weighted orders
//! - **Geobuckets**: amortized accumulation of long sums
//! - **Reduction cogs**: four interchangeable normal-form strategies, with
//!   and without coefficient division
//!
//! ## Quick Start
//!
//! ```rust
//! use summa::prelude::*;
//!
//! let ring: SparsePolyRing<Q> =
//!     SparsePolyRing::new(RingConfig::new(1).with_order(TermOrder::Lex));
//! let mut f = ring
//!     .from_exponents(vec![(Q::from(1), &[2][..]), (Q::from(-1), &[0][..])])
//!     .unwrap();
//! let g = ring
//!     .from_exponents(vec![(Q::from(1), &[1][..]), (Q::from(-1), &[0][..])])
//!     .unwrap();
//!
//! let mut cog = new_red_cog_geobucket_field(&ring);
//! normal_form(cog.as_mut(), &mut f, &[g]).unwrap();
//! assert!(f.is_zero());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use summa_poly as poly;
pub use summa_reduce as reduce;
pub use summa_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use summa_poly::{
        Geobucket, GeobucketConfig, PPElem, RingConfig, SparsePoly, SparsePolyRing, TermOrder,
    };
    pub use summa_reduce::{
        new_red_cog_geobucket_field, new_red_cog_geobucket_gcd, new_red_cog_poly_field,
        new_red_cog_poly_gcd, normal_form, CogConfig, ReductionCog,
    };
    pub use summa_rings::{
        AlgebraError, ErrorKind, Field, FiniteField, GcdDomain, Ring, Q, Z,
    };
}
