//! # summa-reduce
//!
//! Reduction engines for normal-form computations.
//!
//! A reduction cog holds the polynomial being reduced and performs the
//! leading-term cancellations that an external scheduler asks for. The
//! scheduler decides which reducer to offer and when the current leading
//! term is irreducible; the cog only does the arithmetic and bookkeeping.
//!
//! Four strategies share the [`ReductionCog`] contract:
//! - [`RedCogPolyField`]: flat polynomial, field coefficients
//! - [`RedCogPolyGcd`]: flat polynomial, fraction-free over a gcd domain
//! - [`RedCogGeobucketField`]: geobucket accumulator, field coefficients
//! - [`RedCogGeobucketGcd`]: geobucket accumulator, fraction-free
//!
//! [`normal_form`] is a simple full-reduction scheduler on top of them.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cog;
pub mod config;
pub mod geobucket_field;
pub mod geobucket_gcd;
pub mod normal_form;
pub mod poly_field;
pub mod poly_gcd;

#[cfg(test)]
mod proptests;

pub use cog::{
    new_red_cog_geobucket_field, new_red_cog_geobucket_field_with, new_red_cog_geobucket_gcd,
    new_red_cog_geobucket_gcd_with, new_red_cog_poly_field, new_red_cog_poly_gcd,
    new_red_cog_poly_gcd_with, CogState, ReductionCog,
};
pub use config::CogConfig;
pub use geobucket_field::RedCogGeobucketField;
pub use geobucket_gcd::RedCogGeobucketGcd;
pub use normal_form::{normal_form, ReductionStats};
pub use poly_field::RedCogPolyField;
pub use poly_gcd::RedCogPolyGcd;

pub use summa_rings::{AlgebraError, ErrorKind, Result};
