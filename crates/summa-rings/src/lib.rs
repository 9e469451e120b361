//! # summa-rings
//!
//! Coefficient rings for the summa polynomial engine.
//!
//! This crate provides:
//! - The coefficient capability traits: `Ring`, `GcdDomain`, `Field`
//! - Concrete rings: Z, Q, Z_p (all exact, arbitrary precision where needed)
//! - The error type shared by every summa crate
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── GcdDomain
//!       └── Field
//! ```
//!
//! Polynomial code only ever talks to coefficients through these traits, so
//! any exact ring with a decidable zero test can be plugged in.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod finite_field;
pub mod integers;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use error::{AlgebraError, ErrorKind, Result};
pub use finite_field::FiniteField;
pub use integers::Z;
pub use rationals::Q;
pub use traits::{Field, GcdDomain, Ring};
