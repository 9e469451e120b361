//! # summa-poly
//!
//! Sparse multivariate polynomials for the summa engine.
//!
//! This crate provides:
//! - Power products (exponent vectors) with a fast divisibility pre-test
//! - Term orderings: lex, deglex, degrevlex and weighted orders
//! - A per-ring summand arena: every term of every polynomial of a ring
//!   lives in one slot pool and is referenced by a 32-bit index
//! - `SparsePoly`: an ordered chain of summands, strictly decreasing in the
//!   term order, with the in-place primitives that Buchberger-style
//!   algorithms are built from
//! - `Geobucket`: a multi-bucket accumulator for long reductions
//!
//! ## Ownership
//!
//! ```text
//! SparsePolyRing ──Arc──▶ RingInner { PPMonoid, Mutex<SummandArena> }
//!       ▲
//!       └── every SparsePoly / Geobucket holds a ring handle
//! ```
//!
//! The arena is therefore dropped only after every value that borrowed
//! slots from it. The mutex makes a ring shareable across threads, but all
//! work on one ring is serialized.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arena;
mod chain;
pub mod config;
pub mod geobucket;
pub mod handle;
pub mod iter;
pub mod monoid;
pub mod ordering;
pub mod pp;
pub mod ring;
pub mod sparse;

#[cfg(test)]
mod proptests;

pub use arena::{Summand, SummandArena};
pub use config::{GeobucketConfig, RingConfig};
pub use geobucket::Geobucket;
pub use handle::SummandId;
pub use iter::Terms;
pub use monoid::PPMonoid;
pub use ordering::TermOrder;
pub use pp::PPElem;
pub use ring::SparsePolyRing;
pub use sparse::SparsePoly;

pub use summa_rings::{AlgebraError, ErrorKind, Result};
