//! Error type shared by all summa crates.
//!
//! Every failure carries an [`ErrorKind`] and the name of the operation that
//! raised it, e.g. `SparsePoly::lpp: precondition violated: zero polynomial`.

use thiserror::Error;

/// The kind of failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Coefficient-level division by the additive identity.
    #[error("division by zero")]
    DivisionByZero,

    /// The requested division has no exact result.
    #[error("inexact division")]
    InexactQuotient,

    /// The operands belong to different ring instances.
    #[error("operands belong to different rings")]
    MixedRings,

    /// A documented precondition of the operation does not hold.
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    /// A documented gap in the implementation.
    #[error("not yet implemented")]
    NotYetImplemented,
}

/// An error raised by a ring or polynomial operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{op}: {kind}")]
pub struct AlgebraError {
    kind: ErrorKind,
    op: &'static str,
}

impl AlgebraError {
    /// Creates an error of the given kind raised by `op`.
    #[must_use]
    pub fn new(kind: ErrorKind, op: &'static str) -> Self {
        Self { kind, op }
    }

    /// Division by zero in `op`.
    #[must_use]
    pub fn division_by_zero(op: &'static str) -> Self {
        Self::new(ErrorKind::DivisionByZero, op)
    }

    /// Inexact division in `op`.
    #[must_use]
    pub fn inexact(op: &'static str) -> Self {
        Self::new(ErrorKind::InexactQuotient, op)
    }

    /// Operands of `op` come from different rings.
    #[must_use]
    pub fn mixed_rings(op: &'static str) -> Self {
        Self::new(ErrorKind::MixedRings, op)
    }

    /// A precondition of `op` was violated.
    #[must_use]
    pub fn precondition(op: &'static str, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::PreconditionViolation(reason.into()), op)
    }

    /// `op` is not implemented for this input.
    #[must_use]
    pub fn not_yet_implemented(op: &'static str) -> Self {
        Self::new(ErrorKind::NotYetImplemented, op)
    }

    /// Returns the error kind.
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the name of the operation that failed.
    #[must_use]
    pub fn op(&self) -> &'static str {
        self.op
    }

    /// Returns true for precondition violations.
    #[must_use]
    pub fn is_precondition(&self) -> bool {
        matches!(self.kind, ErrorKind::PreconditionViolation(_))
    }
}

/// Result alias used throughout summa.
pub type Result<T> = std::result::Result<T, AlgebraError>;
