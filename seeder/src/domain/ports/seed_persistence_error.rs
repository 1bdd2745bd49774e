//! Shared persistence error for the seeding ports.
//!
//! All three store collections fail in the same ways, so the user, lecture,
//! and course ports share one error type.

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by seeding repository adapters.
    pub enum SeedPersistenceError {
        /// Store connection could not be established or was lost.
        Connection { message: String } => "seed store connection failed: {message}",
        /// A unique constraint rejected the write.
        UniqueViolation { message: String } => "seed store uniqueness violation: {message}",
        /// The record violated a shape or reference constraint.
        Validation { message: String } => "seed store rejected record: {message}",
        /// Query or mutation failed for another reason.
        Query { message: String } => "seed store query failed: {message}",
    }
}

/// Coarse failure classification used when reporting an aborted run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Store unreachable.
    Connection,
    /// Concurrent creation of a uniquely keyed record.
    UniquenessViolation,
    /// A record violated its shape constraints.
    Validation,
    /// Anything else.
    Unknown,
}

impl FailureKind {
    /// Stable label for structured logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Connection => "connection_failure",
            Self::UniquenessViolation => "uniqueness_violation",
            Self::Validation => "validation_failure",
            Self::Unknown => "unknown_failure",
        }
    }
}

impl SeedPersistenceError {
    /// Classify this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Connection { .. } => FailureKind::Connection,
            Self::UniqueViolation { .. } => FailureKind::UniquenessViolation,
            Self::Validation { .. } => FailureKind::Validation,
            Self::Query { .. } => FailureKind::Unknown,
        }
    }
}
