//! Port abstraction for one-way credential hashing.

use crate::domain::PasswordHash;

use super::define_port_error;

define_port_error! {
    /// Errors raised by password hashing adapters.
    pub enum PasswordHashError {
        /// The configured work factor is outside the supported range.
        InvalidCost { cost: u32 } => "unsupported hashing cost {cost}",
        /// The hashing primitive failed.
        Hashing { message: String } => "password hashing failed: {message}",
    }
}

/// Derives a one-way digest from a plaintext credential.
///
/// Hashing is CPU-bound and deterministic in cost, so the port is
/// synchronous.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Hash `plaintext`.
    fn hash(&self, plaintext: &str) -> Result<PasswordHash, PasswordHashError>;
}
