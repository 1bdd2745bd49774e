//! bcrypt-backed `PasswordHasher` adapter.

use crate::domain::PasswordHash;
use crate::domain::ports::{PasswordHashError, PasswordHasher};

/// Lowest work factor bcrypt accepts.
pub const MIN_COST: u32 = 4;
/// Highest work factor bcrypt accepts.
pub const MAX_COST: u32 = 31;
/// Work factor used when none is configured.
pub const DEFAULT_COST: u32 = 10;

/// Hashes credentials with bcrypt at a fixed work factor.
///
/// # Examples
///
/// ```
/// use seeder::domain::ports::PasswordHasher;
/// use seeder::outbound::credentials::BcryptPasswordHasher;
///
/// let hasher = BcryptPasswordHasher::new(4).expect("cost in range");
/// let digest = hasher.hash("saroj").expect("hashing succeeds");
/// assert!(digest.as_str().starts_with("$2b$04$"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with the given work factor.
    ///
    /// # Errors
    ///
    /// Returns [`PasswordHashError::InvalidCost`] outside `4..=31`.
    pub fn new(cost: u32) -> Result<Self, PasswordHashError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(PasswordHashError::invalid_cost(cost));
        }
        Ok(Self { cost })
    }

    /// Configured work factor.
    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<PasswordHash, PasswordHashError> {
        bcrypt::hash(plaintext, self.cost)
            .map(PasswordHash::new)
            .map_err(|err| PasswordHashError::hashing(err.to_string()))
    }
}
