use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;

/// Password hashing implementation.
///
/// Provides cryptographic password hashing (internally uses Argon2id).
/// The work factor is the Argon2 time cost: the number of passes over memory.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Work factor used by [`PasswordHasher::new`].
    pub const DEFAULT_WORK_FACTOR: u32 = 10;

    /// Create a new password hasher with the default work factor.
    pub fn new() -> Self {
        Self {
            params: Self::params_for(Self::DEFAULT_WORK_FACTOR)
                .unwrap_or_else(|_| Params::default()),
        }
    }

    /// Create a password hasher with a custom work factor.
    ///
    /// Higher values trade CPU time for brute-force resistance.
    ///
    /// # Errors
    /// * `InvalidWorkFactor` - Work factor is zero
    pub fn with_work_factor(work_factor: u32) -> Result<Self, PasswordError> {
        Ok(Self {
            params: Self::params_for(work_factor)?,
        })
    }

    /// Work factor encoded into newly created hashes.
    pub fn work_factor(&self) -> u32 {
        self.params.t_cost()
    }

    fn params_for(work_factor: u32) -> Result<Params, PasswordError> {
        Params::new(
            Params::DEFAULT_M_COST,
            work_factor,
            Params::DEFAULT_P_COST,
            None,
        )
        .map_err(|_| PasswordError::InvalidWorkFactor(work_factor))
    }

    /// Hash a plaintext password securely.
    ///
    /// Uses Argon2id with random salt generation.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone());

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// Parameters are read from the stored hash, so hashes produced under an
    /// older work factor keep verifying. A stored hash that cannot be parsed
    /// never matches.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash in PHC string format
    ///
    /// # Returns
    /// True if password matches, false otherwise
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
