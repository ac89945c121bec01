//! Password hashing built around Argon2id.
//! Every record is a self-contained PHC string carrying the algorithm tag,
//! cost parameters, salt, and digest, so verification needs nothing stored
//! beside the record itself.

use argon2::password_hash::SaltString;
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};
use rand::rngs::OsRng;
use thiserror::Error;

/// Length policy for incoming secrets. Argon2 itself accepts far longer
/// inputs; the cap exists so callers cannot feed arbitrarily large buffers
/// into a deliberately slow function. Empty secrets are allowed.
pub const MAX_SECRET_BYTES: usize = 4096;

/// Tuned Argon2id defaults for interactive use.
/// - memory_kib: 19 MiB keeps GPU cracking expensive while staying friendly
///   to shared hosts
/// - iterations: 3 passes for sub-second latency on commodity hardware
/// - parallelism: 1 lane to keep resource usage predictable
const DEFAULT_MEMORY_KIB: u32 = 19 * 1024;
const DEFAULT_ITERATIONS: u32 = 3;
const DEFAULT_PARALLELISM: u32 = 1;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("secret exceeds the {MAX_SECRET_BYTES} byte limit")]
    SecretTooLong,
    #[error("invalid cost parameters: {0}")]
    InvalidParams(String),
    #[error("hashing failed: {0}")]
    HashFailed(String),
}

/// Work factors for the hashing side. Verification ignores these and uses
/// the parameters embedded in the record being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostParams {
    /// Memory cost in KiB.
    pub memory_kib: u32,
    /// Number of passes over the memory.
    pub iterations: u32,
    /// Number of parallel lanes.
    pub parallelism: u32,
}

impl Default for CostParams {
    fn default() -> Self {
        Self {
            memory_kib: DEFAULT_MEMORY_KIB,
            iterations: DEFAULT_ITERATIONS,
            parallelism: DEFAULT_PARALLELISM,
        }
    }
}

impl CostParams {
    fn build_argon2(&self) -> Result<Argon2<'static>, PasswordError> {
        let params = Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| PasswordError::InvalidParams(format!("{e}")))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

/// Hashes a secret with Argon2id under a fresh random salt and returns the
/// PHC record string. Two calls on the same secret produce different records.
pub fn hash_password(secret: &str, cost: &CostParams) -> Result<String, PasswordError> {
    if secret.len() > MAX_SECRET_BYTES {
        return Err(PasswordError::SecretTooLong);
    }

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = cost.build_argon2()?;
    let record = argon2
        .hash_password(secret.as_bytes(), &salt)
        .map_err(|e| PasswordError::HashFailed(format!("{e}")))?
        .to_string();
    Ok(record)
}

/// Verifies a candidate secret against a previously produced record.
/// The digest comparison happens in constant time inside the `argon2` crate.
/// Malformed records fail closed: the answer is `false`, never a panic.
pub fn verify_password(secret: &str, record: &str) -> bool {
    if secret.len() > MAX_SECRET_BYTES {
        return false;
    }

    let parsed = match PasswordHash::new(record) {
        Ok(hash) => hash,
        Err(err) => {
            tracing::warn!("stored record is not a valid PHC string: {err}");
            return false;
        }
    };

    // The cost parameters come from the record, not from this instance.
    Argon2::default()
        .verify_password(secret.as_bytes(), &parsed)
        .is_ok()
}
