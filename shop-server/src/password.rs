//! Password hashing
//!
//! Passwords are stored as Argon2 PHC strings with a random salt.
//! Hashing is CPU-bound; async callers should run it on the blocking pool.

use argon2::password_hash::SaltString;
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};
use rand::rngs::OsRng;

/// Password hashing error
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("failed to hash password: {0}")]
    Hash(String),

    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Hash a plain-text password.
pub fn hash(password: &str) -> Result<String, PasswordError> {
    hash_with(&Argon2::default(), password)
}

/// Hash a password for generated demo accounts.
///
/// Uses the minimum Argon2 cost so bulk seeding stays cheap. Never use this
/// for passwords that came from a client.
pub fn hash_demo(password: &str) -> Result<String, PasswordError> {
    let params = Params::new(
        Params::MIN_M_COST,
        Params::MIN_T_COST,
        Params::MIN_P_COST,
        None,
    )
    .map_err(|e| PasswordError::Hash(e.to_string()))?;

    hash_with(&Argon2::new(Algorithm::Argon2id, Version::V0x13, params), password)
}

fn hash_with(argon2: &Argon2<'_>, password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::Hash(e.to_string()))
}

/// Check a plain-text password against a stored hash.
///
/// Malformed hashes never verify.
pub fn verify(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}
