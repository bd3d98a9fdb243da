//! Credential hashing.
//!
//! Credentials are stored as Argon2id PHC strings with a per-credential random salt and are
//! checked with [`PasswordVerifier`], which compares digests in constant time.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::Error;

/// Hashes a credential into a PHC string suitable for storage.
pub fn hash_credential(credential: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(credential.as_bytes(), &salt)?;

    Ok(hash.to_string())
}

/// Checks a credential against a stored PHC string.
///
/// A stored value that is not a valid PHC string never matches.
pub fn verify_credential(password_hash: &str, credential: &str) -> bool {
    match PasswordHash::new(password_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(credential.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            tracing::warn!("Stored credential hash could not be parsed: {}", e);

            false
        }
    }
}
