//! Password hashing using Argon2id
//!
//! Passwords are never stored in the clear. Registration hashes them with
//! Argon2id, a memory-hard function resistant to GPU/ASIC attacks, and the
//! resulting PHC string (which embeds the salt and parameters) is what lands
//! in users.txt.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{MoneyMateError, MoneyMateResult};

/// Hash a password with Argon2id and a fresh random salt
///
/// Returns the hash in PHC string format, e.g.
/// `$argon2id$v=19$m=19456,t=2,p=1$...$...`. PHC strings contain no commas,
/// so they are safe inside the comma-separated credentials file.
pub fn hash_password(password: &str) -> MoneyMateResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| MoneyMateError::Hash(format!("Password hashing failed: {}", e)))?;

    Ok(hash.to_string())
}

/// Verify a password attempt against a stored PHC hash string
///
/// Returns `Ok(false)` for a wrong password and an error for a stored hash
/// that cannot be parsed at all. Callers treat both as a failed match.
pub fn verify_password(password: &str, stored_hash: &str) -> MoneyMateResult<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| MoneyMateError::Hash(format!("Invalid stored hash: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
