//! Credential hashing
//!
//! One-way Argon2 hashing with a fresh salt per call. Verification
//! delegates the constant-time comparison to the algorithm; plaintext
//! is never logged or returned.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Hash a plaintext password. Non-deterministic: each call salts
/// freshly, so two hashes of the same input differ.
pub fn hash(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(password_hash.to_string())
}

/// Verify a plaintext password against a stored hash
pub fn verify(password: &str, stored_hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(stored_hash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_correct_password() {
        let hashed = hash("hunter2hunter2").unwrap();
        assert!(verify("hunter2hunter2", &hashed).unwrap());
        assert!(!verify("wrong-password", &hashed).unwrap());
    }

    #[test]
    fn salting_makes_hashes_differ() {
        let a = hash("same-password").unwrap();
        let b = hash("same-password").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_stored_hash_is_an_error() {
        assert!(verify("anything", "not-a-phc-string").is_err());
    }
}
