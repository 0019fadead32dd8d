//! Staff account credentials.
//!
//! A password only exists in this crate as an Argon2 PHC string; the plain
//! text is never kept past hashing or verification.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::config::MIN_PASSWORD_LENGTH;
use crate::errors::{AppError, AppResult};

/// Argon2 hash of a staff password, as stored in `users.password_hash`.
#[derive(Clone)]
pub struct Password {
    phc: String,
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}

impl Password {
    /// Hash `plain_text` with a fresh salt.
    ///
    /// # Errors
    /// Returns a validation error below `MIN_PASSWORD_LENGTH`; this also
    /// applies to the configured seed passwords.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        if plain_text.len() < MIN_PASSWORD_LENGTH as usize {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(plain_text.as_bytes(), &salt)
            .map(|phc| Self {
                phc: phc.to_string(),
            })
            .map_err(|e| AppError::internal(format!("hashing password: {}", e)))
    }

    /// Wrap a hash loaded from the `users` table.
    pub fn from_hash(phc: String) -> Self {
        Self { phc }
    }

    pub fn as_str(&self) -> &str {
        &self.phc
    }

    pub fn into_string(self) -> String {
        self.phc
    }

    /// Whether `plain_text` matches. A stored value that is not a PHC
    /// string, such as a legacy plain-text row, never matches.
    pub fn verify(&self, plain_text: &str) -> bool {
        PasswordHash::new(&self.phc).is_ok_and(|parsed| {
            Argon2::default()
                .verify_password(plain_text.as_bytes(), &parsed)
                .is_ok()
        })
    }
}
