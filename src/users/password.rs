use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use rand::Rng;
use tracing::error;

/// How passwords are turned into their stored form. Injected into the
/// store so the insecure legacy behavior stays available but is no longer
/// baked in.
pub trait PasswordScheme: Send + Sync {
    /// Stored representation of a plain password.
    fn protect(&self, plain: &str) -> anyhow::Result<String>;
    /// Check a plain password against a stored value.
    fn verify(&self, plain: &str, stored: &str) -> anyhow::Result<bool>;
}

/// Stores passwords exactly as received. This is what the legacy system
/// did on every admin path; it is the default scheme.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextScheme;

impl PasswordScheme for PlainTextScheme {
    fn protect(&self, plain: &str) -> anyhow::Result<String> {
        Ok(plain.to_owned())
    }

    fn verify(&self, plain: &str, stored: &str) -> anyhow::Result<bool> {
        Ok(plain == stored)
    }
}

/// Argon2id hashing with a per-password random salt.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Scheme;

impl PasswordScheme for Argon2Scheme {
    fn protect(&self, plain: &str) -> anyhow::Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plain.as_bytes(), &salt)
            .map_err(|e| {
                error!(error = %e, "argon2 hash_password error");
                anyhow::anyhow!(e.to_string())
            })?
            .to_string();
        Ok(hash)
    }

    fn verify(&self, plain: &str, stored: &str) -> anyhow::Result<bool> {
        let parsed = PasswordHash::new(stored).map_err(|e| {
            error!(error = %e, "argon2 parse hash error");
            anyhow::anyhow!(e.to_string())
        })?;
        Ok(Argon2::default()
            .verify_password(plain.as_bytes(), &parsed)
            .is_ok())
    }
}

/// Password handed out by `reset_password`: `Pass` plus a random integer
/// below one million. Low entropy, kept bit-for-bit compatible with the
/// legacy generator so reset flows and their messaging stay unchanged.
pub fn generate_reset_password() -> String {
    format!("Pass{}", rand::thread_rng().gen_range(0..1_000_000))
}
