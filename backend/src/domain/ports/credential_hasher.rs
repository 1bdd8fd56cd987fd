//! Driven port for salted one-way password hashing.
//!
//! Hashing is CPU-bound and synchronous; the session gate moves calls onto
//! the blocking pool.

use super::define_port_error;

define_port_error! {
    /// Errors raised by password hashing adapters.
    pub enum HashError {
        /// Producing a new hash failed.
        Hash { message: String } => "password hashing failed: {message}",
        /// A stored hash could not be parsed.
        MalformedHash { message: String } => "stored password hash is malformed: {message}",
    }
}

/// Port for hashing and verifying passwords.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialHasher: Send + Sync {
    /// Hash `password` with a fresh random salt, returning a PHC string.
    fn hash(&self, password: &str) -> Result<String, HashError>;

    /// Check `password` against a PHC string. A mismatch is `Ok(false)`.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
