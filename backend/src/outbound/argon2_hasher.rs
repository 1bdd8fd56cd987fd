//! Argon2id password hashing adapter.
//!
//! Hashes are stored as PHC strings, so each carries its own salt and cost
//! parameters. Verification reads the parameters back from the stored hash,
//! which keeps old hashes valid if the configured cost changes.

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::password_hash::rand_core::OsRng;
use argon2::{Algorithm, Argon2, Params, Version};

use crate::domain::ports::{CredentialHasher, HashError};

/// Argon2id hasher with configurable cost.
#[derive(Debug, Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self {
            params: Params::default(),
        }
    }
}

impl Argon2Hasher {
    /// Hasher using the recommended default cost parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hasher using explicit cost parameters.
    ///
    /// # Examples
    /// ```
    /// use argon2::Params;
    /// use backend::domain::ports::CredentialHasher;
    /// use backend::outbound::argon2_hasher::Argon2Hasher;
    ///
    /// let params = Params::new(Params::MIN_M_COST, Params::MIN_T_COST, Params::MIN_P_COST, None)
    ///     .expect("valid params");
    /// let hasher = Argon2Hasher::with_params(params);
    /// let hash = hasher.hash("password1").expect("hash");
    /// assert!(hash.starts_with("$argon2id$"));
    /// assert!(hasher.verify("password1", &hash).expect("verify"));
    /// ```
    pub fn with_params(params: Params) -> Self {
        Self { params }
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, HashError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|err| HashError::hash(err.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let parsed =
            PasswordHash::new(hash).map_err(|err| HashError::malformed_hash(err.to_string()))?;
        match self.argon2().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(err) => Err(HashError::hash(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn hasher() -> Argon2Hasher {
        let params = Params::new(Params::MIN_M_COST, Params::MIN_T_COST, Params::MIN_P_COST, None)
            .expect("minimum params are valid");
        Argon2Hasher::with_params(params)
    }

    #[rstest]
    fn hashes_are_salted(hasher: Argon2Hasher) {
        let first = hasher.hash("password1").expect("hash");
        let second = hasher.hash("password1").expect("hash");
        assert_ne!(first, second);
        assert!(first.starts_with("$argon2id$v=19$"));
    }

    #[rstest]
    #[case("password1", true)]
    #[case("password2", false)]
    #[case("", false)]
    fn verifies_only_the_original_password(
        hasher: Argon2Hasher,
        #[case] attempt: &str,
        #[case] expected: bool,
    ) {
        let hash = hasher.hash("password1").expect("hash");
        assert_eq!(hasher.verify(attempt, &hash).expect("verify"), expected);
    }

    #[rstest]
    fn malformed_hash_is_reported(hasher: Argon2Hasher) {
        let err = hasher.verify("password1", "password1").expect_err("not a PHC string");
        assert!(matches!(err, HashError::MalformedHash { .. }));
    }

    #[rstest]
    fn hashes_from_other_costs_still_verify(hasher: Argon2Hasher) {
        let params = Params::new(16, 2, 1, None).expect("valid params");
        let stronger = Argon2Hasher::with_params(params);
        let hash = stronger.hash("password1").expect("hash");
        assert!(hasher.verify("password1", &hash).expect("verify"));
    }
}
