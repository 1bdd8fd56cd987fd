//! Driving port for signup and login.
//!
//! Inbound adapters call this port to turn validated form input into an
//! authenticated [`AuthSession`]. Cookie handling (persisting the session,
//! logout, authorization checks) stays in the HTTP adapter.

use async_trait::async_trait;

use crate::domain::{AuthSession, LoginCredentials, LoginValidationError, NewAccount, SignupValidationError};

use super::{HashError, StoreError};

/// Why a signup attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
    /// The form input was incomplete or inconsistent.
    #[error(transparent)]
    Validation(#[from] SignupValidationError),
    /// The email is already registered.
    #[error("An account with this email already exists")]
    DuplicateAccount,
    /// The new account could not be written.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The password could not be hashed.
    #[error(transparent)]
    Hashing(#[from] HashError),
}

/// Why a login attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// Email or password was missing.
    #[error("Please fill in all fields")]
    MissingFields,
    /// Unknown email or wrong password; the two are indistinguishable.
    #[error("Invalid email or password")]
    InvalidCredentials,
    /// The verification step itself failed.
    #[error(transparent)]
    Hashing(#[from] HashError),
}

impl From<LoginValidationError> for LoginError {
    fn from(_: LoginValidationError) -> Self {
        Self::MissingFields
    }
}

/// Use-case port for establishing authenticated sessions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionGate: Send + Sync {
    /// Register a new account and return its session.
    async fn signup(&self, account: NewAccount) -> Result<AuthSession, SignupError>;

    /// Check credentials and return the matching account's session.
    async fn login(&self, credentials: LoginCredentials) -> Result<AuthSession, LoginError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(SignupError::DuplicateAccount, "An account with this email already exists")]
    #[case(
        SignupError::from(SignupValidationError::PasswordMismatch),
        "Passwords do not match"
    )]
    #[case(
        SignupError::from(StoreError::io("disk full")),
        "credential store I/O failed: disk full"
    )]
    fn signup_error_messages(#[case] error: SignupError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case(LoginValidationError::EmptyEmail)]
    #[case(LoginValidationError::EmptyPassword)]
    fn login_validation_collapses_to_missing_fields(#[case] error: LoginValidationError) {
        assert_eq!(LoginError::from(error), LoginError::MissingFields);
    }
}
