//! Authentication inputs: login credentials and new account requests.
//!
//! Keep form parsing outside the domain by exposing constructors that
//! validate raw string inputs before a handler talks to the session gate.
//! Display strings double as the notices shown to users.

use zeroize::Zeroizing;

/// Minimum password length, counted in Unicode scalar values.
pub const PASSWORD_MIN_LEN: usize = 8;

/// Reasons a login form is rejected before any lookup happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// Email was missing or blank once trimmed.
    #[error("Please fill in all fields")]
    EmptyEmail,
    /// Password was missing or empty.
    #[error("Please fill in all fields")]
    EmptyPassword,
}

/// Reasons a signup form is rejected before the store is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SignupValidationError {
    /// One of the four fields was missing or blank.
    #[error("Please fill in all fields")]
    MissingFields,
    /// `password` and `confirm_password` differ.
    #[error("Passwords do not match")]
    PasswordMismatch,
    /// The password is shorter than [`PASSWORD_MIN_LEN`].
    #[error("Password must be at least {min} characters")]
    PasswordTooShort {
        /// Required minimum length.
        min: usize,
    },
}

/// Validated login credentials.
///
/// ## Invariants
/// - `email` is trimmed and non-empty.
/// - `password` is non-empty and keeps caller-provided whitespace.
///
/// # Examples
/// ```
/// use backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" ann@x.com ", "hunter22").expect("valid");
/// assert_eq!(creds.email(), "ann@x.com");
/// assert_eq!(creds.password(), "hunter22");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(LoginValidationError::EmptyEmail);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            email: email.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email used as the account key.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    pub(crate) fn into_password(self) -> Zeroizing<String> {
        self.password
    }
}

/// A validated signup request.
///
/// ## Invariants
/// - `name` and `email` are trimmed and non-empty.
/// - `password` matched its confirmation and has at least
///   [`PASSWORD_MIN_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    name: String,
    email: String,
    password: Zeroizing<String>,
}

impl NewAccount {
    /// Validate the four signup fields in the order users see the notices:
    /// completeness, confirmation, then length.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{NewAccount, SignupValidationError};
    ///
    /// let err = NewAccount::try_from_parts("Ann", "ann@x.com", "short", "short")
    ///     .expect_err("too short");
    /// assert_eq!(err, SignupValidationError::PasswordTooShort { min: 8 });
    /// ```
    pub fn try_from_parts(
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Self, SignupValidationError> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() || email.is_empty() || password.is_empty() || confirm_password.is_empty()
        {
            return Err(SignupValidationError::MissingFields);
        }
        if password != confirm_password {
            return Err(SignupValidationError::PasswordMismatch);
        }
        if password.chars().count() < PASSWORD_MIN_LEN {
            return Err(SignupValidationError::PasswordTooShort {
                min: PASSWORD_MIN_LEN,
            });
        }

        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Display name for the new account.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Email used as the account key.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Plain password awaiting hashing.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
