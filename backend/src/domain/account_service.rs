//! Session gate service: signup and login over the credential store.
//!
//! Signups are serialised through an in-process mutex so two concurrent
//! requests for the same email cannot both pass the duplicate check. Separate
//! processes sharing one credential file are not coordinated; the last writer
//! wins.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, OnceCell};
use tracing::{info, warn};
use zeroize::Zeroizing;

use crate::domain::ports::{
    CredentialHasher, CredentialStore, HashError, LoginError, SessionGate, SignupError,
};
use crate::domain::trace_id::spawn_blocking_in_scope;
use crate::domain::{AuthSession, LoginCredentials, NewAccount, UserRecord};

/// Password hashed once to give unknown-email logins the same verification
/// cost as real ones.
const DECOY_PASSWORD: &str = "decoy-password-for-unknown-accounts";

/// Session gate backed by a credential store and a password hasher.
pub struct AccountService<S, H> {
    store: Arc<S>,
    hasher: Arc<H>,
    signup_lock: Mutex<()>,
    decoy_hash: OnceCell<String>,
}

impl<S, H> AccountService<S, H> {
    /// Create a new service over the given adapters.
    pub fn new(store: Arc<S>, hasher: Arc<H>) -> Self {
        Self {
            store,
            hasher,
            signup_lock: Mutex::new(()),
            decoy_hash: OnceCell::new(),
        }
    }
}

impl<S, H> AccountService<S, H>
where
    S: CredentialStore,
    H: CredentialHasher + 'static,
{
    async fn hash(&self, password: Zeroizing<String>) -> Result<String, HashError> {
        let hasher = Arc::clone(&self.hasher);
        spawn_blocking_in_scope(move || hasher.hash(password.as_str()))
            .await
            .map_err(|err| HashError::hash(format!("hashing task failed: {err}")))?
    }

    async fn verify(&self, password: Zeroizing<String>, hash: String) -> Result<bool, HashError> {
        let hasher = Arc::clone(&self.hasher);
        spawn_blocking_in_scope(move || hasher.verify(password.as_str(), &hash))
            .await
            .map_err(|err| HashError::hash(format!("verification task failed: {err}")))?
    }

    async fn decoy_hash(&self) -> Result<String, HashError> {
        self.decoy_hash
            .get_or_try_init(|| self.hash(Zeroizing::new(DECOY_PASSWORD.to_owned())))
            .await
            .cloned()
    }
}

#[async_trait]
impl<S, H> SessionGate for AccountService<S, H>
where
    S: CredentialStore,
    H: CredentialHasher + 'static,
{
    async fn signup(&self, account: NewAccount) -> Result<AuthSession, SignupError> {
        let _guard = self.signup_lock.lock().await;

        let mut users = self.store.load_or_empty().await;
        if users.contains(account.email()) {
            info!(email = %account.email(), "signup rejected: email already registered");
            return Err(SignupError::DuplicateAccount);
        }

        let password_hash = self
            .hash(Zeroizing::new(account.password().to_owned()))
            .await?;
        let record = UserRecord::new(account.name(), account.email(), password_hash);
        let session = AuthSession::from(&record);
        users.insert(record);
        self.store.save(&users).await?;

        info!(email = %session.user_email(), accounts = users.len(), "account created");
        Ok(session)
    }

    async fn login(&self, credentials: LoginCredentials) -> Result<AuthSession, LoginError> {
        let users = self.store.load_or_empty().await;
        let email = credentials.email().to_owned();
        let password = credentials.into_password();

        let Some(record) = users.get(&email) else {
            let decoy = self.decoy_hash().await?;
            let _matched = self.verify(password, decoy).await?;
            info!(%email, "login rejected: unknown email");
            return Err(LoginError::InvalidCredentials);
        };

        match self.verify(password, record.password_hash().to_owned()).await {
            Ok(true) => {
                info!(%email, "login succeeded");
                Ok(AuthSession::from(record))
            }
            Ok(false) => {
                info!(%email, "login rejected: wrong password");
                Err(LoginError::InvalidCredentials)
            }
            Err(HashError::MalformedHash { message }) => {
                warn!(%email, %message, "stored password hash unreadable; rejecting login");
                Err(LoginError::InvalidCredentials)
            }
            Err(error) => Err(error.into()),
        }
    }
}

#[cfg(test)]
#[path = "account_service_tests.rs"]
mod tests;
