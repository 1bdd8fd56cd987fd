//! Driven port for the credential store and its in-memory implementation.
//!
//! The store is loaded and saved wholesale: every operation works on a full
//! [`UserDirectory`] snapshot. Adapters must make `save` atomic so readers
//! never observe a half-written store.

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::warn;

use crate::domain::UserDirectory;

use super::define_port_error;

define_port_error! {
    /// Errors raised by credential store adapters.
    pub enum StoreError {
        /// The backing medium could not be read or written.
        Io { message: String } => "credential store I/O failed: {message}",
        /// The stored data exists but cannot be decoded.
        Corrupt { message: String } => "credential store is corrupt: {message}",
    }
}

/// Persistence port for registered accounts.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Load every account. A store that does not exist yet is empty.
    async fn load(&self) -> Result<UserDirectory, StoreError>;

    /// Replace the stored accounts with `users`.
    async fn save(&self, users: &UserDirectory) -> Result<(), StoreError>;

    /// Whether an account with `email` is registered.
    async fn exists(&self, email: &str) -> Result<bool, StoreError> {
        Ok(self.load().await?.contains(email))
    }

    /// Load every account, treating an unreadable store as empty.
    ///
    /// The failure is logged at `warn`; callers continue with no accounts.
    async fn load_or_empty(&self) -> UserDirectory {
        match self.load().await {
            Ok(users) => users,
            Err(error) => {
                warn!(%error, "credential store unreadable; continuing with no accounts");
                UserDirectory::default()
            }
        }
    }
}

/// Credential store held in memory, used by tests and local demos.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    users: Mutex<UserDirectory>,
}

impl InMemoryCredentialStore {
    /// Start with the supplied accounts.
    pub fn with_users(users: UserDirectory) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    /// Copy of the current accounts.
    pub async fn snapshot(&self) -> UserDirectory {
        self.users.lock().await.clone()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn load(&self) -> Result<UserDirectory, StoreError> {
        Ok(self.snapshot().await)
    }

    async fn save(&self, users: &UserDirectory) -> Result<(), StoreError> {
        *self.users.lock().await = users.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserRecord;
    use rstest::rstest;

    struct UnreadableStore;

    #[async_trait]
    impl CredentialStore for UnreadableStore {
        async fn load(&self) -> Result<UserDirectory, StoreError> {
            Err(StoreError::corrupt("expected value at line 1 column 1"))
        }

        async fn save(&self, _users: &UserDirectory) -> Result<(), StoreError> {
            Err(StoreError::io("read-only"))
        }
    }

    #[rstest]
    #[tokio::test]
    async fn in_memory_store_round_trips() {
        let store = InMemoryCredentialStore::default();
        assert!(store.load().await.expect("load").is_empty());

        let mut users = UserDirectory::default();
        users.insert(UserRecord::new("Ann", "ann@x.com", "hash"));
        store.save(&users).await.expect("save");

        assert!(store.exists("ann@x.com").await.expect("exists"));
        assert!(!store.exists("bob@x.com").await.expect("exists"));
        assert_eq!(store.snapshot().await, users);
    }

    #[rstest]
    #[tokio::test]
    async fn load_or_empty_swallows_corruption() {
        let store = UnreadableStore;
        assert!(matches!(store.load().await, Err(StoreError::Corrupt { .. })));
        assert!(store.load_or_empty().await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn exists_propagates_load_errors() {
        let err = UnreadableStore.exists("ann@x.com").await.expect_err("corrupt");
        assert_eq!(
            err.to_string(),
            "credential store is corrupt: expected value at line 1 column 1"
        );
    }
}
