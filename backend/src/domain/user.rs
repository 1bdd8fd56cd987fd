//! Registered accounts and the directory that holds them.
//!
//! Serialisation mirrors the credential file: one JSON object keyed by
//! email, where each record stores the PHC hash string under `password`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One registered account.
///
/// ## Invariants
/// - `password_hash` is a salted one-way hash, never a plain password.
/// - Records are created on signup and never updated.
///
/// # Examples
/// ```
/// use backend::domain::UserRecord;
///
/// let record = UserRecord::new("Ann", "ann@x.com", "$argon2id$v=19$m=8,t=1,p=1$c2FsdA$aGFzaA");
/// let json = serde_json::to_value(&record).expect("serialise");
/// assert_eq!(json["password"], "$argon2id$v=19$m=8,t=1,p=1$c2FsdA$aGFzaA");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    name: String,
    email: String,
    #[serde(rename = "password")]
    password_hash: String,
}

impl UserRecord {
    /// Build a record from an already hashed password.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Display name chosen at signup.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Account email.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// PHC-formatted password hash.
    pub fn password_hash(&self) -> &str {
        self.password_hash.as_str()
    }
}

/// All registered accounts keyed by email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserDirectory(BTreeMap<String, UserRecord>);

impl UserDirectory {
    /// Look up an account by exact email.
    pub fn get(&self, email: &str) -> Option<&UserRecord> {
        self.0.get(email)
    }

    /// Whether an account with `email` exists.
    pub fn contains(&self, email: &str) -> bool {
        self.0.contains_key(email)
    }

    /// Add `record` keyed by its email, returning `false` if the email is
    /// already taken. Existing records are never replaced.
    pub fn insert(&mut self, record: UserRecord) -> bool {
        if self.contains(record.email()) {
            return false;
        }
        self.0.insert(record.email().to_owned(), record);
        true
    }

    /// Number of accounts.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the directory has no accounts.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn insert_refuses_duplicate_email() {
        let mut users = UserDirectory::default();
        assert!(users.insert(UserRecord::new("Ann", "ann@x.com", "h1")));
        assert!(!users.insert(UserRecord::new("Impostor", "ann@x.com", "h2")));
        assert_eq!(users.len(), 1);
        assert_eq!(users.get("ann@x.com").map(UserRecord::name), Some("Ann"));
    }

    #[rstest]
    fn serialises_as_object_keyed_by_email() {
        let mut users = UserDirectory::default();
        users.insert(UserRecord::new("Ann", "ann@x.com", "hash"));
        let value = serde_json::to_value(&users).expect("serialise directory");
        assert_eq!(
            value,
            json!({ "ann@x.com": { "name": "Ann", "email": "ann@x.com", "password": "hash" } })
        );
    }

    #[rstest]
    fn decodes_existing_file_shape() {
        let users: UserDirectory = serde_json::from_value(json!({
            "bob@x.com": { "name": "Bob", "email": "bob@x.com", "password": "hash" }
        }))
        .expect("decode directory");
        assert!(users.contains("bob@x.com"));
        assert!(!users.contains("Bob@x.com"));
    }
}
