//! Authenticated session identity and the outcome of an authorization check.

use super::UserRecord;

/// Identity carried by an authenticated session.
///
/// `user_id` is the account email; the session stores it separately from
/// `user_email` so the identifier can change shape without touching views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    user_id: String,
    user_email: String,
    user_name: String,
}

impl AuthSession {
    /// Rebuild a session from its stored parts.
    pub fn from_parts(
        user_id: impl Into<String>,
        user_email: impl Into<String>,
        user_name: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            user_email: user_email.into(),
            user_name: user_name.into(),
        }
    }

    /// Stable identifier of the signed-in account.
    pub fn user_id(&self) -> &str {
        self.user_id.as_str()
    }

    /// Email of the signed-in account.
    pub fn user_email(&self) -> &str {
        self.user_email.as_str()
    }

    /// Display name of the signed-in account.
    pub fn user_name(&self) -> &str {
        self.user_name.as_str()
    }
}

impl From<&UserRecord> for AuthSession {
    fn from(record: &UserRecord) -> Self {
        Self::from_parts(record.email(), record.email(), record.name())
    }
}

/// Why a request was not authorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    /// No session identity is present.
    Anonymous,
    /// Session data was partial or unreadable and has been purged.
    Invalid,
}

/// Result of checking a request's session before a protected handler runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authorization {
    /// The request carries a complete session identity.
    Authorized(AuthSession),
    /// The request must be redirected to the login page.
    Denied(DenialReason),
}

impl Authorization {
    /// The session identity when authorized.
    pub fn session(&self) -> Option<&AuthSession> {
        match self {
            Self::Authorized(session) => Some(session),
            Self::Denied(_) => None,
        }
    }

    /// Whether the request is authenticated.
    pub fn is_authorized(&self) -> bool {
        matches!(self, Self::Authorized(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_from_record_uses_email_as_identifier() {
        let record = UserRecord::new("Ann", "ann@x.com", "hash");
        let session = AuthSession::from(&record);
        assert_eq!(session.user_id(), "ann@x.com");
        assert_eq!(session.user_email(), "ann@x.com");
        assert_eq!(session.user_name(), "Ann");
    }

    #[test]
    fn denied_has_no_session() {
        let denied = Authorization::Denied(DenialReason::Anonymous);
        assert!(!denied.is_authorized());
        assert!(denied.session().is_none());
    }
}
