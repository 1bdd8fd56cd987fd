//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Provides a thin wrapper around Actix sessions so handlers only deal with
//! domain-friendly operations: persisting an [`AuthSession`], checking
//! authorization, logging out, and queueing one-shot notices.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{AuthSession, Authorization, DenialReason, Error, Notice};

pub(crate) const USER_ID_KEY: &str = "user_id";
pub(crate) const USER_EMAIL_KEY: &str = "user_email";
pub(crate) const USER_NAME_KEY: &str = "user_name";
pub(crate) const NOTICES_KEY: &str = "notices";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Store the authenticated identity in the session cookie.
    ///
    /// The session is renewed first so a pre-login cookie is never promoted.
    ///
    /// # Errors
    /// Returns an internal [`Error`] when the identity cannot be encoded.
    pub fn persist(&self, auth: &AuthSession) -> Result<(), Error> {
        self.0.renew();
        for (key, value) in [
            (USER_ID_KEY, auth.user_id()),
            (USER_EMAIL_KEY, auth.user_email()),
            (USER_NAME_KEY, auth.user_name()),
        ] {
            self.0
                .insert(key, value)
                .map_err(|error| Error::internal(format!("failed to persist session: {error}")))?;
        }
        Ok(())
    }

    /// Decide whether the request carries a complete session identity.
    ///
    /// Partial or unreadable identity data is removed from the session and
    /// reported as [`DenialReason::Invalid`].
    pub fn authorize(&self) -> Authorization {
        match self.stored_identity() {
            Ok(Some(auth)) => Authorization::Authorized(auth),
            Ok(None) => Authorization::Denied(DenialReason::Anonymous),
            Err(reason) => {
                warn!(%reason, "discarding invalid session identity");
                self.0.clear();
                Authorization::Denied(DenialReason::Invalid)
            }
        }
    }

    /// Drop all session state and return the name of the user who was
    /// signed in, if any. Safe to call on an anonymous session.
    pub fn logout(&self) -> Option<String> {
        let name = self
            .authorize()
            .session()
            .map(|auth| auth.user_name().to_owned());
        self.0.clear();
        name
    }

    /// Queue a notice for the next rendered page.
    pub fn push_notice(&self, notice: Notice) {
        let mut notices = self.read_notices();
        notices.push(notice);
        if let Err(error) = self.0.insert(NOTICES_KEY, notices) {
            warn!(%error, "failed to queue notice");
        }
    }

    /// Remove and return every queued notice, oldest first.
    pub fn take_notices(&self) -> Vec<Notice> {
        let notices = self.read_notices();
        self.0.remove(NOTICES_KEY);
        notices
    }

    fn read_notices(&self) -> Vec<Notice> {
        match self.0.get::<Vec<Notice>>(NOTICES_KEY) {
            Ok(notices) => notices.unwrap_or_default(),
            Err(error) => {
                warn!(%error, "discarding unreadable notices");
                Vec::new()
            }
        }
    }

    fn stored_identity(&self) -> Result<Option<AuthSession>, String> {
        let id = self.read_field(USER_ID_KEY)?;
        let email = self.read_field(USER_EMAIL_KEY)?;
        let name = self.read_field(USER_NAME_KEY)?;
        match (id, email, name) {
            (None, None, None) => Ok(None),
            (Some(id), Some(email), Some(name))
                if !id.is_empty() && !email.is_empty() && !name.is_empty() =>
            {
                Ok(Some(AuthSession::from_parts(id, email, name)))
            }
            _ => Err("partial session identity".to_owned()),
        }
    }

    fn read_field(&self, key: &str) -> Result<Option<String>, String> {
        self.0
            .get::<String>(key)
            .map_err(|error| format!("unreadable {key}: {error}"))
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
