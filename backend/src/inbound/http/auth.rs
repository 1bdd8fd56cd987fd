//! Form handlers for signup, login, and logout.
//!
//! ```text
//! POST /login   email=ann@x.com&password=...
//! POST /signup  name=Ann&email=ann@x.com&password=...&confirm_password=...
//! GET  /logout
//! ```
//!
//! Every outcome is a `303 See Other` redirect with a queued notice; these
//! routes never answer with an error page.

use actix_web::http::header;
use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::domain::ports::{LoginError, SignupError};
use crate::domain::{LoginCredentials, NewAccount, Notice};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Path of the login and signup page.
pub const AUTH_PAGE: &str = "/auth";
/// Path of the protected dashboard.
pub const HOME_PAGE: &str = "/";

/// Form body for `POST /login`. Absent fields count as empty.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct LoginForm {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Form body for `POST /signup`. Absent fields count as empty.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SignupForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

/// `303 See Other` to `location`.
pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn field(value: Option<&String>) -> &str {
    value.map_or("", String::as_str)
}

/// Check credentials and start a session.
#[utoipa::path(
    post,
    path = "/login",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to `/` on success or `/auth` with a notice",
            headers(("Location" = String, description = "Redirect target")))
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: Result<web::Form<LoginForm>, actix_web::Error>,
) -> HttpResponse {
    let Ok(form) = form.map_err(|err| log_unreadable_form("login", &err)) else {
        session.push_notice(Notice::missing_fields());
        return redirect(AUTH_PAGE);
    };
    let outcome = match LoginCredentials::try_from_parts(
        field(form.email.as_ref()),
        field(form.password.as_ref()),
    ) {
        Ok(credentials) => state.gate.login(credentials).await,
        Err(err) => Err(LoginError::from(err)),
    };

    match outcome {
        Ok(auth) => match session.persist(&auth) {
            Ok(()) => {
                info!(email = %auth.user_email(), "user logged in");
                session.push_notice(Notice::welcome_back(auth.user_name()));
                redirect(HOME_PAGE)
            }
            Err(err) => {
                error!(error = %err, "failed to persist login session");
                session.push_notice(Notice::try_again());
                redirect(AUTH_PAGE)
            }
        },
        Err(err) => {
            session.push_notice(login_failure_notice(&err));
            redirect(AUTH_PAGE)
        }
    }
}

/// Wrong content type, oversized or undecodable bodies.
fn log_unreadable_form(route: &'static str, err: &actix_web::Error) {
    warn!(route, error = %err, "unreadable form submission");
}

fn login_failure_notice(err: &LoginError) -> Notice {
    match err {
        LoginError::MissingFields | LoginError::InvalidCredentials => {
            Notice::error(err.to_string())
        }
        LoginError::Hashing(cause) => {
            error!(error = %cause, "password verification failed");
            Notice::try_again()
        }
    }
}

/// Register an account and start a session.
#[utoipa::path(
    post,
    path = "/signup",
    request_body(content = SignupForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to `/` on success or `/auth` with a notice",
            headers(("Location" = String, description = "Redirect target")))
    ),
    tags = ["auth"],
    operation_id = "signup",
    security([])
)]
#[post("/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: Result<web::Form<SignupForm>, actix_web::Error>,
) -> HttpResponse {
    let Ok(form) = form.map_err(|err| log_unreadable_form("signup", &err)) else {
        session.push_notice(Notice::missing_fields());
        return redirect(AUTH_PAGE);
    };
    let outcome = match NewAccount::try_from_parts(
        field(form.name.as_ref()),
        field(form.email.as_ref()),
        field(form.password.as_ref()),
        field(form.confirm_password.as_ref()),
    ) {
        Ok(account) => state.gate.signup(account).await,
        Err(err) => Err(SignupError::from(err)),
    };

    match outcome {
        Ok(auth) => match session.persist(&auth) {
            Ok(()) => {
                session.push_notice(Notice::account_created(auth.user_name()));
                redirect(HOME_PAGE)
            }
            Err(err) => {
                error!(error = %err, "failed to persist signup session");
                session.push_notice(Notice::try_again());
                redirect(AUTH_PAGE)
            }
        },
        Err(err) => {
            session.push_notice(signup_failure_notice(&err));
            redirect(AUTH_PAGE)
        }
    }
}

fn signup_failure_notice(err: &SignupError) -> Notice {
    match err {
        SignupError::Validation(_) | SignupError::DuplicateAccount => Notice::error(err.to_string()),
        SignupError::Store(cause) => {
            error!(error = %cause, "failed to save new account");
            Notice::try_again()
        }
        SignupError::Hashing(cause) => {
            error!(error = %cause, "failed to hash new password");
            Notice::try_again()
        }
    }
}

/// End the session.
#[utoipa::path(
    get,
    path = "/logout",
    responses(
        (status = 303, description = "Redirect to `/auth`",
            headers(("Location" = String, description = "Redirect target")))
    ),
    tags = ["auth"],
    operation_id = "logout",
    security([])
)]
#[get("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    if let Some(name) = session.logout() {
        info!("user logged out");
        session.push_notice(Notice::logged_out(&name));
    }
    redirect(AUTH_PAGE)
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
