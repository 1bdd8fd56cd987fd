//! Server-rendered HTML pages.
//!
//! Markup lives in `backend/templates/`; askama escapes every interpolated
//! value.

use askama::Template;

use crate::domain::{AuthSession, Notice};

/// Login and signup forms.
#[derive(Template)]
#[template(path = "auth.html")]
pub struct AuthPage<'a> {
    notices: &'a [Notice],
}

/// Dashboard shown to signed-in users.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage<'a> {
    notices: &'a [Notice],
    user_name: &'a str,
    user_email: &'a str,
}

/// Render the login and signup forms.
///
/// # Errors
/// Returns the template engine's error if rendering fails.
pub fn auth_page(notices: &[Notice]) -> askama::Result<String> {
    AuthPage { notices }.render()
}

/// Render the dashboard for `auth`.
///
/// # Errors
/// Returns the template engine's error if rendering fails.
pub fn dashboard(auth: &AuthSession, notices: &[Notice]) -> askama::Result<String> {
    DashboardPage {
        notices,
        user_name: auth.user_name(),
        user_email: auth.user_email(),
    }
    .render()
}
