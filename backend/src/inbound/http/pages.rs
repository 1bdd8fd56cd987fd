//! HTML pages: the protected dashboard and the login/signup form.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get};
use tracing::error;

use crate::domain::{Authorization, Error, Notice};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::{AUTH_PAGE, HOME_PAGE, redirect};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::views;

fn html(rendered: askama::Result<String>) -> ApiResult<HttpResponse> {
    let body = rendered.map_err(|err| {
        error!(error = %err, "failed to render page");
        Error::internal("Internal server error")
    })?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}

/// Dashboard for signed-in users.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Dashboard", content_type = "text/html", body = String),
        (status = 303, description = "Not signed in; redirect to `/auth`")
    ),
    tags = ["pages"],
    operation_id = "home"
)]
#[get("/")]
pub async fn home(session: SessionContext) -> ApiResult<HttpResponse> {
    match session.authorize() {
        Authorization::Authorized(auth) => html(views::dashboard(&auth, &session.take_notices())),
        Authorization::Denied(_) => {
            session.push_notice(Notice::login_required());
            Ok(redirect(AUTH_PAGE))
        }
    }
}

fn auth_form(session: &SessionContext) -> ApiResult<HttpResponse> {
    if session.authorize().is_authorized() {
        return Ok(redirect(HOME_PAGE));
    }
    html(views::auth_page(&session.take_notices()))
}

/// Login and signup form.
#[utoipa::path(
    get,
    path = "/auth",
    responses(
        (status = 200, description = "Login and signup form", content_type = "text/html", body = String),
        (status = 303, description = "Already signed in; redirect to `/`")
    ),
    tags = ["pages"],
    operation_id = "authPage",
    security([])
)]
#[get("/auth")]
pub async fn auth_page(session: SessionContext) -> ApiResult<HttpResponse> {
    auth_form(&session)
}

/// Alias of `/auth` kept for bookmarked links.
#[utoipa::path(
    get,
    path = "/login",
    responses(
        (status = 200, description = "Login and signup form", content_type = "text/html", body = String),
        (status = 303, description = "Already signed in; redirect to `/`")
    ),
    tags = ["pages"],
    operation_id = "loginPage",
    security([])
)]
#[get("/login")]
pub async fn login_page(session: SessionContext) -> ApiResult<HttpResponse> {
    auth_form(&session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AuthSession;
    use crate::inbound::http::test_utils::{session_cookie, test_session_middleware};
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test, web};

    async fn sign_in(session: SessionContext) -> HttpResponse {
        match session.persist(&AuthSession::from_parts("ann@x.com", "ann@x.com", "Ann")) {
            Ok(()) => HttpResponse::Ok().finish(),
            Err(_) => HttpResponse::InternalServerError().finish(),
        }
    }

    macro_rules! pages_app {
        () => {
            test::init_service(
                App::new()
                    .wrap(test_session_middleware())
                    .service(home)
                    .service(auth_page)
                    .service(login_page)
                    .route("/test/sign-in", web::get().to(sign_in)),
            )
            .await
        };
    }

    fn location<B>(res: &actix_web::dev::ServiceResponse<B>) -> Option<&str> {
        res.headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
    }

    #[actix_web::test]
    async fn anonymous_home_redirects_with_notice_shown_once() {
        let app = pages_app!();

        let home_res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(home_res.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&home_res), Some(AUTH_PAGE));
        let cookie = session_cookie(&home_res).expect("notice stored");

        let first = test::call_service(
            &app,
            test::TestRequest::get().uri("/auth").cookie(cookie).to_request(),
        )
        .await;
        assert_eq!(first.status(), StatusCode::OK);
        let drained = session_cookie(&first).expect("notices drained");
        let body = test::read_body(first).await;
        let body = std::str::from_utf8(&body).expect("utf8");
        assert!(body.contains("Please log in to access this page"));

        let second = test::call_service(
            &app,
            test::TestRequest::get().uri("/auth").cookie(drained).to_request(),
        )
        .await;
        let body = test::read_body(second).await;
        let body = std::str::from_utf8(&body).expect("utf8");
        assert!(!body.contains("Please log in to access this page"));
    }

    #[actix_web::test]
    async fn signed_in_users_see_dashboard_and_skip_auth_form() {
        let app = pages_app!();
        let signed = test::call_service(
            &app,
            test::TestRequest::get().uri("/test/sign-in").to_request(),
        )
        .await;
        let cookie = session_cookie(&signed).expect("session cookie");

        let home_res = test::call_service(
            &app,
            test::TestRequest::get().uri("/").cookie(cookie.clone()).to_request(),
        )
        .await;
        assert_eq!(home_res.status(), StatusCode::OK);
        let body = test::read_body(home_res).await;
        assert!(std::str::from_utf8(&body).expect("utf8").contains("Ann"));

        for uri in ["/auth", "/login"] {
            let res = test::call_service(
                &app,
                test::TestRequest::get().uri(uri).cookie(cookie.clone()).to_request(),
            )
            .await;
            assert_eq!(res.status(), StatusCode::SEE_OTHER, "{uri}");
            assert_eq!(location(&res), Some(HOME_PAGE));
        }
    }

    #[actix_web::test]
    async fn anonymous_visitors_get_the_form() {
        let app = pages_app!();
        let res = test::call_service(&app, test::TestRequest::get().uri("/login").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = test::read_body(res).await;
        let body = std::str::from_utf8(&body).expect("utf8");
        assert!(body.contains(r#"action="/signup""#));
        assert!(body.contains(r#"name="confirm_password""#));
    }
}
