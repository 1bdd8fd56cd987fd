//! End-to-end session gate flows through the assembled application.

mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use backend::server::build_app;
use common::{Browser, Workspace, location};
use rstest::rstest;

const ANN_SIGNUP: [(&str, &str); 4] = [
    ("name", "Ann"),
    ("email", "ann@x.com"),
    ("password", "password1"),
    ("confirm_password", "password1"),
];

const ANN_LOGIN: [(&str, &str); 2] = [("email", "ann@x.com"), ("password", "password1")];

#[actix_rt::test]
async fn signup_logout_login_keeps_user_name() {
    let workspace = Workspace::new();
    let app = test::init_service(build_app(workspace.deps())).await;
    let mut browser = Browser::default();

    let res = browser.post_form(&app, "/signup", &ANN_SIGNUP).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), Some("/"));
    let dashboard = browser.page(&app, "/").await;
    assert!(dashboard.contains("Account created successfully! Welcome, Ann!"));
    assert!(dashboard.contains("<strong>Ann</strong>"));

    let res = browser.get(&app, "/logout").await;
    assert_eq!(location(&res), Some("/auth"));
    let auth = browser.page(&app, "/auth").await;
    assert!(auth.contains("You have been logged out. Goodbye, Ann!"));

    let res = browser.post_form(&app, "/login", &ANN_LOGIN).await;
    assert_eq!(location(&res), Some("/"));
    let dashboard = browser.page(&app, "/").await;
    assert!(dashboard.contains("Welcome back, Ann!"));
    assert!(dashboard.contains("<strong>Ann</strong>"));
}

#[actix_rt::test]
async fn signup_persists_hashed_password_only() {
    let workspace = Workspace::new();
    let app = test::init_service(build_app(workspace.deps())).await;
    let mut browser = Browser::default();

    browser.post_form(&app, "/signup", &ANN_SIGNUP).await;

    let users = workspace.users_json();
    let record = &users["ann@x.com"];
    assert_eq!(record["name"], "Ann");
    assert_eq!(record["email"], "ann@x.com");
    let hash = record["password"].as_str().expect("stored hash");
    assert_ne!(hash, "password1");
    assert!(hash.starts_with("$argon2id$"));
}

#[actix_rt::test]
async fn unknown_email_cannot_log_in() {
    let workspace = Workspace::new();
    let app = test::init_service(build_app(workspace.deps())).await;
    let mut browser = Browser::default();

    let res = browser
        .post_form(
            &app,
            "/login",
            &[("email", "ghost@x.com"), ("password", "whatever1")],
        )
        .await;
    assert_eq!(location(&res), Some("/auth"));
    let auth = browser.page(&app, "/auth").await;
    assert!(auth.contains("Invalid email or password"));

    let res = browser.get(&app, "/").await;
    assert_eq!(location(&res), Some("/auth"));
}

#[actix_rt::test]
async fn wrong_password_reads_like_unknown_email() {
    let workspace = Workspace::new();
    let app = test::init_service(build_app(workspace.deps())).await;
    let mut signup = Browser::default();
    signup.post_form(&app, "/signup", &ANN_SIGNUP).await;

    let mut browser = Browser::default();
    let res = browser
        .post_form(
            &app,
            "/login",
            &[("email", "ann@x.com"), ("password", "password2")],
        )
        .await;
    assert_eq!(location(&res), Some("/auth"));
    let auth = browser.page(&app, "/auth").await;
    assert!(auth.contains("Invalid email or password"));
}

#[rstest]
#[case("12345678", "/")]
#[case("1234567", "/auth")]
#[actix_rt::test]
async fn password_minimum_is_eight_characters(#[case] password: &str, #[case] target: &str) {
    let workspace = Workspace::new();
    let app = test::init_service(build_app(workspace.deps())).await;
    let mut browser = Browser::default();

    let res = browser
        .post_form(
            &app,
            "/signup",
            &[
                ("name", "Ann"),
                ("email", "ann@x.com"),
                ("password", password),
                ("confirm_password", password),
            ],
        )
        .await;
    assert_eq!(location(&res), Some(target));
}

#[actix_rt::test]
async fn short_password_shows_length_notice() {
    let workspace = Workspace::new();
    let app = test::init_service(build_app(workspace.deps())).await;
    let mut browser = Browser::default();

    browser
        .post_form(
            &app,
            "/signup",
            &[
                ("name", "Ann"),
                ("email", "ann@x.com"),
                ("password", "1234567"),
                ("confirm_password", "1234567"),
            ],
        )
        .await;
    let auth = browser.page(&app, "/auth").await;
    assert!(auth.contains("Password must be at least 8 characters"));
    assert!(!workspace.users_file().exists());
}

#[actix_rt::test]
async fn duplicate_email_is_rejected() {
    let workspace = Workspace::new();
    let app = test::init_service(build_app(workspace.deps())).await;
    Browser::default()
        .post_form(&app, "/signup", &ANN_SIGNUP)
        .await;

    let mut browser = Browser::default();
    let res = browser
        .post_form(
            &app,
            "/signup",
            &[
                ("name", "Impostor"),
                ("email", "ann@x.com"),
                ("password", "password9"),
                ("confirm_password", "password9"),
            ],
        )
        .await;
    assert_eq!(location(&res), Some("/auth"));
    let auth = browser.page(&app, "/auth").await;
    assert!(auth.contains("An account with this email already exists"));

    let users = workspace.users_json();
    assert_eq!(users.as_object().map(serde_json::Map::len), Some(1));
    assert_eq!(users["ann@x.com"]["name"], "Ann");
}

#[actix_rt::test]
async fn corrupt_credential_file_is_replaced_on_signup() {
    let workspace = Workspace::new();
    std::fs::write(workspace.users_file(), "{ not json").expect("write corrupt file");
    let app = test::init_service(build_app(workspace.deps())).await;
    let mut browser = Browser::default();

    let res = browser.post_form(&app, "/signup", &ANN_SIGNUP).await;
    assert_eq!(location(&res), Some("/"));

    let users = workspace.users_json();
    assert_eq!(users.as_object().map(serde_json::Map::len), Some(1));
    assert_eq!(users["ann@x.com"]["name"], "Ann");
}

#[actix_rt::test]
async fn notices_render_once() {
    let workspace = Workspace::new();
    let app = test::init_service(build_app(workspace.deps())).await;
    let mut browser = Browser::default();

    let res = browser.get(&app, "/").await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), Some("/auth"));

    let first = browser.page(&app, "/auth").await;
    assert!(first.contains("Please log in to access this page"));
    let second = browser.page(&app, "/auth").await;
    assert!(!second.contains("Please log in to access this page"));
}

#[actix_rt::test]
async fn auth_pages_redirect_signed_in_users_home() {
    let workspace = Workspace::new();
    let app = test::init_service(build_app(workspace.deps())).await;
    let mut browser = Browser::default();
    browser.post_form(&app, "/signup", &ANN_SIGNUP).await;

    for uri in ["/auth", "/login"] {
        let res = browser.get(&app, uri).await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(location(&res), Some("/"), "{uri}");
    }
}

#[actix_rt::test]
async fn incomplete_login_form_asks_for_all_fields() {
    let workspace = Workspace::new();
    let app = test::init_service(build_app(workspace.deps())).await;
    let mut browser = Browser::default();

    let res = browser
        .post_form(&app, "/login", &[("email", "ann@x.com")])
        .await;
    assert_eq!(location(&res), Some("/auth"));
    let auth = browser.page(&app, "/auth").await;
    assert!(auth.contains("Please fill in all fields"));
}

#[actix_rt::test]
async fn body_without_form_content_type_redirects_to_auth() {
    let workspace = Workspace::new();
    let app = test::init_service(build_app(workspace.deps())).await;
    let mut browser = Browser::default();

    let res = browser
        .send(
            &app,
            test::TestRequest::post()
                .uri("/login")
                .set_payload("email=ann@x.com&password=password1"),
        )
        .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), Some("/auth"));
    let auth = browser.page(&app, "/auth").await;
    assert!(auth.contains("Please fill in all fields"));
}
