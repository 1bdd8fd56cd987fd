//! Tests for server construction, covering readiness signalling and the
//! assembled route table.

use super::*;
use crate::domain::TRACE_ID_HEADER;
use crate::domain::ports::MockSessionGate;
use crate::inbound::http::test_utils::dataset_from_rows;
use actix_web::http::{StatusCode, header};
use actix_web::test;
use rstest::{fixture, rstest};
use std::net::SocketAddr;
use std::sync::Arc;

#[fixture]
fn health_state() -> web::Data<HealthState> {
    web::Data::new(HealthState::new())
}

#[fixture]
fn http_state() -> web::Data<HttpState> {
    let dataset = dataset_from_rows(&[
        "1,Wii Sports,Wii,2006,Sports,Nintendo,41.49,29.02,3.77,8.46,82.74",
    ]);
    web::Data::new(HttpState::new(
        Arc::new(MockSessionGate::new()),
        Arc::new(dataset),
    ))
}

fn deps(health_state: web::Data<HealthState>, http_state: web::Data<HttpState>) -> AppDependencies {
    AppDependencies {
        health_state,
        http_state,
        key: Key::generate(),
        cookie_secure: false,
        same_site: SameSite::Lax,
    }
}

#[rstest]
#[actix_rt::test]
async fn create_server_marks_ready(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) {
    assert!(!health_state.is_ready(), "state should start unready");
    let settings = crate::inbound::http::session_config::SessionSettings {
        key: Key::generate(),
        cookie_secure: false,
        same_site: SameSite::Lax,
    };
    let config = ServerConfig::new(settings, SocketAddr::from(([127, 0, 0, 1], 0)));

    let _server = create_server(health_state.clone(), http_state, config)
        .expect("server should bind an ephemeral port");

    assert!(
        health_state.is_ready(),
        "server creation should mark readiness"
    );
}

#[rstest]
#[actix_rt::test]
async fn unmatched_route_answers_json_not_found(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) {
    let app = test::init_service(build_app(deps(health_state, http_state))).await;
    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/nope").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(res.headers().contains_key(TRACE_ID_HEADER));
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "not_found");
    assert!(body["traceId"].is_string());
}

#[rstest]
#[actix_rt::test]
async fn anonymous_home_redirects_through_full_stack(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) {
    let app = test::init_service(build_app(deps(health_state, http_state))).await;
    let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        res.headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some("/auth")
    );
    assert!(res.headers().contains_key(header::SET_COOKIE));
}

#[rstest]
#[actix_rt::test]
async fn bad_limit_uses_shared_error_payload(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) {
    let app = test::init_service(build_app(deps(health_state, http_state))).await;
    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/top-sellers?limit=abc")
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
}

#[rstest]
#[case("/health/live", StatusCode::OK)]
#[case("/health/ready", StatusCode::SERVICE_UNAVAILABLE)]
#[actix_rt::test]
async fn health_checks_are_mounted(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    #[case] uri: &str,
    #[case] expected: StatusCode,
) {
    let app = test::init_service(build_app(deps(health_state, http_state))).await;
    let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    assert_eq!(res.status(), expected);
}
