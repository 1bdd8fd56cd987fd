//! End-to-end checks for the JSON statistics API.

mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use backend::domain::TRACE_ID_HEADER;
use backend::server::build_app;
use common::Workspace;
use rstest::rstest;
use serde_json::Value;

#[rstest]
#[case("/api/summary")]
#[case("/api/overview")]
#[case("/api/top-games")]
#[case("/api/top-sellers")]
#[case("/api/sales/by-year")]
#[case("/api/sales/by-platform")]
#[case("/api/sales/by-publisher")]
#[case("/api/sales/by-genre")]
#[case("/api/sales/regions")]
#[case("/api/missing")]
#[actix_rt::test]
async fn endpoints_answer_json_with_trace_id(#[case] uri: &str) {
    let workspace = Workspace::new();
    let app = test::init_service(build_app(workspace.deps())).await;

    let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    assert_eq!(res.status(), StatusCode::OK, "{uri}");
    let trace_id = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace-id header");
    assert!(uuid::Uuid::parse_str(&trace_id).is_ok());
    let body: Value = test::read_body_json(res).await;
    assert!(body.is_object() || body.is_array());
}

#[actix_rt::test]
async fn api_does_not_require_a_session() {
    let workspace = Workspace::new();
    let app = test::init_service(build_app(workspace.deps())).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/overview").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["rows"], 4);
    assert_eq!(body["columns"], 11);
}

#[actix_rt::test]
async fn error_body_carries_the_header_trace_id() {
    let workspace = Workspace::new();
    let app = test::init_service(build_app(workspace.deps())).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/top-sellers?limit=0")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let header = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace-id header");
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["traceId"], header.as_str());
    assert_eq!(body["details"]["field"], "limit");
}
