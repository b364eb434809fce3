mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum_test::TestServer;
use common::{FailingSessionReader, StartResult, Verdict, create_test_state, test_rules};
use tenant_gateway::routes::app_router;
use tenant_gateway::state::AppState;
use tower::ServiceExt;

fn server(state: AppState) -> TestServer {
    TestServer::new(app_router(state)).unwrap()
}

fn location(response: &axum_test::TestResponse) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect must carry a Location header")
        .to_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_root_domain_rewrites_to_home_tree() {
    let (state, _, _) = create_test_state(None, Verdict::Invalid, StartResult::NoUrl);
    let server = server(state);

    let response = server
        .get("/")
        .add_header(header::HOST, "example.com")
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["tree"], "home");
    assert_eq!(json["path"], "/home");
}

#[tokio::test]
async fn test_bare_localhost_rewrites_to_home_tree() {
    let (state, _, _) = create_test_state(None, Verdict::Invalid, StartResult::NoUrl);
    let server = server(state);

    let response = server
        .get("/pricing")
        .add_header(header::HOST, "localhost:3000")
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["tree"], "home");
    assert_eq!(json["path"], "/home/pricing");
}

#[tokio::test]
async fn test_app_without_session_redirects_to_login() {
    let (state, _, _) = create_test_state(None, Verdict::Invalid, StartResult::NoUrl);
    let server = server(state);

    let response = server
        .get("/settings")
        .add_header(header::HOST, "app.example.com")
        .await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_app_session_read_failure_is_treated_as_no_session() {
    let (state, _, _) = create_test_state(None, Verdict::Invalid, StartResult::NoUrl);
    let state = AppState::new(test_rules(), Arc::new(FailingSessionReader), state.signin);
    let server = server(state);

    let response = server
        .get("/settings")
        .add_header(header::HOST, "app.example.com")
        .await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_app_with_session_on_login_redirects_home() {
    let (state, _, _) =
        create_test_state(Some(common::test_session()), Verdict::Invalid, StartResult::NoUrl);
    let server = server(state);

    let response = server
        .get("/login")
        .add_header(header::HOST, "app.example.com")
        .await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn test_app_with_session_rewrites_to_app_tree() {
    let (state, _, _) =
        create_test_state(Some(common::test_session()), Verdict::Invalid, StartResult::NoUrl);
    let server = server(state);

    let response = server
        .get("/settings")
        .add_header(header::HOST, "app.example.com")
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["tree"], "app");
    assert_eq!(json["path"], "/app/settings");
}

#[tokio::test]
async fn test_app_root_path_rewrites_without_double_slash() {
    let (state, _, _) =
        create_test_state(Some(common::test_session()), Verdict::Invalid, StartResult::NoUrl);
    let server = server(state);

    let response = server
        .get("/")
        .add_header(header::HOST, "app.example.com")
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["tree"], "app");
    assert_eq!(json["path"], "/app");
}

#[tokio::test]
async fn test_app_subdomain_on_localhost_maps_to_production_logic() {
    let (state, _, _) = create_test_state(None, Verdict::Invalid, StartResult::NoUrl);
    let server = server(state);

    let response = server
        .get("/settings")
        .add_header(header::HOST, "app.localhost:3000")
        .await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_tenant_hostname_becomes_path_prefix() {
    let (state, _, _) = create_test_state(None, Verdict::Invalid, StartResult::NoUrl);
    let server = server(state);

    let response = server
        .get("/dashboard?tab=billing")
        .add_header(header::HOST, "tenant1.example.com")
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["tree"], "tenant");
    assert_eq!(json["tenant"], "tenant1.example.com");
    assert_eq!(json["path"], "/dashboard");
    assert_eq!(json["query"], "tab=billing");
}

#[tokio::test]
async fn test_query_string_preserved_through_rewrite() {
    let (state, _, _) =
        create_test_state(Some(common::test_session()), Verdict::Invalid, StartResult::NoUrl);
    let server = server(state);

    let response = server
        .get("/search?q=a%20b&order=desc")
        .add_header(header::HOST, "app.example.com")
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["path"], "/app/search");
    assert_eq!(json["query"], "q=a%20b&order=desc");
}

#[tokio::test]
async fn test_font_requests_pass_through_without_session_gate() {
    let (state, _, _) = create_test_state(None, Verdict::Invalid, StartResult::NoUrl);
    let server = server(state);

    // No session on the app subdomain, yet no redirect to /login
    let response = server
        .get("/assets/brand.woff2")
        .add_header(header::HOST, "app.example.com")
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    // Untouched path lands in the fallback tree, proving no rewrite happened
    assert_eq!(json["tree"], "tenant");
    assert_eq!(json["tenant"], "assets");
}

#[tokio::test]
async fn test_missing_host_header_passes_through_unclassified() {
    let (state, _, _) = create_test_state(None, Verdict::Invalid, StartResult::NoUrl);
    let app = app_router(state);

    // Raw service call: the test server always supplies a Host header
    let response = app
        .oneshot(
            Request::builder()
                .uri("/settings")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Not redirected to /login and not rewritten; the untouched path lands
    // in the fallback tree
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["tree"], "tenant");
    assert_eq!(json["tenant"], "settings");
}

#[tokio::test]
async fn test_api_paths_are_never_rewritten() {
    let (state, _, _) = create_test_state(None, Verdict::Invalid, StartResult::NoUrl);
    let server = server(state);

    let response = server
        .get("/api/health")
        .add_header(header::HOST, "app.example.com")
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_single_segment_files_are_never_rewritten() {
    let (state, _, _) = create_test_state(None, Verdict::Invalid, StartResult::NoUrl);
    let server = server(state);

    let response = server
        .get("/favicon.ico")
        .add_header(header::HOST, "app.example.com")
        .await;

    // Not redirected to /login; the untouched path falls through
    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["tree"], "tenant");
}
