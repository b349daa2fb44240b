//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use sqlx::PgPool;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: GET /health reports a degraded service when nothing is reachable
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_reports_degraded_without_dependencies() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(common::unreachable_pool(), common::test_assets(dir.path()));
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], false);
    assert_eq!(json["assets_readable"], false);
    assert_eq!(json["output_writable"], false);
}

// ---------------------------------------------------------------------------
// Test: directory checks are reported independently of the database
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_reports_directories_without_database() {
    let dir = tempfile::tempdir().unwrap();
    let assets = common::test_assets(dir.path());
    std::fs::create_dir_all(&assets.assets_dir).unwrap();
    std::fs::create_dir_all(&assets.output_dir).unwrap();

    let app = common::build_test_app(common::unreachable_pool(), assets.clone());
    let json = body_json(get(app, "/health").await).await;

    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
    assert_eq!(json["assets_readable"], true);
    assert_eq!(json["output_writable"], true);
    assert_eq!(std::fs::read_dir(&assets.output_dir).unwrap().count(), 0);
}

// ---------------------------------------------------------------------------
// Test: GET /health returns ok when every dependency is available
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn health_check_returns_ok_with_json(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let assets = common::test_assets(dir.path());
    std::fs::create_dir_all(&assets.assets_dir).unwrap();
    std::fs::create_dir_all(&assets.output_dir).unwrap();

    let app = common::build_test_app(pool, assets);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
}

// ---------------------------------------------------------------------------
// Test: a missing output directory degrades an otherwise healthy service
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_output_dir_degrades_health(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let assets = common::test_assets(dir.path());
    std::fs::create_dir_all(&assets.assets_dir).unwrap();

    let app = common::build_test_app(pool, assets);
    let json = body_json(get(app, "/health").await).await;

    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], true);
    assert_eq!(json["output_writable"], false);
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(common::unreachable_pool(), common::test_assets(dir.path()));
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(common::unreachable_pool(), common::test_assets(dir.path()));
    let response = get(app, "/health").await;

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    // MakeRequestUuid produces a hyphenated UUID.
    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}

// ---------------------------------------------------------------------------
// Test: CORS preflight OPTIONS request returns correct headers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_returns_correct_headers() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(common::unreachable_pool(), common::test_assets(dir.path()));

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/vikings")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    let allow_origin = headers
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "http://localhost:5173");

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("POST"),
        "Allow-Methods should contain POST, got: {allow_methods}"
    );
}

// ---------------------------------------------------------------------------
// Test: composited images are served under /images
// ---------------------------------------------------------------------------

#[tokio::test]
async fn output_images_are_served_statically() {
    let dir = tempfile::tempdir().unwrap();
    let assets = common::test_assets(dir.path());
    std::fs::create_dir_all(&assets.output_dir).unwrap();
    std::fs::write(assets.output_path(5), b"\x89PNG\r\n\x1a\nfake").unwrap();

    let app = common::build_test_app(common::unreachable_pool(), assets);
    let response = get(app, "/images/viking_5.png").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "image/png"
    );
}
