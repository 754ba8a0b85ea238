//! Health, readiness, version and OpenAPI routes.

mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;

#[tokio::test]
async fn health_returns_ok() {
    let (_store, app) = memory_app();

    let res = get(&app, "/health").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json(), json!({"status": "ok"}));
}

#[tokio::test]
async fn ready_pings_the_store() {
    let (_store, app) = memory_app();

    let res = get(&app, "/ready").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json(), json!({"status": "ok", "database": "ok"}));
}

#[tokio::test]
async fn version_reports_crate() {
    let (_store, app) = memory_app();

    let json = get(&app, "/version").await.json();

    assert_eq!(json["name"], "movie-catalog");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn swagger_documents_every_catalog_path() {
    let (_store, app) = memory_app();

    let res = get(&app, "/swagger.json").await;
    assert_eq!(res.status, StatusCode::OK);

    let doc = res.json();
    let paths = doc["paths"].as_object().unwrap();
    for path in ["/movies/", "/movies/{id}", "/directors/", "/directors/{id}", "/genres/", "/genres/{id}"] {
        assert!(paths.contains_key(path), "missing {}", path);
    }
    let movie_by_id = &paths["/movies/{id}"];
    for method in ["get", "put", "patch", "delete"] {
        assert!(movie_by_id.get(method).is_some(), "missing {} /movies/{{id}}", method);
    }
    assert!(doc["components"]["schemas"]["Movie"].is_object());
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let (_store, app) = memory_app();
    let huge = "x".repeat(2 * 1024 * 1024);

    let res = post_json(&app, "/movies/", json!({"title": huge})).await;

    assert_eq!(res.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(res.json()["error"]["code"], "payload_too_large");
}
