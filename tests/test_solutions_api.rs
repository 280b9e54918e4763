//! End-to-end tests for the enterprise solution endpoints

mod common;

use axum::http::StatusCode;
use common::helpers::{send_json, test_router};
use serde_json::json;

async fn router() -> axum::Router {
    test_router(vec!["http://127.0.0.1:1/landscape.yml".to_string()]).await
}

#[tokio::test]
async fn create_defaults_subcategories_to_empty() {
    let router = router().await;

    let (status, body) = send_json(
        &router,
        "POST",
        "/api/enterprise-solutions",
        Some(json!({
            "category": "Observability and Analysis",
            "name": "Acme Observability Suite",
            "websiteUrl": "https://acme.example",
            "cncfProjectUsed": "OpenTelemetry"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Acme Observability Suite");
    assert_eq!(body["cncfProjectUsed"], "OpenTelemetry");
    assert_eq!(body["subcategories"], json!([]));
    assert!(body["id"].is_string());
}

#[tokio::test]
async fn create_rejects_missing_category() {
    let router = router().await;

    let (status, body) = send_json(
        &router,
        "POST",
        "/api/enterprise-solutions",
        Some(json!({
            "category": "",
            "name": "Acme"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn list_optionally_filters_by_category() {
    let router = router().await;

    for (name, category) in [
        ("Zeta Ops", "Observability"),
        ("Acme Suite", "Observability"),
        ("Runtime Tool", "Runtime"),
    ] {
        let (status, _) = send_json(
            &router,
            "POST",
            "/api/enterprise-solutions",
            Some(json!({"category": category, "name": name})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send_json(&router, "GET", "/api/enterprise-solutions", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Acme Suite", "Runtime Tool", "Zeta Ops"]);

    let (_, body) = send_json(
        &router,
        "GET",
        "/api/enterprise-solutions?category=Observability",
        None,
    )
    .await;
    let names: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Acme Suite", "Zeta Ops"]);

    let (_, body) = send_json(
        &router,
        "GET",
        "/api/enterprise-solutions?category=missing",
        None,
    )
    .await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn patch_updates_subcategory_restrictions_in_order() {
    let router = router().await;

    let (_, created) = send_json(
        &router,
        "POST",
        "/api/enterprise-solutions",
        Some(json!({
            "category": "Observability",
            "name": "Acme Suite",
            "subcategories": ["Tracing"]
        })),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, body) = send_json(
        &router,
        "PATCH",
        &format!("/api/enterprise-solutions/{}", id),
        Some(json!({"subcategories": ["Tracing", "Metrics"], "additionalInfo": "supports OTLP"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["subcategories"], json!(["Tracing", "Metrics"]));
    assert_eq!(body["additionalInfo"], "supports OTLP");
    // Untouched fields survive partial updates
    assert_eq!(body["category"], "Observability");
}

#[tokio::test]
async fn delete_then_operations_on_missing_id_return_not_found() {
    let router = router().await;

    let (_, created) = send_json(
        &router,
        "POST",
        "/api/enterprise-solutions",
        Some(json!({"category": "Runtime", "name": "Doomed"})),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, _) = send_json(
        &router,
        "DELETE",
        &format!("/api/enterprise-solutions/{}", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    for (method, body) in [
        ("GET", None),
        ("PATCH", Some(json!({"name": "Still Doomed"}))),
        ("DELETE", None),
    ] {
        let (status, response) = send_json(
            &router,
            method,
            &format!("/api/enterprise-solutions/{}", id),
            body,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{} should be NOT_FOUND", method);
        assert_eq!(response["code"], "NOT_FOUND");
    }
}
