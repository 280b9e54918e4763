//! End-to-end tests for the landscape import endpoints

mod common;

use axum::http::StatusCode;
use common::helpers::{send_json, test_router};
use serde_json::json;

const LANDSCAPE_YAML: &str = r#"
landscape:
  - name: Observability and Analysis
    subcategories:
      - name: Tracing
        items:
          - name: Jaeger
            project: graduated
            repo_url: https://github.com/jaegertracing/jaeger
      - name: Metrics
        items:
          - name: Prometheus
            project: graduated
  - category:
      name: Sandbox Projects
      items:
        - item:
            name: Fresh Thing
  - name: Runtime
    maturity: incubating
    items:
      - name: Some Runtime
"#;

#[tokio::test]
async fn sync_imports_flattened_projects_and_is_idempotent() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/landscape.yml")
        .with_status(200)
        .with_body(LANDSCAPE_YAML)
        .create_async()
        .await;

    let router = test_router(vec![
        // The first URL is dead; sync must fall back to the second
        "http://127.0.0.1:1/landscape.yml".to_string(),
        format!("{}/landscape.yml", server.url()),
    ])
    .await;

    let (status, body) = send_json(&router, "POST", "/api/landscape/sync", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Projects synced successfully");
    assert_eq!(body["imported"], 4);
    assert_eq!(body["updated"], 4);

    let (_, projects) = send_json(&router, "GET", "/api/projects", None).await;
    let projects = projects.as_array().unwrap().clone();
    assert_eq!(projects.len(), 4);

    let jaeger = projects
        .iter()
        .find(|p| p["name"] == "Jaeger")
        .expect("Jaeger imported");
    assert_eq!(jaeger["category"], "Observability and Analysis");
    assert_eq!(jaeger["subcategory"], "Tracing");
    assert_eq!(jaeger["maturityLevel"], "Graduated");
    assert_eq!(jaeger["repoUrl"], "https://github.com/jaegertracing/jaeger");
    assert!(jaeger["lastUpdated"].is_string());

    // Category-name substring fallback
    let fresh = projects.iter().find(|p| p["name"] == "Fresh Thing").unwrap();
    assert_eq!(fresh["maturityLevel"], "Sandbox");
    assert!(fresh["subcategory"].is_null());

    // Category-level maturity declaration
    let runtime = projects.iter().find(|p| p["name"] == "Some Runtime").unwrap();
    assert_eq!(runtime["maturityLevel"], "Incubating");

    // Second sync of identical data: same record count, same ids
    let jaeger_id = jaeger["id"].clone();
    let (status, body) = send_json(&router, "POST", "/api/landscape/sync", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["imported"], 4);

    let (_, projects) = send_json(&router, "GET", "/api/projects", None).await;
    let projects = projects.as_array().unwrap();
    assert_eq!(projects.len(), 4);
    let jaeger = projects.iter().find(|p| p["name"] == "Jaeger").unwrap();
    assert_eq!(jaeger["id"], jaeger_id);
}

#[tokio::test]
async fn sync_leaves_stale_projects_in_place() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/landscape.yml")
        .with_status(200)
        .with_body(LANDSCAPE_YAML)
        .create_async()
        .await;

    let router = test_router(vec![format!("{}/landscape.yml", server.url())]).await;

    // A manually-curated record absent from the landscape document
    let (status, _) = send_json(
        &router,
        "POST",
        "/api/projects",
        Some(json!({
            "name": "Local Only",
            "category": "Runtime",
            "maturityLevel": "Sandbox"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    send_json(&router, "POST", "/api/landscape/sync", None).await;

    let (_, projects) = send_json(&router, "GET", "/api/projects", None).await;
    let names: Vec<_> = projects
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Local Only"));
    assert_eq!(names.len(), 5);
}

#[tokio::test]
async fn sync_fails_without_writes_when_every_url_fails() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/broken.yml")
        .with_status(500)
        .create_async()
        .await;

    let router = test_router(vec![
        "http://127.0.0.1:1/landscape.yml".to_string(),
        format!("{}/broken.yml", server.url()),
    ])
    .await;

    let (status, body) = send_json(&router, "POST", "/api/landscape/sync", None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "SOURCE_UNAVAILABLE");
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("Tried 2 URLs"),
        "message should name the attempt count: {}",
        body["message"]
    );

    // No partial writes on fetch failure
    let (_, projects) = send_json(&router, "GET", "/api/projects", None).await;
    assert_eq!(projects, json!([]));
}

#[tokio::test]
async fn fetch_reports_category_count_without_persisting() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/landscape.yml")
        .with_status(200)
        .with_body(LANDSCAPE_YAML)
        .create_async()
        .await;

    let router = test_router(vec![format!("{}/landscape.yml", server.url())]).await;

    let (status, body) = send_json(&router, "GET", "/api/landscape/fetch", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Landscape YAML data fetched successfully");
    assert_eq!(body["categories"], 3);

    // Fetch is a dry run: nothing is written
    let (_, projects) = send_json(&router, "GET", "/api/projects", None).await;
    assert_eq!(projects, json!([]));
}

#[tokio::test]
async fn fetch_surfaces_source_unavailable_for_empty_documents() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/landscape.yml")
        .with_status(200)
        .with_body("landscape: []\n")
        .create_async()
        .await;

    let router = test_router(vec![format!("{}/landscape.yml", server.url())]).await;

    let (status, body) = send_json(&router, "GET", "/api/landscape/fetch", None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "SOURCE_UNAVAILABLE");
}
