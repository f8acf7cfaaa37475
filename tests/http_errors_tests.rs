//! Error envelope, fallback and body parsing behaviour across the API

mod common;

use axum::http::{Method, StatusCode};
use common::*;
use serde_json::{Value, json};

#[tokio::test]
async fn test_health_endpoints() {
    let server = server();

    for path in ["/health", "/healthz"] {
        let response = server.get(path).await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body, json!({"status": "ok", "service": "grubdash"}));
    }
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let server = server();

    let response = server.get("/drinks").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_error(&response.json(), "Path not found: /drinks", "ROUTE_NOT_FOUND");

    let response = server.post("/dishes/d1/extras").json(&json!({})).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unsupported_methods_are_405() {
    let server = server();
    let cases = [
        (Method::PATCH, "/dishes"),
        (Method::DELETE, "/dishes"),
        (Method::PATCH, "/dishes/d1"),
        (Method::POST, "/dishes/d1"),
        (Method::PATCH, "/orders"),
        (Method::DELETE, "/orders"),
        (Method::POST, "/orders/42"),
        (Method::PATCH, "/orders/42"),
    ];

    for (method, path) in cases {
        let response = server.method(method.clone(), path).await;
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        assert_error(
            &response.json(),
            &format!("{method} not allowed for {path}"),
            "METHOD_NOT_ALLOWED",
        );
    }
}

#[tokio::test]
async fn test_invalid_json_is_malformed_body() {
    let server = server();

    let response = server.post("/orders").text("{not json").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "MALFORMED_BODY");
    assert_eq!(count(&server, "/orders").await, 4);
}

#[tokio::test]
async fn test_non_object_body_is_malformed() {
    let server = server();

    let response = server.post("/dishes").json(&json!([1, 2, 3])).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_error(
        &response.json(),
        "Request body must be a JSON object: expected an object",
        "MALFORMED_BODY",
    );
}

#[tokio::test]
async fn test_empty_body_runs_validation() {
    let server = server();

    let response = server.post("/dishes").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_error(&response.json(), "Dish must include a name", "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_non_object_data_is_empty() {
    let server = server();

    let response = server
        .post("/orders")
        .json(&json!({"data": "deliver please"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_error(
        &response.json(),
        "Order must include a deliverTo",
        "VALIDATION_ERROR",
    );
}

#[tokio::test]
async fn test_lookup_precedes_payload_checks() {
    let server = server();

    let response = server
        .put("/orders/ghost")
        .json(&json!({"data": {"id": "other"}}))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_oversized_body_is_413() {
    let server = server();

    let response = server
        .post("/orders")
        .text("x".repeat(3 * 1024 * 1024))
        .await;
    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    let body: Value = response.json();
    assert_eq!(body["code"], "PAYLOAD_TOO_LARGE");
    assert_eq!(count(&server, "/orders").await, 4);
}
