//! Router fallbacks and the REST router assembly

use super::entity_registry::EntityRegistry;
use crate::core::ApiError;
use axum::{
    Json, Router,
    http::{Method, Uri},
    routing::get,
};
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Fallback for a known path hit with an unsupported method
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    tracing::debug!(%method, path = uri.path(), "method not allowed");
    ApiError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

/// Fallback for any path no resource claims
pub async fn route_not_found(uri: Uri) -> ApiError {
    tracing::debug!(path = uri.path(), "route not found");
    ApiError::RouteNotFound {
        path: uri.path().to_string(),
    }
}

/// Build the full REST router
///
/// Health routes, every registered resource and any custom routes are merged
/// under a single 404 fallback, then wrapped with tracing and CORS layers.
pub fn build_rest_router(registry: &EntityRegistry, custom_routes: Vec<Router>) -> Router {
    let app = custom_routes
        .into_iter()
        .fold(health_routes().merge(registry.build_routes()), Router::merge);

    app.fallback(route_not_found).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    )
}

fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check).fallback(method_not_allowed))
        .route("/healthz", get(health_check).fallback(method_not_allowed))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "grubdash"
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_routes() {
        let app = build_rest_router(&EntityRegistry::new(), vec![]);
        for path in ["/health", "/healthz"] {
            let response = app
                .clone()
                .oneshot(Request::get(path).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let json = body_json(response).await;
            assert_eq!(json["status"], "ok");
            assert_eq!(json["service"], "grubdash");
        }
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let app = build_rest_router(&EntityRegistry::new(), vec![]);
        let response = app
            .oneshot(Request::get("/nowhere").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Path not found: /nowhere");
        assert_eq!(json["code"], "ROUTE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_wrong_method_is_405() {
        let app = build_rest_router(&EntityRegistry::new(), vec![]);
        let response = app
            .oneshot(Request::post("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let json = body_json(response).await;
        assert_eq!(json["error"], "POST not allowed for /health");
    }

    #[tokio::test]
    async fn test_custom_routes_are_merged() {
        let custom = Router::new().route("/ping", get(|| async { "pong" }));
        let app = build_rest_router(&EntityRegistry::new(), vec![custom]);
        let response = app
            .oneshot(Request::get("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
