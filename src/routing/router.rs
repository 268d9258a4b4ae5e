//! Route table.
//!
//! | Method | Path               | Handler        |
//! |--------|--------------------|----------------|
//! | GET    | `/`                | `root`         |
//! | GET    | `/health`          | `health_check` |
//! | GET    | `/items/{item_id}` | `read_item`    |
//! | POST   | `/items/`          | `create_item`  |

use axum::{
    routing::{get, post},
    Router,
};

use crate::routing::handlers::{create_item, health_check, read_item, root};

const ROOT: &str = "/";
const HEALTH: &str = "/health";
const ITEM: &str = "/items/{item_id}";
const ITEMS: &str = "/items/";

/// Path templates served by [`api_routes`].
pub const API_PATHS: &[&str] = &[ROOT, HEALTH, ITEM, ITEMS];

/// Build the API routes. Documentation routes are merged in by the server.
pub fn api_routes() -> Router {
    Router::new()
        .route(ROOT, get(root))
        .route(HEALTH, get(health_check))
        .route(ITEM, get(read_item))
        .route(ITEMS, post(create_item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = api_routes().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_root_and_health() {
        assert_eq!(
            send(get_req("/")).await,
            (StatusCode::OK, json!({"message": "Hello, World!"}))
        );
        assert_eq!(
            send(get_req("/health")).await,
            (StatusCode::OK, json!({"status": "healthy"}))
        );
    }

    #[tokio::test]
    async fn test_read_item() {
        let (status, body) = send(get_req("/items/42?q=search_term")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"item_id": 42, "q": "search_term"}));

        let (_, body) = send(get_req("/items/7")).await;
        assert_eq!(body, json!({"item_id": 7, "q": null}));
    }

    #[tokio::test]
    async fn test_read_item_rejects_non_integer() {
        let (status, body) = send(get_req("/items/abc")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["type"], "int_parsing");
        assert_eq!(body["detail"][0]["loc"], json!(["path", "item_id"]));
        assert_eq!(body["detail"][0]["input"], "abc");
    }

    #[tokio::test]
    async fn test_create_item_reports_every_violation() {
        let (status, body) = send(post_json("/items/", json!({"tax": "x"}))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let locs: Vec<Value> = body["detail"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["loc"].clone())
            .collect();
        assert_eq!(
            locs,
            vec![
                json!(["body", "name"]),
                json!(["body", "price"]),
                json!(["body", "tax"])
            ]
        );
    }

    #[tokio::test]
    async fn test_create_item_rejects_non_json_content_type() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/items/")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from(r#"{"name":"W","price":1}"#))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body["detail"],
            json!([{
                "type": "model_attributes_type",
                "loc": ["body"],
                "msg": "Input should be a valid dictionary or object to extract fields from",
                "input": r#"{"name":"W","price":1}"#
            }])
        );
    }

    #[tokio::test]
    async fn test_create_item_accepts_json_media_types() {
        for content_type in ["application/json; charset=utf-8", "application/vnd.api+json"] {
            let request = Request::builder()
                .method(Method::POST)
                .uri("/items/")
                .header(header::CONTENT_TYPE, content_type)
                .body(Body::from(r#"{"name":"W","price":1}"#))
                .unwrap();
            let (status, body) = send(request).await;
            assert_eq!(status, StatusCode::OK, "{content_type}");
            assert_eq!(body["price"], 1.0);
        }
    }

    #[tokio::test]
    async fn test_every_listed_path_is_routed() {
        for template in API_PATHS {
            let path = template.replace("{item_id}", "1");
            let (status, _) = send(get_req(&path)).await;
            assert_ne!(status, StatusCode::NOT_FOUND, "{template}");
        }
    }

    #[tokio::test]
    async fn test_create_item_without_content_type() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/items/")
            .body(Body::from(r#"{"name":"Gadget","price":19.99}"#))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["description"], Value::Null);
    }

    #[tokio::test]
    async fn test_wrong_method_is_405() {
        let request = Request::builder()
            .method(Method::DELETE)
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(request).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}
