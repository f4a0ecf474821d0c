use api::{middleware::log_request, routes::routes};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
    middleware::from_fn,
};
use serde_json::Value;
use util::{state::AppState, test_helpers::sample_store};

/// Builds the `/api` router over a fresh copy of the sample store.
pub fn make_test_app() -> Router {
    Router::new()
        .nest("/api", routes(AppState::new(sample_store())))
        .layer(from_fn(log_request))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}
