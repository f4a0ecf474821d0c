use axum::{
    body::Body,
    http::{
        Method, Request,
        header::{HeaderName, ORIGIN, USER_AGENT},
    },
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::info;

/// Logs every incoming request and the status it completed with.
///
/// Preflight `OPTIONS` requests are passed through without logging.
///
/// ```ignore
/// use axum::Router;
/// use axum::middleware::from_fn;
/// use api::middleware::log_request;
///
/// let app = Router::new().layer(from_fn(log_request));
/// ```
pub async fn log_request(req: Request<Body>, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return next.run(req).await;
    }

    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let (origin, user_agent) = {
        let header = |name: HeaderName| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("unknown")
                .to_string()
        };
        (header(ORIGIN), header(USER_AGENT))
    };

    let started = Instant::now();
    let response = next.run(req).await;

    info!(
        method = %method,
        path = %path,
        origin = %origin,
        user_agent = %user_agent,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Handled request"
    );
    response
}
