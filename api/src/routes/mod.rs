//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → liveness probe
//! - `/courses` → tutorial-quiz settings, group review and grading, and the three marks scopes

use crate::routes::{courses::courses_routes, health::health_routes};
use axum::Router;
use util::state::AppState;

pub mod common;
pub mod courses;
pub mod health;

/// Builds the application router for all HTTP endpoints, bound to `app_state`.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/courses", courses_routes())
        .with_state(app_state)
}
