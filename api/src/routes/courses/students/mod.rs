use axum::{Router, routing::get};
use util::state::AppState;

pub mod get;

use get::get_student_marks;

pub fn student_routes() -> Router<AppState> {
    Router::new().route("/{student_id}/marks", get(get_student_marks))
}
