use axum::{
    Router,
    routing::{get, put},
};
use util::state::AppState;

pub mod get;
pub mod post;
pub mod put;

use get::get_group_responses;
use post::add_group_response;
use put::edit_group_response;

/// Routes under `/api/courses/{course_id}/tutorial-quizzes/{tutorial_quiz_id}/groups/{group_id}/responses`.
pub fn response_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_group_responses).post(add_group_response))
        .route("/{response_id}", put(edit_group_response))
}
