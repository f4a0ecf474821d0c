use axum::{Router, routing::get};
use util::state::AppState;

pub mod get;
pub mod put;
pub mod responses;

use get::{get_tutorial_quiz, get_tutorial_quiz_marks, list_tutorial_quizzes};
use put::{bulk_update_tutorial_quizzes, update_tutorial_quiz};
use responses::response_routes;

/// Routes under `/api/courses/{course_id}/tutorial-quizzes`.
pub fn tutorial_quiz_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_tutorial_quizzes).put(bulk_update_tutorial_quizzes),
        )
        .route(
            "/{tutorial_quiz_id}",
            get(get_tutorial_quiz).put(update_tutorial_quiz),
        )
        .route("/{tutorial_quiz_id}/marks", get(get_tutorial_quiz_marks))
        .nest(
            "/{tutorial_quiz_id}/groups/{group_id}/responses",
            response_routes(),
        )
}
