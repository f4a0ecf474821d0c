//! Routes scoped to a course: `/api/courses/{course_id}/...`.

use axum::{Router, routing::post};
use util::state::AppState;

pub mod post;
pub mod students;
pub mod tutorial_quizzes;

use post::get_course_marks;
use students::student_routes;
use tutorial_quizzes::tutorial_quiz_routes;

pub fn courses_routes() -> Router<AppState> {
    Router::new()
        .nest("/{course_id}/tutorial-quizzes", tutorial_quiz_routes())
        .nest("/{course_id}/students", student_routes())
        .route("/{course_id}/marks", post(get_course_marks))
}
