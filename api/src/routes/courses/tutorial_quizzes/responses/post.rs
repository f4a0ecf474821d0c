use crate::{response::ApiResponse, routes::common::store_error};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use marker::grader::ResponseBody;
use util::state::AppState;

/// POST /api/courses/{course_id}/tutorial-quizzes/{tutorial_quiz_id}/groups/{group_id}/responses
///
/// Records a group's response to one question and grades it.
///
/// ### Request Body
/// ```json
/// {
///   "question": "q4",
///   "answer": [],
///   "lineByLineSummary": [ { "value": "x=1", "attempts": 1, "correct": true } ],
///   "points": 1.0,
///   "attempts": 1
/// }
/// ```
///
/// `correct` is always computed by the grader. When `points` is omitted and the quiz has a
/// score-by-attempt schedule, the points are taken from the schedule.
///
/// ### Responses
/// - `201 Created` with the stored response
/// - `404 Not Found` if the course, tutorial-quiz, group or question does not exist
/// - `422 Unprocessable Entity` for a malformed body
pub async fn add_group_response(
    State(app_state): State<AppState>,
    Path((course_id, tutorial_quiz_id, group_id)): Path<(String, String, String)>,
    Json(body): Json<ResponseBody>,
) -> Response {
    match app_state
        .store()
        .add_response(&course_id, &tutorial_quiz_id, &group_id, body)
        .await
    {
        Ok(response) => {
            ApiResponse::success(response, "Response added").with_status(StatusCode::CREATED)
        }
        Err(err) => store_error(err, "add response"),
    }
}
