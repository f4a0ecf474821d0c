use crate::{response::ApiResponse, routes::common::store_error};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use marker::grader::ResponseBody;
use util::state::AppState;

/// PUT /api/courses/{course_id}/tutorial-quizzes/{tutorial_quiz_id}/groups/{group_id}/responses/{response_id}
///
/// Edits a response in place and re-grades it.
///
/// The previous `answer` is always replaced (an omitted `answer` clears it). `lineByLineSummary`,
/// `points` and `attempts` keep their stored values unless the body carries them.
///
/// ### Responses
/// - `200 OK` with the updated response
/// - `404 Not Found` if any referenced entity does not exist, or the response belongs to another
///   group
/// - `422 Unprocessable Entity` for a malformed body
pub async fn edit_group_response(
    State(app_state): State<AppState>,
    Path((course_id, tutorial_quiz_id, group_id, response_id)): Path<(
        String,
        String,
        String,
        String,
    )>,
    Json(body): Json<ResponseBody>,
) -> Response {
    match app_state
        .store()
        .edit_response(&course_id, &tutorial_quiz_id, &group_id, &response_id, body)
        .await
    {
        Ok(response) => ApiResponse::success(response, "Response updated").with_status(StatusCode::OK),
        Err(err) => store_error(err, "edit response"),
    }
}
