use crate::{response::ApiResponse, routes::common::store_error};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use marker::types::{SettingsUpdate, TutorialQuizSettings};
use serde::Deserialize;
use util::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkUpdateRequest {
    #[serde(default)]
    pub tutorial_quizzes: Vec<String>,
    #[serde(flatten)]
    pub update: SettingsUpdate,
}

/// PUT /api/courses/{course_id}/tutorial-quizzes
///
/// Applies one partial settings update to several tutorial-quizzes. Only the fields named in
/// `update` are written; `published`, `active` and `archived` are read for truthiness, so a
/// named flag left out of the body is switched off.
///
/// ### Request Body
/// ```json
/// {
///   "tutorialQuizzes": ["tq1", "tq2"],
///   "update": ["published", "maxMembersPerGroup"],
///   "published": "on",
///   "maxMembersPerGroup": 4
/// }
/// ```
///
/// Ids that are not tutorial-quizzes of this course are ignored.
///
/// ### Responses
/// - `200 OK` with the updated tutorial-quizzes
/// - `404 Not Found` if the course does not exist
/// - `422 Unprocessable Entity` for a malformed body
pub async fn bulk_update_tutorial_quizzes(
    State(app_state): State<AppState>,
    Path(course_id): Path<String>,
    Json(req): Json<BulkUpdateRequest>,
) -> Response {
    match app_state
        .store()
        .update_many_settings(&course_id, &req.tutorial_quizzes, &req.update)
        .await
    {
        Ok(tqs) => ApiResponse::success(tqs, "Tutorial quizzes updated").with_status(StatusCode::OK),
        Err(err) => store_error(err, "update tutorial quizzes"),
    }
}

/// PUT /api/courses/{course_id}/tutorial-quizzes/{tutorial_quiz_id}
///
/// Replaces the tutorial-quiz settings.
///
/// ### Request Body
/// ```json
/// {
///   "published": true,
///   "active": true,
///   "archived": false,
///   "allocateMembers": "automatically",
///   "maxMembersPerGroup": 3
/// }
/// ```
///
/// A change to `published`, `active` or `archived` is logged; pushing it to connected clients
/// is left to the notification service.
///
/// ### Responses
/// - `200 OK` with the updated tutorial-quiz
/// - `404 Not Found` if the course or tutorial-quiz does not exist
/// - `422 Unprocessable Entity` for a malformed body
pub async fn update_tutorial_quiz(
    State(app_state): State<AppState>,
    Path((course_id, tutorial_quiz_id)): Path<(String, String)>,
    Json(settings): Json<TutorialQuizSettings>,
) -> Response {
    match app_state
        .store()
        .update_settings(&course_id, &tutorial_quiz_id, settings)
        .await
    {
        Ok(tq) => ApiResponse::success(tq, "Tutorial quiz updated").with_status(StatusCode::OK),
        Err(err) => store_error(err, "update tutorial quiz"),
    }
}
