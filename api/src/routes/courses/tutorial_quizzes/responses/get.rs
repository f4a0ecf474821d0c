use crate::{
    response::ApiResponse,
    routes::common::{not_found, store_error},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use marker::review::build_group_review;
use util::state::AppState;

/// GET /api/courses/{course_id}/tutorial-quizzes/{tutorial_quiz_id}/groups/{group_id}/responses
///
/// The group review used for manual adjudication: every visible question of the quiz, in quiz
/// order, with the group's response, its score and the per-type verdict. Unanswered questions
/// appear with `"submitted": false` and a score of 0.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "groupId": "g1",
///     "groupName": "2",
///     "members": [ ... ],
///     "questions": [
///       {
///         "question": { "id": "q1", "number": 1, "type": "multiple choice", ... },
///         "response": { "responseId": "r1", "answer": ["A"], "points": 1.0, "submitted": true, ... },
///         "score": 1.0,
///         "results": { "kind": "choice", "outcomes": [ { "choice": "A", "expected": true, "given": true, "correct": true } ] }
///       }
///     ],
///     "total": 3.0
///   },
///   "message": "Group review retrieved"
/// }
/// ```
/// - `404 Not Found` if the course, tutorial-quiz or group does not exist
pub async fn get_group_responses(
    State(app_state): State<AppState>,
    Path((course_id, tutorial_quiz_id, group_id)): Path<(String, String, String)>,
) -> Response {
    let tq = match app_state
        .store()
        .tutorial_quiz(&course_id, &tutorial_quiz_id)
        .await
    {
        Ok(tq) => tq,
        Err(err) => return store_error(err, "load group review"),
    };

    let Some(group) = tq.groups.iter().find(|g| g.id == group_id) else {
        return not_found("group", &group_id);
    };

    let review = build_group_review(&tq.quiz.questions, group);
    ApiResponse::success(review, "Group review retrieved").with_status(StatusCode::OK)
}
