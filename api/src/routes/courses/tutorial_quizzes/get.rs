use crate::{
    response::ApiResponse,
    routes::common::{MarksQuery, csv_download, store_error},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
};
use marker::{aggregate::by_tutorial_quiz, report::project_display};
use util::state::AppState;

/// GET /api/courses/{course_id}/tutorial-quizzes
///
/// Lists every tutorial-quiz of the course in persisted order, hydrated as in
/// [`get_tutorial_quiz`] and with the same group ordering.
///
/// ### Responses
/// - `200 OK` with an array of tutorial-quizzes (empty when the course has none)
/// - `404 Not Found` if the course does not exist
pub async fn list_tutorial_quizzes(
    State(app_state): State<AppState>,
    Path(course_id): Path<String>,
) -> Response {
    match app_state.store().course_tutorial_quizzes(&course_id).await {
        Ok(mut tqs) => {
            for tq in &mut tqs {
                tq.groups.sort_by_key(|g| g.ordinal());
            }
            ApiResponse::success(tqs, "Tutorial quizzes retrieved").with_status(StatusCode::OK)
        }
        Err(err) => store_error(err, "list tutorial quizzes"),
    }
}

/// GET /api/courses/{course_id}/tutorial-quizzes/{tutorial_quiz_id}
///
/// Returns the hydrated tutorial-quiz: tutorial, quiz with its visible questions, settings, and
/// groups with members and responses. Groups are ordered by the integer value of their name
/// (non-numeric names sort first), as shown on the conduct page.
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found` if the course or tutorial-quiz does not exist
pub async fn get_tutorial_quiz(
    State(app_state): State<AppState>,
    Path((course_id, tutorial_quiz_id)): Path<(String, String)>,
) -> Response {
    match app_state
        .store()
        .tutorial_quiz(&course_id, &tutorial_quiz_id)
        .await
    {
        Ok(mut tq) => {
            tq.groups.sort_by_key(|g| g.ordinal());
            ApiResponse::success(tq, "Tutorial quiz retrieved").with_status(StatusCode::OK)
        }
        Err(err) => store_error(err, "load tutorial quiz"),
    }
}

/// GET /api/courses/{course_id}/tutorial-quizzes/{tutorial_quiz_id}/marks
///
/// Marks for every member of every group. All members of a group share the group score;
/// `groupResult` lists the group's points per question in quiz order, `null` where the group
/// did not respond.
///
/// ### Query
/// - `export=true` → `text/csv` attachment `marks.csv` with columns
///   `Username, UTORid, Quiz, Tutorial, Group, Mark, Q<n> [<i>]...`.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "columns": ["Username", "UTORid", "Quiz", "Tutorial", "Group", "Mark", "Q1 [0]", "Q2 [1]"],
///     "scope": "tutorial_quiz",
///     "questions": [ ... ],
///     "rows": [
///       {
///         "tutorialQuiz": "tq1",
///         "tutorial": { "id": "t1", "name": "0101" },
///         "quiz": { "id": "quiz1", "name": "Week 1" },
///         "group": { "id": "g1", "name": "2" },
///         "member": { "id": "s1", "name": { "first": "Ada", "last": "Lovelace" }, "username": "lovelac1" },
///         "score": 3.0,
///         "groupResult": [1.0, 2.0]
///       }
///     ],
///     "total": 3.0
///   },
///   "message": "Tutorial quiz marks retrieved"
/// }
/// ```
/// - `404 Not Found` if the course or tutorial-quiz does not exist
pub async fn get_tutorial_quiz_marks(
    State(app_state): State<AppState>,
    Path((course_id, tutorial_quiz_id)): Path<(String, String)>,
    Query(query): Query<MarksQuery>,
) -> Response {
    let tq = match app_state
        .store()
        .tutorial_quiz(&course_id, &tutorial_quiz_id)
        .await
    {
        Ok(tq) => tq,
        Err(err) => return store_error(err, "load tutorial quiz marks"),
    };

    let sheet = by_tutorial_quiz(&tq);
    if query.wants_export() {
        return csv_download(&sheet);
    }
    ApiResponse::success(project_display(&sheet), "Tutorial quiz marks retrieved")
        .with_status(StatusCode::OK)
}
