use crate::{
    response::ApiResponse,
    routes::common::{MarksQuery, csv_download, store_error},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
};
use marker::{
    aggregate::by_student,
    report::{MarkDisplay, project_display},
    types::Member,
};
use serde::Serialize;
use util::state::AppState;

#[derive(Debug, Serialize)]
struct StudentMarks<'s, 'a> {
    student: &'s Member,
    #[serde(flatten)]
    marks: MarkDisplay<'s, 'a>,
}

/// GET /api/courses/{course_id}/students/{student_id}/marks
///
/// One row per tutorial-quiz of the course in which the student belongs to a group. The row
/// score is the group's score; `total` is the student's course total.
///
/// ### Query
/// - `export=true` → `text/csv` attachment `marks.csv` with columns
///   `Quiz, Tutorial, Group, Mark`.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "student": { "id": "s1", "name": { "first": "Ada", "last": "Lovelace" }, "username": "lovelac1" },
///     "columns": ["Quiz", "Tutorial", "Group", "Mark"],
///     "scope": "student",
///     "rows": [ ... ],
///     "total": 6.0
///   },
///   "message": "Student marks retrieved"
/// }
/// ```
/// - `404 Not Found` if the course or student does not exist
pub async fn get_student_marks(
    State(app_state): State<AppState>,
    Path((course_id, student_id)): Path<(String, String)>,
    Query(query): Query<MarksQuery>,
) -> Response {
    let store = app_state.store();
    let student = match store.student(&course_id, &student_id).await {
        Ok(student) => student,
        Err(err) => return store_error(err, "load student"),
    };
    let tutorial_quizzes = match store.course_tutorial_quizzes(&course_id).await {
        Ok(tqs) => tqs,
        Err(err) => return store_error(err, "load student marks"),
    };

    let sheet = by_student(&course_id, &tutorial_quizzes, &student.id);
    if query.wants_export() {
        return csv_download(&sheet);
    }
    let data = StudentMarks {
        student: &student,
        marks: project_display(&sheet),
    };
    ApiResponse::success(data, "Student marks retrieved").with_status(StatusCode::OK)
}
