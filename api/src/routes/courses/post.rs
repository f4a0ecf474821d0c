use crate::{
    response::ApiResponse,
    routes::common::{MarksQuery, csv_download, store_error},
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
};
use marker::{aggregate::by_course, report::project_display};
use serde::Deserialize;
use util::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseMarksRequest {
    #[serde(default)]
    pub tutorial_quizzes: Vec<String>,
}

/// POST /api/courses/{course_id}/marks
///
/// Marks for a selected set of tutorial-quizzes of the course, one row per group member.
///
/// ### Request Body
/// ```json
/// { "tutorialQuizzes": ["tq1", "tq2"] }
/// ```
///
/// Ids that are not tutorial-quizzes of this course are ignored; an empty selection yields no
/// rows and a total of 0.
///
/// ### Query
/// - `export=true` → `text/csv` attachment `marks.csv` with columns
///   `Username, Quiz, Tutorial, Group, Mark`.
///
/// ### Responses
/// - `200 OK` with the marks display model, or the CSV body
/// - `404 Not Found` if the course does not exist
pub async fn get_course_marks(
    State(app_state): State<AppState>,
    Path(course_id): Path<String>,
    Query(query): Query<MarksQuery>,
    Json(req): Json<CourseMarksRequest>,
) -> Response {
    let tutorial_quizzes = match app_state
        .store()
        .selected_tutorial_quizzes(&course_id, &req.tutorial_quizzes)
        .await
    {
        Ok(tqs) => tqs,
        Err(err) => return store_error(err, "load course marks"),
    };

    let sheet = by_course(&tutorial_quizzes);
    if query.wants_export() {
        return csv_download(&sheet);
    }
    ApiResponse::success(project_display(&sheet), "Course marks retrieved")
        .with_status(StatusCode::OK)
}
