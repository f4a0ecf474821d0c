//! Helpers shared by the course route handlers: query parameters, error mapping and the CSV
//! download response.

use crate::response::ApiResponse;
use axum::{
    http::{
        StatusCode,
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};
use marker::aggregate::MarkSheet;
use marker::report::{EXPORT_CONTENT_TYPE, EXPORT_FILENAME, project_export};
use serde::Deserialize;
use tracing::{error, warn};
use util::store::StoreError;

/// `?export=true` switches a marks endpoint from JSON to a CSV download. Any other value,
/// or none, keeps the JSON view.
#[derive(Debug, Default, Deserialize)]
pub struct MarksQuery {
    #[serde(default)]
    pub export: Option<String>,
}

impl MarksQuery {
    pub fn wants_export(&self) -> bool {
        self.export.as_deref() == Some("true")
    }
}

/// Maps a store failure onto the response envelope.
///
/// Unknown ids are a 404 carrying the lookup message; anything else is logged and reported as
/// a generic 500.
pub fn store_error(err: StoreError, action: &str) -> Response {
    if err.is_not_found() {
        warn!(error = %err, "{action}: not found");
        ApiResponse::<()>::error(err.to_string()).with_status(StatusCode::NOT_FOUND)
    } else {
        error!(error = %err, "{action} failed");
        ApiResponse::<()>::error(format!("Failed to {action}"))
            .with_status(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// 404 for an id the hydrated graph does not contain.
pub fn not_found(entity: &str, id: &str) -> Response {
    ApiResponse::<()>::error(format!("{entity} not found: {id}")).with_status(StatusCode::NOT_FOUND)
}

/// Renders a mark sheet as a `marks.csv` attachment.
pub fn csv_download(sheet: &MarkSheet<'_>) -> Response {
    match project_export(sheet).to_csv() {
        Ok(csv) => (
            StatusCode::OK,
            [
                (CONTENT_TYPE, EXPORT_CONTENT_TYPE.to_string()),
                (
                    CONTENT_DISPOSITION,
                    format!("attachment; filename={EXPORT_FILENAME}"),
                ),
            ],
            csv,
        )
            .into_response(),
        Err(err) => {
            error!(error = %err, "failed to export marks");
            ApiResponse::<()>::error("Failed to export marks")
                .with_status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
