use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Envelope for every JSON body the service returns.
///
/// ```json
/// {
///   "success": true,
///   "data": { "groupId": "g1", "questions": [ ... ], "total": 3 },
///   "message": "Group review retrieved"
/// }
/// ```
///
/// Failures carry `T::default()` as `data`:
///
/// ```json
/// {
///   "success": false,
///   "data": null,
///   "message": "group not found: g9"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            data: T::default(),
            message: message.into(),
        }
    }

    /// Serializes the envelope as the body of a response with `status`.
    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}
