use marker::error::MarkerError;

/// Failures of the quiz store.
///
/// Lookups that miss surface as [`MarkerError::MissingInput`] wrapped in
/// [`StoreError::Marker`]; everything else concerns loading the seed document.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid seed document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("seed file is {size} bytes, limit is {limit}")]
    TooLarge { size: u64, limit: u64 },

    #[error(transparent)]
    Marker(#[from] MarkerError),
}

impl StoreError {
    /// True when the request referenced an entity that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Marker(e) if e.is_missing_input())
    }
}
