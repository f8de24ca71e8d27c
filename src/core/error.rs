use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::core::validation::ValidationError;
use crate::download::error::DownloadError;

/// Centralized error types for the application
///
/// Every failure on the request path is converted to this enum. The variant
/// decides the HTTP status; the `Display` text becomes the `detail` field.
///
/// # Example
///
/// ```
/// use tubelink::core::error::AppError;
/// use tubelink::core::validation::ValidationError;
///
/// let err: AppError = ValidationError::NotYoutube.into();
/// assert_eq!(err.status_code().as_u16(), 400);
/// assert_eq!(err.to_string(), "Not a valid YouTube URL");
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// URL failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Mode other than "audio" or "video"
    #[error("Mode must be 'audio' or 'video'")]
    InvalidMode(String),

    /// Request body could not be decoded
    #[error("{0}")]
    BadRequest(String),

    /// yt-dlp failed or returned nothing usable
    #[error(transparent)]
    Download(#[from] DownloadError),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// HTTP status for this error: caller mistakes are 400, extraction failures are 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidMode(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Download(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short category label used in log lines
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation",
            AppError::InvalidMode(_) => "mode",
            AppError::BadRequest(_) => "request",
            AppError::Download(err) => err.subcategory(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(serde_json::json!({
            "detail": self.to_string()
        }));

        (status, body).into_response()
    }
}
