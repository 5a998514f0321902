use crate::resize::codec::CodecError;
use crate::resize::responses::{ErrorResponse, ProcessingErrorResponse};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;
use tokio::task::JoinError;

#[derive(Debug, Error)]
pub enum ResizeError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("No image provided")]
    NoImage,
    #[error("Invalid percentage value")]
    InvalidPercentage,
    #[error("Invalid form data")]
    InvalidForm { status: StatusCode, reason: String },
    #[error("Unable to get image dimensions")]
    MissingDimensions,
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error("Image processing task failed: {0}")]
    Task(#[from] JoinError),
}

impl ResizeError {
    pub fn status(&self) -> StatusCode {
        match self {
            ResizeError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ResizeError::NoImage | ResizeError::InvalidPercentage => StatusCode::BAD_REQUEST,
            ResizeError::InvalidForm { status, .. } => *status,
            ResizeError::MissingDimensions | ResizeError::Codec(_) | ResizeError::Task(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn is_processing_error(&self) -> bool {
        self.status().is_server_error()
    }
}

impl IntoResponse for ResizeError {
    fn into_response(self) -> Response {
        let status = self.status();
        if !self.is_processing_error() {
            if let ResizeError::InvalidForm { reason, .. } = &self {
                tracing::debug!(reason = %reason, "Rejected a malformed resize form.");
            }
            let body = ErrorResponse {
                error: self.to_string(),
            };
            return (status, Json(body)).into_response();
        }

        tracing::error!(error = ?self, "Error processing image.");
        let body = ProcessingErrorResponse {
            error: String::from(ProcessingErrorResponse::SUMMARY),
            message: self.to_string(),
            details: format!("{:?}", self),
        };
        (status, Json(body)).into_response()
    }
}
