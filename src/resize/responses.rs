use crate::resize::service::ResizeResult;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

pub const OUTPUT_CONTENT_TYPE: &str = "image/jpeg";

/// Body of every client-side rejection.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body returned when decoding, resampling or encoding fails.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessingErrorResponse {
    pub error: String,
    pub message: String,
    pub details: String,
}

impl ProcessingErrorResponse {
    pub const SUMMARY: &'static str = "Error processing image";
}

impl IntoResponse for ResizeResult {
    fn into_response(self) -> Response {
        // Sanitized names only contain header-safe characters.
        let content_disposition =
            HeaderValue::from_str(&format!("attachment; filename=\"{}\"", self.download_filename))
                .unwrap_or_else(|_| HeaderValue::from_static("attachment"));
        (
            StatusCode::OK,
            [
                (CONTENT_TYPE, HeaderValue::from_static(OUTPUT_CONTENT_TYPE)),
                (CONTENT_DISPOSITION, content_disposition),
            ],
            self.encoded_bytes,
        )
            .into_response()
    }
}
