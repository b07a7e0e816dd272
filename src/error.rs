/*
 * Responsibility
 * - Common AppError for router-level rejections
 * - IntoResponse impl (HTTP status / JSON error body)
 * - The health handler itself never returns one of these
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("not found: {path}")]
    NotFound { path: String },
    #[error("method {method} not allowed")]
    MethodNotAllowed { method: String },
    #[error("request body too large")]
    PayloadTooLarge,
    #[error("request timed out")]
    RequestTimeout,
    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn method_not_allowed(method: impl Into<String>) -> Self {
        Self::MethodNotAllowed {
            method: method.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::NotFound { .. } => "NOT_FOUND",
            AppError::MethodNotAllowed { .. } => "METHOD_NOT_ALLOWED",
            AppError::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            AppError::RequestTimeout => "REQUEST_TIMEOUT",
            AppError::Internal => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_variants_to_status_codes() {
        assert_eq!(AppError::not_found("/x").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::method_not_allowed("POST").status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            AppError::PayloadTooLarge.status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(AppError::RequestTimeout.status(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(AppError::Internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn messages_name_the_offending_input() {
        assert_eq!(
            AppError::not_found("/api/healthx").to_string(),
            "not found: /api/healthx"
        );
        assert_eq!(
            AppError::method_not_allowed("POST").to_string(),
            "method POST not allowed"
        );
    }

    #[test]
    fn response_carries_status() {
        let response = AppError::RequestTimeout.into_response();
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }
}
