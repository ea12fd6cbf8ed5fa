use std::io;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Custom error types for the news page application.
///
/// The search and carousel cores are infallible: missing content degrades
/// to empty strings and degenerate configurations degrade to no-ops. These
/// variants exist for the HTTP and file-system boundary only.
#[derive(Debug)]
pub enum PortadaError {
    Io(io::Error),
    NotFound,
    InvalidPath,
    TemplateError(String),
}

impl From<io::Error> for PortadaError {
    fn from(err: io::Error) -> Self {
        PortadaError::Io(err)
    }
}

impl IntoResponse for PortadaError {
    fn into_response(self) -> Response {
        match self {
            PortadaError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            PortadaError::InvalidPath => (StatusCode::BAD_REQUEST, "Invalid path").into_response(),
            PortadaError::Io(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("I/O error: {}", e),
            )
                .into_response(),
            PortadaError::TemplateError(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Template error: {}", e),
            )
                .into_response(),
        }
    }
}
