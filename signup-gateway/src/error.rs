//! Error types for the gateway crate.

use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use signup_core::DirectoryError;

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// A membership operation was rejected by the directory.
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// The request is missing a parameter or carries an invalid value.
    #[error("{0}")]
    InvalidRequest(String),
}

impl From<PathRejection> for GatewayError {
    fn from(rejection: PathRejection) -> Self {
        GatewayError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for GatewayError {
    fn from(rejection: QueryRejection) -> Self {
        GatewayError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        // Unknown activities and roster conflicts are both client errors.
        let status = match &self {
            GatewayError::Directory(_) | GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };
        (status, Json(json!({"detail": self.to_string()}))).into_response()
    }
}
