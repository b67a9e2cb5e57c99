//! Application error type and HTTP mapping.
//!
//! Every handler boundary returns [`AppError`]; the [`IntoResponse`] impl is
//! the single place failures are converted into the JSON error envelope, so
//! nothing propagates to a framework error page. Validation failures carry
//! field-scoped messages (`{"errors": {field: msg}}`), everything else a flat
//! `{"message": ...}`.

use std::collections::HashMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    /// Field-scoped validation failure: duplicate email, schema violation.
    Validation(HashMap<String, String>),
    /// Missing/invalid/expired token, unknown user, bad credentials.
    Unauthenticated(String),
    /// Role mismatch, missing data-access flag, revoking an admin.
    Forbidden(String),
    /// Lookup miss.
    NotFound(String),
    /// Store or library failure. The cause is logged, never sent to clients.
    Internal(anyhow::Error),
}

impl AppError {
    pub fn validation(errors: HashMap<String, String>) -> Self {
        Self::Validation(errors)
    }

    /// Single-field validation error.
    pub fn field(field: &str, message: &str) -> Self {
        Self::Validation(HashMap::from([(field.to_string(), message.to_string())]))
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::Internal(err.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            Self::Validation(errors) => json!({ "errors": errors }),
            Self::Unauthenticated(message)
            | Self::Forbidden(message)
            | Self::NotFound(message) => json!({ "message": message }),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal error");
                json!({ "message": "Internal server error" })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
