//! Application error taxonomy.
//!
//! Every failure a request can end in is an [`AppError`]: an HTTP status, an
//! [`ErrorKind`] that decides the response body, and the underlying
//! [`anyhow::Error`] for logging. Any error convertible into `anyhow::Error`
//! becomes an internal error through `?`, so store and library failures need
//! no explicit mapping at the handler boundary.
//!
//! | Kind | Status | Body |
//! |------|--------|------|
//! | `Validation` | 400 | `{"errors": [FieldError, ...]}` |
//! | `DuplicateEmail` | 400 | `{"error": ...}` |
//! | `BadCredentials` | 400 | `{"success": false, "error": ...}` |
//! | `BadRequest` | 400 | `{"error": ...}` |
//! | `Unauthenticated` | 401 | `{"error": ...}` |
//! | `Forbidden` | 401 | `{"error": ...}` |
//! | `NotFound` | 404 | `{"error": ...}` |
//! | `Internal` | 500 | `{"error": "Internal Server Error. Please try again!"}` |
//!
//! Internal errors never leak their detail to the client; the detail is
//! logged instead.

use anyhow::{Error, anyhow};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use utoipa::ToSchema;
use validator::ValidationErrors;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error. Please try again!";
pub const DUPLICATE_EMAIL_MESSAGE: &str = "An user with this email already exists!";
pub const BAD_CREDENTIALS_MESSAGE: &str = "Please try to login using correct credentials!";
pub const UNAUTHENTICATED_MESSAGE: &str = "Please authenticate using a valid token";
pub const NOT_FOUND_MESSAGE: &str = "Not Found!";
pub const FORBIDDEN_MESSAGE: &str = "Not Allowed!";

/// A single failed field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    /// The rejected input value. Omitted for secret fields.
    #[serde(skip_serializing_if = "Value::is_null")]
    #[schema(value_type = Object)]
    pub value: Value,
    pub msg: String,
    pub param: String,
    pub location: String,
}

/// The category of an [`AppError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    Validation(Vec<FieldError>),
    DuplicateEmail,
    BadCredentials,
    BadRequest,
    Unauthenticated,
    Forbidden,
    NotFound,
    Internal,
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub kind: ErrorKind,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, kind: ErrorKind, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            kind,
            error: err.into(),
        }
    }

    pub fn validation(fields: Vec<FieldError>) -> Self {
        let summary = fields
            .iter()
            .map(|f| f.msg.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Self::new(
            StatusCode::BAD_REQUEST,
            ErrorKind::Validation(fields),
            anyhow!(summary),
        )
    }

    pub fn from_validation(errors: &ValidationErrors) -> Self {
        Self::validation(field_errors(errors))
    }

    pub fn duplicate_email() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            ErrorKind::DuplicateEmail,
            anyhow!(DUPLICATE_EMAIL_MESSAGE),
        )
    }

    pub fn bad_credentials() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            ErrorKind::BadCredentials,
            anyhow!(BAD_CREDENTIALS_MESSAGE),
        )
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, ErrorKind::BadRequest, err)
    }

    pub fn unauthenticated() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            ErrorKind::Unauthenticated,
            anyhow!(UNAUTHENTICATED_MESSAGE),
        )
    }

    /// The caller is authenticated but does not own the resource. Reported
    /// as 401, not 403.
    pub fn forbidden() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            ErrorKind::Forbidden,
            anyhow!(FORBIDDEN_MESSAGE),
        )
    }

    pub fn not_found() -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            ErrorKind::NotFound,
            anyhow!(NOT_FOUND_MESSAGE),
        )
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ErrorKind::Internal, err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match &self.kind {
            ErrorKind::Validation(fields) => json!({ "errors": fields }),
            ErrorKind::BadCredentials => json!({
                "success": false,
                "error": self.error.to_string()
            }),
            ErrorKind::Internal => {
                tracing::error!(error = %format!("{:#}", self.error), "Internal server error");
                json!({ "error": INTERNAL_ERROR_MESSAGE })
            }
            _ => json!({ "error": self.error.to_string() }),
        };

        (self.status, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

/// Flattens validator output into per-field errors.
///
/// Fields are reported in name order so the response is deterministic; every
/// failed rule of a field yields its own entry.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<_> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| (field.to_string(), errs))
        .collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter()
                .map(|error| {
                    let value = if field.contains("password") {
                        Value::Null
                    } else {
                        error.params.get("value").cloned().unwrap_or(Value::Null)
                    };

                    FieldError {
                        value,
                        msg: error
                            .message
                            .as_ref()
                            .map(|msg| msg.to_string())
                            .unwrap_or_else(|| format!("{} is invalid", field)),
                        param: field.clone(),
                        location: "body".to_string(),
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect()
}
