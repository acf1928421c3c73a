use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, OptionalFromRequest, Request, rejection::JsonRejection},
    http::header,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use cloudpad_core::AppError;

/// JSON body extractor that runs the payload's `validator` rules.
///
/// Every failed rule is reported at once as a 400 `{"errors": [...]}`;
/// a body that is not JSON at all is a plain 400 `{"error": ...}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = <Json<T> as FromRequest<S>>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                JsonRejection::MissingJsonContentType(_) => AppError::bad_request(anyhow!(
                    "Missing 'Content-Type: application/json' header"
                )),
                JsonRejection::JsonDataError(_) => {
                    AppError::bad_request(anyhow!("Invalid field type in request"))
                }
                _ => AppError::bad_request(anyhow!("Invalid request body")),
            })?;

        value
            .validate()
            .map_err(|errors| AppError::from_validation(&errors))?;

        Ok(ValidatedJson(value))
    }
}

/// `Option<ValidatedJson<T>>` is `None` when the request carries no
/// `Content-Type`, so a body-less request reaches the handler. A body that
/// is declared but invalid is still rejected.
impl<T, S> OptionalFromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Option<Self>, Self::Rejection> {
        if !req.headers().contains_key(header::CONTENT_TYPE) {
            return Ok(None);
        }

        <Self as FromRequest<S>>::from_request(req, state)
            .await
            .map(Some)
    }
}
