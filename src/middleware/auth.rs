use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};

use cloudpad_auth::verify_user_id;
use cloudpad_core::AppError;
use cloudpad_models::UserId;

use crate::metrics::track_auth_rejected;
use crate::state::AppState;

pub const AUTH_TOKEN_HEADER: &str = "auth-token";

/// The verified caller of a protected route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub id: UserId,
}

fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let custom = headers
        .get(AUTH_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|token| !token.is_empty());

    custom.or_else(|| {
        headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
    })
}

/// Rejects requests without a valid token before they reach the handler.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = extract_token(req.headers()) else {
        track_auth_rejected("missing_token");
        return Err(AppError::unauthenticated());
    };

    let id = verify_user_id(token, &state.jwt_config).inspect_err(|_| {
        tracing::debug!("Rejected request with an invalid token");
        track_auth_rejected("invalid_token");
    })?;

    req.extensions_mut().insert(AuthUser {
        id: UserId::from_uuid(id),
    });

    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .copied()
            .ok_or_else(AppError::unauthenticated)
    }
}
