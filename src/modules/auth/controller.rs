use axum::Json;
use axum::extract::State;
use tracing::instrument;
use utoipa::ToSchema;

use cloudpad_core::{AppError, FieldError};
use cloudpad_models::{AuthTokenResponse, LoginRequest, RegisterRequest, User};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::service::AuthService;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

#[derive(ToSchema)]
pub struct BadCredentialsResponse {
    pub success: bool,
    pub error: String,
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/auth/create-user",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered, token issued", body = AuthTokenResponse),
        (status = 400, description = "Validation failed or email already registered", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state))]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<Json<AuthTokenResponse>, AppError> {
    let token = AuthService::create_user(state.stores.users.as_ref(), dto, &state.jwt_config).await?;
    Ok(Json(AuthTokenResponse::new(token)))
}

/// Login and receive a token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthTokenResponse),
        (status = 400, description = "Invalid credentials", body = BadCredentialsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<AuthTokenResponse>, AppError> {
    let token = AuthService::login(state.stores.users.as_ref(), dto, &state.jwt_config).await?;
    Ok(Json(AuthTokenResponse::new(token)))
}

/// Get the authenticated user's profile
#[utoipa::path(
    post,
    path = "/api/auth/user-details",
    responses(
        (status = 200, description = "Current user", body = User),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication",
    security(("auth_token" = []))
)]
#[instrument(skip(state))]
pub async fn user_details(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<User>, AppError> {
    let user = AuthService::user_details(state.stores.users.as_ref(), auth_user.id).await?;
    Ok(Json(user))
}
