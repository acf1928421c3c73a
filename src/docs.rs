use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use cloudpad_core::FieldError;
use cloudpad_models::{
    AuthTokenResponse, CreateNoteRequest, DeleteNoteResponse, LoginRequest, Note, NoteId,
    RegisterRequest, UpdateNoteRequest, UpdateNoteResponse, User, UserId,
};

use crate::middleware::auth::AUTH_TOKEN_HEADER;
use crate::modules::auth::controller::{
    BadCredentialsResponse, ErrorResponse, ValidationErrorResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::create_user,
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::user_details,
        crate::modules::notes::controller::fetch_all_notes,
        crate::modules::notes::controller::add_note,
        crate::modules::notes::controller::update_note,
        crate::modules::notes::controller::delete_note,
    ),
    components(
        schemas(
            UserId,
            NoteId,
            User,
            Note,
            RegisterRequest,
            LoginRequest,
            AuthTokenResponse,
            CreateNoteRequest,
            UpdateNoteRequest,
            UpdateNoteResponse,
            DeleteNoteResponse,
            FieldError,
            ErrorResponse,
            ValidationErrorResponse,
            BadCredentialsResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login and the current user"),
        (name = "Notes", description = "Per-user note management")
    ),
    info(
        title = "Cloudpad API",
        version = "0.1.0",
        description = "A multi-user notes backend built with Rust, Axum, and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "auth_token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(AUTH_TOKEN_HEADER))),
            )
        }
    }
}
