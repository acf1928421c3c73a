//! Authentication request and response DTOs.
//!
//! Field rules are declared with `validator` and checked by the API's
//! validated JSON extractor before any handler logic runs. Missing fields
//! deserialize to empty strings so that they are reported by the same rules
//! as present-but-invalid ones.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use validator::Validate;

/// Registration request.
#[derive(Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 3, message = "Enter a valid name!"))]
    #[schema(example = "Ann")]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "Enter a valid email!"))]
    #[schema(example = "a@x.com")]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 5, message = "Password must be of atleast 5 characters!"))]
    #[schema(example = "secret")]
    pub password: String,
}

/// Login request with email and password.
#[derive(Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(email(message = "Enter a valid email!"))]
    #[schema(example = "a@x.com")]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password cannot be blank!"))]
    #[schema(example = "secret")]
    pub password: String,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Successful registration or login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthTokenResponse {
    pub success: bool,
    #[serde(rename = "authToken")]
    pub auth_token: String,
}

impl AuthTokenResponse {
    pub fn new(auth_token: String) -> Self {
        Self {
            success: true,
            auth_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_register_request() {
        let dto: RegisterRequest = serde_json::from_str(
            r#"{"name":"Ann","email":"a@x.com","password":"secret"}"#,
        )
        .unwrap();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_register_request_collects_every_failure() {
        let dto: RegisterRequest =
            serde_json::from_str(r#"{"name":"An","email":"nope","password":"1234"}"#).unwrap();
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();

        assert_eq!(fields.len(), 3);
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_missing_fields_fail_validation() {
        let dto: RegisterRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(dto.validate().unwrap_err().field_errors().len(), 3);
    }

    #[test]
    fn test_login_requires_password() {
        let dto: LoginRequest = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();

        assert_eq!(fields.len(), 1);
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_debug_hides_password() {
        let dto: LoginRequest =
            serde_json::from_str(r#"{"email":"a@x.com","password":"hunter22"}"#).unwrap();
        assert!(!format!("{:?}", dto).contains("hunter22"));
    }

    #[test]
    fn test_token_response_field_name() {
        let json = serde_json::to_value(AuthTokenResponse::new("t".into())).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["authToken"], "t");
    }
}
