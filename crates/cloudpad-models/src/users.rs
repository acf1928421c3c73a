//! User domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use utoipa::ToSchema;

use crate::ids::UserId;

/// A registered user, as returned by the API.
///
/// Carries no password material; see [`UserCredentials`] for the row used
/// during login.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// A user row including the stored password hash.
#[derive(FromRow, Clone)]
pub struct UserCredentials {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl UserCredentials {
    pub fn into_user(self) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
            created_at: self.created_at,
        }
    }
}

impl fmt::Debug for UserCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCredentials")
            .field("id", &self.id)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Input to the credential store when registering a user.
#[derive(Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> UserCredentials {
        UserCredentials {
            id: UserId::new(),
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            password: "$2b$10$abcdefghijklmnopqrstuuN0tARealHashAtAll0123456789abc".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_into_user_drops_password() {
        let creds = credentials();
        let id = creds.id;
        let user = creds.into_user();

        assert_eq!(user.id, id);
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["name"], "Ann");
    }

    #[test]
    fn test_debug_hides_hash() {
        let rendered = format!("{:?}", credentials());
        assert!(!rendered.contains("$2b$"));
    }
}
