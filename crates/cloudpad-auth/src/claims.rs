//! Token claim structures.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// The identity carried inside a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserClaim {
    /// User ID
    pub id: String,
}

/// JWT claims for identity tokens.
///
/// The payload nests the user id under `user` so that tokens keep the shape
/// `{"user": {"id": "..."}}` that clients of the notes API already decode.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    pub user: UserClaim,
    /// Token issued-at timestamp (Unix timestamp)
    #[serde(default)]
    pub iat: usize,
    /// Token expiration timestamp, present only when expiry is configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<usize>,
}

impl Claims {
    pub fn new(user_id: Uuid, iat: usize, exp: Option<usize>) -> Self {
        Self {
            user: UserClaim {
                id: user_id.to_string(),
            },
            iat,
            exp,
        }
    }

    /// Parses the embedded user id. `None` if the claim is not a UUID.
    pub fn user_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.user.id).ok()
    }
}
