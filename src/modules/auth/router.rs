use axum::{Router, middleware, routing::post};

use crate::middleware::auth::require_auth;
use crate::state::AppState;

use super::controller::{create_user, login, user_details};

pub fn init_auth_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/user-details", post(user_details))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
        .route("/create-user", post(create_user))
        .route("/login", post(login))
}
