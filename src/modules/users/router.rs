use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{delete_all_users, get_profile, get_users, grant_access, revoke_access};
use crate::state::AppState;

/// Routes requiring the admin role gate; layered in the root router.
pub fn init_users_admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_users).delete(delete_all_users))
        .route("/grant-access", post(grant_access))
        .route("/revoke-access", post(revoke_access))
}

/// Routes any authenticated user may call.
pub fn init_profile_router() -> Router<AppState> {
    Router::new().route("/profile", get(get_profile))
}
