use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{command_actuator, get_actuators, register_actuator};
use crate::state::AppState;

/// Read side, gated by data access in the root router.
pub fn init_actuators_router() -> Router<AppState> {
    Router::new().route("/", get(get_actuators))
}

/// Mutations, gated by the admin role in the root router.
pub fn init_actuators_admin_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_actuator))
        .route("/{id}/command", post(command_actuator))
}
