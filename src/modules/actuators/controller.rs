use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use super::model::{Actuator, CommandRequest, RegisterActuatorRequest};
use super::service::ActuatorService;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// List actuators and their current state (requires data access)
#[utoipa::path(
    get,
    path = "/api/actuators",
    responses(
        (status = 200, description = "All registered actuators", body = Vec<Actuator>),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Caller has no data access", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Actuators"
)]
pub async fn get_actuators(State(state): State<AppState>) -> Result<Json<Vec<Actuator>>, AppError> {
    let actuators = ActuatorService::list(&state.db).await?;
    Ok(Json(actuators))
}

/// Register an actuator (admin only)
#[utoipa::path(
    post,
    path = "/api/actuators/register",
    request_body = RegisterActuatorRequest,
    responses(
        (status = 201, description = "Actuator registered", body = Actuator),
        (status = 400, description = "Validation error or duplicate name"),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Actuators"
)]
pub async fn register_actuator(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterActuatorRequest>,
) -> Result<(StatusCode, Json<Actuator>), AppError> {
    let actuator = ActuatorService::register(&state.db, &dto.name).await?;
    Ok((StatusCode::CREATED, Json(actuator)))
}

/// Switch an actuator on or off (admin only)
#[utoipa::path(
    post,
    path = "/api/actuators/{id}/command",
    params(("id" = Uuid, Path, description = "Actuator id")),
    request_body = CommandRequest,
    responses(
        (status = 200, description = "New actuator state", body = Actuator),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "Unknown actuator", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Actuators"
)]
pub async fn command_actuator(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<CommandRequest>,
) -> Result<Json<Actuator>, AppError> {
    let actuator = ActuatorService::set_state(&state.db, id, dto.enabled).await?;
    Ok(Json(actuator))
}
