use axum::{Json, extract::State, http::StatusCode};

use super::model::{RecordReadingRequest, SensorReading};
use super::service::SensorService;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// List recent sensor readings (requires data access)
#[utoipa::path(
    get,
    path = "/api/sensors",
    responses(
        (status = 200, description = "Most recent readings", body = Vec<SensorReading>),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Caller has no data access", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Sensors"
)]
pub async fn get_readings(
    State(state): State<AppState>,
) -> Result<Json<Vec<SensorReading>>, AppError> {
    let readings = SensorService::list_readings(&state.db).await?;
    Ok(Json(readings))
}

/// Record a sensor reading (requires data access)
#[utoipa::path(
    post,
    path = "/api/sensors",
    request_body = RecordReadingRequest,
    responses(
        (status = 201, description = "Reading stored", body = SensorReading),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Caller has no data access", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Sensors"
)]
pub async fn record_reading(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RecordReadingRequest>,
) -> Result<(StatusCode, Json<SensorReading>), AppError> {
    let reading = SensorService::record_reading(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(reading)))
}
