use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A single telemetry sample pushed by a sensor.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct SensorReading {
    pub id: Uuid,
    pub sensor: String,
    pub value: f64,
    pub unit: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RecordReadingRequest {
    #[validate(length(min = 1, message = "Sensor name is required"))]
    pub sensor: String,
    pub value: f64,
    pub unit: Option<String>,
}
