use sqlx::PgPool;

use super::model::{RecordReadingRequest, SensorReading};
use crate::utils::errors::AppError;

/// Cap on list responses; newest samples first.
const LIST_LIMIT: i64 = 100;

pub struct SensorService;

impl SensorService {
    pub async fn list_readings(db: &PgPool) -> Result<Vec<SensorReading>, AppError> {
        let readings = sqlx::query_as::<_, SensorReading>(
            "SELECT id, sensor, value, unit, recorded_at
             FROM sensor_readings ORDER BY recorded_at DESC LIMIT $1",
        )
        .bind(LIST_LIMIT)
        .fetch_all(db)
        .await?;

        Ok(readings)
    }

    pub async fn record_reading(
        db: &PgPool,
        dto: RecordReadingRequest,
    ) -> Result<SensorReading, AppError> {
        let reading = sqlx::query_as::<_, SensorReading>(
            "INSERT INTO sensor_readings (sensor, value, unit)
             VALUES ($1, $2, $3)
             RETURNING id, sensor, value, unit, recorded_at",
        )
        .bind(&dto.sensor)
        .bind(dto.value)
        .bind(&dto.unit)
        .fetch_one(db)
        .await?;

        Ok(reading)
    }
}
