use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use super::model::Actuator;
use crate::utils::errors::AppError;

pub struct ActuatorService;

impl ActuatorService {
    pub async fn list(db: &PgPool) -> Result<Vec<Actuator>, AppError> {
        let actuators = sqlx::query_as::<_, Actuator>(
            "SELECT id, name, enabled, updated_at FROM actuators ORDER BY name",
        )
        .fetch_all(db)
        .await?;

        Ok(actuators)
    }

    pub async fn register(db: &PgPool, name: &str) -> Result<Actuator, AppError> {
        sqlx::query_as::<_, Actuator>(
            "INSERT INTO actuators (name)
             VALUES ($1)
             RETURNING id, name, enabled, updated_at",
        )
        .bind(name)
        .fetch_one(db)
        .await
        .map_err(|err| match err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::field("name", "that actuator is already registered")
            }
            other => AppError::internal(other),
        })
    }

    #[instrument(skip(db))]
    pub async fn set_state(db: &PgPool, id: Uuid, enabled: bool) -> Result<Actuator, AppError> {
        sqlx::query_as::<_, Actuator>(
            "UPDATE actuators SET enabled = $1, updated_at = now()
             WHERE id = $2
             RETURNING id, name, enabled, updated_at",
        )
        .bind(enabled)
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("actuator not found"))
    }
}
