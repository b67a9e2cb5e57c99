use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::users::model::{User, UserRole};
use crate::utils::errors::AppError;

/// Whether a grant/revoke actually wrote to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    Updated,
    /// The flag was already in the target state; nothing was written.
    Unchanged,
}

pub struct UserService;

impl UserService {
    pub async fn get_users(db: &PgPool) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, email, role, data_access, created_at, updated_at
             FROM users ORDER BY created_at",
        )
        .fetch_all(db)
        .await?;

        Ok(users)
    }

    pub async fn get_user(db: &PgPool, id: Uuid) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "SELECT id, email, role, data_access, created_at, updated_at
             FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("user not found"))
    }

    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, role, data_access, created_at, updated_at
             FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(db)
        .await?;

        Ok(user)
    }

    /// Set the data-access flag for the user with `email`.
    ///
    /// Revocation is refused for admin targets; the role comparison happens
    /// before any mutation. Setting the flag to its current value performs no
    /// store write.
    #[instrument(skip(db))]
    pub async fn set_data_access(
        db: &PgPool,
        email: &str,
        grant: bool,
    ) -> Result<AccessOutcome, AppError> {
        let user = Self::find_by_email(db, email)
            .await?
            .ok_or_else(|| AppError::not_found("No user with this email address"))?;

        if !grant && user.role == UserRole::Admin {
            return Err(AppError::forbidden("You cannot revoke access of other admin."));
        }

        if user.data_access == grant {
            return Ok(AccessOutcome::Unchanged);
        }

        sqlx::query("UPDATE users SET data_access = $1, updated_at = now() WHERE id = $2")
            .bind(grant)
            .bind(user.id)
            .execute(db)
            .await?;

        tracing::info!(user_id = %user.id, grant, "data access changed");

        Ok(AccessOutcome::Updated)
    }

    #[instrument(skip(db))]
    pub async fn delete_all(db: &PgPool) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM users").execute(db).await?;

        tracing::warn!(deleted = result.rows_affected(), "all users deleted");

        Ok(result.rows_affected())
    }
}
