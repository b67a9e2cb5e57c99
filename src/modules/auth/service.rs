use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::users::model::{User, UserRole};
use crate::utils::errors::AppError;
use crate::utils::jwt::create_token;
use crate::utils::password::{hash_password, verify_password};

use super::model::{LoginRequest, SignupRequest};

pub struct AuthService;

impl AuthService {
    /// Hash the password, insert the record, and issue a session token.
    ///
    /// Role and data-access are set by column defaults (`user`, `false`);
    /// nothing from the request body can influence them. A duplicate email
    /// surfaces as the store's unique-violation code and is translated into
    /// a field-level validation error.
    #[instrument(skip_all, fields(email = %dto.email))]
    pub async fn sign_up(
        db: &PgPool,
        dto: SignupRequest,
        jwt_config: &JwtConfig,
    ) -> Result<(User, String), AppError> {
        let hashed_password = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password)
             VALUES ($1, $2)
             RETURNING id, email, role, data_access, created_at, updated_at",
        )
        .bind(&dto.email)
        .bind(&hashed_password)
        .fetch_one(db)
        .await
        .map_err(|err| match err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::field("email", "that email is already registered")
            }
            other => AppError::internal(other),
        })?;

        let token = create_token(user.id, jwt_config)?;

        tracing::info!(user_id = %user.id, "new user created");

        Ok((user, token))
    }

    /// Check credentials and issue a session token.
    ///
    /// The stored hash never leaves this function: the returned [`User`] is
    /// the public projection.
    #[instrument(skip_all, fields(email = %dto.email))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<(User, String), AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: Uuid,
            email: String,
            role: UserRole,
            data_access: bool,
            password: String,
            created_at: DateTime<Utc>,
            updated_at: DateTime<Utc>,
        }

        let row = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, email, role, data_access, password, created_at, updated_at
             FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::unauthenticated("User not found."))?;

        if !verify_password(&dto.password, &row.password)? {
            return Err(AppError::unauthenticated("Incorrect Password."));
        }

        let token = create_token(row.id, jwt_config)?;

        let user = User {
            id: row.id,
            email: row.email,
            role: row.role,
            data_access: row.data_access,
            created_at: row.created_at,
            updated_at: row.updated_at,
        };

        Ok((user, token))
    }
}
