//! User data models and DTOs.
//!
//! [`User`] is the public projection of the `users` row: it deliberately has
//! no password column, so no response path can leak a hash. The stored hash
//! only ever surfaces inside service-local structs that are never serialized.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Route-eligibility tag. Orthogonal to the per-user data-access flag.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema, Default,
)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    User,
}

/// A registered principal, as exposed to clients.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
    pub data_access: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for grant-access / revoke-access: the target user's email.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AccessRequest {
    #[validate(email(message = "Please enter a valid email"))]
    pub email: String,
}

/// Confirmation body for the destructive delete-all endpoint.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct DeleteAllRequest {
    #[serde(default)]
    pub confirm: bool,
}
