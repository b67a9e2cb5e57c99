//! Admin bootstrap.
//!
//! The public signup path always creates plain users, so the first admin has
//! to come from somewhere else: `fluxgate create-admin <email> <password>`.

use sqlx::PgPool;

use crate::modules::users::model::UserRole;
use crate::utils::password::hash_password;

pub async fn create_admin(
    db: &PgPool,
    email: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let hashed_password =
        hash_password(password).map_err(|e| format!("Failed to hash password: {:?}", e))?;

    let result = sqlx::query(
        "INSERT INTO users (email, password, role, data_access)
         VALUES ($1, $2, $3, true)
         ON CONFLICT (email) DO NOTHING",
    )
    .bind(email)
    .bind(hashed_password)
    .bind(UserRole::Admin)
    .execute(db)
    .await?;

    if result.rows_affected() == 0 {
        return Err("User with this email already exists".into());
    }

    Ok(())
}
