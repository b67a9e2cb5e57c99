//! Authenticate gate.
//!
//! [`AuthUser`] is the request-scoped authenticated identity. It is produced
//! only by this extractor, never from client input: the session cookie is
//! read, the token verified, and the user row resolved by id. Handlers and
//! the other gates take it as an extractor argument; each use re-runs the
//! full resolution, so no gate depends on another having run first.

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;
use sqlx::FromRow;
use uuid::Uuid;

use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Name of the HTTP-only cookie carrying the session token.
pub const SESSION_COOKIE: &str = "jwt";

/// The authenticated identity attached to a request.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct AuthUser {
    pub id: Uuid,
    pub role: UserRole,
    pub data_access: bool,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let token = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_owned())
            .ok_or_else(|| AppError::unauthenticated("Please Login"))?;

        let claims = verify_token(&token, &state.jwt_config)
            .map_err(|_| AppError::unauthenticated("Login again."))?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::unauthenticated("Login again."))?;

        // The token only proves identity; role and data_access always come
        // from the store's current view.
        sqlx::query_as::<_, AuthUser>("SELECT id, role, data_access FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&state.db)
            .await?
            .ok_or_else(|| AppError::unauthenticated("Login again."))
    }
}
