//! Role-based authorization gate.
//!
//! [`require_roles`] is the parameterized middleware: it is constructed once
//! per route set with a fixed list of allowed roles ([`require_admin`] is the
//! only wrapper this API needs). It resolves the identity itself via
//! [`AuthUser`], so it makes no assumption about other gates having run.
//!
//! [`check_role`] and [`check_any_role`] are the pure membership checks, also
//! usable from handler logic.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Middleware that admits only users whose role is in `allowed_roles`.
///
/// # Usage with axum::middleware::from_fn_with_state
///
/// ```rust,ignore
/// let admin_routes = init_users_router().route_layer(
///     middleware::from_fn_with_state(state.clone(), require_admin),
/// );
/// ```
pub async fn require_roles(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    allowed_roles: Vec<UserRole>,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;
    check_any_role(&auth_user, &allowed_roles)?;

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Gate for admin-only route sets.
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(State(state), req, next, vec![UserRole::Admin]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Check that the authenticated user has exactly `required_role`.
pub fn check_role(auth_user: &AuthUser, required_role: UserRole) -> Result<(), AppError> {
    if auth_user.role != required_role {
        return Err(AppError::forbidden("User not authorised"));
    }

    Ok(())
}

/// Check that the authenticated user's role is one of `allowed_roles`.
pub fn check_any_role(auth_user: &AuthUser, allowed_roles: &[UserRole]) -> Result<(), AppError> {
    if !allowed_roles.contains(&auth_user.role) {
        return Err(AppError::forbidden("User not authorised"));
    }

    Ok(())
}
