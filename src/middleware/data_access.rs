//! Data-access gate.
//!
//! A second authorization tier independent of role: the per-user
//! `data_access` flag, granted and revoked by administrators. The gate
//! re-resolves the identity itself (token verification plus store lookup), so
//! it can be layered on a route with or without the role gate.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub async fn require_data_access(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let (mut parts, body) = req.into_parts();

    let auth_user = match AuthUser::from_request_parts(&mut parts, &state).await {
        Ok(user) => user,
        Err(err) => return err.into_response(),
    };

    if !auth_user.data_access {
        return AppError::forbidden("User have no data access").into_response();
    }

    next.run(Request::from_parts(parts, body)).await
}
