use axum::{Json, extract::State};

use super::model::{AccessRequest, DeleteAllRequest, User};
use super::service::{AccessOutcome, UserService};
use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::MessageResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// List all users (admin only)
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All registered users", body = Vec<User>),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Users"
)]
pub async fn get_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::get_users(&state.db).await?;
    Ok(Json(users))
}

/// Get the authenticated user's profile
#[utoipa::path(
    get,
    path = "/api/users/profile",
    responses(
        (status = 200, description = "The caller's user record", body = User),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "User record no longer exists", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Users"
)]
pub async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<User>, AppError> {
    let user = UserService::get_user(&state.db, auth_user.id).await?;
    Ok(Json(user))
}

/// Grant the data-access flag to a user (admin only)
#[utoipa::path(
    post,
    path = "/api/users/grant-access",
    request_body = AccessRequest,
    responses(
        (status = 200, description = "Flag granted, or already held", body = MessageResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "No user with that email", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Users"
)]
pub async fn grant_access(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<AccessRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let message = match UserService::set_data_access(&state.db, &dto.email, true).await? {
        AccessOutcome::Updated => "Data Access Given",
        AccessOutcome::Unchanged => "User already have data access",
    };

    Ok(Json(MessageResponse {
        message: message.to_string(),
    }))
}

/// Revoke the data-access flag from a user (admin only)
#[utoipa::path(
    post,
    path = "/api/users/revoke-access",
    request_body = AccessRequest,
    responses(
        (status = 200, description = "Flag revoked, or already absent", body = MessageResponse),
        (status = 403, description = "Caller is not an admin, or the target is an admin", body = ErrorResponse),
        (status = 404, description = "No user with that email", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Users"
)]
pub async fn revoke_access(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<AccessRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let message = match UserService::set_data_access(&state.db, &dto.email, false).await? {
        AccessOutcome::Updated => "Data Access Revoked",
        AccessOutcome::Unchanged => "User already have no Access",
    };

    Ok(Json(MessageResponse {
        message: message.to_string(),
    }))
}

/// Delete every user (admin only, requires explicit confirmation)
#[utoipa::path(
    delete,
    path = "/api/users",
    request_body = DeleteAllRequest,
    responses(
        (status = 200, description = "Store wiped", body = MessageResponse),
        (status = 400, description = "Confirmation missing"),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Users"
)]
pub async fn delete_all_users(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<DeleteAllRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    if !dto.confirm {
        return Err(AppError::field(
            "confirm",
            "Set confirm to true to delete all users",
        ));
    }

    UserService::delete_all(&state.db).await?;

    Ok(Json(MessageResponse {
        message: "Users Deleted".to_string(),
    }))
}
