use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use utoipa::ToSchema;

use super::model::{LoginRequest, LoginResponse, MessageResponse, SignupRequest, SignupResponse};
use super::service::AuthService;
use crate::middleware::auth::SESSION_COOKIE;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

fn session_cookie(token: String, ttl: i64) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(ttl))
        .build()
}

fn expired_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .build()
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User created, session cookie set", body = SignupResponse),
        (status = 400, description = "Validation error or email already registered"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
pub async fn sign_up(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<SignupRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (user, token) = AuthService::sign_up(&state.db, dto, &state.jwt_config).await?;

    let jar = jar.add(session_cookie(token, state.jwt_config.token_ttl));

    Ok((
        StatusCode::CREATED,
        jar,
        Json(SignupResponse {
            id: user.id,
            message: "New User Created".to_string(),
        }),
    ))
}

/// Login with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, session cookie set", body = LoginResponse),
        (status = 401, description = "Unknown user or wrong password; session cookie cleared", body = ErrorResponse),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Response, AppError> {
    match AuthService::login(&state.db, dto, &state.jwt_config).await {
        Ok((user, token)) => {
            let jar = jar.add(session_cookie(token, state.jwt_config.token_ttl));
            Ok((jar, Json(LoginResponse { user })).into_response())
        }
        // Failed credential checks also clear any cookie the client sent.
        Err(err @ AppError::Unauthenticated(_)) => {
            let jar = jar.remove(expired_session_cookie());
            Ok((jar, err).into_response())
        }
        Err(err) => Err(err),
    }
}

/// Logout: clear the session cookie
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Session cookie cleared", body = MessageResponse)
    ),
    tag = "Authentication"
)]
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    let jar = jar.remove(expired_session_cookie());

    (
        jar,
        Json(MessageResponse {
            message: "Logged out".to_string(),
        }),
    )
}
