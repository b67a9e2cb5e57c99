use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::data_access::require_data_access;
use crate::middleware::role::require_admin;
use crate::modules::actuators::router::{init_actuators_admin_router, init_actuators_router};
use crate::modules::auth::router::init_auth_router;
use crate::modules::sensors::router::init_sensors_router;
use crate::modules::users::router::{init_profile_router, init_users_admin_router};
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .nest("/auth", init_auth_router())
                .nest(
                    "/users",
                    init_users_admin_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
                        .merge(init_profile_router()),
                )
                .nest(
                    "/sensors",
                    init_sensors_router().route_layer(middleware::from_fn_with_state(
                        state.clone(),
                        require_data_access,
                    )),
                )
                .nest(
                    "/actuators",
                    init_actuators_router()
                        .route_layer(middleware::from_fn_with_state(
                            state.clone(),
                            require_data_access,
                        ))
                        .merge(init_actuators_admin_router().route_layer(
                            middleware::from_fn_with_state(state.clone(), require_admin),
                        )),
                ),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}
