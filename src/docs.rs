use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::middleware::auth::SESSION_COOKIE;
use crate::modules::actuators::model::{Actuator, CommandRequest, RegisterActuatorRequest};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{
    LoginRequest, LoginResponse, MessageResponse, SignupRequest, SignupResponse,
};
use crate::modules::sensors::model::{RecordReadingRequest, SensorReading};
use crate::modules::users::model::{AccessRequest, DeleteAllRequest, User, UserRole};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::sign_up,
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::logout,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_profile,
        crate::modules::users::controller::grant_access,
        crate::modules::users::controller::revoke_access,
        crate::modules::users::controller::delete_all_users,
        crate::modules::sensors::controller::get_readings,
        crate::modules::sensors::controller::record_reading,
        crate::modules::actuators::controller::get_actuators,
        crate::modules::actuators::controller::register_actuator,
        crate::modules::actuators::controller::command_actuator,
    ),
    components(
        schemas(
            User,
            UserRole,
            SignupRequest,
            SignupResponse,
            LoginRequest,
            LoginResponse,
            MessageResponse,
            ErrorResponse,
            AccessRequest,
            DeleteAllRequest,
            SensorReading,
            RecordReadingRequest,
            Actuator,
            RegisterActuatorRequest,
            CommandRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Signup, login, and session management"),
        (name = "Users", description = "Profile and data-access administration"),
        (name = "Sensors", description = "Telemetry readings, gated by data access"),
        (name = "Actuators", description = "Actuator state and commands")
    ),
    info(
        title = "Fluxgate API",
        version = "0.1.0",
        description = "Telemetry platform backend with JWT cookie sessions, role gating, and a grantable data-access tier.",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "cookie_auth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(SESSION_COOKIE))),
            )
        }
    }
}
