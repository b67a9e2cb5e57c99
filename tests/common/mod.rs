use fluxgate::config::cors::CorsConfig;
use fluxgate::config::jwt::JwtConfig;
use fluxgate::modules::users::model::UserRole;
use fluxgate::router::init_router;
use fluxgate::state::AppState;
use fluxgate::utils::jwt::create_token;
use fluxgate::utils::password::hash_password;
use sqlx::PgPool;
use uuid::Uuid;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        token_ttl: 259_200,
    }
}

pub fn setup_test_app(pool: PgPool) -> axum::Router {
    let state = AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
    };
    init_router(state)
}

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
}

/// Insert a user directly into the store.
/// `role` is one of "admin" or "user".
pub async fn create_test_user(
    pool: &PgPool,
    email: &str,
    password: &str,
    role: &str,
    data_access: bool,
) -> TestUser {
    let hashed = hash_password(password).unwrap();

    let role = match role {
        "admin" => UserRole::Admin,
        "user" => UserRole::User,
        _ => panic!("Invalid role: {}", role),
    };

    let id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (email, password, role, data_access)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(email)
    .bind(&hashed)
    .bind(role)
    .bind(data_access)
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id,
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// A `Cookie` header value carrying a fresh session token for `user_id`.
#[allow(dead_code)]
pub fn session_cookie_for(user_id: Uuid) -> String {
    let token = create_token(user_id, &test_jwt_config()).unwrap();
    format!("jwt={}", token)
}

/// A `Cookie` header value whose token expired an hour ago.
#[allow(dead_code)]
pub fn expired_session_cookie_for(user_id: Uuid) -> String {
    let config = JwtConfig {
        token_ttl: -3600,
        ..test_jwt_config()
    };
    let token = create_token(user_id, &config).unwrap();
    format!("jwt={}", token)
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}
