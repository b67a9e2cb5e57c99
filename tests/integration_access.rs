mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{create_test_user, generate_unique_email, session_cookie_for, setup_test_app};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

fn access_request(uri: &str, caller: Uuid, email: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::COOKIE, session_cookie_for(caller))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "email": email })).unwrap(),
        ))
        .unwrap()
}

async fn data_access_flag(pool: &PgPool, id: Uuid) -> bool {
    sqlx::query_scalar::<_, bool>("SELECT data_access FROM users WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn message_of(response: axum::response::Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    body["message"].as_str().unwrap().to_string()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_grant_access(pool: PgPool) {
    let admin =
        create_test_user(&pool, &generate_unique_email(), "adminpass123", "admin", true).await;
    let target =
        create_test_user(&pool, &generate_unique_email(), "testpass123", "user", false).await;

    let app = setup_test_app(pool.clone());

    let response = app
        .oneshot(access_request("/api/users/grant-access", admin.id, &target.email))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(message_of(response).await, "Data Access Given");
    assert!(data_access_flag(&pool, target.id).await);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_grant_access_is_idempotent(pool: PgPool) {
    let admin =
        create_test_user(&pool, &generate_unique_email(), "adminpass123", "admin", true).await;
    let target =
        create_test_user(&pool, &generate_unique_email(), "testpass123", "user", false).await;

    let app = setup_test_app(pool.clone());

    let response = app
        .clone()
        .oneshot(access_request("/api/users/grant-access", admin.id, &target.email))
        .await
        .unwrap();
    assert_eq!(message_of(response).await, "Data Access Given");
    assert!(data_access_flag(&pool, target.id).await);

    let response = app
        .oneshot(access_request("/api/users/grant-access", admin.id, &target.email))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(message_of(response).await, "User already have data access");
    assert!(data_access_flag(&pool, target.id).await);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_revoke_access(pool: PgPool) {
    let admin =
        create_test_user(&pool, &generate_unique_email(), "adminpass123", "admin", true).await;
    let target =
        create_test_user(&pool, &generate_unique_email(), "testpass123", "user", true).await;

    let app = setup_test_app(pool.clone());

    let response = app
        .clone()
        .oneshot(access_request("/api/users/revoke-access", admin.id, &target.email))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(message_of(response).await, "Data Access Revoked");
    assert!(!data_access_flag(&pool, target.id).await);

    let response = app
        .oneshot(access_request("/api/users/revoke-access", admin.id, &target.email))
        .await
        .unwrap();
    assert_eq!(message_of(response).await, "User already have no Access");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_revoke_access_on_admin_is_refused(pool: PgPool) {
    let admin =
        create_test_user(&pool, &generate_unique_email(), "adminpass123", "admin", true).await;
    let other_admin =
        create_test_user(&pool, &generate_unique_email(), "adminpass456", "admin", true).await;

    let app = setup_test_app(pool.clone());

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(access_request(
                "/api/users/revoke-access",
                admin.id,
                &other_admin.email,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            message_of(response).await,
            "You cannot revoke access of other admin."
        );
        // The flag is never touched.
        assert!(data_access_flag(&pool, other_admin.id).await);
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_access_routes_require_admin(pool: PgPool) {
    let user =
        create_test_user(&pool, &generate_unique_email(), "testpass123", "user", true).await;
    let target =
        create_test_user(&pool, &generate_unique_email(), "testpass456", "user", false).await;

    let app = setup_test_app(pool.clone());

    for uri in ["/api/users/grant-access", "/api/users/revoke-access"] {
        let response = app
            .clone()
            .oneshot(access_request(uri, user.id, &target.email))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(message_of(response).await, "User not authorised");
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_grant_access_unknown_email(pool: PgPool) {
    let admin =
        create_test_user(&pool, &generate_unique_email(), "adminpass123", "admin", true).await;

    let app = setup_test_app(pool.clone());

    let response = app
        .oneshot(access_request(
            "/api/users/grant-access",
            admin.id,
            "missing@test.com",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(message_of(response).await, "No user with this email address");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_sensor_routes_gated_by_data_access(pool: PgPool) {
    let without_access =
        create_test_user(&pool, &generate_unique_email(), "testpass123", "user", false).await;
    let with_access =
        create_test_user(&pool, &generate_unique_email(), "testpass456", "user", true).await;

    let app = setup_test_app(pool.clone());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/sensors")
                .header(header::COOKIE, session_cookie_for(without_access.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(message_of(response).await, "User have no data access");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/sensors")
                .header(header::COOKIE, session_cookie_for(with_access.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_sensor_routes_require_authentication(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/sensors")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(message_of(response).await, "Please Login");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_record_and_list_readings(pool: PgPool) {
    let user =
        create_test_user(&pool, &generate_unique_email(), "testpass123", "user", true).await;

    let app = setup_test_app(pool.clone());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/sensors")
                .header(header::COOKIE, session_cookie_for(user.id))
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_string(&json!({
                        "sensor": "pm25-lab-3",
                        "value": 12.5,
                        "unit": "ug/m3"
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/sensors")
                .header(header::COOKIE, session_cookie_for(user.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let readings = body.as_array().unwrap();
    assert_eq!(readings.len(), 1);
    assert_eq!(readings[0]["sensor"], "pm25-lab-3");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_actuator_commands_require_admin(pool: PgPool) {
    let admin =
        create_test_user(&pool, &generate_unique_email(), "adminpass123", "admin", true).await;
    let user =
        create_test_user(&pool, &generate_unique_email(), "testpass123", "user", true).await;

    let app = setup_test_app(pool.clone());

    let register = |caller: Uuid| {
        Request::builder()
            .method("POST")
            .uri("/api/actuators/register")
            .header(header::COOKIE, session_cookie_for(caller))
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name":"pump-1"}"#))
            .unwrap()
    };

    let response = app.clone().oneshot(register(user.id)).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app.clone().oneshot(register(admin.id)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let actuator_id = body["id"].as_str().unwrap().to_string();
    assert_eq!(body["enabled"], false);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/actuators/{}/command", actuator_id))
                .header(header::COOKIE, session_cookie_for(admin.id))
                .header("content-type", "application/json")
                .body(Body::from(r#"{"enabled":true}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["enabled"], true);
}
