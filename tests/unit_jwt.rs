use fluxgate::config::jwt::JwtConfig;
use fluxgate::utils::jwt::{TokenError, create_token, verify_token};
use uuid::Uuid;

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        token_ttl: 259_200,
    }
}

#[test]
fn test_create_token_success() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let result = create_token(user_id, &jwt_config);

    assert!(result.is_ok());
    assert!(!result.unwrap().is_empty());
}

#[test]
fn test_round_trip_preserves_user_id() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let token = create_token(user_id, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.sub, user_id.to_string());
}

#[test]
fn test_token_expiry_is_ttl_after_issue() {
    let jwt_config = get_test_jwt_config();
    let token = create_token(Uuid::new_v4(), &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert!(claims.exp > claims.iat);
    assert_eq!(claims.exp - claims.iat, jwt_config.token_ttl as usize);
}

#[test]
fn test_verify_expired_token() {
    let expired_config = JwtConfig {
        token_ttl: -3600,
        ..get_test_jwt_config()
    };

    let token = create_token(Uuid::new_v4(), &expired_config).unwrap();
    let result = verify_token(&token, &expired_config);

    assert_eq!(result.unwrap_err(), TokenError::Expired);
}

#[test]
fn test_verify_wrong_secret() {
    let jwt_config = get_test_jwt_config();
    let token = create_token(Uuid::new_v4(), &jwt_config).unwrap();

    let wrong_config = JwtConfig {
        secret: "different_secret_key".to_string(),
        ..jwt_config
    };

    let result = verify_token(&token, &wrong_config);

    assert_eq!(result.unwrap_err(), TokenError::InvalidSignature);
}

#[test]
fn test_verify_malformed_tokens() {
    let jwt_config = get_test_jwt_config();
    let malformed_tokens = vec![
        "",
        "not-a-token",
        "too.many.parts.here.extra",
        "!!!.invalid.chars",
        ".payload.signature",
    ];

    for token in malformed_tokens {
        let result = verify_token(token, &jwt_config);
        assert_eq!(result.unwrap_err(), TokenError::Malformed, "token: {token:?}");
    }
}

#[test]
fn test_different_users_get_different_tokens() {
    let jwt_config = get_test_jwt_config();
    let user_id1 = Uuid::new_v4();
    let user_id2 = Uuid::new_v4();

    let token1 = create_token(user_id1, &jwt_config).unwrap();
    let token2 = create_token(user_id2, &jwt_config).unwrap();

    assert_ne!(token1, token2);

    let claims1 = verify_token(&token1, &jwt_config).unwrap();
    let claims2 = verify_token(&token2, &jwt_config).unwrap();

    assert_eq!(claims1.sub, user_id1.to_string());
    assert_eq!(claims2.sub, user_id2.to_string());
}
