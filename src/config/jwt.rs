use std::env;

/// Token lifetime when `JWT_TTL` is unset: 3 days, matching the cookie
/// Max-Age.
pub const DEFAULT_TOKEN_TTL: i64 = 259_200;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds.
    pub token_ttl: i64,
}

impl JwtConfig {
    /// Reads `JWT_SECRET` (required) and `JWT_TTL`.
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set. The secret is injected at process
    /// start and never compiled into source.
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            token_ttl: env::var("JWT_TTL")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TOKEN_TTL),
        }
    }
}
