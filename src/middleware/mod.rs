//! The authentication/authorization middleware chain.
//!
//! Three composable gates, each usable independently:
//!
//! - [`auth`]: resolve session cookie → token → user row, producing the
//!   request-scoped [`auth::AuthUser`] identity
//! - [`role`]: admit only a fixed set of roles (parameterized per route set)
//! - [`data_access`]: admit only users holding the data-access flag
//!
//! Gates are invoked by route declaration, not guaranteed ordering, so every
//! gate re-verifies the token and re-resolves the user on its own.
//!
//! # Flow
//!
//! 1. Client sends a request carrying the `jwt` HTTP-only cookie
//! 2. The gate verifies the token signature and expiry
//! 3. The user row is resolved by id; role / data-access come from the store
//! 4. The handler runs if every declared gate admits the request

pub mod auth;
pub mod data_access;
pub mod role;
