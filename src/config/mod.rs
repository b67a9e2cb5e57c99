//! Configuration loaded once at process start.
//!
//! Each submodule covers one concern and reads its own environment variables:
//!
//! - [`cors`]: allowed origins for the CORS layer
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`jwt`]: signing secret and token lifetime
//!
//! The results are aggregated into [`crate::state::AppState`] and never
//! mutated afterwards.

pub mod cors;
pub mod database;
pub mod jwt;
