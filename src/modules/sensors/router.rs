use axum::{Router, routing::get};

use super::controller::{get_readings, record_reading};
use crate::state::AppState;

pub fn init_sensors_router() -> Router<AppState> {
    Router::new().route("/", get(get_readings).post(record_reading))
}
