use axum::{Router, routing::get};
use std::sync::Arc;

use crate::api::handlers::{
    AppState,
    leaderboard::{get_achievements, get_leaderboard, get_status},
    tournaments::get_tournaments,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/leaderboard", get(get_leaderboard))
        .route("/api/achievements", get(get_achievements))
        .route("/api/tournaments", get(get_tournaments))
        .route("/api/status", get(get_status))
        .with_state(state)
}
