use axum::{extract::State, response::Json};
use std::sync::Arc;

use super::AppState;
use crate::api::models::{AchievementsResponse, LeaderboardResponse, StatusResponse};

pub async fn get_leaderboard(State(state): State<Arc<AppState>>) -> Json<LeaderboardResponse> {
    let latest = state.latest.read().await;

    let (items, updated_at) = match latest.as_ref() {
        Some(snapshot) => (snapshot.leaderboard.clone(), Some(snapshot.computed_at)),
        None => (Vec::new(), None),
    };

    Json(LeaderboardResponse {
        total: items.len(),
        items,
        updated_at,
    })
}

pub async fn get_achievements(State(state): State<Arc<AppState>>) -> Json<AchievementsResponse> {
    let latest = state.latest.read().await;

    let response = match latest.as_ref() {
        Some(snapshot) => {
            let achievements = snapshot.achievements.clone();
            AchievementsResponse {
                podiums: vec![achievements.waffles, achievements.waffled, achievements.committed],
                updated_at: Some(snapshot.computed_at),
            }
        }
        None => AchievementsResponse {
            podiums: Vec::new(),
            updated_at: None,
        },
    };

    Json(response)
}

pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let refreshes = *state.refreshes.read().await;
    let latest = state.latest.read().await;

    Json(StatusResponse {
        refreshes,
        players: latest.as_ref().map(|s| s.leaderboard.len()).unwrap_or(0),
        games_counted: latest.as_ref().map(|s| s.games_counted).unwrap_or(0),
        skipped_blocks: latest.as_ref().map(|s| s.skipped_blocks).unwrap_or(0),
        updated_at: latest.as_ref().map(|s| s.computed_at),
    })
}
