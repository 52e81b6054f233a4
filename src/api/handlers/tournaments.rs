use axum::{extract::State, response::Json};
use chrono::Utc;
use std::sync::Arc;

use super::AppState;
use crate::api::models::{TournamentItem, TournamentListResponse};

pub async fn get_tournaments(State(state): State<Arc<AppState>>) -> Json<TournamentListResponse> {
    let latest = state.latest.read().await;
    let now = Utc::now();

    let items = latest
        .as_ref()
        .map(|snapshot| {
            snapshot
                .tournaments
                .iter()
                .map(|t| TournamentItem {
                    is_past: t.is_past(now),
                    url: format!("{}/tournament/{}", state.tournament_base_url, t.id),
                    tournament: t.clone(),
                })
                .collect()
        })
        .unwrap_or_default();

    Json(TournamentListResponse {
        items,
        updated_at: latest.as_ref().map(|s| s.computed_at),
    })
}
