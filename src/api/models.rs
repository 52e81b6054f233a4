use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{LeaderboardEntry, Podium, Tournament};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    pub items: Vec<LeaderboardEntry>,
    pub total: usize,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementsResponse {
    pub podiums: Vec<Podium>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentItem {
    #[serde(flatten)]
    pub tournament: Tournament,
    pub is_past: bool,
    pub url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentListResponse {
    pub items: Vec<TournamentItem>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub refreshes: u64,
    pub players: usize,
    pub games_counted: usize,
    pub skipped_blocks: usize,
    pub updated_at: Option<DateTime<Utc>>,
}
