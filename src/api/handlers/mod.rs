use tokio::sync::RwLock;

use crate::ranking::RankHistory;
use crate::services::pipeline::Snapshot;

pub mod leaderboard;
pub mod tournaments;

/// Latest computed snapshot shared between the refresh loop and handlers
#[derive(Default)]
pub struct AppState {
    pub latest: RwLock<Option<Snapshot>>,
    pub history: RwLock<RankHistory>,
    pub refreshes: RwLock<u64>,
    pub tournament_base_url: String,
}

impl AppState {
    pub fn new(tournament_base_url: &str) -> Self {
        Self {
            tournament_base_url: tournament_base_url.to_string(),
            ..Self::default()
        }
    }

    /// Annotate a fresh snapshot against earlier runs and publish it
    pub async fn publish(&self, mut snapshot: Snapshot) {
        self.history.write().await.apply(&mut snapshot.leaderboard);
        *self.latest.write().await = Some(snapshot);
        *self.refreshes.write().await += 1;
    }
}
