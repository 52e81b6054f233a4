use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use super::source::TournamentSource;

/// In-memory upstream for tests; unknown tournaments fail like a network error
#[derive(Default)]
pub struct FakeSource {
    feed: Option<String>,
    exports: HashMap<String, String>,
    delays: HashMap<String, Duration>,
    requested: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_feed(mut self, feed: &str) -> Self {
        self.feed = Some(feed.to_string());
        self
    }

    pub fn with_export(mut self, tournament_id: &str, pgn: &str) -> Self {
        self.exports.insert(tournament_id.to_string(), pgn.to_string());
        self
    }

    /// Hold back one tournament's export, e.g. to make it finish last
    pub fn with_delay(mut self, tournament_id: &str, delay: Duration) -> Self {
        self.delays.insert(tournament_id.to_string(), delay);
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().map(|ids| ids.clone()).unwrap_or_default()
    }
}

impl TournamentSource for FakeSource {
    async fn team_tournaments(&self) -> Result<String> {
        self.feed.clone().ok_or_else(|| anyhow!("feed unreachable"))
    }

    async fn tournament_games(&self, tournament_id: &str) -> Result<String> {
        if let Ok(mut ids) = self.requested.lock() {
            ids.push(tournament_id.to_string());
        }
        if let Some(delay) = self.delays.get(tournament_id) {
            tokio::time::sleep(*delay).await;
        }
        self.exports
            .get(tournament_id)
            .cloned()
            .ok_or_else(|| anyhow!("no export for {}", tournament_id))
    }
}

/// One PGN game block with the tags the extractor reads
pub fn pgn_game(white: &str, black: &str, result: &str, termination: &str, white_berserk: bool) -> String {
    let mut pgn = format!(
        "[Event \"Weekly WAF-FLED 1 Arena\"]\n[Site \"https://lichess.org/abcdefgh\"]\n[White \"{}\"]\n[Black \"{}\"]\n[Result \"{}\"]\n",
        white, black, result
    );
    if white_berserk {
        pgn.push_str("[WhiteBerserk \"1\"]\n");
    }
    pgn.push_str(&format!("[Termination \"{}\"]\n\n1. e3 b5 {}\n\n\n", termination, result));
    pgn
}
