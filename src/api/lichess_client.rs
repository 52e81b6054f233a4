use anyhow::Result;
use log::info;
use urlencoding::encode;

use super::source::TournamentSource;
use crate::config::settings::{ClientSettings, SeriesSettings};
use crate::http::TextClient;

const NDJSON: &str = "application/x-ndjson";
const PGN: &str = "application/x-chess-pgn";

/// lichess API client for the team feed and arena game exports
#[derive(Clone)]
pub struct LichessClient {
    client: TextClient,
    base_url: String,
    team_slug: String,
}

impl LichessClient {
    pub fn new(client_settings: &ClientSettings, series: &SeriesSettings) -> Result<Self> {
        let client = TextClient::new(client_settings)?;
        Ok(Self {
            client,
            base_url: client_settings.base_url.clone(),
            team_slug: series.team_slug.clone(),
        })
    }

    // --- Helper Methods ---

    fn build_team_tournaments_url(&self) -> String {
        format!("{}/api/team/{}/arena", self.base_url, encode(&self.team_slug))
    }

    fn build_tournament_games_url(&self, tournament_id: &str) -> String {
        format!(
            "{}/api/tournament/{}/games?clocks=false&evals=false&opening=false",
            self.base_url,
            encode(tournament_id)
        )
    }
}

impl TournamentSource for LichessClient {
    async fn team_tournaments(&self) -> Result<String> {
        let url = self.build_team_tournaments_url();
        info!("Fetching team tournaments from {}", url);
        self.client.get_text(&url, NDJSON).await
    }

    async fn tournament_games(&self, tournament_id: &str) -> Result<String> {
        let url = self.build_tournament_games_url(tournament_id);
        info!("Fetching games for tournament {} from {}", tournament_id, url);
        self.client.get_text(&url, PGN).await
    }
}
