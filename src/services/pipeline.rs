use anyhow::Result;
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::Serialize;
use std::sync::Arc;

use crate::api::TournamentSource;
use crate::config::SeriesFilter;
use crate::domain::{Achievements, LeaderboardEntry, Standings, Tournament};
use crate::ranking::{build_achievements, build_leaderboard};
use crate::services::ingestion::{IngestionReport, IngestionService};
use crate::services::resolver::resolve_tournaments;

/// Everything handed to presentation after one run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub tournaments: Vec<Tournament>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub achievements: Achievements,
    pub games_counted: usize,
    pub skipped_blocks: usize,
    pub computed_at: DateTime<Utc>,
}

/// Resolve, ingest, fold and rank; stateless between runs
pub struct LeaderboardService<S> {
    source: Arc<S>,
    filter: SeriesFilter,
    ingestion: IngestionService<S>,
}

impl<S: TournamentSource> LeaderboardService<S> {
    pub fn new(source: Arc<S>, filter: SeriesFilter) -> Result<Self> {
        let ingestion = IngestionService::new(Arc::clone(&source))?;
        Ok(Self {
            source,
            filter,
            ingestion,
        })
    }

    pub async fn run(&self) -> Snapshot {
        info!("=== Computing WAF leaderboard ===");

        let resolved = resolve_tournaments(self.source.as_ref(), &self.filter).await;
        let (outcomes, report) = self.ingestion.run(&resolved.ids).await;

        info!("Step 3: Aggregating {} outcomes...", outcomes.len());
        let standings = Standings::from_outcomes(&outcomes);
        if standings.is_empty() {
            warn!("No games were counted; the leaderboard will be empty");
        } else {
            info!("  → {} players", standings.len());
        }

        let snapshot = Self::rank(resolved.tournaments, &standings, &report);
        info!("=== Leaderboard complete ===");
        snapshot
    }

    fn rank(tournaments: Vec<Tournament>, standings: &Standings, report: &IngestionReport) -> Snapshot {
        info!("Step 4: Ranking players...");
        let players = standings.players();

        Snapshot {
            tournaments,
            leaderboard: build_leaderboard(players),
            achievements: build_achievements(players),
            games_counted: report.games,
            skipped_blocks: report.skipped_blocks,
            computed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{FakeSource, pgn_game};
    use crate::config::settings::SeriesSettings;
    use std::time::Duration;

    fn filter(manual: &[&str]) -> SeriesFilter {
        let settings = SeriesSettings {
            manual_tournaments: manual.iter().map(|id| id.to_string()).collect(),
            ..SeriesSettings::default()
        };
        SeriesFilter::new(&settings).unwrap()
    }

    #[tokio::test]
    async fn test_berserk_flag_example_scores() {
        let source = FakeSource::new().with_export("arena001", &pgn_game("A", "B", "1-0", "Time forfeit", true));
        let service = LeaderboardService::new(Arc::new(source), filter(&["arena001"])).unwrap();

        let snapshot = service.run().await;

        let scores: Vec<(&str, f64)> = snapshot
            .leaderboard
            .iter()
            .map(|e| (e.player.name.as_str(), e.player.score))
            .collect();
        assert_eq!(scores, vec![("A", 3.0), ("B", -3.0)]);
        assert_eq!(snapshot.achievements.waffles.entries[0].player.name, "A");
        assert_eq!(snapshot.achievements.waffled.entries[0].player.name, "B");
    }

    #[tokio::test]
    async fn test_one_failing_tournament_leaves_partial_leaderboard() {
        let feed = r#"{"id":"arena002","name":"Weekly WAF-FLED 2 Arena","startsAt":1700000000000,"status":30}"#;
        let export = format!(
            "{}{}",
            pgn_game("A", "B", "1-0", "Normal", false),
            pgn_game("C", "A", "1-0", "Normal", true)
        );
        let source = FakeSource::new().with_feed(feed).with_export("arena001", &export);
        let service = LeaderboardService::new(Arc::new(source), filter(&["arena001"])).unwrap();

        let snapshot = service.run().await;

        assert_eq!(snapshot.tournaments.len(), 1);
        assert_eq!(snapshot.games_counted, 2);

        let ranked: Vec<(usize, &str, f64, u32)> = snapshot
            .leaderboard
            .iter()
            .map(|e| (e.rank, e.player.name.as_str(), e.player.score, e.player.games_played))
            .collect();
        assert_eq!(ranked, vec![(1, "C", 1.5, 1), (2, "A", 0.0, 2), (3, "B", -1.0, 1)]);
    }

    #[tokio::test]
    async fn test_ties_break_by_tournament_order_not_fetch_latency() {
        let source = FakeSource::new()
            .with_export("arena001", &pgn_game("P", "Q", "1-0", "Normal", false))
            .with_export("arena002", &pgn_game("R", "S", "1-0", "Normal", false))
            .with_delay("arena001", Duration::from_millis(200));
        let service = LeaderboardService::new(Arc::new(source), filter(&["arena001", "arena002"])).unwrap();

        let snapshot = service.run().await;

        let names: Vec<&str> = snapshot.leaderboard.iter().map(|e| e.player.name.as_str()).collect();
        assert_eq!(names, vec!["P", "R", "Q", "S"]);
    }

    #[tokio::test]
    async fn test_no_data_yields_empty_snapshot() {
        let service = LeaderboardService::new(Arc::new(FakeSource::new()), filter(&[])).unwrap();
        let snapshot = service.run().await;

        assert!(snapshot.leaderboard.is_empty());
        assert!(snapshot.achievements.committed.entries.is_empty());
    }
}
