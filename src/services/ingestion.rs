use log::{debug, error, info, warn};
use std::sync::Arc;
use tokio::task::JoinSet;

use crate::api::TournamentSource;
use crate::domain::GameOutcome;
use crate::pgn::{OutcomeExtractor, split_games};

/// Game blocks exported for one tournament
#[derive(Debug, Clone)]
pub struct TournamentGames {
    pub tournament_id: String,
    pub blocks: Vec<String>,
}

/// Tally of one ingestion run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestionReport {
    pub tournaments: usize,
    pub games: usize,
    pub skipped_blocks: usize,
}

pub struct IngestionService<S> {
    source: Arc<S>,
    extractor: OutcomeExtractor,
}

impl<S: TournamentSource> IngestionService<S> {
    pub fn new(source: Arc<S>) -> anyhow::Result<Self> {
        Ok(Self {
            source,
            extractor: OutcomeExtractor::new()?,
        })
    }

    /// Fetch every tournament concurrently and extract all outcomes.
    ///
    /// Outcomes are only gathered after every fetch has settled, and are emitted
    /// in the order of `tournament_ids` however the fetches interleave.
    pub async fn run(&self, tournament_ids: &[String]) -> (Vec<GameOutcome>, IngestionReport) {
        info!("Step 2: Fetching games for {} tournaments...", tournament_ids.len());

        let exports = self.fetch_all(tournament_ids).await;
        let mut report = IngestionReport {
            tournaments: exports.len(),
            ..IngestionReport::default()
        };

        let mut outcomes = Vec::new();
        for export in &exports {
            self.extract_tournament(export, &mut outcomes, &mut report);
        }

        info!(
            "  → {} games, {} outcomes, {} blocks skipped",
            report.games,
            outcomes.len(),
            report.skipped_blocks
        );
        (outcomes, report)
    }

    async fn fetch_all(&self, tournament_ids: &[String]) -> Vec<TournamentGames> {
        let mut tasks = JoinSet::new();
        for (slot, id) in tournament_ids.iter().enumerate() {
            let source = Arc::clone(&self.source);
            let id = id.clone();
            tasks.spawn(async move { (slot, fetch_tournament_games(source.as_ref(), id).await) });
        }

        let mut slots: Vec<Option<TournamentGames>> = vec![None; tournament_ids.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((slot, games)) => slots[slot] = Some(games),
                Err(e) => error!("Tournament fetch task failed: {}", e),
            }
        }
        slots.into_iter().flatten().collect()
    }

    fn extract_tournament(&self, export: &TournamentGames, outcomes: &mut Vec<GameOutcome>, report: &mut IngestionReport) {
        for (idx, block) in export.blocks.iter().enumerate() {
            match self.extractor.extract(block) {
                Ok(pair) => {
                    outcomes.extend(pair);
                    report.games += 1;
                }
                Err(e) => {
                    warn!(
                        "Skipping game {} of tournament {}: {}",
                        idx + 1,
                        export.tournament_id,
                        e
                    );
                    report.skipped_blocks += 1;
                }
            }
        }
    }
}

/// Fetch and split one tournament's export; any failure yields no games
pub async fn fetch_tournament_games<S: TournamentSource>(source: &S, tournament_id: String) -> TournamentGames {
    let blocks = match source.tournament_games(&tournament_id).await {
        Ok(text) => split_games(&text),
        Err(e) => {
            warn!("Failed to fetch games for tournament {}: {:?}", tournament_id, e);
            Vec::new()
        }
    };

    debug!("Tournament {}: {} game blocks", tournament_id, blocks.len());
    TournamentGames {
        tournament_id,
        blocks,
    }
}
