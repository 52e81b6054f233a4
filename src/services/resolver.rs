use log::{info, warn};
use std::collections::HashSet;

use crate::api::TournamentSource;
use crate::api::parsers::parse_tournament_feed;
use crate::config::SeriesFilter;
use crate::domain::Tournament;

/// Tournaments to count: series entries for display plus the full id set to ingest
#[derive(Debug, Clone, Default)]
pub struct ResolvedTournaments {
    /// Series tournaments found in the team feed, newest first
    pub tournaments: Vec<Tournament>,
    /// Manual ids followed by discovered ids, without duplicates
    pub ids: Vec<String>,
}

pub async fn resolve_tournaments<S: TournamentSource>(source: &S, filter: &SeriesFilter) -> ResolvedTournaments {
    info!("Step 1: Resolving series tournaments...");

    let mut tournaments = discover_series_tournaments(source, filter).await;
    tournaments.sort_by(|a, b| b.starts_at.cmp(&a.starts_at));

    let ids = merge_ids(
        filter.manual_ids(),
        tournaments.iter().map(|t| t.id.as_str()),
    );

    info!(
        "  → {} series tournaments in feed, {} unique ids to ingest",
        tournaments.len(),
        ids.len()
    );

    ResolvedTournaments { tournaments, ids }
}

async fn discover_series_tournaments<S: TournamentSource>(source: &S, filter: &SeriesFilter) -> Vec<Tournament> {
    let text = match source.team_tournaments().await {
        Ok(text) => text,
        Err(e) => {
            warn!("Team feed unreachable, using manual tournaments only: {:?}", e);
            return Vec::new();
        }
    };

    match parse_tournament_feed(&text) {
        Ok(tournaments) => tournaments
            .into_iter()
            .filter(|t| filter.matches(&t.name))
            .collect(),
        Err(e) => {
            warn!("Team feed unusable, using manual tournaments only: {}", e);
            Vec::new()
        }
    }
}

fn merge_ids<'a, I>(manual: &'a [String], discovered: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    manual
        .iter()
        .map(String::as_str)
        .chain(discovered)
        .filter(|id| seen.insert(*id))
        .map(String::from)
        .collect()
}
