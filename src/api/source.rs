use anyhow::Result;
use std::future::Future;

/// Upstream text retrieval: the team feed and per-tournament game exports
pub trait TournamentSource: Send + Sync + 'static {
    /// Raw team tournament feed, a JSON array or newline-delimited JSON
    fn team_tournaments(&self) -> impl Future<Output = Result<String>> + Send;

    /// Concatenated PGN export of every game in one tournament
    fn tournament_games(&self, tournament_id: &str) -> impl Future<Output = Result<String>> + Send;
}
