pub mod ingestion;
pub mod pipeline;
pub mod resolver;
pub mod server;

pub use pipeline::{LeaderboardService, Snapshot};
pub use resolver::{ResolvedTournaments, resolve_tournaments};
