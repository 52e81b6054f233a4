pub mod errors;
pub mod models;
pub mod standings;

pub use errors::{ConfigError, FeedError, ParseError};
pub use models::{
    Achievements, GameOutcome, LeaderboardEntry, PlayerStats, Podium, PodiumEntry, PodiumKey, ResultKind,
    Tournament, TournamentStatus,
};
pub use standings::Standings;
