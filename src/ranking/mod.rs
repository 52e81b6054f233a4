pub mod history;
pub mod leaderboard;
pub mod podium;

pub use history::RankHistory;
pub use leaderboard::build_leaderboard;
pub use podium::{build_achievements, build_podium};
