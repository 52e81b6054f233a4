pub mod extract;
pub mod split;

pub use extract::OutcomeExtractor;
pub use split::split_games;
