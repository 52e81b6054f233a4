pub mod feed;

pub use feed::parse_tournament_feed;
