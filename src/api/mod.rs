pub mod handlers;
pub mod lichess_client;
pub mod models;
pub mod parsers;
pub mod routes;
pub mod source;

#[cfg(test)]
pub mod fake;

pub use lichess_client::LichessClient;
pub use source::TournamentSource;
