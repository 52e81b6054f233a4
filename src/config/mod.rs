pub mod settings;
pub mod tournaments;

pub use settings::{AppConfig, SeriesFilter};
pub use tournaments::manual_tournaments;
