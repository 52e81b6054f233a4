use log::debug;
use serde_json::Value;

use crate::domain::{FeedError, Tournament};

/// Parse the team tournament feed.
///
/// Accepts a JSON array or newline-delimited JSON. Entries that don't map to a
/// tournament are skipped; only a body in neither form is an error.
pub fn parse_tournament_feed(text: &str) -> Result<Vec<Tournament>, FeedError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(trimmed) {
        return Ok(items.into_iter().filter_map(to_tournament).collect());
    }

    let values: Vec<Value> = trimmed
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match serde_json::from_str::<Value>(line) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("Skipping unparseable feed line: {}", e);
                None
            }
        })
        .collect();

    if values.is_empty() {
        return Err(FeedError::UnrecognizedFormat);
    }

    Ok(values.into_iter().filter_map(to_tournament).collect())
}

fn to_tournament(value: Value) -> Option<Tournament> {
    serde_json::from_value(value)
        .map_err(|e| debug!("Skipping malformed feed entry: {}", e))
        .ok()
}
