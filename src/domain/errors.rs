use thiserror::Error;

/// A single game block that could not be turned into outcomes
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("missing required tag [{0}]")]
    MissingTag(&'static str),
}

#[derive(Debug, Error, PartialEq)]
pub enum FeedError {
    #[error("feed is neither a JSON array nor newline-delimited JSON")]
    UnrecognizedFormat,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid tournament name pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    #[error("malformed manual tournament id: {0:?}")]
    MalformedTournamentId(String),
    #[error("WAF_REFRESH_SECS must be a whole number of seconds, got {0:?}")]
    InvalidRefreshInterval(String),
    #[error("refresh interval must be at least one second")]
    ZeroRefreshInterval,
}
