use regex::Regex;
use std::time::Duration;

use super::tournaments::manual_tournaments;
use crate::domain::ConfigError;

#[derive(Debug, Clone)]
pub struct SeriesSettings {
    pub team_slug: String,
    pub series_name: String,
    pub manual_tournaments: Vec<String>,
}

impl Default for SeriesSettings {
    fn default() -> Self {
        Self {
            team_slug: "world-antichess-front".to_string(),
            series_name: "WAF-FLED".to_string(),
            manual_tournaments: manual_tournaments(),
        }
    }
}

impl SeriesSettings {
    /// Pattern a feed entry's name must match to belong to the series
    pub fn name_pattern(&self) -> String {
        format!(r"^Weekly {} \d+ Arena$", regex::escape(&self.series_name))
    }
}

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub user_agent: String,
    pub connect_timeout_secs: u64,
    /// Longest silence tolerated while a response is streaming in
    pub read_timeout_secs: u64,
    pub base_url: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            user_agent: "WafLeaderboard/1.0".to_string(),
            connect_timeout_secs: 10,
            read_timeout_secs: 30,
            base_url: "https://lichess.org".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RefreshSettings {
    pub interval_secs: u64,
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self {
            interval_secs: 5 * 60,
        }
    }
}

impl RefreshSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub series: SeriesSettings,
    pub client: ClientSettings,
    pub refresh: RefreshSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `WAF_*` / `LICHESS_BASE_URL` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(slug) = lookup("WAF_TEAM_SLUG") {
            config.series.team_slug = slug;
        }
        if let Some(series) = lookup("WAF_SERIES_NAME") {
            config.series.series_name = series;
        }
        if let Some(ids) = lookup("WAF_MANUAL_TOURNAMENTS") {
            config.series.manual_tournaments = ids
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(String::from)
                .collect();
        }
        if let Some(secs) = lookup("WAF_REFRESH_SECS") {
            config.refresh.interval_secs = secs
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidRefreshInterval(secs.clone()))?;
        }
        if let Some(url) = lookup("LICHESS_BASE_URL") {
            config.client.base_url = url.trim_end_matches('/').to_string();
        }

        Ok(config)
    }

    /// Check the static configuration once, at startup
    pub fn validate(&self) -> Result<SeriesFilter, ConfigError> {
        if let Some(bad) = self
            .series
            .manual_tournaments
            .iter()
            .find(|id| !is_tournament_id(id))
        {
            return Err(ConfigError::MalformedTournamentId(bad.clone()));
        }

        if self.refresh.interval_secs == 0 {
            return Err(ConfigError::ZeroRefreshInterval);
        }

        SeriesFilter::new(&self.series)
    }
}

/// Compiled series membership test plus the manual allow-list
#[derive(Debug, Clone)]
pub struct SeriesFilter {
    name_regex: Regex,
    manual_ids: Vec<String>,
}

impl SeriesFilter {
    pub fn new(settings: &SeriesSettings) -> Result<Self, ConfigError> {
        let name_regex = Regex::new(&settings.name_pattern())?;
        Ok(Self {
            name_regex,
            manual_ids: settings.manual_tournaments.clone(),
        })
    }

    pub fn matches(&self, tournament_name: &str) -> bool {
        self.name_regex.is_match(tournament_name)
    }

    pub fn manual_ids(&self) -> &[String] {
        &self.manual_ids
    }
}

// lichess arena ids are eight alphanumeric characters
fn is_tournament_id(id: &str) -> bool {
    id.len() == 8 && id.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config_is_valid() {
        let filter = AppConfig::new().validate().unwrap();
        assert_eq!(filter.manual_ids().len(), 6);
    }

    #[test]
    fn test_series_pattern() {
        let filter = SeriesFilter::new(&SeriesSettings::default()).unwrap();

        assert!(filter.matches("Weekly WAF-FLED 12 Arena"));
        assert!(filter.matches("Weekly WAF-FLED 1 Arena"));
        assert!(!filter.matches("Weekly WAF-FLED Arena"));
        assert!(!filter.matches("Weekly WAF-FLED 12 Arena Rematch"));
        assert!(!filter.matches("Daily WAF-FLED 12 Arena"));
    }

    #[test]
    fn test_malformed_manual_id_is_rejected() {
        let mut config = AppConfig::new();
        config.series.manual_tournaments.push("not an id".to_string());

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::MalformedTournamentId(id) if id == "not an id"));
    }

    #[test]
    fn test_zero_refresh_is_rejected() {
        let mut config = AppConfig::new();
        config.refresh.interval_secs = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroRefreshInterval)));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("WAF_TEAM_SLUG", "other-team"),
            ("WAF_MANUAL_TOURNAMENTS", "abcdEFGH, 12345678,,"),
            ("WAF_REFRESH_SECS", "60"),
            ("LICHESS_BASE_URL", "http://localhost:8080/"),
        ]);
        let config = AppConfig::from_lookup(|key| env.get(key).map(|v| v.to_string())).unwrap();

        assert_eq!(config.series.team_slug, "other-team");
        assert_eq!(config.series.manual_tournaments, vec!["abcdEFGH", "12345678"]);
        assert_eq!(config.refresh.interval(), Duration::from_secs(60));
        assert_eq!(config.client.base_url, "http://localhost:8080");
        assert_eq!(config.series.series_name, "WAF-FLED");
    }

    #[test]
    fn test_non_numeric_refresh_is_rejected() {
        for value in ["5m", "", "-60"] {
            let err = AppConfig::from_lookup(|key| (key == "WAF_REFRESH_SECS").then(|| value.to_string())).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidRefreshInterval(v) if v == value));
        }
    }
}
