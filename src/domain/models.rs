use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tournament lifecycle state as reported by lichess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "Value")]
pub enum TournamentStatus {
    #[default]
    Created,
    Started,
    Finished,
}

// The arena API reports numeric codes (10/20/30), older feeds use names.
impl TryFrom<Value> for TournamentStatus {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match &value {
            Value::Number(n) => match n.as_i64() {
                Some(10) => Ok(TournamentStatus::Created),
                Some(20) => Ok(TournamentStatus::Started),
                Some(30) => Ok(TournamentStatus::Finished),
                _ => Err(format!("unknown tournament status code: {}", n)),
            },
            Value::String(s) => match s.as_str() {
                "created" => Ok(TournamentStatus::Created),
                "started" => Ok(TournamentStatus::Started),
                "finished" => Ok(TournamentStatus::Finished),
                _ => Err(format!("unknown tournament status: {}", s)),
            },
            _ => Err(format!("invalid tournament status: {}", value)),
        }
    }
}

/// Arena tournament entry from the team feed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: String,
    pub name: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub starts_at: DateTime<Utc>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub finishes_at: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: TournamentStatus,
}

impl Tournament {
    pub fn end_time(&self) -> DateTime<Utc> {
        self.finishes_at.or(self.ends_at).unwrap_or(self.starts_at)
    }

    /// A tournament is over once lichess says so or its end time has passed
    pub fn is_past(&self, now: DateTime<Utc>) -> bool {
        self.status == TournamentStatus::Finished || self.end_time() < now
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    Win,
    Loss,
    Draw,
    FlagWin,
    FlagLoss,
}

impl ResultKind {
    /// The result the opposing side receives for the same game
    pub fn mirrored(self) -> Self {
        match self {
            ResultKind::Win => ResultKind::Loss,
            ResultKind::Loss => ResultKind::Win,
            ResultKind::Draw => ResultKind::Draw,
            ResultKind::FlagWin => ResultKind::FlagLoss,
            ResultKind::FlagLoss => ResultKind::FlagWin,
        }
    }

    /// Decisive results become flag results when the game ended on time
    pub fn on_time_forfeit(self) -> Self {
        match self {
            ResultKind::Win => ResultKind::FlagWin,
            ResultKind::Loss => ResultKind::FlagLoss,
            other => other,
        }
    }
}

/// One player's view of a single game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameOutcome {
    pub player_name: String,
    pub result_kind: ResultKind,
    pub berserk: bool,
    pub opponent_berserk: bool,
}

/// Running totals for one player
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub name: String,
    pub score: f64,
    pub waffle_wins: u32,
    pub waffle_losses: u32,
    pub games_played: u32,
}

impl PlayerStats {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: usize,
    #[serde(flatten)]
    pub player: PlayerStats,
    /// Score change since the previous run, absent for new players
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest_rank: Option<usize>,
}

/// Statistic a podium is ranked by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PodiumKey {
    WaffleWins,
    WaffleLosses,
    GamesPlayed,
}

impl PodiumKey {
    pub fn value_of(&self, player: &PlayerStats) -> u32 {
        match self {
            PodiumKey::WaffleWins => player.waffle_wins,
            PodiumKey::WaffleLosses => player.waffle_losses,
            PodiumKey::GamesPlayed => player.games_played,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            PodiumKey::WaffleWins => "Most waffles",
            PodiumKey::WaffleLosses => "Most waffled",
            PodiumKey::GamesPlayed => "Most committed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodiumEntry {
    pub place: usize,
    #[serde(flatten)]
    pub player: PlayerStats,
    /// The statistic this podium ranks by
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Podium {
    pub key: PodiumKey,
    pub entries: Vec<PodiumEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievements {
    pub waffles: Podium,
    pub waffled: Podium,
    pub committed: Podium,
}
