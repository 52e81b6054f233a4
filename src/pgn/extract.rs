use anyhow::{Context, Result};
use regex::Regex;
use std::collections::HashMap;

use crate::domain::{GameOutcome, ParseError, ResultKind};

const WHITE_WINS: &str = "1-0";
const BLACK_WINS: &str = "0-1";
const TIME_FORFEIT: &str = "Time forfeit";

/// Turns PGN game blocks into per-player outcomes
pub struct OutcomeExtractor {
    tag_regex: Regex,
}

/// Tag pairs of a single game, values unescaped
struct GameTags<'a> {
    tags: HashMap<&'a str, String>,
}

impl<'a> GameTags<'a> {
    fn required(&self, name: &'static str) -> Result<&str, ParseError> {
        self.tags
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
            .ok_or(ParseError::MissingTag(name))
    }

    fn optional(&self, name: &str) -> &str {
        self.tags.get(name).map(String::as_str).unwrap_or("")
    }

    fn flag(&self, name: &str) -> bool {
        matches!(self.optional(name), "1" | "true")
    }
}

impl OutcomeExtractor {
    pub fn new() -> Result<Self> {
        let tag_regex = Self::compile_regex()?;
        Ok(Self { tag_regex })
    }

    /// Extract the white and black outcomes of one game, in that order
    pub fn extract(&self, block: &str) -> Result<[GameOutcome; 2], ParseError> {
        let tags = self.parse_tags(block);

        let white = tags.required("White")?;
        let black = tags.required("Black")?;
        let white_berserk = tags.flag("WhiteBerserk");
        let black_berserk = tags.flag("BlackBerserk");
        let termination = tags.optional("Termination");

        let mut white_result = match Self::decisive_marker(&tags, block) {
            Some(WHITE_WINS) => ResultKind::Win,
            Some(BLACK_WINS) => ResultKind::Loss,
            _ => ResultKind::Draw,
        };

        if termination.contains(TIME_FORFEIT) {
            white_result = white_result.on_time_forfeit();
        }

        Ok([
            GameOutcome {
                player_name: white.to_string(),
                result_kind: white_result,
                berserk: white_berserk,
                opponent_berserk: black_berserk,
            },
            GameOutcome {
                player_name: black.to_string(),
                result_kind: white_result.mirrored(),
                berserk: black_berserk,
                opponent_berserk: white_berserk,
            },
        ])
    }

    fn compile_regex() -> Result<Regex> {
        Regex::new(r#"(?m)^\[(\w+)\s+"((?:[^"\\]|\\.)*)"\]\s*$"#).context("Failed to compile PGN tag regex")
    }

    fn parse_tags<'a>(&self, block: &'a str) -> GameTags<'a> {
        let mut tags = HashMap::new();
        for caps in self.tag_regex.captures_iter(block) {
            if let (Some(name), Some(value)) = (caps.get(1), caps.get(2)) {
                // first occurrence wins, later duplicates are ignored
                tags.entry(name.as_str())
                    .or_insert_with(|| unescape(value.as_str()));
            }
        }
        GameTags { tags }
    }

    /// The `Result` tag, or the game termination token closing the movetext.
    /// A blank `Result` tag counts as absent.
    fn decisive_marker<'b>(tags: &'b GameTags, block: &'b str) -> Option<&'b str> {
        let tagged = tags.tags.get("Result").map(|r| r.trim()).filter(|r| !r.is_empty());
        if let Some(result) = tagged {
            return Some(result);
        }

        block
            .lines()
            .filter(|line| !line.trim_start().starts_with('['))
            .flat_map(str::split_whitespace)
            .last()
    }
}

fn unescape(value: &str) -> String {
    value.replace("\\\"", "\"").replace("\\\\", "\\")
}
