use std::collections::HashMap;

use super::models::{GameOutcome, PlayerStats, ResultKind};
use crate::scoring::score_outcome;

/// Player totals keyed by name, iterated in first-seen order
#[derive(Debug, Clone, Default)]
pub struct Standings {
    players: Vec<PlayerStats>,
    index: HashMap<String, usize>,
}

impl Standings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a full outcome sequence into fresh standings
    pub fn from_outcomes<'a, I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = &'a GameOutcome>,
    {
        let mut standings = Self::new();
        for outcome in outcomes {
            standings.record(outcome);
        }
        standings
    }

    pub fn get_or_insert_default(&mut self, name: &str) -> &mut PlayerStats {
        let idx = match self.index.get(name) {
            Some(&idx) => idx,
            None => {
                self.players.push(PlayerStats::new(name));
                self.index.insert(name.to_string(), self.players.len() - 1);
                self.players.len() - 1
            }
        };
        &mut self.players[idx]
    }

    pub fn record(&mut self, outcome: &GameOutcome) {
        let player = self.get_or_insert_default(&outcome.player_name);
        player.score += score_outcome(outcome);
        player.games_played += 1;

        match outcome.result_kind {
            ResultKind::FlagWin => player.waffle_wins += 1,
            ResultKind::FlagLoss => player.waffle_losses += 1,
            _ => {}
        }
    }

    pub fn get(&self, name: &str) -> Option<&PlayerStats> {
        self.index.get(name).map(|&idx| &self.players[idx])
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn players(&self) -> &[PlayerStats] {
        &self.players
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(name: &str, kind: ResultKind, berserk: bool, opponent_berserk: bool) -> GameOutcome {
        GameOutcome {
            player_name: name.to_string(),
            result_kind: kind,
            berserk,
            opponent_berserk,
        }
    }

    fn sample_outcomes() -> Vec<GameOutcome> {
        vec![
            outcome("alice", ResultKind::FlagWin, true, false),
            outcome("bob", ResultKind::FlagLoss, false, true),
            outcome("carol", ResultKind::Win, true, false),
            outcome("alice", ResultKind::Loss, false, true),
            outcome("bob", ResultKind::Draw, false, false),
            outcome("carol", ResultKind::Draw, false, false),
        ]
    }

    #[test]
    fn test_record_accumulates_all_counters() {
        let standings = Standings::from_outcomes(&sample_outcomes());

        let alice = standings.get("alice").unwrap();
        assert_eq!(alice.score, 2.0);
        assert_eq!(alice.waffle_wins, 1);
        assert_eq!(alice.waffle_losses, 0);
        assert_eq!(alice.games_played, 2);

        let bob = standings.get("bob").unwrap();
        assert_eq!(bob.score, -3.0);
        assert_eq!(bob.waffle_losses, 1);
        assert_eq!(bob.games_played, 2);

        let carol = standings.get("carol").unwrap();
        assert_eq!(carol.score, 1.5);
        assert_eq!(carol.games_played, 2);
    }

    #[test]
    fn test_insertion_order_is_first_seen() {
        let standings = Standings::from_outcomes(&sample_outcomes());
        let names: Vec<&str> = standings.players().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn test_per_player_totals_ignore_order() {
        let forward = Standings::from_outcomes(&sample_outcomes());
        let mut reversed_input = sample_outcomes();
        reversed_input.reverse();
        let reversed = Standings::from_outcomes(&reversed_input);

        assert_eq!(forward.len(), reversed.len());
        for player in forward.players() {
            assert_eq!(Some(player), reversed.get(&player.name));
        }
    }

    #[test]
    fn test_get_or_insert_default_creates_zeroed_player() {
        let mut standings = Standings::new();
        let player = standings.get_or_insert_default("dave");
        assert_eq!(player.games_played, 0);
        assert_eq!(player.score, 0.0);
        player.games_played = 4;

        assert_eq!(standings.get_or_insert_default("dave").games_played, 4);
        assert_eq!(standings.len(), 1);
    }
}
