use std::collections::HashMap;

use crate::domain::LeaderboardEntry;

/// Scores and best ranks remembered between refreshes
#[derive(Debug, Default)]
pub struct RankHistory {
    previous_scores: HashMap<String, f64>,
    highest_ranks: HashMap<String, usize>,
}

impl RankHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Annotate a fresh leaderboard with score deltas and best ranks, then remember it
    pub fn apply(&mut self, entries: &mut [LeaderboardEntry]) {
        for entry in entries.iter_mut() {
            let name = &entry.player.name;
            entry.delta = self
                .previous_scores
                .get(name)
                .map(|previous| entry.player.score - previous);

            let best = self
                .highest_ranks
                .entry(name.clone())
                .and_modify(|rank| *rank = (*rank).min(entry.rank))
                .or_insert(entry.rank);
            entry.highest_rank = Some(*best);
        }

        self.previous_scores = entries
            .iter()
            .map(|entry| (entry.player.name.clone(), entry.player.score))
            .collect();
    }
}
