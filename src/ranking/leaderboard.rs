use std::cmp::Ordering;

use crate::domain::{LeaderboardEntry, PlayerStats};

/// Rank players by score, highest first.
///
/// Ties keep their input order and still get distinct consecutive ranks.
pub fn build_leaderboard(players: &[PlayerStats]) -> Vec<LeaderboardEntry> {
    let mut sorted: Vec<&PlayerStats> = players.iter().collect();
    sorted.sort_by(|a, b| compare_scores_desc(a.score, b.score));

    sorted
        .into_iter()
        .enumerate()
        .map(|(idx, player)| LeaderboardEntry {
            rank: idx + 1,
            player: player.clone(),
            delta: None,
            highest_rank: None,
        })
        .collect()
}

fn compare_scores_desc(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, score: f64) -> PlayerStats {
        PlayerStats {
            score,
            ..PlayerStats::new(name)
        }
    }

    #[test]
    fn test_sorted_by_score_descending() {
        let players = vec![player("a", 1.0), player("b", 4.5), player("c", -2.0)];
        let board = build_leaderboard(&players);

        let names: Vec<&str> = board.iter().map(|e| e.player.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_ties_keep_input_order_without_shared_ranks() {
        let players = vec![
            player("first", 2.0),
            player("top", 3.0),
            player("second", 2.0),
            player("third", 2.0),
        ];
        let board = build_leaderboard(&players);

        let ranked: Vec<(usize, &str)> = board.iter().map(|e| (e.rank, e.player.name.as_str())).collect();
        assert_eq!(ranked, vec![(1, "top"), (2, "first"), (3, "second"), (4, "third")]);
    }

    #[test]
    fn test_ranks_are_gapless() {
        let players: Vec<PlayerStats> = (0..25).map(|i| player(&format!("p{}", i), (i % 7) as f64 * 0.5)).collect();
        let board = build_leaderboard(&players);

        let ranks: Vec<usize> = board.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, (1..=25).collect::<Vec<_>>());
        assert!(board.windows(2).all(|w| w[0].player.score >= w[1].player.score));
    }

    #[test]
    fn test_empty_leaderboard() {
        assert!(build_leaderboard(&[]).is_empty());
    }
}
