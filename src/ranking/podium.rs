use crate::domain::{Achievements, PlayerStats, Podium, PodiumEntry, PodiumKey};

pub const PODIUM_SIZE: usize = 3;

/// Top three players by a single statistic, ties in input order
pub fn build_podium(players: &[PlayerStats], key: PodiumKey) -> Podium {
    let mut sorted: Vec<&PlayerStats> = players.iter().collect();
    sorted.sort_by(|a, b| key.value_of(b).cmp(&key.value_of(a)));

    let entries = sorted
        .into_iter()
        .take(PODIUM_SIZE)
        .enumerate()
        .map(|(idx, player)| PodiumEntry {
            place: idx + 1,
            player: player.clone(),
            value: key.value_of(player),
        })
        .collect();

    Podium { key, entries }
}

pub fn build_achievements(players: &[PlayerStats]) -> Achievements {
    Achievements {
        waffles: build_podium(players, PodiumKey::WaffleWins),
        waffled: build_podium(players, PodiumKey::WaffleLosses),
        committed: build_podium(players, PodiumKey::GamesPlayed),
    }
}
