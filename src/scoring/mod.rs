use crate::domain::{GameOutcome, ResultKind};

pub type Points = f64;

/// Points awarded for one side of a game.
///
/// Berserking raises the reward for a decisive win, flag losses against a
/// berserking opponent cost an extra point. The loser's own berserk never matters.
pub fn score_of(kind: ResultKind, berserk: bool, opponent_berserk: bool) -> Points {
    match kind {
        ResultKind::Win => {
            if berserk {
                1.5
            } else {
                1.0
            }
        }
        ResultKind::Loss => -1.0,
        ResultKind::FlagWin => {
            if berserk {
                3.0
            } else {
                2.0
            }
        }
        ResultKind::FlagLoss => {
            if opponent_berserk {
                -3.0
            } else {
                -2.0
            }
        }
        ResultKind::Draw => 0.0,
    }
}

pub fn score_outcome(outcome: &GameOutcome) -> Points {
    score_of(outcome.result_kind, outcome.berserk, outcome.opponent_berserk)
}
