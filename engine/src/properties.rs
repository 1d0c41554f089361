//! Whole-game property checks: zero-sum and saddle point

use crate::game::NormalGame;
use crate::profile::StrategyProfile;

/// Largest absolute payoff sum still treated as zero.
pub const ZERO_SUM_TOLERANCE: f64 = 1e-4;

/// True when every payoff vector in the table sums to (nearly) zero.
///
/// An empty table is vacuously zero-sum.
pub fn is_zero_sum(game: &NormalGame) -> bool {
    game.payoffs()
        .entries()
        .iter()
        .all(|entry| entry.payoffs.iter().sum::<f64>().abs() < ZERO_SUM_TOLERANCE)
}

/// True when a two-player game has a cell whose payoff to player 0 is both
/// the minimum of its row and the maximum of its column.
///
/// Always false for any other player count. Values come straight from the
/// table, so equality is exact.
pub fn has_saddle_point(game: &NormalGame) -> bool {
    if game.num_players() != 2 {
        return false;
    }
    let rows = game.strategies_of(0);
    let cols = game.strategies_of(1);
    let value = |r: &str, c: &str| game.payoff(&StrategyProfile::from(&[r, c][..]), 0);

    for r in rows {
        let row_min = cols
            .iter()
            .map(|c| value(r.as_str(), c.as_str()))
            .fold(f64::INFINITY, f64::min);
        for c in cols {
            let col_max = rows
                .iter()
                .map(|other| value(other.as_str(), c.as_str()))
                .fold(f64::NEG_INFINITY, f64::max);
            let entry = value(r.as_str(), c.as_str());
            if entry == row_min && entry == col_max {
                return true;
            }
        }
    }
    false
}
