//! Pure-strategy Nash equilibrium search
//!
//! Exhaustive: every profile is tested against every unilateral deviation.
//! Target games are small and hand-authored, so there is no pruning.

use crate::game::NormalGame;
use crate::profile::StrategyProfile;
use serde::Serialize;

/// A profile from which no player gains by deviating alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NashEquilibrium {
    pub strategy_profile: StrategyProfile,
    pub payoffs: Vec<f64>,
}

/// Find all pure-strategy Nash equilibria, in profile enumeration order.
///
/// A deviation must be strictly better to break an equilibrium; ties are
/// consistent with it. Returns an empty list when none exists.
pub fn find_pure_nash(game: &NormalGame) -> Vec<NashEquilibrium> {
    let equilibria: Vec<NashEquilibrium> = game
        .profiles()
        .filter(|profile| {
            (0..game.num_players()).all(|player| is_best_response(game, profile, player))
        })
        .map(|profile| NashEquilibrium {
            payoffs: game.payoffs().lookup(&profile).into_owned(),
            strategy_profile: profile,
        })
        .collect();
    log::debug!(
        "equilibrium search: {} profiles, {} pure equilibria",
        game.payoffs().len(),
        equilibria.len()
    );
    equilibria
}

/// True when `player` cannot strictly improve on `profile` by switching to
/// another of their strategies with everyone else held fixed.
pub fn is_best_response(game: &NormalGame, profile: &StrategyProfile, player: usize) -> bool {
    let current = game.payoff(profile, player);
    game.strategies_of(player)
        .iter()
        .filter(|alt| profile.get(player) != Some(alt.as_str()))
        .all(|alt| game.payoff(&profile.deviate(player, alt), player) <= current)
}
