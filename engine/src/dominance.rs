//! Single-round dominance check
//!
//! For each player every strategy is compared against every alternative over
//! all choices of the other players. Weak dominance here means "never
//! worse": it does not additionally require a strict improvement somewhere,
//! so a strategy that ties an alternative everywhere weakly dominates it.

use crate::game::NormalGame;
use crate::profile::{enumerate, profile_count};
use serde::Serialize;

/// Strength of a dominance relation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dominance {
    /// Strictly better against every choice of the others
    Strictly,
    /// Never worse against any choice of the others
    Weakly,
}

/// A strategy that dominates every other strategy of its player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DominantStrategy {
    pub player_id: String,
    /// Display name of the player
    pub player: String,
    pub strategy: String,
    #[serde(rename = "type")]
    pub kind: Dominance,
}

/// Find every dominant strategy in the game.
///
/// Players with fewer than two strategies are skipped, as are players whose
/// opponents leave no profile to compare against. A strategy is reported at
/// most once, as strictly dominant if it qualifies, otherwise as weakly.
pub fn find_dominant_strategies(game: &NormalGame) -> Vec<DominantStrategy> {
    let mut dominant = Vec::new();
    for (player, info) in game.players().iter().enumerate() {
        let own = game.strategies_of(player);
        if own.len() < 2 {
            continue;
        }
        for candidate in own {
            if let Some(kind) = dominance_over_all(game, player, candidate) {
                dominant.push(DominantStrategy {
                    player_id: info.id.clone(),
                    player: info.name.clone(),
                    strategy: candidate.clone(),
                    kind,
                });
            }
        }
    }
    log::debug!("dominance search: {} dominant strategies", dominant.len());
    dominant
}

/// How `candidate` relates to all of `player`'s other strategies at once.
fn dominance_over_all(game: &NormalGame, player: usize, candidate: &str) -> Option<Dominance> {
    // Fix the player's own slot; the rest ranges over the opponents.
    let mut contexts = game.strategies().to_vec();
    contexts[player] = vec![candidate.to_owned()];
    if profile_count(&contexts) == 0 {
        return None;
    }

    let mut strictly = true;
    let mut weakly = true;
    for alternative in game.strategies_of(player) {
        if alternative == candidate {
            continue;
        }
        for profile in enumerate(&contexts) {
            let ours = game.payoff(&profile, player);
            let theirs = game.payoff(&profile.deviate(player, alternative), player);
            if ours <= theirs {
                strictly = false;
            }
            if ours < theirs {
                weakly = false;
            }
        }
        if !weakly {
            return None;
        }
    }

    if strictly {
        Some(Dominance::Strictly)
    } else {
        Some(Dominance::Weakly)
    }
}
