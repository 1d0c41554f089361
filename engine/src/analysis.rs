//! Analysis façade
//!
//! Runs the independent solvers over one game and merges their outputs.
//! Nothing is cached between calls; each call owns its result.

use crate::dominance::{find_dominant_strategies, DominantStrategy};
use crate::equilibrium::{find_pure_nash, NashEquilibrium};
use crate::game::{Game, NormalGame};
use crate::properties::{has_saddle_point, is_zero_sum};
use serde::Serialize;

/// Everything computed about one game
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub nash_equilibria: Vec<NashEquilibrium>,
    pub dominant_strategies: Vec<DominantStrategy>,
    pub is_zero_sum: bool,
    pub has_saddle_point: bool,
}

/// Analyze a game of either form.
///
/// Extensive-form games are not solved: they get empty lists and false for
/// both properties.
pub fn analyze(game: &Game) -> AnalysisResult {
    match game {
        Game::Normal(normal) => analyze_normal(normal),
        Game::Extensive(_) => {
            log::warn!("extensive-form game: equilibrium and dominance analysis skipped");
            AnalysisResult::default()
        }
    }
}

/// Analyze a normal-form game
pub fn analyze_normal(game: &NormalGame) -> AnalysisResult {
    AnalysisResult {
        nash_equilibria: find_pure_nash(game),
        dominant_strategies: find_dominant_strategies(game),
        is_zero_sum: is_zero_sum(game),
        has_saddle_point: has_saddle_point(game),
    }
}
