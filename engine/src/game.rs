//! Normalized game model
//!
//! A `NormalGame` is only ever produced by the normalizer (or the
//! constructor below, which runs the same completion step), so its payoff
//! table always holds exactly one entry per strategy profile and every
//! payoff vector has one value per player.

use crate::node::GameTreeNode;
use crate::payoff::{PayoffEntry, PayoffTable};
use crate::profile::{enumerate, Profiles, StrategyProfile};
use serde::Serialize;

/// A participant in the game. Position in `NormalGame::players` fixes the
/// player's index in every profile and payoff vector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Player {
    /// Create a player without a role
    pub fn new(id: &str, name: &str) -> Self {
        Player {
            id: id.to_owned(),
            name: name.to_owned(),
            role: None,
        }
    }
}

/// Complete normal-form game
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalGame {
    players: Vec<Player>,
    /// strategies[i] = distinct strategy names of player i, first-seen order
    strategies: Vec<Vec<String>>,
    payoffs: PayoffTable,
}

impl NormalGame {
    /// Build a game and complete its payoff table from sparse entries.
    pub fn new(
        players: Vec<Player>,
        strategies: Vec<Vec<String>>,
        sparse: Vec<PayoffEntry>,
    ) -> Self {
        let payoffs = PayoffTable::build(players.len(), &strategies, sparse);
        NormalGame {
            players,
            strategies,
            payoffs,
        }
    }

    /// Players in index order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Number of players
    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    /// Per-player strategy sets
    pub fn strategies(&self) -> &[Vec<String>] {
        &self.strategies
    }

    /// Strategy set of one player
    pub fn strategies_of(&self, player: usize) -> &[String] {
        &self.strategies[player]
    }

    /// The completed payoff table
    pub fn payoffs(&self) -> &PayoffTable {
        &self.payoffs
    }

    /// Payoff to `player` under `profile`
    pub fn payoff(&self, profile: &StrategyProfile, player: usize) -> f64 {
        self.payoffs.payoff(profile, player)
    }

    /// Every strategy profile, in enumeration order
    pub fn profiles(&self) -> Profiles<'_> {
        enumerate(&self.strategies)
    }
}

/// Complete extensive-form game
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensiveFormGame {
    pub players: Vec<Player>,
    pub root_node: GameTreeNode,
}

/// Any normalized game
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Game {
    #[serde(rename = "normal-form")]
    Normal(NormalGame),
    #[serde(rename = "extensive-form")]
    Extensive(ExtensiveFormGame),
}

impl Game {
    /// Players of either form
    pub fn players(&self) -> &[Player] {
        match self {
            Game::Normal(game) => game.players(),
            Game::Extensive(game) => &game.players,
        }
    }

    /// The normal-form game, if this is one
    pub fn as_normal(&self) -> Option<&NormalGame> {
        match self {
            Game::Normal(game) => Some(game),
            Game::Extensive(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::profile_count;

    #[test]
    fn test_table_size_is_product_of_strategy_counts() {
        let players = vec![Player::new("P1", "A"), Player::new("P2", "B"), Player::new("P3", "C")];
        let strategies = vec![
            vec!["x".to_owned(), "y".to_owned()],
            vec!["u".to_owned(), "v".to_owned(), "w".to_owned()],
            vec!["k".to_owned()],
        ];
        let game = NormalGame::new(players, strategies, Vec::new());
        assert_eq!(game.payoffs().len(), profile_count(game.strategies()));
        assert_eq!(game.payoffs().len(), 6);
        for entry in game.payoffs().entries() {
            assert_eq!(entry.payoffs.len(), game.num_players());
        }
    }

    #[test]
    fn test_game_serializes_with_type_tag() {
        let game = Game::Normal(NormalGame::new(
            vec![Player::new("P1", "Solo")],
            vec![vec!["Go".to_owned()]],
            Vec::new(),
        ));
        let value = serde_json::to_value(&game).unwrap();
        assert_eq!(value["type"], "normal-form");
        assert_eq!(value["strategies"][0][0], "Go");
        assert_eq!(value["payoffs"][0]["strategyProfile"][0], "Go");
        assert_eq!(value["payoffs"][0]["payoffs"][0], 0.0);
    }
}
