//! Raw game descriptions as produced by the extraction step
//!
//! These types mirror the loosely structured JSON handed over by the
//! upstream collaborator. Every field that the collaborator may omit is
//! optional here; `normalize` is the only consumer.

use crate::node::GameTreeNode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared shape of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameType {
    /// Simultaneous moves with a payoff per strategy profile
    NormalForm,
    /// Sequential moves described as a decision tree
    ExtensiveForm,
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameType::NormalForm => write!(f, "normal-form"),
            GameType::ExtensiveForm => write!(f, "extensive-form"),
        }
    }
}

/// A player as described upstream; the id may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawPlayer {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// One (player, strategy) assignment. `player` may hold a name or an id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawStrategy {
    pub player: String,
    pub strategy: String,
}

/// One sparse payoff row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPayoff {
    pub strategy_profile: Vec<String>,
    pub payoffs: Vec<f64>,
}

/// Strategy and payoff bundle of a normal-form description.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RawNormalForm {
    #[serde(default)]
    pub strategies: Vec<RawStrategy>,
    #[serde(default)]
    pub payoffs: Vec<RawPayoff>,
}

/// Tree bundle of an extensive-form description.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawExtensiveForm {
    #[serde(default)]
    pub root_node: Option<GameTreeNode>,
}

/// Complete inbound description.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDescription {
    pub game_type: GameType,
    #[serde(default)]
    pub players: Option<Vec<RawPlayer>>,
    #[serde(default)]
    pub normal_form: Option<RawNormalForm>,
    #[serde(default)]
    pub extensive_form: Option<RawExtensiveForm>,
    /// Unclear aspects surfaced by the extraction step
    #[serde(default)]
    pub ambiguities: Vec<String>,
    /// Assumptions the extraction step made
    #[serde(default)]
    pub assumptions: Vec<String>,
}
