//! Engine error type
//!
//! Normalization is the only fallible step in the engine. Once a `Game` has
//! been constructed every solver is total and returns a plain value.

use crate::raw::GameType;
use thiserror::Error;

/// Errors raised while turning a raw description into a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The description declares a game type but omits the data needed to
    /// build it (no player list, no normal-form bundle, no root node).
    #[error("{game_type} game is missing required data: {detail}")]
    MissingData {
        game_type: GameType,
        detail: &'static str,
    },
}

/// Engine result alias.
pub type Result<T> = std::result::Result<T, EngineError>;
