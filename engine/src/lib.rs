//! gamelens Engine - Normal-form game model and analysis
//!
//! This crate contains the core game types (players, strategy profiles,
//! payoff tables), the normalizer that turns a loosely structured raw
//! description into a complete game, and the solvers that analyze it:
//! pure-strategy Nash equilibria, dominant strategies, zero-sum and
//! saddle-point checks.
//!
//! The engine is synchronous, performs no I/O and has zero UI dependencies.

pub mod analysis;
pub mod catalogue;
pub mod dominance;
pub mod equilibrium;
pub mod error;
pub mod game;
pub mod node;
pub mod normalize;
pub mod payoff;
pub mod profile;
pub mod properties;
pub mod raw;

pub use analysis::{analyze, analyze_normal, AnalysisResult};
pub use error::{EngineError, Result};
pub use game::{ExtensiveFormGame, Game, NormalGame, Player};
pub use normalize::normalize;
pub use raw::RawDescription;
