//! Normalizer: raw description → complete game
//!
//! This is the single point where loosely structured input becomes a
//! `Game`. No solver ever sees a `RawDescription`.

use crate::error::{EngineError, Result};
use crate::game::{ExtensiveFormGame, Game, NormalGame, Player};
use crate::payoff::PayoffEntry;
use crate::profile::StrategyProfile;
use crate::raw::{GameType, RawDescription, RawPayoff, RawPlayer, RawStrategy};
use std::collections::HashSet;

/// Normalize a raw description into a game of its declared form.
///
/// Fails with `EngineError::MissingData` when the player list is missing or
/// empty, when a normal-form game has no strategy/payoff bundle, or when an
/// extensive-form game has no root node.
pub fn normalize(raw: &RawDescription) -> Result<Game> {
    let raw_players = match raw.players.as_deref() {
        Some(players) if !players.is_empty() => players,
        _ => {
            return Err(EngineError::MissingData {
                game_type: raw.game_type,
                detail: "no players",
            })
        }
    };

    match raw.game_type {
        GameType::NormalForm => {
            let bundle = raw.normal_form.as_ref().ok_or(EngineError::MissingData {
                game_type: GameType::NormalForm,
                detail: "no strategy/payoff bundle",
            })?;
            Ok(Game::Normal(normalize_normal_form(
                raw_players,
                &bundle.strategies,
                &bundle.payoffs,
            )))
        }
        GameType::ExtensiveForm => {
            let root = raw
                .extensive_form
                .as_ref()
                .and_then(|tree| tree.root_node.as_ref())
                .ok_or(EngineError::MissingData {
                    game_type: GameType::ExtensiveForm,
                    detail: "no root node",
                })?;
            Ok(Game::Extensive(ExtensiveFormGame {
                players: normalize_players(raw_players),
                root_node: root.clone(),
            }))
        }
    }
}

/// Assign ids to players that lack one (`P1`, `P2`, ... by position).
///
/// A generated id may coincide with one supplied for another player; the
/// ids are kept as they are and the clash is logged.
pub fn normalize_players(raw: &[RawPlayer]) -> Vec<Player> {
    let players: Vec<Player> = raw
        .iter()
        .enumerate()
        .map(|(i, p)| Player {
            id: match p.id.as_deref() {
                Some(id) if !id.is_empty() => id.to_owned(),
                _ => format!("P{}", i + 1),
            },
            name: p.name.clone(),
            role: p.role.clone(),
        })
        .collect();
    for id in duplicate_ids(&players) {
        log::warn!("player id {:?} is used by more than one player", id);
    }
    players
}

/// Ids held by more than one player, in first-seen order.
pub fn duplicate_ids(players: &[Player]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for player in players {
        let id = player.id.as_str();
        if !seen.insert(id) && !duplicates.contains(&id) {
            duplicates.push(id);
        }
    }
    duplicates
}

/// Build a complete normal-form game from raw parts.
///
/// Strategy assignments are matched to players by name first, then by id;
/// assignments made under a player's name and under their id are merged.
/// Each player's list keeps first-seen order without duplicates. A player
/// with no assignments ends up with an empty strategy set, which is accepted
/// and leaves the payoff table empty.
pub fn normalize_normal_form(
    raw_players: &[RawPlayer],
    assignments: &[RawStrategy],
    payoffs: &[RawPayoff],
) -> NormalGame {
    let players = normalize_players(raw_players);
    let strategies = group_strategies(&players, assignments);

    for (player, set) in players.iter().zip(&strategies) {
        if set.is_empty() {
            log::warn!("player {} ({}) has no strategies", player.id, player.name);
        }
    }

    let sparse = payoffs
        .iter()
        .map(|p| {
            PayoffEntry::new(
                StrategyProfile::new(p.strategy_profile.clone()),
                p.payoffs.clone(),
            )
        })
        .collect();

    let game = NormalGame::new(players, strategies, sparse);
    log::debug!(
        "normalized {}-player game with {} payoff entries ({} supplied)",
        game.num_players(),
        game.payoffs().len(),
        payoffs.len()
    );
    game
}

fn group_strategies(players: &[Player], assignments: &[RawStrategy]) -> Vec<Vec<String>> {
    let mut strategies: Vec<Vec<String>> = vec![Vec::new(); players.len()];
    for assignment in assignments {
        let owner = players
            .iter()
            .position(|p| p.name == assignment.player)
            .or_else(|| players.iter().position(|p| p.id == assignment.player));
        match owner {
            Some(i) => {
                if !strategies[i].contains(&assignment.strategy) {
                    strategies[i].push(assignment.strategy.clone());
                }
            }
            None => log::warn!(
                "strategy {:?} assigned to unknown player {:?}",
                assignment.strategy,
                assignment.player
            ),
        }
    }
    strategies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::GameTreeNode;
    use crate::raw::{RawExtensiveForm, RawNormalForm};

    fn player(id: Option<&str>, name: &str) -> RawPlayer {
        RawPlayer {
            id: id.map(str::to_owned),
            name: name.to_owned(),
            role: None,
        }
    }

    fn assign(player: &str, strategy: &str) -> RawStrategy {
        RawStrategy {
            player: player.to_owned(),
            strategy: strategy.to_owned(),
        }
    }

    fn description(game_type: GameType) -> RawDescription {
        RawDescription {
            game_type,
            players: Some(vec![player(None, "Alice"), player(None, "Bob")]),
            normal_form: None,
            extensive_form: None,
            ambiguities: Vec::new(),
            assumptions: Vec::new(),
        }
    }

    #[test]
    fn test_missing_ids_assigned_by_position() {
        let players = normalize_players(&[
            player(None, "A"),
            player(Some("x"), "B"),
            player(Some(""), "C"),
        ]);
        let ids: Vec<_> = players.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["P1", "x", "P3"]);
        assert_eq!(players[1].name, "B");
    }

    #[test]
    fn test_generated_id_clash_is_detected() {
        let players = normalize_players(&[
            player(None, "A"),
            player(Some("P1"), "B"),
            player(None, "C"),
        ]);
        assert_eq!(players[0].id, "P1");
        assert_eq!(players[1].id, "P1");
        assert_eq!(duplicate_ids(&players), vec!["P1"]);
        let distinct = normalize_players(&[player(None, "A"), player(None, "B")]);
        assert!(duplicate_ids(&distinct).is_empty());
    }

    #[test]
    fn test_strategies_grouped_deduplicated_in_order() {
        let game = normalize_normal_form(
            &[player(Some("P1"), "Alice"), player(Some("P2"), "Bob")],
            &[
                assign("Alice", "Up"),
                assign("P2", "Left"),
                assign("Alice", "Down"),
                assign("Alice", "Up"),
                assign("Bob", "Right"),
            ],
            &[],
        );
        assert_eq!(game.strategies_of(0), &["Up", "Down"]);
        assert_eq!(game.strategies_of(1), &["Left", "Right"]);
        assert_eq!(game.payoffs().len(), 4);
    }

    #[test]
    fn test_player_without_strategies_yields_empty_table() {
        let game = normalize_normal_form(
            &[player(None, "Alice"), player(None, "Bob")],
            &[assign("Alice", "Up"), assign("Alice", "Down")],
            &[RawPayoff {
                strategy_profile: vec!["Up".to_owned()],
                payoffs: vec![1.0, 2.0],
            }],
        );
        assert!(game.strategies_of(1).is_empty());
        assert!(game.payoffs().is_empty());
    }

    #[test]
    fn test_missing_normal_form_bundle_is_error() {
        let err = normalize(&description(GameType::NormalForm)).unwrap_err();
        assert!(matches!(
            err,
            EngineError::MissingData {
                game_type: GameType::NormalForm,
                ..
            }
        ));
    }

    #[test]
    fn test_missing_root_node_is_error() {
        let mut raw = description(GameType::ExtensiveForm);
        raw.extensive_form = Some(RawExtensiveForm::default());
        let err = normalize(&raw).unwrap_err();
        assert!(matches!(
            err,
            EngineError::MissingData {
                game_type: GameType::ExtensiveForm,
                ..
            }
        ));
    }

    #[test]
    fn test_missing_players_is_error() {
        let mut raw = description(GameType::NormalForm);
        raw.normal_form = Some(RawNormalForm::default());
        raw.players = None;
        assert!(normalize(&raw).is_err());
        raw.players = Some(Vec::new());
        assert!(normalize(&raw).is_err());
    }

    #[test]
    fn test_empty_bundle_is_accepted() {
        let mut raw = description(GameType::NormalForm);
        raw.normal_form = Some(RawNormalForm::default());
        let game = normalize(&raw).unwrap();
        let normal = game.as_normal().unwrap();
        assert_eq!(normal.num_players(), 2);
        assert!(normal.payoffs().is_empty());
    }

    #[test]
    fn test_extensive_form_keeps_tree() {
        let mut raw = description(GameType::ExtensiveForm);
        raw.extensive_form = Some(RawExtensiveForm {
            root_node: Some(GameTreeNode::terminal("end", vec![1.0, 1.0])),
        });
        match normalize(&raw).unwrap() {
            Game::Extensive(game) => {
                assert_eq!(game.players[1].id, "P2");
                assert!(game.root_node.is_terminal());
            }
            Game::Normal(_) => panic!("expected extensive-form game"),
        }
    }
}
