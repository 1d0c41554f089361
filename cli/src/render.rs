//! Output rendering: human-readable text, JSON export and CSV payoff export

use crate::{CliError, Format, Report};
use csv::{Terminator, WriterBuilder};
use gamelens_engine::dominance::Dominance;
use gamelens_engine::{AnalysisResult, ExtensiveFormGame, Game, NormalGame};
use gamelens_tree::{build_tree, summarize};
use serde::Serialize;
use std::fmt;

/// Render a report in the requested format
pub fn render(report: &Report, format: Format) -> Result<String, CliError> {
    match format {
        Format::Text => Ok(TextReport(report).to_string()),
        Format::Json => {
            let export = JsonExport {
                game: &report.game,
                analysis: &report.analysis,
                ambiguities: &report.ambiguities,
                assumptions: &report.assumptions,
            };
            let mut json = serde_json::to_string_pretty(&export)?;
            json.push('\n');
            Ok(json)
        }
        Format::Csv => Ok(csv_payoffs(&report.game)?),
    }
}

#[derive(Serialize)]
struct JsonExport<'a> {
    game: &'a Game,
    analysis: &'a AnalysisResult,
    ambiguities: &'a [String],
    assumptions: &'a [String],
}

fn join(values: &[f64]) -> String {
    values
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

struct TextReport<'a>(&'a Report);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(f, "Players:")?;
        for player in report.game.players() {
            match &player.role {
                Some(role) => writeln!(f, "  {:<4} {} ({})", player.id, player.name, role)?,
                None => writeln!(f, "  {:<4} {}", player.id, player.name)?,
            }
        }
        match &report.game {
            Game::Normal(game) => write_normal(f, game, &report.analysis)?,
            Game::Extensive(game) => write_extensive(f, game)?,
        }
        for (heading, notes) in [
            ("Ambiguities", &report.ambiguities),
            ("Assumptions", &report.assumptions),
        ] {
            if !notes.is_empty() {
                writeln!(f, "{}:", heading)?;
                for note in notes {
                    writeln!(f, "  - {}", note)?;
                }
            }
        }
        writeln!(f)
    }
}

fn write_normal(
    f: &mut fmt::Formatter<'_>,
    game: &NormalGame,
    analysis: &AnalysisResult,
) -> fmt::Result {
    writeln!(f, "Game: normal-form")?;
    writeln!(f, "Strategies:")?;
    for (player, set) in game.players().iter().zip(game.strategies()) {
        writeln!(f, "  {}: {}", player.name, set.join(", "))?;
    }
    writeln!(f, "Payoffs:")?;
    for entry in game.payoffs().entries() {
        writeln!(f, "  {:<32} {}", entry.strategy_profile.to_string(), join(&entry.payoffs))?;
    }

    writeln!(f, "Pure Nash equilibria:")?;
    if analysis.nash_equilibria.is_empty() {
        writeln!(f, "  none")?;
    }
    for eq in &analysis.nash_equilibria {
        writeln!(f, "  {} -> {}", eq.strategy_profile, join(&eq.payoffs))?;
    }

    writeln!(f, "Dominant strategies:")?;
    if analysis.dominant_strategies.is_empty() {
        writeln!(f, "  none")?;
    }
    for d in &analysis.dominant_strategies {
        let kind = match d.kind {
            Dominance::Strictly => "strictly",
            Dominance::Weakly => "weakly",
        };
        writeln!(f, "  {}: {} ({})", d.player, d.strategy, kind)?;
    }

    writeln!(f, "Zero-sum: {}", yes_no(analysis.is_zero_sum))?;
    writeln!(f, "Saddle point: {}", yes_no(analysis.has_saddle_point))
}

fn write_extensive(f: &mut fmt::Formatter<'_>, game: &ExtensiveFormGame) -> fmt::Result {
    let tree = build_tree(&game.root_node);
    let summary = summarize(&tree);
    writeln!(f, "Game: extensive-form (not solved)")?;
    writeln!(
        f,
        "Tree: {} decision, {} chance, {} terminal, depth {}",
        summary.decision_nodes, summary.chance_nodes, summary.terminal_nodes, summary.max_depth
    )?;
    writeln!(f, "Acting players: {}", summary.acting_players.join(", "))?;
    writeln!(f, "Outcomes:")?;
    for leaf in tree.leaves() {
        let payoffs = leaf.payoffs.as_deref().map(join).unwrap_or_default();
        writeln!(f, "  {:<32} {}", tree.path(leaf.id).join(" > "), payoffs)?;
    }
    Ok(())
}

const EXTENSIVE_CSV_NOTICE: &str =
    "Game Type: Extensive-Form\nExport as JSON for full tree structure.\n";

/// Payoff table as CSV: one column for the profile, one per player.
///
/// Extensive-form games have no table; a short notice is emitted instead.
fn csv_payoffs(game: &Game) -> Result<String, csv::Error> {
    let game = match game {
        Game::Normal(game) => game,
        Game::Extensive(_) => return Ok(EXTENSIVE_CSV_NOTICE.to_owned()),
    };

    let mut output = Vec::new();
    {
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_writer(&mut output);
        let header = std::iter::once("Strategy Profile".to_owned())
            .chain(game.players().iter().map(|p| format!("{} Payoff", p.name)));
        writer.write_record(header)?;
        for entry in game.payoffs().entries() {
            let row = std::iter::once(entry.strategy_profile.to_string())
                .chain(entry.payoffs.iter().map(f64::to_string));
            writer.write_record(row)?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8_lossy(&output).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_report;
    use gamelens_engine::catalogue::example_by_id;

    fn report(id: &str) -> Report {
        let raw = example_by_id(id).map(|e| e.raw()).unwrap();
        build_report(raw).unwrap()
    }

    #[test]
    fn test_csv_header_and_rows() {
        let csv = render(&report("prisoners-dilemma"), Format::Csv).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "Strategy Profile,Suspect A Payoff,Suspect B Payoff");
        assert_eq!(lines[1], "\"(Cooperate, Cooperate)\",-1,-1");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_csv_quotes_names_with_delimiters() {
        let raw = serde_json::from_str(
            r#"{
                "gameType": "normal-form",
                "players": [{ "name": "Smith, J." }, { "name": "Bob" }],
                "normalForm": {
                    "strategies": [
                        { "player": "Smith, J.", "strategy": "Say \"no\"" },
                        { "player": "Bob", "strategy": "Wait" }
                    ],
                    "payoffs": [
                        { "strategyProfile": ["Say \"no\"", "Wait"], "payoffs": [1, 2] }
                    ]
                }
            }"#,
        )
        .unwrap();
        let out = render(&build_report(raw).unwrap(), Format::Csv).unwrap();

        let mut reader = csv::Reader::from_reader(out.as_bytes());
        let header = reader.headers().unwrap().clone();
        assert_eq!(header.len(), 3);
        assert_eq!(&header[1], "Smith, J. Payoff");
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "(Say \"no\", Wait)");
        assert_eq!(&rows[0][2], "2");
    }

    #[test]
    fn test_csv_extensive_form_notice() {
        let csv = render(&report("entry-game"), Format::Csv).unwrap();
        assert!(csv.starts_with("Game Type: Extensive-Form"));
    }

    #[test]
    fn test_json_export_shape() {
        let json = render(&report("matching-pennies"), Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["game"]["type"], "normal-form");
        assert_eq!(value["analysis"]["isZeroSum"], true);
        assert!(value["ambiguities"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_text_mentions_equilibrium_and_tree() {
        let text = render(&report("prisoners-dilemma"), Format::Text).unwrap();
        assert!(text.contains("(Betray, Betray) -> -2, -2"));
        assert!(text.contains("Suspect A: Betray (strictly)"));

        let text = render(&report("ultimatum-game"), Format::Text).unwrap();
        assert!(text.contains("Tree: 3 decision, 0 chance, 4 terminal, depth 2"));
        assert!(text.contains("Unfair > Accept"));
    }
}
