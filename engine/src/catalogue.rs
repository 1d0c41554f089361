//! Built-in catalogue of classic games
//!
//! Each entry pairs the prose a user would type with the structured
//! description the extraction step is expected to return for it.

use crate::node::{Branch, GameTreeNode};
use crate::raw::{
    GameType, RawDescription, RawExtensiveForm, RawNormalForm, RawPayoff, RawPlayer, RawStrategy,
};

/// A catalogue entry
#[derive(Debug, Clone, Copy)]
pub struct ExampleGame {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    build: fn() -> RawDescription,
}

impl ExampleGame {
    /// Structured description of this game
    pub fn raw(&self) -> RawDescription {
        (self.build)()
    }
}

static CATALOGUE: [ExampleGame; 10] = [
    ExampleGame {
        id: "prisoners-dilemma",
        title: "Prisoner's Dilemma",
        category: "Classic",
        description: "Two suspects are interrogated separately. If both stay silent, each gets 1 year in prison. If one betrays the other while the other stays silent, the betrayer goes free and the other gets 3 years. If both betray each other, each gets 2 years in prison.",
        build: prisoners_dilemma,
    },
    ExampleGame {
        id: "battle-of-sexes",
        title: "Battle of the Sexes",
        category: "Coordination",
        description: "A couple wants to spend the evening together but disagree on where to go. Alice prefers the Opera, Bob prefers the Football game. If both go to Opera, Alice gets 3 and Bob gets 1. If both go to Football, Alice gets 1 and Bob gets 3. If they go to different places, both get 0.",
        build: battle_of_sexes,
    },
    ExampleGame {
        id: "stag-hunt",
        title: "Stag Hunt",
        category: "Coordination",
        description: "Two hunters can cooperate to hunt a stag (worth 4 each) or individually hunt a hare (worth 1 each). If one hunts stag alone while the other hunts hare, the stag hunter gets nothing (0) and the hare hunter gets 1.",
        build: stag_hunt,
    },
    ExampleGame {
        id: "chicken",
        title: "Chicken (Hawk-Dove)",
        category: "Anti-Coordination",
        description: "Two drivers race toward each other. Each can Swerve or Straight. If both Swerve, each gets 0. If one Swerves and the other goes Straight, the one who Swerved gets -1 and the one who went Straight gets 1. If both go Straight, both crash and get -10.",
        build: chicken,
    },
    ExampleGame {
        id: "matching-pennies",
        title: "Matching Pennies",
        category: "Zero-Sum",
        description: "Two players each place a penny on a table, either Heads or Tails. If the pennies match, Player 1 wins and gets +1 while Player 2 gets -1. If they don't match, Player 2 wins and gets +1 while Player 1 gets -1.",
        build: matching_pennies,
    },
    ExampleGame {
        id: "entry-game",
        title: "Entry Game (Market Entry)",
        category: "Sequential",
        description: "A potential Entrant decides whether to Enter or Stay Out of a market. If the Entrant stays out, Entrant gets 0 and the Incumbent gets 10. If the Entrant enters, the Incumbent then chooses to either Accommodate or Fight. If the Incumbent accommodates, both get 5. If the Incumbent fights, both get 0.",
        build: entry_game,
    },
    ExampleGame {
        id: "coordination",
        title: "Pure Coordination Game",
        category: "Coordination",
        description: "Two drivers approach each other on a road. Each must choose to drive on the Left or the Right. If they both choose the same side, each gets a payoff of 1. If they choose different sides, both get 0.",
        build: coordination,
    },
    ExampleGame {
        id: "rock-paper-scissors",
        title: "Rock-Paper-Scissors",
        category: "Zero-Sum",
        description: "Two players simultaneously choose Rock, Paper, or Scissors. Rock beats Scissors, Scissors beats Paper, Paper beats Rock. The winner gets +1 and the loser gets -1. Ties give both players 0.",
        build: rock_paper_scissors,
    },
    ExampleGame {
        id: "public-goods",
        title: "Public Goods Game",
        category: "Social Dilemma",
        description: "Two people each have 10 tokens and can Contribute them to a public fund or Keep them. The fund is doubled and split evenly. If both keep, each ends with 10. If one contributes, the contributor ends with 10 and the keeper with 20. If both contribute, each ends with 20.",
        build: public_goods,
    },
    ExampleGame {
        id: "ultimatum-game",
        title: "Ultimatum Game",
        category: "Sequential",
        description: "A Proposer has 10 dollars to split with a Responder. The Proposer can offer a Fair split (5-5) or an Unfair split (8-2). The Responder can Accept or Reject. If accepted, payoffs are as proposed. If rejected, both get 0.",
        build: ultimatum_game,
    },
];

/// All catalogue entries
pub fn catalogue() -> &'static [ExampleGame] {
    &CATALOGUE
}

/// Look up a catalogue entry by id
pub fn example_by_id(id: &str) -> Option<&'static ExampleGame> {
    CATALOGUE.iter().find(|g| g.id == id)
}

fn players(names: &[(&str, &str)]) -> Vec<RawPlayer> {
    names
        .iter()
        .enumerate()
        .map(|(i, (name, role))| RawPlayer {
            id: Some(format!("P{}", i + 1)),
            name: (*name).to_owned(),
            role: Some((*role).to_owned()),
        })
        .collect()
}

/// Two-player normal-form description; `cells` are row-major payoff pairs.
fn bimatrix(
    names: [(&str, &str); 2],
    rows: &[&str],
    cols: &[&str],
    cells: &[(f64, f64)],
) -> RawDescription {
    let players = players(&names);
    let mut strategies = Vec::new();
    for (player, set) in players.iter().zip([rows, cols]) {
        for s in set {
            strategies.push(RawStrategy {
                player: player.name.clone(),
                strategy: (*s).to_owned(),
            });
        }
    }
    let payoffs = rows
        .iter()
        .flat_map(|r| cols.iter().map(move |c| vec![(*r).to_owned(), (*c).to_owned()]))
        .zip(cells)
        .map(|(strategy_profile, &(a, b))| RawPayoff {
            strategy_profile,
            payoffs: vec![a, b],
        })
        .collect();
    RawDescription {
        game_type: GameType::NormalForm,
        players: Some(players),
        normal_form: Some(RawNormalForm { strategies, payoffs }),
        extensive_form: None,
        ambiguities: Vec::new(),
        assumptions: Vec::new(),
    }
}

fn sequential(names: [(&str, &str); 2], root: GameTreeNode) -> RawDescription {
    RawDescription {
        game_type: GameType::ExtensiveForm,
        players: Some(players(&names)),
        normal_form: None,
        extensive_form: Some(RawExtensiveForm {
            root_node: Some(root),
        }),
        ambiguities: Vec::new(),
        assumptions: Vec::new(),
    }
}

fn prisoners_dilemma() -> RawDescription {
    let mut raw = bimatrix(
        [("Suspect A", "Prisoner"), ("Suspect B", "Prisoner")],
        &["Cooperate", "Betray"],
        &["Cooperate", "Betray"],
        &[(-1.0, -1.0), (-3.0, 0.0), (0.0, -3.0), (-2.0, -2.0)],
    );
    raw.assumptions
        .push("Payoffs are negated prison years so that higher is better".to_owned());
    raw
}

fn battle_of_sexes() -> RawDescription {
    bimatrix(
        [("Alice", "Partner"), ("Bob", "Partner")],
        &["Opera", "Football"],
        &["Opera", "Football"],
        &[(3.0, 1.0), (0.0, 0.0), (0.0, 0.0), (1.0, 3.0)],
    )
}

fn stag_hunt() -> RawDescription {
    bimatrix(
        [("Hunter 1", "Hunter"), ("Hunter 2", "Hunter")],
        &["Stag", "Hare"],
        &["Stag", "Hare"],
        &[(4.0, 4.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0)],
    )
}

fn chicken() -> RawDescription {
    bimatrix(
        [("Driver 1", "Driver"), ("Driver 2", "Driver")],
        &["Swerve", "Straight"],
        &["Swerve", "Straight"],
        &[(0.0, 0.0), (-1.0, 1.0), (1.0, -1.0), (-10.0, -10.0)],
    )
}

fn matching_pennies() -> RawDescription {
    bimatrix(
        [("Player 1", "Matcher"), ("Player 2", "Mismatcher")],
        &["Heads", "Tails"],
        &["Heads", "Tails"],
        &[(1.0, -1.0), (-1.0, 1.0), (-1.0, 1.0), (1.0, -1.0)],
    )
}

fn coordination() -> RawDescription {
    bimatrix(
        [("Driver 1", "Driver"), ("Driver 2", "Driver")],
        &["Left", "Right"],
        &["Left", "Right"],
        &[(1.0, 1.0), (0.0, 0.0), (0.0, 0.0), (1.0, 1.0)],
    )
}

#[rustfmt::skip]
fn rock_paper_scissors() -> RawDescription {
    bimatrix(
        [("Player 1", "Player"), ("Player 2", "Player")],
        &["Rock", "Paper", "Scissors"],
        &["Rock", "Paper", "Scissors"],
        &[
            (0.0, 0.0), (-1.0, 1.0), (1.0, -1.0),
            (1.0, -1.0), (0.0, 0.0), (-1.0, 1.0),
            (-1.0, 1.0), (1.0, -1.0), (0.0, 0.0),
        ],
    )
}

fn public_goods() -> RawDescription {
    let mut raw = bimatrix(
        [("Person 1", "Contributor"), ("Person 2", "Contributor")],
        &["Contribute", "Keep"],
        &["Contribute", "Keep"],
        &[(20.0, 20.0), (10.0, 20.0), (20.0, 10.0), (10.0, 10.0)],
    );
    raw.ambiguities
        .push("The description restates the split; final token holdings are used".to_owned());
    raw
}

fn entry_game() -> RawDescription {
    let incumbent = GameTreeNode::decision(
        "n1",
        "P2",
        vec![
            Branch::new("Accommodate", GameTreeNode::terminal("t2", vec![5.0, 5.0])),
            Branch::new("Fight", GameTreeNode::terminal("t3", vec![0.0, 0.0])),
        ],
    )
    .with_label("Incumbent responds");
    let root = GameTreeNode::decision(
        "root",
        "P1",
        vec![
            Branch::new("Enter", incumbent),
            Branch::new("Stay Out", GameTreeNode::terminal("t1", vec![0.0, 10.0])),
        ],
    )
    .with_label("Entrant decides");
    sequential([("Entrant", "Entrant"), ("Incumbent", "Incumbent")], root)
}

fn ultimatum_game() -> RawDescription {
    let respond = |id: &str, accept: (f64, f64)| {
        GameTreeNode::decision(
            id,
            "P2",
            vec![
                Branch::new(
                    "Accept",
                    GameTreeNode::terminal(&format!("{}-accept", id), vec![accept.0, accept.1]),
                ),
                Branch::new(
                    "Reject",
                    GameTreeNode::terminal(&format!("{}-reject", id), vec![0.0, 0.0]),
                ),
            ],
        )
    };
    let root = GameTreeNode::decision(
        "root",
        "P1",
        vec![
            Branch::new("Fair", respond("fair", (5.0, 5.0))),
            Branch::new("Unfair", respond("unfair", (8.0, 2.0))),
        ],
    )
    .with_label("Proposer offers");
    sequential([("Proposer", "Proposer"), ("Responder", "Responder")], root)
}
