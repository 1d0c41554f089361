//! Extensive-form tree nodes
//!
//! A tree is carried as nested nodes, exactly as it arrives from the
//! extraction step. Nodes are immutable once the game is constructed; the
//! `gamelens-tree` crate flattens them for inspection.

use serde::{Deserialize, Serialize};

/// Kind of a tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A player chooses an action
    Decision,
    /// Nature chooses an action
    Chance,
    /// Game over; payoffs are paid out
    Terminal,
}

/// Edge from a node to one of its children, labelled by the action taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub action: String,
    pub node: GameTreeNode,
}

/// A node in an extensive-form game tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameTreeNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Acting player (decision nodes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Branch>,
    /// One payoff per player (terminal nodes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payoffs: Option<Vec<f64>>,
    /// Probability of reaching this node from a chance parent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
}

impl GameTreeNode {
    /// Create a decision node for `player_id` with the given branches.
    /// The action list is taken from the branch labels.
    pub fn decision(id: &str, player_id: &str, children: Vec<Branch>) -> Self {
        GameTreeNode {
            id: id.to_owned(),
            kind: NodeKind::Decision,
            player_id: Some(player_id.to_owned()),
            label: None,
            actions: children.iter().map(|b| b.action.clone()).collect(),
            children,
            payoffs: None,
            probability: None,
        }
    }

    /// Create a terminal node
    pub fn terminal(id: &str, payoffs: Vec<f64>) -> Self {
        GameTreeNode {
            id: id.to_owned(),
            kind: NodeKind::Terminal,
            player_id: None,
            label: None,
            actions: Vec::new(),
            children: Vec::new(),
            payoffs: Some(payoffs),
            probability: None,
        }
    }

    /// Attach a display label
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_owned());
        self
    }

    /// Check if this is a terminal node
    pub fn is_terminal(&self) -> bool {
        self.kind == NodeKind::Terminal
    }

    /// Check if this is a decision node
    pub fn is_decision(&self) -> bool {
        self.kind == NodeKind::Decision
    }

    /// Check if this is a chance node
    pub fn is_chance(&self) -> bool {
        self.kind == NodeKind::Chance
    }
}

impl Branch {
    /// Create a branch
    pub fn new(action: &str, node: GameTreeNode) -> Self {
        Branch {
            action: action.to_owned(),
            node,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_actions_follow_branches() {
        let node = GameTreeNode::decision(
            "root",
            "P1",
            vec![
                Branch::new("Left", GameTreeNode::terminal("l", vec![1.0, 0.0])),
                Branch::new("Right", GameTreeNode::terminal("r", vec![0.0, 1.0])),
            ],
        );
        assert!(node.is_decision());
        assert_eq!(node.actions, vec!["Left", "Right"]);
        assert!(node.children[0].node.is_terminal());
    }
}
