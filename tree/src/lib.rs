//! gamelens Tree - Extensive-form tree arena
//!
//! Extensive-form games arrive as nested nodes. This crate flattens them
//! into a flat array indexed by `NodeId` for traversal and reports
//! structural facts about the tree. It does not solve the game.

use gamelens_engine::node::{GameTreeNode, NodeKind};
use serde::Serialize;
use std::collections::BTreeSet;

/// Node ID type (index into flat array storage)
pub type NodeId = u32;

/// A node in the flattened tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatNode {
    /// Position in `GameTree::nodes`
    pub id: NodeId,
    /// Id carried by the source node
    pub source_id: String,
    pub kind: NodeKind,
    pub player_id: Option<String>,
    pub label: Option<String>,
    /// Parent node ID (None for root)
    pub parent: Option<NodeId>,
    /// Action on the edge from the parent
    pub action: Option<String>,
    /// Child node IDs in branch order
    pub children: Vec<NodeId>,
    pub payoffs: Option<Vec<f64>>,
    /// Distance from the root
    pub depth: usize,
}

/// Game tree wrapper
///
/// Contains a flat array of nodes in pre-order, so the root is node 0 and
/// every parent precedes its children.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GameTree {
    pub nodes: Vec<FlatNode>,
}

impl GameTree {
    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&FlatNode> {
        self.nodes.get(id as usize)
    }

    /// Get the root node
    pub fn root(&self) -> Option<&FlatNode> {
        self.nodes.first()
    }

    /// Get the number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Terminal nodes in pre-order
    pub fn leaves(&self) -> impl Iterator<Item = &FlatNode> {
        self.nodes.iter().filter(|n| n.kind == NodeKind::Terminal)
    }

    /// Actions on the path from the root to `id`
    pub fn path(&self, id: NodeId) -> Vec<&str> {
        let mut actions = Vec::new();
        let mut cursor = self.get(id);
        while let Some(node) = cursor {
            if let Some(action) = node.action.as_deref() {
                actions.push(action);
            }
            cursor = node.parent.and_then(|p| self.get(p));
        }
        actions.reverse();
        actions
    }
}

/// Structural summary of a tree
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeSummary {
    pub decision_nodes: usize,
    pub chance_nodes: usize,
    pub terminal_nodes: usize,
    pub max_depth: usize,
    /// Distinct players acting at decision nodes, sorted
    pub acting_players: Vec<String>,
}

/// Flatten a nested tree into a `GameTree`.
///
/// Uses an explicit stack so deep trees cannot overflow the call stack.
pub fn build_tree(root: &GameTreeNode) -> GameTree {
    let mut tree = GameTree::default();
    // (node, parent, action from parent, depth)
    let mut stack: Vec<(&GameTreeNode, Option<NodeId>, Option<&str>, usize)> =
        vec![(root, None, None, 0)];

    while let Some((node, parent, action, depth)) = stack.pop() {
        let id = tree.nodes.len() as NodeId;
        if let Some(p) = parent {
            tree.nodes[p as usize].children.push(id);
        }
        tree.nodes.push(FlatNode {
            id,
            source_id: node.id.clone(),
            kind: node.kind,
            player_id: node.player_id.clone(),
            label: node.label.clone(),
            parent,
            action: action.map(str::to_owned),
            children: Vec::new(),
            payoffs: node.payoffs.clone(),
            depth,
        });
        // Reverse so the first branch is popped (and numbered) first.
        for branch in node.children.iter().rev() {
            stack.push((&branch.node, Some(id), Some(branch.action.as_str()), depth + 1));
        }
    }
    tree
}

/// Count nodes by kind, measure depth and collect acting players.
pub fn summarize(tree: &GameTree) -> TreeSummary {
    let mut summary = TreeSummary::default();
    let mut players = BTreeSet::new();
    for node in &tree.nodes {
        match node.kind {
            NodeKind::Decision => {
                summary.decision_nodes += 1;
                if let Some(player) = &node.player_id {
                    players.insert(player.clone());
                }
            }
            NodeKind::Chance => summary.chance_nodes += 1,
            NodeKind::Terminal => summary.terminal_nodes += 1,
        }
        summary.max_depth = summary.max_depth.max(node.depth);
    }
    summary.acting_players = players.into_iter().collect();
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamelens_engine::node::Branch;

    fn entry_tree() -> GameTreeNode {
        let incumbent = GameTreeNode::decision(
            "n1",
            "P2",
            vec![
                Branch::new("Accommodate", GameTreeNode::terminal("t2", vec![5.0, 5.0])),
                Branch::new("Fight", GameTreeNode::terminal("t3", vec![0.0, 0.0])),
            ],
        );
        GameTreeNode::decision(
            "root",
            "P1",
            vec![
                Branch::new("Enter", incumbent),
                Branch::new("Stay Out", GameTreeNode::terminal("t1", vec![0.0, 10.0])),
            ],
        )
    }

    #[test]
    fn test_flatten_preorder_ids() {
        let tree = build_tree(&entry_tree());
        let order: Vec<_> = tree.nodes.iter().map(|n| n.source_id.as_str()).collect();
        assert_eq!(order, vec!["root", "n1", "t2", "t3", "t1"]);
        for (i, node) in tree.nodes.iter().enumerate() {
            assert_eq!(node.id as usize, i);
        }
    }

    #[test]
    fn test_parent_and_child_links_agree() {
        let tree = build_tree(&entry_tree());
        assert_eq!(tree.root().map(|n| n.parent), Some(None));
        for node in &tree.nodes {
            for &child in &node.children {
                assert_eq!(tree.get(child).and_then(|c| c.parent), Some(node.id));
            }
        }
        assert_eq!(tree.nodes[0].children, vec![1, 4]);
    }

    #[test]
    fn test_path_to_leaf() {
        let tree = build_tree(&entry_tree());
        assert_eq!(tree.path(3), vec!["Enter", "Fight"]);
        assert_eq!(tree.path(4), vec!["Stay Out"]);
        assert!(tree.path(0).is_empty());
    }

    #[test]
    fn test_summary_counts() {
        let summary = summarize(&build_tree(&entry_tree()));
        assert_eq!(summary.decision_nodes, 2);
        assert_eq!(summary.chance_nodes, 0);
        assert_eq!(summary.terminal_nodes, 3);
        assert_eq!(summary.max_depth, 2);
        assert_eq!(summary.acting_players, vec!["P1", "P2"]);
    }

    #[test]
    fn test_single_terminal_tree() {
        let tree = build_tree(&GameTreeNode::terminal("only", vec![1.0]));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.leaves().count(), 1);
        assert_eq!(summarize(&tree).max_depth, 0);
    }
}
