//
// Hierarchy step: NodeInput (nested, as sent by the renderer) -> Tree (indexed)
//
// What this does:
// - Flattens the nested description into one vector, parents before children;
//   a node's index is its pre-order position
// - Gives every node a NodeId (its index) and a parent pointer
// - Enforces that node ids are unique
// - Rejects label widths that are negative or not finite
// - Preserves the input child order for deterministic layout

use std::collections::HashSet;

use serde::Deserialize;

use crate::layout::LabeledNode;

/// A node as described by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeInput {
    pub id: String,
    /// Rendered label width in pixels.
    pub label_width: f64,
    /// Children exist but are hidden; only this node is laid out.
    #[serde(default)]
    pub folded: bool,
    #[serde(default)]
    pub children: Vec<NodeInput>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone)]
pub struct TreeNode {
    pub nid: NodeId,
    pub id: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub label_width: f64,
    pub folded: bool,
}

impl TreeNode {
    /// Children that take part in layout.
    pub fn visible_children(&self) -> &[NodeId] {
        if self.folded { &[] } else { self.children.as_slice() }
    }
}

impl LabeledNode for TreeNode {
    fn label_display_width(&self) -> f64 {
        self.label_width
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }
}

#[derive(Debug, Clone)]
pub struct Tree {
    pub root: NodeId,
    pub nodes: Vec<TreeNode>,
}

impl Tree {
    pub fn node(&self, nid: NodeId) -> &TreeNode {
        &self.nodes[nid.0]
    }

    /// Visible nodes, children before parent.
    pub fn post_order(&self) -> Vec<NodeId> {
        fn dfs(tree: &Tree, nid: NodeId, out: &mut Vec<NodeId>) {
            for &c in tree.node(nid).visible_children() {
                dfs(tree, c, out);
            }
            out.push(nid);
        }
        let mut out = Vec::new();
        dfs(self, self.root, &mut out);
        out
    }

    /// Visible nodes, parent before children.
    pub fn pre_order(&self) -> Vec<NodeId> {
        fn dfs(tree: &Tree, nid: NodeId, out: &mut Vec<NodeId>) {
            out.push(nid);
            for &c in tree.node(nid).visible_children() {
                dfs(tree, c, out);
            }
        }
        let mut out = Vec::new();
        dfs(self, self.root, &mut out);
        out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeError {
    pub msg: String,
    /// Id of the offending node.
    pub node: Option<String>,
}

impl std::fmt::Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.node {
            Some(id) => write!(f, "Invalid node '{}': {}", id, self.msg),
            None => write!(f, "Invalid tree: {}", self.msg),
        }
    }
}

impl std::error::Error for TreeError {}

pub fn build_tree(root: &NodeInput) -> Result<Tree, TreeError> {
    let mut b = Builder::default();
    let root = b.add_node(root, None)?;
    Ok(Tree { root, nodes: b.nodes })
}

#[derive(Default)]
struct Builder {
    nodes: Vec<TreeNode>,
    seen_ids: HashSet<String>,
}

impl Builder {
    fn add_node(&mut self, n: &NodeInput, parent: Option<NodeId>) -> Result<NodeId, TreeError> {
        if !self.seen_ids.insert(n.id.clone()) {
            return Err(TreeError {
                msg: "Duplicate node id".to_string(),
                node: Some(n.id.clone()),
            });
        }
        if !n.label_width.is_finite() || n.label_width < 0.0 {
            return Err(TreeError {
                msg: format!("Label width must be a non-negative number, got {}", n.label_width),
                node: Some(n.id.clone()),
            });
        }

        let nid = NodeId(self.nodes.len());
        self.nodes.push(TreeNode {
            nid,
            id: n.id.clone(),
            parent,
            children: Vec::with_capacity(n.children.len()),
            label_width: n.label_width,
            folded: n.folded,
        });

        for child in &n.children {
            let cid = self.add_node(child, Some(nid))?;
            self.nodes[nid.0].children.push(cid);
        }
        Ok(nid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(value: serde_json::Value) -> NodeInput {
        serde_json::from_value(value).unwrap()
    }

    fn sample() -> NodeInput {
        input(json!({
            "id": "com",
            "label_width": 9.0,
            "children": [
                { "id": "com.a", "label_width": 3.0, "children": [
                    { "id": "com.a.X", "label_width": 3.0 }
                ]},
                { "id": "com.b", "label_width": 3.0, "folded": true, "children": [
                    { "id": "com.b.Y", "label_width": 3.0 },
                    { "id": "com.b.Z", "label_width": 3.0 }
                ]}
            ]
        }))
    }

    #[test]
    fn test_flattens_parents_first() {
        let tree = build_tree(&sample()).unwrap();

        let ids: Vec<&str> = tree.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["com", "com.a", "com.a.X", "com.b", "com.b.Y", "com.b.Z"]);
        assert_eq!(tree.root, NodeId(0));
        assert_eq!(tree.node(NodeId(2)).parent, Some(NodeId(1)));
        assert_eq!(tree.node(NodeId(0)).children, vec![NodeId(1), NodeId(3)]);
    }

    #[test]
    fn test_folded_node_keeps_child_count() {
        let tree = build_tree(&sample()).unwrap();
        let folded = tree.node(NodeId(3));

        assert_eq!(folded.child_count(), 2);
        assert!(folded.visible_children().is_empty());
    }

    #[test]
    fn test_traversals_skip_folded_descendants() {
        let tree = build_tree(&sample()).unwrap();

        assert_eq!(tree.pre_order(), vec![NodeId(0), NodeId(1), NodeId(2), NodeId(3)]);
        assert_eq!(tree.post_order(), vec![NodeId(2), NodeId(1), NodeId(3), NodeId(0)]);
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let dup = input(json!({
            "id": "a",
            "label_width": 1.0,
            "children": [{ "id": "a", "label_width": 1.0 }]
        }));
        let err = build_tree(&dup).unwrap_err();

        assert_eq!(err.node.as_deref(), Some("a"));
        assert_eq!(err.to_string(), "Invalid node 'a': Duplicate node id");
    }

    #[test]
    fn test_negative_label_width_is_rejected() {
        let bad = input(json!({ "id": "a", "label_width": -2.0 }));
        let err = build_tree(&bad).unwrap_err();

        assert!(err.msg.contains("non-negative"));
    }
}
