//! Arena representation of a sidebar.
//!
//! Nodes are stored in a flat `Vec<Node>` with parent/children relationships
//! tracked by indices. Ids are assigned in depth-first pre-order when the
//! tree is built and stay stable for the lifetime of the tree, so per-node
//! data (match results, expansion state) can live in plain vectors.

use std::fmt;

use crate::node::{SidebarGroup, SidebarItem, SidebarNode};

/// Stable index of a node within one [`SidebarTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Sidebar node data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    /// Display text.
    pub text: String,
    /// Link target, if any.
    pub link: Option<String>,
    /// Item or group specific data.
    pub kind: NodeKind,
}

/// Kind of sidebar node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Leaf link.
    Item,
    /// Group of child nodes.
    Group {
        /// Whether the user can collapse the group.
        collapsible: bool,
        /// Collapsed state (`None` renders collapsed).
        collapsed: Option<bool>,
    },
}

/// Sidebar tree stored as an arena.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarTree {
    pub(crate) nodes: Vec<Node>,
    pub(crate) children: Vec<Vec<usize>>,
    pub(crate) parents: Vec<Option<usize>>,
    pub(crate) roots: Vec<usize>,
}

impl SidebarTree {
    /// Build a tree from configured sidebar entries.
    #[must_use]
    pub fn from_nodes(nodes: &[SidebarNode]) -> Self {
        let mut tree = Self::default();
        for node in nodes {
            let idx = tree.push(node, None);
            tree.roots.push(idx);
        }
        tree
    }

    fn push(&mut self, node: &SidebarNode, parent: Option<usize>) -> usize {
        let idx = self.nodes.len();
        let entry = match node {
            SidebarNode::Item(item) => Node {
                text: item.text.clone(),
                link: item.link.clone(),
                kind: NodeKind::Item,
            },
            SidebarNode::Group(group) => Node {
                text: group.text.clone(),
                link: group.link.clone(),
                kind: NodeKind::Group {
                    collapsible: group.collapsible,
                    collapsed: group.collapsed,
                },
            },
        };
        let items: &[SidebarNode] = match node {
            SidebarNode::Group(group) => &group.items,
            SidebarNode::Item(_) => &[],
        };

        self.nodes.push(entry);
        self.children.push(Vec::new());
        self.parents.push(parent);

        for child in items {
            let child_idx = self.push(child, Some(idx));
            self.children[idx].push(child_idx);
        }

        idx
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over top-level nodes in display order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.roots.iter().map(|&i| NodeId(i))
    }

    /// Iterate over all node ids in pre-order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Get node data, `None` if the id does not belong to this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Iterate over the children of a node in display order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children
            .get(id.0)
            .into_iter()
            .flatten()
            .map(|&i| NodeId(i))
    }

    /// Parent of a node, `None` for top-level nodes.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents.get(id.0).copied().flatten().map(NodeId)
    }

    /// Ancestors of a node, nearest first.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut ancestors = Vec::new();
        let mut current = self.parent(id);
        while let Some(parent) = current {
            ancestors.push(parent);
            current = self.parent(parent);
        }
        ancestors
    }

    /// Depth of a node (top-level nodes have depth 0).
    #[must_use]
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).len()
    }

    /// Whether a node renders collapsed. Items are never collapsed.
    #[must_use]
    pub fn is_collapsed(&self, id: NodeId) -> bool {
        match self.node(id).map(|node| node.kind) {
            Some(NodeKind::Group { collapsed, .. }) => collapsed.unwrap_or(true),
            _ => false,
        }
    }

    /// Set the collapsed flag of a group. Returns `false` for items.
    pub(crate) fn set_collapsed(&mut self, id: NodeId, value: bool) -> bool {
        match self.nodes.get_mut(id.0).map(|node| &mut node.kind) {
            Some(NodeKind::Group { collapsed, .. }) => {
                *collapsed = Some(value);
                true
            }
            _ => false,
        }
    }

    /// Convert back into configured sidebar entries.
    #[must_use]
    pub fn to_nodes(&self) -> Vec<SidebarNode> {
        self.roots.iter().map(|&i| self.to_node(i)).collect()
    }

    fn to_node(&self, idx: usize) -> SidebarNode {
        let node = &self.nodes[idx];
        match node.kind {
            NodeKind::Item => SidebarNode::Item(SidebarItem {
                text: node.text.clone(),
                link: node.link.clone(),
            }),
            NodeKind::Group {
                collapsible,
                collapsed,
            } => SidebarNode::Group(SidebarGroup {
                text: node.text.clone(),
                link: node.link.clone(),
                items: self.children[idx].iter().map(|&c| self.to_node(c)).collect(),
                collapsible,
                collapsed,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_nodes() -> Vec<SidebarNode> {
        vec![
            SidebarNode::item("Home", "/"),
            SidebarNode::group(
                "Guide",
                vec![
                    SidebarNode::item("Intro", "/guide/intro"),
                    SidebarNode::group(
                        "Advanced",
                        vec![SidebarNode::item("Plugins", "/guide/advanced/plugins")],
                    ),
                ],
            ),
        ]
    }

    #[test]
    fn test_from_nodes_preorder_ids() {
        let tree = SidebarTree::from_nodes(&sample_nodes());
        let texts: Vec<&str> = tree
            .ids()
            .map(|id| tree.node(id).unwrap().text.as_str())
            .collect();
        assert_eq!(texts, vec!["Home", "Guide", "Intro", "Advanced", "Plugins"]);
    }

    #[test]
    fn test_roots_and_children() {
        let tree = SidebarTree::from_nodes(&sample_nodes());
        let roots: Vec<usize> = tree.roots().map(NodeId::index).collect();
        assert_eq!(roots, vec![0, 1]);

        let children: Vec<usize> = tree.children(NodeId(1)).map(NodeId::index).collect();
        assert_eq!(children, vec![2, 3]);
        assert_eq!(tree.children(NodeId(0)).count(), 0);
    }

    #[test]
    fn test_parent_and_ancestors() {
        let tree = SidebarTree::from_nodes(&sample_nodes());
        assert_eq!(tree.parent(NodeId(4)), Some(NodeId(3)));
        assert_eq!(tree.parent(NodeId(1)), None);
        assert_eq!(tree.ancestors(NodeId(4)), vec![NodeId(3), NodeId(1)]);
        assert_eq!(tree.depth(NodeId(4)), 2);
    }

    #[test]
    fn test_unknown_id() {
        let tree = SidebarTree::from_nodes(&sample_nodes());
        assert!(tree.node(NodeId(99)).is_none());
        assert_eq!(tree.children(NodeId(99)).count(), 0);
        assert!(!tree.is_collapsed(NodeId(99)));
    }

    #[test]
    fn test_is_collapsed_defaults_to_true_for_groups() {
        let tree = SidebarTree::from_nodes(&sample_nodes());
        assert!(tree.is_collapsed(NodeId(1)));
        assert!(!tree.is_collapsed(NodeId(0)));
    }

    #[test]
    fn test_set_collapsed() {
        let mut tree = SidebarTree::from_nodes(&sample_nodes());
        assert!(tree.set_collapsed(NodeId(1), false));
        assert!(!tree.is_collapsed(NodeId(1)));
        assert!(!tree.set_collapsed(NodeId(0), false));
    }

    #[test]
    fn test_to_nodes_restores_input() {
        let nodes = sample_nodes();
        let tree = SidebarTree::from_nodes(&nodes);
        assert_eq!(tree.to_nodes(), nodes);
    }

    #[test]
    fn test_empty_tree() {
        let tree = SidebarTree::from_nodes(&[]);
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(tree.to_nodes().is_empty());
    }
}
