//! Two-pass active-route traversal.
//!
//! [`compute_matches`] walks the tree once and records, for every node,
//! whether it is active or contains an active descendant. [`expand_active`]
//! then produces a new tree with every matching group expanded. The input
//! tree is never mutated.

use crate::tree::{NodeId, NodeKind, SidebarTree};

/// Result of one matching traversal.
///
/// Indexed by [`NodeId`]. Only valid for the tree it was computed from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchSet {
    active: Vec<bool>,
    matched: Vec<bool>,
    expanded: Vec<NodeId>,
    evaluated: usize,
}

impl MatchSet {
    /// Whether the node's own link is active.
    #[must_use]
    pub fn is_active(&self, id: NodeId) -> bool {
        self.active.get(id.index()).copied().unwrap_or(false)
    }

    /// Whether the node is active or contains an active descendant.
    #[must_use]
    pub fn is_match(&self, id: NodeId) -> bool {
        self.matched.get(id.index()).copied().unwrap_or(false)
    }

    /// Nodes whose own link is active, in pre-order.
    pub fn active_leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.active
            .iter()
            .enumerate()
            .filter(|&(_, &active)| active)
            .map(|(i, _)| NodeId(i))
    }

    /// Groups that must be expanded, in post-order.
    #[must_use]
    pub fn expanded_groups(&self) -> &[NodeId] {
        &self.expanded
    }

    /// Number of nodes evaluated during the traversal.
    ///
    /// Each node is evaluated exactly once, however many ancestors query it.
    #[must_use]
    pub fn evaluated(&self) -> usize {
        self.evaluated
    }
}

/// Compute which nodes match the current location.
///
/// Depth-first, post-order: children are resolved before their group, and a
/// group matches if its own link is active or any child matches. Results
/// are memoized in a cache keyed by node index that lives only for this
/// call.
pub fn compute_matches<F>(tree: &SidebarTree, is_active: F) -> MatchSet
where
    F: Fn(&str) -> bool,
{
    let mut traversal = Traversal {
        tree,
        is_active,
        cache: vec![None; tree.len()],
        active: vec![false; tree.len()],
        expanded: Vec::new(),
        evaluated: 0,
    };

    for &root in &tree.roots {
        traversal.visit(root);
    }

    let matched = traversal
        .cache
        .iter()
        .map(|hit| hit.unwrap_or(false))
        .collect();

    MatchSet {
        active: traversal.active,
        matched,
        expanded: traversal.expanded,
        evaluated: traversal.evaluated,
    }
}

/// Produce a copy of `tree` with every matching group expanded.
///
/// Groups outside the match set keep their configured `collapsed` value.
#[must_use]
pub fn expand_active(tree: &SidebarTree, matches: &MatchSet) -> SidebarTree {
    let mut expanded = tree.clone();
    for &id in matches.expanded_groups() {
        expanded.set_collapsed(id, false);
    }
    expanded
}

struct Traversal<'a, F> {
    tree: &'a SidebarTree,
    is_active: F,
    cache: Vec<Option<bool>>,
    active: Vec<bool>,
    expanded: Vec<NodeId>,
    evaluated: usize,
}

impl<F> Traversal<'_, F>
where
    F: Fn(&str) -> bool,
{
    fn visit(&mut self, idx: usize) {
        let tree = self.tree;
        for &child in &tree.children[idx] {
            self.visit(child);
        }

        let is_group = matches!(tree.nodes[idx].kind, NodeKind::Group { .. });
        if self.resolve(idx) && is_group {
            self.expanded.push(NodeId(idx));
        }
    }

    fn resolve(&mut self, idx: usize) -> bool {
        if let Some(hit) = self.cache[idx] {
            return hit;
        }

        self.evaluated += 1;
        let tree = self.tree;
        let own = tree.nodes[idx]
            .link
            .as_deref()
            .is_some_and(|link| (self.is_active)(link));
        self.active[idx] = own;

        let result = own || tree.children[idx].iter().any(|&child| self.resolve(child));
        self.cache[idx] = Some(result);
        result
    }
}
