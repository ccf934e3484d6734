//! Sidebar state for the current page.
//!
//! [`Sidebar`] keeps the configured (raw) tree and the current location.
//! Whenever either changes, the match set is rebuilt from scratch against
//! the raw tree and a freshly expanded tree replaces the previous one.
//! Unchanged inputs leave the state as it is.

use crate::matcher::ActiveMatcher;
use crate::traversal::{MatchSet, compute_matches, expand_active};
use crate::tree::{NodeId, NodeKind, SidebarTree};

/// Error returned by sidebar state operations.
#[derive(Debug, thiserror::Error)]
pub enum SidebarError {
    /// Node id does not belong to the current tree.
    #[error("Unknown sidebar node: {0}")]
    UnknownNode(NodeId),
    /// Node is an item or a group that cannot be collapsed.
    #[error("Sidebar node {0} is not collapsible")]
    NotCollapsible(NodeId),
}

/// Sidebar state for the current location.
#[derive(Clone, Debug)]
pub struct Sidebar {
    raw: SidebarTree,
    base: String,
    lang_route_prefix: String,
    pathname: String,
    tree: SidebarTree,
    matches: MatchSet,
    recomputes: usize,
}

impl Sidebar {
    /// Create sidebar state and run the first traversal.
    ///
    /// # Arguments
    ///
    /// * `raw` - Sidebar tree as configured
    /// * `base` - Site base path
    /// * `lang_route_prefix` - Route prefix of the current language
    /// * `pathname` - Current location pathname
    #[must_use]
    pub fn new(raw: SidebarTree, base: &str, lang_route_prefix: &str, pathname: &str) -> Self {
        let mut sidebar = Self {
            tree: SidebarTree::default(),
            raw,
            base: base.to_owned(),
            lang_route_prefix: lang_route_prefix.to_owned(),
            pathname: pathname.to_owned(),
            matches: MatchSet::default(),
            recomputes: 0,
        };
        sidebar.recompute();
        sidebar
    }

    /// Expanded tree for rendering.
    #[must_use]
    pub fn tree(&self) -> &SidebarTree {
        &self.tree
    }

    /// Match set of the last traversal.
    #[must_use]
    pub fn matches(&self) -> &MatchSet {
        &self.matches
    }

    /// Current location pathname.
    #[must_use]
    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// Number of traversals run so far.
    #[must_use]
    pub fn recomputes(&self) -> usize {
        self.recomputes
    }

    /// Whether the node's own link is the current page.
    #[must_use]
    pub fn is_active(&self, id: NodeId) -> bool {
        self.matches.is_active(id)
    }

    /// Update the location. Returns `true` if the sidebar was recomputed.
    pub fn set_pathname(&mut self, pathname: &str) -> bool {
        if self.pathname == pathname {
            return false;
        }
        pathname.clone_into(&mut self.pathname);
        self.recompute();
        true
    }

    /// Replace the configured tree. Returns `true` if the sidebar was
    /// recomputed.
    pub fn set_tree(&mut self, raw: SidebarTree) -> bool {
        if self.raw == raw {
            return false;
        }
        self.raw = raw;
        self.recompute();
        true
    }

    /// Switch the language route prefix. Returns `true` if the sidebar was
    /// recomputed.
    pub fn set_lang_route_prefix(&mut self, lang_route_prefix: &str) -> bool {
        if self.lang_route_prefix == lang_route_prefix {
            return false;
        }
        lang_route_prefix.clone_into(&mut self.lang_route_prefix);
        self.recompute();
        true
    }

    /// Update location and language prefix together, recomputing at most
    /// once. Returns `true` if the sidebar was recomputed.
    pub fn set_location(&mut self, pathname: &str, lang_route_prefix: &str) -> bool {
        if self.pathname == pathname && self.lang_route_prefix == lang_route_prefix {
            return false;
        }
        pathname.clone_into(&mut self.pathname);
        lang_route_prefix.clone_into(&mut self.lang_route_prefix);
        self.recompute();
        true
    }

    /// Flip the collapsed state of a collapsible group.
    ///
    /// The change lasts until the next recompute. Returns the new collapsed
    /// state.
    pub fn toggle(&mut self, id: NodeId) -> Result<bool, SidebarError> {
        let kind = self.tree.node(id).ok_or(SidebarError::UnknownNode(id))?.kind;
        match kind {
            NodeKind::Group {
                collapsible: true, ..
            } => {
                let collapsed = !self.tree.is_collapsed(id);
                self.tree.set_collapsed(id, collapsed);
                Ok(collapsed)
            }
            _ => Err(SidebarError::NotCollapsible(id)),
        }
    }

    fn recompute(&mut self) {
        let matcher = ActiveMatcher::new(&self.pathname, &self.base, &self.lang_route_prefix);
        let matches = compute_matches(&self.raw, |link| matcher.matches(link));
        self.tree = expand_active(&self.raw, &matches);
        self.recomputes += 1;

        tracing::debug!(
            pathname = %self.pathname,
            route = %matcher.current(),
            nodes = self.raw.len(),
            expanded = matches.expanded_groups().len(),
            "Recomputed sidebar"
        );
        self.matches = matches;
    }
}
