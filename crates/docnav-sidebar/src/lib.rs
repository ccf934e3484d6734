//! Sidebar navigation for docnav.
//!
//! This crate provides:
//! - [`SidebarNode`] / [`SidebarConfig`]: the nested navigation tree as it is
//!   written in configuration
//! - [`SidebarTree`]: an arena of nodes with stable [`NodeId`]s
//! - [`compute_matches`] and [`expand_active`]: the two-pass active-route
//!   traversal (compute the match set, then apply it to a new tree)
//! - [`Sidebar`]: the per-page sidebar state that recomputes on path or tree
//!   changes
//!
//! # Quick Start
//!
//! ```
//! use docnav_sidebar::{Sidebar, SidebarNode, SidebarTree};
//!
//! let nodes = vec![SidebarNode::group(
//!     "Guide",
//!     vec![
//!         SidebarNode::item("Intro", "/guide/intro"),
//!         SidebarNode::item("Install", "/guide/install"),
//!     ],
//! )];
//! let sidebar = Sidebar::new(SidebarTree::from_nodes(&nodes), "/", "", "/guide/install.html");
//!
//! let group = sidebar.tree().roots().next().unwrap();
//! assert!(!sidebar.tree().is_collapsed(group));
//! ```

mod matcher;
mod node;
mod sidebar;
mod traversal;
mod tree;

pub use matcher::{ActiveMatcher, canonical_path, is_active};
pub use node::{SidebarConfig, SidebarGroup, SidebarItem, SidebarNode};
pub use sidebar::{Sidebar, SidebarError};
pub use traversal::{MatchSet, compute_matches, expand_active};
pub use tree::{Node, NodeId, NodeKind, SidebarTree};
