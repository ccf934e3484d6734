//! Sidebar entries as written in configuration.

use std::collections::BTreeMap;

use docnav_url::{normalize_slash, strip_path_prefix};
use serde::{Deserialize, Serialize};

/// A sidebar entry: a link or a group of entries.
///
/// Deserialized untagged: an entry with an `items` array is a group,
/// anything else is an item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarNode {
    /// Group of nested entries.
    Group(SidebarGroup),
    /// Single link.
    Item(SidebarItem),
}

/// Sidebar link entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarItem {
    /// Display text.
    pub text: String,
    /// Link target. An item without a link is never active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Sidebar group entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// Display text.
    pub text: String,
    /// Optional landing page for the group itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Child entries in display order.
    pub items: Vec<SidebarNode>,
    /// Whether the user can collapse the group.
    #[serde(default = "default_collapsible")]
    pub collapsible: bool,
    /// Collapsed state. `None` renders collapsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
}

fn default_collapsible() -> bool {
    true
}

impl SidebarNode {
    /// Create a link entry.
    #[must_use]
    pub fn item(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self::Item(SidebarItem {
            text: text.into(),
            link: Some(link.into()),
        })
    }

    /// Create a collapsible group without a landing page.
    #[must_use]
    pub fn group(text: impl Into<String>, items: Vec<SidebarNode>) -> Self {
        Self::Group(SidebarGroup {
            text: text.into(),
            link: None,
            items,
            collapsible: true,
            collapsed: None,
        })
    }

    /// Display text of the entry.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Group(group) => &group.text,
            Self::Item(item) => &item.text,
        }
    }

    /// Link target of the entry, if any.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        match self {
            Self::Group(group) => group.link.as_deref(),
            Self::Item(item) => item.link.as_deref(),
        }
    }
}

/// Sidebars keyed by the route prefix they apply to.
///
/// ```toml
/// [theme.sidebar]
/// "/guide" = [{ text = "Intro", link = "/guide/intro" }]
/// "/api" = [{ text = "Reference", items = [{ text = "Client", link = "/api/client" }] }]
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SidebarConfig {
    entries: BTreeMap<String, Vec<SidebarNode>>,
}

impl SidebarConfig {
    /// Create an empty sidebar configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the sidebar for a route prefix, replacing any previous one.
    pub fn insert(&mut self, prefix: impl Into<String>, nodes: Vec<SidebarNode>) {
        self.entries.insert(prefix.into(), nodes);
    }

    /// Whether no sidebar is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(prefix, nodes)` pairs in prefix order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SidebarNode])> {
        self.entries
            .iter()
            .map(|(prefix, nodes)| (prefix.as_str(), nodes.as_slice()))
    }

    /// Select the sidebar for a route path.
    ///
    /// `path` must already be stripped of the site base. The longest prefix
    /// that matches whole segments of the path wins.
    #[must_use]
    pub fn for_path(&self, path: &str) -> Option<(&str, &[SidebarNode])> {
        let path = normalize_slash(path);
        self.entries
            .iter()
            .filter_map(|(prefix, nodes)| {
                let normalized = normalize_slash(prefix);
                strip_path_prefix(&path, &normalized)
                    .map(|_| (normalized.len(), prefix.as_str(), nodes.as_slice()))
            })
            .max_by_key(|(len, _, _)| *len)
            .map(|(_, prefix, nodes)| (prefix, nodes))
    }
}
