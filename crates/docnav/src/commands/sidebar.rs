//! `docnav sidebar` command implementation.

use clap::Args;
use docnav_runtime::{App, Environment, MemoryPageSource};
use docnav_sidebar::{NodeId, NodeKind, Sidebar};
use serde::Serialize;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    /// Location pathname, including the site base.
    pathname: String,

    /// Print the sidebar as JSON.
    #[arg(long)]
    json: bool,
}

impl SidebarArgs {
    /// Execute the sidebar command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails to load or output cannot be
    /// written.
    pub(crate) fn execute(
        &self,
        config_args: &ConfigArgs,
        output: &Output,
    ) -> Result<(), CliError> {
        let config = config_args.load()?;
        let app = App::start(
            config,
            Box::new(MemoryPageSource::new()),
            Environment::from_env(),
            &self.pathname,
        );

        let Some(sidebar) = app.sidebar() else {
            output.warning(&format!("No sidebar configured for {}", self.pathname));
            return Ok(());
        };

        if self.json {
            let entries = sidebar_entries(sidebar);
            output.result(&serde_json::to_string_pretty(&entries)?)?;
            return Ok(());
        }

        for line in sidebar_lines(sidebar) {
            match line.style {
                LineStyle::Active => output.result_highlight(&line.text)?,
                LineStyle::Hidden => output.result_dim(&line.text)?,
                LineStyle::Normal => output.result(&line.text)?,
            }
        }
        Ok(())
    }
}

/// Sidebar node as printed by `--json`.
#[derive(Debug, PartialEq, Serialize)]
struct SidebarEntry {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<String>,
    active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    collapsed: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    items: Vec<SidebarEntry>,
}

fn sidebar_entries(sidebar: &Sidebar) -> Vec<SidebarEntry> {
    sidebar
        .tree()
        .roots()
        .filter_map(|id| sidebar_entry(sidebar, id))
        .collect()
}

fn sidebar_entry(sidebar: &Sidebar, id: NodeId) -> Option<SidebarEntry> {
    let tree = sidebar.tree();
    let node = tree.node(id)?;
    let collapsed = matches!(node.kind, NodeKind::Group { .. }).then(|| tree.is_collapsed(id));
    Some(SidebarEntry {
        text: node.text.clone(),
        link: node.link.clone(),
        active: sidebar.is_active(id),
        collapsed,
        items: tree
            .children(id)
            .filter_map(|child| sidebar_entry(sidebar, child))
            .collect(),
    })
}

#[derive(Debug, PartialEq, Eq)]
enum LineStyle {
    Normal,
    Active,
    /// Inside a collapsed group.
    Hidden,
}

#[derive(Debug, PartialEq, Eq)]
struct Line {
    text: String,
    style: LineStyle,
}

/// Render the sidebar as an indented outline.
///
/// Groups are marked `-` when expanded and `+` when collapsed; the active
/// page is marked `*`.
fn sidebar_lines(sidebar: &Sidebar) -> Vec<Line> {
    let mut lines = Vec::new();
    for id in sidebar.tree().roots() {
        push_lines(sidebar, id, 0, false, &mut lines);
    }
    lines
}

fn push_lines(sidebar: &Sidebar, id: NodeId, depth: usize, hidden: bool, lines: &mut Vec<Line>) {
    let tree = sidebar.tree();
    let Some(node) = tree.node(id) else {
        return;
    };
    let active = sidebar.is_active(id);
    let is_group = matches!(node.kind, NodeKind::Group { .. });
    let collapsed = is_group && tree.is_collapsed(id);

    let marker = match (is_group, collapsed, active) {
        (_, _, true) => '*',
        (true, true, false) => '+',
        (true, false, false) => '-',
        (false, _, false) => ' ',
    };
    let link = node
        .link
        .as_deref()
        .map(|link| format!(" ({link})"))
        .unwrap_or_default();
    let style = if hidden {
        LineStyle::Hidden
    } else if active {
        LineStyle::Active
    } else {
        LineStyle::Normal
    };
    lines.push(Line {
        text: format!("{}{marker} {}{link}", "  ".repeat(depth), node.text),
        style,
    });

    for child in tree.children(id) {
        push_lines(sidebar, child, depth + 1, hidden || collapsed, lines);
    }
}

#[cfg(test)]
mod tests {
    use docnav_sidebar::{SidebarNode, SidebarTree};
    use pretty_assertions::assert_eq;

    use super::*;

    fn sidebar(pathname: &str) -> Sidebar {
        let tree = SidebarTree::from_nodes(&[
            SidebarNode::group(
                "Guide",
                vec![
                    SidebarNode::item("Intro", "/guide/intro"),
                    SidebarNode::item("Install", "/guide/install"),
                ],
            ),
            SidebarNode::group("API", vec![SidebarNode::item("Client", "/api/client")]),
        ]);
        Sidebar::new(tree, "/", "", pathname)
    }

    #[test]
    fn test_sidebar_lines() {
        let lines = sidebar_lines(&sidebar("/guide/intro.html"));
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "- Guide",
                "  * Intro (/guide/intro)",
                "    Install (/guide/install)",
                "+ API",
                "    Client (/api/client)",
            ]
        );
        assert_eq!(lines[1].style, LineStyle::Active);
        assert_eq!(lines[4].style, LineStyle::Hidden);
    }

    #[test]
    fn test_sidebar_entries() {
        let entries = sidebar_entries(&sidebar("/api/client"));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].collapsed, Some(true));
        assert_eq!(entries[1].collapsed, Some(false));
        assert!(entries[1].items[0].active);
        assert_eq!(entries[1].items[0].collapsed, None);
    }

    #[test]
    fn test_sidebar_entries_json() {
        let entries = sidebar_entries(&sidebar("/api/client"));
        let json = serde_json::to_value(&entries[1]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "text": "API",
                "active": false,
                "collapsed": false,
                "items": [{ "text": "Client", "link": "/api/client", "active": true }]
            })
        );
    }
}
