//! Page data lookup.
//!
//! Pages are resolved by route path through a [`PageSource`]. A route
//! with no page resolves to a not-found page rather than an error, so
//! navigation always has something to render.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Kind of page being rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageType {
    #[default]
    Doc,
    NotFound,
}

/// Data for a single page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageData {
    /// Normalized route path (see [`crate::normalize_route_path`]).
    pub route_path: String,

    #[serde(default)]
    pub title: String,

    /// Language code, empty for single-language sites.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub lang: String,

    #[serde(default, rename = "type")]
    pub page_type: PageType,

    /// Frontmatter values passed through to the page.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub frontmatter: HashMap<String, serde_json::Value>,
}

impl PageData {
    /// Create a doc page.
    #[must_use]
    pub fn new(route_path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            route_path: route_path.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Page shown for routes that resolve to nothing.
    #[must_use]
    pub fn not_found(route_path: impl Into<String>) -> Self {
        Self {
            route_path: route_path.into(),
            page_type: PageType::NotFound,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.page_type == PageType::NotFound
    }
}

/// Source of page data keyed by route path.
pub trait PageSource: Send + Sync {
    /// Load the page for an exact route path.
    fn load(&self, route_path: &str) -> Option<PageData>;
}

/// In-memory page source.
#[derive(Clone, Debug, Default)]
pub struct MemoryPageSource {
    pages: HashMap<String, PageData>,
}

impl MemoryPageSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a source from pages, keyed by their route paths.
    #[must_use]
    pub fn from_pages(pages: impl IntoIterator<Item = PageData>) -> Self {
        let pages = pages
            .into_iter()
            .map(|page| (page.route_path.clone(), page))
            .collect();
        Self { pages }
    }

    /// Parse a JSON array of pages.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or not an array of pages.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let pages: Vec<PageData> = serde_json::from_str(json)?;
        Ok(Self::from_pages(pages))
    }

    pub fn insert(&mut self, page: PageData) {
        self.pages.insert(page.route_path.clone(), page);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl PageSource for MemoryPageSource {
    fn load(&self, route_path: &str) -> Option<PageData> {
        self.pages.get(route_path).cloned()
    }
}

/// Resolve page data for a route.
///
/// Tries the route as given, then with its trailing slash toggled, so
/// `/guide` finds a page registered as `/guide/` and vice versa. Falls back
/// to [`PageData::not_found`].
#[must_use]
pub fn init_page_data(source: &dyn PageSource, route_path: &str) -> PageData {
    if let Some(page) = source.load(route_path) {
        return page;
    }

    let alternate = match route_path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_owned(),
        Some(_) => String::new(),
        None => format!("{route_path}/"),
    };
    if !alternate.is_empty()
        && let Some(page) = source.load(&alternate)
    {
        return page;
    }

    tracing::debug!(route = %route_path, "Page not found");
    PageData::not_found(route_path)
}
