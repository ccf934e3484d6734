//! Active-route matching.
//!
//! Both the current location and each candidate link are reduced to a
//! canonical route before comparison, so `/guide/`, `/guide/index.html` and
//! `/guide#top` all name the same page.

use std::borrow::Cow;

use docnav_url::{
    add_leading_slash, clean_url, is_external_url, normalize_slash, remove_base,
    strip_path_prefix,
};
use percent_encoding::percent_decode_str;

/// Reduce a path to its canonical route.
///
/// Drops the hash and query, percent-decodes, normalizes slashes and strips
/// the `.html` suffix and a trailing `index` page. The site root becomes the
/// empty string.
///
/// # Examples
///
/// ```
/// use docnav_sidebar::canonical_path;
///
/// assert_eq!(canonical_path("/guide/index.html#top"), "/guide");
/// assert_eq!(canonical_path("guide/intro.html?x=1"), "/guide/intro");
/// assert_eq!(canonical_path("/"), "");
/// ```
#[must_use]
pub fn canonical_path(path: &str) -> String {
    let decoded = decode(clean_url(path));
    let normalized = normalize_slash(&decoded);
    let page = normalized.strip_suffix(".html").unwrap_or(&normalized);
    let page = page.strip_suffix("/index").unwrap_or(page);
    page.to_owned()
}

/// Check whether `candidate` is active for the `current` location.
///
/// With `exact`, the canonical routes must be equal. Otherwise the candidate
/// may also be an ancestor of the current route (by whole segments).
/// Empty and external candidates are never active.
#[must_use]
pub fn is_active(current: &str, candidate: &str, exact: bool) -> bool {
    if candidate.is_empty() || is_external_url(candidate) {
        return false;
    }
    routes_match(&canonical_path(current), &canonical_path(candidate), exact)
}

fn routes_match(current: &str, candidate: &str, exact: bool) -> bool {
    if exact {
        current == candidate
    } else {
        strip_path_prefix(current, candidate).is_some()
    }
}

fn decode(path: &str) -> Cow<'_, str> {
    percent_decode_str(path).decode_utf8_lossy()
}

/// Matcher bound to one location.
///
/// Strips the site base and the language route prefix from the current
/// pathname once, then compares every sidebar link against it with the
/// language prefix removed as well.
#[derive(Clone, Debug)]
pub struct ActiveMatcher {
    current: String,
    lang_prefix: String,
    exact: bool,
}

impl ActiveMatcher {
    /// Create an exact matcher for `pathname`.
    ///
    /// # Arguments
    ///
    /// * `pathname` - Browser location pathname (may be percent-encoded)
    /// * `base` - Site base path
    /// * `lang_route_prefix` - Route prefix of the current language (`""`
    ///   for the default language)
    #[must_use]
    pub fn new(pathname: &str, base: &str, lang_route_prefix: &str) -> Self {
        let lang_prefix = normalize_slash(lang_route_prefix);
        let without_base = remove_base(&decode(pathname), base);
        let current = strip_lang_prefix(&without_base, &lang_prefix);

        Self {
            current: canonical_path(current),
            lang_prefix,
            exact: true,
        }
    }

    /// Also accept links that are ancestors of the current route.
    #[must_use]
    pub fn with_exact(mut self, exact: bool) -> Self {
        self.exact = exact;
        self
    }

    /// Canonical current route.
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Check whether a sidebar link is active.
    #[must_use]
    pub fn matches(&self, link: &str) -> bool {
        if link.is_empty() || is_external_url(link) {
            return false;
        }
        let link = add_leading_slash(link);
        let link = strip_lang_prefix(&link, &self.lang_prefix);
        routes_match(&self.current, &canonical_path(link), self.exact)
    }
}

fn strip_lang_prefix<'a>(path: &'a str, prefix: &str) -> &'a str {
    strip_path_prefix(path, prefix).unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_path_variants() {
        assert_eq!(canonical_path("/guide/"), "/guide");
        assert_eq!(canonical_path("/guide/index.html"), "/guide");
        assert_eq!(canonical_path("/guide/index"), "/guide");
        assert_eq!(canonical_path("/guide.html"), "/guide");
        assert_eq!(canonical_path("/guide#install"), "/guide");
    }

    #[test]
    fn test_canonical_path_root() {
        assert_eq!(canonical_path(""), "");
        assert_eq!(canonical_path("/"), "");
        assert_eq!(canonical_path("/index.html"), "");
    }

    #[test]
    fn test_canonical_path_decodes() {
        assert_eq!(canonical_path("/guide/%E4%B8%AD%E6%96%87.html"), "/guide/中文");
    }

    #[test]
    fn test_is_active_exact() {
        assert!(is_active("/guide/intro.html", "/guide/intro", true));
        assert!(is_active("/guide/", "/guide/index", true));
        assert!(!is_active("/guide/intro", "/guide", true));
    }

    #[test]
    fn test_is_active_ancestor() {
        assert!(is_active("/guide/intro", "/guide", false));
        assert!(is_active("/guide/intro", "/guide/intro", false));
        assert!(is_active("/guide/intro", "/", false));
        assert!(!is_active("/guides/intro", "/guide", false));
        assert!(!is_active("/guide", "/guide/intro", false));
    }

    #[test]
    fn test_is_active_never_for_empty_or_external() {
        assert!(!is_active("/guide", "", true));
        assert!(!is_active("/guide", "", false));
        assert!(!is_active("/", "https://example.com/", false));
    }

    #[test]
    fn test_matcher_strips_base() {
        let matcher = ActiveMatcher::new("/docs/guide/intro.html", "/docs/", "");
        assert_eq!(matcher.current(), "/guide/intro");
        assert!(matcher.matches("/guide/intro"));
        assert!(!matcher.matches("/guide"));
    }

    #[test]
    fn test_matcher_strips_lang_prefix() {
        let matcher = ActiveMatcher::new("/docs/zh/guide/intro.html", "/docs", "/zh");
        assert_eq!(matcher.current(), "/guide/intro");
        assert!(matcher.matches("/zh/guide/intro"));
        assert!(matcher.matches("/guide/intro"));
    }

    #[test]
    fn test_matcher_lang_prefix_segment_boundary() {
        let matcher = ActiveMatcher::new("/zhongwen/page", "/", "/zh");
        assert_eq!(matcher.current(), "/zhongwen/page");
    }

    #[test]
    fn test_matcher_decodes_pathname() {
        let matcher = ActiveMatcher::new("/guide/%E4%B8%AD%E6%96%87.html", "", "");
        assert!(matcher.matches("/guide/中文"));
    }

    #[test]
    fn test_matcher_relative_link() {
        let matcher = ActiveMatcher::new("/guide/intro", "", "");
        assert!(matcher.matches("guide/intro"));
    }

    #[test]
    fn test_matcher_non_exact() {
        let matcher = ActiveMatcher::new("/guide/advanced/plugins", "", "").with_exact(false);
        assert!(matcher.matches("/guide"));
        assert!(matcher.matches("/guide/advanced/"));
        assert!(!matcher.matches("/api"));
    }

    #[test]
    fn test_matcher_rejects_empty_and_external() {
        let matcher = ActiveMatcher::new("/", "", "");
        assert!(!matcher.matches(""));
        assert!(!matcher.matches("mailto:a@b.com"));
    }
}
