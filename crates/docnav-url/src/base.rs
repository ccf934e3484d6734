//! Site base path handling.

use crate::href::is_external_url;
use crate::path::{add_leading_slash, normalize_slash};

/// Strip `prefix` from `path` when it matches whole segments.
///
/// Returns the remainder (empty or starting with `/`), or `None` when `path`
/// does not start with `prefix` at a segment boundary. An empty prefix
/// matches every path.
///
/// # Examples
///
/// ```
/// use docnav_url::strip_path_prefix;
///
/// assert_eq!(strip_path_prefix("/docs/guide", "/docs"), Some("/guide"));
/// assert_eq!(strip_path_prefix("/docs", "/docs"), Some(""));
/// assert_eq!(strip_path_prefix("/docsite", "/docs"), None);
/// ```
#[must_use]
pub fn strip_path_prefix<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = path.strip_prefix(prefix)?;
    if rest.is_empty() || rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}

/// Prefix `url` with the normalized `base`.
///
/// URLs already under the base are returned as-is, so applying the base
/// twice is the same as applying it once. External URLs are never prefixed.
#[must_use]
pub fn with_base(url: &str, base: &str) -> String {
    if is_external_url(url) {
        return url.to_owned();
    }

    let normalized_url = add_leading_slash(url);
    let normalized_base = normalize_slash(base);
    if strip_path_prefix(&normalized_url, &normalized_base).is_some() {
        normalized_url
    } else {
        format!("{normalized_base}{normalized_url}")
    }
}

/// Strip the normalized `base` from a leading-slash-normalized `url`.
///
/// Returns the empty string when `url` is exactly the base. URLs outside the
/// base come back unchanged apart from the leading slash.
#[must_use]
pub fn remove_base(url: &str, base: &str) -> String {
    let normalized_url = add_leading_slash(url);
    let normalized_base = normalize_slash(base);
    match strip_path_prefix(&normalized_url, &normalized_base) {
        Some(rest) => rest.to_owned(),
        None => normalized_url,
    }
}

/// Alias of [`remove_base`] for route paths.
#[must_use]
pub fn without_base(path: &str, base: &str) -> String {
    remove_base(path, base)
}
