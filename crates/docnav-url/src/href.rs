//! Link classification and `.html` href canonicalization.

use percent_encoding::percent_decode_str;

use crate::path::add_leading_slash;

/// Schemes that bypass all path normalization.
const EXTERNAL_PREFIXES: [&str; 4] = ["http://", "https://", "mailto:", "tel:"];

/// Check whether `url` points outside the site.
#[must_use]
pub fn is_external_url(url: &str) -> bool {
    EXTERNAL_PREFIXES.iter().any(|prefix| url.starts_with(prefix))
}

/// Check whether `path` names a markdown source file (`.md` or `.mdx`).
#[must_use]
pub fn is_markdown_path(path: &str) -> bool {
    path.ends_with(".md") || path.ends_with(".mdx")
}

/// Strip the hash fragment and the query string.
#[must_use]
pub fn clean_url(url: &str) -> &str {
    let url = without_hash(url);
    url.split('?').next().unwrap_or(url)
}

/// Strip the hash fragment.
#[must_use]
pub fn without_hash(url: &str) -> &str {
    url.split('#').next().unwrap_or(url)
}

/// Split `url` into the part before the first `#` and the fragment after it.
///
/// The fragment is empty when `url` has none.
#[must_use]
pub fn parse_url(url: &str) -> (&str, &str) {
    url.split_once('#').unwrap_or((url, ""))
}

/// Turn a route link into the `.html` href it is served from.
///
/// - Empty input maps to `/`.
/// - External, `mailto:` and `tel:` links are returned unchanged.
/// - Otherwise the link is percent-decoded; a trailing `/` gets
///   `index.html`, any other path without `.html` gets the suffix. Query
///   and fragment are kept after the suffix.
///
/// # Examples
///
/// ```
/// use docnav_url::normalize_href;
///
/// assert_eq!(normalize_href("/guide/"), "/guide/index.html");
/// assert_eq!(normalize_href("guide/start#install"), "/guide/start.html#install");
/// assert_eq!(normalize_href("tel:+123"), "tel:+123");
/// ```
#[must_use]
pub fn normalize_href(url: &str) -> String {
    if url.is_empty() {
        return "/".to_owned();
    }
    if is_external_url(url) {
        return url.to_owned();
    }

    let decoded = percent_decode_str(url).decode_utf8_lossy();
    let (path, hash) = parse_url(&decoded);
    let (path, query) = match path.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (path, None),
    };

    let mut href = path.to_owned();
    if !href.ends_with(".html") {
        if href.ends_with('/') {
            href.push_str("index.html");
        } else {
            href.push_str(".html");
        }
    }
    if let Some(query) = query {
        href.push('?');
        href.push_str(query);
    }
    if !hash.is_empty() {
        href.push('#');
        href.push_str(hash);
    }

    add_leading_slash(&href)
}
