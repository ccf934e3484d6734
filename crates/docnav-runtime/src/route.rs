//! Route path normalization.

use docnav_url::{add_leading_slash, clean_url, remove_base};
use percent_encoding::percent_decode_str;

/// Normalize a location pathname into a route path.
///
/// Query and hash are dropped, the path is percent-decoded and the site base
/// removed. A trailing `.html` is stripped and a trailing `/index` collapses
/// to `/`, so `/docs/guide/index.html` under base `/docs/` becomes `/guide/`.
///
/// # Examples
///
/// ```
/// use docnav_runtime::normalize_route_path;
///
/// assert_eq!(normalize_route_path("/docs/guide/intro.html", "/docs/"), "/guide/intro");
/// assert_eq!(normalize_route_path("/docs/", "/docs/"), "/");
/// ```
#[must_use]
pub fn normalize_route_path(pathname: &str, base: &str) -> String {
    let decoded = percent_decode_str(clean_url(pathname)).decode_utf8_lossy();
    let path = remove_base(&decoded, base);
    let path = path.strip_suffix(".html").unwrap_or(&path);
    let path = match path.strip_suffix("/index") {
        Some(parent) => format!("{parent}/"),
        None => path.to_owned(),
    };
    add_leading_slash(&path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_html_suffix() {
        assert_eq!(normalize_route_path("/guide/intro.html", "/"), "/guide/intro");
    }

    #[test]
    fn test_index_collapses_to_directory() {
        assert_eq!(normalize_route_path("/guide/index.html", "/"), "/guide/");
        assert_eq!(normalize_route_path("/guide/index", "/"), "/guide/");
        assert_eq!(normalize_route_path("/index.html", "/"), "/");
    }

    #[test]
    fn test_strips_base() {
        assert_eq!(normalize_route_path("/docs/guide/intro", "/docs/"), "/guide/intro");
        assert_eq!(normalize_route_path("/docs", "/docs/"), "/");
        assert_eq!(normalize_route_path("/docs/index.html", "/docs/"), "/");
        assert_eq!(normalize_route_path("/docsite/intro", "/docs/"), "/docsite/intro");
    }

    #[test]
    fn test_decodes_and_drops_query_and_hash() {
        assert_eq!(
            normalize_route_path("/guide/%E4%BB%8B%E7%BB%8D.html?x=1#top", "/"),
            "/guide/介绍"
        );
    }

    #[test]
    fn test_root() {
        assert_eq!(normalize_route_path("/", "/"), "/");
        assert_eq!(normalize_route_path("", "/"), "/");
    }
}
