//! Slash and segment normalization.

/// Replace backslashes with forward slashes.
#[must_use]
pub fn slash(path: &str) -> String {
    path.replace('\\', "/")
}

/// Normalize a POSIX-style path without touching the filesystem.
///
/// Empty and `.` segments are dropped and `..` pops the preceding segment.
/// A `..` with nothing left to pop is kept, so `/../a` stays `/../a` and
/// `../a` stays `../a`. The result is absolute iff the input was.
///
/// # Examples
///
/// ```
/// use docnav_url::normalize_posix_path;
///
/// assert_eq!(normalize_posix_path("/a/./b/../c"), "/a/c");
/// assert_eq!(normalize_posix_path("a\\b//c/"), "a/b/c");
/// ```
#[must_use]
pub fn normalize_posix_path(path: &str) -> String {
    let path = slash(path);
    let is_absolute = path.starts_with('/');

    let mut parts: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    parts.pop();
                } else {
                    parts.push("..");
                }
            }
            _ => parts.push(part),
        }
    }

    let joined = parts.join("/");
    if is_absolute {
        format!("/{joined}")
    } else {
        joined
    }
}

/// Prefix `url` with `/` unless it already has one.
///
/// Strings starting with `https` are treated as absolute and left alone.
/// The empty string becomes `/`.
#[must_use]
pub fn add_leading_slash(url: &str) -> String {
    if url.starts_with('/') || url.starts_with("https") {
        url.to_owned()
    } else {
        format!("/{url}")
    }
}

/// Strip a single leading `/`.
#[must_use]
pub fn remove_leading_slash(url: &str) -> &str {
    url.strip_prefix('/').unwrap_or(url)
}

/// Strip a single trailing `/`.
#[must_use]
pub fn remove_trailing_slash(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}

/// Canonical slash form: exactly one leading `/`, no trailing `/`, no
/// traversal segments.
///
/// The root path normalizes to the empty string, which lets a base of `/`
/// act as "no base".
#[must_use]
pub fn normalize_slash(url: &str) -> String {
    let leading = add_leading_slash(&normalize_posix_path(url));
    remove_trailing_slash(&leading).to_owned()
}
