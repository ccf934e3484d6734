//! Locale segment rewriting.
//!
//! Pages in the default language are served without a locale segment
//! (`/guide.html`); every other language lives under its own first segment
//! (`/zh/guide.html`).

use crate::base::{remove_base, strip_path_prefix, with_base};
use crate::path::add_leading_slash;

/// Rewrite the locale segment of `raw_url` to `target_lang`.
///
/// The base is stripped before inspecting the path and re-applied to the
/// result. Only the first path segment is treated as a language code, and
/// only when it appears in `langs`; otherwise the URL is considered to be in
/// the default language. An empty path (the bare base) stands for
/// `/index.html`.
///
/// # Examples
///
/// ```
/// use docnav_url::replace_lang;
///
/// let langs = ["en", "zh"];
/// assert_eq!(replace_lang("/guide.html", "zh", "en", &langs, ""), "/zh/guide.html");
/// assert_eq!(replace_lang("/zh/guide.html", "en", "en", &langs, ""), "/guide.html");
/// assert_eq!(replace_lang("/docs", "zh", "en", &langs, "/docs"), "/docs/zh/index.html");
/// ```
#[must_use]
pub fn replace_lang(
    raw_url: &str,
    target_lang: &str,
    default_lang: &str,
    langs: &[impl AsRef<str>],
    base: &str,
) -> String {
    let mut url = remove_base(raw_url, base);
    if url.is_empty() {
        url = "/index.html".to_owned();
    }

    let original_lang = url
        .strip_prefix('/')
        .and_then(|path| path.split('/').next())
        .filter(|segment| is_known_lang(segment, langs));

    let result = match original_lang {
        None if target_lang == default_lang => url.clone(),
        None => add_leading_slash(&format!("{target_lang}{url}")),
        Some(lang) => {
            let rest = &url[lang.len() + 1..];
            if target_lang == default_lang {
                rest.to_owned()
            } else {
                format!("/{target_lang}{rest}")
            }
        }
    };

    with_base(&result, base)
}

/// Remove a leading language segment from `path`.
///
/// Only a whole first segment is removed: with `langs = ["en"]`,
/// `/en/guide` becomes `/guide` but `/english` is left alone.
#[must_use]
pub fn without_lang(path: &str, langs: &[impl AsRef<str>]) -> String {
    let path = add_leading_slash(path);
    for lang in langs {
        let lang = lang.as_ref();
        if lang.is_empty() {
            continue;
        }
        if let Some(rest) = strip_path_prefix(&path, &format!("/{lang}")) {
            return add_leading_slash(rest);
        }
    }
    path
}

fn is_known_lang(segment: &str, langs: &[impl AsRef<str>]) -> bool {
    !segment.is_empty() && langs.iter().any(|lang| lang.as_ref() == segment)
}
