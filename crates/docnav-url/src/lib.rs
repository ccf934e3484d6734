//! URL and path normalization for docnav.
//!
//! Pure string transforms shared by the sidebar, configuration and runtime
//! crates:
//! - [`normalize_posix_path`] and the slash helpers produce canonical paths
//! - [`with_base`] / [`remove_base`] add and strip the site base path
//! - [`replace_lang`] / [`without_lang`] rewrite the locale segment
//! - [`normalize_href`] turns route links into `.html` hrefs
//!
//! Every function is total over `&str`: malformed input is normalized rather
//! than rejected.
//!
//! # Example
//!
//! ```
//! use docnav_url::{normalize_href, replace_lang, with_base};
//!
//! assert_eq!(normalize_href("/guide/"), "/guide/index.html");
//! assert_eq!(with_base("/guide", "/docs/"), "/docs/guide");
//! assert_eq!(
//!     replace_lang("/guide.html", "zh", "en", &["en", "zh"], ""),
//!     "/zh/guide.html"
//! );
//! ```

mod base;
mod href;
mod lang;
mod path;

pub use base::{remove_base, strip_path_prefix, with_base, without_base};
pub use href::{
    clean_url, is_external_url, is_markdown_path, normalize_href, parse_url, without_hash,
};
pub use lang::{replace_lang, without_lang};
pub use path::{
    add_leading_slash, normalize_posix_path, normalize_slash, remove_leading_slash,
    remove_trailing_slash, slash,
};

/// Storage key under which the selected color appearance is persisted.
pub const APPEARANCE_KEY: &str = "docnav-theme-appearance";

/// File stem of the generated search index.
pub const SEARCH_INDEX_NAME: &str = "search_index";
