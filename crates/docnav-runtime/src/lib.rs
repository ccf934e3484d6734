//! Page runtime for docnav.
//!
//! Holds the state a documentation page needs while it is displayed:
//!
//! - [`normalize_route_path`] turns a location pathname into a route path
//! - [`Environment`] and [`RenderMode`] decide how the page starts
//! - [`PageSource`] and [`init_page_data`] resolve page data for a route
//! - [`Theme`] is the light/dark color theme
//! - [`App`] owns all of the above plus the [`Sidebar`](docnav_sidebar::Sidebar)
//!   and keeps them in step on navigation
//!
//! # Example
//!
//! ```
//! use docnav_config::Config;
//! use docnav_runtime::{App, Environment, MemoryPageSource, PageData};
//!
//! let source = MemoryPageSource::from_pages([PageData::new("/guide/intro", "Intro")]);
//! let mut app = App::start(Config::default(), Box::new(source), Environment::default(), "/");
//!
//! app.navigate("/guide/intro.html");
//! assert_eq!(app.page().title, "Intro");
//! ```

mod app;
mod env;
mod page;
mod route;
mod theme;

pub use app::{App, LangLink};
pub use env::{Environment, RenderMode};
pub use page::{MemoryPageSource, PageData, PageSource, PageType, init_page_data};
pub use route::normalize_route_path;
pub use theme::{Theme, ThemeParseError};
