//! Application state for a documentation page.
//!
//! [`App`] ties together the site configuration, the page being shown,
//! the color theme and the sidebar. Navigation goes through
//! [`App::navigate`], which re-resolves page data, language and sidebar for
//! the new location.

use docnav_config::Config;
use docnav_sidebar::{Sidebar, SidebarTree};
use docnav_url::replace_lang;

use crate::env::{Environment, RenderMode};
use crate::page::{PageData, PageSource, init_page_data};
use crate::route::normalize_route_path;
use crate::theme::Theme;

/// Link to the current page in another language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LangLink {
    pub lang: String,
    pub label: String,
    pub href: String,
}

/// Page runtime state.
pub struct App {
    config: Config,
    source: Box<dyn PageSource>,
    env: Environment,
    render_mode: RenderMode,
    theme: Theme,
    pathname: String,
    lang: String,
    data: PageData,
    sidebar: Option<Sidebar>,
    /// Language and route prefix the current sidebar was built for.
    sidebar_key: Option<(String, String)>,
}

impl App {
    /// Start the app at `pathname`.
    ///
    /// # Arguments
    ///
    /// * `config` - Validated site configuration
    /// * `source` - Page data source
    /// * `env` - Build environment flags
    /// * `pathname` - Initial location pathname
    #[must_use]
    pub fn start(
        config: Config,
        source: Box<dyn PageSource>,
        env: Environment,
        pathname: &str,
    ) -> Self {
        let render_mode = RenderMode::select(env.production, config.ssg);
        let mut app = Self {
            render_mode,
            env,
            source,
            theme: Theme::default(),
            pathname: String::new(),
            lang: config.lang.clone(),
            data: PageData::default(),
            sidebar: None,
            sidebar_key: None,
            config,
        };
        app.load(pathname);

        tracing::info!(
            mode = ?app.render_mode,
            route = %app.data.route_path,
            lang = %app.lang,
            "Started app"
        );
        app
    }

    /// Move to a new location.
    ///
    /// Page data is reloaded only when the route changes; the sidebar is
    /// recomputed only when location or language change.
    pub fn navigate(&mut self, pathname: &str) {
        if self.pathname == pathname {
            return;
        }
        self.load(pathname);
        tracing::debug!(pathname, route = %self.data.route_path, "Navigated");
    }

    /// Link to the current page in `target` language.
    #[must_use]
    pub fn switch_lang(&self, target: &str) -> String {
        replace_lang(
            &self.pathname,
            target,
            &self.config.lang,
            &self.config.langs(),
            &self.config.base,
        )
    }

    /// Links to the current page in every configured language.
    #[must_use]
    pub fn lang_links(&self) -> Vec<LangLink> {
        self.config
            .locales
            .iter()
            .map(|locale| LangLink {
                lang: locale.lang.clone(),
                label: locale.label.clone(),
                href: self.switch_lang(&locale.lang),
            })
            .collect()
    }

    /// Document title: page title followed by the site title.
    #[must_use]
    pub fn document_title(&self) -> String {
        let site = self.config.title_for_lang(&self.lang);
        match (self.data.title.as_str(), site) {
            ("", site) => site.to_owned(),
            (page, "") => page.to_owned(),
            (page, site) => format!("{page} | {site}"),
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn env(&self) -> Environment {
        self.env
    }

    #[must_use]
    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    #[must_use]
    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// Language of the current location.
    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    #[must_use]
    pub fn page(&self) -> &PageData {
        &self.data
    }

    /// Sidebar for the current location, if one is configured.
    #[must_use]
    pub fn sidebar(&self) -> Option<&Sidebar> {
        self.sidebar.as_ref()
    }

    /// Mutable sidebar access, used for toggling groups.
    pub fn sidebar_mut(&mut self) -> Option<&mut Sidebar> {
        self.sidebar.as_mut()
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Switch between light and dark. Returns the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        self.theme
    }

    fn load(&mut self, pathname: &str) {
        let route = normalize_route_path(pathname, &self.config.base);
        if route != self.data.route_path {
            self.data = init_page_data(self.source.as_ref(), &route);
        }
        pathname.clone_into(&mut self.pathname);
        self.config.lang_for_path(pathname).clone_into(&mut self.lang);
        self.update_sidebar();
    }

    fn update_sidebar(&mut self) {
        let route = normalize_route_path(&self.pathname, &self.config.base);
        let sidebars = self.config.sidebar_for_lang(&self.lang);
        let Some((prefix, nodes)) = sidebars.for_path(&route) else {
            self.sidebar = None;
            self.sidebar_key = None;
            return;
        };
        let lang_route_prefix = self.config.lang_route_prefix(&self.lang);

        let same_sidebar = self
            .sidebar_key
            .as_ref()
            .is_some_and(|(lang, key)| *lang == self.lang && key == prefix);
        if same_sidebar && let Some(sidebar) = self.sidebar.as_mut()
        {
            sidebar.set_location(&self.pathname, &lang_route_prefix);
            return;
        }

        self.sidebar = Some(Sidebar::new(
            SidebarTree::from_nodes(nodes),
            &self.config.base,
            &lang_route_prefix,
            &self.pathname,
        ));
        self.sidebar_key = Some((self.lang.clone(), prefix.to_owned()));
    }
}
