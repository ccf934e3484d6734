//! Configuration management for docnav.
//!
//! Parses `docnav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. Several files can
//! be layered; they are merged in order with [`merge_doc_config`] before
//! deserialization, so arrays (locales, sidebar entries) accumulate across
//! layers.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `base`
//! - `title`
//! - `description`

mod expand;
mod merge;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use docnav_sidebar::SidebarConfig;
use docnav_url::{is_external_url, normalize_slash, remove_base};
use serde::Deserialize;

pub use merge::merge_doc_config;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override site base path.
    pub base: Option<String>,
    /// Override default language.
    pub lang: Option<String>,
    /// Override static site generation flag.
    pub ssg: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

/// Documentation site configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base path the site is served under.
    pub base: String,
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Default language (served without a locale segment).
    pub lang: String,
    /// Supported locales.
    pub locales: Vec<LocaleConfig>,
    /// Whether pages are pre-rendered (enables hydration in production).
    pub ssg: bool,
    /// Theme configuration.
    pub theme: ThemeConfig,

    /// Paths of the loaded config files, in merge order (set after loading).
    #[serde(skip)]
    pub config_paths: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base: "/".to_owned(),
            title: String::new(),
            description: String::new(),
            lang: String::new(),
            locales: Vec::new(),
            ssg: true,
            theme: ThemeConfig::default(),
            config_paths: Vec::new(),
        }
    }
}

/// Theme configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Sidebars keyed by route prefix.
    pub sidebar: SidebarConfig,
}

/// Locale configuration.
#[derive(Debug, Deserialize)]
pub struct LocaleConfig {
    /// Language code, used as the route segment.
    pub lang: String,
    /// Label shown in the language switcher.
    pub label: String,
    /// Localized site title.
    #[serde(default)]
    pub title: Option<String>,
    /// Localized site description.
    #[serde(default)]
    pub description: Option<String>,
    /// Localized sidebars. Falls back to the theme sidebar when empty.
    #[serde(default)]
    pub sidebar: SidebarConfig,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`title`").
        field: String,
        /// Error message (e.g., "${`DOCS_TITLE`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from files with optional CLI settings.
    ///
    /// If `config_paths` is non-empty, every file is loaded and the files are
    /// merged in order. Otherwise, searches for `docnav.toml` in the current
    /// directory and its parents, falling back to defaults.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if an explicit path doesn't exist, parsing fails, or the
    /// resulting configuration is invalid.
    pub fn load(
        config_paths: &[PathBuf],
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if config_paths.is_empty() {
            match Self::discover_config() {
                Some(discovered) => Self::load_from_files(&[discovered])?,
                None => Self::default(),
            }
        } else {
            if let Some(missing) = config_paths.iter().find(|path| !path.exists()) {
                return Err(ConfigError::NotFound(missing.clone()));
            }
            Self::load_from_files(config_paths)?
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(base) = &settings.base {
            self.base.clone_from(base);
        }
        if let Some(lang) = &settings.lang {
            self.lang.clone_from(lang);
        }
        if let Some(ssg) = settings.ssg {
            self.ssg = ssg;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "Discovered config file");
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load and merge configuration layers.
    fn load_from_files(paths: &[PathBuf]) -> Result<Self, ConfigError> {
        let mut layers = Vec::with_capacity(paths.len());
        for path in paths {
            layers.push(Self::read_layer(path)?);
        }

        let merged = merge_doc_config(layers);
        let mut config: Self = toml::Value::Table(merged).try_into()?;

        config.expand_env_vars()?;
        config.config_paths = paths.to_vec();

        Ok(config)
    }

    /// Read one configuration file as a TOML table.
    fn read_layer(path: &Path) -> Result<toml::Table, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let table: toml::Table = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), keys = table.len(), "Loaded config layer");
        Ok(table)
    }

    /// Validate configuration values.
    ///
    /// Called by [`Config::load`] once CLI settings are applied.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_base()?;
        self.validate_locales()?;
        Ok(())
    }

    fn validate_base(&self) -> Result<(), ConfigError> {
        if is_external_url(&self.base) {
            return Err(ConfigError::Validation(
                "base must be a path, not an external URL".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_locales(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for locale in &self.locales {
            if locale.lang.is_empty() {
                return Err(ConfigError::Validation(
                    "locales.lang cannot be empty".to_owned(),
                ));
            }
            if locale.lang.contains('/') {
                return Err(ConfigError::Validation(format!(
                    "locale '{}' must not contain '/'",
                    locale.lang
                )));
            }
            if !seen.insert(locale.lang.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "locale '{}' is defined more than once",
                    locale.lang
                )));
            }
        }

        if !self.locales.is_empty() && !seen.contains(self.lang.as_str()) {
            return Err(ConfigError::Validation(format!(
                "default language '{}' must be listed in locales",
                self.lang
            )));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.base = expand::expand_env(&self.base, "base")?;
        self.title = expand::expand_env(&self.title, "title")?;
        self.description = expand::expand_env(&self.description, "description")?;
        Ok(())
    }

    /// Base path in canonical slash form (`""` for the root).
    #[must_use]
    pub fn normalized_base(&self) -> String {
        normalize_slash(&self.base)
    }

    /// Supported language codes in configuration order.
    #[must_use]
    pub fn langs(&self) -> Vec<&str> {
        self.locales.iter().map(|l| l.lang.as_str()).collect()
    }

    /// Get locale configuration by language code.
    #[must_use]
    pub fn locale(&self, lang: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|l| l.lang == lang)
    }

    /// Route prefix of a language: `""` for the default language, `/lang`
    /// otherwise.
    #[must_use]
    pub fn lang_route_prefix(&self, lang: &str) -> String {
        if lang.is_empty() || lang == self.lang {
            String::new()
        } else {
            format!("/{lang}")
        }
    }

    /// Language of a location pathname.
    ///
    /// The base is stripped first; a first segment naming a configured
    /// locale selects that locale, anything else is the default language.
    #[must_use]
    pub fn lang_for_path(&self, pathname: &str) -> &str {
        let path = remove_base(pathname, &self.base);
        let segment = path
            .strip_prefix('/')
            .and_then(|p| p.split('/').next())
            .unwrap_or_default();
        self.locale(segment)
            .map_or(self.lang.as_str(), |locale| locale.lang.as_str())
    }

    /// Sidebars for a language, falling back to the theme sidebars.
    #[must_use]
    pub fn sidebar_for_lang(&self, lang: &str) -> &SidebarConfig {
        self.locale(lang)
            .map(|locale| &locale.sidebar)
            .filter(|sidebar| !sidebar.is_empty())
            .unwrap_or(&self.theme.sidebar)
    }

    /// Site title for a language.
    #[must_use]
    pub fn title_for_lang(&self, lang: &str) -> &str {
        self.locale(lang)
            .and_then(|locale| locale.title.as_deref())
            .unwrap_or(&self.title)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use docnav_sidebar::SidebarNode;
    use pretty_assertions::assert_eq;

    use super::*;

    const I18N_CONFIG: &str = r#"
base = "/docs/"
title = "Docs"
lang = "en"

[[locales]]
lang = "en"
label = "English"

[[locales]]
lang = "zh"
label = "简体中文"
title = "文档"

[locales.sidebar]
"/zh/guide" = [{ text = "介绍", link = "/zh/guide/intro" }]

[[theme.sidebar."/guide"]]
text = "Getting Started"
items = [
    { text = "Intro", link = "/guide/intro" },
    { text = "Install", link = "/guide/install" },
]
"#;

    fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.base, "/");
        assert_eq!(config.normalized_base(), "");
        assert_eq!(config.lang, "");
        assert!(config.locales.is_empty());
        assert!(config.ssg);
        assert!(config.theme.sidebar.is_empty());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.base, "/");
        assert!(config.ssg);
    }

    #[test]
    fn test_parse_i18n_config() {
        let config: Config = toml::from_str(I18N_CONFIG).unwrap();
        assert_eq!(config.base, "/docs/");
        assert_eq!(config.langs(), vec!["en", "zh"]);
        assert_eq!(config.locale("zh").unwrap().label, "简体中文");

        let (prefix, nodes) = config.theme.sidebar.for_path("/guide/intro").unwrap();
        assert_eq!(prefix, "/guide");
        let SidebarNode::Group(group) = &nodes[0] else {
            panic!("expected group");
        };
        assert_eq!(group.items.len(), 2);
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "docnav.toml", I18N_CONFIG);

        let config = Config::load(&[path.clone()], None).unwrap();
        assert_eq!(config.title, "Docs");
        assert_eq!(config.config_paths, vec![path]);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(&[PathBuf::from("/nonexistent/docnav.toml")], None);
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "docnav.toml", "base = [");
        let result = Config::load(&[path], None);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_layers_concatenate_arrays() {
        let dir = tempfile::tempdir().unwrap();
        let base = write_config(
            dir.path(),
            "base.toml",
            r#"
lang = "en"
[[locales]]
lang = "en"
label = "English"

[theme.sidebar]
"/guide" = [{ text = "Intro", link = "/guide/intro" }]
"#,
        );
        let overlay = write_config(
            dir.path(),
            "overlay.toml",
            r#"
title = "Overlay"
[[locales]]
lang = "fr"
label = "Français"

[theme.sidebar]
"/guide" = [{ text = "Install", link = "/guide/install" }]
"#,
        );

        let config = Config::load(&[base, overlay], None).unwrap();
        assert_eq!(config.title, "Overlay");
        assert_eq!(config.langs(), vec!["en", "fr"]);

        let (_, nodes) = config.theme.sidebar.for_path("/guide").unwrap();
        let texts: Vec<&str> = nodes.iter().map(SidebarNode::text).collect();
        assert_eq!(texts, vec!["Intro", "Install"]);
        assert_eq!(config.config_paths.len(), 2);
    }

    #[test]
    fn test_apply_cli_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "docnav.toml", I18N_CONFIG);
        let settings = CliSettings {
            base: Some("/v2/".to_owned()),
            lang: Some("zh".to_owned()),
            ssg: Some(false),
        };

        let config = Config::load(&[path], Some(&settings)).unwrap();
        assert_eq!(config.base, "/v2/");
        assert_eq!(config.lang, "zh");
        assert!(!config.ssg);
    }

    #[test]
    fn test_apply_cli_settings_validated() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "docnav.toml", I18N_CONFIG);
        let settings = CliSettings {
            lang: Some("de".to_owned()),
            ..Default::default()
        };

        let result = Config::load(&[path], Some(&settings));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_cli_lang_completes_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "docnav.toml",
            r#"
[[locales]]
lang = "en"
label = "English"

[[locales]]
lang = "zh"
label = "简体中文"
"#,
        );

        let result = Config::load(&[path.clone()], None);
        assert!(matches!(result, Err(ConfigError::Validation(_))));

        let settings = CliSettings {
            lang: Some("en".to_owned()),
            ..Default::default()
        };
        let config = Config::load(&[path], Some(&settings)).unwrap();
        assert_eq!(config.lang, "en");
        assert_eq!(config.langs(), vec!["en", "zh"]);
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings::default());
        assert_eq!(config.base, "/");
        assert!(config.ssg);
    }

    #[test]
    fn test_expand_env_vars_title() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DOCNAV_TEST_SITE_TITLE", "Acme");
        }
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "docnav.toml",
            r#"title = "${DOCNAV_TEST_SITE_TITLE} Docs""#,
        );

        let config = Config::load(&[path], None).unwrap();
        assert_eq!(config.title, "Acme Docs");
        unsafe {
            std::env::remove_var("DOCNAV_TEST_SITE_TITLE");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCNAV_TEST_MISSING_BASE");
        }
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "docnav.toml",
            r#"base = "${DOCNAV_TEST_MISSING_BASE}""#,
        );

        let result = Config::load(&[path], None);
        assert!(matches!(result, Err(ConfigError::EnvVar { .. })));
    }

    fn assert_validation_error(config: &Config, expected: &str) {
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(
            err.to_string().contains(expected),
            "expected '{expected}' in '{err}'"
        );
    }

    fn locale(lang: &str) -> LocaleConfig {
        LocaleConfig {
            lang: lang.to_owned(),
            label: lang.to_uppercase(),
            title: None,
            description: None,
            sidebar: SidebarConfig::default(),
        }
    }

    #[test]
    fn test_validate_default_config_passes() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_external_base() {
        let config = Config {
            base: "https://example.com/docs".to_owned(),
            ..Default::default()
        };
        assert_validation_error(&config, "base");
    }

    #[test]
    fn test_validate_default_lang_not_in_locales() {
        let config = Config {
            lang: "de".to_owned(),
            locales: vec![locale("en"), locale("zh")],
            ..Default::default()
        };
        assert_validation_error(&config, "'de'");
    }

    #[test]
    fn test_validate_duplicate_locale() {
        let config = Config {
            lang: "en".to_owned(),
            locales: vec![locale("en"), locale("en")],
            ..Default::default()
        };
        assert_validation_error(&config, "more than once");
    }

    #[test]
    fn test_validate_locale_with_slash() {
        let config = Config {
            lang: "en".to_owned(),
            locales: vec![locale("en"), locale("zh/cn")],
            ..Default::default()
        };
        assert_validation_error(&config, "must not contain");
    }

    #[test]
    fn test_validate_empty_locale() {
        let config = Config {
            locales: vec![locale("")],
            ..Default::default()
        };
        assert_validation_error(&config, "cannot be empty");
    }

    #[test]
    fn test_lang_route_prefix() {
        let config: Config = toml::from_str(I18N_CONFIG).unwrap();
        assert_eq!(config.lang_route_prefix("en"), "");
        assert_eq!(config.lang_route_prefix("zh"), "/zh");
        assert_eq!(config.lang_route_prefix(""), "");
    }

    #[test]
    fn test_lang_for_path() {
        let config: Config = toml::from_str(I18N_CONFIG).unwrap();
        assert_eq!(config.lang_for_path("/docs/zh/guide/intro.html"), "zh");
        assert_eq!(config.lang_for_path("/docs/guide/intro.html"), "en");
        assert_eq!(config.lang_for_path("/docs/"), "en");
        assert_eq!(config.lang_for_path("/docs/zhongwen"), "en");
    }

    #[test]
    fn test_sidebar_for_lang_fallback() {
        let config: Config = toml::from_str(I18N_CONFIG).unwrap();
        assert!(config.sidebar_for_lang("zh").for_path("/zh/guide").is_some());
        assert!(config.sidebar_for_lang("en").for_path("/guide").is_some());
        assert!(config.sidebar_for_lang("fr").for_path("/guide").is_some());
    }

    #[test]
    fn test_title_for_lang() {
        let config: Config = toml::from_str(I18N_CONFIG).unwrap();
        assert_eq!(config.title_for_lang("zh"), "文档");
        assert_eq!(config.title_for_lang("en"), "Docs");
    }
}
