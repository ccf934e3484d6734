//! CLI command implementations.

pub(crate) mod href;
pub(crate) mod lang;
pub(crate) mod sidebar;

use std::path::PathBuf;

use clap::Args;
use docnav_config::{CliSettings, Config};

use crate::error::CliError;

pub(crate) use href::HrefArgs;
pub(crate) use lang::LangArgs;
pub(crate) use sidebar::SidebarArgs;

/// Configuration options shared by all commands.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file; repeat to merge several (default:
    /// auto-discover docnav.toml).
    #[arg(short, long, global = true)]
    config: Vec<PathBuf>,

    /// Site base path (overrides config).
    #[arg(long, global = true, env = "DOCNAV_BASE")]
    base: Option<String>,

    /// Default language (overrides config).
    #[arg(long, global = true)]
    lang: Option<String>,
}

impl ConfigArgs {
    /// Load configuration with CLI overrides applied.
    pub(crate) fn load(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            base: self.base.clone(),
            lang: self.lang.clone(),
            ssg: None,
        };
        let config = Config::load(&self.config, Some(&cli_settings))?;
        tracing::info!(
            base = %config.base,
            lang = %config.lang,
            locales = config.locales.len(),
            "Loaded configuration"
        );
        Ok(config)
    }
}
