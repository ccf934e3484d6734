//! `docnav lang` command implementation.

use clap::Args;
use docnav_config::Config;
use docnav_url::replace_lang;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the lang command.
#[derive(Args)]
pub(crate) struct LangArgs {
    /// URL to rewrite.
    url: String,

    /// Target language code.
    #[arg(long)]
    to: String,
}

impl LangArgs {
    /// Execute the lang command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails to load or the target
    /// language is not configured.
    pub(crate) fn execute(
        &self,
        config_args: &ConfigArgs,
        output: &Output,
    ) -> Result<(), CliError> {
        let config = config_args.load()?;
        output.result(&rewrite(&config, &self.url, &self.to)?)?;
        Ok(())
    }
}

fn rewrite(config: &Config, url: &str, target: &str) -> Result<String, CliError> {
    let langs = config.langs();
    if !langs.is_empty() && !langs.contains(&target) {
        return Err(CliError::Validation(format!(
            "Unknown language '{target}' (configured: {})",
            langs.join(", ")
        )));
    }
    Ok(replace_lang(url, target, &config.lang, &langs, &config.base))
}
