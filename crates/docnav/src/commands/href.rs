//! `docnav href` command implementation.

use clap::Args;
use docnav_url::normalize_href;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the href command.
#[derive(Args)]
pub(crate) struct HrefArgs {
    /// Link to normalize.
    url: String,
}

impl HrefArgs {
    /// Execute the href command.
    pub(crate) fn execute(&self, output: &Output) -> Result<(), CliError> {
        output.result(&normalize_href(&self.url))?;
        Ok(())
    }
}
