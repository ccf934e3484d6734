//! docnav CLI - Documentation navigation toolkit.
//!
//! Provides commands for:
//! - `href`: Normalize a link the way sidebar and nav links are rendered
//! - `lang`: Rewrite a URL into another configured language
//! - `sidebar`: Show the sidebar for a location with active branches expanded

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConfigArgs, HrefArgs, LangArgs, SidebarArgs};
use output::Output;

/// docnav - Documentation navigation toolkit.
#[derive(Parser)]
#[command(name = "docnav", version, about)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a link href.
    Href(HrefArgs),
    /// Rewrite a URL into another language.
    Lang(LangArgs),
    /// Show the sidebar for a location.
    Sidebar(SidebarArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Href(args) => args.execute(&output),
        Commands::Lang(args) => args.execute(&cli.config, &output),
        Commands::Sidebar(args) => args.execute(&cli.config, &output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
