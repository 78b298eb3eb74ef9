use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for vermak
#[derive(Debug, Parser)]
#[command(
    name = "vermak",
    version,
    about = "Preview how the map-search controller renders captured provider payloads"
)]
pub struct CliArgs {
    /// Path to a JSON controller config (default: built-in reference config)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the configured country profiles
    Profiles,

    /// Render a nearby-search response as markers and result rows
    Results {
        /// JSON file shaped like `{"status": "OK", "results": [...]}`
        file: PathBuf,
    },

    /// Render a place-details response as the info panel
    Details {
        /// JSON file shaped like `{"status": "OK", "result": {...}}`
        file: PathBuf,
    },
}
