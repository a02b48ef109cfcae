use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "difflens",
    about = "Structural diff for JSON documents",
    version,
)]
pub struct Cli {
    /// The left ("original") document; `-` reads stdin
    pub left: PathBuf,

    /// The right ("modified") document; `-` reads stdin
    pub right: PathBuf,

    /// Show only entries that contain a difference
    #[arg(long)]
    pub only_changed: bool,

    /// Start with every container collapsed
    #[arg(long, conflicts_with = "expand_all")]
    pub collapse_all: bool,

    /// Start with every container expanded, ignoring the default policy
    /// of collapsing unchanged containers
    #[arg(long)]
    pub expand_all: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
