use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cropadvisor",
    version,
    about = "Crop recommendations from field attributes"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recommend crops for a field described as JSON
    Recommend {
        /// Field attributes JSON file ("-" for stdin)
        #[arg(short, long, default_value = "-")]
        field: PathBuf,

        /// Skip the classifier and use rule-based candidates
        #[arg(long)]
        rule_based: bool,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Show the effective crop economics table
    Crops,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
