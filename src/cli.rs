use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// eggsample - cooks a shuffled plate of eggs and spam
#[derive(Parser, Debug)]
#[command(name = "eggsample")]
#[command(about = "Cooks a shuffled plate of eggs and spam and serves it with a condiments tray")]
#[command(version)]
pub struct Cli {
    /// Seed for the ingredient shuffle (same seed, same plate)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Number of meals to serve from the same condiments tray
    #[arg(long, global = true)]
    pub servings: Option<u32>,

    /// Path to a kitchen configuration file (JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Cook and serve the meal (the default)
    Serve,
    /// Validate a kitchen configuration file
    Validate {
        /// Path to configuration file to validate
        path: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
