//! CLI parse: clap types for tracegen. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Tracegen CLI - branching input histories for reactive-system tests
#[derive(Parser, Debug)]
#[command(name = "tracegen")]
#[command(about = "Generate branching, timestamped input histories")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Project directory searched for config/config.toml
    #[arg(long, default_value = ".")]
    pub project: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for reproducible output (overrides configuration)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Clock increment in milliseconds (overrides configuration)
    #[arg(long)]
    pub clock_delta_ms: Option<u64>,

    /// Enable debug logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the demo program and print the resulting forest
    Demo {
        /// Main-line readings to generate
        #[arg(long, default_value = "5")]
        steps: usize,
        /// Alternative readings spliced in before each main-line reading
        #[arg(long, default_value = "1")]
        alternatives: usize,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Run the demo program and print every alternative history, one per line
    Paths {
        #[arg(long, default_value = "5")]
        steps: usize,
        #[arg(long, default_value = "1")]
        alternatives: usize,
    },
    /// Write the default configuration file
    InitConfig {
        /// Destination (default: <project>/config/config.toml)
        #[arg(long)]
        path: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
