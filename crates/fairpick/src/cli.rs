use clap::{Parser, Subcommand};
use fairpick_core::types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fairpick")]
#[command(version)]
#[command(about = "Fair random picker: weighted draws that skip recent winners")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (text or json)
    #[arg(long, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Config file (defaults to ~/.config/fairpick/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding state.toml (overrides config and FAIRPICK_STATE_DIR)
    #[arg(long, global = true)]
    pub state_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add participants to the roster (repeat a name to raise its weight)
    Add {
        /// Names to add
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Show the roster with per-name weights
    List,

    /// Remove every participant from the roster (history is kept)
    Clear,

    /// Pick one participant, skipping recent winners
    Pick {
        /// Pick from this comma-separated pool instead of the roster
        #[arg(long, value_delimiter = ',')]
        from: Option<Vec<String>>,

        /// Override the configured exclude gap
        #[arg(long)]
        exclude_gap: Option<usize>,

        /// Seed the random generator for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Inspect or reset the pick history
    History {
        #[command(subcommand)]
        cmd: HistoryCommands,
    },

    /// Show/manage configuration
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// Show recent picks, most recent last
    Show,
    /// Forget all recent picks (start a new fairness window)
    Reset,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Write a commented config template
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
    /// Validate the configuration
    Validate,
}
