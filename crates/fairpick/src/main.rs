use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

mod cli;
mod config_cmds;
mod history_cmds;
mod pick_cmd;
mod roster_cmds;

use cli::{Cli, Commands, ConfigCommands, HistoryCommands};
use fairpick_config::{PickerConfig, validate_config};
use fairpick_core::types::OutputFormat;

/// Resolved settings shared by every command that reads the config.
pub(crate) struct AppContext {
    pub config: PickerConfig,
    pub state_path: PathBuf,
    pub format: OutputFormat,
}

impl AppContext {
    fn resolve(
        config: Option<&Path>,
        state_dir: Option<&Path>,
        format: OutputFormat,
    ) -> Result<Self> {
        let config = load_config(config, state_dir)?;
        validate_config(&config)?;

        let state_path = config.state_file();
        tracing::debug!(state = %state_path.display(), "Resolved state file");

        Ok(Self {
            config,
            state_path,
            format,
        })
    }
}

/// Load the config file and apply environment and `--state-dir` overrides.
pub(crate) fn load_config(
    config: Option<&Path>,
    state_dir: Option<&Path>,
) -> Result<PickerConfig> {
    let mut config = PickerConfig::load(config)?;
    if let Some(dir) = state_dir {
        config.state.dir = Some(dir.to_path_buf());
    }
    Ok(config)
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries command output only.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
        .ok();

    let cli = Cli::parse();
    let config_arg = cli.config.as_deref();
    let state_dir_arg = cli.state_dir.as_deref();
    // `config init` and `config validate` skip this so they work on a broken file.
    let resolve = || AppContext::resolve(config_arg, state_dir_arg, cli.format);

    match cli.command {
        Commands::Add { names } => roster_cmds::handle_add(&resolve()?, names)?,
        Commands::List => roster_cmds::handle_list(&resolve()?)?,
        Commands::Clear => roster_cmds::handle_clear(&resolve()?)?,
        Commands::Pick {
            from,
            exclude_gap,
            seed,
        } => {
            let exit_code = pick_cmd::handle_pick(&resolve()?, from, exclude_gap, seed)?;
            std::process::exit(exit_code);
        }
        Commands::History { cmd } => {
            let ctx = resolve()?;
            match cmd {
                HistoryCommands::Show => history_cmds::handle_history_show(&ctx)?,
                HistoryCommands::Reset => history_cmds::handle_history_reset(&ctx)?,
            }
        }
        Commands::Config { cmd } => match cmd {
            ConfigCommands::Show => config_cmds::handle_config_show(&resolve()?)?,
            ConfigCommands::Init { force } => config_cmds::handle_config_init(config_arg, force)?,
            ConfigCommands::Validate => {
                let exit_code =
                    config_cmds::handle_config_validate(config_arg, state_dir_arg, cli.format)?;
                std::process::exit(exit_code);
            }
        },
    }

    Ok(())
}
