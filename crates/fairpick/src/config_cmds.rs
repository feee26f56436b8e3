use anyhow::{Result, anyhow};
use fairpick_config::{PickerConfig, validate_config};
use fairpick_core::types::OutputFormat;
use std::path::Path;

use crate::{AppContext, load_config};

pub(crate) fn handle_config_show(ctx: &AppContext) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            let mut value = serde_json::to_value(&ctx.config)?;
            value["state_file"] = serde_json::json!(ctx.state_path);
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text => {
            print!("{}", toml::to_string_pretty(&ctx.config)?);
            eprintln!("# state file: {}", ctx.state_path.display());
        }
    }
    Ok(())
}

/// Write the template without reading the existing file, so a broken
/// config can be replaced with `--force`.
pub(crate) fn handle_config_init(config: Option<&Path>, force: bool) -> Result<()> {
    let path = config
        .map(Path::to_path_buf)
        .or_else(fairpick_config::paths::config_path)
        .ok_or_else(|| anyhow!("Cannot determine config directory; pass --config <PATH>"))?;
    PickerConfig::write_template(&path, force)?;
    eprintln!("Wrote config template to: {}", path.display());
    Ok(())
}

/// Load and check the config, reporting problems in the chosen format.
///
/// Returns the process exit code: 0 when valid, 1 otherwise.
pub(crate) fn handle_config_validate(
    config: Option<&Path>,
    state_dir: Option<&Path>,
    format: OutputFormat,
) -> Result<i32> {
    let outcome = load_config(config, state_dir).and_then(|config| validate_config(&config));
    match (format, &outcome) {
        (OutputFormat::Json, Ok(())) => println!("{}", serde_json::json!({ "valid": true })),
        (OutputFormat::Json, Err(err)) => println!(
            "{}",
            serde_json::json!({ "valid": false, "error": format!("{err:#}") })
        ),
        (OutputFormat::Text, Ok(())) => eprintln!("Configuration is valid."),
        (OutputFormat::Text, Err(err)) => eprintln!("Configuration is invalid: {err:#}"),
    }
    Ok(if outcome.is_ok() { 0 } else { 1 })
}
