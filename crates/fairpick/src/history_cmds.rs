use anyhow::Result;
use fairpick_core::HISTORY_CAPACITY;
use fairpick_core::types::OutputFormat;
use fairpick_state::{load_state, reset_history};

use crate::AppContext;

/// Handle `fairpick history show`.
pub(crate) fn handle_history_show(ctx: &AppContext) -> Result<()> {
    let state = load_state(&ctx.state_path)?;
    let history = state.history.history();

    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "history": history,
                "capacity": HISTORY_CAPACITY,
                "exclude_gap": ctx.config.selection.exclude_gap,
                "updated_at": state.updated_at,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            if history.is_empty() {
                eprintln!("No picks recorded yet.");
                return Ok(());
            }
            for (i, name) in history.iter().enumerate() {
                println!("{}. {}", i + 1, name);
            }
        }
    }
    Ok(())
}

/// Handle `fairpick history reset`.
pub(crate) fn handle_history_reset(ctx: &AppContext) -> Result<()> {
    let forgotten = reset_history(&ctx.state_path)?;
    match ctx.format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "forgotten": forgotten })),
        OutputFormat::Text => eprintln!("History reset ({forgotten} pick(s) forgotten)."),
    }
    Ok(())
}
