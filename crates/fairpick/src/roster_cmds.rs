use anyhow::Result;
use fairpick_core::types::OutputFormat;
use fairpick_state::{add_participants, clear_participants, load_state, roster_weights};

use crate::AppContext;

pub(crate) fn handle_add(ctx: &AppContext, names: Vec<String>) -> Result<()> {
    let roster = add_participants(&ctx.state_path, &names)?;
    match ctx.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({ "added": names, "participants": roster })
            );
        }
        OutputFormat::Text => {
            eprintln!(
                "Added {} name(s); roster now has {} entr{}.",
                names.len(),
                roster.len(),
                plural_y(roster.len())
            );
        }
    }
    Ok(())
}

pub(crate) fn handle_list(ctx: &AppContext) -> Result<()> {
    let state = load_state(&ctx.state_path)?;
    let weights = roster_weights(&state.participants);

    match ctx.format {
        OutputFormat::Json => {
            let weights: Vec<serde_json::Value> = weights
                .iter()
                .map(|(name, weight)| serde_json::json!({ "name": name, "weight": weight }))
                .collect();
            let output = serde_json::json!({
                "participants": state.participants,
                "weights": weights,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            if weights.is_empty() {
                eprintln!("The candidate list is empty.");
                return Ok(());
            }
            for (name, weight) in &weights {
                if *weight > 1 {
                    println!("{name} (x{weight})");
                } else {
                    println!("{name}");
                }
            }
        }
    }
    Ok(())
}

pub(crate) fn handle_clear(ctx: &AppContext) -> Result<()> {
    let removed = clear_participants(&ctx.state_path)?;
    match ctx.format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "removed": removed })),
        OutputFormat::Text => eprintln!("Cleared {removed} entr{}.", plural_y(removed)),
    }
    Ok(())
}

fn plural_y(n: usize) -> &'static str {
    if n == 1 { "y" } else { "ies" }
}
