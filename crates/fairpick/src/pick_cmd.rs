use anyhow::Result;
use fairpick_core::SelectError;
use fairpick_core::types::OutputFormat;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::warn;

use crate::AppContext;

/// Exit code when there is nobody to pick from.
const EXIT_EMPTY_POOL: i32 = 2;

/// Handle `fairpick pick`. Returns the process exit code.
///
/// An empty pool is reported to the user and not retried: the same pool
/// would fail again.
pub(crate) fn handle_pick(
    ctx: &AppContext,
    from: Option<Vec<String>>,
    exclude_gap: Option<usize>,
    seed: Option<u64>,
) -> Result<i32> {
    let exclude_gap = exclude_gap.unwrap_or(ctx.config.selection.exclude_gap);
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let pool: Option<Vec<String>> = from.map(|names| {
        names
            .into_iter()
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .collect()
    });

    let outcome = match fairpick_state::pick(&ctx.state_path, exclude_gap, pool.as_deref(), rng)
    {
        Ok(outcome) => outcome,
        Err(err) if err.downcast_ref::<SelectError>().is_some() => {
            warn!("Pick requested with an empty pool: {err}");
            match ctx.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::json!({ "error": "empty_pool" }));
                }
                OutputFormat::Text => {
                    eprintln!("The candidate list is empty. Add names with `fairpick add`.");
                }
            }
            return Ok(EXIT_EMPTY_POOL);
        }
        Err(err) => return Err(err),
    };

    match ctx.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        OutputFormat::Text => {
            println!("{}", outcome.winner);
            if !outcome.excluded.is_empty() {
                eprintln!("(skipped recent: {})", outcome.excluded.join(", "));
            }
        }
    }
    Ok(0)
}
