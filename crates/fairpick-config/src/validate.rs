use anyhow::{Result, bail};
use fairpick_core::HISTORY_CAPACITY;
use tracing::warn;

use crate::config::PickerConfig;

/// Validate a loaded configuration.
/// Returns Ok(()) if usable, or Err with a descriptive message.
pub fn validate_config(config: &PickerConfig) -> Result<()> {
    validate_state(config)?;
    warn_oversized_gap(config);
    Ok(())
}

fn validate_state(config: &PickerConfig) -> Result<()> {
    if let Some(dir) = &config.state.dir
        && dir.as_os_str().is_empty()
    {
        bail!("state.dir cannot be empty (omit it to use the default state directory)");
    }
    Ok(())
}

/// History never holds more than `HISTORY_CAPACITY` picks, so a larger gap
/// is accepted but cannot exclude more than that.
fn warn_oversized_gap(config: &PickerConfig) -> bool {
    let gap = config.selection.exclude_gap;
    if gap > HISTORY_CAPACITY {
        warn!(
            exclude_gap = gap,
            history_capacity = HISTORY_CAPACITY,
            "selection.exclude_gap exceeds history capacity; effective gap is capped"
        );
        return true;
    }
    false
}
