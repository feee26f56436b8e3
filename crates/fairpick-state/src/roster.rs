use anyhow::{Result, bail};
use chrono::Utc;
use fairpick_core::Selector;
use rand::Rng;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

use crate::store::{RosterState, read_state_shared, with_state_lock};

/// Result of one persisted pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickOutcome {
    pub winner: String,
    /// Entries in the pool, duplicates included.
    pub pool_size: usize,
    /// Candidates excluded for recency, most recent first.
    pub excluded: Vec<String>,
}

/// Snapshot of the persisted state. The file is never written.
pub fn load_state(state_path: &Path) -> Result<RosterState> {
    read_state_shared(state_path)
}

/// Append names to the roster. Repeating a name raises its weight.
///
/// Returns the updated roster.
pub fn add_participants(state_path: &Path, names: &[String]) -> Result<Vec<String>> {
    let names: Vec<String> = names.iter().map(|n| n.trim().to_string()).collect();
    if names.is_empty() {
        bail!("No names given");
    }
    if names.iter().any(String::is_empty) {
        bail!("Participant names cannot be blank");
    }

    with_state_lock(state_path, |state| {
        for name in &names {
            info!(participant = %name, "Participant added");
        }
        state.participants.extend(names);
        state.updated_at = Some(Utc::now());
        Ok(state.participants.clone())
    })
}

/// Empty the roster, keeping history. Returns how many entries were removed.
pub fn clear_participants(state_path: &Path) -> Result<usize> {
    with_state_lock(state_path, |state| {
        let removed = state.participants.len();
        state.participants.clear();
        state.updated_at = Some(Utc::now());
        debug!(removed, "Roster cleared");
        Ok(removed)
    })
}

/// Restart the fairness window. Returns how many picks were forgotten.
pub fn reset_history(state_path: &Path) -> Result<usize> {
    with_state_lock(state_path, |state| {
        let forgotten = state.history.len();
        state.history.clear();
        state.updated_at = Some(Utc::now());
        debug!(forgotten, "History reset");
        Ok(forgotten)
    })
}

/// Pick from the roster (or `pool_override`) and persist the new history.
///
/// Fails with the selector's `InvalidInput` when the pool is empty; the
/// state file is left untouched in that case.
pub fn pick<R: Rng>(
    state_path: &Path,
    exclude_gap: usize,
    pool_override: Option<&[String]>,
    rng: R,
) -> Result<PickOutcome> {
    with_state_lock(state_path, |state| {
        let pool = match pool_override {
            Some(pool) => pool.to_vec(),
            None => state.participants.clone(),
        };

        let mut selector = Selector::with_rng(exclude_gap, rng)
            .with_history(std::mem::take(&mut state.history));
        let excluded = selector.excluded(&pool);
        let winner = selector.select(&pool)?;

        state.history = selector.into_history();
        state.updated_at = Some(Utc::now());

        info!(
            winner = %winner,
            pool = pool.len(),
            excluded = ?excluded,
            "Picked participant"
        );
        Ok(PickOutcome {
            winner,
            pool_size: pool.len(),
            excluded,
        })
    })
}

/// Distinct names with their multiplicity, in first-appearance order.
pub fn roster_weights(participants: &[String]) -> Vec<(String, usize)> {
    let mut weights: Vec<(String, usize)> = Vec::new();
    for name in participants {
        match weights.iter_mut().find(|(n, _)| n == name) {
            Some((_, count)) => *count += 1,
            None => weights.push((name.clone(), 1)),
        }
    }
    weights
}

#[cfg(test)]
#[path = "roster_tests.rs"]
mod tests;
