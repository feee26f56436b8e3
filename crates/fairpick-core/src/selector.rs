//! Weighted random selection with recency exclusion.
//!
//! A pick proceeds in one synchronous step:
//! 1. compute the distinct values of the pool
//! 2. fold over history tail-to-head into an exclusion set
//! 3. filter the pool (duplicates kept, so multiplicity stays the weight)
//! 4. sample uniformly over the filtered entries
//! 5. record the pick

use std::collections::HashSet;
use std::hash::Hash;
use std::ops::ControlFlow;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::SelectError;
use crate::history::HistoryManager;

/// Whether excluding one more distinct candidate would leave nothing eligible.
///
/// `excluded` is always a subset of the pool's distinct values, so the
/// remaining eligible distinct count is `distinct_in_pool - excluded`.
pub fn would_exhaust_pool(distinct_in_pool: usize, excluded: usize) -> bool {
    excluded + 1 >= distinct_in_pool
}

/// Build the set of candidates excluded from the next pick.
///
/// Walks `history` from the most recent entry backward. Entries absent from
/// the pool or already excluded are skipped. Each new distinct entry is
/// committed unless [`would_exhaust_pool`] says it would empty the eligible
/// set, in which case the walk stops. The walk also stops once
/// `exclude_gap` distinct candidates are excluded.
pub fn compute_exclusions<'h, T>(pool: &[T], history: &'h [T], exclude_gap: usize) -> HashSet<&'h T>
where
    T: Eq + Hash,
{
    if exclude_gap == 0 {
        return HashSet::new();
    }

    let distinct: HashSet<&T> = pool.iter().collect();
    let walk = history
        .iter()
        .rev()
        .try_fold(HashSet::new(), |mut excluded, entry| {
            if !distinct.contains(entry) || excluded.contains(entry) {
                return ControlFlow::Continue(excluded);
            }
            if would_exhaust_pool(distinct.len(), excluded.len()) {
                return ControlFlow::Break(excluded);
            }
            excluded.insert(entry);
            if excluded.len() >= exclude_gap {
                ControlFlow::Break(excluded)
            } else {
                ControlFlow::Continue(excluded)
            }
        });

    match walk {
        ControlFlow::Continue(excluded) | ControlFlow::Break(excluded) => excluded,
    }
}

/// Fair random picker over a caller-supplied pool.
///
/// Generic over the candidate type and the randomness source. Use
/// [`Selector::with_seed`] or [`Selector::with_rng`] for reproducible runs.
#[derive(Debug, Clone)]
pub struct Selector<T, R = StdRng> {
    exclude_gap: usize,
    history_manager: HistoryManager<T>,
    rng: R,
}

impl<T> Selector<T, StdRng>
where
    T: Eq + Hash + Clone,
{
    /// Selector with empty history and an OS-seeded generator.
    pub fn new(exclude_gap: usize) -> Self {
        Self::with_rng(exclude_gap, StdRng::from_os_rng())
    }

    pub fn with_seed(exclude_gap: usize, seed: u64) -> Self {
        Self::with_rng(exclude_gap, StdRng::seed_from_u64(seed))
    }
}

impl<T, R> Selector<T, R>
where
    T: Eq + Hash + Clone,
    R: Rng,
{
    pub fn with_rng(exclude_gap: usize, rng: R) -> Self {
        Self {
            exclude_gap,
            history_manager: HistoryManager::new(),
            rng,
        }
    }

    /// Replace the history, e.g. with one restored from durable storage.
    pub fn with_history(mut self, history_manager: HistoryManager<T>) -> Self {
        self.history_manager = history_manager;
        self
    }

    pub fn exclude_gap(&self) -> usize {
        self.exclude_gap
    }

    pub fn history_manager(&self) -> &HistoryManager<T> {
        &self.history_manager
    }

    pub fn history_manager_mut(&mut self) -> &mut HistoryManager<T> {
        &mut self.history_manager
    }

    pub fn into_history(self) -> HistoryManager<T> {
        self.history_manager
    }

    /// Pool entries eligible for the next pick, duplicates preserved.
    ///
    /// Read-only: nothing is sampled and history is untouched.
    pub fn eligible<'p>(&self, pool: &'p [T]) -> Vec<&'p T> {
        let excluded = compute_exclusions(pool, self.history_manager.history(), self.exclude_gap);
        pool.iter().filter(|c| !excluded.contains(*c)).collect()
    }

    /// Candidates that would be excluded from the next pick.
    pub fn excluded(&self, pool: &[T]) -> Vec<T> {
        let excluded = compute_exclusions(pool, self.history_manager.history(), self.exclude_gap);
        // Keep history order (most recent first) for stable reporting.
        let mut ordered = Vec::with_capacity(excluded.len());
        for entry in self.history_manager.history().iter().rev() {
            if excluded.contains(entry) && !ordered.contains(entry) {
                ordered.push(entry.clone());
            }
        }
        ordered
    }

    /// Pick one candidate from `pool` and record it.
    ///
    /// Fails only when `pool` is empty.
    pub fn select(&mut self, pool: &[T]) -> Result<T, SelectError> {
        if pool.is_empty() {
            return Err(SelectError::empty_pool());
        }

        let eligible = self.eligible(pool);
        let first = eligible.first().copied().ok_or_else(SelectError::empty_pool)?;

        // One distinct survivor: no need to consume randomness.
        let picked = if eligible.iter().all(|c| *c == first) {
            first
        } else {
            eligible
                .choose(&mut self.rng)
                .copied()
                .ok_or_else(SelectError::empty_pool)?
        };

        debug!(
            pool = pool.len(),
            eligible = eligible.len(),
            exclude_gap = self.exclude_gap,
            "Selected candidate"
        );

        let picked = picked.clone();
        self.history_manager.record(picked.clone());
        Ok(picked)
    }
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
