//! Thread-safe handle around a single [`Selector`].
//!
//! `select` reads and rewrites history, so concurrent callers sharing one
//! selector must be serialized. Clones share the same underlying state.

use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::SelectError;
use crate::history::HistoryManager;
use crate::selector::Selector;

#[derive(Debug)]
pub struct SharedSelector<T, R = StdRng> {
    inner: Arc<Mutex<Selector<T, R>>>,
}

impl<T, R> Clone for SharedSelector<T, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, R> SharedSelector<T, R>
where
    T: Eq + Hash + Clone,
    R: Rng,
{
    pub fn new(selector: Selector<T, R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(selector)),
        }
    }

    /// Pick under the lock; see [`Selector::select`].
    pub fn select(&self, pool: &[T]) -> Result<T, SelectError> {
        self.lock().select(pool)
    }

    /// Copy of the current history, most recent last.
    pub fn history(&self) -> Vec<T> {
        self.lock().history_manager().history().to_vec()
    }

    pub fn clear_history(&self) {
        self.lock().history_manager_mut().clear();
    }

    pub fn replace_history(&self, history: HistoryManager<T>) {
        *self.lock().history_manager_mut() = history;
    }

    // Poisoning is ignored: history stays within capacity even if a
    // holder panicked.
    fn lock(&self) -> MutexGuard<'_, Selector<T, R>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T, R> From<Selector<T, R>> for SharedSelector<T, R>
where
    T: Eq + Hash + Clone,
    R: Rng,
{
    fn from(selector: Selector<T, R>) -> Self {
        Self::new(selector)
    }
}
