//! Bounded chronological ledger of past selections.
//!
//! Entries are kept oldest-first; the most recent pick sits at the tail.
//! The ledger never holds more than [`HISTORY_CAPACITY`] entries: appends
//! and seeding both trim from the head.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Maximum number of past selections retained.
pub const HISTORY_CAPACITY: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryManager<T> {
    history: Vec<T>,
}

impl<T> HistoryManager<T> {
    pub fn new() -> Self {
        Self {
            history: Vec::with_capacity(HISTORY_CAPACITY + 1),
        }
    }

    /// Append a pick to the tail, dropping the oldest entries past capacity.
    pub fn record(&mut self, candidate: T) {
        self.history.push(candidate);
        self.trim();
    }

    /// Current history, most recent last.
    pub fn history(&self) -> &[T] {
        &self.history
    }

    /// Overwrite the history, e.g. to restore persisted state.
    ///
    /// Only the trailing [`HISTORY_CAPACITY`] entries are kept.
    pub fn set_history<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.history = entries.into_iter().collect();
        self.trim();
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Most recent pick, if any.
    pub fn last(&self) -> Option<&T> {
        self.history.last()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.history
    }

    fn trim(&mut self) {
        if self.history.len() > HISTORY_CAPACITY {
            let excess = self.history.len() - HISTORY_CAPACITY;
            self.history.drain(..excess);
        }
    }
}

impl<T> Default for HistoryManager<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for HistoryManager<T> {
    fn from(entries: Vec<T>) -> Self {
        let mut manager = Self { history: entries };
        manager.trim();
        manager
    }
}

impl<T> FromIterator<T> for HistoryManager<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Serialize> Serialize for HistoryManager<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.history.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for HistoryManager<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}
