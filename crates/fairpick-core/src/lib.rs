//! Fairness-aware random selection: weighted by pool multiplicity, with
//! recently picked candidates excluded while others remain eligible.

pub mod error;
pub mod history;
pub mod selector;
pub mod shared;
pub mod types;

pub use error::SelectError;
pub use history::{HISTORY_CAPACITY, HistoryManager};
pub use selector::{Selector, compute_exclusions, would_exhaust_pool};
pub use shared::SharedSelector;
pub use types::OutputFormat;
