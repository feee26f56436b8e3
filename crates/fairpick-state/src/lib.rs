//! Durable picker state: the candidate roster and pick history.
//!
//! The core selector keeps history only in memory; this crate persists it
//! between runs in `{state_dir}/state.toml`, guarded by a blocking `flock`
//! so concurrent invocations are serialized.

pub mod roster;
pub mod store;

pub use roster::{
    PickOutcome, add_participants, clear_participants, load_state, pick, reset_history,
    roster_weights,
};
pub use store::{RosterState, read_state_shared, with_state_lock};
