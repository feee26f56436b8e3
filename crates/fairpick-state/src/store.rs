//! `state.toml` model and `flock`-guarded access.
//!
//! Writers hold an exclusive lock for the whole read-modify-write cycle.
//! Readers take a shared lock and never write back.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use fairpick_core::HistoryManager;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, Write};
use std::os::unix::io::AsRawFd;
use std::path::Path;

/// Persisted roster and pick history.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterState {
    /// Candidate pool. A name listed k times carries k times the weight.
    #[serde(default)]
    pub participants: Vec<String>,
    /// Past picks, most recent last.
    #[serde(default)]
    pub history: HistoryManager<String>,
    /// When the state was last modified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Run `f` against the stored state under an exclusive lock.
///
/// A missing or empty file reads as the default state. The file is
/// rewritten only when `f` succeeds.
pub fn with_state_lock<F, T>(state_path: &Path, f: F) -> Result<T>
where
    F: FnOnce(&mut RosterState) -> Result<T>,
{
    if let Some(parent) = state_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(state_path)
        .with_context(|| format!("Cannot open {} for writing", state_path.display()))?;

    let _lock = StateLock::acquire(&file, LockMode::Exclusive)?;
    let mut state = decode(&file, state_path)?;
    let result = f(&mut state)?;
    overwrite(&file, &state)
        .with_context(|| format!("Cannot save {}", state_path.display()))?;
    Ok(result)
}

/// Read the stored state under a shared lock, without touching the file.
///
/// A missing file reads as the default state and is not created.
pub fn read_state_shared(state_path: &Path) -> Result<RosterState> {
    let file = match File::open(state_path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(RosterState::default()),
        Err(err) => {
            return Err(err).with_context(|| format!("Cannot open {}", state_path.display()));
        }
    };
    let _lock = StateLock::acquire(&file, LockMode::Shared)?;
    decode(&file, state_path)
}

#[derive(Debug, Clone, Copy)]
enum LockMode {
    Shared,
    Exclusive,
}

impl LockMode {
    fn operation(self) -> libc::c_int {
        match self {
            LockMode::Shared => libc::LOCK_SH,
            LockMode::Exclusive => libc::LOCK_EX,
        }
    }
}

/// Advisory lock on an open file, released on drop.
struct StateLock<'f> {
    file: &'f File,
}

impl<'f> StateLock<'f> {
    fn acquire(file: &'f File, mode: LockMode) -> Result<Self> {
        // SAFETY: the descriptor belongs to `file`, which outlives the guard.
        let ret = unsafe { libc::flock(file.as_raw_fd(), mode.operation()) };
        if ret != 0 {
            bail!(
                "Cannot lock state file ({mode:?}): {}",
                std::io::Error::last_os_error()
            );
        }
        Ok(Self { file })
    }
}

impl Drop for StateLock<'_> {
    fn drop(&mut self) {
        // SAFETY: same descriptor as in `acquire`.
        unsafe {
            libc::flock(self.file.as_raw_fd(), libc::LOCK_UN);
        }
    }
}

fn decode(mut file: &File, state_path: &Path) -> Result<RosterState> {
    let mut raw = String::new();
    file.read_to_string(&mut raw)
        .with_context(|| format!("Cannot read {}", state_path.display()))?;
    if raw.trim().is_empty() {
        return Ok(RosterState::default());
    }
    toml::from_str(&raw)
        .with_context(|| format!("Failed to parse state file: {}", state_path.display()))
}

fn overwrite(mut file: &File, state: &RosterState) -> Result<()> {
    let encoded = toml::to_string_pretty(state).context("Cannot encode roster state")?;
    file.set_len(0)?;
    file.rewind()?;
    file.write_all(encoded.as_bytes())?;
    file.flush()?;
    Ok(())
}
