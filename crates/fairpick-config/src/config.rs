//! Picker configuration (`~/.config/fairpick/config.toml`).
//!
//! Every section is optional; a missing file yields the defaults.
//! Environment variables override file values:
//! - `FAIRPICK_EXCLUDE_GAP`: distinct recent picks excluded per selection
//! - `FAIRPICK_STATE_DIR`: directory holding `state.toml`

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::paths;

/// Default number of distinct recent picks excluded from the next pick.
pub const DEFAULT_EXCLUDE_GAP: usize = 2;

pub const ENV_EXCLUDE_GAP: &str = "FAIRPICK_EXCLUDE_GAP";
pub const ENV_STATE_DIR: &str = "FAIRPICK_STATE_DIR";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerConfig {
    #[serde(default)]
    pub selection: SelectionConfig,
    #[serde(default)]
    pub state: StateConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Distinct recent picks excluded per selection (0 disables exclusion).
    #[serde(default = "default_exclude_gap")]
    pub exclude_gap: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            exclude_gap: DEFAULT_EXCLUDE_GAP,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateConfig {
    /// Override for the state directory. None = XDG state dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

fn default_exclude_gap() -> usize {
    DEFAULT_EXCLUDE_GAP
}

impl PickerConfig {
    /// Load config from `explicit` (or the default path), then apply
    /// environment overrides.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit.map(Path::to_path_buf).or_else(paths::config_path);
        let mut config = match path {
            Some(path) => Self::load_from_path(&path)?,
            None => Self::default(),
        };
        config.apply_env_overrides_with(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load config from a file. Returns `Default` if the file does not exist.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        Ok(config)
    }

    /// Apply overrides looked up through `lookup` (normally `std::env::var`).
    pub fn apply_env_overrides_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_EXCLUDE_GAP) {
            let gap = raw.trim().parse::<usize>().with_context(|| {
                format!("{ENV_EXCLUDE_GAP} must be a non-negative integer (got '{raw}')")
            })?;
            self.selection.exclude_gap = gap;
        }
        if let Some(dir) = lookup(ENV_STATE_DIR) {
            if dir.trim().is_empty() {
                bail!("{ENV_STATE_DIR} is set but empty");
            }
            self.state.dir = Some(PathBuf::from(dir));
        }
        Ok(())
    }

    /// Directory holding the persisted state file.
    pub fn state_dir(&self) -> PathBuf {
        self.state
            .dir
            .clone()
            .or_else(paths::state_dir)
            .unwrap_or_else(paths::state_dir_fallback)
    }

    /// Full path of the persisted state file.
    pub fn state_file(&self) -> PathBuf {
        self.state_dir().join(paths::STATE_FILE_NAME)
    }

    /// Generate default config TOML with comments as a template.
    pub fn default_template() -> String {
        format!(
            r#"# fairpick configuration
# Location: ~/.config/fairpick/config.toml

[selection]
# Number of distinct recent picks excluded from the next pick.
# 0 disables exclusion. History keeps the last 10 picks, so values
# above 10 behave like 10.
exclude_gap = {DEFAULT_EXCLUDE_GAP}

[state]
# Directory holding state.toml (roster and pick history).
# Defaults to ~/.local/state/fairpick.
# dir = "/var/lib/fairpick"
"#
        )
    }

    /// Write [`Self::default_template`] to `path`.
    ///
    /// Refuses to overwrite an existing file unless `force` is set.
    pub fn write_template(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            bail!(
                "Config already exists: {} (use --force to overwrite)",
                path.display()
            );
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        std::fs::write(path, Self::default_template())
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
