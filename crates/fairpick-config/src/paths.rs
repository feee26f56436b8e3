use std::path::PathBuf;

/// XDG app name used for config and state directories.
pub const APP_NAME: &str = "fairpick";

/// Name of the config file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Name of the persisted roster/history file inside the state directory.
pub const STATE_FILE_NAME: &str = "state.toml";

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

/// `~/.config/fairpick` (platform equivalent elsewhere).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Default config file path, if a home directory can be determined.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// `~/.local/state/fairpick`, falling back to the local data dir on
/// platforms without an XDG state dir (e.g. macOS).
pub fn state_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| {
        dirs.state_dir()
            .unwrap_or_else(|| dirs.data_local_dir())
            .to_path_buf()
    })
}

/// Used when no home directory exists at all (minimal containers).
pub fn state_dir_fallback() -> PathBuf {
    std::env::temp_dir().join(format!("{APP_NAME}-state"))
}
