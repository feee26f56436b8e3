//! Picker configuration loading and validation (`config.toml`).

pub mod config;
pub mod paths;
pub mod validate;

pub use config::{PickerConfig, SelectionConfig, StateConfig};
pub use validate::validate_config;
