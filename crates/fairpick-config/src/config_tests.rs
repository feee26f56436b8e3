use super::*;
use std::collections::HashMap;
use tempfile::tempdir;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_default_config() {
    let config = PickerConfig::default();
    assert_eq!(config.selection.exclude_gap, DEFAULT_EXCLUDE_GAP);
    assert!(config.state.dir.is_none());
}

#[test]
fn test_missing_file_yields_default() {
    let temp = tempdir().unwrap();
    let config = PickerConfig::load_from_path(&temp.path().join("absent.toml")).unwrap();
    assert_eq!(config, PickerConfig::default());
}

#[test]
fn test_load_full_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(
        &path,
        "[selection]\nexclude_gap = 4\n\n[state]\ndir = \"/srv/fairpick\"\n",
    )
    .unwrap();

    let config = PickerConfig::load_from_path(&path).unwrap();
    assert_eq!(config.selection.exclude_gap, 4);
    assert_eq!(config.state.dir, Some(PathBuf::from("/srv/fairpick")));
    assert_eq!(config.state_file(), PathBuf::from("/srv/fairpick/state.toml"));
}

#[test]
fn test_partial_file_keeps_defaults() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[state]\ndir = \"/tmp/x\"\n").unwrap();

    let config = PickerConfig::load_from_path(&path).unwrap();
    assert_eq!(config.selection.exclude_gap, DEFAULT_EXCLUDE_GAP);
}

#[test]
fn test_parse_error_names_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("broken.toml");
    std::fs::write(&path, "[selection\nexclude_gap = ").unwrap();

    let err = PickerConfig::load_from_path(&path).unwrap_err();
    assert!(format!("{err:#}").contains("broken.toml"));
}

#[test]
fn test_negative_gap_is_rejected() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[selection]\nexclude_gap = -1\n").unwrap();
    assert!(PickerConfig::load_from_path(&path).is_err());
}

#[test]
fn test_env_overrides_apply() {
    let mut config = PickerConfig::default();
    config
        .apply_env_overrides_with(lookup_from(&[
            (ENV_EXCLUDE_GAP, "0"),
            (ENV_STATE_DIR, "/var/lib/fairpick"),
        ]))
        .unwrap();
    assert_eq!(config.selection.exclude_gap, 0);
    assert_eq!(config.state_dir(), PathBuf::from("/var/lib/fairpick"));
}

#[test]
fn test_env_override_rejects_garbage_gap() {
    let mut config = PickerConfig::default();
    let err = config
        .apply_env_overrides_with(lookup_from(&[(ENV_EXCLUDE_GAP, "two")]))
        .unwrap_err();
    assert!(err.to_string().contains(ENV_EXCLUDE_GAP));
    assert_eq!(config.selection.exclude_gap, DEFAULT_EXCLUDE_GAP);
}

#[test]
fn test_env_override_rejects_empty_state_dir() {
    let mut config = PickerConfig::default();
    assert!(
        config
            .apply_env_overrides_with(lookup_from(&[(ENV_STATE_DIR, "  ")]))
            .is_err()
    );
}

#[test]
fn test_no_env_leaves_config_untouched() {
    let mut config = PickerConfig::default();
    config.apply_env_overrides_with(|_| None).unwrap();
    assert_eq!(config, PickerConfig::default());
}

#[test]
fn test_template_round_trips_to_defaults() {
    let config: PickerConfig = toml::from_str(&PickerConfig::default_template()).unwrap();
    assert_eq!(config, PickerConfig::default());
}

#[test]
fn test_write_template_refuses_overwrite() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("nested").join("config.toml");

    PickerConfig::write_template(&path, false).unwrap();
    assert!(path.exists());
    assert!(PickerConfig::write_template(&path, false).is_err());
    PickerConfig::write_template(&path, true).unwrap();
}
