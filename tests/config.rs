use std::fs::File;
use std::io::Write;

use mortar_calculator::config::{BallisticsConfig, ConfigError, load_ballistics_config};

#[test]
fn bundled_config_matches_defaults() {
    let config = load_ballistics_config("configs/ballistics.toml").expect("bundled config");
    assert_eq!(config, BallisticsConfig::default());
}

#[test]
fn yaml_config_overrides_selected_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("moon.yaml");
    let mut file = File::create(&path).expect("yaml create");
    writeln!(file, "gravity: 32.4").unwrap();
    writeln!(file, "charge_velocities: [300.0, 350.0, 400.0]").unwrap();
    drop(file);

    let config = load_ballistics_config(&path).expect("yaml config");
    assert_eq!(config.gravity, 32.4);
    assert_eq!(config.charges().len(), 3);
    assert_eq!(config.angle_min_deg, 44.25);
    assert_eq!(config.angle_max_deg, 85.25);
}

#[test]
fn invalid_values_are_rejected_on_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "angle_max_deg = 120.0\n").unwrap();

    match load_ballistics_config(&path) {
        Err(ConfigError::Invalid(msg)) => assert!(msg.contains("angle_max_deg"), "{msg}"),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("garbled.toml");
    std::fs::write(&path, "gravity = = 3\n").unwrap();

    assert!(matches!(
        load_ballistics_config(&path),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.yaml");
    assert!(matches!(
        load_ballistics_config(&path),
        Err(ConfigError::Io(_))
    ));
}
