// Loading skyline configuration from disk

use std::fs;

use skyline_wasm::{Skyline, SkylineConfig, SkylineError};
use tempfile::TempDir;

#[test]
fn test_load_yaml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("skyline.yaml");
    fs::write(&path, "line_width: 2.5\nnorth_color: \"#00ff00\"\n").unwrap();

    let config = SkylineConfig::from_path(&path).unwrap();
    assert_eq!(config.line_width, 2.5);
    assert_eq!(config.north_color, "#00ff00");
    assert_eq!(config.south_color, SkylineConfig::default().south_color);
}

#[test]
fn test_load_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("skyline.json");
    fs::write(&path, r#"{"split_epsilon": 0.01}"#).unwrap();

    let config = SkylineConfig::from_path(&path).unwrap();
    let skyline = Skyline::from_config(&config);
    assert_eq!(skyline.north().epsilon(), 0.01);
}

#[test]
fn test_unknown_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("skyline.toml");
    fs::write(&path, "line_width = 1").unwrap();

    assert!(matches!(
        SkylineConfig::from_path(&path),
        Err(SkylineError::InvalidConfig(_))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = SkylineConfig::from_path(dir.path().join("absent.yaml"));
    assert!(matches!(result, Err(SkylineError::Io(_))));
}
