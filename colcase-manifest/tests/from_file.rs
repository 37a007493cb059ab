//! Loading colcase.toml from disk.

use std::{fs, path::PathBuf};

use colcase_manifest::{ConversionConfig, Error};
use tempfile::TempDir;

#[test]
fn test_load_config_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("colcase.toml");
    fs::write(
        &path,
        r#"base_dir = "dumps"
files = ["04-data-users-01.sql"]

[columns]
userId = "user_id"
createdAt = "created_at"
"#,
    )
    .unwrap();

    let config = ConversionConfig::from_file(&path).unwrap();

    assert_eq!(config.base_dir, PathBuf::from("dumps"));
    assert_eq!(config.files, vec!["04-data-users-01.sql"]);
    let pairs: Vec<_> = config.columns.iter().collect();
    assert_eq!(
        pairs,
        vec![("userId", "user_id"), ("createdAt", "created_at")]
    );
}

#[test]
fn test_missing_config_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.toml");

    let err = ConversionConfig::from_file(&path).unwrap_err();

    match err.as_ref() {
        Error::Io { path: p, .. } => assert_eq!(p, &path),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_parse_error_names_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.toml");
    fs::write(&path, "files = [").unwrap();

    let err = ConversionConfig::from_file(&path).unwrap_err();

    match err.as_ref() {
        Error::Parse { src, .. } => assert_eq!(src.name(), path.display().to_string()),
        other => panic!("unexpected error: {other:?}"),
    }
}
