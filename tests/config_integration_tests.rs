//! Tests for config file loading and precedence
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tempfile::TempDir;
use uscc_validator::config::{Args, Config, FileConfig};
use uscc_validator::report::Format;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("uscc.toml");
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn test_explicit_config_file_is_applied() {
    let dir = TempDir::new().expect("create temp dir");
    let path = write_config(&dir, "format = \"json\"\noutput = \"rejected.txt\"\nlog_level = \"debug\"\n");

    let args = Args::parse_from(["uscc-check", "--config", path.to_str().expect("utf-8 path")]);
    let config = Config::from_args(args).expect("create config");

    assert_eq!(config.config_file, Some(path));
    assert_eq!(config.format, Format::Json);
    assert_eq!(config.output, Some(PathBuf::from("rejected.txt")));
    assert_eq!(config.log_level, "debug");
    assert!(config.inputs.is_empty());
}

#[test]
fn test_cli_flags_override_config_file() {
    let dir = TempDir::new().expect("create temp dir");
    let path = write_config(&dir, "format = \"json\"\n");

    let args = Args::parse_from([
        "uscc-check",
        "--config",
        path.to_str().expect("utf-8 path"),
        "--format",
        "text",
        "codes.txt",
    ]);
    let config = Config::from_args(args).expect("create config");

    assert_eq!(config.format, Format::Text);
    assert_eq!(config.inputs, vec![PathBuf::from("codes.txt")]);
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let dir = TempDir::new().expect("create temp dir");
    let missing = dir.path().join("absent.toml");

    let args = Args::parse_from(["uscc-check", "--config", missing.to_str().expect("utf-8 path")]);
    assert!(Config::from_args(args).is_err());
}

#[test]
fn test_malformed_config_is_an_error() {
    let dir = TempDir::new().expect("create temp dir");
    let path = write_config(&dir, "format = \"yaml\"\n");

    assert!(FileConfig::load(&path).is_err());
}
