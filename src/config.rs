//! Configuration management for the credit code checker.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML config file (explicit path, project file, user file)
//!
//! Command-line values win over the config file, which wins over defaults.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::report::Format;

/// Config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".uscc.toml";

/// Command-line arguments for the credit code checker
#[derive(Debug, Parser)]
#[command(name = "uscc-check")]
#[command(about = "Validate Unified Social Credit Codes")]
#[command(version)]
pub struct Args {
    /// Files containing codes; standard input is read when none are given
    #[arg(help = "Input files (comma, space or newline separated codes)")]
    pub inputs: Vec<PathBuf>,

    /// Report format
    #[arg(long, value_enum, help = "Report format (text, json)")]
    pub format: Option<Format>,

    /// Where to save the rejection report
    #[arg(long, short, help = "Write rejected codes and reasons to this file")]
    pub output: Option<PathBuf>,

    /// Explicit config file
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(long, help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,
}

/// Settings read from a TOML config file
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub format: Option<Format>,
    pub output: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl FileConfig {
    /// Parse a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Invalid config file {:?}", path))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Input files, empty for standard input
    pub inputs: Vec<PathBuf>,
    pub format: Format,
    /// Rejection report destination
    pub output: Option<PathBuf>,
    pub log_level: String,
    /// Config file that was applied, if any
    pub config_file: Option<PathBuf>,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        // An explicit path must exist; discovered ones are optional
        let config_file = args.config.or_else(Self::discover_config_file);

        let file = match &config_file {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        Ok(Self::merge(args.inputs, args.format, args.output, args.log_level, file, config_file))
    }

    /// Combine explicit settings with a loaded config file
    fn merge(
        inputs: Vec<PathBuf>,
        format: Option<Format>,
        output: Option<PathBuf>,
        log_level: Option<String>,
        file: FileConfig,
        config_file: Option<PathBuf>,
    ) -> Self {
        Config {
            inputs,
            format: format.or(file.format).unwrap_or_default(),
            output: output.or(file.output),
            log_level: log_level
                .or(file.log_level)
                .unwrap_or_else(|| "warn".to_string()),
            config_file,
        }
    }

    /// Project file first, then the user config directory
    fn discover_config_file() -> Option<PathBuf> {
        let project = PathBuf::from(PROJECT_CONFIG_FILE);
        if project.is_file() {
            return Some(project);
        }

        let user = dirs::config_dir()?.join("uscc").join("config.toml");
        if user.is_file() {
            log::debug!("Using user config {:?}", user);
            return Some(user);
        }

        None
    }
}
