use std::process::ExitCode;

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;

use uscc_validator::config::Config;
use uscc_validator::report;
use uscc_validator::validation::validate_batch;

/// Exit status when some codes were rejected
const EXIT_INVALID: u8 = 1;
/// Exit status when no candidates were found
const EXIT_EMPTY: u8 = 2;

/// Read and join all inputs, or standard input when none are given
async fn read_input(config: &Config) -> Result<String> {
    if config.inputs.is_empty() {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .context("Failed to read standard input")?;
        return Ok(text);
    }

    let mut parts = Vec::with_capacity(config.inputs.len());
    for path in &config.inputs {
        let text = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read input file {:?}", path))?;
        log::info!("Loaded {:?}", path);
        parts.push(text);
    }

    Ok(parts.join("\n"))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    if let Some(path) = &config.config_file {
        log::debug!("Using config file {:?}", path);
    }

    let text = read_input(&config).await?;
    let result = validate_batch(&text);

    print!("{}", report::render(&result, config.format)?);

    if let Some(path) = &config.output {
        if !report::write_rejections(path, &result)? {
            log::info!("Nothing to save");
        }
    }

    if result.is_empty_input() {
        return Ok(ExitCode::from(EXIT_EMPTY));
    }
    if result.all_valid() {
        return Ok(ExitCode::SUCCESS);
    }

    Ok(ExitCode::from(EXIT_INVALID))
}
