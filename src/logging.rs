use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs;
use std::path::{Path, PathBuf};

/// `<local data dir>/verdict-fetch/logs`
pub fn default_log_dir() -> Result<PathBuf> {
    let dir = directories::BaseDirs::new()
        .ok_or_else(|| anyhow::anyhow!("Failed to get base directories"))?
        .data_local_dir()
        .join("verdict-fetch")
        .join("logs");
    Ok(dir)
}

pub fn log_file_name() -> String {
    format!("fetch_{}.log", chrono::Local::now().format("%Y%m%d_%H%M%S"))
}

/// Routes the `log` facade into a fresh timestamped file under `log_dir`.
///
/// Returns the path of the file being written.
pub fn setup_logging(log_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {:?}", log_dir))?;

    let log_file = log_dir.join(log_file_name());

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .set_location_level(LevelFilter::Debug)
        .build();

    let file = fs::File::create(&log_file)
        .with_context(|| format!("Failed to create log file {:?}", log_file))?;
    WriteLogger::init(LevelFilter::Info, config, file).context("Failed to install logger")?;

    Ok(log_file)
}
