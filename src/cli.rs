use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::{Settings, DEFAULT_OUTPUT, DEFAULT_TIMEOUT_SECS, DEFAULT_URL};

#[derive(Debug, Parser)]
#[command(name = "verdict-fetch", version, about = "Download the-verdict.txt and save it locally")]
pub struct Cli {
    /// URL to download.
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// Where to write the downloaded file.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Request timeout in seconds.
    #[arg(
        long,
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Directory for the log file (defaults to the local data dir).
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Do not write a log file.
    #[arg(long, conflicts_with = "log_dir")]
    pub no_log_file: bool,
}

impl Cli {
    pub fn into_settings(self) -> Settings {
        Settings {
            url: self.url,
            output: self.output,
            timeout: Duration::from_secs(self.timeout),
            ..Settings::default()
        }
    }
}
